use serde::{Serialize, Deserialize};

/// Where the training loop stands after an epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrainState {
    /// Epoch error is still above the target; keep sweeping.
    Training,
    /// Epoch error reached the target; the network is ready for prediction.
    Converged,
    /// Iteration budget ran out; the weights were just re-randomized.
    Restarting,
}

/// Per-epoch report handed to the caller after every sweep over the patterns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EpochStats {
    /// Iteration number of this epoch within the current initialisation, 0-based.
    pub iteration: usize,
    /// Σ (expected − actual)² over every pattern in the epoch.
    pub error: f64,
    /// State after this epoch's convergence and restart checks.
    pub state: TrainState,
    /// Restarts performed so far, including one triggered by this epoch.
    pub restarts: usize,
}
