use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

use crate::data::Pattern;
use crate::network::{Network, NetworkConfig};
use crate::train::epoch_stats::{EpochStats, TrainState};

/// Online backprop trainer with a restart escape hatch.
///
/// Owns the network and the generator every weight initialisation draws
/// from, so a seeded trainer is fully reproducible.
pub struct Trainer {
    network: Network,
    rng: StdRng,
    config: NetworkConfig,
    iteration: usize,
    restarts: usize,
    state: TrainState,
}

impl Trainer {
    /// Seeds from `config.seed`, or from OS entropy when unset.
    pub fn new(config: NetworkConfig) -> Trainer {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Trainer::with_rng(config, rng)
    }

    pub fn with_rng(config: NetworkConfig, mut rng: StdRng) -> Trainer {
        let network = Network::new(&config, &mut rng);
        info!(
            input_dims = config.input_dims,
            hidden_dims = config.hidden_dims,
            "network initialised"
        );
        Trainer {
            network,
            rng,
            config,
            iteration: 0,
            restarts: 0,
            state: TrainState::Training,
        }
    }

    /// Rebuilds every layer with fresh random weights and resets the iteration count.
    pub fn initialise(&mut self) {
        self.network = Network::new(&self.config, &mut self.rng);
        self.iteration = 0;
        info!(restarts = self.restarts, "network initialised");
    }

    pub fn network(&self) -> &Network {
        &self.network
    }

    pub fn network_mut(&mut self) -> &mut Network {
        &mut self.network
    }

    pub fn into_network(self) -> Network {
        self.network
    }

    pub fn config(&self) -> &NetworkConfig {
        &self.config
    }

    pub fn iteration(&self) -> usize {
        self.iteration
    }

    pub fn restarts(&self) -> usize {
        self.restarts
    }

    pub fn state(&self) -> TrainState {
        self.state
    }

    /// One online sweep: a forward pass and a weight update per pattern.
    /// Returns the summed squared error of the sweep.
    pub fn run_epoch(&mut self, patterns: &[Pattern]) -> f64 {
        let mut error = 0.0;
        for pattern in patterns {
            let delta = pattern.output() - self.network.activate(pattern);
            self.network.adjust_weights(delta);
            error += delta * delta;
        }
        error
    }

    /// Runs one epoch and advances the state machine.
    ///
    /// Convergence is checked before the restart budget, so a converged
    /// epoch is never discarded by a coinciding restart. The classic
    /// increment-restart-then-test loop differs here: it could stop with
    /// freshly randomized weights.
    pub fn step(&mut self, patterns: &[Pattern]) -> EpochStats {
        let error = self.run_epoch(patterns);
        let iteration = self.iteration;

        self.state = if error <= self.config.target_error {
            TrainState::Converged
        } else {
            self.iteration += 1;
            if self.iteration > self.config.restart_after {
                self.restarts += 1;
                self.initialise();
                TrainState::Restarting
            } else {
                TrainState::Training
            }
        };

        debug!(iteration, error, state = ?self.state, "epoch complete");
        EpochStats {
            iteration,
            error,
            state: self.state,
            restarts: self.restarts,
        }
    }

    /// Trains until the epoch error reaches the target, reporting every epoch.
    ///
    /// There is no absolute bound: a network that never converges keeps
    /// restarting forever.
    pub fn train<F>(&mut self, patterns: &[Pattern], mut on_epoch: F) -> EpochStats
    where
        F: FnMut(&EpochStats),
    {
        loop {
            let stats = self.step(patterns);
            on_epoch(&stats);
            if stats.state == TrainState::Converged {
                info!(
                    iteration = stats.iteration,
                    error = stats.error,
                    restarts = stats.restarts,
                    "training converged"
                );
                return stats;
            }
        }
    }
}
