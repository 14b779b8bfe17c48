use std::path::Path;

use serde::{Serialize, Deserialize};

use crate::error::ConfigError;

/// Shape and training hyperparameters for a `Network`.
///
/// Every field has a default, so a JSON config file only needs the keys it
/// wants to override:
///
/// ```json
/// { "hidden_dims": 3, "seed": 42 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    /// Number of input coordinates per pattern.
    pub input_dims: usize,
    /// Neurons in the single hidden layer.
    pub hidden_dims: usize,
    pub learning_rate: f64,
    /// Epochs without convergence before the weights are re-randomized.
    pub restart_after: usize,
    /// Summed squared epoch error at or below which training stops.
    pub target_error: f64,
    /// Seed for weight initialisation; `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        NetworkConfig {
            input_dims: 2,
            hidden_dims: 2,
            learning_rate: 0.1,
            restart_after: 2000,
            target_error: 0.1,
            seed: None,
        }
    }
}

impl NetworkConfig {
    pub fn from_json_str(json: &str) -> Result<NetworkConfig, ConfigError> {
        let config: NetworkConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and validates a config from a JSON file.
    pub fn load_json<P: AsRef<Path>>(path: P) -> Result<NetworkConfig, ConfigError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let reader = std::io::BufReader::new(file);
        let config: NetworkConfig = serde_json::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.input_dims == 0 {
            return Err(ConfigError::Invalid("input_dims must be at least 1".into()));
        }
        if self.hidden_dims == 0 {
            return Err(ConfigError::Invalid("hidden_dims must be at least 1".into()));
        }
        if !(self.learning_rate > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "learning_rate must be positive, got {}",
                self.learning_rate
            )));
        }
        if !(self.target_error >= 0.0) {
            return Err(ConfigError::Invalid(format!(
                "target_error must be non-negative, got {}",
                self.target_error
            )));
        }
        Ok(())
    }
}
