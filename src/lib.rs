pub mod activation;
pub mod layers;
pub mod data;
pub mod network;
pub mod train;
pub mod perceptron;
pub mod predict;
pub mod error;

// Convenience re-exports
pub use activation::{ActivationFunction, sigmoid, derivative};
pub use layers::{Layer, Neuron};
pub use data::{Pattern, load_patterns, load_patterns_file};
pub use network::{Network, NetworkConfig};
pub use train::{Trainer, TrainState, EpochStats};
pub use perceptron::SingleLayerPerception;
pub use predict::{LineSource, ReaderSource, run_prediction_loop};
pub use error::{Error, PatternError, LoadError, ConfigError};
