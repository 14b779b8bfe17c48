pub mod activation;

pub use activation::{ActivationFunction, sigmoid, derivative, DEFAULT_STEEPNESS};
