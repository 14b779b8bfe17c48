use serde::{Serialize, Deserialize};
use std::f64::consts::E;

/// Steepness of the bipolar sigmoid shared by the network and the perceptron.
pub const DEFAULT_STEEPNESS: f64 = 6.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ActivationFunction {
    /// `2 / (1 + e^(-steepness * x)) - 1`, bounded in (-1, 1).
    BipolarSigmoid { steepness: f64 },
    /// Pass-through; the input layer uses this to hand raw values downstream.
    Identity,
}

impl Default for ActivationFunction {
    fn default() -> Self {
        ActivationFunction::BipolarSigmoid { steepness: DEFAULT_STEEPNESS }
    }
}

impl ActivationFunction {
    pub fn function(&self, x: f64) -> f64 {
        match self {
            ActivationFunction::BipolarSigmoid { steepness } => {
                2.0 / (1.0 + E.powf(-steepness * x)) - 1.0
            }
            ActivationFunction::Identity => x,
        }
    }

    /// Derivative evaluated at the raw input `x`.
    pub fn derivative(&self, x: f64) -> f64 {
        self.derivative_from_output(self.function(x))
    }

    /// Derivative expressed through an already computed activation `s = f(x)`.
    ///
    /// Backprop calls this with a neuron's stored output, so that output must
    /// come from the most recent forward pass.
    pub fn derivative_from_output(&self, s: f64) -> f64 {
        match self {
            ActivationFunction::BipolarSigmoid { .. } => 1.0 - s * s,
            ActivationFunction::Identity => 1.0,
        }
    }
}

/// The default steep sigmoid.
pub fn sigmoid(x: f64) -> f64 {
    ActivationFunction::default().function(x)
}

/// `1 - sigmoid(x)^2`.
pub fn derivative(x: f64) -> f64 {
    ActivationFunction::default().derivative(x)
}
