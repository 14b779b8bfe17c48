use rand::Rng;

use crate::activation::ActivationFunction;

/// A single weighted-sum unit with one weight per upstream signal.
///
/// `output` and `error_signal` hold the results of the most recent
/// `activate` / `adjust_weights` calls; backprop reads both, so every
/// neuron must be activated forward before any backward pass touches it.
#[derive(Debug, Clone)]
pub struct Neuron {
    pub weights: Vec<f64>,
    pub output: f64,
    pub error_signal: f64,
    pub activator: ActivationFunction,
}

impl Neuron {
    /// Creates a neuron with `input_size` weights drawn uniformly from [0, 1).
    pub fn new<R: Rng + ?Sized>(input_size: usize, activation: ActivationFunction, rng: &mut R) -> Neuron {
        let weights = (0..input_size).map(|_| rng.gen::<f64>()).collect();
        Neuron::with_weights(weights, activation)
    }

    pub fn with_weights(weights: Vec<f64>, activation: ActivationFunction) -> Neuron {
        Neuron {
            weights,
            output: 0.0,
            error_signal: 0.0,
            activator: activation,
        }
    }

    /// Input-layer unit: a single fixed unit weight and identity activation.
    pub fn passthrough() -> Neuron {
        Neuron::with_weights(vec![1.0], ActivationFunction::Identity)
    }

    pub fn input_size(&self) -> usize {
        self.weights.len()
    }

    /// Forward step: `output = f(Σ wᵢ·xᵢ)`. No bias term.
    ///
    /// # Panics
    /// Panics if `upstream` does not have one value per weight.
    pub fn activate(&mut self, upstream: &[f64]) -> f64 {
        assert_eq!(
            self.weights.len(),
            upstream.len(),
            "neuron has {} weights but received {} upstream signals",
            self.weights.len(),
            upstream.len()
        );
        let sum: f64 = self.weights.iter().zip(upstream).map(|(w, x)| w * x).sum();
        self.output = self.activator.function(sum);
        self.output
    }

    /// Backward step: `wᵢ += lr · error · f'(output) · xᵢ`, then remembers `error`
    /// so downstream-to-upstream feedback can be computed from it.
    ///
    /// # Panics
    /// Panics if `upstream` does not have one value per weight.
    pub fn adjust_weights(&mut self, error_signal: f64, upstream: &[f64], learning_rate: f64) {
        assert_eq!(
            self.weights.len(),
            upstream.len(),
            "neuron has {} weights but received {} upstream signals",
            self.weights.len(),
            upstream.len()
        );
        self.error_signal = error_signal;
        let slope = self.activator.derivative_from_output(self.output);
        for (w, x) in self.weights.iter_mut().zip(upstream) {
            *w += learning_rate * error_signal * slope * x;
        }
    }

    /// This neuron's share of blame handed back to the upstream neuron that
    /// feeds weight `index`: `error · w[index] · f'(upstream.output)`.
    pub fn error_feedback(&self, index: usize, upstream: &Neuron) -> f64 {
        self.error_signal
            * self.weights[index]
            * upstream.activator.derivative_from_output(upstream.output)
    }
}
