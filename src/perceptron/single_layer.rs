use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::activation::sigmoid;
use crate::data::Pattern;

/// Fixed step size of the delta rule.
pub const LEARNING_RATE: f64 = 0.1;

/// A single neuron trained with the plain delta rule.
///
/// Inputs are cleared and refilled by the caller for every example; weights
/// are created lazily on the first `learn` and persist across examples.
/// Unlike `Neuron`, `teach` ignores the activation slope.
pub struct SingleLayerPerception {
    inputs: Vec<f64>,
    weights: Vec<f64>,
    initialized: bool,
    rng: StdRng,
}

impl SingleLayerPerception {
    pub fn new(rng: StdRng) -> SingleLayerPerception {
        SingleLayerPerception {
            inputs: Vec::new(),
            weights: Vec::new(),
            initialized: false,
            rng,
        }
    }

    pub fn with_seed(seed: u64) -> SingleLayerPerception {
        SingleLayerPerception::new(StdRng::seed_from_u64(seed))
    }

    pub fn add_input(&mut self, input: f64) {
        self.inputs.push(input);
    }

    pub fn clear_inputs(&mut self) {
        self.inputs.clear();
    }

    /// Appends one random weight in [0, 1) per current input.
    ///
    /// Only `learn` guards this with the `initialized` flag. Calling it
    /// directly again appends another full set, leaving more weights than
    /// inputs; the surplus is never read.
    pub fn initialize(&mut self) {
        for _ in 0..self.inputs.len() {
            self.weights.push(self.rng.gen::<f64>());
        }
        self.initialized = true;
    }

    /// `sigmoid(Σ inputᵢ · weightᵢ)`, initializing weights on first use.
    ///
    /// # Panics
    /// Panics if more inputs were added than weights exist.
    pub fn learn(&mut self) -> f64 {
        if !self.initialized {
            self.initialize();
        }
        self.check_arity();
        let sum: f64 = self.inputs.iter().zip(&self.weights).map(|(x, w)| x * w).sum();
        sigmoid(sum)
    }

    /// Delta rule: `weightᵢ += LEARNING_RATE · error · inputᵢ`.
    ///
    /// # Panics
    /// Panics if more inputs were added than weights exist.
    pub fn teach(&mut self, error: f64) {
        self.check_arity();
        for (w, x) in self.weights.iter_mut().zip(&self.inputs) {
            *w += LEARNING_RATE * error * x;
        }
    }

    /// One pass over `patterns`; returns the summed absolute error.
    pub fn train_epoch(&mut self, patterns: &[Pattern]) -> f64 {
        let mut total = 0.0;
        for pattern in patterns {
            self.clear_inputs();
            for &x in pattern.inputs() {
                self.add_input(x);
            }
            let error = pattern.output() - self.learn();
            if error != 0.0 {
                self.teach(error);
            }
            total += error.abs();
        }
        total
    }

    /// Predicts the label of `inputs` without touching the weights.
    pub fn predict(&mut self, inputs: &[f64]) -> f64 {
        self.clear_inputs();
        self.inputs.extend_from_slice(inputs);
        self.learn()
    }

    pub fn inputs(&self) -> &[f64] {
        &self.inputs
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    fn check_arity(&self) {
        assert!(
            self.weights.len() >= self.inputs.len(),
            "perceptron has {} weights but {} inputs",
            self.weights.len(),
            self.inputs.len()
        );
    }
}

impl Default for SingleLayerPerception {
    fn default() -> Self {
        SingleLayerPerception::new(StdRng::from_entropy())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn learn_without_inputs_is_zero() {
        let mut p = SingleLayerPerception::with_seed(1);
        assert_eq!(p.learn(), 0.0);
        assert!(p.is_initialized());
        assert!(p.weights().is_empty());
    }

    #[test]
    fn learn_initializes_once() {
        let mut p = SingleLayerPerception::with_seed(2);
        p.add_input(0.5);
        p.add_input(-0.5);
        p.learn();
        let weights = p.weights().to_vec();
        assert_eq!(weights.len(), 2);
        assert!(weights.iter().all(|w| (0.0..1.0).contains(w)));

        p.learn();
        assert_eq!(p.weights(), &weights[..]);
    }

    #[test]
    fn learn_uses_weighted_sum() {
        let mut p = SingleLayerPerception::with_seed(3);
        p.add_input(1.0);
        p.add_input(2.0);
        p.initialize();
        let expected = sigmoid(p.weights()[0] + 2.0 * p.weights()[1]);
        assert!((p.learn() - expected).abs() < 1e-12);
    }

    #[test]
    fn teach_applies_raw_delta_rule() {
        let mut p = SingleLayerPerception::with_seed(4);
        p.add_input(1.0);
        p.add_input(-2.0);
        p.learn();
        let before = p.weights().to_vec();

        p.teach(0.5);
        assert!((p.weights()[0] - (before[0] + 0.1 * 0.5 * 1.0)).abs() < 1e-12);
        assert!((p.weights()[1] - (before[1] + 0.1 * 0.5 * -2.0)).abs() < 1e-12);
    }

    #[test]
    fn repeated_initialize_appends_weights() {
        let mut p = SingleLayerPerception::with_seed(5);
        p.add_input(0.1);
        p.add_input(0.2);
        p.initialize();
        p.initialize();
        assert_eq!(p.inputs().len(), 2);
        assert_eq!(p.weights().len(), 4);
    }

    #[test]
    fn initialize_after_clear_grows_for_new_inputs() {
        let mut p = SingleLayerPerception::with_seed(6);
        p.add_input(0.1);
        p.add_input(0.2);
        p.learn();

        p.clear_inputs();
        p.add_input(0.1);
        p.add_input(0.2);
        p.add_input(0.3);
        p.initialize();
        assert_eq!(p.weights().len(), 5);
        assert!(p.weights().len() >= p.inputs().len());
        p.learn();
    }

    #[test]
    #[should_panic(expected = "weights")]
    fn more_inputs_than_weights_panics() {
        let mut p = SingleLayerPerception::with_seed(7);
        p.add_input(0.1);
        p.learn();
        p.add_input(0.2);
        p.learn();
    }

    #[test]
    fn trains_on_records_of_any_arity() {
        let data = "0.5,0.5,0.5,1\n-0.5,-0.5,-0.5,-1\n";
        let patterns = crate::data::load_patterns(data.as_bytes(), 3).unwrap();
        let mut p = SingleLayerPerception::with_seed(9);

        let first = p.train_epoch(&patterns);
        assert_eq!(p.weights().len(), 3);
        assert!(p.train_epoch(&patterns) < first);
        assert!(p.predict(&[1.0, 1.0, 1.0]) > 0.0);
    }

    #[test]
    fn epochs_reduce_error_on_separable_points() {
        let patterns = vec![
            Pattern::new(vec![0.72, 0.82], 1.0),
            Pattern::new(vec![0.46, 0.80], 1.0),
            Pattern::new(vec![-0.72, -0.64], -1.0),
            Pattern::new(vec![-0.43, -0.65], -1.0),
        ];
        let mut p = SingleLayerPerception::with_seed(8);
        let first = p.train_epoch(&patterns);
        let mut last = first;
        for _ in 0..200 {
            last = p.train_epoch(&patterns);
        }
        assert!(last < first);
        assert!(p.predict(&[0.9, 0.9]) > 0.0);
        assert!(p.predict(&[-0.9, -0.9]) < 0.0);
    }
}
