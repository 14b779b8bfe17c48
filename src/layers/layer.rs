use rand::Rng;

use crate::activation::ActivationFunction;
use crate::layers::neuron::Neuron;

/// An ordered group of neurons fed by the same upstream signals.
///
/// Layers hold no reference to their predecessor; the caller passes the
/// upstream outputs into every forward and backward call.
#[derive(Debug, Clone)]
pub struct Layer {
    pub neurons: Vec<Neuron>,
}

impl Layer {
    /// Fully connected layer of `size` neurons, each with `input_size` random weights.
    pub fn new<R: Rng + ?Sized>(
        size: usize,
        input_size: usize,
        activation: ActivationFunction,
        rng: &mut R,
    ) -> Layer {
        let neurons = (0..size)
            .map(|_| Neuron::new(input_size, activation, rng))
            .collect();
        Layer { neurons }
    }

    /// Input layer: `size` pass-through neurons holding raw values.
    pub fn input(size: usize) -> Layer {
        Layer {
            neurons: (0..size).map(|_| Neuron::passthrough()).collect(),
        }
    }

    pub fn from_neurons(neurons: Vec<Neuron>) -> Layer {
        Layer { neurons }
    }

    pub fn len(&self) -> usize {
        self.neurons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.neurons.is_empty()
    }

    /// Loads externally supplied values into an input layer, one per neuron.
    ///
    /// # Panics
    /// Panics if `values.len()` differs from the layer size.
    pub fn feed_inputs(&mut self, values: &[f64]) {
        assert_eq!(
            self.neurons.len(),
            values.len(),
            "input layer has {} neurons but received {} values",
            self.neurons.len(),
            values.len()
        );
        for (neuron, value) in self.neurons.iter_mut().zip(values) {
            neuron.activate(std::slice::from_ref(value));
        }
    }

    /// Activates every neuron against the upstream layer's outputs.
    pub fn activate(&mut self, upstream: &[f64]) -> Vec<f64> {
        self.neurons.iter_mut().map(|n| n.activate(upstream)).collect()
    }

    /// Current outputs, i.e. the upstream signal for the next layer.
    pub fn outputs(&self) -> Vec<f64> {
        self.neurons.iter().map(|n| n.output).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn new_sizes_weights_from_upstream() {
        let mut rng = StdRng::seed_from_u64(1);
        let layer = Layer::new(3, 5, ActivationFunction::default(), &mut rng);
        assert_eq!(layer.len(), 3);
        assert!(layer.neurons.iter().all(|n| n.input_size() == 5));
    }

    #[test]
    fn input_layer_passes_values_through() {
        let mut layer = Layer::input(2);
        layer.feed_inputs(&[0.72, -0.82]);
        assert_eq!(layer.outputs(), vec![0.72, -0.82]);
    }

    #[test]
    fn activate_uses_upstream_outputs() {
        let mut upstream = Layer::input(2);
        upstream.feed_inputs(&[1.0, 1.0]);

        let mut layer = Layer::from_neurons(vec![
            Neuron::with_weights(vec![0.0, 0.0], ActivationFunction::default()),
            Neuron::with_weights(vec![0.5, 0.5], ActivationFunction::default()),
        ]);
        let out = layer.activate(&upstream.outputs());
        assert_eq!(out[0], 0.0);
        assert!(out[1] > 0.99);
        assert_eq!(layer.outputs(), out);
    }

    #[test]
    #[should_panic(expected = "input layer")]
    fn feed_inputs_rejects_wrong_arity() {
        Layer::input(2).feed_inputs(&[1.0]);
    }
}
