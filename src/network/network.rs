use rand::Rng;

use crate::activation::ActivationFunction;
use crate::data::Pattern;
use crate::layers::{Layer, Neuron};
use crate::network::config::NetworkConfig;

pub const INPUT: usize = 0;
pub const HIDDEN: usize = 1;
pub const OUTPUT: usize = 2;

/// Input layer → one hidden layer → a single output neuron.
///
/// The layers live in a fixed arena indexed by `INPUT`, `HIDDEN` and `OUTPUT`;
/// the output "layer" always holds exactly one neuron.
#[derive(Debug, Clone)]
pub struct Network {
    pub layers: Vec<Layer>,
    pub learning_rate: f64,
}

impl Network {
    /// Builds a freshly randomized network shaped by `config`.
    pub fn new<R: Rng + ?Sized>(config: &NetworkConfig, rng: &mut R) -> Network {
        let activation = ActivationFunction::default();
        let input = Layer::input(config.input_dims);
        let hidden = Layer::new(config.hidden_dims, config.input_dims, activation, rng);
        let output = Layer::new(1, config.hidden_dims, activation, rng);
        Network {
            layers: vec![input, hidden, output],
            learning_rate: config.learning_rate,
        }
    }

    /// Builds a network from explicit hidden and output neurons.
    ///
    /// # Panics
    /// Panics if any weight vector does not match its upstream width.
    pub fn from_parts(input_dims: usize, hidden: Layer, output: Neuron, learning_rate: f64) -> Network {
        assert!(
            hidden.neurons.iter().all(|n| n.input_size() == input_dims),
            "every hidden neuron needs {} weights",
            input_dims
        );
        assert_eq!(
            output.input_size(),
            hidden.len(),
            "output neuron needs one weight per hidden neuron"
        );
        Network {
            layers: vec![Layer::input(input_dims), hidden, Layer::from_neurons(vec![output])],
            learning_rate,
        }
    }

    pub fn input_dims(&self) -> usize {
        self.layers[INPUT].len()
    }

    pub fn hidden_dims(&self) -> usize {
        self.layers[HIDDEN].len()
    }

    pub fn output_neuron(&self) -> &Neuron {
        &self.layers[OUTPUT].neurons[0]
    }

    /// Forward pass; every neuron's `output` reflects `pattern` afterwards.
    pub fn activate(&mut self, pattern: &Pattern) -> f64 {
        self.layers[INPUT].feed_inputs(pattern.inputs());
        let inputs = self.layers[INPUT].outputs();
        let hidden = self.layers[HIDDEN].activate(&inputs);
        self.layers[OUTPUT].activate(&hidden)[0]
    }

    /// Backward pass for `delta = expected - actual` of the last `activate`.
    ///
    /// The output neuron is adjusted first; hidden neurons then receive their
    /// feedback through the output neuron's already updated weights.
    pub fn adjust_weights(&mut self, delta: f64) {
        let lr = self.learning_rate;

        let hidden_outputs = self.layers[HIDDEN].outputs();
        self.layers[OUTPUT].neurons[0].adjust_weights(delta, &hidden_outputs, lr);

        let output = &self.layers[OUTPUT].neurons[0];
        let feedback: Vec<f64> = self.layers[HIDDEN]
            .neurons
            .iter()
            .enumerate()
            .map(|(j, neuron)| output.error_feedback(j, neuron))
            .collect();

        let inputs = self.layers[INPUT].outputs();
        for (neuron, error) in self.layers[HIDDEN].neurons.iter_mut().zip(feedback) {
            neuron.adjust_weights(error, &inputs, lr);
        }
    }
}
