pub mod neuron;
pub mod layer;

pub use neuron::Neuron;
pub use layer::Layer;
