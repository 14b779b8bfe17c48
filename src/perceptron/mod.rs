pub mod single_layer;

pub use single_layer::SingleLayerPerception;
