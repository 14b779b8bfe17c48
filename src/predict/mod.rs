pub mod source;
pub mod repl;

pub use source::{LineSource, ReaderSource};
pub use repl::{run_prediction_loop, predict_line};
