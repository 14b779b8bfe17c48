pub mod trainer;
pub mod epoch_stats;

pub use trainer::Trainer;
pub use epoch_stats::{EpochStats, TrainState};
