pub mod pattern;
pub mod loader;

pub use pattern::Pattern;
pub use loader::{load_patterns, load_patterns_file};
