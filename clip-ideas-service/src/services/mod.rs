pub mod generation;
pub mod metrics;
pub mod providers;

pub use generation::{ClipGenerator, GenerationError};
