pub mod clip;
pub mod generation;

pub use clip::{ClipBatch, ClipCount, ClipIdea};
pub use generation::GenerationRequest;
