//! HTTP handlers for the clip ideas service.

pub mod generate;
pub mod health;
pub mod metrics;
