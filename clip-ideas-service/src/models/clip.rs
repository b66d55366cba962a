//! Clip idea shapes and the requested batch size.
//!
//! The handler forwards the model's JSON untouched; these types describe the
//! envelope the prompt asks for and are used by fixtures and tests.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// One short-form video idea as produced by the model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClipIdea {
    pub id: i64,
    pub hook: String,
    pub body: String,
    pub tags: String,
}

/// Envelope around the generated ideas: `{ "clips": [...] }`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ClipBatch {
    pub clips: Vec<ClipIdea>,
}

/// Number of ideas requested from the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClipCount {
    #[default]
    Standard,
    Extended,
}

impl ClipCount {
    /// Only the JSON number 50 selects the extended batch; anything else,
    /// including the string `"50"`, falls back to the standard one.
    pub fn from_quantity(quantity: Option<&Value>) -> Self {
        match quantity {
            Some(Value::Number(n)) if n.as_f64() == Some(50.0) => ClipCount::Extended,
            _ => ClipCount::Standard,
        }
    }

    pub fn get(self) -> u32 {
        match self {
            ClipCount::Standard => 20,
            ClipCount::Extended => 50,
        }
    }
}

impl fmt::Display for ClipCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}
