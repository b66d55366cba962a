use serde::Deserialize;
use serde_json::Value;

use super::ClipCount;

/// Inbound body of `POST /api/generate`.
///
/// Fields stay loosely typed so that truthiness of `videoUrl` and the exact
/// numeric match on `quantity` can be decided on the raw JSON.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    #[serde(default)]
    pub video_url: Option<Value>,
    #[serde(default)]
    pub quantity: Option<Value>,
}

impl GenerationRequest {
    /// Parse a request body. Anything other than a JSON object yields an
    /// empty request, which is later rejected for its missing `videoUrl`.
    pub fn from_body(body: &[u8]) -> Self {
        match serde_json::from_slice::<Value>(body) {
            Ok(value @ Value::Object(_)) => serde_json::from_value(value).unwrap_or_default(),
            _ => Self::default(),
        }
    }

    /// The video URL as prompt text, or `None` when it is absent or falsy
    /// (`null`, `""`, `false`, `0`).
    pub fn video_url(&self) -> Option<String> {
        match self.video_url.as_ref()? {
            Value::Null | Value::Bool(false) => None,
            Value::String(s) if s.is_empty() => None,
            Value::String(s) => Some(s.clone()),
            Value::Number(n) if n.as_f64() == Some(0.0) => None,
            other => Some(other.to_string()),
        }
    }

    pub fn clip_count(&self) -> ClipCount {
        ClipCount::from_quantity(self.quantity.as_ref())
    }
}
