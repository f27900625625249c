//! Record codec: a JSON array of numbers, e.g. `[0.0123, 0.0456]`.
//!
//! Decoding is strict. Anything other than a flat list of finite numbers
//! is rejected; the content is never interpreted beyond that.

/// Encode a result sequence. Shortest round-trip float formatting.
pub fn encode(values: &[f64]) -> Result<String, String> {
    if let Some(bad) = values.iter().find(|v| !v.is_finite()) {
        return Err(format!("non-finite value {bad} cannot be stored"));
    }
    serde_json::to_string(values).map_err(|e| e.to_string())
}

/// Decode a record body.
pub fn decode(content: &str) -> Result<Vec<f64>, String> {
    serde_json::from_str::<Vec<f64>>(content).map_err(|e| e.to_string())
}
