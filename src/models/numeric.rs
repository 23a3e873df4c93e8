use serde::{Deserialize, Deserializer};

// Catalog documents are written by several dashboards; numbers arrive as
// ints, floats or numeric strings.

fn value_as_f64(value: &serde_json::Value) -> Option<f64> {
    match value {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Lenient price/rating field: anything unreadable becomes `0.0`.
pub fn deserialize_lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<serde_json::Value> = Option::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(value_as_f64)
        .filter(|f| f.is_finite())
        .unwrap_or(0.0))
}

// Custom deserializer for optional stock counts, rounding fractional values up
pub fn deserialize_optional_rounded_u32<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<serde_json::Value> = Option::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(value_as_f64).and_then(|f| {
        if f.is_finite() && f >= 0.0 {
            Some(f.ceil().min(u32::MAX as f64) as u32)
        } else {
            None
        }
    }))
}
