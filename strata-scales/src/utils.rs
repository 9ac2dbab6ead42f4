use serde_json::Value;

/// Coerce a JSON value to a finite f64 the way the configuration surface
/// expects: numbers pass through, numeric strings parse, everything else
/// (booleans, arrays, objects, null, NaN) is non-numeric.
pub(crate) fn round_to(value: f64, digits: u32) -> f64 {
    let scale = 10f64.powi(digits as i32);
    (value * scale).round() / scale
}

pub fn coerce_numeric(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    number.is_finite().then_some(number)
}
