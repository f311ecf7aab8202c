use serde_json::Value;

/// Maximum depth of arrays and objects in a value.
///
/// Scalars and `null` have depth 0, an empty array or object has depth 1.
pub fn measure_nesting(value: &Value) -> usize {
    let inner = match value {
        Value::Array(arr) => arr.iter().map(measure_nesting).max(),
        Value::Object(obj) => obj.values().map(measure_nesting).max(),
        _ => return 0,
    };
    1 + inner.unwrap_or(0)
}
