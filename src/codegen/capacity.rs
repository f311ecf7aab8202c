//! Buffer capacity estimation
//!
//! Builds the `JSON_ARRAY_SIZE(..) + JSON_OBJECT_SIZE(..)` expression that
//! sizes a `DynamicJsonBuffer` for a given document, for callers that don't
//! supply their own expression.

use serde_json::Value;
use std::collections::BTreeMap;

/// Count of composites per element count, split by kind
#[derive(Debug, Default)]
struct CompositeCounts {
    arrays: BTreeMap<usize, usize>,
    objects: BTreeMap<usize, usize>,
}

impl CompositeCounts {
    fn add_value(&mut self, value: &Value) {
        match value {
            Value::Array(arr) => {
                *self.arrays.entry(arr.len()).or_insert(0) += 1;
                for item in arr {
                    self.add_value(item);
                }
            }
            Value::Object(obj) => {
                *self.objects.entry(obj.len()).or_insert(0) += 1;
                for item in obj.values() {
                    self.add_value(item);
                }
            }
            _ => {}
        }
    }

    fn terms(&self) -> Vec<String> {
        let arrays = self.arrays.iter().map(|(size, count)| term("JSON_ARRAY_SIZE", *size, *count));
        let objects = self.objects.iter().map(|(size, count)| term("JSON_OBJECT_SIZE", *size, *count));
        arrays.chain(objects).collect()
    }
}

fn term(macro_name: &str, size: usize, count: usize) -> String {
    if count == 1 {
        format!("{}({})", macro_name, size)
    } else {
        format!("{}*{}({})", count, macro_name, size)
    }
}

/// Buffer-size expression covering every array and object in `value`
pub fn capacity_expression(value: &Value) -> String {
    let mut counts = CompositeCounts::default();
    counts.add_value(value);

    let terms = counts.terms();
    if terms.is_empty() {
        return "0".to_string();
    }
    terms.join(" + ")
}
