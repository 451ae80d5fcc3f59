//! Recursive extraction of `PixelConfig` strings from a document tree.

use serde_json::Value;

/// The field name whose string values hold encoded configuration blobs.
pub const CONFIG_KEY: &str = "PixelConfig";

/// Collect every string value stored under a [`CONFIG_KEY`] field, at any
/// depth, in depth-first pre-order.
///
/// Objects are walked in document key order, arrays by index, so the result
/// order matches the order the fields appear in the file. Duplicates are
/// kept. A `PixelConfig` key holding an object or array is descended into
/// like any other container, not collected.
pub fn extract_configs(doc: &Value) -> Vec<String> {
    let mut configs = Vec::new();
    collect(doc, &mut configs);
    configs
}

fn collect(node: &Value, configs: &mut Vec<String>) {
    match node {
        Value::Object(map) => {
            for (key, value) in map {
                match value {
                    Value::String(s) if key == CONFIG_KEY => configs.push(s.clone()),
                    Value::Object(_) | Value::Array(_) => collect(value, configs),
                    _ => {}
                }
            }
        }
        Value::Array(items) => {
            for item in items {
                if item.is_object() || item.is_array() {
                    collect(item, configs);
                }
            }
        }
        _ => {}
    }
}
