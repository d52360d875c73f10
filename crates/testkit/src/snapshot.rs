//! Canonical JSON comparison utilities.
//!
//! Values are serialized as pretty JSON with object keys sorted, so two runs
//! that produce the same data produce the same text. Floats keep their full
//! `f32` precision, which makes equal text a bit-exact comparison.

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;

/// Serialize `value` to canonical pretty JSON (sorted keys, trailing newline).
pub fn canonical_json<T: Serialize>(value: &T) -> Result<String> {
    let value = serde_json::to_value(value).context("Failed to serialize snapshot value")?;
    let value = canonicalize_value(value);
    let mut s = serde_json::to_string_pretty(&value).context("Failed to format snapshot JSON")?;
    s.push('\n');
    Ok(s)
}

/// Fail unless `left` and `right` serialize to the same canonical JSON.
pub fn assert_same_json<A: Serialize, B: Serialize>(left: &A, right: &B) -> Result<()> {
    let left = canonical_json(left)?;
    let right = canonical_json(right)?;
    if left != right {
        anyhow::bail!("JSON mismatch:\n--- left\n{left}--- right\n{right}");
    }
    Ok(())
}

fn canonicalize_value(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<(String, Value)> = map.into_iter().collect();
            entries.sort_by(|a, b| a.0.cmp(&b.0));
            let mut out = serde_json::Map::with_capacity(entries.len());
            for (k, v) in entries {
                out.insert(k, canonicalize_value(v));
            }
            Value::Object(out)
        }
        Value::Array(values) => Value::Array(values.into_iter().map(canonicalize_value).collect()),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn key_order_does_not_matter() {
        let a = json!({"b": 1, "a": {"d": [1, 2], "c": null}});
        let b = json!({"a": {"c": null, "d": [1, 2]}, "b": 1});
        assert_same_json(&a, &b).expect("same content");
        assert!(canonical_json(&a).unwrap().ends_with('\n'));
    }

    #[test]
    fn different_values_fail() {
        assert!(assert_same_json(&json!([1.0]), &json!([1.5])).is_err());
    }
}
