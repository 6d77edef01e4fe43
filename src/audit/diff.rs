//! Diff generation for audit logging
//!
//! Records are flat, so only top-level fields are compared.

use serde_json::Value;

/// Generate a human-readable diff between two JSON values
pub fn generate_diff(before: &Value, after: &Value) -> Option<String> {
    match (before, after) {
        (Value::Object(before_obj), Value::Object(after_obj)) => {
            let mut changes = Vec::new();

            for (key, before_val) in before_obj {
                match after_obj.get(key) {
                    Some(after_val) if after_val != before_val => changes.push(format!(
                        "{}: {} -> {}",
                        key,
                        format_value(before_val),
                        format_value(after_val)
                    )),
                    Some(_) => {}
                    None => changes.push(format!("{}: {} -> (removed)", key, format_value(before_val))),
                }
            }

            for (key, after_val) in after_obj {
                if !before_obj.contains_key(key) {
                    changes.push(format!("{}: (added) -> {}", key, format_value(after_val)));
                }
            }

            if changes.is_empty() {
                None
            } else {
                Some(changes.join(", "))
            }
        }
        _ if before != after => Some(format!("{} -> {}", format_value(before), format_value(after))),
        _ => None,
    }
}

fn format_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::String(s) if s.chars().count() > 50 => {
            let head: String = s.chars().take(47).collect();
            format!("\"{}...\"", head)
        }
        Value::String(s) => format!("\"{}\"", s),
        Value::Array(arr) => format!("[{} items]", arr.len()),
        Value::Object(obj) => format!("{{{} fields}}", obj.len()),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_changed_fields() {
        let before = json!({"usuario": "ana", "cidade": "SP"});
        let after = json!({"usuario": "ana", "cidade": "RJ"});

        assert_eq!(
            generate_diff(&before, &after),
            Some("cidade: \"SP\" -> \"RJ\"".to_string())
        );
    }

    #[test]
    fn test_added_and_removed_fields() {
        let before = json!({"usuario": "ana"});
        let after = json!({"natureza_padrao": "170201"});

        let diff = generate_diff(&before, &after).unwrap();
        assert!(diff.contains("usuario: \"ana\" -> (removed)"));
        assert!(diff.contains("natureza_padrao: (added) -> \"170201\""));
    }

    #[test]
    fn test_no_changes() {
        let value = json!({"usuario": "ana"});
        assert_eq!(generate_diff(&value, &value), None);
    }

    #[test]
    fn test_long_strings_truncated() {
        let before = json!({"descricao": "a".repeat(80)});
        let after = json!({"descricao": "b"});

        let diff = generate_diff(&before, &after).unwrap();
        assert!(diff.contains("...\""));
        assert!(diff.len() < 80);
    }
}
