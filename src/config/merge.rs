//! Field-by-field merge of configuration values.
//!
//! A config file overrides the baked-in defaults one field at a time: keys
//! present in the file win, keys absent keep their prior value. Arrays and
//! scalars are replaced entirely.

use serde_json::Value;

/// Merge `overlay` onto `base`, with `overlay` taking precedence.
///
/// - Objects are merged recursively: keys in overlay override keys in base
/// - Arrays, strings, numbers and booleans are replaced entirely
/// - An explicit `null` in overlay preserves the base value ("not specified")
pub fn deep_merge(base: Value, overlay: Value) -> Value {
    match (base, overlay) {
        (Value::Object(mut base_map), Value::Object(overlay_map)) => {
            for (key, overlay_value) in overlay_map {
                let merged = match base_map.remove(&key) {
                    Some(base_value) => deep_merge(base_value, overlay_value),
                    None => overlay_value,
                };
                base_map.insert(key, merged);
            }
            Value::Object(base_map)
        }
        (base, Value::Null) => base,
        (_, overlay) => overlay,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_overlay_key_wins() {
        let base = json!({"proxy": {"address": "0.0.0.0", "port": 9090}});
        let overlay = json!({"proxy": {"port": 8080}});
        let result = deep_merge(base, overlay);
        assert_eq!(
            result,
            json!({"proxy": {"address": "0.0.0.0", "port": 8080}})
        );
    }

    #[test]
    fn test_absent_key_keeps_base() {
        let base = json!({"origin": {"url": "http://prometheus:9090"}, "main": {"instance_id": 7}});
        let overlay = json!({"main": {"instance_id": 2}});
        let result = deep_merge(base, overlay);
        assert_eq!(result["origin"]["url"], "http://prometheus:9090");
        assert_eq!(result["main"]["instance_id"], 2);
    }

    #[test]
    fn test_null_preserves_base() {
        let base = json!({"logging": {"level": "INFO", "file": "/var/log/t.log"}});
        let overlay = json!({"logging": {"file": null}});
        let result = deep_merge(base, overlay);
        assert_eq!(result["logging"]["file"], "/var/log/t.log");
    }

    #[test]
    fn test_scalar_replaces_object() {
        let base = json!({"value": {"nested": true}});
        let overlay = json!({"value": 42});
        assert_eq!(deep_merge(base, overlay), json!({"value": 42}));
    }

    #[test]
    fn test_new_keys_added() {
        let base = json!({"a": 1});
        let overlay = json!({"b": 2});
        assert_eq!(deep_merge(base, overlay), json!({"a": 1, "b": 2}));
    }
}
