//! The concrete schema handlers plus the small scalar-rendering helpers they
//! share.

pub mod resource;
pub mod service;

pub use resource::Resource;
pub use service::Service;

use serde_yaml::Value;

/// Render a YAML scalar in its natural string form.
///
/// Booleans always become the literal strings `true` / `false`; null renders
/// empty. Non-scalars render empty, matching how the handlers only call this
/// in scalar position.
pub(crate) fn scalar_to_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => {
            if *b {
                "true".to_string()
            } else {
                "false".to_string()
            }
        }
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        _ => String::new(),
    }
}

/// Mapping keys are usually strings, but YAML also permits numeric and
/// boolean keys; render them all the same way.
pub(crate) fn key_to_string(key: &Value) -> String {
    scalar_to_string(key)
}

/// A key that is a plain index rather than a name (`0: get` style entries).
pub(crate) fn is_numeric_key(key: &Value) -> bool {
    match key {
        Value::Number(_) => true,
        Value::String(s) => !s.is_empty() && s.chars().all(|c| c.is_ascii_digit()),
        _ => false,
    }
}

/// Loose truthiness for `_defaults` values: null, false, zero, the empty
/// string and `"0"`, and empty collections are all false.
pub(crate) fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty() && s != "0",
        Value::Sequence(items) => !items.is_empty(),
        Value::Mapping(map) => !map.is_empty(),
        _ => true,
    }
}
