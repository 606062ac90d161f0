use serde_json::Value;

/// Optional-returning reads over an untyped feed node.
///
/// Every extraction in the normalizer goes through these, so a missing or
/// oddly-typed field always surfaces as `None` and never as a panic.
pub trait NodeExt {
    /// Child of an object; `None` for non-objects, missing keys and nulls
    fn field(&self, name: &str) -> Option<&Value>;

    /// Element of an array
    fn item(&self, index: usize) -> Option<&Value>;

    /// Scalar field rendered as text
    fn text(&self, name: &str) -> Option<String>;

    /// Field read as a truth value
    fn flag(&self, name: &str) -> Option<bool>;

    /// Field read as a base-10 integer
    fn integer(&self, name: &str) -> Option<i64>;
}

impl NodeExt for Value {
    fn field(&self, name: &str) -> Option<&Value> {
        self.as_object()
            .and_then(|map| map.get(name))
            .filter(|value| !value.is_null())
    }

    fn item(&self, index: usize) -> Option<&Value> {
        self.as_array().and_then(|items| items.get(index))
    }

    fn text(&self, name: &str) -> Option<String> {
        self.field(name).and_then(scalar_text)
    }

    fn flag(&self, name: &str) -> Option<bool> {
        match self.field(name)? {
            Value::Bool(b) => Some(*b),
            Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
                "true" => Some(true),
                "false" => Some(false),
                _ => None,
            },
            Value::Number(n) => n.as_i64().map(|i| i != 0),
            _ => None,
        }
    }

    fn integer(&self, name: &str) -> Option<i64> {
        self.field(name).and_then(scalar_integer)
    }
}

/// Strings as-is, numbers and booleans in their JSON rendering
pub fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

pub fn scalar_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
