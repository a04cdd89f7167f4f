//! Runtime kinds of JSON values, and the labels we print for them.

use crate::prelude::*;

/// The kind of a JSON value, as shown in a field listing.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ValueKind {
    /// `null`.
    Null,
    /// `true` or `false`.
    Bool,
    /// A number written without a fraction or exponent, of any size.
    Int,
    /// Any other number. Note that `5.0` is a float, not an int.
    Float,
    /// A string.
    Str,
    /// An array.
    List,
    /// An object.
    Dict,
}

impl ValueKind {
    /// Classify `value`.
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Bool,
            Value::Number(n) if is_integer_literal(&n.to_string()) => {
                ValueKind::Int
            }
            Value::Number(_) => ValueKind::Float,
            Value::String(_) => ValueKind::Str,
            Value::Array(_) => ValueKind::List,
            Value::Object(_) => ValueKind::Dict,
        }
    }

    /// The label we print for this kind. These are part of our output format,
    /// so don't change them casually.
    pub fn label(self) -> &'static str {
        match self {
            ValueKind::Null => "NoneType",
            ValueKind::Bool => "bool",
            ValueKind::Int => "int",
            ValueKind::Float => "float",
            ValueKind::Str => "str",
            ValueKind::List => "list",
            ValueKind::Dict => "dict",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Does this number literal denote an integer? We parse numbers with
/// `arbitrary_precision`, so this is the text exactly as it appeared in the
/// input.
fn is_integer_literal(literal: &str) -> bool {
    !literal.contains(&['.', 'e', 'E'][..])
}

/// Is `value` "truthy"? `null`, `false`, zero, and empty strings, arrays and
/// objects are not. Everything else is.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        // Out-of-range numbers like `1e400` have no `f64`, but aren't zero.
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(fields) => !fields.is_empty(),
    }
}

#[test]
fn classify_values() {
    use serde_json::json;

    let kind = |v: Value| ValueKind::of(&v).to_string();
    assert_eq!(kind(json!(null)), "NoneType");
    assert_eq!(kind(json!(false)), "bool");
    assert_eq!(kind(json!(1)), "int");
    assert_eq!(kind(json!(-1)), "int");
    assert_eq!(kind(json!(u64::MAX)), "int");
    assert_eq!(kind(json!(0.0)), "float");
    assert_eq!(kind(json!(1.5)), "float");
    assert_eq!(kind(json!("A")), "str");
    assert_eq!(kind(json!([1, 2])), "list");
    assert_eq!(kind(json!({ "a": 1 })), "dict");
}

#[test]
fn classify_number_literals() {
    let kind = |text: &str| {
        let value: Value = serde_json::from_str(text).unwrap();
        ValueKind::of(&value)
    };
    assert_eq!(kind("5.0"), ValueKind::Float);
    assert_eq!(kind("5e2"), ValueKind::Float);
    assert_eq!(kind("5E-2"), ValueKind::Float);
    assert_eq!(kind("1e400"), ValueKind::Float);
    assert_eq!(kind("-0"), ValueKind::Int);
    assert_eq!(kind("18446744073709551616"), ValueKind::Int);
    assert_eq!(kind("-99999999999999999999999"), ValueKind::Int);
}

#[test]
fn truthiness() {
    use serde_json::json;

    let falsy_values = [
        json!(null),
        json!(false),
        json!(0),
        json!(0.0),
        serde_json::from_str::<Value>("-0").unwrap(),
        json!(""),
        json!([]),
        json!({}),
    ];
    for falsy in falsy_values {
        assert!(!is_truthy(&falsy), "{} should be falsy", falsy);
    }
    let truthy_values = [
        json!(true),
        json!(-1),
        json!(0.5),
        serde_json::from_str::<Value>("1e400").unwrap(),
        json!("x"),
        json!([0]),
        json!({ "a": null }),
    ];
    for truthy in truthy_values {
        assert!(is_truthy(&truthy), "{} should be truthy", truthy);
    }
}
