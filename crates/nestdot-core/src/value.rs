//! The value model: the closed set of shapes the encoder understands.

use std::fmt::Write;

use indexmap::IndexMap;

/// Container kinds that receive synthetic node names when nested as
/// anonymous values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerKind {
    /// Ordered, mutable sequence.
    List,
    /// Ordered, immutable sequence.
    Tuple,
    /// Unique-element collection.
    Set,
}

impl ContainerKind {
    /// Uppercase stem used for synthetic node labels (`LIST`, `TUPLE`, `SET`).
    pub fn label_stem(&self) -> &'static str {
        match self {
            ContainerKind::List => "LIST",
            ContainerKind::Tuple => "TUPLE",
            ContainerKind::Set => "SET",
        }
    }
}

/// A nested input value.
///
/// One closed sum type covering everything the encoder can meet. `Null` is
/// the deliberate no-op arm: skipped wherever it appears as a nested value,
/// rejected at the root.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f64),
    Str(String),
    /// Immutable byte sequence, labeled `b'…'`.
    Bytes(Vec<u8>),
    /// Mutable byte sequence, labeled `bytearray(b'…')` so the two byte
    /// kinds are never visually ambiguous in the output graph.
    ByteArray(Vec<u8>),
    Bool(bool),
    List(Vec<Value>),
    Tuple(Vec<Value>),
    /// Elements keep the order the caller supplied; uniqueness is the
    /// caller's concern.
    Set(Vec<Value>),
    /// Key/value associations with insertion-ordered iteration.
    Map(IndexMap<String, Value>),
    Null,
}

/// Classification of a value at one recursion step.
///
/// The encoder resolves every value through [`Value::shape`] exactly once
/// per step and matches exhaustively on the result, so unsupported kinds are
/// an explicit arm rather than a fall-through.
pub enum Shape<'a> {
    /// A leaf, carrying its rendered node label.
    Scalar(String),
    /// A container that may need a synthetic node name.
    Container(ContainerKind, &'a [Value]),
    /// A mapping whose keys supply labels.
    Mapping(&'a IndexMap<String, Value>),
    /// Encodes to nothing.
    Ignored,
}

impl Value {
    /// Classify this value for one step of the encoding recursion.
    pub fn shape(&self) -> Shape<'_> {
        match self {
            Value::Int(i) => Shape::Scalar(i.to_string()),
            Value::Float(x) => Shape::Scalar(float_label(*x)),
            Value::Str(s) => Shape::Scalar(s.clone()),
            Value::Bytes(b) => Shape::Scalar(format!("b'{}'", escape_bytes(b))),
            Value::ByteArray(b) => Shape::Scalar(format!("bytearray(b'{}')", escape_bytes(b))),
            Value::Bool(b) => Shape::Scalar(b.to_string()),
            Value::List(elements) => Shape::Container(ContainerKind::List, elements),
            Value::Tuple(elements) => Shape::Container(ContainerKind::Tuple, elements),
            Value::Set(elements) => Shape::Container(ContainerKind::Set, elements),
            Value::Map(map) => Shape::Mapping(map),
            Value::Null => Shape::Ignored,
        }
    }

    /// Whether this value is a leaf.
    pub fn is_scalar(&self) -> bool {
        matches!(self.shape(), Shape::Scalar(_))
    }

    /// Lowercase kind name, used in error context.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "str",
            Value::Bytes(_) => "bytes",
            Value::ByteArray(_) => "bytearray",
            Value::Bool(_) => "bool",
            Value::List(_) => "list",
            Value::Tuple(_) => "tuple",
            Value::Set(_) => "set",
            Value::Map(_) => "map",
            Value::Null => "null",
        }
    }

    /// Build a list from anything yielding values.
    pub fn list(elements: impl IntoIterator<Item = Value>) -> Self {
        Value::List(elements.into_iter().collect())
    }

    /// Build a tuple from anything yielding values.
    pub fn tuple(elements: impl IntoIterator<Item = Value>) -> Self {
        Value::Tuple(elements.into_iter().collect())
    }

    /// Build a set from anything yielding values. Element order is kept.
    pub fn set(elements: impl IntoIterator<Item = Value>) -> Self {
        Value::Set(elements.into_iter().collect())
    }

    /// Build a mapping from key/value pairs, preserving entry order.
    pub fn map<K>(entries: impl IntoIterator<Item = (K, Value)>) -> Self
    where
        K: Into<String>,
    {
        Value::Map(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value))
                .collect(),
        )
    }

    /// Build an immutable byte sequence.
    pub fn bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Value::Bytes(bytes.into())
    }

    /// Build a mutable byte sequence.
    pub fn byte_array(bytes: impl Into<Vec<u8>>) -> Self {
        Value::ByteArray(bytes.into())
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(value)
    }
}

/// Float labels always carry a decimal point so they never collide with
/// integer labels.
fn float_label(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}

/// Escape bytes for a single-quoted byte literal. Printable ASCII passes
/// through, control and non-ASCII bytes become `\xNN`.
fn escape_bytes(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    for &byte in bytes {
        match byte {
            b'\\' => out.push_str("\\\\"),
            b'\'' => out.push_str("\\'"),
            b'\t' => out.push_str("\\t"),
            b'\n' => out.push_str("\\n"),
            b'\r' => out.push_str("\\r"),
            0x20..=0x7e => out.push(byte as char),
            _ => {
                let _ = write!(out, "\\x{byte:02x}");
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn label_of(value: &Value) -> String {
        match value.shape() {
            Shape::Scalar(label) => label,
            _ => panic!("expected a scalar"),
        }
    }

    #[test]
    fn test_scalar_labels() {
        assert_eq!(label_of(&Value::Int(42)), "42");
        assert_eq!(label_of(&Value::Int(-7)), "-7");
        assert_eq!(label_of(&Value::Str("node".into())), "node");
        assert_eq!(label_of(&Value::Bool(true)), "true");
        assert_eq!(label_of(&Value::Bool(false)), "false");
    }

    #[test]
    fn test_float_labels_keep_decimal_point() {
        assert_eq!(label_of(&Value::Float(10000.1)), "10000.1");
        assert_eq!(label_of(&Value::Float(3.0)), "3.0");
        assert_eq!(label_of(&Value::Float(-0.5)), "-0.5");
    }

    #[test]
    fn test_byte_labels_are_distinct_per_kind() {
        assert_eq!(label_of(&Value::bytes(*b"e")), "b'e'");
        assert_eq!(label_of(&Value::byte_array(*b"f")), "bytearray(b'f')");
    }

    #[test]
    fn test_byte_label_escaping() {
        assert_eq!(label_of(&Value::bytes(*b"a\\b")), "b'a\\\\b'");
        assert_eq!(label_of(&Value::bytes(*b"a'b")), "b'a\\'b'");
        assert_eq!(label_of(&Value::bytes(*b"a\nb")), "b'a\\nb'");
        assert_eq!(label_of(&Value::bytes([0x00u8, 0xff])), "b'\\x00\\xff'");
    }

    #[test]
    fn test_shape_classification() {
        assert!(Value::Int(1).is_scalar());
        assert!(!Value::list([]).is_scalar());
        assert!(!Value::map([("a", Value::Int(1))]).is_scalar());
        assert!(!Value::Null.is_scalar());

        match Value::tuple([Value::Int(1)]).shape() {
            Shape::Container(kind, elements) => {
                assert_eq!(kind, ContainerKind::Tuple);
                assert_eq!(elements.len(), 1);
            }
            _ => panic!("expected a container"),
        }
        assert!(matches!(Value::Null.shape(), Shape::Ignored));
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(Value::Int(0).kind_name(), "int");
        assert_eq!(Value::byte_array(*b"").kind_name(), "bytearray");
        assert_eq!(Value::set([]).kind_name(), "set");
        assert_eq!(Value::Null.kind_name(), "null");
    }

    #[test]
    fn test_map_preserves_entry_order() {
        let map = Value::map([("z", Value::Int(1)), ("a", Value::Int(2))]);
        let Value::Map(entries) = &map else {
            panic!("expected a map");
        };
        let keys: Vec<&str> = entries.keys().map(String::as_str).collect();
        assert_eq!(keys, ["z", "a"]);
    }
}
