use indexmap::IndexMap;
use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
use std::fmt;

/// Field name carrying the construct tag of a node.
pub const KIND_FIELD: &str = "kind";

/// Field names that hold the primary list of child nodes.
pub const PRIMARY_CHILD_FIELDS: [&str; 2] = ["inner", "children"];

/// A value held by one field of a [`SyntaxNode`].
///
/// The set of shapes is closed so that every consumer of the tree handles
/// scalars, nested records and lists exhaustively.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
    Node(SyntaxNode),
    List(Vec<FieldValue>),
}

impl FieldValue {
    pub fn as_node(&self) -> Option<&SyntaxNode> {
        match self {
            FieldValue::Node(node) => Some(node),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[FieldValue]> {
        match self {
            FieldValue::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            FieldValue::Integer(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Text(value) => Some(value),
            _ => None,
        }
    }

    /// True for values the walker descends into.
    pub fn is_nested(&self) -> bool {
        matches!(self, FieldValue::Node(_) | FieldValue::List(_))
    }

    /// Renders a scalar the way it would appear in the dump. Nested values yield `None`.
    pub fn scalar_text(&self) -> Option<String> {
        match self {
            FieldValue::Null => None,
            FieldValue::Bool(value) => Some(value.to_string()),
            FieldValue::Integer(value) => Some(value.to_string()),
            FieldValue::Float(value) => Some(value.to_string()),
            FieldValue::Text(value) => Some(value.clone()),
            FieldValue::Node(_) | FieldValue::List(_) => None,
        }
    }
}

impl From<serde_json::Value> for FieldValue {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;
        match value {
            Value::Null => FieldValue::Null,
            Value::Bool(b) => FieldValue::Bool(b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => FieldValue::Integer(i),
                None => n.as_f64().map_or(FieldValue::Null, FieldValue::Float),
            },
            Value::String(s) => FieldValue::Text(s),
            Value::Array(items) => FieldValue::List(items.into_iter().map(Into::into).collect()),
            Value::Object(map) => FieldValue::Node(
                map.into_iter()
                    .map(|(key, value)| (key, FieldValue::from(value)))
                    .collect(),
            ),
        }
    }
}

impl From<SyntaxNode> for FieldValue {
    fn from(node: SyntaxNode) -> Self {
        FieldValue::Node(node)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<i64> for FieldValue {
    fn from(i: i64) -> Self {
        FieldValue::Integer(i)
    }
}

impl From<Vec<SyntaxNode>> for FieldValue {
    fn from(nodes: Vec<SyntaxNode>) -> Self {
        FieldValue::List(nodes.into_iter().map(FieldValue::Node).collect())
    }
}

impl<'de> Deserialize<'de> for FieldValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(FieldValueVisitor)
    }
}

struct FieldValueVisitor;

impl<'de> Visitor<'de> for FieldValueVisitor {
    type Value = FieldValue;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a JSON value")
    }

    fn visit_bool<E: de::Error>(self, value: bool) -> Result<FieldValue, E> {
        Ok(FieldValue::Bool(value))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<FieldValue, E> {
        Ok(FieldValue::Integer(value))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<FieldValue, E> {
        Ok(i64::try_from(value).map_or(FieldValue::Float(value as f64), FieldValue::Integer))
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<FieldValue, E> {
        Ok(FieldValue::Float(value))
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<FieldValue, E> {
        Ok(FieldValue::Text(value.to_string()))
    }

    fn visit_string<E: de::Error>(self, value: String) -> Result<FieldValue, E> {
        Ok(FieldValue::Text(value))
    }

    fn visit_unit<E: de::Error>(self) -> Result<FieldValue, E> {
        Ok(FieldValue::Null)
    }

    fn visit_none<E: de::Error>(self) -> Result<FieldValue, E> {
        Ok(FieldValue::Null)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<FieldValue, D::Error> {
        FieldValue::deserialize(deserializer)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<FieldValue, A::Error> {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element()? {
            items.push(item);
        }
        Ok(FieldValue::List(items))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<FieldValue, A::Error> {
        let mut node = SyntaxNode::new();
        while let Some((name, value)) = map.next_entry::<String, FieldValue>()? {
            node.fields.insert(name, value);
        }
        Ok(FieldValue::Node(node))
    }
}

/// One record of the syntax-tree dump. Field order is preserved as read.
///
/// Location sub-structures (`loc`, `range.begin`) are records too; they simply
/// carry no `kind`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SyntaxNode {
    fields: IndexMap<String, FieldValue>,
}

impl SyntaxNode {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shorthand for a record with only a `kind` field.
    pub fn of_kind(kind: impl Into<String>) -> Self {
        Self::new().with(KIND_FIELD, FieldValue::Text(kind.into()))
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) {
        self.fields.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    pub fn get_node(&self, name: &str) -> Option<&SyntaxNode> {
        self.get(name).and_then(FieldValue::as_node)
    }

    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(FieldValue::as_str)
    }

    pub fn get_integer(&self, name: &str) -> Option<i64> {
        self.get(name).and_then(FieldValue::as_integer)
    }

    /// The construct tag, if this record is a tree node rather than a plain sub-record.
    pub fn kind(&self) -> Option<&str> {
        self.get_str(KIND_FIELD).filter(|k| !k.is_empty())
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl FromIterator<(String, FieldValue)> for SyntaxNode {
    fn from_iter<T: IntoIterator<Item = (String, FieldValue)>>(iter: T) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

/// Drops iteratively; dumps nest far deeper than the stack allows recursion for.
impl Drop for SyntaxNode {
    fn drop(&mut self) {
        let mut pending: Vec<FieldValue> = self
            .fields
            .drain(..)
            .map(|(_, value)| value)
            .filter(FieldValue::is_nested)
            .collect();
        while let Some(value) = pending.pop() {
            match value {
                FieldValue::Node(mut node) => pending.extend(
                    node.fields
                        .drain(..)
                        .map(|(_, value)| value)
                        .filter(FieldValue::is_nested),
                ),
                FieldValue::List(items) => {
                    pending.extend(items.into_iter().filter(FieldValue::is_nested))
                }
                _ => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn json_objects_become_nodes_in_field_order() {
        let value = FieldValue::from(json!({
            "kind": "FunctionDecl",
            "name": "main",
            "loc": { "line": 3 },
            "inner": [ { "kind": "CompoundStmt" } ]
        }));

        let node = value.as_node().expect("object maps to node");
        let names: Vec<&str> = node.fields().map(|(k, _)| k).collect();
        assert_eq!(names, vec!["kind", "name", "loc", "inner"]);
        assert_eq!(node.kind(), Some("FunctionDecl"));
        assert_eq!(node.get_node("loc").and_then(|l| l.get_integer("line")), Some(3));
        assert_eq!(node.get("inner").and_then(FieldValue::as_list).map(<[_]>::len), Some(1));
    }

    #[test]
    fn numbers_keep_integer_shape_when_possible() {
        assert_eq!(FieldValue::from(json!(7)), FieldValue::Integer(7));
        assert_eq!(FieldValue::from(json!(1.5)), FieldValue::Float(1.5));
        assert_eq!(
            FieldValue::from(json!(u64::MAX)),
            FieldValue::Float(u64::MAX as f64)
        );
    }

    #[test]
    fn record_without_kind_is_not_a_tree_node() {
        let loc = SyntaxNode::new().with("line", 4i64);
        assert_eq!(loc.kind(), None);

        let blank = SyntaxNode::of_kind("");
        assert_eq!(blank.kind(), None);
    }

    #[test]
    fn deserializes_directly_in_field_order() {
        let value: FieldValue = serde_json::from_str(
            r#"{"kind": "IntegerLiteral", "value": "1", "loc": {"line": 2}, "big": 18446744073709551615, "inner": [null, true, 1.5]}"#,
        )
        .unwrap();
        let node = value.as_node().unwrap();
        let names: Vec<&str> = node.fields().map(|(k, _)| k).collect();
        assert_eq!(names, vec!["kind", "value", "loc", "big", "inner"]);
        assert_eq!(node.get("big"), Some(&FieldValue::Float(u64::MAX as f64)));
        assert_eq!(
            node.get("inner").and_then(FieldValue::as_list),
            Some(&[FieldValue::Null, FieldValue::Bool(true), FieldValue::Float(1.5)][..])
        );
        assert_eq!(value, FieldValue::from(serde_json::json!({
            "kind": "IntegerLiteral", "value": "1", "loc": {"line": 2},
            "big": 18446744073709551615u64, "inner": [null, true, 1.5]
        })));
    }

    #[test]
    fn dropping_a_deep_tree_does_not_overflow() {
        let mut node = SyntaxNode::of_kind("IntegerLiteral");
        for _ in 0..200_000 {
            node = SyntaxNode::of_kind("ParenExpr").with("inner", vec![node]);
        }
        drop(FieldValue::Node(node));
    }
}
