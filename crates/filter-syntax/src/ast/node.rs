//! Defines the filter tree: a `Resource` root plus logical and comparison nodes.

use model::core::value::Value;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::ast::visitor::Visitor;

/// A node of a filter tree. Every variant owns its children, in traversal order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Node {
    /// Root of every query: the tables to read and the fields to return.
    Resource(Resource),
    Filter(Group),
    And(Group),
    Or(Group),
    GreaterThan(Comparison),
    GreaterThanOrEqual(Comparison),
    LessThan(Comparison),
    LessThanOrEqual(Comparison),
    EqualTo(Comparison),
    NotEqualTo(Comparison),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub tables: Vec<String>,
    pub fields: Vec<String>,
    #[serde(default)]
    pub children: Vec<Node>,
}

/// Payload of the grouping nodes (`Filter`, `And`, `Or`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Group {
    #[serde(default)]
    pub children: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    pub property: String,
    pub value: Value,
    #[serde(default)]
    pub children: Vec<Node>,
}

impl Comparison {
    pub fn new(property: &str, value: impl Into<Value>) -> Self {
        Self {
            property: property.to_string(),
            value: value.into(),
            children: Vec::new(),
        }
    }
}

/// The variant of a `Node` without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Resource,
    Filter,
    And,
    Or,
    GreaterThan,
    GreaterThanOrEqual,
    LessThan,
    LessThanOrEqual,
    EqualTo,
    NotEqualTo,
}

impl NodeKind {
    pub fn is_comparison(&self) -> bool {
        matches!(
            self,
            NodeKind::GreaterThan
                | NodeKind::GreaterThanOrEqual
                | NodeKind::LessThan
                | NodeKind::LessThanOrEqual
                | NodeKind::EqualTo
                | NodeKind::NotEqualTo
        )
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NodeKind::Resource => "resource",
            NodeKind::Filter => "filter",
            NodeKind::And => "and",
            NodeKind::Or => "or",
            NodeKind::GreaterThan => "greater_than",
            NodeKind::GreaterThanOrEqual => "greater_than_or_equal",
            NodeKind::LessThan => "less_than",
            NodeKind::LessThanOrEqual => "less_than_or_equal",
            NodeKind::EqualTo => "equal_to",
            NodeKind::NotEqualTo => "not_equal_to",
        };
        write!(f, "{name}")
    }
}

impl Node {
    pub fn resource(tables: &[&str], fields: &[&str]) -> Self {
        Node::Resource(Resource {
            tables: tables.iter().map(|t| t.to_string()).collect(),
            fields: fields.iter().map(|f| f.to_string()).collect(),
            children: Vec::new(),
        })
    }

    pub fn filter() -> Self {
        Node::Filter(Group::default())
    }

    pub fn and() -> Self {
        Node::And(Group::default())
    }

    pub fn or() -> Self {
        Node::Or(Group::default())
    }

    pub fn greater_than(property: &str, value: impl Into<Value>) -> Self {
        Node::GreaterThan(Comparison::new(property, value))
    }

    pub fn greater_than_or_equal(property: &str, value: impl Into<Value>) -> Self {
        Node::GreaterThanOrEqual(Comparison::new(property, value))
    }

    pub fn less_than(property: &str, value: impl Into<Value>) -> Self {
        Node::LessThan(Comparison::new(property, value))
    }

    pub fn less_than_or_equal(property: &str, value: impl Into<Value>) -> Self {
        Node::LessThanOrEqual(Comparison::new(property, value))
    }

    pub fn equal_to(property: &str, value: impl Into<Value>) -> Self {
        Node::EqualTo(Comparison::new(property, value))
    }

    pub fn not_equal_to(property: &str, value: impl Into<Value>) -> Self {
        Node::NotEqualTo(Comparison::new(property, value))
    }

    /// Replaces the children of this node.
    pub fn with_children(mut self, children: Vec<Node>) -> Self {
        *self.children_mut() = children;
        self
    }

    /// Hands this node to the visitor's dispatch entry point.
    pub fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) {
        visitor.visit(self);
    }

    pub fn children(&self) -> &[Node] {
        match self {
            Node::Resource(n) => &n.children,
            Node::Filter(n) | Node::And(n) | Node::Or(n) => &n.children,
            Node::GreaterThan(n)
            | Node::GreaterThanOrEqual(n)
            | Node::LessThan(n)
            | Node::LessThanOrEqual(n)
            | Node::EqualTo(n)
            | Node::NotEqualTo(n) => &n.children,
        }
    }

    fn children_mut(&mut self) -> &mut Vec<Node> {
        match self {
            Node::Resource(n) => &mut n.children,
            Node::Filter(n) | Node::And(n) | Node::Or(n) => &mut n.children,
            Node::GreaterThan(n)
            | Node::GreaterThanOrEqual(n)
            | Node::LessThan(n)
            | Node::LessThanOrEqual(n)
            | Node::EqualTo(n)
            | Node::NotEqualTo(n) => &mut n.children,
        }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Resource(_) => NodeKind::Resource,
            Node::Filter(_) => NodeKind::Filter,
            Node::And(_) => NodeKind::And,
            Node::Or(_) => NodeKind::Or,
            Node::GreaterThan(_) => NodeKind::GreaterThan,
            Node::GreaterThanOrEqual(_) => NodeKind::GreaterThanOrEqual,
            Node::LessThan(_) => NodeKind::LessThan,
            Node::LessThanOrEqual(_) => NodeKind::LessThanOrEqual,
            Node::EqualTo(_) => NodeKind::EqualTo,
            Node::NotEqualTo(_) => NodeKind::NotEqualTo,
        }
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn size(&self) -> usize {
        1 + self.children().iter().map(Node::size).sum::<usize>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct KindRecorder {
        seen: Vec<NodeKind>,
    }

    impl Visitor for KindRecorder {
        fn visit(&mut self, node: &Node) {
            self.seen.push(node.kind());
            for child in node.children() {
                child.accept(self);
            }
        }
    }

    fn sample_tree() -> Node {
        Node::resource(&["messages"], &["*"]).with_children(vec![
            Node::and().with_children(vec![
                Node::greater_than("score", 12)
                    .with_children(vec![Node::less_than("height", 25)]),
            ]),
            Node::or().with_children(vec![Node::not_equal_to("flag", true)]),
        ])
    }

    #[test]
    fn test_accept_visits_in_pre_order() {
        let mut recorder = KindRecorder { seen: vec![] };
        sample_tree().accept(&mut recorder);

        assert_eq!(
            recorder.seen,
            vec![
                NodeKind::Resource,
                NodeKind::And,
                NodeKind::GreaterThan,
                NodeKind::LessThan,
                NodeKind::Or,
                NodeKind::NotEqualTo,
            ]
        );
    }

    #[test]
    fn test_size_counts_every_node() {
        assert_eq!(sample_tree().size(), 6);
        assert_eq!(Node::filter().size(), 1);
    }

    #[test]
    fn test_deserialize_canonical_form() {
        let node: Node = serde_json::from_value(json!({
            "type": "resource",
            "tables": ["messages"],
            "fields": ["*"],
            "children": [
                { "type": "greater_than", "property": "score", "value": 12 }
            ]
        }))
        .unwrap();

        assert_eq!(
            node,
            Node::resource(&["messages"], &["*"])
                .with_children(vec![Node::greater_than("score", 12)])
        );
    }

    #[test]
    fn test_serialize_uses_snake_case_tags() {
        let value = serde_json::to_value(Node::not_equal_to("name", "bob")).unwrap();
        assert_eq!(
            value,
            json!({ "type": "not_equal_to", "property": "name", "value": "bob", "children": [] })
        );
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(NodeKind::GreaterThanOrEqual.to_string(), "greater_than_or_equal");
        assert!(NodeKind::EqualTo.is_comparison());
        assert!(!NodeKind::Filter.is_comparison());
    }
}
