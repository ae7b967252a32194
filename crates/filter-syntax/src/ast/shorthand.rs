//! Compact tree format keyed by short operator tags (`gt`, `and`, ...).

use model::core::value::Value;
use serde::Deserialize;
use tracing::debug;

use crate::{
    ast::node::{Comparison, Group, Node, NodeKind, Resource},
    error::FilterError,
};

impl NodeKind {
    /// Maps a shorthand tag to its node kind. Unknown tags map to `Resource`.
    pub fn from_shorthand(tag: &str) -> NodeKind {
        match tag {
            "gt" => NodeKind::GreaterThan,
            "gte" => NodeKind::GreaterThanOrEqual,
            "lt" => NodeKind::LessThan,
            "lte" => NodeKind::LessThanOrEqual,
            "eq" => NodeKind::EqualTo,
            "and" => NodeKind::And,
            "or" => NodeKind::Or,
            "filter" => NodeKind::Filter,
            _ => NodeKind::Resource,
        }
    }
}

/// One record of a shorthand tree, before it is resolved into a `Node`.
#[derive(Debug, Clone, Deserialize)]
pub struct ShorthandNode {
    #[serde(default)]
    pub op: String,
    #[serde(default)]
    pub property: Option<String>,
    #[serde(default)]
    pub value: Option<Value>,
    #[serde(default)]
    pub tables: Vec<String>,
    #[serde(default)]
    pub fields: Vec<String>,
    #[serde(default)]
    pub children: Vec<ShorthandNode>,
}

impl ShorthandNode {
    pub fn into_node(self) -> Result<Node, FilterError> {
        let kind = NodeKind::from_shorthand(&self.op);
        debug!(tag = %self.op, %kind, "Resolved shorthand node");

        let children = self
            .children
            .into_iter()
            .map(ShorthandNode::into_node)
            .collect::<Result<Vec<_>, _>>()?;

        let node = match kind {
            NodeKind::Resource => Node::Resource(Resource {
                tables: self.tables,
                fields: self.fields,
                children,
            }),
            NodeKind::Filter => Node::Filter(Group { children }),
            NodeKind::And => Node::And(Group { children }),
            NodeKind::Or => Node::Or(Group { children }),
            NodeKind::GreaterThan => {
                Node::GreaterThan(comparison(kind, self.property, self.value, children)?)
            }
            NodeKind::GreaterThanOrEqual => {
                Node::GreaterThanOrEqual(comparison(kind, self.property, self.value, children)?)
            }
            NodeKind::LessThan => {
                Node::LessThan(comparison(kind, self.property, self.value, children)?)
            }
            NodeKind::LessThanOrEqual => {
                Node::LessThanOrEqual(comparison(kind, self.property, self.value, children)?)
            }
            NodeKind::EqualTo => {
                Node::EqualTo(comparison(kind, self.property, self.value, children)?)
            }
            NodeKind::NotEqualTo => {
                Node::NotEqualTo(comparison(kind, self.property, self.value, children)?)
            }
        };

        Ok(node)
    }
}

fn comparison(
    kind: NodeKind,
    property: Option<String>,
    value: Option<Value>,
    children: Vec<Node>,
) -> Result<Comparison, FilterError> {
    Ok(Comparison {
        property: property.ok_or(FilterError::MissingField {
            kind,
            field: "property",
        })?,
        value: value.ok_or(FilterError::MissingField {
            kind,
            field: "value",
        })?,
        children,
    })
}
