use crate::{
    ast::{node::Node, shorthand::ShorthandNode},
    error::FilterError,
};

pub mod ast;
pub mod error;

/// Loads a tree written in the canonical form:
/// `{"type": "greater_than", "property": "score", "value": 12, "children": []}`.
pub fn parse(source: &str) -> Result<Node, FilterError> {
    let node = serde_json::from_str(source)?;
    Ok(node)
}

/// Loads a tree written with shorthand tags:
/// `{"op": "gt", "property": "score", "value": 12, "children": []}`.
pub fn parse_shorthand(source: &str) -> Result<Node, FilterError> {
    let node: ShorthandNode = serde_json::from_str(source)?;
    node.into_node()
}
