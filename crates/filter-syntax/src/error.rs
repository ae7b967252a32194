use thiserror::Error;

use crate::ast::node::NodeKind;

#[derive(Error, Debug)]
pub enum FilterError {
    #[error("Failed to parse filter tree: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Node '{kind}' is missing required field '{field}'")]
    MissingField { kind: NodeKind, field: &'static str },
}
