use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("Invalid sort direction: '{0}' (expected ASC or DESC)")]
    InvalidOrderDirection(String),

    #[error("Cannot render a statement without selected columns")]
    EmptySelect,

    #[error("Cannot render a statement without source tables")]
    EmptyFrom,
}
