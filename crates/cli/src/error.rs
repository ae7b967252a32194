use filter_syntax::error::FilterError;
use planner::error::QueryError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Failed to read the filter tree file: {0}")]
    TreeFileRead(#[from] std::io::Error),

    #[error("Failed to load the filter tree: {0}")]
    TreeParse(#[from] FilterError),

    #[error("Failed to render the statement: {0}")]
    Render(#[from] QueryError),

    #[error("Failed to serialize data to JSON: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}
