use model::core::value::Value;
use serde::Serialize;

use crate::error::CliError;

#[derive(Debug, Serialize)]
pub struct RenderedStatement {
    pub sql: String,
    pub params: Vec<Value>,
}

impl From<(String, Vec<Value>)> for RenderedStatement {
    fn from((sql, params): (String, Vec<Value>)) -> Self {
        Self { sql, params }
    }
}

pub fn print_statement(statement: &RenderedStatement, as_json: bool) -> Result<(), CliError> {
    if as_json {
        let json = serde_json::to_string_pretty(statement)?;
        println!("{json}");
    } else {
        println!("{}", statement.sql);
        let params = statement
            .params
            .iter()
            .map(Value::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        println!("params: [{params}]");
    }
    Ok(())
}
