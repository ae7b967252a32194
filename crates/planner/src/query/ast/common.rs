//! Defines common, reusable AST nodes for building SQL queries.

use std::{fmt, str::FromStr};

use crate::error::QueryError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OrderDir {
    #[default]
    Asc,
    Desc,
}

impl OrderDir {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderDir::Asc => "ASC",
            OrderDir::Desc => "DESC",
        }
    }
}

impl fmt::Display for OrderDir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for OrderDir {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ASC" => Ok(OrderDir::Asc),
            "DESC" => Ok(OrderDir::Desc),
            _ => Err(QueryError::InvalidOrderDirection(s.to_string())),
        }
    }
}
