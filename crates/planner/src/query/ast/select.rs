//! Defines the statement assembled by `SqlBuilder`.

use crate::query::ast::{
    common::OrderDir,
    condition::{JoinClause, WhereClause},
};

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Select {
    /// Selected columns, e.g. `id`, `name`, `*`.
    pub columns: Vec<String>,

    /// Source tables, e.g. `FROM people`.
    pub tables: Vec<String>,

    pub joins: Vec<JoinClause>,

    /// WHERE clauses in the order they were added. Rendered joined by `AND`.
    pub where_clauses: Vec<WhereClause>,

    /// GROUP BY columns in insertion order, one entry per column.
    pub group_by: Vec<GroupByExpr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GroupByExpr {
    pub column: String,
    pub direction: OrderDir,
}
