//! Provides a fluent builder for parameterized `SELECT` statements.

use model::core::value::Value;
use tracing::{debug, warn};

use crate::{
    error::QueryError,
    query::{
        ast::{
            common::OrderDir,
            condition::{Condition, ConditionNode, JoinClause, LogicalOperator, Operator, WhereClause},
            select::{GroupByExpr, Select},
        },
        renderer::{Render, Renderer},
    },
};

/// Builds a `Select` one call at a time. Every method consumes the builder and
/// returns it, so calls compose left to right.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SqlBuilder {
    ast: Select,
}

impl SqlBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the selected columns, replacing any previous list.
    pub fn select<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ast.columns = columns.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the source tables, replacing any previous list.
    pub fn from<I, S>(mut self, tables: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ast.tables = tables.into_iter().map(Into::into).collect();
        self
    }

    /// Appends a new WHERE clause holding `conditions`. Clauses are never
    /// merged; separate calls are always combined with `AND`.
    pub fn where_clause<I>(mut self, conditions: I) -> Self
    where
        I: IntoIterator<Item = Condition>,
    {
        self.ast
            .where_clauses
            .push(WhereClause::new(conditions.into_iter().collect()));
        self
    }

    pub fn condition(property: &str) -> Condition {
        Condition::new(property)
    }

    pub fn and(property: &str) -> Condition {
        Condition::tagged(property, LogicalOperator::And)
    }

    pub fn or(property: &str) -> Condition {
        Condition::tagged(property, LogicalOperator::Or)
    }

    pub fn not(property: &str) -> Condition {
        Condition::tagged(property, LogicalOperator::Not)
    }

    /// Appends a `JOIN table ON (property operator ?)` clause.
    pub fn join(
        mut self,
        table: &str,
        property: &str,
        operator: Operator,
        value: impl Into<Value>,
    ) -> Self {
        let condition = ConditionNode {
            property: property.to_string(),
            operator: Some(operator),
            value: Some(value.into()),
            logical: None,
        };
        self.ast.joins.push(JoinClause {
            table: table.to_string(),
            condition,
        });
        self
    }

    /// Sets the GROUP BY columns, replacing any previous grouping.
    ///
    /// A single argument groups by that column ascending. Otherwise arguments
    /// are read as `(column, direction)` pairs; a trailing column without a
    /// direction is ascending. Unrecognised directions fall back to `ASC`.
    pub fn group_by<I, S>(mut self, column_orders: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let args: Vec<String> = column_orders.into_iter().map(Into::into).collect();

        let mut group_by: Vec<GroupByExpr> = Vec::new();
        for pair in args.chunks(2) {
            let column = pair[0].clone();
            let direction = match pair.get(1) {
                None => OrderDir::Asc,
                Some(dir) => dir.parse().unwrap_or_else(|err: QueryError| {
                    warn!("{err}; grouping '{column}' ascending");
                    OrderDir::Asc
                }),
            };

            match group_by.iter_mut().find(|g| g.column == column) {
                Some(existing) => existing.direction = direction,
                None => group_by.push(GroupByExpr { column, direction }),
            }
        }

        self.ast.group_by = group_by;
        self
    }

    /// Renders the statement text and its parameters, in placeholder order.
    ///
    /// Rendering never mutates the builder, so repeated calls return the same
    /// result.
    pub fn to_sql(&self) -> (String, Vec<Value>) {
        let mut renderer = Renderer::new();
        self.ast.render(&mut renderer);
        let (sql, params) = renderer.finish();
        debug!(params = params.len(), "Rendered statement: {sql}");
        (sql, params)
    }

    /// Like `to_sql`, but rejects statements with no columns or no tables.
    pub fn try_to_sql(&self) -> Result<(String, Vec<Value>), QueryError> {
        if self.ast.columns.is_empty() {
            return Err(QueryError::EmptySelect);
        }
        if self.ast.tables.is_empty() {
            return Err(QueryError::EmptyFrom);
        }
        Ok(self.to_sql())
    }

    pub fn ast(&self) -> &Select {
        &self.ast
    }

    /// Finalizes and returns the constructed `Select` AST.
    pub fn build(self) -> Select {
        self.ast
    }
}
