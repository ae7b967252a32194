use crate::query::{
    ast::condition::{Condition, LogicalOperator},
    builder::sql::SqlBuilder,
};

pub mod ast;
pub mod builder;
pub mod macros;
pub mod renderer;

/// Starts an untagged condition chain on `property`.
pub fn condition(property: &str) -> Condition {
    SqlBuilder::condition(property)
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
