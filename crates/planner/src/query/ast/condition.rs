//! Defines the WHERE-clause model: condition chains and the clauses grouping them.

use model::core::value::Value;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    // Comparison
    Greater,        // >
    Less,           // <
    GreaterOrEqual, // >=
    LessOrEqual,    // <=
    Equal,          // =
    NotEqual,       // <>

    // Arithmetic
    Plus,     // +
    Minus,    // -
    Multiply, // *
    Divide,   // /
    Modulo,   // %
}

impl Operator {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Greater => ">",
            Operator::Less => "<",
            Operator::GreaterOrEqual => ">=",
            Operator::LessOrEqual => "<=",
            Operator::Equal => "=",
            Operator::NotEqual => "<>",
            Operator::Plus => "+",
            Operator::Minus => "-",
            Operator::Multiply => "*",
            Operator::Divide => "/",
            Operator::Modulo => "%",
        }
    }

    pub fn is_arithmetic(&self) -> bool {
        matches!(
            self,
            Operator::Plus | Operator::Minus | Operator::Multiply | Operator::Divide | Operator::Modulo
        )
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Tag set on a condition created through `and`, `or` or `not`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogicalOperator {
    #[default]
    And,
    Or,
    Not,
}

impl LogicalOperator {
    /// Text emitted in front of a tagged condition.
    pub fn prefix(&self) -> &'static str {
        match self {
            LogicalOperator::And => " AND ",
            LogicalOperator::Or => " OR ",
            LogicalOperator::Not => "!",
        }
    }
}

/// One link of a condition chain.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConditionNode {
    pub property: String,
    pub operator: Option<Operator>,
    /// When set, the node renders as a parameterized leaf and the rest of the
    /// chain is ignored.
    pub value: Option<Value>,
    pub logical: Option<LogicalOperator>,
}

impl ConditionNode {
    pub fn new(property: &str) -> Self {
        Self {
            property: property.to_string(),
            ..Default::default()
        }
    }
}

/// A chain of condition nodes. The first node is where the chain was started;
/// the last one is the tail every operator call applies to.
///
/// Never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    pub(crate) nodes: Vec<ConditionNode>,
}

impl Condition {
    pub fn nodes(&self) -> &[ConditionNode] {
        &self.nodes
    }

    pub fn head(&self) -> &ConditionNode {
        &self.nodes[0]
    }

    pub fn tail(&self) -> &ConditionNode {
        &self.nodes[self.nodes.len() - 1]
    }

    /// Number of placeholders this chain renders.
    ///
    /// Rendering stops at the first node carrying a value, so values bound
    /// further down the chain are not counted.
    pub fn bound_values(&self) -> usize {
        usize::from(self.nodes.iter().any(|n| n.value.is_some()))
    }
}

/// A group of conditions added by a single `where_clause` call.
#[derive(Debug, Clone, PartialEq)]
pub struct WhereClause {
    pub logical: LogicalOperator,
    pub conditions: Vec<Condition>,
}

impl WhereClause {
    pub fn new(conditions: Vec<Condition>) -> Self {
        Self {
            logical: LogicalOperator::And,
            conditions,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct JoinClause {
    pub table: String,
    pub condition: ConditionNode,
}
