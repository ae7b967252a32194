//! Fluent construction of condition chains.
//!
//! Every operator call applies to the tail of the chain, and `condition`
//! appends a new tail, so `score > (age + ?)` reads as
//! `condition("score").greater_nested().condition("age").plus(5)`.

use model::core::value::Value;

use crate::query::{
    ast::condition::{Condition, ConditionNode, LogicalOperator, Operator},
    macros::operator_setters,
};

impl Condition {
    pub fn new(property: &str) -> Self {
        Self {
            nodes: vec![ConditionNode::new(property)],
        }
    }

    /// Starts a chain whose head carries a logical tag.
    pub fn tagged(property: &str, logical: LogicalOperator) -> Self {
        let mut head = ConditionNode::new(property);
        head.logical = Some(logical);
        Self { nodes: vec![head] }
    }

    /// Sets the operator of the tail and, when given, its bound value.
    pub fn apply(mut self, operator: Operator, value: Option<Value>) -> Self {
        if let Some(tail) = self.nodes.last_mut() {
            tail.operator = Some(operator);
            if value.is_some() {
                tail.value = value;
            }
        }
        self
    }

    /// Appends a new node named `property` to the tail of the chain.
    pub fn condition(mut self, property: &str) -> Self {
        self.nodes.push(ConditionNode::new(property));
        self
    }

    operator_setters! {
        greater, greater_nested => Operator::Greater;
        less, less_nested => Operator::Less;
        greater_or_equal, greater_or_equal_nested => Operator::GreaterOrEqual;
        less_or_equal, less_or_equal_nested => Operator::LessOrEqual;
        equal, equal_nested => Operator::Equal;
        not_equal, not_equal_nested => Operator::NotEqual;
        plus, plus_nested => Operator::Plus;
        minus, minus_nested => Operator::Minus;
        divide, divide_nested => Operator::Divide;
        multiply, multiply_nested => Operator::Multiply;
        modulo, modulo_nested => Operator::Modulo;
    }
}
