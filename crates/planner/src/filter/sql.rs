//! Translates filter trees into SQL by driving a `SqlBuilder`.

use filter_syntax::ast::{
    node::{Comparison, Node, Resource},
    visitor::Visitor,
};
use tracing::debug;

use crate::{
    filter::compiler::FilterCompiler,
    query::{ast::condition::Operator, builder::sql::SqlBuilder, condition},
};

/// Walks a filter tree pre-order, feeding every node into one shared builder.
///
/// Each comparison anywhere in the tree becomes its own WHERE clause, so the
/// clauses of the whole tree end up combined with `AND`.
#[derive(Debug, Default)]
pub struct SqlVisitor {
    query: SqlBuilder,
}

impl SqlVisitor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &SqlBuilder {
        &self.query
    }

    pub fn into_query(self) -> SqlBuilder {
        self.query
    }

    fn with_query(&mut self, f: impl FnOnce(SqlBuilder) -> SqlBuilder) {
        let query = std::mem::take(&mut self.query);
        self.query = f(query);
    }

    fn resource(&mut self, n: &Resource) {
        self.with_query(|q| q.select(n.fields.iter().cloned()).from(n.tables.iter().cloned()));
    }

    fn comparison(&mut self, n: &Comparison, operator: Operator) {
        let condition = condition(&n.property).apply(operator, Some(n.value.clone()));
        self.with_query(|q| q.where_clause([condition]));
    }
}

impl Visitor for SqlVisitor {
    fn visit(&mut self, node: &Node) {
        debug!(kind = %node.kind(), children = node.children().len(), "Visiting filter node");

        match node {
            Node::Resource(n) => self.resource(n),
            Node::GreaterThan(n) => self.comparison(n, Operator::Greater),
            Node::GreaterThanOrEqual(n) => self.comparison(n, Operator::GreaterOrEqual),
            Node::LessThan(n) => self.comparison(n, Operator::Less),
            Node::LessThanOrEqual(n) => self.comparison(n, Operator::LessOrEqual),
            Node::EqualTo(n) => self.comparison(n, Operator::Equal),
            // `And` needs nothing of its own: clauses are already AND-ed.
            // `Or`, `Filter` and `NotEqualTo` have no SQL translation yet;
            // only their children contribute.
            Node::And(_) | Node::Or(_) | Node::Filter(_) | Node::NotEqualTo(_) => {}
        }

        for child in node.children() {
            child.accept(self);
        }
    }
}

pub struct SqlFilterCompiler;

impl FilterCompiler for SqlFilterCompiler {
    type Filter = SqlBuilder;

    fn compile(root: &Node) -> Self::Filter {
        let mut visitor = SqlVisitor::new();
        root.accept(&mut visitor);
        visitor.into_query()
    }
}
