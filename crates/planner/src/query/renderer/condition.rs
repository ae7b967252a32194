use crate::query::{
    ast::condition::{Condition, ConditionNode, WhereClause},
    renderer::{Render, Renderer},
};

impl ConditionNode {
    /// Pushes `property op ` (with the trailing space) for this node.
    pub(crate) fn render_head(&self, r: &mut Renderer) {
        r.sql.push_str(&self.property);
        r.sql.push(' ');
        if let Some(op) = &self.operator {
            r.sql.push_str(op.as_str());
        }
        r.sql.push(' ');
    }
}

impl Condition {
    /// Renders the chain starting at `index`, depth-first.
    ///
    /// A node with a value is a leaf: `<tag>(property op ?)`. A node without
    /// one wraps the rest of the chain: `(property op <rest>)`. A trailing node
    /// with neither renders nothing.
    fn render_from(&self, index: usize, r: &mut Renderer) {
        let Some(node) = self.nodes.get(index) else {
            return;
        };

        if let Some(value) = &node.value {
            if let Some(logical) = &node.logical {
                r.sql.push_str(logical.prefix());
            }
            r.sql.push('(');
            node.render_head(r);
            r.add_param(value.clone());
            r.sql.push(')');
            return;
        }

        if index + 1 < self.nodes.len() {
            r.sql.push('(');
            node.render_head(r);
            self.render_from(index + 1, r);
            r.sql.push(')');
        }
    }
}

impl Render for Condition {
    fn render(&self, r: &mut Renderer) {
        self.render_from(0, r);
    }
}

impl Render for WhereClause {
    fn render(&self, r: &mut Renderer) {
        let grouped = self.conditions.len() > 1;
        if grouped {
            r.sql.push('(');
        }
        // Conditions carry their own leading logical text, if any.
        for condition in &self.conditions {
            condition.render(r);
        }
        if grouped {
            r.sql.push(')');
        }
    }
}

#[cfg(test)]
mod tests {
    use model::core::value::Value;

    use crate::query::{
        and,
        ast::condition::WhereClause,
        condition, not, or,
        renderer::{Render, Renderer},
    };

    fn render(node: &impl Render) -> (String, Vec<Value>) {
        let mut renderer = Renderer::new();
        node.render(&mut renderer);
        renderer.finish()
    }

    #[test]
    fn test_render_leaf_condition() {
        let (sql, params) = render(&condition("gold").less(25));
        assert_eq!(sql, "(gold < ?)");
        assert_eq!(params, vec![Value::Int(25)]);
    }

    #[test]
    fn test_render_nested_chain() {
        let (sql, params) = render(&condition("score").greater_nested().condition("age").plus(5));
        assert_eq!(sql, "(score > (age + ?))");
        assert_eq!(params, vec![Value::Int(5)]);
    }

    #[test]
    fn test_render_deep_arithmetic_chain() {
        let chain = condition("score")
            .greater_nested()
            .condition("age")
            .plus_nested()
            .condition("wealth")
            .minus_nested()
            .condition("heart")
            .multiply(10);

        let (sql, params) = render(&chain);
        assert_eq!(sql, "(score > (age + (wealth - (heart * ?))))");
        assert_eq!(params, vec![Value::Int(10)]);
    }

    #[test]
    fn test_value_on_head_stops_the_chain() {
        let chain = condition("a").equal(1).condition("b").equal(2);
        let (sql, params) = render(&chain);
        assert_eq!(sql, "(a = ?)");
        assert_eq!(params, vec![Value::Int(1)]);
    }

    #[test]
    fn test_bound_values_matches_rendered_placeholders() {
        let chains = vec![
            condition("a").equal(1).condition("b").equal(2),
            condition("a").greater_nested().condition("b").plus(1).condition("c").minus(2),
            condition("score").greater_nested().condition("age").plus(5),
            condition("a").greater_nested(),
            condition("lonely"),
        ];

        for chain in chains {
            let (sql, params) = render(&chain);
            assert_eq!(chain.bound_values(), sql.matches('?').count(), "{sql}");
            assert_eq!(chain.bound_values(), params.len(), "{sql}");
        }
    }

    #[test]
    fn test_unfinished_chain_renders_nothing() {
        let (sql, params) = render(&condition("lonely"));
        assert_eq!(sql, "");
        assert!(params.is_empty());
    }

    #[test]
    fn test_logical_prefixes() {
        let (sql, _) = render(&and("a").equal(1));
        assert_eq!(sql, " AND (a = ?)");
        let (sql, _) = render(&or("a").equal(1));
        assert_eq!(sql, " OR (a = ?)");
        let (sql, _) = render(&not("a").not_equal("x"));
        assert_eq!(sql, "!(a <> ?)");
    }

    #[test]
    fn test_single_condition_clause_is_not_grouped() {
        let clause = WhereClause::new(vec![condition("old_friends").equal(0)]);
        let (sql, _) = render(&clause);
        assert_eq!(sql, "(old_friends = ?)");
    }

    #[test]
    fn test_multi_condition_clause_is_grouped() {
        let clause = WhereClause::new(vec![
            condition("gold").less(25),
            or("appetite").less(12),
        ]);
        let (sql, params) = render(&clause);
        assert_eq!(sql, "((gold < ?) OR (appetite < ?))");
        assert_eq!(params, vec![Value::Int(25), Value::Int(12)]);
    }
}
