use crate::query::{
    ast::{
        condition::{JoinClause, LogicalOperator},
        select::{GroupByExpr, Select},
    },
    renderer::{Render, Renderer},
};

impl Render for Select {
    fn render(&self, r: &mut Renderer) {
        // 1. SELECT
        r.sql.push_str("SELECT ");
        r.push_list(&self.columns);

        // 2. FROM
        r.sql.push_str(" FROM ");
        r.push_list(&self.tables);

        // 3. JOIN
        for join in &self.joins {
            r.sql.push(' ');
            join.render(r);
        }

        // 4. WHERE, skipping clauses added without conditions
        let clauses: Vec<_> = self
            .where_clauses
            .iter()
            .filter(|c| !c.conditions.is_empty())
            .collect();
        if !clauses.is_empty() {
            r.sql.push_str(" WHERE ");
            for (i, clause) in clauses.iter().enumerate() {
                if i > 0 {
                    r.sql.push_str(LogicalOperator::And.prefix());
                }
                clause.render(r);
            }
        }

        // 5. GROUP BY
        if !self.group_by.is_empty() {
            r.sql.push_str(" GROUP BY ");
            for (i, group) in self.group_by.iter().enumerate() {
                if i > 0 {
                    r.sql.push_str(", ");
                }
                group.render(r);
            }
        }
    }
}

impl Render for JoinClause {
    fn render(&self, r: &mut Renderer) {
        let on = &self.condition;
        r.sql.push_str("JOIN ");
        r.sql.push_str(&self.table);
        r.sql.push_str(" ON (");
        on.render_head(r);
        if let Some(value) = &on.value {
            r.add_param(value.clone());
        }
        r.sql.push(')');
    }
}

impl Render for GroupByExpr {
    fn render(&self, r: &mut Renderer) {
        r.sql.push_str(&self.column);
        r.sql.push(' ');
        r.sql.push_str(self.direction.as_str());
    }
}

#[cfg(test)]
mod tests {
    use model::core::value::Value;

    use crate::query::{
        ast::{
            common::OrderDir,
            condition::WhereClause,
            select::{GroupByExpr, Select},
        },
        condition, or,
        renderer::{Render, Renderer},
    };

    #[test]
    fn test_render_select_without_where() {
        let ast = Select {
            columns: vec!["id".into(), "name".into()],
            tables: vec!["users".into(), "teams".into()],
            ..Default::default()
        };

        let mut renderer = Renderer::new();
        ast.render(&mut renderer);
        let (sql, params) = renderer.finish();

        assert_eq!(sql, "SELECT id, name FROM users, teams");
        assert!(params.is_empty());
    }

    #[test]
    fn test_clauses_are_joined_with_and() {
        let ast = Select {
            columns: vec!["*".into()],
            tables: vec!["people".into()],
            where_clauses: vec![
                WhereClause::new(vec![condition("a").equal(1)]),
                WhereClause::new(vec![condition("b").equal(2), or("c").equal(3)]),
            ],
            ..Default::default()
        };

        let mut renderer = Renderer::new();
        ast.render(&mut renderer);
        let (sql, params) = renderer.finish();

        assert_eq!(
            sql,
            "SELECT * FROM people WHERE (a = ?) AND ((b = ?) OR (c = ?))"
        );
        assert_eq!(params, vec![Value::Int(1), Value::Int(2), Value::Int(3)]);
    }

    #[test]
    fn test_empty_where_clauses_are_skipped() {
        let ast = Select {
            columns: vec!["*".into()],
            tables: vec!["t".into()],
            where_clauses: vec![
                WhereClause::new(vec![]),
                WhereClause::new(vec![condition("a").equal(1)]),
                WhereClause::new(vec![]),
            ],
            ..Default::default()
        };

        let mut renderer = Renderer::new();
        ast.render(&mut renderer);
        let (sql, params) = renderer.finish();

        assert_eq!(sql, "SELECT * FROM t WHERE (a = ?)");
        assert_eq!(params, vec![Value::Int(1)]);

        let only_empty = Select {
            columns: vec!["*".into()],
            tables: vec!["t".into()],
            where_clauses: vec![WhereClause::new(vec![])],
            ..Default::default()
        };
        let mut renderer = Renderer::new();
        only_empty.render(&mut renderer);
        assert_eq!(renderer.finish().0, "SELECT * FROM t");
    }

    #[test]
    fn test_render_group_by_after_where() {
        let ast = Select {
            columns: vec!["age".into()],
            tables: vec!["people".into()],
            where_clauses: vec![WhereClause::new(vec![condition("gold").greater(1)])],
            group_by: vec![
                GroupByExpr {
                    column: "age".into(),
                    direction: OrderDir::Desc,
                },
                GroupByExpr {
                    column: "city".into(),
                    direction: OrderDir::Asc,
                },
            ],
            ..Default::default()
        };

        let mut renderer = Renderer::new();
        ast.render(&mut renderer);
        let (sql, _) = renderer.finish();

        assert_eq!(
            sql,
            "SELECT age FROM people WHERE (gold > ?) GROUP BY age DESC, city ASC"
        );
    }
}
