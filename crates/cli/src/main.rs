use crate::{
    error::CliError,
    output::{RenderedStatement, print_statement},
};
use clap::Parser;
use commands::Commands;
use filter_syntax::ast::node::Node;
use planner::{
    filter::{compiler::FilterCompiler, sql::SqlFilterCompiler},
    query::{and, builder::sql::SqlBuilder, condition, or},
};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod commands;
mod error;
mod output;

#[derive(Parser)]
#[command(
    name = "filterql",
    version = "0.1.0",
    about = "Translate filter trees into parameterized SQL"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<(), CliError> {
    // Initialize logger
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Render {
            tree,
            shorthand,
            json,
        } => {
            info!("Rendering filter tree: {}, shorthand: {}", tree, shorthand);

            let root = load_tree(&tree, shorthand)?;
            let statement = SqlFilterCompiler::compile(&root).try_to_sql()?;
            print_statement(&RenderedStatement::from(statement), json)?;
        }
        Commands::Demo { json } => {
            let statement = demo_builder().try_to_sql()?;
            print_statement(&RenderedStatement::from(statement), json)?;

            let statement = SqlFilterCompiler::compile(&demo_tree()).try_to_sql()?;
            print_statement(&RenderedStatement::from(statement), json)?;
        }
    }

    Ok(())
}

fn load_tree(path: &str, shorthand: bool) -> Result<Node, CliError> {
    let source = std::fs::read_to_string(path)?;
    let root = if shorthand {
        filter_syntax::parse_shorthand(&source)?
    } else {
        filter_syntax::parse(&source)?
    };
    Ok(root)
}

fn demo_builder() -> SqlBuilder {
    SqlBuilder::new()
        .select(["*"])
        .from(["people"])
        .where_clause([
            condition("score")
                .greater_nested()
                .condition("age")
                .plus_nested()
                .condition("wealth")
                .minus_nested()
                .condition("heart")
                .multiply(10),
            and("friends").greater(10),
        ])
        .where_clause([condition("gold").less(25), or("appetite").less(12)])
        .where_clause([condition("old_friends").equal(0)])
}

fn demo_tree() -> Node {
    Node::resource(&["messages"], &["*"]).with_children(vec![Node::and().with_children(vec![
        Node::greater_than("score", 12).with_children(vec![Node::less_than("height", 25)]),
    ])])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_statements_render() {
        let (sql, params) = demo_builder().try_to_sql().unwrap();
        assert!(sql.starts_with("SELECT * FROM people WHERE ((score > "));
        assert_eq!(params.len(), 5);

        let (sql, params) = SqlFilterCompiler::compile(&demo_tree()).try_to_sql().unwrap();
        assert_eq!(sql, "SELECT * FROM messages WHERE (score > ?) AND (height < ?)");
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn test_load_tree_missing_file() {
        let err = load_tree("/nonexistent/tree.json", false).unwrap_err();
        assert!(matches!(err, CliError::TreeFileRead(_)));
    }
}
