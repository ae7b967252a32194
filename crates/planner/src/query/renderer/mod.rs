//! Defines the core rendering trait and context for converting the AST to SQL.

use model::core::value::Value;
use tracing::debug;

pub mod condition;
pub mod select;

/// Positional placeholder emitted for every bound value.
pub const PLACEHOLDER: &str = "?";

/// A trait for any AST node that can be rendered into a SQL string.
pub trait Render {
    fn render(&self, renderer: &mut Renderer);
}

/// A context that holds the state during the rendering process.
///
/// It accumulates the SQL string and the parameters. A parameter is only ever
/// added together with its placeholder, so the i-th `?` in `sql` is bound to
/// `params[i]`.
#[derive(Debug, Default)]
pub struct Renderer {
    pub sql: String,
    pub params: Vec<Value>,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consumes the renderer and returns the final SQL string and parameters.
    pub fn finish(self) -> (String, Vec<Value>) {
        (self.sql, self.params)
    }

    pub fn add_param(&mut self, value: Value) {
        debug!(
            position = self.params.len() + 1,
            kind = value.type_name(),
            "Binding parameter"
        );
        self.params.push(value);
        self.sql.push_str(PLACEHOLDER);
    }

    /// Pushes `items` separated by `", "`.
    pub fn push_list(&mut self, items: &[String]) {
        self.sql.push_str(&items.join(", "));
    }
}
