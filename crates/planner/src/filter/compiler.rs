use filter_syntax::ast::node::Node;

/// A trait for compiling filter trees into a specific format.
pub trait FilterCompiler {
    /// The type of filter that this compiler produces.
    type Filter;

    /// Compile the tree rooted at `root` into a filter.
    fn compile(root: &Node) -> Self::Filter;
}
