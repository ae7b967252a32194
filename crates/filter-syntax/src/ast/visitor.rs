use crate::ast::node::Node;

/// Visitor over a filter tree.
///
/// `Node::accept` hands the node to `visit`. The implementation decides what
/// the node contributes and descends into `node.children()` itself, so a
/// single `accept` on the root drives the whole traversal.
pub trait Visitor {
    fn visit(&mut self, node: &Node);
}
