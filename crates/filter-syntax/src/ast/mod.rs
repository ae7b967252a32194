pub mod node;
pub mod shorthand;
pub mod visitor;
