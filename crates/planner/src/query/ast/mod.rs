pub mod common;
pub mod condition;
pub mod select;
