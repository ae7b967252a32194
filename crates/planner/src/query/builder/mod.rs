pub mod condition;
pub mod sql;
