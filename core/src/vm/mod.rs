//! Stack VM evaluating compiled expressions.

mod runtime;
mod stack;


pub use runtime::{Vm, eval_expression};
pub use stack::Stack;
