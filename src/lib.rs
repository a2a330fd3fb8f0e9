//! rpnf - reverse-Polish-notation formulas
//!
//! # Overview
//!
//! Formulas are whitespace-separated tokens: numeric literals push a value,
//! mnemonics (`add`, `swap`, `sqrt`, `atanh`, ...) operate on the stack.
//! A formula is compiled once and can then be checked and evaluated any
//! number of times.
//!
//! # Quick Start
//!
//! ```
//! use rpnf::{Engine, EngineOptions, Status};
//!
//! let engine = Engine::new(EngineOptions::default());
//!
//! let expr = engine.compile::<f64>("3 4 dup mul swap dup mul add sqrt");
//! let result = engine.run(&expr);
//! assert_eq!(result.status, Status::Good);
//! assert_eq!(result.value, 5.0);
//! ```
//!
//! # Statuses
//!
//! Malformed input never panics. Every result carries a [`Status`]:
//! `Good`, `StackLeftovers`, `InvalidExpression`, `MissingParameters` or the
//! reserved `Other`.

pub mod error_renderer;

pub use error_renderer::{
    render_error, render_error_to, render_error_to_string, render_error_to_string_no_color,
};

// Re-export public API from rpnf_core
pub use rpnf_core::api::{ConfigError, Engine, EngineOptions, Error, ExecutionOptions, FamilyList};
pub use rpnf_core::checker::{StackProfile, analyze, check_expression};
pub use rpnf_core::compiler::{CompileError, Compiler, Span};
pub use rpnf_core::ops::{Arity, Catalog, Families, Opcode};
pub use rpnf_core::vm::{Vm, eval_expression};
pub use rpnf_core::{Evaluation, Expression, ExpressionBuilder, Number, Status};
