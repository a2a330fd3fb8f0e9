//! Reverse-Polish-notation formula compiler and evaluator.
//!
//! Source text such as `"2 3 add sqrt"` is compiled into an [`Expression`]
//! (opcodes plus the constants they push), optionally checked for stack
//! shape by [`checker`], and executed by the [`vm`]. Every stage consults a
//! shared, read-only [`ops::Catalog`] describing which operations exist.
//!
//! Failures are reported as a [`Status`], never as panics:
//!
//! ```
//! use rpnf_core::{Status, compiler::Compiler, vm::Vm};
//!
//! let expr = Compiler::global().compile::<f64>("1 2");
//! let result = Vm::global().run(&expr);
//! assert_eq!(result.status, Status::StackLeftovers);
//! assert_eq!(result.value, 2.0);
//! ```

pub mod api;
pub mod checker;
pub mod compiler;
pub mod expression;
pub mod number;
pub mod ops;
pub mod vm;

pub use expression::{Evaluation, Expression, ExpressionBuilder, ExpressionError, Status};
pub use number::Number;

/// Test utilities for enabling logging in tests
#[cfg(test)]
pub mod test_utils {
    /// Initialize tracing subscriber for tests with DEBUG level
    /// Call this at the start of tests where you want to see logging output
    ///
    /// # Example
    /// ```ignore
    /// #[test]
    /// fn test_underflow() {
    ///     test_utils::init_test_logging();
    ///     // ... your test code
    /// }
    /// ```
    pub fn init_test_logging() {
        use tracing_subscriber::{EnvFilter, fmt};

        // Try to initialize, ignore error if already initialized
        let _ = fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
            )
            .with_test_writer()
            .try_init();
    }
}
