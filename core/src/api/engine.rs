//! The formula engine.

use super::{EngineOptions, Error, ExecutionOptions};
use crate::{
    checker::{self, StackProfile},
    compiler::Compiler,
    expression::{Evaluation, Expression, Status},
    number::Number,
    ops::Catalog,
    vm::Vm,
};

/// Compiles, checks and runs formulas against one operation catalog.
///
/// The engine builds its catalog once from [`EngineOptions::families`]. It is
/// read-only afterwards and can be shared across threads; every call owns
/// the expression and the stack it works on.
///
/// # Example
///
/// ```
/// use rpnf_core::api::{Engine, EngineOptions};
/// use rpnf_core::ops::Families;
/// use rpnf_core::Status;
///
/// let engine = Engine::new(EngineOptions {
///     families: Families::BASIC,
///     ..Default::default()
/// });
///
/// let expr = engine.compile::<f64>("1 2 add");
/// assert_eq!(engine.run(&expr).value, 3.0);
///
/// // `sin` is not registered in this engine.
/// let expr = engine.compile::<f64>("1 sin");
/// assert_eq!(engine.run(&expr).status, Status::InvalidExpression);
/// ```
#[derive(Debug, Clone)]
pub struct Engine {
    catalog: Catalog,
    options: EngineOptions,
}

impl Engine {
    pub fn new(options: EngineOptions) -> Self {
        let catalog = Catalog::new(options.families);
        Self { catalog, options }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    pub fn compiler(&self) -> Compiler<'_> {
        Compiler::new(&self.catalog)
    }

    /// Compile `source`. Unrecognized tokens yield an `InvalidExpression`.
    pub fn compile<T: Number>(&self, source: &str) -> Expression<T> {
        self.compiler().compile(source)
    }

    /// Compile `source`, reporting the offending token on failure.
    pub fn try_compile<T: Number>(&self, source: &str) -> Result<Expression<T>, Error> {
        Ok(self.compiler().try_compile(source)?)
    }

    /// Predict the status of running `expr`, without evaluating anything.
    pub fn check<T>(&self, expr: &Expression<T>) -> StackProfile {
        checker::analyze(&self.catalog, expr)
    }

    /// Run `expr` with the engine's default execution options.
    pub fn run<T: Number>(&self, expr: &Expression<T>) -> Evaluation<T> {
        self.run_with_options(expr, &self.options.execution)
    }

    /// Run `expr`, optionally gated by the arity checker.
    ///
    /// With `verify` set, an expression the checker predicts to be
    /// `InvalidExpression` or `MissingParameters` is never executed and
    /// reports zero. Anything else runs on a stack sized to the checker's
    /// `max_depth`; a `StackLeftovers` expression still reports its top of
    /// stack, exactly as [`evaluate`](Self::evaluate) does.
    pub fn run_with_options<T: Number>(
        &self,
        expr: &Expression<T>,
        options: &ExecutionOptions,
    ) -> Evaluation<T> {
        if !options.verify {
            return self.evaluate(expr);
        }

        let profile = self.check(expr);
        match profile.status {
            Status::InvalidExpression | Status::MissingParameters => {
                tracing::debug!(status = ?profile.status, failed_at = ?profile.failed_at, "Rejected by arity checker");
                Evaluation::failed(profile.status)
            }
            _ => Vm::with_capacity(&self.catalog, profile.max_depth).run(expr),
        }
    }

    /// Run `expr` on the VM directly, skipping the checker.
    pub fn evaluate<T: Number>(&self, expr: &Expression<T>) -> Evaluation<T> {
        Vm::new(&self.catalog).run(expr)
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(EngineOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{compiler::CompileError, ops::Families};

    #[test]
    fn test_compile_and_run() {
        let engine = Engine::default();
        let expr = engine.compile::<f64>("3 4 mul 2 sub");
        assert_eq!(engine.run(&expr).value, 10.0);
    }

    #[test]
    fn test_leftovers_report_top_with_or_without_verify() {
        let engine = Engine::default();
        let expr = engine.compile::<f64>("1 2");
        let checked = engine.run(&expr);
        assert_eq!(checked.status, Status::StackLeftovers);
        assert_eq!(checked.value, 2.0);

        let unchecked = engine.run_with_options(&expr, &ExecutionOptions { verify: false });
        assert_eq!(unchecked, checked);
        assert_eq!(engine.evaluate(&expr), checked);
    }

    #[test]
    fn test_verify_rejects_invalid_and_underflow_with_zero() {
        let engine = Engine::default();
        for (source, status) in [
            ("1 2 foo", Status::InvalidExpression),
            ("add", Status::MissingParameters),
            ("3 add 4 5", Status::MissingParameters),
        ] {
            let result = engine.run(&engine.compile::<f64>(source));
            assert_eq!(result.status, status, "{}", source);
            assert_eq!(result.value, 0.0, "{}", source);
        }
    }

    #[test]
    fn test_verify_and_vm_agree_on_missing_parameters() {
        let engine = Engine::default();
        let expr = engine.compile::<f64>("1 add");
        assert_eq!(engine.run(&expr).status, Status::MissingParameters);
        assert_eq!(engine.evaluate(&expr).status, Status::MissingParameters);
    }

    #[test]
    fn test_try_compile_error() {
        let engine = Engine::new(EngineOptions {
            families: Families::BASIC,
            ..Default::default()
        });
        let err = engine.try_compile::<f64>("2 sqrt").unwrap_err();
        assert!(matches!(
            err,
            Error::Compile(CompileError::UnknownToken { ref token, .. }) if token == "sqrt"
        ));
    }

    #[test]
    fn test_check_profile() {
        let engine = Engine::default();
        let expr = engine.compile::<f64>("1 2 3 add add");
        let profile = engine.check(&expr);
        assert_eq!(profile.status, Status::Good);
        assert_eq!(profile.max_depth, 3);
    }

    #[test]
    fn test_engine_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Engine>();
        assert_send_sync::<Expression<f64>>();
    }
}
