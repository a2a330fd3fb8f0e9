//! Shared harness for formula test cases.
//!
//! Each `test_case!` compiles `input` with the shared engine and compares the
//! outcome of both execution paths: the bare VM and the default checker-gated
//! `Engine::run`. `value` may be omitted for statuses that don't care about
//! the reported value.

#![allow(dead_code)]

use once_cell::sync::Lazy;
use rpnf::{Engine, Evaluation, ExecutionOptions, Status};

pub static ENGINE: Lazy<Engine> = Lazy::new(Engine::default);

/// Compile and evaluate without the checker gate, the way the VM sees it.
pub fn eval(input: &str) -> Evaluation<f64> {
    let expr = ENGINE.compile::<f64>(input);
    ENGINE.run_with_options(&expr, &ExecutionOptions { verify: false })
}

/// Compile and run through the default, checker-gated path.
pub fn run(input: &str) -> Evaluation<f64> {
    let expr = ENGINE.compile::<f64>(input);
    ENGINE.run(&expr)
}

/// Status predicted by the arity checker.
pub fn check(input: &str) -> Status {
    let expr = ENGINE.compile::<f64>(input);
    ENGINE.check(&expr).status
}

pub fn approx_eq(a: f64, b: f64) -> bool {
    if a.is_nan() || b.is_nan() {
        return a.is_nan() && b.is_nan();
    }
    if a.is_infinite() || b.is_infinite() {
        return a == b;
    }
    (a - b).abs() <= 1e-9 * b.abs().max(1.0)
}

#[macro_export]
macro_rules! test_case {
    (
        name: $name:ident,
        input: $input:expr,
        status: $status:expr,
        value: $value:expr $(,)?
    ) => {
        #[test]
        fn $name() {
            for (path, result) in [
                ("vm", $crate::cases::eval($input)),
                ("engine", $crate::cases::run($input)),
            ] {
                assert_eq!(result.status, $status, "{} status of {:?}", path, $input);
                assert!(
                    $crate::cases::approx_eq(result.value, $value),
                    "{} value of {:?}: expected {}, got {}",
                    path,
                    $input,
                    $value,
                    result.value
                );
            }
            assert_eq!($crate::cases::check($input), $status, "checker on {:?}", $input);
        }
    };
    (
        name: $name:ident,
        input: $input:expr,
        status: $status:expr $(,)?
    ) => {
        #[test]
        fn $name() {
            assert_eq!($crate::cases::eval($input).status, $status, "vm status of {:?}", $input);
            assert_eq!($crate::cases::run($input).status, $status, "engine status of {:?}", $input);
            assert_eq!($crate::cases::check($input), $status, "checker on {:?}", $input);
        }
    };
}
