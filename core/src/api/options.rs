//! Configuration options for the engine.

use core::str::FromStr;

use super::ConfigError;
use crate::ops::Families;

/// Configuration options for expression execution.
///
/// # Example
///
/// ```
/// use rpnf_core::api::ExecutionOptions;
///
/// let options = ExecutionOptions { verify: false };
/// assert!(ExecutionOptions::default().verify);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionOptions {
    /// Run the arity checker before evaluating, and skip evaluation when it
    /// reports anything but `Good`.
    ///
    /// The VM checks stack depth on its own, so turning this off is safe; it
    /// only changes whether a malformed expression is executed up to the
    /// failing opcode.
    ///
    /// Default: true
    pub verify: bool,
}

impl Default for ExecutionOptions {
    fn default() -> Self {
        Self { verify: true }
    }
}

/// Configuration options for the engine.
///
/// # Example
///
/// ```
/// use rpnf_core::api::{EngineOptions, ExecutionOptions};
/// use rpnf_core::ops::Families;
///
/// let options = EngineOptions {
///     families: Families::BASIC | Families::ROOTS,
///     execution: ExecutionOptions::default(),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EngineOptions {
    /// Operation families registered in the engine's catalog.
    ///
    /// Default: all families
    pub families: Families,

    /// Default options for execution.
    pub execution: ExecutionOptions,
}

/// Family selection parsed from a comma-separated list such as
/// `"basic,trig,inverse-trig"`.
///
/// ```
/// use rpnf_core::api::FamilyList;
/// use rpnf_core::ops::Families;
///
/// let list: FamilyList = "basic, roots".parse().unwrap();
/// assert_eq!(list.0, Families::BASIC | Families::ROOTS);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FamilyList(pub Families);

impl FromStr for FamilyList {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut families = Families::empty();
        for name in s.split(',').map(str::trim).filter(|name| !name.is_empty()) {
            families |= family_by_name(name)
                .ok_or_else(|| ConfigError::UnknownFamily(name.to_string()))?;
        }
        Ok(FamilyList(families))
    }
}

fn family_by_name(name: &str) -> Option<Families> {
    Some(match name.to_ascii_lowercase().as_str() {
        "all" => Families::all(),
        "stack" => Families::STACK,
        "basic" | "arithmetic" => Families::BASIC,
        "roots" | "root" => Families::ROOTS,
        "exp" | "exponential" => Families::EXPONENTIAL,
        "log" | "logarithm" => Families::LOGARITHM,
        "trig" | "trigonometric" => Families::TRIGONOMETRIC,
        "inverse-trig" | "inverse-trigonometric" => Families::INVERSE_TRIGONOMETRIC,
        "hyperbolic" => Families::HYPERBOLIC,
        "inverse-hyperbolic" => Families::INVERSE_HYPERBOLIC,
        _ => return None,
    })
}
