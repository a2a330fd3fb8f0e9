//! Compiled expressions and evaluation results.

use core::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::number::Number;
use crate::ops::Opcode;

/// Outcome classification shared by the compiler, the checker and the VM.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Status {
    #[default]
    Good,
    /// Execution finished with more than one value on the stack.
    StackLeftovers,
    /// A token matched neither a numeric literal nor an enabled mnemonic.
    InvalidExpression,
    /// An opcode needed more operands than the stack held, or nothing was left.
    MissingParameters,
    /// Reserved. Nothing in this crate produces it.
    Other,
}

impl Status {
    pub fn is_good(self) -> bool {
        self == Status::Good
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Status::Good => "good",
            Status::StackLeftovers => "good, but there were leftovers on the stack",
            Status::InvalidExpression => "provided expression was invalid",
            Status::MissingParameters => {
                "one or more parameters were missing during the evaluation"
            }
            Status::Other => "other",
        })
    }
}

/// Value produced by the VM together with its status.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation<T> {
    pub value: T,
    pub status: Status,
}

impl<T: Number> Evaluation<T> {
    pub(crate) fn failed(status: Status) -> Self {
        Self {
            value: T::ZERO,
            status,
        }
    }
}

/// Structural problems with a hand-built or decoded expression.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExpressionError {
    #[error("expression has {pushes} push opcode(s) but {constants} constant(s)")]
    ConstantCountMismatch { pushes: usize, constants: usize },
    /// Only `Good` and `InvalidExpression` are compile-time statuses.
    #[error("`{0:?}` is not a compile-time status")]
    UnexpectedStatus(Status),
}

/// A compiled formula: opcodes, the constants consumed by its `Push` opcodes
/// (in order), and the status assigned at compile time.
///
/// Immutable once built. It can be checked and evaluated any number of times.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "RawExpression<T>",
    bound(deserialize = "T: Number + Deserialize<'de>")
)]
pub struct Expression<T> {
    ops: Vec<Opcode>,
    constants: Vec<T>,
    status: Status,
}

impl<T: Number> Expression<T> {
    /// Assemble an expression from its parts.
    ///
    /// Fails unless there is exactly one constant per `Push` opcode.
    pub fn from_parts(ops: Vec<Opcode>, constants: Vec<T>) -> Result<Self, ExpressionError> {
        Self::with_status(ops, constants, Status::Good)
    }

    fn with_status(
        ops: Vec<Opcode>,
        constants: Vec<T>,
        status: Status,
    ) -> Result<Self, ExpressionError> {
        if !matches!(status, Status::Good | Status::InvalidExpression) {
            return Err(ExpressionError::UnexpectedStatus(status));
        }
        let pushes = ops.iter().filter(|op| **op == Opcode::Push).count();
        if pushes != constants.len() {
            return Err(ExpressionError::ConstantCountMismatch {
                pushes,
                constants: constants.len(),
            });
        }
        Ok(Self {
            ops,
            constants,
            status,
        })
    }

    pub fn builder() -> ExpressionBuilder<T> {
        ExpressionBuilder::new()
    }
}

impl<T> Expression<T> {
    /// Only called by the compiler, which keeps the push/constant invariant.
    pub(crate) fn new_unchecked(ops: Vec<Opcode>, constants: Vec<T>, status: Status) -> Self {
        Self {
            ops,
            constants,
            status,
        }
    }

    pub fn ops(&self) -> &[Opcode] {
        &self.ops
    }

    pub fn constants(&self) -> &[T] {
        &self.constants
    }

    /// Compile-time status: `Good` or `InvalidExpression`.
    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_valid(&self) -> bool {
        self.status != Status::InvalidExpression
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }
}

impl<T: fmt::Display> fmt::Display for Expression<T> {
    /// Writes the expression back as RPN source, canonical mnemonics only.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut constants = self.constants.iter();
        for (i, op) in self.ops.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            match op {
                Opcode::Push => match constants.next() {
                    Some(value) => write!(f, "{}", value)?,
                    None => f.write_str("?")?,
                },
                op => write!(f, "{}", op)?,
            }
        }
        Ok(())
    }
}

#[derive(Deserialize)]
struct RawExpression<T> {
    ops: Vec<Opcode>,
    constants: Vec<T>,
    status: Status,
}

impl<T: Number> TryFrom<RawExpression<T>> for Expression<T> {
    type Error = ExpressionError;

    fn try_from(raw: RawExpression<T>) -> Result<Self, Self::Error> {
        Self::with_status(raw.ops, raw.constants, raw.status)
    }
}

/// Programmatic construction of an [`Expression`].
///
/// ```
/// use rpnf_core::{Expression, ops::Opcode};
///
/// let expr = Expression::<f64>::builder().push(1.0).push(2.0).op(Opcode::Add).build();
/// assert_eq!(expr.to_string(), "1 2 add");
/// ```
#[derive(Debug, Clone)]
pub struct ExpressionBuilder<T> {
    ops: Vec<Opcode>,
    constants: Vec<T>,
}

impl<T: Number> ExpressionBuilder<T> {
    pub fn new() -> Self {
        Self {
            ops: Vec::new(),
            constants: Vec::new(),
        }
    }

    /// Append a `Push` of `value`.
    pub fn push(mut self, value: T) -> Self {
        self.ops.push(Opcode::Push);
        self.constants.push(value);
        self
    }

    /// Append a non-push opcode.
    ///
    /// # Panics
    ///
    /// Panics on `Opcode::Push`, which needs a constant; use
    /// [`push`](Self::push) instead.
    pub fn op(mut self, op: Opcode) -> Self {
        assert_ne!(op, Opcode::Push, "use ExpressionBuilder::push for constants");
        self.ops.push(op);
        self
    }

    pub fn build(self) -> Expression<T> {
        Expression::new_unchecked(self.ops, self.constants, Status::Good)
    }
}

impl<T: Number> Default for ExpressionBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}
