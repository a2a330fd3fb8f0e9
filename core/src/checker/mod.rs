//! Static stack-arity checker.
//!
//! Simulates the stack depth of an expression without touching any values,
//! predicting exactly which status the VM would report for its shape.

use crate::{
    expression::{Expression, Status},
    ops::Catalog,
};

/// Result of simulating an expression's stack depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StackProfile {
    pub status: Status,
    /// Depth after the last simulated opcode.
    pub final_depth: usize,
    /// Deepest point reached before stopping.
    pub max_depth: usize,
    /// Index of the opcode that stopped the simulation, if any.
    pub failed_at: Option<usize>,
}

impl StackProfile {
    fn stopped(status: Status, depth: usize, max_depth: usize, at: Option<usize>) -> Self {
        Self {
            status,
            final_depth: depth,
            max_depth,
            failed_at: at,
        }
    }
}

/// Decide whether evaluating `expr` is safe and yields exactly one value.
///
/// Returns `InvalidExpression` for expressions that failed to compile (or use
/// opcodes the catalog doesn't register), `MissingParameters` when an opcode
/// would underflow or nothing is left, `StackLeftovers` when more than one
/// value remains, and `Good` otherwise.
pub fn check_expression<T>(catalog: &Catalog, expr: &Expression<T>) -> Status {
    analyze(catalog, expr).status
}

/// Same simulation as [`check_expression`], with depth details.
pub fn analyze<T>(catalog: &Catalog, expr: &Expression<T>) -> StackProfile {
    if !expr.is_valid() {
        return StackProfile::stopped(Status::InvalidExpression, 0, 0, None);
    }

    let mut depth: usize = 0;
    let mut max_depth: usize = 0;

    for (index, op) in expr.ops().iter().enumerate() {
        let Some(arity) = catalog.arity(*op) else {
            tracing::debug!(index, ?op, "Opcode not registered in catalog");
            return StackProfile::stopped(Status::InvalidExpression, depth, max_depth, Some(index));
        };

        let consumed = arity.consumed as usize;
        if depth < consumed {
            tracing::debug!(index, ?op, depth, consumed, "Stack underflow");
            return StackProfile::stopped(Status::MissingParameters, depth, max_depth, Some(index));
        }

        depth = depth - consumed + arity.produced as usize;
        max_depth = max_depth.max(depth);
    }

    let status = match depth {
        0 => Status::MissingParameters,
        1 => Status::Good,
        _ => Status::StackLeftovers,
    };
    StackProfile::stopped(status, depth, max_depth, None)
}
