use super::Stack;

use crate::{
    expression::{Evaluation, Expression, Status},
    number::Number,
    ops::{Catalog, Opcode},
};

/// Stack machine executing compiled expressions.
///
/// The VM checks stack depth as it goes: an opcode that would underflow stops
/// execution with `MissingParameters` instead of reading garbage. A VM can be
/// reused; each run starts from an empty stack.
pub struct Vm<'c, T> {
    catalog: &'c Catalog,
    stack: Stack<T>,
}

impl<T: Number> Vm<'static, T> {
    /// VM over the process-wide catalog.
    pub fn global() -> Self {
        Self::new(Catalog::global())
    }
}

impl<'c, T: Number> Vm<'c, T> {
    pub fn new(catalog: &'c Catalog) -> Self {
        Self::with_capacity(catalog, 16)
    }

    /// VM whose stack starts with room for `capacity` values, typically the
    /// checker's `max_depth` for the expression about to run.
    pub fn with_capacity(catalog: &'c Catalog, capacity: usize) -> Self {
        Vm {
            catalog,
            stack: Stack::with_capacity(capacity),
        }
    }

    /// Execute `expr` and classify the final stack.
    ///
    /// - one value left: that value, `Good`
    /// - several values left: the top value, `StackLeftovers`
    /// - nothing left, or an opcode underflowed: zero, `MissingParameters`
    /// - `expr` failed to compile, or uses an opcode outside the catalog:
    ///   zero, `InvalidExpression` (nothing is executed in the first case)
    pub fn run(&mut self, expr: &Expression<T>) -> Evaluation<T> {
        self.stack.clear();

        if !expr.is_valid() {
            tracing::debug!("Refusing to run an invalid expression");
            return Evaluation::failed(Status::InvalidExpression);
        }

        let mut constants = expr.constants().iter();

        for (index, &op) in expr.ops().iter().enumerate() {
            if !self.catalog.contains(op) {
                tracing::debug!(index, ?op, "Opcode not registered in catalog");
                return Evaluation::failed(Status::InvalidExpression);
            }

            let executed = match op {
                Opcode::Push => match constants.next() {
                    Some(&value) => {
                        self.stack.push(value);
                        true
                    }
                    None => {
                        tracing::debug!(index, "Push without a matching constant");
                        return Evaluation::failed(Status::InvalidExpression);
                    }
                },
                Opcode::Dup => self.stack.dup(),
                Opcode::Drop => self.stack.pop().is_some(),
                Opcode::Swap => self.stack.swap(),
                op if op.arity().consumed == 2 => self.apply_binary(op),
                op => self.apply_unary(op),
            };

            if !executed {
                tracing::debug!(index, ?op, depth = self.stack.len(), "Stack underflow");
                return Evaluation::failed(Status::MissingParameters);
            }
        }

        match (self.stack.len(), self.stack.peek()) {
            (1, Some(&value)) => Evaluation {
                value,
                status: Status::Good,
            },
            (_, Some(&value)) => Evaluation {
                value,
                status: Status::StackLeftovers,
            },
            (_, None) => Evaluation::failed(Status::MissingParameters),
        }
    }

    /// `[..., a, b] -> [..., f(a, b)]`
    #[inline]
    fn apply_binary(&mut self, op: Opcode) -> bool {
        let Some([a, b]) = self.stack.pop_n::<2>() else {
            return false;
        };
        let result = match op {
            Opcode::Add => a + b,
            Opcode::Sub => a - b,
            Opcode::Mul => a * b,
            Opcode::Div => a / b,
            Opcode::Root => a.root(b),
            Opcode::Pow => a.powf(b),
            Opcode::Log => a.log(b),
            _ => unreachable!("{:?} is not a binary function", op),
        };
        self.stack.push(result);
        true
    }

    /// `[..., x] -> [..., f(x)]`
    #[inline]
    fn apply_unary(&mut self, op: Opcode) -> bool {
        let Some(x) = self.stack.pop() else {
            return false;
        };
        let result = match op {
            Opcode::Sqrt => x.sqrt(),
            Opcode::Cbrt => x.cbrt(),
            Opcode::Root4 => x.sqrt().sqrt(),
            Opcode::Exp => x.exp(),
            Opcode::Exp2 => x.exp2(),
            Opcode::Exp10 => T::TEN.powf(x),
            Opcode::Ln => x.ln(),
            Opcode::Log2 => x.log2(),
            Opcode::Log10 => x.log10(),
            Opcode::Sin => x.sin(),
            Opcode::Cos => x.cos(),
            Opcode::Tan => x.tan(),
            Opcode::Asin => x.asin(),
            Opcode::Acos => x.acos(),
            Opcode::Atan => x.atan(),
            Opcode::Sinh => x.sinh(),
            Opcode::Cosh => x.cosh(),
            Opcode::Tanh => x.tanh(),
            Opcode::Asinh => x.asinh(),
            Opcode::Acosh => x.acosh(),
            Opcode::Atanh => x.atanh(),
            _ => unreachable!("{:?} is not a unary function", op),
        };
        self.stack.push(result);
        true
    }
}

/// Evaluate `expr` once with a fresh VM.
pub fn eval_expression<T: Number>(catalog: &Catalog, expr: &Expression<T>) -> Evaluation<T> {
    Vm::new(catalog).run(expr)
}
