//! Opcodes, their families and their stack effects.
//!
//! # Stack Discipline
//!
//! Stack effect notation: `[..., operand1, operand2] -> [..., result]`.
//! For binary functions `operand1` is the value pushed first (the left
//! operand) and `operand2` is the current top of stack.

use bitflags::bitflags;
use core::fmt;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Operation families that can be registered in a [`Catalog`].
    ///
    /// `STACK` (constant pushes and stack shuffling) is always registered,
    /// whatever the configuration says.
    ///
    /// [`Catalog`]: super::Catalog
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
    pub struct Families: u16 {
        const STACK = 1;
        const BASIC = 1 << 1;
        const ROOTS = 1 << 2;
        const EXPONENTIAL = 1 << 3;
        const LOGARITHM = 1 << 4;
        const TRIGONOMETRIC = 1 << 5;
        const INVERSE_TRIGONOMETRIC = 1 << 6;
        const HYPERBOLIC = 1 << 7;
        const INVERSE_HYPERBOLIC = 1 << 8;
    }
}

impl Default for Families {
    fn default() -> Self {
        Families::all()
    }
}

/// Number of values an opcode pops and pushes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Arity {
    pub consumed: u8,
    pub produced: u8,
}

impl Arity {
    pub const fn new(consumed: u8, produced: u8) -> Self {
        Self { consumed, produced }
    }

    /// Net change in stack depth.
    pub const fn delta(self) -> isize {
        self.produced as isize - self.consumed as isize
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.consumed, self.produced)
    }
}

/// A single stack operation (exactly one byte).
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Opcode {
    // ========================================================================
    // Stack (always on)
    // ========================================================================
    /// Push the next constant of the expression
    /// Stack: [...] -> [..., constant]
    Push = 0,
    /// Stack: [..., a] -> [..., a, a]
    Dup,
    /// Stack: [..., a] -> [...]
    Drop,
    /// Stack: [..., a, b] -> [..., b, a]
    Swap,

    // ========================================================================
    // Basic arithmetic
    // ========================================================================
    /// Stack: [..., a, b] -> [..., a + b]
    Add,
    /// Stack: [..., a, b] -> [..., a - b]
    Sub,
    /// Stack: [..., a, b] -> [..., a * b]
    Mul,
    /// Stack: [..., a, b] -> [..., a / b]
    Div,

    // ========================================================================
    // Roots
    // ========================================================================
    Sqrt,
    Cbrt,
    Root4,
    /// Stack: [..., x, y] -> [..., x^(1/y)]
    Root,

    // ========================================================================
    // Exponential
    // ========================================================================
    Exp,
    Exp2,
    Exp10,
    /// Stack: [..., x, y] -> [..., x^y]
    Pow,

    // ========================================================================
    // Logarithm
    // ========================================================================
    Ln,
    Log2,
    Log10,
    /// Stack: [..., x, y] -> [..., log_y(x)]
    Log,

    // ========================================================================
    // Trigonometric (radians)
    // ========================================================================
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,

    // ========================================================================
    // Hyperbolic
    // ========================================================================
    Sinh,
    Cosh,
    Tanh,
    Asinh,
    Acosh,
    Atanh,
}
static_assertions::assert_eq_size!(Opcode, u8);

impl Opcode {
    /// Every opcode, in discriminant order.
    pub const ALL: [Opcode; 32] = [
        Opcode::Push,
        Opcode::Dup,
        Opcode::Drop,
        Opcode::Swap,
        Opcode::Add,
        Opcode::Sub,
        Opcode::Mul,
        Opcode::Div,
        Opcode::Sqrt,
        Opcode::Cbrt,
        Opcode::Root4,
        Opcode::Root,
        Opcode::Exp,
        Opcode::Exp2,
        Opcode::Exp10,
        Opcode::Pow,
        Opcode::Ln,
        Opcode::Log2,
        Opcode::Log10,
        Opcode::Log,
        Opcode::Sin,
        Opcode::Cos,
        Opcode::Tan,
        Opcode::Asin,
        Opcode::Acos,
        Opcode::Atan,
        Opcode::Sinh,
        Opcode::Cosh,
        Opcode::Tanh,
        Opcode::Asinh,
        Opcode::Acosh,
        Opcode::Atanh,
    ];

    pub const COUNT: usize = Self::ALL.len();

    #[inline]
    pub const fn index(self) -> usize {
        self as u8 as usize
    }

    /// The family this opcode belongs to.
    pub const fn family(self) -> Families {
        use Opcode::*;
        match self {
            Push | Dup | Drop | Swap => Families::STACK,
            Add | Sub | Mul | Div => Families::BASIC,
            Sqrt | Cbrt | Root4 | Root => Families::ROOTS,
            Exp | Exp2 | Exp10 | Pow => Families::EXPONENTIAL,
            Ln | Log2 | Log10 | Log => Families::LOGARITHM,
            Sin | Cos | Tan => Families::TRIGONOMETRIC,
            Asin | Acos | Atan => Families::INVERSE_TRIGONOMETRIC,
            Sinh | Cosh | Tanh => Families::HYPERBOLIC,
            Asinh | Acosh | Atanh => Families::INVERSE_HYPERBOLIC,
        }
    }

    /// Fixed stack effect. Never varies at runtime.
    pub const fn arity(self) -> Arity {
        use Opcode::*;
        match self {
            Push => Arity::new(0, 1),
            Dup => Arity::new(1, 2),
            Drop => Arity::new(1, 0),
            Swap => Arity::new(2, 2),
            Add | Sub | Mul | Div | Root | Pow | Log => Arity::new(2, 1),
            _ => Arity::new(1, 1),
        }
    }

    /// Textual tokens that resolve to this opcode. The first one is canonical.
    ///
    /// `Push` has none: numeric literals produce it.
    pub const fn mnemonics(self) -> &'static [&'static str] {
        use Opcode::*;
        match self {
            Push => &[],
            Dup => &["dup"],
            Drop => &["drop", "pop"],
            Swap => &["swap"],
            Add => &["add", "+"],
            Sub => &["sub", "-"],
            Mul => &["mul", "*"],
            Div => &["div", "/"],
            Sqrt => &["sqrt", "root2"],
            Cbrt => &["cbrt", "root3"],
            Root4 => &["root4"],
            Root => &["root"],
            Exp => &["exp"],
            Exp2 => &["exp2"],
            Exp10 => &["exp10"],
            Pow => &["pow", "^"],
            Ln => &["ln"],
            Log2 => &["log2"],
            Log10 => &["log10"],
            Log => &["log"],
            Sin => &["sin"],
            Cos => &["cos"],
            Tan => &["tan"],
            Asin => &["asin"],
            Acos => &["acos"],
            Atan => &["atan"],
            Sinh => &["sinh"],
            Cosh => &["cosh"],
            Tanh => &["tanh"],
            Asinh => &["asinh"],
            Acosh => &["acosh"],
            Atanh => &["atanh"],
        }
    }

    pub const fn name(self) -> &'static str {
        match self.mnemonics().first() {
            Some(name) => *name,
            None => "push",
        }
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_in_discriminant_order() {
        for (i, op) in Opcode::ALL.iter().enumerate() {
            assert_eq!(op.index(), i, "{:?} out of order", op);
        }
    }

    #[test]
    fn test_every_opcode_has_exactly_one_family() {
        for op in Opcode::ALL {
            assert_eq!(op.family().bits().count_ones(), 1, "{:?}", op);
        }
    }

    #[test]
    fn test_only_push_lacks_mnemonics() {
        for op in Opcode::ALL {
            assert_eq!(op.mnemonics().is_empty(), op == Opcode::Push, "{:?}", op);
        }
    }

    #[test]
    fn test_stack_effects() {
        assert_eq!(Opcode::Push.arity().delta(), 1);
        assert_eq!(Opcode::Dup.arity().delta(), 1);
        assert_eq!(Opcode::Drop.arity().delta(), -1);
        assert_eq!(Opcode::Swap.arity().delta(), 0);
        assert_eq!(Opcode::Div.arity(), Arity::new(2, 1));
        assert_eq!(Opcode::Atanh.arity(), Arity::new(1, 1));
    }

    #[test]
    fn test_display() {
        assert_eq!(Opcode::Push.to_string(), "push");
        assert_eq!(Opcode::Add.to_string(), "add");
        assert_eq!(Arity::new(2, 1).to_string(), "2 -> 1");
    }
}
