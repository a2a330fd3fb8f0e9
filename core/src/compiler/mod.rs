//! RPN compiler: source text to [`Expression`].
//!
//! ## Design
//!
//! - Tokens are separated by whitespace; there is no other syntax
//! - Each token is tried as a numeric literal first, then as a mnemonic
//! - The first unrecognized token stops compilation; the expression keeps the
//!   opcodes compiled so far and is marked `InvalidExpression`
//! - No stack-depth checking happens here (see [`crate::checker`])
//!
//! [`Expression`]: crate::Expression

mod compile;
mod error;


pub use compile::{Compiler, Token, tokenize};
pub use error::{CompileError, Span};
