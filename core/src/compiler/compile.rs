//! Compiler implementation.

use super::{CompileError, Span};
use crate::{
    expression::{Expression, Status},
    number::Number,
    ops::{Catalog, Opcode},
};

/// A whitespace-delimited token and where it sits in the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'s> {
    pub text: &'s str,
    pub span: Span,
}

/// Split `source` into whitespace-separated tokens, keeping byte offsets.
pub fn tokenize(source: &str) -> impl Iterator<Item = Token<'_>> {
    Tokens { source, pos: 0 }
}

struct Tokens<'s> {
    source: &'s str,
    pos: usize,
}

impl<'s> Iterator for Tokens<'s> {
    type Item = Token<'s>;

    fn next(&mut self) -> Option<Token<'s>> {
        let rest = &self.source[self.pos..];
        let start = self.pos + rest.find(|c: char| !c.is_whitespace())?;
        let end = self.source[start..]
            .find(char::is_whitespace)
            .map_or(self.source.len(), |len| start + len);
        self.pos = end;
        Some(Token {
            text: &self.source[start..end],
            span: Span::new(start, end),
        })
    }
}

/// Compiles RPN source strings against a [`Catalog`].
///
/// The compiler holds no per-compilation state and can be shared freely.
#[derive(Debug, Clone, Copy)]
pub struct Compiler<'c> {
    catalog: &'c Catalog,
}

impl Compiler<'static> {
    /// Compiler over the process-wide catalog.
    pub fn global() -> Self {
        Self::new(Catalog::global())
    }
}

impl<'c> Compiler<'c> {
    pub fn new(catalog: &'c Catalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &'c Catalog {
        self.catalog
    }

    /// Compile `source` into an expression.
    ///
    /// Never fails outright: an unrecognized token yields an expression with
    /// status `InvalidExpression` holding the opcodes compiled before it.
    pub fn compile<T: Number>(&self, source: &str) -> Expression<T> {
        let mut emitter = Emitter::new();
        match self.emit_all(source, &mut emitter) {
            Ok(()) => emitter.finalize(Status::Good),
            Err(_) => emitter.finalize(Status::InvalidExpression),
        }
    }

    /// Like [`compile`](Self::compile), but reports which token failed.
    pub fn try_compile<T: Number>(&self, source: &str) -> Result<Expression<T>, CompileError> {
        let mut emitter = Emitter::new();
        self.emit_all(source, &mut emitter)?;
        Ok(emitter.finalize(Status::Good))
    }

    fn emit_all<T: Number>(&self, source: &str, emitter: &mut Emitter<T>) -> Result<(), CompileError> {
        for token in tokenize(source) {
            if let Some(value) = T::parse_literal(token.text) {
                tracing::trace!(token = token.text, "constant");
                emitter.emit_constant(value);
            } else if let Some(op) = self.catalog.lookup(token.text) {
                tracing::trace!(token = token.text, ?op, "opcode");
                emitter.emit(op);
            } else {
                tracing::debug!(
                    token = token.text,
                    start = token.span.start(),
                    "Unrecognized token, aborting compilation"
                );
                return Err(CompileError::UnknownToken {
                    token: token.text.into(),
                    span: token.span,
                });
            }
        }
        Ok(())
    }
}

/// Accumulates opcodes and constants for one compilation.
struct Emitter<T> {
    ops: Vec<Opcode>,
    constants: Vec<T>,
}

impl<T: Number> Emitter<T> {
    fn new() -> Self {
        Self {
            ops: Vec::new(),
            constants: Vec::new(),
        }
    }

    fn emit(&mut self, op: Opcode) {
        debug_assert_ne!(op, Opcode::Push, "use emit_constant for pushes");
        self.ops.push(op);
    }

    fn emit_constant(&mut self, value: T) {
        self.ops.push(Opcode::Push);
        self.constants.push(value);
    }

    fn finalize(self, status: Status) -> Expression<T> {
        Expression::new_unchecked(self.ops, self.constants, status)
    }
}
