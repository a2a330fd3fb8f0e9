//! Public error types for the engine API.
//!
//! Malformed formulas are not errors: they come back as a [`Status`]. These
//! types cover configuration mistakes and the detailed compile diagnostics
//! returned by [`Engine::try_compile`].
//!
//! [`Status`]: crate::Status
//! [`Engine::try_compile`]: super::Engine::try_compile

use thiserror::Error;

use crate::compiler::CompileError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unknown operation family `{0}`")]
    UnknownFamily(String),
}

/// Error type for all engine operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Compile(#[from] CompileError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
