//! Operation catalog.
//!
//! Opcodes are grouped into families. A [`Catalog`] registers a selection of
//! families once at startup; the compiler, checker and VM only ever consult
//! the catalog, never a build-time switch.

mod catalog;
mod opcode;

#[cfg(test)]
mod catalog_test;

pub use catalog::Catalog;
pub use opcode::{Arity, Families, Opcode};
