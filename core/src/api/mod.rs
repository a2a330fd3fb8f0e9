//! Public API for compiling and running RPN formulas.
//!
//! # Example
//!
//! ```
//! use rpnf_core::api::{Engine, EngineOptions};
//! use rpnf_core::Status;
//!
//! let engine = Engine::new(EngineOptions::default());
//! let expr = engine.compile::<f64>("2 3 pow 1 sub");
//! let result = engine.run(&expr);
//! assert_eq!(result.status, Status::Good);
//! assert_eq!(result.value, 7.0);
//! ```

pub mod engine;
pub mod error;
pub mod options;

pub use engine::Engine;
pub use error::{ConfigError, Error};
pub use options::{EngineOptions, ExecutionOptions, FamilyList};
