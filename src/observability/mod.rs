//! Observability subsystem for filmdb
//!
//! Structured JSON logging only. Logging is synchronous, has no side effects
//! on request handling, and its failure never fails an operation.

mod logger;

pub use logger::{Logger, Severity};
