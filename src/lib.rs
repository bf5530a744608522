//! Reconstruction of self-contained source code for php closures.
//!
//! Given what the runtime knows about a closure value, the defining file is tokenized, the
//! closure expression is located in it's line range, and the expression is rewritten so
//! that it can be evaluated anywhere: imported and relative names are fully qualified, and
//! magic constants are replaced by their values.

pub mod cache;
pub mod closure;
mod error;
pub mod extract;
pub mod reflection;
pub mod symbols;
pub mod syntax;
#[cfg(test)]
mod tests;

pub use error::{ClosureRange, Error, MalformedKind};
