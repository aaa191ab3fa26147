//! # grafo-common
//!
//! Foundation layer for Grafo: identifier types, errors, and utilities.
//!
//! This crate provides the fundamental building blocks used by all other
//! Grafo crates. It has no internal dependencies and should be kept minimal.
//!
//! ## Modules
//!
//! - [`types`] - Core type definitions (VertexId, ComponentId, Weight, Distance)
//! - [`utils`] - Utility functions and helpers (hashing, errors)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod types;
pub mod utils;

// Re-export commonly used types at crate root
pub use types::{ComponentId, DEFAULT_WEIGHT, Distance, INFINITE_DISTANCE, VertexId, Weight};
pub use utils::error::{Error, ParseError, ParseErrorKind, Result};
