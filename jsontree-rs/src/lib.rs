//! jsontree - an in-memory JSON value tree and its text renderer.
//!
//! A tree is built bottom-up from six closed variants and rendered to a
//! JSON-like string. The renderer keeps the reference output format:
//! object keys are unquoted, every array element and object entry is
//! followed by a comma, and strings are written without escaping unless
//! [`json::RenderOptions::escaped`] is requested.
//!
//! # Architecture
//!
//! - [`json`] - Value tree types and rendering
//! - [`sample`] - The reference document used by the CLI
//! - [`error`] - Errors for the command-line driver

// Library code must not panic.
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(missing_docs)]

pub mod error;
pub mod json;
pub mod sample;

// Re-export commonly used types
pub use error::{CliError, CliResult};
pub use json::{render, render_with, JsonArray, JsonObject, JsonValue, RenderOptions};
pub use sample::reference_document;
