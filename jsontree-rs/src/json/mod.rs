//! JSON value tree and text rendering.
//!
//! # Architecture
//!
//! - [`types`] - The value tree ([`JsonValue`], [`JsonArray`], [`JsonObject`])
//! - [`options`] - Rendering options
//! - [`render`] - Tree to text
//!
//! There is no parser: trees are built bottom-up with `add` and rendered
//! with [`render`] or `to_string()`.
//!
//! # Example
//!
//! ```
//! use jsontree::json::{render, JsonArray, JsonObject, JsonValue};
//!
//! let mut arr = JsonArray::new();
//! arr.add("s3");
//! arr.add(3.3);
//! assert_eq!(arr.to_string(), "[\"s3\",3.3,]");
//!
//! let mut obj = JsonObject::new();
//! obj.add("f", "s2");
//! assert_eq!(render(&JsonValue::from(obj)), "{f:\"s2\",}");
//! ```

pub mod options;
pub mod render;
pub mod types;

// Re-export commonly used items
pub use options::RenderOptions;
pub use render::{format_number, render, render_with};
pub use types::{JsonArray, JsonObject, JsonValue};
