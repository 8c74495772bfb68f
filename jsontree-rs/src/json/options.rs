//! Rendering options.
//!
//! The default output reproduces the reference renderer exactly: strings and
//! object keys are written raw. That output is not valid JSON when a string
//! contains a quote, a backslash or a control character, so an escaped
//! preset is available as an opt-in.
//!
//! Trailing commas after the last array element and object entry are part of
//! the output format in every mode.

/// Options controlling how a value tree is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Escape `"`, `\` and control characters inside string values
    pub escape_strings: bool,
    /// Wrap object keys in double quotes
    pub quote_keys: bool,
}

impl RenderOptions {
    /// Reference output: raw strings, unquoted keys.
    pub const fn faithful() -> Self {
        Self {
            escape_strings: false,
            quote_keys: false,
        }
    }

    /// Escaped strings and quoted keys.
    pub const fn escaped() -> Self {
        Self {
            escape_strings: true,
            quote_keys: true,
        }
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::faithful()
    }
}
