//! Text rendering for JSON value trees.
//!
//! Output format, per variant:
//!
//! - null, booleans: the literal words
//! - strings: wrapped in `"`, written raw unless escaping is enabled
//! - numbers: Rust's `Display` for `f64` (shortest round-trip decimal,
//!   `NaN`, `inf`, `-inf` for non-finite values)
//! - arrays: `[` then every element followed by `,` then `]`
//! - objects: `{` then every entry as `key:value,` then `}`, in map order
//!
//! The trailing comma after the last element or entry is part of the format.

use std::fmt;

use super::options::RenderOptions;
use super::types::{JsonArray, JsonObject, JsonValue};

/// Render a value with the default (faithful) options.
pub fn render(value: &JsonValue) -> String {
    render_with(value, RenderOptions::faithful())
}

/// Render a value with the given options.
pub fn render_with(value: &JsonValue, options: RenderOptions) -> String {
    let mut output = String::new();
    write_value(value, options, &mut output);
    output
}

/// Format a number the way the renderer writes it.
pub fn format_number(value: f64) -> String {
    value.to_string()
}

fn write_value(value: &JsonValue, options: RenderOptions, output: &mut String) {
    match value {
        JsonValue::Null => output.push_str("null"),
        JsonValue::Bool(true) => output.push_str("true"),
        JsonValue::Bool(false) => output.push_str("false"),
        JsonValue::Number(n) => output.push_str(&format_number(*n)),
        JsonValue::String(s) => write_string(s, options, output),
        JsonValue::Array(arr) => write_array(arr, options, output),
        JsonValue::Object(obj) => write_object(obj, options, output),
    }
}

fn write_string(s: &str, options: RenderOptions, output: &mut String) {
    output.push('"');
    if options.escape_strings {
        write_escaped(s, output);
    } else {
        output.push_str(s);
    }
    output.push('"');
}

fn write_escaped(s: &str, output: &mut String) {
    for ch in s.chars() {
        match ch {
            '"' => output.push_str("\\\""),
            '\\' => output.push_str("\\\\"),
            '\x08' => output.push_str("\\b"),
            '\x0C' => output.push_str("\\f"),
            '\n' => output.push_str("\\n"),
            '\r' => output.push_str("\\r"),
            '\t' => output.push_str("\\t"),
            c if c < '\x20' => {
                output.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => output.push(c),
        }
    }
}

fn write_array(arr: &JsonArray, options: RenderOptions, output: &mut String) {
    output.push('[');
    for value in arr {
        write_value(value, options, output);
        output.push(',');
    }
    output.push(']');
}

fn write_object(obj: &JsonObject, options: RenderOptions, output: &mut String) {
    output.push('{');
    for (key, value) in obj {
        if options.quote_keys {
            write_string(key, options, output);
        } else {
            output.push_str(key);
        }
        output.push(':');
        write_value(value, options, output);
        output.push(',');
    }
    output.push('}');
}

impl fmt::Display for JsonValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self))
    }
}

impl fmt::Display for JsonArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut output = String::new();
        write_array(self, RenderOptions::faithful(), &mut output);
        f.write_str(&output)
    }
}

impl fmt::Display for JsonObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut output = String::new();
        write_object(self, RenderOptions::faithful(), &mut output);
        f.write_str(&output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_primitives() {
        assert_eq!(render(&JsonValue::Null), "null");
        assert_eq!(render(&JsonValue::Bool(true)), "true");
        assert_eq!(render(&JsonValue::Bool(false)), "false");
        assert_eq!(render(&JsonValue::Number(42.0)), "42");
        assert_eq!(render(&JsonValue::Number(1.1)), "1.1");
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(-0.0), "-0");
        assert_eq!(format_number(3.3), "3.3");
        assert_eq!(format_number(-123.5), "-123.5");
        assert_eq!(format_number(1e21), "1000000000000000000000");
        assert_eq!(format_number(f64::NAN), "NaN");
        assert_eq!(format_number(f64::INFINITY), "inf");
        assert_eq!(format_number(f64::NEG_INFINITY), "-inf");
    }

    #[test]
    fn test_render_string_raw() {
        assert_eq!(render(&JsonValue::from("hello")), "\"hello\"");
        assert_eq!(render(&JsonValue::from("")), "\"\"");
        // No escaping in faithful mode
        assert_eq!(render(&JsonValue::from("a\"b")), "\"a\"b\"");
        assert_eq!(render(&JsonValue::from("a\\b")), "\"a\\b\"");
        assert_eq!(render(&JsonValue::from("a\nb")), "\"a\nb\"");
    }

    #[test]
    fn test_render_string_escaped() {
        let options = RenderOptions::escaped();
        assert_eq!(
            render_with(&JsonValue::from("a\nb"), options),
            "\"a\\nb\""
        );
        assert_eq!(
            render_with(&JsonValue::from("a\tb"), options),
            "\"a\\tb\""
        );
        assert_eq!(
            render_with(&JsonValue::from("a\"b"), options),
            "\"a\\\"b\""
        );
        assert_eq!(
            render_with(&JsonValue::from("a\\b"), options),
            "\"a\\\\b\""
        );
        assert_eq!(
            render_with(&JsonValue::from("\x01"), options),
            "\"\\u0001\""
        );
    }

    #[test]
    fn test_render_array_trailing_comma() {
        let mut arr = JsonArray::new();
        arr.add("s3");
        arr.add(3.3);
        assert_eq!(render(&JsonValue::from(arr)), "[\"s3\",3.3,]");
    }

    #[test]
    fn test_render_empty_array() {
        assert_eq!(render(&JsonValue::from(JsonArray::new())), "[]");
    }

    #[test]
    fn test_render_object_unquoted_key() {
        let mut obj = JsonObject::new();
        obj.add("f", "s2");
        assert_eq!(render(&JsonValue::from(obj)), "{f:\"s2\",}");
    }

    #[test]
    fn test_render_object_quoted_key() {
        let mut obj = JsonObject::new();
        obj.add("f\"", "s2");
        assert_eq!(
            render_with(&JsonValue::from(obj), RenderOptions::escaped()),
            "{\"f\\\"\":\"s2\",}"
        );
    }

    #[test]
    fn test_render_empty_object() {
        assert_eq!(render(&JsonValue::from(JsonObject::new())), "{}");
    }

    #[test]
    fn test_render_nested() {
        let mut inner = JsonArray::new();
        inner.add("x");
        let mut arr = JsonArray::new();
        arr.add(inner);
        arr.add(JsonArray::new());
        let mut obj = JsonObject::new();
        obj.add("k", arr);

        assert_eq!(render(&JsonValue::from(obj)), "{k:[[\"x\",],[],],}");
    }

    #[test]
    fn test_display_matches_render() {
        let mut arr = JsonArray::new();
        arr.add(true);
        arr.add(JsonValue::Null);
        assert_eq!(arr.to_string(), "[true,null,]");

        let mut obj = JsonObject::new();
        obj.add("z", false);
        assert_eq!(obj.to_string(), "{z:false,}");

        let value = JsonValue::from(arr);
        assert_eq!(value.to_string(), render(&value));
    }
}
