//! Truthiness and textual length of echoed JSON values.
//!
//! `/echo` reports a `length` for whatever JSON it receives. The number is
//! the character count of the value's textual form, where the textual form
//! is the classic dynamic-language `str()` rendering: top-level strings are
//! raw, nested strings are quoted, `null` is `None`, booleans are
//! capitalised and containers use `", "` / `": "` separators. Falsy values
//! (null, false, zero, empty string, empty array, empty object) report 0.

use std::fmt::Write as _;

use serde_json::{Number, Value};
use unicode_general_category::{GeneralCategory, get_general_category};

/// Returns whether `value` counts as truthy.
#[must_use]
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => !number_is_zero(n),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

/// Length reported by `/echo`: 0 for falsy values, otherwise the number of
/// characters in [`display_text`].
#[must_use]
pub fn echo_length(value: &Value) -> usize {
    if is_truthy(value) {
        display_text(value).chars().count()
    } else {
        0
    }
}

/// Renders `value` the way `str()` renders the equivalent decoded object.
#[must_use]
pub fn display_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => {
            let mut out = String::new();
            write_repr(&mut out, other);
            out
        }
    }
}

fn number_is_zero(n: &Number) -> bool {
    if let Some(i) = n.as_i64() {
        i == 0
    } else if let Some(u) = n.as_u64() {
        u == 0
    } else {
        n.as_f64().is_some_and(|f| f == 0.0)
    }
}

fn write_repr(out: &mut String, value: &Value) {
    match value {
        Value::Null => out.push_str("None"),
        Value::Bool(true) => out.push_str("True"),
        Value::Bool(false) => out.push_str("False"),
        Value::Number(n) => write_number(out, n),
        Value::String(s) => write_quoted(out, s),
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                write_repr(out, item);
            }
            out.push(']');
        }
        Value::Object(map) => {
            out.push('{');
            for (i, (key, item)) in map.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                write_quoted(out, key);
                out.push_str(": ");
                write_repr(out, item);
            }
            out.push('}');
        }
    }
}

/// Integer literals keep every digit; only literals with a fraction or an
/// exponent go through float formatting.
fn write_number(out: &mut String, n: &Number) {
    let literal = n.to_string();
    if literal.contains(['.', 'e', 'E']) {
        match literal.parse::<f64>() {
            Ok(f) => out.push_str(&float_text(f)),
            Err(_) => out.push_str(&literal),
        }
    } else if literal.trim_start_matches('-').trim_start_matches('0').is_empty() {
        out.push('0');
    } else {
        out.push_str(&literal);
    }
}

/// `repr(float)`: shortest round-trip digits, always a `.0` or exponent,
/// exponents signed and at least two digits wide.
fn float_text(f: f64) -> String {
    let debug = format!("{f:?}");
    let Some((mantissa, exponent)) = debug.split_once('e') else {
        return debug;
    };
    let (sign, digits) = match exponent.strip_prefix('-') {
        Some(digits) => ('-', digits),
        None => ('+', exponent),
    };
    format!("{mantissa}e{sign}{digits:0>2}")
}

/// Quotes a string with `'` unless it contains `'` and no `"`.
fn write_quoted(out: &mut String, s: &str) {
    let quote = if s.contains('\'') && !s.contains('"') {
        '"'
    } else {
        '\''
    };
    out.push(quote);
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c if is_printable(c) => out.push(c),
            c => write_escape(out, c),
        }
    }
    out.push(quote);
}

/// `str.isprintable` for a single character: everything except the
/// control, format, separator (other than space), private-use and
/// unassigned categories.
fn is_printable(c: char) -> bool {
    if c == ' ' {
        return true;
    }
    !matches!(
        get_general_category(c),
        GeneralCategory::Control
            | GeneralCategory::Format
            | GeneralCategory::SpaceSeparator
            | GeneralCategory::LineSeparator
            | GeneralCategory::ParagraphSeparator
            | GeneralCategory::PrivateUse
            | GeneralCategory::Surrogate
            | GeneralCategory::Unassigned
    )
}

/// `\xNN` below U+0100, `\uNNNN` inside the BMP, `\UNNNNNNNN` above.
fn write_escape(out: &mut String, c: char) {
    let code = u32::from(c);
    let _ = if code < 0x100 {
        write!(out, "\\x{code:02x}")
    } else if code < 0x1_0000 {
        write!(out, "\\u{code:04x}")
    } else {
        write!(out, "\\U{code:08x}")
    };
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn falsy_values_have_zero_length() {
        for v in [
            json!(null),
            json!(false),
            json!(0),
            json!(0.0),
            json!(""),
            json!([]),
            json!({}),
        ] {
            assert!(!is_truthy(&v), "{v} should be falsy");
            assert_eq!(echo_length(&v), 0);
        }
    }

    #[test]
    fn top_level_string_counts_characters_not_bytes() {
        assert_eq!(echo_length(&json!("hello")), 5);
        assert_eq!(echo_length(&json!("🚀🚀")), 2);
    }

    #[test]
    fn scalars_render_like_str() {
        assert_eq!(display_text(&json!(true)), "True");
        assert_eq!(display_text(&json!(42)), "42");
        assert_eq!(display_text(&json!(-7)), "-7");
        assert_eq!(display_text(&json!(1.5)), "1.5");
        assert_eq!(display_text(&json!(2.0)), "2.0");
    }

    #[test]
    fn floats_use_signed_two_digit_exponents() {
        assert_eq!(float_text(1e16), "1e+16");
        assert_eq!(float_text(1e-5), "1e-05");
        assert_eq!(float_text(1e15), "1000000000000000.0");
        assert_eq!(float_text(0.0001), "0.0001");
    }

    #[test]
    fn containers_quote_nested_strings() {
        let v = json!({"a": 1, "b": [true, null, "x"]});
        assert_eq!(display_text(&v), "{'a': 1, 'b': [True, None, 'x']}");
        assert_eq!(echo_length(&v), 32);
    }

    #[test]
    fn object_length_is_text_length_not_field_count() {
        let v = json!({"message": "hi"});
        assert_eq!(display_text(&v), "{'message': 'hi'}");
        assert_eq!(echo_length(&v), 17);
    }

    #[test]
    fn quote_selection_and_escapes() {
        assert_eq!(display_text(&json!(["it's"])), "[\"it's\"]");
        assert_eq!(display_text(&json!(["a'b\"c"])), "['a\\'b\"c']");
        assert_eq!(display_text(&json!(["line\nbreak"])), "['line\\nbreak']");
        assert_eq!(display_text(&json!(["\u{1}"])), "['\\x01']");
    }

    #[test]
    fn non_printable_characters_are_escaped_by_width() {
        assert_eq!(display_text(&json!(["\u{85}"])), "['\\x85']");
        assert_eq!(display_text(&json!(["\u{a0}"])), "['\\xa0']");
        assert_eq!(display_text(&json!(["\u{ad}"])), "['\\xad']");
        assert_eq!(display_text(&json!(["\u{200b}"])), "['\\u200b']");
        assert_eq!(display_text(&json!(["\u{2028}\u{2029}"])), "['\\u2028\\u2029']");
        assert_eq!(display_text(&json!(["\u{feff}"])), "['\\ufeff']");
        assert_eq!(display_text(&json!(["\u{f0000}"])), "['\\U000f0000']");
        assert_eq!(echo_length(&json!(["\u{85}"])), 8);
        assert_eq!(echo_length(&json!(["\u{a0}"])), 8);
    }

    #[test]
    fn printable_non_ascii_is_kept() {
        assert_eq!(display_text(&json!(["é 🚀 日本"])), "['é 🚀 日本']");
    }

    #[test]
    fn top_level_string_is_never_escaped() {
        assert_eq!(echo_length(&json!("\u{a0}")), 1);
    }

    #[test]
    fn big_integers_keep_every_digit() {
        let Ok(v) = serde_json::from_str::<Value>("123456789012345678901234567890") else {
            panic!("valid json");
        };
        assert_eq!(display_text(&v), "123456789012345678901234567890");
        assert_eq!(echo_length(&v), 30);

        let Ok(neg) = serde_json::from_str::<Value>("[-98765432109876543210987654321]") else {
            panic!("valid json");
        };
        assert_eq!(echo_length(&neg), 32);
    }

    #[test]
    fn float_literals_still_use_float_text() {
        let Ok(v) = serde_json::from_str::<Value>("[1E5, 2.50, -0]") else {
            panic!("valid json");
        };
        assert_eq!(display_text(&v), "[100000.0, 2.5, 0]");
    }
}
