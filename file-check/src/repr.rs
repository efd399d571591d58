//! List-literal rendering of expected values for log lines.
//!
//! Log consumers assert on exact substrings such as
//! `search strings ['hello', 'world'] found`, so the rendering follows the
//! Python `repr` of a list of strings.

use unicode_general_category::{GeneralCategory, get_general_category};

/// Render `values` as a list literal, e.g. `['a', 'b']`.
#[must_use]
pub fn list_repr(values: &[String]) -> String {
    let mut out = String::from("[");
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        push_str_repr(&mut out, value);
    }
    out.push(']');
    out
}

/// Render a single string literal, e.g. `it's` renders as `"it's"`.
#[must_use]
pub fn str_repr(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    push_str_repr(&mut out, value);
    out
}

fn push_str_repr(out: &mut String, value: &str) {
    // Single quotes unless that would need escaping and double quotes would not.
    let quote = if value.contains('\'') && !value.contains('"') {
        '"'
    } else {
        '\''
    };
    out.push(quote);
    for ch in value.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c if !is_printable(c) => out.push_str(&hex_escape(c)),
            c => out.push(c),
        }
    }
    out.push(quote);
}

/// Printable unless the character is a separator other than the ASCII space,
/// a control, format, surrogate or private-use character, or unassigned.
fn is_printable(c: char) -> bool {
    c == ' '
        || !matches!(
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

/// Shortest of `\xNN`, `\uNNNN` or `\UNNNNNNNN` that holds the code point.
fn hex_escape(c: char) -> String {
    let code = u32::from(c);
    if code < 0x100 {
        format!("\\x{code:02x}")
    } else if code < 0x1_0000 {
        format!("\\u{code:04x}")
    } else {
        format!("\\U{code:08x}")
    }
}
