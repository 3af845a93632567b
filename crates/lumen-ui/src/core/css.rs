//! Synthesis of per-instance label stylesheets.
//!
//! # Design
//! - Every toggle instance gets a class derived from its identity; rules are scoped to it.
//! - Labels are rendered through `content` on generated pseudo-elements, so label text is
//!   escaped for the double-quoted CSS string context before it is embedded.
//! - Output is plain text; inserting it anywhere is the registry's job.

use crate::core::identity::InstanceIdentity;
use crate::core::labels::LabelPair;

/// Class prefix joined with the identity to scope generated rules.
pub const SCOPE_CLASS_PREFIX: &str = "toggle-label-container-";
/// Prefix for the checkbox input id inside a toggle instance.
pub const INPUT_ID_PREFIX: &str = "f-";
/// Pseudo-element carrying the checked label.
pub const CHECKED_PSEUDO: &str = "::after";
/// Pseudo-element carrying the unchecked label.
pub const UNCHECKED_PSEUDO: &str = "::before";

/// Scope class applied to an instance's root element and used in its rules.
#[must_use]
pub fn scope_class(identity: &InstanceIdentity) -> String {
    format!("{SCOPE_CLASS_PREFIX}{identity}")
}

/// Id of the checkbox input owned by an instance.
#[must_use]
pub fn input_id(identity: &InstanceIdentity) -> String {
    format!("{INPUT_ID_PREFIX}{identity}")
}

/// Escape arbitrary text for use inside a double-quoted CSS string.
///
/// Quotes and backslashes are backslash-escaped; control characters and angle
/// brackets become hex escapes terminated by a space; NUL maps to U+FFFD as CSS
/// parsers would do anyway.
#[must_use]
pub fn escape_css_string(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    for ch in text.chars() {
        match ch {
            '"' | '\\' => {
                out.push('\\');
                out.push(ch);
            }
            '\0' => out.push('\u{FFFD}'),
            '<' | '>' | '\u{1}'..='\u{1F}' | '\u{7F}' => {
                out.push_str(&format!("\\{:x} ", u32::from(ch)));
            }
            _ => out.push(ch),
        }
    }
    out
}

/// CSS text binding one instance's labels to its pseudo-elements.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StyleFragment {
    scope_class: String,
    css: String,
}

impl StyleFragment {
    /// Build the two scoped rules for `labels`.
    #[must_use]
    pub fn synthesize(identity: &InstanceIdentity, labels: &LabelPair) -> Self {
        let scope_class = scope_class(identity);
        let css = format!(
            ".{scope_class}{CHECKED_PSEUDO} {{ content: \"{checked}\"; }}\n\
             .{scope_class}{UNCHECKED_PSEUDO} {{ content: \"{unchecked}\"; }}\n",
            checked = escape_css_string(&labels.checked),
            unchecked = escape_css_string(&labels.unchecked),
        );
        Self { scope_class, css }
    }

    /// Class the rules are scoped to.
    #[must_use]
    pub fn scope_class(&self) -> &str {
        &self.scope_class
    }

    /// Full stylesheet text.
    #[must_use]
    pub fn css(&self) -> &str {
        &self.css
    }
}

/// Decode the `content` string of the rule for `selector`, as a CSS parser would.
///
/// Returns `None` when the rule is missing, the literal is unterminated, or the
/// declaration does not close cleanly after the literal.
#[cfg(test)]
pub(crate) fn resolve_content(css: &str, selector: &str) -> Option<String> {
    let opener = format!("{selector} {{ content: \"");
    let start = css.find(&opener)? + opener.len();
    let mut chars = css[start..].chars().peekable();
    let mut out = String::new();
    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                let tail: String = chars.by_ref().take(3).collect();
                return (tail == "; }").then_some(out);
            }
            '\\' => {
                let mut hex = String::new();
                while hex.len() < 6 {
                    match chars.peek() {
                        Some(c) if c.is_ascii_hexdigit() => {
                            hex.push(*c);
                            chars.next();
                        }
                        _ => break,
                    }
                }
                if hex.is_empty() {
                    out.push(chars.next()?);
                } else {
                    out.push(char::from_u32(u32::from_str_radix(&hex, 16).ok()?)?);
                    if chars.peek() == Some(&' ') {
                        chars.next();
                    }
                }
            }
            '\n' => return None,
            _ => out.push(ch),
        }
    }
    None
}
