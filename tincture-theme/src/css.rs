//! # CSS Text Builder
//!
//! Order-preserving accumulation of `property:value;` declarations,
//! `--custom-property:value;` declarations and `selector{...}` blocks.
//! Output is compact (no whitespace) and deterministic: the same sequence
//! of calls always yields the same text.
//!
//! ```rust
//! use tincture_theme::css::{CssBuilder, CssPrefix};
//!
//! let prefix = CssPrefix::new("tc").push("Surface").push("HighContrastDark");
//! let mut css = CssBuilder::new();
//! css.block(":root", |b| {
//!     b.declaration(&prefix.property_name("color"), "#FFFFFFFF");
//! });
//! assert_eq!(css.finish(), ":root{--tc-surface-high-contrast-dark-color:#FFFFFFFF;}");
//! ```

use std::fmt;

/// Convert an identifier to kebab-case CSS form.
///
/// Case boundaries (`BackgroundColor`, `backgroundColor`, `HTMLBody`),
/// spaces, underscores and dashes all become single hyphens. Digits stay
/// attached to the preceding word (`Heading1` -> `heading1`).
pub fn css_name(text: &str) -> String {
    let chars: Vec<char> = text.trim().chars().collect();
    let mut out = String::with_capacity(chars.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if c == ' ' || c == '_' || c == '-' {
            if !out.is_empty() && !out.ends_with('-') {
                out.push('-');
            }
            continue;
        }

        if c.is_uppercase() && !out.is_empty() && !out.ends_with('-') {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            if prev.is_lowercase() || prev.is_ascii_digit() || (prev.is_uppercase() && next_is_lower)
            {
                out.push('-');
            }
        }

        out.extend(c.to_lowercase());
    }

    while out.ends_with('-') {
        out.pop();
    }
    out
}

/// A custom-property scope, such as `tc-surface-light`.
///
/// An empty prefix stays empty through [CssPrefix::push]: unscoped renders
/// emit plain declarations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct CssPrefix(String);

impl CssPrefix {
    /// A prefix rooted at `root` (CSS-name-cased). An empty root gives an empty prefix.
    pub fn new(root: &str) -> Self {
        Self(css_name(root))
    }

    /// The empty prefix.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether the prefix is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The prefix text, without leading dashes.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// A new prefix with `-{segment}` appended, or an empty prefix if this one is empty.
    pub fn push(&self, segment: &str) -> Self {
        let segment = css_name(segment);
        if self.is_empty() || segment.is_empty() {
            return self.clone();
        }
        Self(format!("{}-{}", self.0, segment))
    }

    /// The declared name for `property`: `--{prefix}-{property}`, or `property` when empty.
    pub fn property_name(&self, property: &str) -> String {
        if self.is_empty() {
            property.to_string()
        } else {
            format!("--{}-{}", self.0, property)
        }
    }
}

impl From<&str> for CssPrefix {
    fn from(root: &str) -> Self {
        Self::new(root)
    }
}

impl fmt::Display for CssPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Accumulates CSS text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CssBuilder {
    buf: String,
}

impl CssBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `property:value;`.
    pub fn declaration(&mut self, property: &str, value: &str) -> &mut Self {
        self.buf.push_str(property);
        self.buf.push(':');
        self.buf.push_str(value);
        self.buf.push(';');
        self
    }

    /// Append `--name:value;`. Leading dashes on `name` are normalised.
    pub fn custom_property(&mut self, name: &str, value: &str) -> &mut Self {
        let name = name.trim_start_matches('-');
        self.buf.push_str("--");
        self.declaration(name, value)
    }

    /// Append `selector{...}` with the body written by `body`.
    pub fn block(&mut self, selector: &str, body: impl FnOnce(&mut CssBuilder)) -> &mut Self {
        self.buf.push_str(selector);
        self.buf.push('{');
        body(self);
        self.buf.push('}');
        self
    }

    /// Length of the text so far, in bytes.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Whether nothing has been written.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// The text so far.
    pub fn as_str(&self) -> &str {
        &self.buf
    }

    /// Consume the builder, returning the text.
    pub fn finish(self) -> String {
        self.buf
    }
}

impl fmt::Display for CssBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_css_name() {
        assert_eq!(css_name("BackgroundColor"), "background-color");
        assert_eq!(css_name("backgroundColor"), "background-color");
        assert_eq!(css_name("HighContrastLight"), "high-contrast-light");
        assert_eq!(css_name("Heading1"), "heading1");
        assert_eq!(css_name("HTMLBody"), "html-body");
        assert_eq!(css_name("my_app  theme"), "my-app-theme");
        assert_eq!(css_name("--already-kebab--"), "already-kebab");
        assert_eq!(css_name(""), "");
    }

    #[test]
    fn test_prefix_push() {
        let root = CssPrefix::new("TC");
        assert_eq!(root.push("BodyText").push("hovered").as_str(), "tc-body-text-hovered");
        assert_eq!(root.property_name("color"), "--tc-color");
    }

    #[test]
    fn test_empty_prefix_stays_empty() {
        let prefix = CssPrefix::empty().push("surface").push("light");
        assert!(prefix.is_empty());
        assert_eq!(prefix.property_name("color"), "color");
    }

    #[test]
    fn test_builder_output() {
        let mut css = CssBuilder::new();
        css.declaration("color", "#000000FF")
            .custom_property("--accent", "#FF0000FF")
            .block("a:hover", |b| {
                b.declaration("color", "red");
            });
        assert_eq!(
            css.finish(),
            "color:#000000FF;--accent:#FF0000FF;a:hover{color:red;}"
        );
    }
}
