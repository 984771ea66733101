//! Inline CSS serialization.
//!
//! Serialization is a collaborator, not a hidden helper: [`InlineFormat`] is
//! the seam, [`InlineStyle`] the default implementation. Tests (or callers
//! with different escaping rules) can inject their own formatter through
//! [`StyleObject::render_with`](crate::StyleObject::render_with).

use std::convert::Infallible;

use crate::object::ResolvedStyles;

/// Turns a resolved style snapshot into a single inline CSS string.
///
/// Implementations receive a flat mapping with no callbacks, no lists, and
/// no null values. A fallible formatter surfaces its own error type through
/// `render_with`; the failure is propagated unmodified, never caught here.
pub trait InlineFormat {
    type Error;

    fn format(&self, styles: &ResolvedStyles) -> Result<String, Self::Error>;
}

/// The default formatter: `name: value` pairs joined by `"; "`.
///
/// Property names are dashed on the way out ([`css_property_name`]), values
/// are emitted verbatim. The output fits an HTML `style` attribute:
///
/// ```rust
/// use instyle::{InlineStyle, StyleObject};
///
/// let style = StyleObject::new()
///     .with("backgroundColor", "black")
///     .with("--gap", "4px");
///
/// assert_eq!(
///     InlineStyle.render(&style.values()),
///     "background-color: black; --gap: 4px",
/// );
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct InlineStyle;

impl InlineStyle {
    /// Infallible rendering; `Display` on `StyleObject` goes through here.
    pub fn render(&self, styles: &ResolvedStyles) -> String {
        styles
            .iter()
            .map(|(name, value)| format!("{}: {}", css_property_name(name), value))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

impl InlineFormat for InlineStyle {
    type Error = Infallible;

    fn format(&self, styles: &ResolvedStyles) -> Result<String, Infallible> {
        Ok(self.render(styles))
    }
}

/// Converts a property name to its dashed CSS form.
///
/// Custom properties (`--` prefix) pass through verbatim, as do names that
/// are already dashed. camelCase segments become dash-separated lowercase:
/// `fontSize` turns into `font-size`.
pub fn css_property_name(name: &str) -> String {
    if name.starts_with("--") {
        return name.to_string();
    }
    let mut out = String::with_capacity(name.len() + 4);
    for ch in name.chars() {
        if ch.is_ascii_uppercase() {
            out.push('-');
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::StyleObject;

    #[test]
    fn test_property_name_camel_case() {
        assert_eq!(css_property_name("fontSize"), "font-size");
        assert_eq!(css_property_name("borderTopLeftRadius"), "border-top-left-radius");
    }

    #[test]
    fn test_property_name_already_dashed() {
        assert_eq!(css_property_name("font-size"), "font-size");
    }

    #[test]
    fn test_property_name_custom_property_untouched() {
        assert_eq!(css_property_name("--myVar"), "--myVar");
    }

    #[test]
    fn test_render_joins_with_semicolons() {
        let style = StyleObject::new()
            .with("color", "red")
            .with("--my-var", "3px");
        assert_eq!(InlineStyle.render(&style.values()), "color: red; --my-var: 3px");
    }

    #[test]
    fn test_render_empty_snapshot() {
        assert_eq!(InlineStyle.render(&StyleObject::new().values()), "");
    }
}
