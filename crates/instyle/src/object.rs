//! The style bag itself: [`StyleObject`] and its resolved snapshots.

use std::fmt;

use crate::element::ElementStyle;
use crate::format::{InlineFormat, InlineStyle};
use crate::value::{Scalar, StyleValue};

/// An ordered bag of CSS property / custom property entries.
///
/// Keys are plain strings: CSS property names (dashed or camelCase) or
/// custom properties (`--` prefix). Values are [`StyleValue`]s, so any entry
/// may be a literal or a lazily computed callback. Iteration order is
/// insertion order; overwriting an existing key moves it to the end.
///
/// Reading happens through [`values`](Self::values) (a resolved snapshot),
/// `Display` (an inline CSS declaration string), or
/// [`update_element`](Self::update_element) (writes onto a style target).
///
/// # Example
///
/// ```rust
/// use instyle::StyleObject;
///
/// let mut style = StyleObject::new()
///     .with("color", "red")
///     .with("fontSize", "11px");
/// style.set_variables([("accent", "#ff6b35")]);
///
/// assert_eq!(
///     style.to_string(),
///     "color: red; font-size: 11px; --accent: #ff6b35",
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct StyleObject {
    entries: Vec<(String, StyleValue)>,
}

impl StyleObject {
    /// Creates an empty style object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with(mut self, key: impl Into<String>, value: impl Into<StyleValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Assigns a single entry, overwriting any previous value for the key.
    ///
    /// An overwritten key moves to the end of the iteration order, so the
    /// serialized output reflects last-write order.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<StyleValue>) {
        let key = key.into();
        self.entries.retain(|(existing, _)| *existing != key);
        self.entries.push((key, value.into()));
    }

    /// Bulk-assigns entries, in the iterator's order. Last write wins.
    pub fn set<I, K, V>(&mut self, props: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<StyleValue>,
    {
        for (key, value) in props {
            self.insert(key, value);
        }
    }

    /// Bulk-assigns CSS custom properties, rewriting each key to `--<key>`.
    ///
    /// Only the keys passed here gain the prefix; entries already stored
    /// under unprefixed names are untouched.
    pub fn set_variables<I, K, V>(&mut self, vars: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<StyleValue>,
    {
        for (key, value) in vars {
            self.insert(format!("--{}", key.into()), value);
        }
    }

    /// Returns the stored (unresolved) value for a key.
    pub fn get(&self, key: &str) -> Option<&StyleValue> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value)
    }

    /// Removes an entry, returning its stored value.
    pub fn remove(&mut self, key: &str) -> Option<StyleValue> {
        let index = self.entries.iter().position(|(existing, _)| existing == key)?;
        Some(self.entries.remove(index).1)
    }

    /// Number of stored entries (resolved or not).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates stored entries in insertion order, without resolving them.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &StyleValue)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Computes a resolved snapshot of the current entries.
    ///
    /// For every entry: computed callbacks are invoked (exactly once per
    /// call, never cached), lists collapse to a `", "`-joined string with
    /// null holes dropped, and entries resolving to null disappear. Falsy
    /// values like `0` or `""` are kept; only null-ness removes a key.
    ///
    /// A panicking callback unwinds through this method unchanged.
    pub fn values(&self) -> ResolvedStyles {
        let decls = self
            .entries
            .iter()
            .filter_map(|(key, value)| {
                value
                    .resolve()
                    .collapse()
                    .map(|scalar| (key.clone(), scalar))
            })
            .collect();
        ResolvedStyles { decls }
    }

    /// Serializes through an injected formatting collaborator.
    ///
    /// The default `Display` implementation uses [`InlineStyle`]; this hook
    /// exists so the serializer can be swapped or stubbed.
    pub fn render_with<F: InlineFormat>(&self, formatter: &F) -> Result<String, F::Error> {
        formatter.format(&self.values())
    }

    /// Writes every resolved entry onto a style target.
    ///
    /// Property names are passed through as stored; no validation happens on
    /// this side. Whatever the target does with an unknown name is its own
    /// business.
    pub fn update_element<E: ElementStyle + ?Sized>(&self, element: &mut E) {
        for (name, value) in self.values().iter() {
            element.set_style_property(name, &value.to_string());
        }
    }
}

impl fmt::Display for StyleObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&InlineStyle.render(&self.values()))
    }
}

impl<K, V> FromIterator<(K, V)> for StyleObject
where
    K: Into<String>,
    V: Into<StyleValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut style = StyleObject::new();
        style.set(iter);
        style
    }
}

impl<K, V> Extend<(K, V)> for StyleObject
where
    K: Into<String>,
    V: Into<StyleValue>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.set(iter);
    }
}

/// A resolved, function-free snapshot of a [`StyleObject`].
///
/// Holds `(name, scalar)` pairs in the object's iteration order at snapshot
/// time. This is the flat mapping handed to formatting collaborators and
/// style targets.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResolvedStyles {
    decls: Vec<(String, Scalar)>,
}

impl ResolvedStyles {
    /// Looks up a resolved value by stored key.
    pub fn get(&self, key: &str) -> Option<&Scalar> {
        self.decls
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value)
    }

    pub fn len(&self) -> usize {
        self.decls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decls.is_empty()
    }

    /// Iterates resolved pairs in snapshot order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Scalar)> {
        self.decls.iter().map(|(key, value)| (key.as_str(), value))
    }
}

impl IntoIterator for ResolvedStyles {
    type Item = (String, Scalar);
    type IntoIter = std::vec::IntoIter<(String, Scalar)>;

    fn into_iter(self) -> Self::IntoIter {
        self.decls.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Literal;

    #[test]
    fn test_seeded_construction_matches_set() {
        let seeded: StyleObject = [("color", "red"), ("margin", "0")].into_iter().collect();

        let mut set_after = StyleObject::new();
        set_after.set([("color", "red"), ("margin", "0")]);

        assert_eq!(seeded.values(), set_after.values());
    }

    #[test]
    fn test_insert_overwrite_moves_to_end() {
        let mut style = StyleObject::new();
        style.set([("color", "red"), ("margin", "0")]);
        style.set([("color", "blue")]);

        let keys: Vec<_> = style.values().into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["margin", "color"]);
        assert_eq!(style.values().get("color"), Some(&Scalar::from("blue")));
    }

    #[test]
    fn test_set_variables_prefixes_keys() {
        let mut style = StyleObject::new();
        style.insert("a", "unprefixed");
        style.set_variables([("a", 1)]);

        let snapshot = style.values();
        assert_eq!(snapshot.get("--a"), Some(&Scalar::Num(1.0)));
        assert_eq!(snapshot.get("a"), Some(&Scalar::from("unprefixed")));
    }

    #[test]
    fn test_values_drops_null_entries() {
        let mut style = StyleObject::new();
        style.insert("color", "red");
        style.insert("display", Literal::Null);

        let snapshot = style.values();
        assert_eq!(snapshot.len(), 1);
        assert!(snapshot.get("display").is_none());
    }

    #[test]
    fn test_values_keeps_falsy_entries() {
        let mut style = StyleObject::new();
        style.insert("opacity", 0);
        style.insert("content", "");

        let snapshot = style.values();
        assert_eq!(snapshot.get("opacity"), Some(&Scalar::Num(0.0)));
        assert_eq!(snapshot.get("content"), Some(&Scalar::from("")));
    }

    #[test]
    fn test_remove_returns_stored_value() {
        let mut style = StyleObject::new().with("color", "red");
        assert!(style.remove("color").is_some());
        assert!(style.remove("color").is_none());
        assert!(style.is_empty());
    }

    #[test]
    fn test_display_empty_object() {
        assert_eq!(StyleObject::new().to_string(), "");
    }

    #[test]
    fn test_clone_shares_computed_callback() {
        use std::cell::Cell;
        use std::rc::Rc;

        let calls = Rc::new(Cell::new(0));
        let seen = Rc::clone(&calls);
        let style = StyleObject::new().with(
            "width",
            StyleValue::computed(move || {
                seen.set(seen.get() + 1);
                "1px"
            }),
        );

        let copy = style.clone();
        style.values();
        copy.values();
        assert_eq!(calls.get(), 2);
    }
}
