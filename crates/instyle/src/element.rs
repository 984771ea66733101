//! The style-target collaborator.

use std::collections::HashMap;

/// A target that accepts individual CSS property assignments by name.
///
/// This is a DOM element's live style interface reduced to the one
/// capability [`StyleObject::update_element`](crate::StyleObject::update_element)
/// needs. Implement it for whatever element type your rendering layer uses;
/// the bundled impls below cover in-memory targets and test doubles.
pub trait ElementStyle {
    fn set_style_property(&mut self, name: &str, value: &str);
}

/// Map target: repeated assignments to a name overwrite, like a real
/// element's style interface.
impl ElementStyle for HashMap<String, String> {
    fn set_style_property(&mut self, name: &str, value: &str) {
        self.insert(name.to_string(), value.to_string());
    }
}

/// Log target: every assignment is appended, useful for asserting on
/// assignment order.
impl ElementStyle for Vec<(String, String)> {
    fn set_style_property(&mut self, name: &str, value: &str) {
        self.push((name.to_string(), value.to_string()));
    }
}
