//! # instyle - Lazy Inline-Style Property Bags
//!
//! `instyle` provides [`StyleObject`], an ordered bag of CSS property and
//! custom-property entries that serializes to an inline `style` attribute
//! string or applies itself onto a DOM-element-like target.
//!
//! The one interesting behavior: entries may be *computed*. A computed entry
//! wraps a zero-argument closure that is re-invoked on every read, so styles
//! can carry time-varying values (animation frames, counters, clocks) and
//! stay current without anyone pushing updates into the bag.
//!
//! ## Core Concepts
//!
//! - [`StyleObject`]: the ordered property bag; write with `set` /
//!   `set_variables` / `insert`, read with `values` / `Display` /
//!   `update_element`
//! - [`StyleValue`]: a literal or a computed (lazily resolved) entry
//! - [`ResolvedStyles`]: a function-free snapshot, the flat mapping handed
//!   to formatters and style targets
//! - [`InlineFormat`] / [`InlineStyle`]: the serialization collaborator and
//!   its default implementation
//! - [`ElementStyle`]: the style-target collaborator (a DOM element's live
//!   style interface, reduced to one method)
//!
//! ## Quick Start
//!
//! ```rust
//! use instyle::StyleObject;
//!
//! let mut style = StyleObject::new()
//!     .with("color", "red")
//!     .with("fontSize", "11px");
//! style.set_variables([("accent", "#ff6b35")]);
//!
//! assert_eq!(
//!     style.to_string(),
//!     "color: red; font-size: 11px; --accent: #ff6b35",
//! );
//! ```
//!
//! ## Computed Values
//!
//! ```rust
//! use instyle::{StyleObject, StyleValue};
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let frame = Rc::new(Cell::new(0u32));
//! let tick = Rc::clone(&frame);
//!
//! let style = StyleObject::new().with(
//!     "transform",
//!     StyleValue::computed(move || {
//!         tick.set(tick.get() + 1);
//!         format!("rotate({}deg)", tick.get())
//!     }),
//! );
//!
//! // Every read re-evaluates the closure.
//! assert_eq!(style.to_string(), "transform: rotate(1deg)");
//! assert_eq!(style.to_string(), "transform: rotate(2deg)");
//! ```
//!
//! ## Lists and Nulls
//!
//! List values join with `", "`, skipping null holes. Entries that resolve
//! to null vanish from the snapshot; falsy values like `0` or `""` stay.
//!
//! ```rust
//! use instyle::{Literal, StyleObject};
//!
//! let style = StyleObject::new()
//!     .with("fontFamily", vec![Some("Helvetica"), None, Some("sans-serif")])
//!     .with("opacity", 0)
//!     .with("display", Literal::Null);
//!
//! assert_eq!(
//!     style.to_string(),
//!     "font-family: Helvetica, sans-serif; opacity: 0",
//! );
//! ```
//!
//! ## Applying to an Element
//!
//! ```rust
//! use instyle::{ElementStyle, StyleObject};
//! use std::collections::HashMap;
//!
//! let style = StyleObject::new().with("color", "red");
//!
//! // Any type implementing ElementStyle works; HashMap is bundled.
//! let mut element: HashMap<String, String> = HashMap::new();
//! style.update_element(&mut element);
//!
//! assert_eq!(element.get("color").map(String::as_str), Some("red"));
//! ```

mod element;
mod format;
mod json;
mod object;
mod value;

pub use element::ElementStyle;
pub use format::{css_property_name, InlineFormat, InlineStyle};
pub use json::JsonStyleError;
pub use object::{ResolvedStyles, StyleObject};
pub use value::{Literal, Resolver, Scalar, StyleValue};
