//! Selector building.
//!
//! The free functions here are the entry points: each one starts a new
//! [`Selector`] holding a single part, which can then be extended with the
//! chaining methods of the same names.
//!
//! ## Example
//!
//! ```rust
//! use css_selector::builder::{combine, element};
//!
//! let link = element("a").attr(r#"href$=".png""#)?.pseudo_class("focus")?;
//! assert_eq!(link.stringify(), r#"a[href$=".png"]:focus"#);
//!
//! let row = combine(&element("tr"), ">", &element("td").pseudo_class("first-child")?);
//! assert_eq!(row.stringify(), "tr > td:first-child");
//! # Ok::<(), css_selector::SelectorError>(())
//! ```

pub mod selector;

pub use selector::Selector;

use crate::types::Category;

/// Starts a selector with a type selector, e.g. `div`.
pub fn element(value: impl AsRef<str>) -> Selector {
    Selector::with_part(Category::Element, value.as_ref())
}

/// Starts a selector with an ID selector, e.g. `#main`.
pub fn id(value: impl AsRef<str>) -> Selector {
    Selector::with_part(Category::Id, value.as_ref())
}

/// Starts a selector with a class selector, e.g. `.container`.
pub fn class(value: impl AsRef<str>) -> Selector {
    Selector::with_part(Category::Class, value.as_ref())
}

/// Starts a selector with an attribute selector, e.g. `[type=text]`.
pub fn attr(value: impl AsRef<str>) -> Selector {
    Selector::with_part(Category::Attribute, value.as_ref())
}

/// Starts a selector with a pseudo-class, e.g. `:hover`.
pub fn pseudo_class(value: impl AsRef<str>) -> Selector {
    Selector::with_part(Category::PseudoClass, value.as_ref())
}

/// Starts a selector with a pseudo-element, e.g. `::after`.
pub fn pseudo_element(value: impl AsRef<str>) -> Selector {
    Selector::with_part(Category::PseudoElement, value.as_ref())
}

/// Joins two selectors with a combinator. See [`Selector::combine`].
pub fn combine(a: &Selector, combinator: impl AsRef<str>, b: &Selector) -> Selector {
    Selector::combine(a, combinator, b)
}
