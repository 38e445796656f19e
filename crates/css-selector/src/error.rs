//! Error types for selector building.
//!
//! Both errors are raised by the chaining methods on
//! [`Selector`](crate::Selector) at the point of the offending call.

use thiserror::Error;

use crate::types::Category;

/// Errors that can occur while appending parts to a selector.
///
/// # Examples
///
/// ```rust
/// use css_selector::{Category, SelectorError, class, element};
///
/// let err = element("div").element("span").unwrap_err();
/// assert_eq!(err, SelectorError::Duplicate(Category::Element));
///
/// let err = class("a").element("div").unwrap_err();
/// assert!(matches!(err, SelectorError::Order { .. }));
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectorError {
    /// A part was supplied after a part of a later category.
    #[error(
        "cannot add {attempted} after {last}: selector parts must follow element, id, class, \
         attribute, pseudo-class, pseudo-element order"
    )]
    Order { attempted: Category, last: Category },

    /// A second element, id or pseudo-element was supplied.
    #[error("{0} may appear only once in a selector")]
    Duplicate(Category),
}

pub type Result<T> = std::result::Result<T, SelectorError>;
