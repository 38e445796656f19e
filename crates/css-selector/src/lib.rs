//! # css-selector
//!
//! A small builder for CSS selector strings that enforces the order in which
//! the parts of a compound selector are written.
//!
//! Parts are appended through chaining methods and rendered as they go. The
//! builder only produces text: it does not parse selectors and does not
//! check values against the CSS grammar.
//!
//! ## Quick Start
//!
//! ```rust
//! use css_selector::{combine, element, id};
//!
//! let selector = id("main").class("container")?.class("editable")?;
//! assert_eq!(selector.stringify(), "#main.container.editable");
//!
//! let pair = combine(&element("div").id("main")?, "+", &element("table").id("data")?);
//! assert_eq!(pair.stringify(), "div#main + table#data");
//! # Ok::<(), css_selector::SelectorError>(())
//! ```
//!
//! ## Ordering Rules
//!
//! | Category       | Method           | Rendered      | Repeatable |
//! |----------------|------------------|---------------|------------|
//! | element        | `element`        | `value`       | no         |
//! | id             | `id`             | `#value`      | no         |
//! | class          | `class`          | `.value`      | yes        |
//! | attribute      | `attr`           | `[value]`     | yes        |
//! | pseudo-class   | `pseudo_class`   | `:value`      | yes        |
//! | pseudo-element | `pseudo_element` | `::value`     | no         |
//!
//! Parts must be appended top to bottom. Going back up the table fails with
//! [`SelectorError::Order`]; repeating a non-repeatable part fails with
//! [`SelectorError::Duplicate`].
//!
//! ## Combining
//!
//! [`combine`] joins two selectors as `a <combinator> b` with one space on
//! each side of the combinator. It never fails, and the result starts a fresh
//! ordering context.
//!
//! ## Modules
//!
//! - [`builder`]: the [`Selector`] builder and the entry-point functions
//! - [`types`]: categories, combinators and specificity
//! - [`error`]: error types for rejected parts

pub mod builder;
pub mod error;
pub mod types;

pub use builder::{Selector, attr, class, combine, element, id, pseudo_class, pseudo_element};
pub use error::{Result, SelectorError};
pub use types::{Category, Combinator, Specificity};
