//! Fluent, order-checked builder for CSS selector strings.
//!
//! This crate re-exports [`css_selector`]. See its documentation for the
//! ordering rules.
//!
//! ```rust
//! use selector_rs::{class, element};
//!
//! let selector = element("button").class("primary")?.pseudo_class("hover")?;
//! assert_eq!(selector.to_string(), "button.primary:hover");
//!
//! assert!(class("a").element("div").is_err());
//! # Ok::<(), selector_rs::SelectorError>(())
//! ```

pub use css_selector::*;
