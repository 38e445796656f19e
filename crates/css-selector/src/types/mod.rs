//! Core value types for selector building.
//!
//! - [`Category`]: the six kinds of selector part and their required order
//! - [`Combinator`]: the standard tokens placed between combined selectors
//! - [`Specificity`]: the (ids, classes, types) weight of a selector

pub mod category;
pub mod combinator;
pub mod specificity;

pub use category::Category;
pub use combinator::Combinator;
pub use specificity::Specificity;
