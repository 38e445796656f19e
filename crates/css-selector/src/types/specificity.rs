use std::ops::{Add, AddAssign};

use super::Category;

/// CSS specificity of a rendered selector.
///
/// Compares lexicographically: ids, then classes, then types.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Specificity {
    pub ids: u32,
    pub classes: u32,
    pub types: u32,
}

impl Specificity {
    pub fn new(ids: u32, classes: u32, types: u32) -> Self {
        Self {
            ids,
            classes,
            types,
        }
    }

    /// Specificity contributed by a single part of `category`.
    pub fn of(category: Category) -> Self {
        match category {
            Category::Id => Self::new(1, 0, 0),
            // Attributes and pseudo-classes weigh the same as classes
            Category::Class | Category::Attribute | Category::PseudoClass => Self::new(0, 1, 0),
            Category::Element | Category::PseudoElement => Self::new(0, 0, 1),
        }
    }
}

impl Add for Specificity {
    type Output = Specificity;

    fn add(self, rhs: Self) -> Self::Output {
        Specificity {
            ids: self.ids + rhs.ids,
            classes: self.classes + rhs.classes,
            types: self.types + rhs.types,
        }
    }
}

impl AddAssign for Specificity {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}
