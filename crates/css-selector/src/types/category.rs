//! Selector part categories and their ordering rules.
//!
//! A compound selector is built from parts that must appear in a fixed
//! order: element, id, class, attribute, pseudo-class, pseudo-element.
//! [`Category`] encodes that order through its derived [`Ord`] and knows how
//! to render a value with the right prefix and suffix.

use std::fmt;

/// One kind of selector part.
///
/// Variants are declared in the order they must appear in a selector, so
/// comparing two categories compares their ranks.
///
/// # Example
///
/// ```
/// use css_selector::Category;
///
/// assert!(Category::Id < Category::Class);
/// assert_eq!(Category::Attribute.render("href"), "[href]");
/// assert!(!Category::Element.allows_duplicates());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    /// Type selector, rendered verbatim: `div`
    Element,
    /// ID selector: `#main`
    Id,
    /// Class selector: `.container`
    Class,
    /// Attribute selector: `[href$=".png"]`
    Attribute,
    /// Pseudo-class: `:focus`
    PseudoClass,
    /// Pseudo-element: `::before`
    PseudoElement,
}

impl Category {
    /// All categories in rank order.
    pub const ALL: [Category; 6] = [
        Category::Element,
        Category::Id,
        Category::Class,
        Category::Attribute,
        Category::PseudoClass,
        Category::PseudoElement,
    ];

    /// Position of this category in the required order, starting at 1.
    pub fn rank(self) -> u8 {
        match self {
            Category::Element => 1,
            Category::Id => 2,
            Category::Class => 3,
            Category::Attribute => 4,
            Category::PseudoClass => 5,
            Category::PseudoElement => 6,
        }
    }

    /// Whether two parts of this category may follow each other.
    ///
    /// Element, id and pseudo-element may appear only once.
    pub fn allows_duplicates(self) -> bool {
        matches!(
            self,
            Category::Class | Category::Attribute | Category::PseudoClass
        )
    }

    /// Text written before the value.
    pub fn prefix(self) -> &'static str {
        match self {
            Category::Element => "",
            Category::Id => "#",
            Category::Class => ".",
            Category::Attribute => "[",
            Category::PseudoClass => ":",
            Category::PseudoElement => "::",
        }
    }

    /// Text written after the value.
    pub fn suffix(self) -> &'static str {
        match self {
            Category::Attribute => "]",
            _ => "",
        }
    }

    /// Renders `value` as a fragment of this category. The value is not
    /// validated and is inserted as-is.
    pub fn render(self, value: &str) -> String {
        let (prefix, suffix) = (self.prefix(), self.suffix());
        let mut out = String::with_capacity(prefix.len() + value.len() + suffix.len());
        out.push_str(prefix);
        out.push_str(value);
        out.push_str(suffix);
        out
    }

    /// Human-readable name used in error messages.
    pub fn name(self) -> &'static str {
        match self {
            Category::Element => "element",
            Category::Id => "id",
            Category::Class => "class",
            Category::Attribute => "attribute",
            Category::PseudoClass => "pseudo-class",
            Category::PseudoElement => "pseudo-element",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranks_follow_declaration_order() {
        let ranks: Vec<u8> = Category::ALL.iter().map(|c| c.rank()).collect();
        assert_eq!(ranks, vec![1, 2, 3, 4, 5, 6]);

        for pair in Category::ALL.windows(2) {
            assert!(pair[0] < pair[1]);
            assert!(pair[0].rank() < pair[1].rank());
        }
    }

    #[test]
    fn test_none_sorts_below_every_category() {
        for category in Category::ALL {
            assert!(None < Some(category));
        }
    }

    #[test]
    fn test_duplicate_flags() {
        assert!(!Category::Element.allows_duplicates());
        assert!(!Category::Id.allows_duplicates());
        assert!(Category::Class.allows_duplicates());
        assert!(Category::Attribute.allows_duplicates());
        assert!(Category::PseudoClass.allows_duplicates());
        assert!(!Category::PseudoElement.allows_duplicates());
    }

    #[test]
    fn test_render_fragments() {
        assert_eq!(Category::Element.render("div"), "div");
        assert_eq!(Category::Id.render("main"), "#main");
        assert_eq!(Category::Class.render("container"), ".container");
        assert_eq!(Category::Attribute.render("href$=\".png\""), "[href$=\".png\"]");
        assert_eq!(Category::PseudoClass.render("focus"), ":focus");
        assert_eq!(Category::PseudoElement.render("before"), "::before");
    }

    #[test]
    fn test_render_keeps_value_verbatim() {
        // Not a valid identifier, still accepted
        assert_eq!(Category::Class.render("1 bad name"), ".1 bad name");
        assert_eq!(Category::Id.render(""), "#");
    }

    #[test]
    fn test_display_uses_name() {
        assert_eq!(Category::PseudoClass.to_string(), "pseudo-class");
        assert_eq!(format!("{}", Category::Attribute), "attribute");
    }
}
