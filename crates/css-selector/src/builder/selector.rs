use std::fmt;

use crate::error::{Result, SelectorError};
use crate::types::{Category, Specificity};

/// A selector under construction.
///
/// Parts are appended in place and rendered immediately, so
/// [`stringify`](Selector::stringify) is a plain read. Each append checks the
/// new part's category against the last one appended:
///
/// - a lower category than the last one fails with [`SelectorError::Order`]
/// - the same category fails with [`SelectorError::Duplicate`] unless the
///   category allows duplicates (class, attribute, pseudo-class)
///
/// # Example
///
/// ```
/// use css_selector::id;
///
/// let selector = id("main").class("container")?.class("editable")?;
/// assert_eq!(selector.stringify(), "#main.container.editable");
/// # Ok::<(), css_selector::SelectorError>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selector {
    rendered: String,
    /// `None` before the first part and after `combine`.
    last: Option<Category>,
    specificity: Specificity,
}

impl Selector {
    /// Creates an empty selector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a selector holding one part. A single part on an empty
    /// selector can never be out of order.
    pub(crate) fn with_part(category: Category, value: &str) -> Self {
        let mut selector = Self::new();
        selector.append(category, value);
        selector
    }

    /// Appends a part of `category`, checking it against the last part.
    pub fn push(mut self, category: Category, value: impl AsRef<str>) -> Result<Self> {
        let value = value.as_ref();
        self.check(category)?;
        self.append(category, value);
        Ok(self)
    }

    /// Appends a type selector, e.g. `div`.
    pub fn element(self, value: impl AsRef<str>) -> Result<Self> {
        self.push(Category::Element, value)
    }

    /// Appends an ID selector, e.g. `#main`.
    pub fn id(self, value: impl AsRef<str>) -> Result<Self> {
        self.push(Category::Id, value)
    }

    /// Appends a class selector, e.g. `.container`.
    pub fn class(self, value: impl AsRef<str>) -> Result<Self> {
        self.push(Category::Class, value)
    }

    /// Appends an attribute selector. `value` is the bracket content, e.g.
    /// `href$=".png"` renders as `[href$=".png"]`.
    pub fn attr(self, value: impl AsRef<str>) -> Result<Self> {
        self.push(Category::Attribute, value)
    }

    /// Appends a pseudo-class, e.g. `:focus`.
    pub fn pseudo_class(self, value: impl AsRef<str>) -> Result<Self> {
        self.push(Category::PseudoClass, value)
    }

    /// Appends a pseudo-element, e.g. `::before`.
    pub fn pseudo_element(self, value: impl AsRef<str>) -> Result<Self> {
        self.push(Category::PseudoElement, value)
    }

    /// Joins two selectors with `combinator` surrounded by single spaces.
    ///
    /// Never fails. The result owns a freshly rendered string and starts a
    /// new ordering context, so any category may be appended to it next.
    ///
    /// ```
    /// use css_selector::{Combinator, Selector, element};
    ///
    /// let a = element("div").id("main")?;
    /// let b = element("table").id("data")?;
    /// let sel = Selector::combine(&a, Combinator::AdjacentSibling, &b);
    /// assert_eq!(sel.stringify(), "div#main + table#data");
    /// # Ok::<(), css_selector::SelectorError>(())
    /// ```
    pub fn combine(a: &Selector, combinator: impl AsRef<str>, b: &Selector) -> Selector {
        let combinator = combinator.as_ref();
        let mut rendered =
            String::with_capacity(a.rendered.len() + combinator.len() + b.rendered.len() + 2);
        rendered.push_str(&a.rendered);
        rendered.push(' ');
        rendered.push_str(combinator);
        rendered.push(' ');
        rendered.push_str(&b.rendered);

        log::trace!("combined selector: {rendered:?}");

        Selector {
            rendered,
            last: None,
            specificity: a.specificity + b.specificity,
        }
    }

    /// Returns the rendered selector text.
    pub fn stringify(&self) -> String {
        self.rendered.clone()
    }

    /// Borrows the rendered selector text.
    pub fn as_str(&self) -> &str {
        &self.rendered
    }

    /// Category of the most recently appended part, if any.
    pub fn last_category(&self) -> Option<Category> {
        self.last
    }

    pub fn is_empty(&self) -> bool {
        self.rendered.is_empty()
    }

    pub fn specificity(&self) -> Specificity {
        self.specificity
    }

    fn check(&self, category: Category) -> Result<()> {
        let Some(last) = self.last else {
            return Ok(());
        };

        if last > category {
            log::debug!("rejected {category} after {last} in {:?}", self.rendered);
            return Err(SelectorError::Order {
                attempted: category,
                last,
            });
        }

        if last == category && !category.allows_duplicates() {
            log::debug!("rejected second {category} in {:?}", self.rendered);
            return Err(SelectorError::Duplicate(category));
        }

        Ok(())
    }

    fn append(&mut self, category: Category, value: &str) {
        self.rendered.push_str(category.prefix());
        self.rendered.push_str(value);
        self.rendered.push_str(category.suffix());
        self.last = Some(category);
        self.specificity += Specificity::of(category);

        log::trace!("appended {category} {value:?}: {:?}", self.rendered);
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.rendered)
    }
}

impl AsRef<str> for Selector {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
