use std::fmt;

/// The standard CSS combinators.
///
/// [`Selector::combine`](crate::Selector::combine) accepts anything that is
/// `AsRef<str>`, so these are a convenience rather than a restriction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Combinator {
    Descendant,
    Child,
    AdjacentSibling, // +
    GeneralSibling,  // ~
}

impl Combinator {
    pub fn as_str(self) -> &'static str {
        match self {
            Combinator::Descendant => " ",
            Combinator::Child => ">",
            Combinator::AdjacentSibling => "+",
            Combinator::GeneralSibling => "~",
        }
    }
}

impl AsRef<str> for Combinator {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Combinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
