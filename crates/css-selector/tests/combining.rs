//! Integration tests for combining selectors.

use css_selector::{Combinator, Selector, Specificity, class, combine, element, id};

#[test]
fn test_combine_adjacent_sibling() {
    let a = element("div").id("main").unwrap();
    let b = element("table").id("data").unwrap();
    let combined = combine(&a, "+", &b);
    assert_eq!(combined.stringify(), "div#main + table#data");
}

#[test]
fn test_combine_surrounds_combinator_with_single_spaces() {
    let a = class("x");
    let b = class("y");
    for token in ["+", "~", ">", " "] {
        let combined = combine(&a, token, &b);
        assert_eq!(
            combined.stringify(),
            format!("{} {} {}", a.stringify(), token, b.stringify())
        );
    }
}

#[test]
fn test_combine_accepts_any_token() {
    let combined = combine(&element("a"), "||", &element("b"));
    assert_eq!(combined.stringify(), "a || b");

    let combined = combine(&element("a"), "", &element("b"));
    assert_eq!(combined.stringify(), "a  b");
}

#[test]
fn test_combine_with_combinator_enum() {
    let parent = element("ul");
    let child = element("li");
    assert_eq!(
        combine(&parent, Combinator::Child, &child).stringify(),
        "ul > li"
    );
    assert_eq!(
        combine(&parent, Combinator::GeneralSibling, &child).stringify(),
        "ul ~ li"
    );
    assert_eq!(
        combine(&parent, Combinator::Descendant, &child).stringify(),
        "ul   li"
    );
}

#[test]
fn test_combine_leaves_inputs_untouched() {
    let a = element("div");
    let b = element("span");
    let _ = combine(&a, ">", &b);
    assert_eq!(a.stringify(), "div");
    assert_eq!(b.stringify(), "span");
}

#[test]
fn test_combine_nests() {
    let inner = combine(&element("nav"), ">", &element("ul"));
    let outer = combine(&inner, " ", &element("a").class("active").unwrap());
    assert_eq!(outer.stringify(), "nav > ul   a.active");
}

#[test]
fn test_combine_with_empty_selectors() {
    let combined = Selector::combine(&Selector::new(), "+", &Selector::new());
    assert_eq!(combined.stringify(), " + ");
}

#[test]
fn test_chaining_after_combine_starts_fresh() {
    let a = class("a");
    let b = class("b");
    let combined = combine(&a, ">", &b);
    assert_eq!(combined.last_category(), None);

    // Would be out of order after `.b`, accepted after combine
    let extended = combined.id("x").unwrap();
    assert_eq!(extended.stringify(), ".a > .b#x");

    // Ordering applies again from here on
    assert!(extended.element("p").is_err());
}

#[test]
fn test_combine_sums_specificity() {
    let a = element("div").id("main").unwrap();
    let b = element("table").class("data").unwrap();
    let combined = combine(&a, "+", &b);
    assert_eq!(combined.specificity(), Specificity::new(1, 1, 2));
}

#[test]
fn test_combined_stringify_is_idempotent() {
    let combined = combine(&id("a"), "~", &id("b"));
    let first = combined.stringify();
    assert_eq!(first, combined.stringify());
    assert_eq!(combined.to_string(), first);
}
