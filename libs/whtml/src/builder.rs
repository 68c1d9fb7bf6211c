//! Declarative composition of a document from independent node
//! expressions.
//!
//! A sequence of expressions, each producing a [`Tag`], is combined
//! into one implicit `html` root. `opt` and `either` keep the child
//! count fixed per combinator site, so conditional inclusion never
//! changes the shape of the tree.

use crate::Tag;

/// Combine node expressions into a fresh `html` root, appending each
/// as a child in argument order.
///
/// ```
/// use whtml::builder::document;
/// use whtml::tags::{body, head};
/// let page = document([head([]), body([])]);
/// assert_eq!(page.render(), "<html><head></head><body></body></html>");
/// ```
pub fn document(children: impl IntoIterator<Item = Tag>) -> Tag {
    let mut root = Tag::new("html");
    for child in children {
        root = root.add_child(child);
    }
    root
}

/// Conditional slot: `None` contributes a neutral `html` placeholder
/// instead of omitting the slot.
pub fn opt(tag: Option<Tag>) -> Tag {
    tag.unwrap_or_else(|| Tag::new("html"))
}

/// Either/or slot: the chosen branch is propagated unchanged. Exactly
/// one node results, whichever branch is taken.
pub fn either(condition: bool, first: Tag, second: Tag) -> Tag {
    if condition {
        first
    } else {
        second
    }
}
