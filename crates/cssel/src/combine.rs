//! Combinator-based composition of selectors.

use std::fmt;
use std::mem;

use crate::builder::Selector;

/// Token joining two selectors into a compound selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Combinator {
    /// Descendant (whitespace).
    Descendant,
    /// Child (`>`).
    Child,
    /// Adjacent sibling (`+`).
    AdjacentSibling,
    /// General sibling (`~`).
    GeneralSibling,
}

impl Combinator {
    /// The CSS token for this combinator.
    pub fn token(self) -> char {
        match self {
            Self::Descendant => ' ',
            Self::Child => '>',
            Self::AdjacentSibling => '+',
            Self::GeneralSibling => '~',
        }
    }
}

impl fmt::Display for Combinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

/// The rendered result of [`combine`]: two selectors joined by a
/// combinator.
///
/// Holds flattened text rather than fragments. Like the builder, its
/// [`stringify`](Selector::stringify) is a destructive read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompoundSelector {
    text: String,
}

impl CompoundSelector {
    /// Returns true once the combined text has been taken.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl Selector for CompoundSelector {
    fn stringify(&mut self) -> String {
        mem::take(&mut self.text)
    }
}

/// Joins two selectors with a combinator, a single space on each side of
/// the token for every combinator (the descendant join keeps the same
/// template, with the whitespace token between the padding spaces).
///
/// Both sides are rendered destructively, so builders passed by `&mut`
/// are left empty and reusable. Results nest:
///
/// ```rust
/// use cssel::{Combinator, Selector, SelectorBuilder, combine};
///
/// let mut list = SelectorBuilder::new();
/// list.element("ul")?.class("menu")?;
/// let mut item = SelectorBuilder::new();
/// item.element("li")?;
///
/// let mut joined = combine(&mut list, Combinator::Child, &mut item);
/// assert_eq!(joined.stringify(), "ul.menu > li");
/// assert!(list.is_empty());
/// # Ok::<(), cssel::CsselError>(())
/// ```
pub fn combine(
    mut left: impl Selector,
    combinator: Combinator,
    mut right: impl Selector,
) -> CompoundSelector {
    let text = format!("{} {} {}", left.stringify(), combinator, right.stringify());
    log::trace!("combine: {text}");
    CompoundSelector { text }
}
