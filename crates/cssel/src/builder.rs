//! The accumulating selector builder.

use bitflags::bitflags;

use crate::error::CsselError;
use crate::fragment::{Fragment, FragmentKind, Specificity};

bitflags! {
    /// Exclusive fragment kinds already used in the current selector.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    struct Seen: u8 {
        const ELEMENT        = 0b0000_0001;
        const ID             = 0b0000_0010;
        const PSEUDO_ELEMENT = 0b0000_0100;
    }
}

impl Seen {
    /// The flag guarding a kind, empty for kinds that may repeat.
    fn flag_for(kind: FragmentKind) -> Seen {
        match kind {
            FragmentKind::Element => Seen::ELEMENT,
            FragmentKind::Id => Seen::ID,
            FragmentKind::PseudoElement => Seen::PSEUDO_ELEMENT,
            _ => Seen::empty(),
        }
    }
}

/// Anything that renders itself to selector text.
///
/// Rendering is a destructive read: [`stringify`](Selector::stringify)
/// returns the accumulated text and leaves the value empty, ready for
/// reuse. Implemented by [`SelectorBuilder`], by
/// [`CompoundSelector`](crate::combine::CompoundSelector), and for
/// `&mut S` of any implementor, so [`combine`](crate::combine::combine)
/// composes over builders and over its own results alike.
pub trait Selector {
    /// Renders the accumulated selector text and resets to empty.
    fn stringify(&mut self) -> String;
}

impl<S: Selector + ?Sized> Selector for &mut S {
    fn stringify(&mut self) -> String {
        (**self).stringify()
    }
}

/// Chainable builder for a single simple selector.
///
/// Fragment methods take `&mut self` and return `Result<&mut Self>` so
/// chains compose with `?`. Each instance represents exactly one selector
/// construction; start a fresh instance (or reuse this one after
/// rendering) for the next selector.
///
/// ```rust
/// use cssel::{Selector, SelectorBuilder};
///
/// let mut builder = SelectorBuilder::new();
/// builder.id("main")?.class("a")?.class("b")?;
/// assert_eq!(builder.stringify(), "#main.a.b");
///
/// // The render above reset the builder, so it starts over empty.
/// assert_eq!(builder.stringify(), "");
/// # Ok::<(), cssel::CsselError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct SelectorBuilder {
    fragments: Vec<Fragment>,
    seen: Seen,
}

impl SelectorBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an element fragment, taken verbatim (e.g. `div`). At most
    /// one per selector, and it must come first.
    pub fn element(&mut self, name: &str) -> Result<&mut Self, CsselError> {
        self.push(FragmentKind::Element, name.to_string())
    }

    /// Appends an id fragment (`#value`). At most one per selector.
    pub fn id(&mut self, value: &str) -> Result<&mut Self, CsselError> {
        self.push(FragmentKind::Id, format!("#{value}"))
    }

    /// Appends a class fragment (`.value`). Repeats are allowed.
    pub fn class(&mut self, value: &str) -> Result<&mut Self, CsselError> {
        self.push(FragmentKind::Class, format!(".{value}"))
    }

    /// Appends an attribute fragment (`[value]`). The bracket interior is
    /// passed through verbatim, e.g. `href$=".png"`. Repeats are allowed.
    pub fn attr(&mut self, value: &str) -> Result<&mut Self, CsselError> {
        self.push(FragmentKind::Attribute, format!("[{value}]"))
    }

    /// Appends a pseudo-class fragment (`:value`). Repeats are allowed.
    pub fn pseudo_class(&mut self, value: &str) -> Result<&mut Self, CsselError> {
        self.push(FragmentKind::PseudoClass, format!(":{value}"))
    }

    /// Appends a pseudo-element fragment (`::value`). At most one per
    /// selector, and no fragment may follow it.
    pub fn pseudo_element(&mut self, value: &str) -> Result<&mut Self, CsselError> {
        self.push(FragmentKind::PseudoElement, format!("::{value}"))
    }

    /// Returns true if no fragments have been accumulated.
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Number of fragments accumulated so far.
    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    /// CSS specificity of the fragments accumulated so far.
    pub fn specificity(&self) -> Specificity {
        let mut spec = Specificity::default();
        for fragment in &self.fragments {
            spec.count(fragment.kind);
        }
        spec
    }

    /// Validates and appends a rendered fragment.
    ///
    /// The duplicate check runs before the ordering check, so a repeated
    /// exclusive fragment always reports as a duplicate.
    fn push(&mut self, kind: FragmentKind, text: String) -> Result<&mut Self, CsselError> {
        let flag = Seen::flag_for(kind);
        if self.seen.intersects(flag) {
            log::debug!("rejecting duplicate {kind} fragment");
            self.reset();
            return Err(CsselError::DuplicateFragment(kind));
        }

        if let Some(last) = self.fragments.last() {
            if kind < last.kind {
                let after = last.kind;
                log::debug!("rejecting out-of-order {kind} fragment after {after}");
                self.reset();
                return Err(CsselError::OutOfOrder {
                    fragment: kind,
                    after,
                });
            }
        }

        log::trace!("push {kind} fragment: {text}");
        self.seen |= flag;
        self.fragments.push(Fragment::new(kind, text));
        Ok(self)
    }

    fn reset(&mut self) {
        self.fragments.clear();
        self.seen = Seen::empty();
    }
}

impl Selector for SelectorBuilder {
    fn stringify(&mut self) -> String {
        let text: String = self.fragments.iter().map(|f| f.text.as_str()).collect();
        log::trace!("stringify: {text}");
        self.reset();
        text
    }
}
