//! # cssel - Programmatic CSS Selector Construction
//!
//! Builds CSS selector strings fragment by fragment, enforcing the
//! uniqueness and ordering rules of a simple selector:
//!
//! - **Uniqueness**: at most one element, one id, and one pseudo-element
//!   fragment per selector
//! - **Ordering**: fragments append in rank order - element, id, class,
//!   attribute, pseudo-class, pseudo-element
//! - **Repeats**: class, attribute, and pseudo-class fragments may repeat
//!
//! ## Quick Start
//!
//! ```rust
//! use cssel::{Selector, SelectorBuilder};
//!
//! let mut link = SelectorBuilder::new();
//! link.element("a")?.attr(r#"href$=".png""#)?.pseudo_class("focus")?;
//!
//! assert_eq!(link.stringify(), r#"a[href$=".png"]:focus"#);
//! # Ok::<(), cssel::CsselError>(())
//! ```
//!
//! Rendering is a destructive read: [`stringify`](Selector::stringify)
//! returns the accumulated text and resets the builder. A validation
//! failure also resets, so a builder is always clean after an error.
//!
//! ## Combinators
//!
//! Two selectors join into a compound selector with [`combine`]:
//!
//! ```rust
//! use cssel::{Combinator, Selector, SelectorBuilder, combine};
//!
//! let mut heading = SelectorBuilder::new();
//! heading.element("h1")?;
//! let mut note = SelectorBuilder::new();
//! note.element("p")?.class("note")?;
//!
//! let mut joined = combine(&mut heading, Combinator::GeneralSibling, &mut note);
//! assert_eq!(joined.stringify(), "h1 ~ p.note");
//! # Ok::<(), cssel::CsselError>(())
//! ```
//!
//! Combined results implement [`Selector`] themselves, so they feed back
//! into [`combine`] for deeper compositions.
//!
//! ## Out of Scope
//!
//! No selector text is ever parsed, and selectors are never matched
//! against a document tree. This crate only produces strings.
//!
//! ## Modules
//!
//! - [`builder`]: the accumulating [`SelectorBuilder`] and the [`Selector`]
//!   render trait
//! - [`combine`]: combinator tokens and compound-selector composition
//! - [`fragment`]: typed fragments and specificity
//! - [`error`]: validation errors

pub mod builder;
pub mod combine;
pub mod error;
pub mod fragment;

pub use builder::{Selector, SelectorBuilder};
pub use combine::{Combinator, CompoundSelector, combine};
pub use error::CsselError;
pub use fragment::{Fragment, FragmentKind, Specificity};
