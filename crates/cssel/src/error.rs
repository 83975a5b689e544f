//! Error types for selector construction.
//!
//! Both variants correspond to a rule the builder enforces while
//! accumulating fragments. Raising either clears the offending builder, so
//! the same instance starts clean on its next use.

use thiserror::Error;

use crate::fragment::FragmentKind;

/// Errors raised when a selector construction rule is violated.
///
/// # Examples
///
/// ```rust
/// use cssel::{CsselError, FragmentKind, SelectorBuilder};
///
/// let mut builder = SelectorBuilder::new();
/// builder.id("x").unwrap();
/// let err = builder.id("y").unwrap_err();
/// assert_eq!(err, CsselError::DuplicateFragment(FragmentKind::Id));
/// ```
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CsselError {
    /// An element, id, or pseudo-element fragment was appended a second
    /// time to the same simple selector.
    #[error("duplicate exclusive fragment: {0} already present in this selector")]
    DuplicateFragment(FragmentKind),

    /// A fragment was appended after one of a higher rank.
    #[error("out-of-order fragment: {fragment} cannot follow {after}")]
    OutOfOrder {
        /// The fragment that was rejected.
        fragment: FragmentKind,
        /// The kind of the last accepted fragment.
        after: FragmentKind,
    },
}
