//! # selkit
//!
//! A small library workspace pairing programmatic CSS selector
//! construction with serialization helpers:
//!
//! - [`SelectorBuilder`] and [`combine`]: build selector strings fragment
//!   by fragment, with uniqueness and ordering enforcement (the [`cssel`]
//!   crate, re-exported here)
//! - [`Rectangle`]: a plain geometric value type
//! - [`to_json`] / [`from_json`]: JSON round-trips for typed values
//!
//! ```rust
//! use selkit::{Rectangle, from_json, to_json};
//!
//! let rect = Rectangle::new(10.0, 20.0);
//! let text = to_json(&rect)?;
//!
//! // Parsing back into the type restores both data and behavior.
//! let back: Rectangle = from_json(&text)?;
//! assert_eq!(back.area(), 200.0);
//! # Ok::<(), selkit::SelkitError>(())
//! ```

pub mod error;
pub mod geometry;
pub mod json;

pub use cssel::{
    Combinator, CompoundSelector, CsselError, Fragment, FragmentKind, Selector, SelectorBuilder,
    Specificity, combine,
};
pub use error::{Result, SelkitError};
pub use geometry::Rectangle;
pub use json::{from_json, to_json};
