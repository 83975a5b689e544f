//! Plain geometric value types.

use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle.
///
/// No validation is applied: callers may construct degenerate sizes and
/// get the arithmetic they asked for.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rectangle {
    pub width: f64,
    pub height: f64,
}

impl Rectangle {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Area covered by the rectangle.
    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}
