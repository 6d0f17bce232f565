//! Plain geometry data types.

use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle, width and height only.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    pub width: f64,
    pub height: f64,
}

impl Rectangle {
    /// Create a new rectangle with the given dimensions.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Area of a rectangle.
pub fn area(rectangle: &Rectangle) -> f64 {
    rectangle.width * rectangle.height
}
