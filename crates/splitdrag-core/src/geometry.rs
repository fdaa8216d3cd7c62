#![forbid(unsafe_code)]

//! Geometric primitives in host (client) coordinates.
//!
//! Hosts report pointer positions and element boxes as floating point values
//! (CSS pixels in a browser), so unlike cell-based layout these types carry
//! `f64` and make no attempt to snap or saturate.

/// A pointer position in host coordinates (origin at top-left).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

impl PointerPosition {
    /// Create a new pointer position.
    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Bounding box of the container a split handle resizes within.
///
/// Mirrors what a host reports for an element's client rect. Width and height
/// are expected to be non-negative, but nothing here enforces it: callers that
/// divide by an extent must handle the zero and malformed cases themselves.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoundingBox {
    /// Top edge.
    pub top: f64,
    /// Left edge.
    pub left: f64,
    /// Width in host units.
    pub width: f64,
    /// Height in host units.
    pub height: f64,
}

impl BoundingBox {
    /// Create a new bounding box.
    #[inline]
    #[must_use]
    pub const fn new(top: f64, left: f64, width: f64, height: f64) -> Self {
        Self {
            top,
            left,
            width,
            height,
        }
    }

    /// Create a box at the origin with the given size.
    #[inline]
    #[must_use]
    pub const fn from_size(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    /// Right edge (exclusive).
    #[inline]
    #[must_use]
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    /// Bottom edge (exclusive).
    #[inline]
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges_follow_origin_and_size() {
        let bbox = BoundingBox::new(10.0, 20.0, 300.0, 150.0);
        assert_eq!(bbox.right(), 320.0);
        assert_eq!(bbox.bottom(), 160.0);
    }

    #[test]
    fn from_size_starts_at_origin() {
        let bbox = BoundingBox::from_size(80.0, 24.0);
        assert_eq!(bbox.top, 0.0);
        assert_eq!(bbox.left, 0.0);
        assert_eq!(bbox.width, 80.0);
        assert_eq!(bbox.height, 24.0);
    }
}
