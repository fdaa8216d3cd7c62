#![forbid(unsafe_code)]

//! Caller-owned split handle properties and the divider style hint.

use std::fmt;

use splitdrag_core::split::SplitAxis;

/// Properties supplied by the embedding caller.
///
/// The caller owns `split_percentage`; the controller only reads it as the
/// last known value for change detection and never persists it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitProps {
    /// Axis the divider resizes along.
    pub direction: SplitAxis,
    /// Currently committed percentage.
    pub split_percentage: f64,
}

impl SplitProps {
    /// Create props for a divider at `split_percentage` along `direction`.
    #[must_use]
    pub const fn new(direction: SplitAxis, split_percentage: f64) -> Self {
        Self {
            direction,
            split_percentage,
        }
    }

    /// Offset style the rendering layer applies to the divider element.
    #[must_use]
    pub const fn offset_style(&self) -> SplitOffsetStyle {
        SplitOffsetStyle {
            property: self.direction.offset_property(),
            percentage: self.split_percentage,
        }
    }
}

/// Style hint positioning the divider: `top: P%` or `left: P%`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitOffsetStyle {
    /// `"top"` for vertical splits, `"left"` for horizontal ones.
    pub property: &'static str,
    /// Offset along the split axis, in percent of the container.
    pub percentage: f64,
}

impl fmt::Display for SplitOffsetStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}%", self.property, self.percentage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertical_split_offsets_top() {
        let style = SplitProps::new(SplitAxis::Vertical, 35.5).offset_style();
        assert_eq!(style.property, "top");
        assert_eq!(style.to_string(), "top: 35.5%");
    }

    #[test]
    fn horizontal_split_offsets_left() {
        let style = SplitProps::new(SplitAxis::Horizontal, 50.0).offset_style();
        assert_eq!(style.to_string(), "left: 50%");
    }
}
