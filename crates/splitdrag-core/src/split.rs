#![forbid(unsafe_code)]

//! Split axis, clamp bounds, and pointer-to-percentage conversion.
//!
//! [`percent_of_container`] is the single place where a raw pointer position
//! becomes a split percentage. It is a pure function: the same inputs always
//! produce the same output, and the output is always inside the supplied
//! [`ClampBounds`].
//!
//! # Degenerate containers
//!
//! A container whose extent along the split axis is zero (collapsed), negative
//! or NaN has no natural percentage. In that case the result is the bound on
//! the side the pointer lies on: [`ClampBounds::max`] when the pointer is past
//! the container origin, [`ClampBounds::min`] otherwise (including a pointer
//! exactly at the origin or a non-numeric coordinate).
//!
//! For a negative extent this is not what clamping the raw ratio would give:
//! the sign flip would put a pointer past the origin at `min`. The fallback
//! keys on the pointer side alone, so a negative extent behaves like a
//! collapsed one.
//!
//! An infinite extent is not degenerate. The ratio is computed as usual, so any
//! finite offset is 0% of the container and clamps to `min`.
//!
//! ```
//! use splitdrag_core::geometry::{BoundingBox, PointerPosition};
//! use splitdrag_core::split::{ClampBounds, SplitAxis, percent_of_container};
//!
//! let bounds = ClampBounds::default();
//! let container = BoundingBox::new(0.0, 0.0, 100.0, 200.0);
//!
//! let pct = percent_of_container(
//!     PointerPosition::new(0.0, 100.0),
//!     container,
//!     SplitAxis::Vertical,
//!     bounds,
//! );
//! assert_eq!(pct, 50.0);
//!
//! // Collapsed container: falls back to a bound, never NaN.
//! let collapsed = BoundingBox::new(0.0, 0.0, 100.0, 0.0);
//! let pct = percent_of_container(
//!     PointerPosition::new(0.0, 0.0),
//!     collapsed,
//!     SplitAxis::Vertical,
//!     bounds,
//! );
//! assert_eq!(pct, bounds.min());
//! ```

#[cfg(feature = "config")]
use serde::{Deserialize, Serialize};

use crate::config::SplitConfigError;
use crate::geometry::{BoundingBox, PointerPosition};

/// Full scale of a split percentage.
pub const PERCENT_SCALE: f64 = 100.0;

/// Default distance of the clamp bounds from either edge, in percent.
pub const DEFAULT_MINIMUM_PERCENTAGE: f64 = 20.0;

/// Axis a split handle resizes along.
///
/// `Horizontal` reads the pointer's X coordinate against the container width;
/// `Vertical` reads Y against the container height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "config", serde(rename_all = "snake_case"))]
pub enum SplitAxis {
    Horizontal,
    Vertical,
}

impl SplitAxis {
    /// Pointer coordinate along this axis.
    #[inline]
    #[must_use]
    pub const fn coordinate(self, position: PointerPosition) -> f64 {
        match self {
            Self::Horizontal => position.x,
            Self::Vertical => position.y,
        }
    }

    /// Container origin along this axis.
    #[inline]
    #[must_use]
    pub const fn origin(self, bbox: BoundingBox) -> f64 {
        match self {
            Self::Horizontal => bbox.left,
            Self::Vertical => bbox.top,
        }
    }

    /// Container extent along this axis.
    #[inline]
    #[must_use]
    pub const fn extent(self, bbox: BoundingBox) -> f64 {
        match self {
            Self::Horizontal => bbox.width,
            Self::Vertical => bbox.height,
        }
    }

    /// Style property that positions a divider along this axis.
    #[inline]
    #[must_use]
    pub const fn offset_property(self) -> &'static str {
        match self {
            Self::Horizontal => "left",
            Self::Vertical => "top",
        }
    }
}

/// Symmetric percentage bounds a split may not leave.
///
/// Always satisfies `0 <= min <= max <= 100` and `max == 100 - min`; the
/// fields are private so no other shape can be built.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClampBounds {
    min: f64,
    max: f64,
}

impl ClampBounds {
    /// Bounds at [`DEFAULT_MINIMUM_PERCENTAGE`] from either edge (20..=80).
    pub const DEFAULT: Self = Self {
        min: DEFAULT_MINIMUM_PERCENTAGE,
        max: PERCENT_SCALE - DEFAULT_MINIMUM_PERCENTAGE,
    };

    /// Bounds at `margin` percent from either edge.
    ///
    /// `margin` must lie in `[0, 50]`.
    pub fn symmetric(margin: f64) -> Result<Self, SplitConfigError> {
        if !(0.0..=PERCENT_SCALE / 2.0).contains(&margin) {
            return Err(SplitConfigError::InvalidClampMargin { margin });
        }
        Ok(Self {
            min: margin,
            max: PERCENT_SCALE - margin,
        })
    }

    /// Lower bound.
    #[must_use]
    pub const fn min(self) -> f64 {
        self.min
    }

    /// Upper bound.
    #[must_use]
    pub const fn max(self) -> f64 {
        self.max
    }

    /// Clamp `value` into the bounds. NaN maps to [`Self::min`].
    #[must_use]
    pub fn clamp(self, value: f64) -> f64 {
        if value.is_nan() {
            return self.min;
        }
        value.clamp(self.min, self.max)
    }
}

impl Default for ClampBounds {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Convert a pointer position into a clamped percentage of `container`.
///
/// See the [module docs](self) for the degenerate-container policy.
#[must_use]
pub fn percent_of_container(
    position: PointerPosition,
    container: BoundingBox,
    axis: SplitAxis,
    bounds: ClampBounds,
) -> f64 {
    let offset = axis.coordinate(position) - axis.origin(container);
    let extent = axis.extent(container);

    if extent.is_nan() || extent <= 0.0 {
        let fallback = if offset > 0.0 {
            bounds.max()
        } else {
            bounds.min()
        };
        #[cfg(feature = "tracing")]
        tracing::trace!(
            message = "split.percent.degenerate",
            ?axis,
            extent,
            offset,
            fallback
        );
        return fallback;
    }

    bounds.clamp(offset / extent * PERCENT_SCALE)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(x: f64, y: f64) -> PointerPosition {
        PointerPosition::new(x, y)
    }

    #[test]
    fn vertical_uses_y_and_height() {
        let container = BoundingBox::new(50.0, 0.0, 10.0, 200.0);
        let pct = percent_of_container(
            pos(999.0, 150.0),
            container,
            SplitAxis::Vertical,
            ClampBounds::default(),
        );
        assert_eq!(pct, 50.0);
    }

    #[test]
    fn horizontal_uses_x_and_width() {
        let container = BoundingBox::new(0.0, 100.0, 400.0, 10.0);
        let pct = percent_of_container(
            pos(260.0, -999.0),
            container,
            SplitAxis::Horizontal,
            ClampBounds::default(),
        );
        assert_eq!(pct, 40.0);
    }

    #[test]
    fn results_clamp_to_bounds() {
        let container = BoundingBox::from_size(100.0, 100.0);
        let bounds = ClampBounds::default();
        assert_eq!(
            percent_of_container(pos(5.0, 0.0), container, SplitAxis::Horizontal, bounds),
            20.0
        );
        assert_eq!(
            percent_of_container(pos(100.0, 0.0), container, SplitAxis::Horizontal, bounds),
            80.0
        );
        assert_eq!(
            percent_of_container(pos(-40.0, 0.0), container, SplitAxis::Horizontal, bounds),
            20.0
        );
    }

    #[test]
    fn zero_extent_falls_back_by_offset_sign() {
        let collapsed = BoundingBox::new(10.0, 10.0, 100.0, 0.0);
        let bounds = ClampBounds::default();
        let axis = SplitAxis::Vertical;
        assert_eq!(percent_of_container(pos(0.0, 30.0), collapsed, axis, bounds), 80.0);
        assert_eq!(percent_of_container(pos(0.0, 5.0), collapsed, axis, bounds), 20.0);
        assert_eq!(percent_of_container(pos(0.0, 10.0), collapsed, axis, bounds), 20.0);
    }

    #[test]
    fn malformed_extent_is_treated_as_collapsed() {
        let bounds = ClampBounds::default();
        let axis = SplitAxis::Horizontal;
        let negative = BoundingBox::new(0.0, 0.0, -100.0, 10.0);
        assert_eq!(percent_of_container(pos(50.0, 0.0), negative, axis, bounds), 80.0);
        let nan = BoundingBox::new(0.0, 0.0, f64::NAN, 10.0);
        assert_eq!(percent_of_container(pos(50.0, 0.0), nan, axis, bounds), 80.0);
        let collapsed_below = BoundingBox::new(0.0, 0.0, f64::NEG_INFINITY, 10.0);
        assert_eq!(
            percent_of_container(pos(50.0, 0.0), collapsed_below, axis, bounds),
            80.0
        );
    }

    #[test]
    fn infinite_extent_uses_plain_ratio() {
        let bounds = ClampBounds::default();
        let axis = SplitAxis::Horizontal;
        let unbounded = BoundingBox::new(0.0, 0.0, f64::INFINITY, 10.0);
        assert_eq!(percent_of_container(pos(50.0, 0.0), unbounded, axis, bounds), 20.0);
        assert_eq!(percent_of_container(pos(-50.0, 0.0), unbounded, axis, bounds), 20.0);
        assert_eq!(
            percent_of_container(pos(f64::INFINITY, 0.0), unbounded, axis, bounds),
            20.0
        );
    }

    #[test]
    fn non_numeric_coordinate_never_yields_nan() {
        let bounds = ClampBounds::default();
        let container = BoundingBox::from_size(100.0, 100.0);
        let pct = percent_of_container(pos(f64::NAN, 0.0), container, SplitAxis::Horizontal, bounds);
        assert_eq!(pct, bounds.min());
        let collapsed = BoundingBox::from_size(0.0, 0.0);
        let pct = percent_of_container(pos(f64::NAN, 0.0), collapsed, SplitAxis::Horizontal, bounds);
        assert_eq!(pct, bounds.min());
    }

    #[test]
    fn infinite_coordinate_clamps() {
        let bounds = ClampBounds::default();
        let container = BoundingBox::from_size(100.0, 100.0);
        let axis = SplitAxis::Vertical;
        assert_eq!(percent_of_container(pos(0.0, f64::INFINITY), container, axis, bounds), 80.0);
        assert_eq!(
            percent_of_container(pos(0.0, f64::NEG_INFINITY), container, axis, bounds),
            20.0
        );
    }

    #[test]
    fn symmetric_bounds_mirror_margin() {
        let bounds = ClampBounds::symmetric(10.0).expect("margin in range");
        assert_eq!(bounds.min(), 10.0);
        assert_eq!(bounds.max(), 90.0);

        let full = ClampBounds::symmetric(0.0).expect("zero margin allowed");
        assert_eq!((full.min(), full.max()), (0.0, 100.0));

        let pinned = ClampBounds::symmetric(50.0).expect("half margin allowed");
        assert_eq!((pinned.min(), pinned.max()), (50.0, 50.0));
    }

    #[test]
    fn symmetric_bounds_reject_out_of_range_margin() {
        for margin in [-1.0, 50.5, 100.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                ClampBounds::symmetric(margin),
                Err(SplitConfigError::InvalidClampMargin { .. })
            ));
        }
    }

    #[test]
    fn default_bounds_are_twenty_eighty() {
        let bounds = ClampBounds::default();
        assert_eq!(bounds, ClampBounds::DEFAULT);
        assert_eq!((bounds.min(), bounds.max()), (20.0, 80.0));
    }

    #[test]
    fn offset_property_matches_axis() {
        assert_eq!(SplitAxis::Vertical.offset_property(), "top");
        assert_eq!(SplitAxis::Horizontal.offset_property(), "left");
    }
}
