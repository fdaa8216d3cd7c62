#![forbid(unsafe_code)]

//! Core: geometry, percentage math, and throttling for split-pane handles.
//!
//! # Role in splitdrag
//! `splitdrag-core` holds everything about a split handle that does not touch
//! a host environment. It is pure data and pure functions plus one small state
//! machine, so it can be exercised without a browser, a window, or a clock.
//!
//! # Primary responsibilities
//! - **Geometry**: pointer positions and container bounding boxes.
//! - **Split math**: [`split::percent_of_container`] turns a pointer position
//!   into a percentage clamped to [`split::ClampBounds`].
//! - **Throttling**: [`throttle::ThrottleGate`] thins high-frequency pointer
//!   samples to a fixed rate without reordering them.
//! - **Configuration**: [`config::SplitDragConfig`], optionally loaded from
//!   TOML/JSON with the `config` feature.
//!
//! # How it fits in the system
//! `splitdrag-web` wires these pieces into a session controller that observes
//! host pointer events and invokes the embedding caller's callbacks.

pub mod config;
pub mod geometry;
pub mod split;
pub mod throttle;

pub use config::{SplitConfigError, SplitDragConfig};
pub use geometry::{BoundingBox, PointerPosition};
pub use split::{ClampBounds, SplitAxis, percent_of_container};
pub use throttle::{ThrottleConfig, ThrottleGate};
