#![forbid(unsafe_code)]

//! `splitdrag-web` drives split-pane drag handles from host pointer events.
//!
//! Design goals:
//! - **Host-driven I/O**: the embedding environment pushes pointer events and
//!   owns listener registration and timers.
//! - **Deterministic time**: every time-sensitive call takes the host's
//!   monotonic time explicitly; nothing reads a wall clock.
//! - **Caller-owned state**: the controller never stores the committed split
//!   percentage as its own. It reports values and the caller decides.
//!
//! A typical host wires it like this:
//!
//! ```
//! use core::time::Duration;
//! use splitdrag_core::{BoundingBox, PointerPosition, SplitAxis};
//! use splitdrag_web::{ListenerRegistry, SplitCallbacks, SplitDragController, SplitProps};
//!
//! let mut changes = Vec::new();
//! let mut releases = Vec::new();
//! let mut controller = SplitDragController::with_defaults(
//!     SplitProps::new(SplitAxis::Vertical, 50.0),
//!     ListenerRegistry::new(),
//!     || Some(BoundingBox::from_size(400.0, 200.0)),
//!     SplitCallbacks::new(|p| changes.push(p), |p| releases.push(p)),
//! );
//!
//! controller.pointer_down(PointerPosition::new(200.0, 100.0));
//! controller.pointer_move(PointerPosition::new(200.0, 60.0), Duration::ZERO);
//! if let Some(deadline) = controller.next_deadline() {
//!     controller.poll_throttle(deadline);
//! }
//! controller.pointer_up(PointerPosition::new(200.0, 60.0));
//! drop(controller);
//!
//! // The caller never committed 30, so the release still reports it.
//! assert_eq!(changes, vec![30.0]);
//! assert_eq!(releases, vec![30.0]);
//! ```

pub mod controller;
pub mod host;
pub mod props;

use core::time::Duration;

pub use controller::{
    EventDisposition, SplitDispatchOutcome, SplitDragController, SplitIgnoredReason,
    SplitPointerDispatch, SplitPointerPhase,
};
pub use host::{
    ContainerBounds, ListenerHandle, ListenerRegistry, NoopSplitHandler, PointerListenerScope,
    SessionListenerKind, SplitCallbacks, SplitHandler,
};
pub use props::{SplitOffsetStyle, SplitProps};

/// Monotonic clock advanced explicitly by the host.
///
/// Hosts that already track event timestamps can pass those directly; this is
/// for hosts (and tests) that only know elapsed intervals.
#[derive(Debug, Default, Clone, Copy)]
pub struct HostClock {
    now: Duration,
}

impl HostClock {
    /// Create a clock starting at `0`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            now: Duration::ZERO,
        }
    }

    /// Current monotonic time.
    #[must_use]
    pub const fn now(&self) -> Duration {
        self.now
    }

    /// Advance by `dt`.
    pub fn advance(&mut self, dt: Duration) -> Duration {
        self.now = self.now.saturating_add(dt);
        self.now
    }

    /// Jump forward to `deadline`; earlier values are ignored.
    pub fn advance_to(&mut self, deadline: Duration) -> Duration {
        self.now = self.now.max(deadline);
        self.now
    }
}
