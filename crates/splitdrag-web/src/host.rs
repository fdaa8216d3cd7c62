#![forbid(unsafe_code)]

//! Host boundary: listener registration, container geometry, and callbacks.
//!
//! The controller never talks to a DOM or a window system directly. Everything
//! it needs from the embedding environment goes through three small traits:
//!
//! - [`PointerListenerScope`]: subscribe/unsubscribe pointer-move and
//!   pointer-up observation at the broadest scope the host has (a document in
//!   capture phase, a window, a seat). Drags keep tracking after the pointer
//!   leaves the handle's bounds.
//! - [`ContainerBounds`]: read the live bounding box of the container the
//!   handle resizes within, or `None` when it is detached.
//! - [`SplitHandler`]: receive `on_change` / `on_release` percentages.
//!
//! [`ListenerRegistry`] is an in-memory scope for hosts that route events
//! themselves (and for tests).

use splitdrag_core::geometry::BoundingBox;

/// Pointer observations a drag session subscribes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionListenerKind {
    PointerMove,
    PointerUp,
}

impl SessionListenerKind {
    /// DOM event type for this observation.
    #[must_use]
    pub const fn event_type(self) -> &'static str {
        match self {
            Self::PointerMove => "pointermove",
            Self::PointerUp => "pointerup",
        }
    }
}

/// Opaque handle identifying one host listener registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerHandle(u64);

impl ListenerHandle {
    /// Wrap a host-specific registration id.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Host-specific registration id.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// Broad-scope pointer observation owned by the host.
///
/// Implementations must tolerate `unsubscribe` of a handle that is no longer
/// registered (a no-op).
pub trait PointerListenerScope {
    /// Start observing `kind` events; the returned handle ends the observation.
    fn subscribe(&mut self, kind: SessionListenerKind) -> ListenerHandle;

    /// Stop the observation identified by `handle`.
    fn unsubscribe(&mut self, handle: ListenerHandle);
}

impl<T: PointerListenerScope + ?Sized> PointerListenerScope for &mut T {
    fn subscribe(&mut self, kind: SessionListenerKind) -> ListenerHandle {
        (**self).subscribe(kind)
    }

    fn unsubscribe(&mut self, handle: ListenerHandle) {
        (**self).unsubscribe(handle);
    }
}

/// Read access to the live container geometry.
///
/// Called on every processed move and release; implementations should read
/// the current box rather than a cached one, so resizes and reflows during a
/// drag are picked up immediately.
pub trait ContainerBounds {
    /// Current container box, or `None` if it cannot be read.
    fn container_bounds(&self) -> Option<BoundingBox>;
}

impl<F> ContainerBounds for F
where
    F: Fn() -> Option<BoundingBox>,
{
    fn container_bounds(&self) -> Option<BoundingBox> {
        self()
    }
}

/// Receiver for split percentages.
///
/// Both methods default to no-ops, so a handler only implements what it
/// consumes.
pub trait SplitHandler {
    /// Intermediate, throttled percentage during a drag.
    fn on_change(&mut self, percentage: f64) {
        let _ = percentage;
    }

    /// Final percentage at release; at most once per drag.
    fn on_release(&mut self, percentage: f64) {
        let _ = percentage;
    }
}

impl<T: SplitHandler + ?Sized> SplitHandler for &mut T {
    fn on_change(&mut self, percentage: f64) {
        (**self).on_change(percentage);
    }

    fn on_release(&mut self, percentage: f64) {
        (**self).on_release(percentage);
    }
}

/// Handler that ignores every percentage.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSplitHandler;

impl SplitHandler for NoopSplitHandler {}

/// Handler built from two closures.
pub struct SplitCallbacks<C, R> {
    on_change: C,
    on_release: R,
}

impl<C, R> SplitCallbacks<C, R>
where
    C: FnMut(f64),
    R: FnMut(f64),
{
    /// Pair an `on_change` and an `on_release` closure.
    pub fn new(on_change: C, on_release: R) -> Self {
        Self {
            on_change,
            on_release,
        }
    }
}

impl<C, R> std::fmt::Debug for SplitCallbacks<C, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SplitCallbacks").finish_non_exhaustive()
    }
}

impl<C, R> SplitHandler for SplitCallbacks<C, R>
where
    C: FnMut(f64),
    R: FnMut(f64),
{
    fn on_change(&mut self, percentage: f64) {
        (self.on_change)(percentage);
    }

    fn on_release(&mut self, percentage: f64) {
        (self.on_release)(percentage);
    }
}

/// In-memory listener scope.
///
/// Hands out sequential handles and tracks which registrations are live.
/// Removing an unknown or already-removed handle is a no-op.
#[derive(Debug, Clone, Default)]
pub struct ListenerRegistry {
    active: Vec<(ListenerHandle, SessionListenerKind)>,
    next_id: u64,
    subscribed_total: u64,
}

impl ListenerRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live registrations.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    /// Check if any live registration observes `kind`.
    #[must_use]
    pub fn is_observing(&self, kind: SessionListenerKind) -> bool {
        self.active.iter().any(|(_, k)| *k == kind)
    }

    /// Total registrations ever made (live or removed).
    #[must_use]
    pub const fn subscribed_total(&self) -> u64 {
        self.subscribed_total
    }
}

impl PointerListenerScope for ListenerRegistry {
    fn subscribe(&mut self, kind: SessionListenerKind) -> ListenerHandle {
        self.next_id = self.next_id.saturating_add(1);
        self.subscribed_total = self.subscribed_total.saturating_add(1);
        let handle = ListenerHandle::new(self.next_id);
        self.active.push((handle, kind));
        handle
    }

    fn unsubscribe(&mut self, handle: ListenerHandle) {
        self.active.retain(|(h, _)| *h != handle);
    }
}
