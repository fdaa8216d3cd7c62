#![forbid(unsafe_code)]

//! Host-driven drag session controller for split handles.
//!
//! [`SplitDragController`] turns the pointer lifecycle of a split handle into
//! clamped percentages for the embedding caller:
//!
//! ```text
//! Idle --pointer_down--> Dragging --pointer_up--> Idle   (on_release if changed)
//!                            |  ^
//!            pointer_move /  |  |  throttled on_change
//!            poll_throttle   +--+
//!                            |
//!                            +------teardown-----> Idle  (no on_release)
//! ```
//!
//! While dragging, the controller holds the session's move/up listener
//! registrations. Every exit path (pointer-up, teardown, dropping the
//! controller) releases them exactly once and cancels any throttled sample, so
//! nothing reaches the caller after a session ends.
//!
//! Every call returns a [`SplitPointerDispatch`] describing what happened and
//! which default behaviors the host must suppress for the triggering event.
//! Failures such as unreadable geometry are reported there as
//! [`SplitIgnoredReason`]s; they never panic or reach the callbacks.

use core::time::Duration;

use splitdrag_core::config::{SplitConfigError, SplitDragConfig};
use splitdrag_core::geometry::PointerPosition;
use splitdrag_core::split::{ClampBounds, SplitAxis, percent_of_container};
use splitdrag_core::throttle::{ThrottleConfig, ThrottleGate};

use crate::host::{
    ContainerBounds, ListenerHandle, PointerListenerScope, SessionListenerKind, SplitHandler,
};
use crate::props::{SplitOffsetStyle, SplitProps};

/// Lifecycle phase recorded for one controller dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitPointerPhase {
    PointerDown,
    PointerMove,
    /// Host timer fired at [`SplitDragController::next_deadline`].
    ThrottleDeadline,
    PointerUp,
    Teardown,
}

/// Deterministic reason why a call produced no transition or emission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitIgnoredReason {
    NoActiveSession,
    SessionAlreadyActive,
    GeometryUnavailable,
    NothingDue,
}

/// Outcome category for one dispatch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SplitDispatchOutcome {
    SessionStarted,
    /// `on_change` was invoked.
    Changed { percentage: f64 },
    /// The sample was parked in the throttle gate.
    Throttled,
    /// A percentage was computed but matched its baseline: the last
    /// `on_change` value for moves, the committed `split_percentage` for
    /// pointer-up.
    Unchanged { percentage: f64 },
    /// `on_release` was invoked.
    Released { percentage: f64 },
    /// The session was torn down without a release.
    Abandoned { dropped_pending: bool },
    Ignored(SplitIgnoredReason),
}

/// Default behaviors the host must suppress for the triggering event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EventDisposition {
    pub prevent_default: bool,
    pub stop_propagation: bool,
}

impl EventDisposition {
    /// Leave the event alone.
    pub const PASS: Self = Self {
        prevent_default: false,
        stop_propagation: false,
    };

    /// Suppress native drag/selection only.
    pub const PREVENT_DEFAULT: Self = Self {
        prevent_default: true,
        stop_propagation: false,
    };

    /// The active drag owns the event.
    pub const CAPTURED: Self = Self {
        prevent_default: true,
        stop_propagation: true,
    };
}

/// Result of one controller call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitPointerDispatch {
    pub phase: SplitPointerPhase,
    pub session_id: Option<u64>,
    pub position: Option<PointerPosition>,
    pub outcome: SplitDispatchOutcome,
    pub disposition: EventDisposition,
}

impl SplitPointerDispatch {
    fn new(
        phase: SplitPointerPhase,
        session_id: Option<u64>,
        position: Option<PointerPosition>,
        outcome: SplitDispatchOutcome,
        disposition: EventDisposition,
    ) -> Self {
        Self {
            phase,
            session_id,
            position,
            outcome,
            disposition,
        }
    }

    fn ignored(
        phase: SplitPointerPhase,
        reason: SplitIgnoredReason,
        session_id: Option<u64>,
        position: Option<PointerPosition>,
    ) -> Self {
        Self::new(
            phase,
            session_id,
            position,
            SplitDispatchOutcome::Ignored(reason),
            EventDisposition::PASS,
        )
    }

    /// Percentage handed to a callback by this dispatch, if any.
    #[must_use]
    pub const fn emitted(&self) -> Option<f64> {
        match self.outcome {
            SplitDispatchOutcome::Changed { percentage }
            | SplitDispatchOutcome::Released { percentage } => Some(percentage),
            _ => None,
        }
    }
}

/// Move/up registrations owned by one session.
///
/// Consumed by [`release`](Self::release), so a session cannot give its
/// listeners back twice.
#[derive(Debug)]
#[must_use]
struct SessionListeners {
    pointer_move: ListenerHandle,
    pointer_up: ListenerHandle,
}

impl SessionListeners {
    fn acquire<S: PointerListenerScope>(scope: &mut S) -> Self {
        Self {
            pointer_move: scope.subscribe(SessionListenerKind::PointerMove),
            pointer_up: scope.subscribe(SessionListenerKind::PointerUp),
        }
    }

    fn release<S: PointerListenerScope>(self, scope: &mut S) {
        scope.unsubscribe(self.pointer_move);
        scope.unsubscribe(self.pointer_up);
    }
}

#[derive(Debug)]
struct DragSession {
    id: u64,
    axis: SplitAxis,
    bounds: ClampBounds,
    /// Baseline for `on_change` repeat suppression.
    last_change: f64,
    listeners: SessionListeners,
}

/// What remains of a session once its listeners and throttle are released.
#[derive(Debug, Clone, Copy)]
struct EndedSession {
    id: u64,
    axis: SplitAxis,
    bounds: ClampBounds,
    dropped_pending: bool,
}

/// Drag session controller for one split handle.
///
/// Dropping the controller tears down any active session, the same way a
/// host unmount does.
pub struct SplitDragController<S, G, H>
where
    S: PointerListenerScope,
    G: ContainerBounds,
    H: SplitHandler,
{
    props: SplitProps,
    bounds: ClampBounds,
    throttle: ThrottleGate<PointerPosition>,
    scope: S,
    geometry: G,
    handler: H,
    session: Option<DragSession>,
    next_session_id: u64,
}

impl<S, G, H> std::fmt::Debug for SplitDragController<S, G, H>
where
    S: PointerListenerScope,
    G: ContainerBounds,
    H: SplitHandler,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SplitDragController")
            .field("props", &self.props)
            .field("bounds", &self.bounds)
            .field("session", &self.session)
            .field("throttle_pending", &self.throttle.has_pending())
            .finish_non_exhaustive()
    }
}

impl<S, G, H> SplitDragController<S, G, H>
where
    S: PointerListenerScope,
    G: ContainerBounds,
    H: SplitHandler,
{
    /// Construct a controller from a validated configuration.
    pub fn new(
        props: SplitProps,
        config: &SplitDragConfig,
        scope: S,
        geometry: G,
        handler: H,
    ) -> Result<Self, SplitConfigError> {
        let bounds = config.clamp_bounds()?;
        let throttle = config.throttle_config()?;
        Ok(Self::with_parts(props, bounds, throttle, scope, geometry, handler))
    }

    /// Construct a controller with default bounds (20..=80) and throttling (30/s).
    pub fn with_defaults(props: SplitProps, scope: S, geometry: G, handler: H) -> Self {
        Self::with_parts(
            props,
            ClampBounds::default(),
            ThrottleConfig::default(),
            scope,
            geometry,
            handler,
        )
    }

    fn with_parts(
        props: SplitProps,
        bounds: ClampBounds,
        throttle: ThrottleConfig,
        scope: S,
        geometry: G,
        handler: H,
    ) -> Self {
        Self {
            props,
            bounds,
            throttle: ThrottleGate::new(throttle),
            scope,
            geometry,
            handler,
            session: None,
            next_session_id: 1,
        }
    }

    /// Current caller-owned props.
    #[must_use]
    pub const fn props(&self) -> SplitProps {
        self.props
    }

    /// Style hint for the divider element.
    #[must_use]
    pub const fn offset_style(&self) -> SplitOffsetStyle {
        self.props.offset_style()
    }

    /// Clamp bounds applied to new sessions.
    #[must_use]
    pub const fn clamp_bounds(&self) -> ClampBounds {
        self.bounds
    }

    /// Throttle parameters for intermediate updates.
    #[must_use]
    pub const fn throttle_config(&self) -> ThrottleConfig {
        self.throttle.config()
    }

    /// Whether a drag session is active.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// Id of the active session, if any.
    #[must_use]
    pub fn active_session_id(&self) -> Option<u64> {
        self.session.as_ref().map(|session| session.id)
    }

    /// When the host should call [`poll_throttle`](Self::poll_throttle) next.
    ///
    /// `None` when no throttled sample is waiting.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.throttle.next_deadline()
    }

    /// Percentage callbacks.
    #[must_use]
    pub const fn handler(&self) -> &H {
        &self.handler
    }

    /// Mutable access to the percentage callbacks.
    pub fn handler_mut(&mut self) -> &mut H {
        &mut self.handler
    }

    /// Listener scope.
    #[must_use]
    pub const fn scope(&self) -> &S {
        &self.scope
    }

    /// Update the committed percentage.
    ///
    /// `on_release` is compared against this value. During a session it also
    /// becomes the baseline for `on_change` repeat suppression.
    pub fn set_split_percentage(&mut self, percentage: f64) {
        self.props.split_percentage = percentage;
        if let Some(session) = self.session.as_mut() {
            session.last_change = percentage;
        }
    }

    /// Update the split axis. An active session keeps the axis it started with.
    pub fn set_direction(&mut self, direction: SplitAxis) {
        self.props.direction = direction;
    }

    /// Handle pointer-down on the handle itself.
    pub fn pointer_down(&mut self, position: PointerPosition) -> SplitPointerDispatch {
        if let Some(session) = &self.session {
            tracing::trace!(
                message = "split.down.ignored",
                session = session.id,
                reason = "session_already_active"
            );
            return SplitPointerDispatch::ignored(
                SplitPointerPhase::PointerDown,
                SplitIgnoredReason::SessionAlreadyActive,
                Some(session.id),
                Some(position),
            );
        }

        let id = self.next_session_id();
        let listeners = SessionListeners::acquire(&mut self.scope);
        self.session = Some(DragSession {
            id,
            axis: self.props.direction,
            bounds: self.bounds,
            last_change: self.props.split_percentage,
            listeners,
        });
        tracing::debug!(
            message = "split.session.start",
            session = id,
            axis = ?self.props.direction,
            split_percentage = self.props.split_percentage,
            x = position.x,
            y = position.y
        );
        SplitPointerDispatch::new(
            SplitPointerPhase::PointerDown,
            Some(id),
            Some(position),
            SplitDispatchOutcome::SessionStarted,
            EventDisposition::PREVENT_DEFAULT,
        )
    }

    /// Handle a broadly observed pointer-move at host time `now`.
    pub fn pointer_move(&mut self, position: PointerPosition, now: Duration) -> SplitPointerDispatch {
        let Some(id) = self.active_session_id() else {
            return SplitPointerDispatch::ignored(
                SplitPointerPhase::PointerMove,
                SplitIgnoredReason::NoActiveSession,
                None,
                Some(position),
            );
        };

        let outcome = match self.throttle.offer(position, now) {
            Some(sample) => self.emit_change(SplitPointerPhase::PointerMove, sample),
            None => {
                tracing::trace!(message = "split.move.throttled", session = id);
                SplitDispatchOutcome::Throttled
            }
        };
        SplitPointerDispatch::new(
            SplitPointerPhase::PointerMove,
            Some(id),
            Some(position),
            outcome,
            EventDisposition::CAPTURED,
        )
    }

    /// Deliver a throttled sample whose deadline has passed.
    ///
    /// Hosts schedule this for [`next_deadline`](Self::next_deadline).
    pub fn poll_throttle(&mut self, now: Duration) -> SplitPointerDispatch {
        let Some(id) = self.active_session_id() else {
            return SplitPointerDispatch::ignored(
                SplitPointerPhase::ThrottleDeadline,
                SplitIgnoredReason::NoActiveSession,
                None,
                None,
            );
        };
        let Some(sample) = self.throttle.poll(now) else {
            return SplitPointerDispatch::ignored(
                SplitPointerPhase::ThrottleDeadline,
                SplitIgnoredReason::NothingDue,
                Some(id),
                None,
            );
        };

        let outcome = self.emit_change(SplitPointerPhase::ThrottleDeadline, sample);
        SplitPointerDispatch::new(
            SplitPointerPhase::ThrottleDeadline,
            Some(id),
            Some(sample),
            outcome,
            EventDisposition::PASS,
        )
    }

    /// Handle a broadly observed pointer-up; ends the session.
    ///
    /// The final percentage bypasses the throttle and is delivered through
    /// `on_release` only if it differs from the committed `split_percentage`,
    /// regardless of which intermediate values `on_change` reported.
    pub fn pointer_up(&mut self, position: PointerPosition) -> SplitPointerDispatch {
        let Some(ended) = self.end_session() else {
            return SplitPointerDispatch::ignored(
                SplitPointerPhase::PointerUp,
                SplitIgnoredReason::NoActiveSession,
                None,
                Some(position),
            );
        };

        let outcome = match self.geometry.container_bounds() {
            None => {
                tracing::warn!(
                    message = "split.geometry.unavailable",
                    session = ended.id,
                    phase = "pointer_up"
                );
                SplitDispatchOutcome::Ignored(SplitIgnoredReason::GeometryUnavailable)
            }
            Some(container) => {
                let percentage = percent_of_container(position, container, ended.axis, ended.bounds);
                if percentage == self.props.split_percentage {
                    SplitDispatchOutcome::Unchanged { percentage }
                } else {
                    self.handler.on_release(percentage);
                    SplitDispatchOutcome::Released { percentage }
                }
            }
        };
        tracing::debug!(
            message = "split.session.end",
            session = ended.id,
            released = ?outcome,
            dropped_pending = ended.dropped_pending
        );
        SplitPointerDispatch::new(
            SplitPointerPhase::PointerUp,
            Some(ended.id),
            Some(position),
            outcome,
            EventDisposition::PASS,
        )
    }

    /// Abandon any active session without a release (host unmount).
    ///
    /// A no-op when idle.
    pub fn teardown(&mut self) -> SplitPointerDispatch {
        let Some(ended) = self.end_session() else {
            return SplitPointerDispatch::ignored(
                SplitPointerPhase::Teardown,
                SplitIgnoredReason::NoActiveSession,
                None,
                None,
            );
        };
        tracing::debug!(
            message = "split.session.abandoned",
            session = ended.id,
            dropped_pending = ended.dropped_pending
        );
        SplitPointerDispatch::new(
            SplitPointerPhase::Teardown,
            Some(ended.id),
            None,
            SplitDispatchOutcome::Abandoned {
                dropped_pending: ended.dropped_pending,
            },
            EventDisposition::PASS,
        )
    }

    fn emit_change(
        &mut self,
        phase: SplitPointerPhase,
        sample: PointerPosition,
    ) -> SplitDispatchOutcome {
        let Some(session) = self.session.as_mut() else {
            return SplitDispatchOutcome::Ignored(SplitIgnoredReason::NoActiveSession);
        };
        let Some(container) = self.geometry.container_bounds() else {
            tracing::warn!(
                message = "split.geometry.unavailable",
                session = session.id,
                phase = ?phase
            );
            return SplitDispatchOutcome::Ignored(SplitIgnoredReason::GeometryUnavailable);
        };

        let percentage = percent_of_container(sample, container, session.axis, session.bounds);
        if percentage == session.last_change {
            return SplitDispatchOutcome::Unchanged { percentage };
        }
        session.last_change = percentage;
        tracing::trace!(message = "split.change", session = session.id, percentage);
        self.handler.on_change(percentage);
        SplitDispatchOutcome::Changed { percentage }
    }

    /// The only path out of `Dragging`.
    fn end_session(&mut self) -> Option<EndedSession> {
        let DragSession {
            id,
            axis,
            bounds,
            listeners,
            ..
        } = self.session.take()?;
        listeners.release(&mut self.scope);
        let dropped_pending = self.throttle.cancel();
        Some(EndedSession {
            id,
            axis,
            bounds,
            dropped_pending,
        })
    }

    fn next_session_id(&mut self) -> u64 {
        let id = self.next_session_id;
        self.next_session_id = self.next_session_id.saturating_add(1);
        id
    }
}

impl<S, G, H> Drop for SplitDragController<S, G, H>
where
    S: PointerListenerScope,
    G: ContainerBounds,
    H: SplitHandler,
{
    fn drop(&mut self) {
        if self.session.is_some() {
            let _ = self.teardown();
        }
    }
}
