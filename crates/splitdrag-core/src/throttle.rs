#![forbid(unsafe_code)]

//! Throttle gate for high-frequency pointer samples.
//!
//! Pointer moves can arrive far faster than a layout can usefully reflow.
//! [`ThrottleGate`] thins that stream to at most one released sample per
//! interval, using a "latest wins" pending slot:
//!
//! - A sample offered while the gate is cooling down replaces any pending
//!   sample. Nothing is reordered; older samples are simply dropped.
//! - Once the interval elapses, the pending sample is released by
//!   [`ThrottleGate::poll`], or by the next [`ThrottleGate::offer`] that lands
//!   past the deadline (the newer sample then supersedes the pending one).
//! - [`ThrottleGate::cancel`] discards the pending sample and reopens the gate.
//!   Owners call it when the stream the samples belong to ends.
//!
//! By default the gate is trailing-edge: the first sample of a burst waits for
//! the interval too. With [`ThrottleConfig::leading_edge`] the first sample
//! after an idle period is released immediately.
//!
//! Time is supplied by the caller as a monotonic [`Duration`], which keeps the
//! gate deterministic under test.
//!
//! ```
//! use core::time::Duration;
//! use splitdrag_core::throttle::{ThrottleConfig, ThrottleGate};
//!
//! let mut gate = ThrottleGate::new(ThrottleConfig::default());
//! let ms = Duration::from_millis;
//!
//! assert_eq!(gate.offer(1, ms(0)), None);
//! assert_eq!(gate.offer(2, ms(10)), None);
//! assert_eq!(gate.offer(3, ms(20)), None);
//!
//! // Nothing is due before the deadline.
//! assert_eq!(gate.poll(ms(30)), None);
//! assert_eq!(gate.next_deadline(), Some(Duration::from_secs(1) / 30));
//!
//! // The newest sample of the burst is released once the interval elapses.
//! assert_eq!(gate.poll(ms(34)), Some(3));
//! assert!(!gate.has_pending());
//! ```

use core::time::Duration;

/// Default number of released samples per second.
pub const DEFAULT_UPDATES_PER_SECOND: u32 = 30;

/// Throttle timing parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThrottleConfig {
    /// Minimum time between two released samples (default: 1s / 30).
    ///
    /// A zero interval disables throttling.
    pub interval: Duration,
    /// Release the first sample after an idle period immediately (default: false).
    pub leading_edge: bool,
}

impl Default for ThrottleConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(1) / DEFAULT_UPDATES_PER_SECOND,
            leading_edge: false,
        }
    }
}

#[derive(Debug, Clone)]
enum GateState<T> {
    /// No interval is running; the next sample opens one.
    Open,
    /// Inside an interval; `pending` is released at `deadline`.
    Cooling { deadline: Duration, pending: Option<T> },
}

/// Rate limiter releasing at most one sample per interval.
///
/// # Invariants
///
/// 1. Two released samples are never closer than `interval` in caller time.
/// 2. At most one sample is pending, and it is the most recently offered one.
/// 3. After [`cancel`](Self::cancel) nothing is pending and the gate is open.
#[derive(Debug, Clone)]
pub struct ThrottleGate<T> {
    config: ThrottleConfig,
    state: GateState<T>,
}

impl<T> ThrottleGate<T> {
    /// Create an open gate.
    #[must_use]
    pub const fn new(config: ThrottleConfig) -> Self {
        Self {
            config,
            state: GateState::Open,
        }
    }

    /// Gate configuration.
    #[must_use]
    pub const fn config(&self) -> ThrottleConfig {
        self.config
    }

    /// Offer a sample observed at `now`.
    ///
    /// Returns `Some(sample)` when the sample may be delivered immediately, or
    /// `None` when it was parked as the pending sample.
    pub fn offer(&mut self, sample: T, now: Duration) -> Option<T> {
        let interval = self.config.interval;
        if interval.is_zero() {
            return Some(sample);
        }

        if let GateState::Cooling { deadline, pending } = &mut self.state {
            if now < *deadline {
                *pending = Some(sample);
                return None;
            }
            if pending.is_some() {
                // Deadline passed without a poll: the new sample supersedes.
                self.state = Self::cooling(now, interval, None);
                return Some(sample);
            }
        }

        if self.config.leading_edge {
            self.state = Self::cooling(now, interval, None);
            Some(sample)
        } else {
            self.state = Self::cooling(now, interval, Some(sample));
            None
        }
    }

    /// Release the pending sample if its deadline has passed.
    pub fn poll(&mut self, now: Duration) -> Option<T> {
        let GateState::Cooling { deadline, pending } = &mut self.state else {
            return None;
        };
        if now < *deadline {
            return None;
        }
        match pending.take() {
            Some(sample) => {
                self.state = Self::cooling(now, self.config.interval, None);
                Some(sample)
            }
            None => {
                self.state = GateState::Open;
                None
            }
        }
    }

    /// Deadline at which the pending sample becomes due, if one is pending.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        match &self.state {
            GateState::Cooling {
                deadline,
                pending: Some(_),
            } => Some(*deadline),
            _ => None,
        }
    }

    /// Check if a sample is waiting for its deadline.
    #[must_use]
    pub fn has_pending(&self) -> bool {
        self.next_deadline().is_some()
    }

    /// Discard any pending sample and reopen the gate.
    ///
    /// Returns `true` if a pending sample was dropped.
    pub fn cancel(&mut self) -> bool {
        let dropped = self.has_pending();
        self.state = GateState::Open;
        dropped
    }

    fn cooling(now: Duration, interval: Duration, pending: Option<T>) -> GateState<T> {
        GateState::Cooling {
            deadline: now.saturating_add(interval),
            pending,
        }
    }
}

impl<T> Default for ThrottleGate<T> {
    fn default() -> Self {
        Self::new(ThrottleConfig::default())
    }
}
