//! Host-clocked rate limiters.
//!
//! Neither limiter owns a timer. The host passes a monotonic `now_ms` to [`Throttle::invoke`],
//! [`Debounce::invoke`] and [`Debounce::poll`], and uses [`Debounce::deadline`] to decide when to
//! poll next.

pub const DEFAULT_THROTTLE_MS: u64 = 200;
pub const DEFAULT_DEBOUNCE_MS: u64 = 100;

/// Leading-edge throttle: fires at most once per `interval_ms`.
///
/// Calls landing inside the interval are dropped; there is no trailing call. Pair it with a
/// [`Debounce`] when the final position after a gesture matters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Throttle {
    interval_ms: u64,
    last_fire_ms: Option<u64>,
}

impl Throttle {
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms,
            last_fire_ms: None,
        }
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    pub fn last_fire_ms(&self) -> Option<u64> {
        self.last_fire_ms
    }

    /// Records a trigger. Returns `true` when the wrapped call should run now.
    pub fn invoke(&mut self, now_ms: u64) -> bool {
        let fire = match self.last_fire_ms {
            None => true,
            Some(last) => now_ms.saturating_sub(last) >= self.interval_ms,
        };
        if fire {
            self.last_fire_ms = Some(now_ms);
        }
        fire
    }

    /// Forgets the last fire time, so the next trigger fires immediately.
    pub fn cancel(&mut self) {
        self.last_fire_ms = None;
    }
}

impl Default for Throttle {
    fn default() -> Self {
        Self::new(DEFAULT_THROTTLE_MS)
    }
}

/// Trailing (or leading, with `immediate`) debounce.
///
/// Every trigger pushes the deadline to `now + delay_ms`, so a burst collapses into one call:
/// - `immediate == false`: the call runs when the deadline passes (see [`Debounce::poll`]).
/// - `immediate == true`: the call runs on the first trigger of a burst; the deadline only marks
///   the end of the burst.
///
/// A deadline that has passed counts as expired even if it was never polled: the next trigger
/// starts a new burst.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Debounce {
    delay_ms: u64,
    immediate: bool,
    deadline_ms: Option<u64>,
}

impl Debounce {
    /// A `delay_ms` of `0` selects [`DEFAULT_DEBOUNCE_MS`].
    pub fn new(delay_ms: u64, immediate: bool) -> Self {
        let delay_ms = if delay_ms == 0 {
            DEFAULT_DEBOUNCE_MS
        } else {
            delay_ms
        };
        Self {
            delay_ms,
            immediate,
            deadline_ms: None,
        }
    }

    pub fn delay_ms(&self) -> u64 {
        self.delay_ms
    }

    pub fn immediate(&self) -> bool {
        self.immediate
    }

    pub fn deadline(&self) -> Option<u64> {
        self.deadline_ms
    }

    pub fn is_pending(&self) -> bool {
        self.deadline_ms.is_some()
    }

    /// Records a trigger. Returns `true` when the wrapped call should run now.
    ///
    /// That is the leading edge of a burst in immediate mode, or an overdue trailing call that
    /// was never polled in trailing mode.
    pub fn invoke(&mut self, now_ms: u64) -> bool {
        let expired = matches!(self.deadline_ms, Some(deadline) if now_ms >= deadline);
        let fire = if self.immediate {
            self.deadline_ms.is_none() || expired
        } else {
            expired
        };
        self.deadline_ms = Some(now_ms.saturating_add(self.delay_ms));
        fire
    }

    /// Expires the pending timer if its deadline has passed. Returns `true` when the wrapped call
    /// should run now (trailing edge).
    pub fn poll(&mut self, now_ms: u64) -> bool {
        match self.deadline_ms {
            Some(deadline) if now_ms >= deadline => {
                self.deadline_ms = None;
                !self.immediate
            }
            _ => false,
        }
    }

    pub fn cancel(&mut self) {
        self.deadline_ms = None;
    }
}

impl Default for Debounce {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE_MS, false)
    }
}
