use crate::limiter::{DEFAULT_DEBOUNCE_MS, DEFAULT_THROTTLE_MS};

/// Configuration for [`crate::Tracker`].
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`, so it can live in a
/// host's settings file.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TrackerOptions {
    /// Throttle interval for scroll-driven refreshes.
    pub throttle_ms: u64,
    /// Quiet period before the trailing scroll/resize refresh.
    pub debounce_ms: u64,
    /// Refresh on the first event of a burst instead of after it.
    pub debounce_immediate: bool,
    /// Initial margin, see [`crate::Tracker::margin`].
    pub margin: f64,
    /// Refresh right after `add`, so a view already in sight loads without waiting for an event.
    pub refresh_on_add: bool,
    /// Refresh right after `remove`.
    pub refresh_on_remove: bool,
    /// Install the scroll/resize bindings in `Tracker::new`. When `false`, the tracker starts
    /// passive until [`crate::Tracker::bind`] is called.
    pub bind_on_create: bool,
}

impl Default for TrackerOptions {
    fn default() -> Self {
        Self {
            throttle_ms: DEFAULT_THROTTLE_MS,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            debounce_immediate: false,
            margin: 0.0,
            refresh_on_add: false,
            refresh_on_remove: false,
            bind_on_create: true,
        }
    }
}

impl TrackerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_throttle_ms(mut self, throttle_ms: u64) -> Self {
        self.throttle_ms = throttle_ms;
        self
    }

    pub fn with_debounce_ms(mut self, debounce_ms: u64) -> Self {
        self.debounce_ms = debounce_ms;
        self
    }

    pub fn with_debounce_immediate(mut self, immediate: bool) -> Self {
        self.debounce_immediate = immediate;
        self
    }

    pub fn with_margin(mut self, margin: f64) -> Self {
        self.margin = margin;
        self
    }

    pub fn with_refresh_on_add(mut self, refresh_on_add: bool) -> Self {
        self.refresh_on_add = refresh_on_add;
        self
    }

    pub fn with_refresh_on_remove(mut self, refresh_on_remove: bool) -> Self {
        self.refresh_on_remove = refresh_on_remove;
        self
    }

    pub fn with_bind_on_create(mut self, bind_on_create: bool) -> Self {
        self.bind_on_create = bind_on_create;
        self
    }
}
