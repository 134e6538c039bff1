use alloc::vec::Vec;

/// Host events a tracker listens to on its container.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EventKind {
    Scroll,
    Resize,
}

/// The rate-limited refresh wrapper an event is routed to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Handler {
    Throttle,
    Debounce,
}

const DEFAULT_BINDINGS: [(EventKind, Handler); 3] = [
    (EventKind::Scroll, Handler::Throttle),
    (EventKind::Scroll, Handler::Debounce),
    (EventKind::Resize, Handler::Debounce),
];

/// Event listener table for a single container.
///
/// Mirrors `addEventListener` semantics: binding the same `(event, handler)` pair twice is a
/// no-op, and handlers for an event run in bind order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Bindings {
    entries: Vec<(EventKind, Handler)>,
}

impl Bindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// `scroll` → throttle + debounce, `resize` → debounce.
    pub fn tracker_defaults() -> Self {
        let mut b = Self::new();
        b.bind_defaults();
        b
    }

    /// Adds any of the default tracker pairs that are missing.
    pub fn bind_defaults(&mut self) {
        for (event, handler) in DEFAULT_BINDINGS {
            self.bind(event, handler);
        }
    }

    /// Returns `false` if the pair was already bound.
    pub fn bind(&mut self, event: EventKind, handler: Handler) -> bool {
        if self.is_bound(event, handler) {
            return false;
        }
        self.entries.push((event, handler));
        true
    }

    /// Returns `false` if the pair was not bound.
    pub fn unbind(&mut self, event: EventKind, handler: Handler) -> bool {
        let before = self.entries.len();
        self.entries.retain(|&(e, h)| !(e == event && h == handler));
        self.entries.len() != before
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_bound(&self, event: EventKind, handler: Handler) -> bool {
        self.entries.contains(&(event, handler))
    }

    pub fn handlers(&self, event: EventKind) -> impl Iterator<Item = Handler> + '_ {
        self.entries
            .iter()
            .filter(move |(e, _)| *e == event)
            .map(|&(_, h)| h)
    }
}
