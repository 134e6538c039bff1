//! A headless viewport tracker for infinite-scroll style UIs.
//!
//! For host-side utilities (an in-memory scroll surface and an event controller), see the
//! `infinity-adapter` crate.
//!
//! A [`Tracker`] keeps a registry of views (elements plus caller-supplied arguments) and, on every
//! refresh, intersects each view's rect with the container's margin-expanded box. Views that
//! became visible get a `Load` notification, views that left get an `Unload`, each exactly once per
//! transition. Scroll events are throttled and scroll/resize events are debounced before they
//! trigger a refresh.
//!
//! It is UI-agnostic. A DOM/GUI layer is expected to provide:
//! - element geometry ([`Element`]) and, for window containers, viewport size ([`WindowMetrics`])
//! - scroll/resize events and a millisecond clock (`handle_event`, `tick`)
//! - whatever "loading" a view actually means, inside the subscribers
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod container;
mod emitter;
mod events;
pub mod intersect;
mod limiter;
mod options;
mod tracker;
mod types;


pub use container::{Container, Element, WindowMetrics};
pub use emitter::{Emitter, Notification, Subscriber, SubscriptionId, Topic};
pub use events::{Bindings, EventKind, Handler};
pub use limiter::{DEFAULT_DEBOUNCE_MS, DEFAULT_THROTTLE_MS, Debounce, Throttle};
pub use options::TrackerOptions;
pub use tracker::{Tracker, View};
pub use types::{BoundingBox, ClientRect, Refresh, Size};
