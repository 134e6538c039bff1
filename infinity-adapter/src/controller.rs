use infinity::{ClientRect, Container, Tracker, TrackerOptions};

use crate::{Surface, SurfaceElement};

/// A framework-neutral controller that wraps an `infinity::Tracker` over a [`Surface`].
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `on_scroll` / `on_resize` when UI events occur
/// - `tick(now_ms)` when the timer requested by `next_deadline()` expires
///
/// The surface's scroll state is updated before the tracker sees the event, so the rate-limited
/// refreshes always measure the latest position.
#[derive(Clone, Debug)]
pub struct Controller<A = ()> {
    tracker: Tracker<SurfaceElement, A>,
    surface: Surface,
}

impl<A> Controller<A> {
    /// Tracks views against the surface's viewport element (strict overlap test).
    pub fn new(surface: Surface, options: TrackerOptions) -> Self {
        let container = Container::Element(surface.viewport_element());
        Self {
            tracker: Tracker::with_options(container, options),
            surface,
        }
    }

    /// Tracks views against the surface as a window (inclusive viewport test).
    pub fn new_window(surface: Surface, options: TrackerOptions) -> Self {
        let container = Container::window(surface.clone());
        Self {
            tracker: Tracker::with_options(container, options),
            surface,
        }
    }

    pub fn from_tracker(tracker: Tracker<SurfaceElement, A>, surface: Surface) -> Self {
        Self { tracker, surface }
    }

    pub fn tracker(&self) -> &Tracker<SurfaceElement, A> {
        &self.tracker
    }

    pub fn tracker_mut(&mut self) -> &mut Tracker<SurfaceElement, A> {
        &mut self.tracker
    }

    pub fn into_tracker(self) -> Tracker<SurfaceElement, A> {
        self.tracker
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    /// Creates an element at `layout` (content coordinates) and starts tracking it.
    pub fn insert(
        &mut self,
        layout: ClientRect,
        args: impl IntoIterator<Item = A>,
    ) -> SurfaceElement {
        let el = self.surface.element(layout);
        self.tracker.add(el.clone(), args);
        el
    }

    pub fn remove(&mut self, el: &SurfaceElement) {
        self.tracker.remove(el);
    }

    /// Call this when the UI reports a new scroll position.
    ///
    /// Returns `true` if a refresh ran.
    pub fn on_scroll(&mut self, x: f64, y: f64, now_ms: u64) -> bool {
        atrace!(x, y, now_ms, "Controller::on_scroll");
        self.surface.scroll_to(x, y);
        self.tracker.on_scroll(now_ms)
    }

    /// Call this when the UI reports a new viewport size.
    ///
    /// Returns `true` if a refresh ran.
    pub fn on_resize(&mut self, width: f64, height: f64, now_ms: u64) -> bool {
        atrace!(width, height, now_ms, "Controller::on_resize");
        self.surface.resize(width, height);
        self.tracker.on_resize(now_ms)
    }

    /// Runs the trailing debounced refresh if it is due. Returns `true` if a refresh ran.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        self.tracker.tick(now_ms)
    }

    pub fn next_deadline(&self) -> Option<u64> {
        self.tracker.next_deadline()
    }

    /// Refreshes immediately, bypassing the rate limiters.
    pub fn refresh(&mut self) {
        self.tracker.refresh();
    }

    /// Elements whose views are currently loaded, in registry order.
    pub fn loaded(&self) -> impl Iterator<Item = &SurfaceElement> + '_ {
        self.tracker
            .views()
            .iter()
            .filter(|v| v.is_loaded())
            .map(|v| v.element())
    }
}
