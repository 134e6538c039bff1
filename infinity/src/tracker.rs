use alloc::vec::Vec;

use crate::emitter::{Emitter, Notification, SubscriptionId, Topic};
use crate::events::{Bindings, EventKind, Handler};
use crate::intersect::{in_view, in_viewport};
use crate::limiter::{Debounce, Throttle};
use crate::{BoundingBox, Container, Element, Refresh, TrackerOptions};

/// A tracked element, the arguments it was registered with and its current visibility state.
#[derive(Clone, Debug)]
pub struct View<E, A> {
    element: E,
    args: Vec<A>,
    loaded: bool,
}

impl<E, A> View<E, A> {
    pub fn element(&self) -> &E {
        &self.element
    }

    pub fn args(&self) -> &[A] {
        &self.args
    }

    /// Whether the last refresh found this view visible.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }
}

/// A headless viewport tracker.
///
/// The tracker owns a registry of views and fires `Load`/`Unload` notifications as views cross
/// into and out of the container's visible region. It holds no UI objects beyond the handles you
/// give it:
/// - geometry comes from [`Element`] / [`crate::WindowMetrics`] implementations,
/// - time comes from the `now_ms` you pass to [`Tracker::handle_event`] and [`Tracker::tick`].
///
/// Mutating methods return `&mut Self` so calls can be chained:
///
/// ```
/// use infinity::{ClientRect, Container, Element, Tracker};
///
/// #[derive(Clone, Copy, PartialEq)]
/// struct Fixed(ClientRect);
///
/// impl Element for Fixed {
///     fn bounding_client_rect(&self) -> ClientRect {
///         self.0
///     }
/// }
///
/// let pane = Fixed(ClientRect::new(0.0, 0.0, 500.0, 500.0));
/// let row = Fixed(ClientRect::new(100.0, 0.0, 500.0, 50.0));
///
/// let mut t: Tracker<Fixed, u32> = Tracker::new(Container::Element(pane));
/// t.load(|_, args| assert_eq!(args[0], 7))
///     .add(row, [7])
///     .refresh();
/// assert!(t.is_loaded(&row));
/// ```
#[derive(Clone, Debug)]
pub struct Tracker<E, A = ()> {
    container: Container<E>,
    views: Vec<View<E, A>>,
    margin: f64,
    bbox: BoundingBox,
    throttle: Throttle,
    debounce: Debounce,
    bindings: Bindings,
    emitter: Emitter<E, A>,
    options: TrackerOptions,
}

impl<E: Element + PartialEq, A> Tracker<E, A> {
    /// Creates a tracker with default options (200 ms throttle, 100 ms trailing debounce).
    pub fn new(container: Container<E>) -> Self {
        Self::with_options(container, TrackerOptions::default())
    }

    pub fn with_options(container: Container<E>, options: TrackerOptions) -> Self {
        let bindings = if options.bind_on_create {
            Bindings::tracker_defaults()
        } else {
            Bindings::new()
        };
        idebug!(
            is_window = container.is_window(),
            throttle_ms = options.throttle_ms,
            debounce_ms = options.debounce_ms,
            bound = options.bind_on_create,
            "Tracker::new"
        );
        let mut t = Self {
            container,
            views: Vec::new(),
            margin: options.margin,
            bbox: BoundingBox::default(),
            throttle: Throttle::new(options.throttle_ms),
            debounce: Debounce::new(options.debounce_ms, options.debounce_immediate),
            bindings,
            emitter: Emitter::new(),
            options,
        };
        t.bbox = t.bounding_box();
        t
    }

    pub fn options(&self) -> &TrackerOptions {
        &self.options
    }

    pub fn container(&self) -> &Container<E> {
        &self.container
    }

    pub fn is_window(&self) -> bool {
        self.container.is_window()
    }

    /// Registers `element`. `args` are handed back verbatim with every `Load`/`Unload`.
    ///
    /// The view starts unloaded. Its visibility is evaluated on the next refresh, which runs
    /// immediately only if `refresh_on_add` is set.
    ///
    /// Adding an element that is already tracked creates a second, independent view.
    pub fn add(&mut self, element: E, args: impl IntoIterator<Item = A>) -> &mut Self {
        #[cfg(feature = "tracing")]
        if self.contains(&element) {
            iwarn!(
                views = self.views.len(),
                "Tracker::add: element is already tracked"
            );
        }
        self.views.push(View {
            element,
            args: args.into_iter().collect(),
            loaded: false,
        });
        itrace!(views = self.views.len(), "Tracker::add");
        if self.options.refresh_on_add {
            self.refresh();
        }
        self
    }

    /// Stops tracking the first view registered for `element`.
    ///
    /// Removal is silent: no `Unload` is emitted even if the view was loaded.
    pub fn remove(&mut self, element: &E) -> &mut Self {
        match self.views.iter().position(|v| v.element == *element) {
            Some(index) => {
                self.views.remove(index);
                itrace!(index, views = self.views.len(), "Tracker::remove");
            }
            None => {
                itrace!("Tracker::remove: element not tracked");
            }
        }
        if self.options.refresh_on_remove {
            self.refresh();
        }
        self
    }

    /// Sets the margin applied around the container box from the next refresh on.
    ///
    /// A positive margin loads views slightly before they scroll into sight (and unloads them
    /// slightly after); a negative margin does the reverse.
    pub fn margin(&mut self, px: f64) -> &mut Self {
        self.margin = px;
        self
    }

    pub fn current_margin(&self) -> f64 {
        self.margin
    }

    /// Computes the current margin-expanded container box.
    pub fn bounding_box(&self) -> BoundingBox {
        self.container.rect().expand(self.margin)
    }

    /// The box computed by the last refresh.
    pub fn cached_box(&self) -> BoundingBox {
        self.bbox
    }

    /// Tests `view` against the cached box.
    ///
    /// Zero-width or zero-height views are never visible.
    pub fn visible(&self, view: &View<E, A>) -> bool {
        let pos = view.element.bounding_client_rect();
        if pos.is_empty() {
            return false;
        }
        if self.container.is_window() {
            in_viewport(&pos, &self.bbox)
        } else {
            in_view(&pos, &self.bbox)
        }
    }

    /// Re-measures the container and emits load/unload transitions.
    ///
    /// Within one pass all loads (preceded by a single `Loading`) are emitted before any unloads
    /// (preceded by a single `Unloading`), each group in registry order. A view's `loaded` flag
    /// flips only after its notification was dispatched, so a panicking subscriber leaves the
    /// view in its previous state and the transition is retried on the next refresh.
    pub fn refresh(&mut self) -> &mut Self {
        self.refresh_report();
        self
    }

    /// Same as [`Tracker::refresh`], but returns how many views changed state.
    pub fn refresh_report(&mut self) -> Refresh {
        self.bbox = self.bounding_box();

        let mut entering = Vec::new();
        let mut leaving = Vec::new();
        for (i, view) in self.views.iter().enumerate() {
            let visible = self.visible(view);
            if visible && !view.loaded {
                entering.push(i);
            } else if !visible && view.loaded {
                leaving.push(i);
            }
        }

        if !entering.is_empty() {
            self.emitter.emit(&Notification::Loading);
            for &i in &entering {
                let view = &self.views[i];
                self.emitter.emit(&Notification::Load {
                    element: &view.element,
                    args: view.args.as_slice(),
                });
                self.views[i].loaded = true;
            }
        }

        if !leaving.is_empty() {
            self.emitter.emit(&Notification::Unloading);
            for &i in &leaving {
                let view = &self.views[i];
                self.emitter.emit(&Notification::Unload {
                    element: &view.element,
                    args: view.args.as_slice(),
                });
                self.views[i].loaded = false;
            }
        }

        itrace!(
            views = self.views.len(),
            loaded = entering.len(),
            unloaded = leaving.len(),
            "Tracker::refresh"
        );
        Refresh {
            loaded: entering.len(),
            unloaded: leaving.len(),
        }
    }

    /// Feeds a host `scroll`/`resize` event on the container through the bound rate limiters.
    ///
    /// Returns `true` if a refresh ran. Events are ignored while the tracker is unbound.
    pub fn handle_event(&mut self, event: EventKind, now_ms: u64) -> bool {
        let handlers: Vec<Handler> = self.bindings.handlers(event).collect();
        let mut refreshed = false;
        for handler in handlers {
            let fire = match handler {
                Handler::Throttle => self.throttle.invoke(now_ms),
                Handler::Debounce => self.debounce.invoke(now_ms),
            };
            if fire {
                self.refresh();
                refreshed = true;
            }
        }
        itrace!(?event, now_ms, refreshed, "Tracker::handle_event");
        refreshed
    }

    pub fn on_scroll(&mut self, now_ms: u64) -> bool {
        self.handle_event(EventKind::Scroll, now_ms)
    }

    pub fn on_resize(&mut self, now_ms: u64) -> bool {
        self.handle_event(EventKind::Resize, now_ms)
    }

    /// Runs the trailing debounced refresh if its deadline has passed.
    ///
    /// Call this from a host timer scheduled at [`Tracker::next_deadline`]. Returns `true` if a
    /// refresh ran. A missed tick is not lost: the next event runs the overdue refresh.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        if self.debounce.poll(now_ms) {
            self.refresh();
            return true;
        }
        false
    }

    /// When the host should call [`Tracker::tick`] next, if anything is pending.
    pub fn next_deadline(&self) -> Option<u64> {
        self.debounce.deadline()
    }

    /// Detaches the scroll/resize bindings and cancels pending timers.
    ///
    /// Manual [`Tracker::refresh`] calls keep working.
    pub fn unbind(&mut self) -> &mut Self {
        self.bindings.clear();
        self.throttle.cancel();
        self.debounce.cancel();
        idebug!("Tracker::unbind");
        self
    }

    /// Reinstalls the default scroll/resize bindings. Binding twice is a no-op.
    pub fn bind(&mut self) -> &mut Self {
        self.bindings.bind_defaults();
        idebug!("Tracker::bind");
        self
    }

    pub fn is_bound(&self) -> bool {
        !self.bindings.is_empty()
    }

    pub fn bindings(&self) -> &Bindings {
        &self.bindings
    }

    /// Direct access to the listener table, e.g. to stop reacting to `resize`.
    pub fn bindings_mut(&mut self) -> &mut Bindings {
        &mut self.bindings
    }

    pub fn views(&self) -> &[View<E, A>] {
        &self.views
    }

    pub fn len(&self) -> usize {
        self.views.len()
    }

    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }

    pub fn contains(&self, element: &E) -> bool {
        self.views.iter().any(|v| v.element == *element)
    }

    /// Loaded state of the first view registered for `element` (`false` if untracked).
    pub fn is_loaded(&self, element: &E) -> bool {
        self.views
            .iter()
            .find(|v| v.element == *element)
            .is_some_and(|v| v.loaded)
    }

    pub fn emitter(&self) -> &Emitter<E, A> {
        &self.emitter
    }

    /// Subscribes to any topic. The returned id can be passed to [`Tracker::off`].
    pub fn on(
        &mut self,
        topic: Topic,
        f: impl Fn(&Notification<'_, E, A>) + Send + Sync + 'static,
    ) -> SubscriptionId {
        self.emitter.on(topic, f)
    }

    pub fn off(&mut self, id: SubscriptionId) -> bool {
        self.emitter.off(id)
    }
}

impl<E: Element + PartialEq + 'static, A: 'static> Tracker<E, A> {
    /// Adds a subscriber called once per view that becomes visible.
    pub fn load(&mut self, f: impl Fn(&E, &[A]) + Send + Sync + 'static) -> &mut Self {
        self.emitter.on(Topic::Load, move |n| {
            if let Notification::Load { element, args } = n {
                f(element, args);
            }
        });
        self
    }

    /// Adds a subscriber called once per view that stops being visible.
    pub fn unload(&mut self, f: impl Fn(&E, &[A]) + Send + Sync + 'static) -> &mut Self {
        self.emitter.on(Topic::Unload, move |n| {
            if let Notification::Unload { element, args } = n {
                f(element, args);
            }
        });
        self
    }

    /// Adds a subscriber called once before a refresh emits its batch of loads.
    pub fn loading(&mut self, f: impl Fn() + Send + Sync + 'static) -> &mut Self {
        self.emitter.on(Topic::Loading, move |_| f());
        self
    }

    /// Adds a subscriber called once before a refresh emits its batch of unloads.
    pub fn unloading(&mut self, f: impl Fn() + Send + Sync + 'static) -> &mut Self {
        self.emitter.on(Topic::Unloading, move |_| f());
        self
    }
}
