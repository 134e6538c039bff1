use std::sync::{Arc, PoisonError, RwLock};

use infinity::{ClientRect, Element, Size, WindowMetrics};

/// A lightweight, serializable snapshot of a surface's viewport and scroll position.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SurfaceState {
    /// Where the viewport sits in client coordinates.
    pub viewport: ClientRect,
    pub scroll_x: f64,
    pub scroll_y: f64,
}

#[derive(Debug)]
struct Shared {
    state: SurfaceState,
    next_id: u64,
}

/// An in-memory scroll container.
///
/// Elements are laid out in content coordinates; their client rect is their layout shifted by
/// the viewport origin and the current scroll offset. Clones share the same state, so a host can
/// keep one handle for scrolling while the tracker holds the elements.
#[derive(Clone, Debug)]
pub struct Surface {
    shared: Arc<RwLock<Shared>>,
}

impl Surface {
    /// A `width`×`height` viewport at the client origin.
    pub fn new(width: f64, height: f64) -> Self {
        Self::from_state(SurfaceState {
            viewport: ClientRect::new(0.0, 0.0, width, height),
            scroll_x: 0.0,
            scroll_y: 0.0,
        })
    }

    pub fn from_state(state: SurfaceState) -> Self {
        Self {
            shared: Arc::new(RwLock::new(Shared { state, next_id: 1 })),
        }
    }

    /// Moves the viewport to `(top, left)` in client coordinates.
    pub fn with_origin(self, top: f64, left: f64) -> Self {
        self.write(|s| {
            s.state.viewport.top = top;
            s.state.viewport.left = left;
        });
        self
    }

    fn read<R>(&self, f: impl FnOnce(&Shared) -> R) -> R {
        let guard = self.shared.read().unwrap_or_else(PoisonError::into_inner);
        f(&guard)
    }

    fn write<R>(&self, f: impl FnOnce(&mut Shared) -> R) -> R {
        let mut guard = self.shared.write().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }

    pub fn state(&self) -> SurfaceState {
        self.read(|s| s.state)
    }

    /// Restores a previously captured viewport and scroll position.
    pub fn restore(&self, state: SurfaceState) {
        self.write(|s| s.state = state);
    }

    pub fn viewport(&self) -> ClientRect {
        self.read(|s| s.state.viewport)
    }

    pub fn scroll_offset(&self) -> (f64, f64) {
        self.read(|s| (s.state.scroll_x, s.state.scroll_y))
    }

    pub fn scroll_to(&self, x: f64, y: f64) {
        self.write(|s| {
            s.state.scroll_x = x;
            s.state.scroll_y = y;
        });
    }

    pub fn scroll_by(&self, dx: f64, dy: f64) {
        self.write(|s| {
            s.state.scroll_x += dx;
            s.state.scroll_y += dy;
        });
    }

    pub fn resize(&self, width: f64, height: f64) {
        self.write(|s| {
            s.state.viewport.width = width;
            s.state.viewport.height = height;
        });
    }

    /// The element representing the viewport itself (use it as an element container).
    pub fn viewport_element(&self) -> SurfaceElement {
        SurfaceElement {
            id: 0,
            layout: None,
            shared: Arc::clone(&self.shared),
        }
    }

    /// Creates a content element at `layout` (content coordinates).
    pub fn element(&self, layout: ClientRect) -> SurfaceElement {
        let id = self.write(|s| {
            let id = s.next_id;
            s.next_id += 1;
            id
        });
        SurfaceElement {
            id,
            layout: Some(Arc::new(RwLock::new(layout))),
            shared: Arc::clone(&self.shared),
        }
    }
}

impl WindowMetrics for Surface {
    fn inner_size(&self) -> Size {
        let vp = self.viewport();
        Size::new(vp.width, vp.height)
    }

    fn document_client_size(&self) -> Size {
        self.inner_size()
    }
}

/// A handle to an element of a [`Surface`].
///
/// Handles compare equal when they refer to the same element.
#[derive(Clone, Debug)]
pub struct SurfaceElement {
    id: u64,
    /// `None` for the viewport element.
    layout: Option<Arc<RwLock<ClientRect>>>,
    shared: Arc<RwLock<Shared>>,
}

impl SurfaceElement {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn is_viewport(&self) -> bool {
        self.layout.is_none()
    }

    /// The element's rect in content coordinates (the viewport rect for the viewport element).
    pub fn layout(&self) -> ClientRect {
        match &self.layout {
            Some(layout) => *layout.read().unwrap_or_else(PoisonError::into_inner),
            None => {
                self.shared
                    .read()
                    .unwrap_or_else(PoisonError::into_inner)
                    .state
                    .viewport
            }
        }
    }

    /// Moves/resizes a content element, e.g. once its real content has been measured.
    ///
    /// Ignored for the viewport element; use [`Surface::resize`] instead.
    pub fn set_layout(&self, rect: ClientRect) {
        if let Some(layout) = &self.layout {
            *layout.write().unwrap_or_else(PoisonError::into_inner) = rect;
        }
    }
}

impl PartialEq for SurfaceElement {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && Arc::ptr_eq(&self.shared, &other.shared)
    }
}

impl Eq for SurfaceElement {}

impl Element for SurfaceElement {
    fn bounding_client_rect(&self) -> ClientRect {
        let state = self
            .shared
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .state;
        match &self.layout {
            Some(layout) => {
                let layout = *layout.read().unwrap_or_else(PoisonError::into_inner);
                layout.offset(
                    state.viewport.left - state.scroll_x,
                    state.viewport.top - state.scroll_y,
                )
            }
            None => state.viewport,
        }
    }
}
