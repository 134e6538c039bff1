use alloc::sync::Arc;

use crate::{BoundingBox, ClientRect, Size};

/// A host element whose on-screen geometry can be queried.
///
/// Implement this for whatever handle your UI layer uses (a `web_sys::Element`, a widget id plus
/// a layout table, ...). Views are identified by `PartialEq` on the handle, so two handles to the
/// same element must compare equal.
pub trait Element {
    /// The element's current rect in client (viewport) coordinates.
    fn bounding_client_rect(&self) -> ClientRect;
}

impl<T: Element + ?Sized> Element for &T {
    fn bounding_client_rect(&self) -> ClientRect {
        (**self).bounding_client_rect()
    }
}

impl<T: Element + ?Sized> Element for Arc<T> {
    fn bounding_client_rect(&self) -> ClientRect {
        (**self).bounding_client_rect()
    }
}

/// Window-level viewport dimensions.
pub trait WindowMetrics {
    /// `innerWidth`/`innerHeight`. Report `0` for a dimension the host cannot provide.
    fn inner_size(&self) -> Size;

    /// `document.documentElement.clientWidth`/`clientHeight`, used for any dimension
    /// `inner_size` reports as `0`.
    fn document_client_size(&self) -> Size;
}

/// What a tracker watches for scroll/resize and measures views against.
pub enum Container<E> {
    /// A scrollable element; its bounding rect is the visible region.
    Element(E),
    /// The top-level window; the visible region is `(0, 0, inner width, inner height)`.
    Window(Arc<dyn WindowMetrics + Send + Sync>),
}

impl<E> Container<E> {
    pub fn window(metrics: impl WindowMetrics + Send + Sync + 'static) -> Self {
        Self::Window(Arc::new(metrics))
    }

    pub fn is_window(&self) -> bool {
        matches!(self, Self::Window(_))
    }

    pub fn as_element(&self) -> Option<&E> {
        match self {
            Self::Element(el) => Some(el),
            Self::Window(_) => None,
        }
    }
}

impl<E: Element> Container<E> {
    /// The container rect before the margin is applied.
    pub fn rect(&self) -> BoundingBox {
        match self {
            Self::Element(el) => el.bounding_client_rect().into(),
            Self::Window(w) => {
                let inner = w.inner_size();
                let (width, height) = if inner.width == 0.0 || inner.height == 0.0 {
                    let client = w.document_client_size();
                    (
                        if inner.width == 0.0 { client.width } else { inner.width },
                        if inner.height == 0.0 { client.height } else { inner.height },
                    )
                } else {
                    (inner.width, inner.height)
                };
                BoundingBox {
                    top: 0.0,
                    left: 0.0,
                    width,
                    height,
                }
            }
        }
    }
}

impl<E: Clone> Clone for Container<E> {
    fn clone(&self) -> Self {
        match self {
            Self::Element(el) => Self::Element(el.clone()),
            Self::Window(w) => Self::Window(Arc::clone(w)),
        }
    }
}

impl<E: core::fmt::Debug> core::fmt::Debug for Container<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Element(el) => f.debug_tuple("Element").field(el).finish(),
            Self::Window(_) => f.write_str("Window(..)"),
        }
    }
}
