/// An element rectangle as reported by the host (the `getBoundingClientRect()` shape).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClientRect {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

impl ClientRect {
    pub const fn new(top: f64, left: f64, width: f64, height: f64) -> Self {
        Self {
            top,
            left,
            width,
            height,
        }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    /// Returns `true` when either dimension is zero (e.g. `display: none` or a collapsed
    /// placeholder).
    pub fn is_empty(&self) -> bool {
        self.width == 0.0 || self.height == 0.0
    }

    /// Translates the rect by `(dx, dy)`.
    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self {
            top: self.top + dy,
            left: self.left + dx,
            ..self
        }
    }
}

/// The margin-expanded region a tracker considers visible.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundingBox {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    /// Grows the box by `margin` on every side (shrinks it for a negative margin).
    pub fn expand(self, margin: f64) -> Self {
        Self {
            top: self.top - margin,
            left: self.left - margin,
            width: self.width + margin * 2.0,
            height: self.height + margin * 2.0,
        }
    }
}

impl From<ClientRect> for BoundingBox {
    fn from(r: ClientRect) -> Self {
        Self {
            top: r.top,
            left: r.left,
            width: r.width,
            height: r.height,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Summary of a single refresh pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Refresh {
    /// Views that became visible (one `Load` each).
    pub loaded: usize,
    /// Views that became hidden (one `Unload` each).
    pub unloaded: usize,
}

impl Refresh {
    pub fn is_empty(&self) -> bool {
        self.loaded == 0 && self.unloaded == 0
    }
}
