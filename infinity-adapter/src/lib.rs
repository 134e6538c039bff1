//! Adapter utilities for the `infinity` crate.
//!
//! The `infinity` crate is UI-agnostic: it only needs element geometry and a clock. This crate
//! provides small, framework-neutral helpers for hosts that do not have a real layout engine at
//! hand (tests, simulations, terminal UIs):
//!
//! - [`Surface`]: an in-memory scroll container whose elements implement `infinity::Element`
//! - [`Controller`]: forwards scroll/resize/timer callbacks to a tracker over a surface
#![forbid(unsafe_code)]

#[macro_use]
mod macros;

mod controller;
mod surface;


pub use controller::Controller;
pub use surface::{Surface, SurfaceElement, SurfaceState};
