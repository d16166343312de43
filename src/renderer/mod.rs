//! Canvas 2D rendering module
//!
//! Draws a [`crate::Snapshot`] onto an HTML canvas. Browser only.

pub mod canvas;

pub use canvas::CanvasRenderer;
