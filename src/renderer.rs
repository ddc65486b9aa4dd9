//! Contract of the external rendering collaborator.
//!
//! The engine never draws: it hands the renderer the layer collection
//! read-only and forwards viewport instructions (pan/zoom) from the hand
//! and zoom tools. Implementations live outside this crate (an SVG DOM
//! renderer in the browser build, plain recorders in tests).

use crate::config::{MAX_ZOOM, MIN_ZOOM, ZOOM_STEP};
use crate::layer::Layer;

pub trait Renderer {
    /// Draws the document. `layers` arrives in storage order: bottom layer
    /// first, so later layers paint over earlier ones.
    fn render(&mut self, layers: &[Layer]);

    /// Serializes the current scene to vector markup (SVG).
    fn export_markup(&self) -> String;

    /// Visible viewport size in canvas units.
    fn viewport_dimensions(&self) -> (f64, f64);

    fn zoom_level(&self) -> f64;

    fn set_zoom_level(&mut self, level: f64);

    /// Moves the viewport by a canvas-space delta.
    fn pan_by(&mut self, dx: f64, dy: f64);

    /// Resets zoom/pan so the whole canvas fits the viewport.
    fn fit_to_viewport(&mut self);

    fn zoom_in(&mut self) {
        self.set_zoom_level((self.zoom_level() + ZOOM_STEP).min(MAX_ZOOM));
    }

    fn zoom_out(&mut self) {
        self.set_zoom_level((self.zoom_level() - ZOOM_STEP).max(MIN_ZOOM));
    }
}
