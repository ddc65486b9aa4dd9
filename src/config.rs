//! Product constants shared across the document model, tools and storage.

/// Maximum number of layers a document may hold.
pub const MAX_LAYERS: usize = 20;

/// Maximum number of history snapshots kept before the window slides.
pub const MAX_HISTORY: usize = 50;

/// Maximum number of projects kept in the local store.
pub const MAX_PROJECTS: usize = 100;

/// Default (French) layer name stem; auto-named layers become "Calque N".
pub const DEFAULT_LAYER_NAME: &str = "Calque";

/// Interval between autosaves, in milliseconds.
pub const AUTOSAVE_INTERVAL_MS: u64 = 15_000;

pub const MIN_ZOOM: f64 = 0.1;
pub const MAX_ZOOM: f64 = 10.0;
pub const ZOOM_STEP: f64 = 0.1;

/// Minimum pointer travel before the pen records a new anchor point.
/// Doubles as path simplification: sub-threshold jitter is dropped.
pub const PEN_MIN_DISTANCE: f64 = 5.0;

/// Slack around a shape's bounding box for the approximate hit test.
pub const HIT_THRESHOLD: f64 = 5.0;

/// Default size handed to the shape factory when the caller has no opinion.
pub const DEFAULT_SHAPE_SIZE: f64 = 100.0;

pub const DEFAULT_FILL_COLOR: &str = "#FF6B6B";
pub const DEFAULT_STROKE_COLOR: &str = "#000000";
pub const DEFAULT_STROKE_WIDTH: f64 = 2.0;

/// Fallback pixel dimensions for the `custom` canvas format.
pub const CUSTOM_CANVAS_DEFAULT: (u32, u32) = (800, 600);
