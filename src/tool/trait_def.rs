use kurbo::Point;

use crate::editor::DrawingStyle;
use crate::history::History;
use crate::layer_manager::LayerManager;
use crate::renderer::Renderer;

use super::types::ToolKind;

/// Modifier keys held during a pointer event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

/// One pointer event in canvas-space coordinates.
#[derive(Debug, Clone, Copy)]
pub struct PointerInput {
    pub pos: Point,
    /// Whether the primary button is held at the time of the event.
    pub primary_down: bool,
    pub modifiers: Modifiers,
}

impl PointerInput {
    pub fn at(x: f64, y: f64) -> Self {
        Self {
            pos: Point::new(x, y),
            primary_down: false,
            modifiers: Modifiers::default(),
        }
    }

    pub fn with_primary(mut self) -> Self {
        self.primary_down = true;
        self
    }

    pub fn with_shift(mut self) -> Self {
        self.modifiers.shift = true;
        self
    }
}

/// Cursor the host should display for the active tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorHint {
    #[default]
    Default,
    Crosshair,
    Eraser,
    Grab,
    Grabbing,
    ZoomIn,
    ZoomOut,
}

/// The capability surface a tool sees during a gesture: the document
/// mutators and the viewport, nothing else. Tools never hold a reference
/// to the session; they are handed this narrow context per event.
pub struct ToolContext<'a> {
    pub layers: &'a mut LayerManager,
    pub history: &'a mut History,
    pub renderer: &'a mut dyn Renderer,
    pub style: &'a DrawingStyle,
}

impl ToolContext<'_> {
    /// Takes a history snapshot of the current layer collection.
    pub fn snapshot(&mut self) {
        self.history.save(self.layers);
    }
}

/// A drawing tool interprets the pointer-gesture stream (down/move/up)
/// into document mutations. Exactly one tool is active at a time.
pub trait Tool {
    fn kind(&self) -> ToolKind;

    /// Cursor to display while this tool is active; may change with the
    /// tool's internal drag state.
    fn cursor(&self) -> CursorHint;

    /// Called when the tool becomes active.
    fn activate(&mut self, _ctx: &mut ToolContext<'_>) {}

    /// Called when the tool is switched away. Any in-flight gesture is
    /// abandoned silently, never committed.
    fn deactivate(&mut self, _ctx: &mut ToolContext<'_>) {}

    fn on_pointer_down(&mut self, input: &PointerInput, ctx: &mut ToolContext<'_>);

    fn on_pointer_move(&mut self, input: &PointerInput, ctx: &mut ToolContext<'_>);

    fn on_pointer_up(&mut self, input: &PointerInput, ctx: &mut ToolContext<'_>);
}
