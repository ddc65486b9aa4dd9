pub mod eraser;
pub mod hand;
pub mod pen;
pub mod select;
pub mod zoom;

pub use eraser::EraserTool;
pub use hand::HandTool;
pub use pen::PenTool;
pub use select::SelectTool;
pub use zoom::ZoomTool;

use super::trait_def::{CursorHint, PointerInput, Tool, ToolContext};

/// Identifier of each available tool, used to drive switching from the
/// toolbar and shortcuts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ToolKind {
    #[default]
    Select,
    Pen,
    Eraser,
    Hand,
    Zoom,
}

/// Tagged-variant dispatch over the tool implementations. Avoids
/// `Box<dyn Tool>` while keeping exactly one active variant's state.
#[derive(Debug, Clone)]
pub enum ToolType {
    Select(SelectTool),
    Pen(PenTool),
    Eraser(EraserTool),
    Hand(HandTool),
    Zoom(ZoomTool),
}

impl ToolType {
    /// Fresh tool instance for `kind`, with default (idle) gesture state.
    pub fn new(kind: ToolKind) -> Self {
        match kind {
            ToolKind::Select => Self::Select(SelectTool::default()),
            ToolKind::Pen => Self::Pen(PenTool::default()),
            ToolKind::Eraser => Self::Eraser(EraserTool::default()),
            ToolKind::Hand => Self::Hand(HandTool::default()),
            ToolKind::Zoom => Self::Zoom(ZoomTool::default()),
        }
    }
}

impl Default for ToolType {
    fn default() -> Self {
        Self::new(ToolKind::default())
    }
}

impl Tool for ToolType {
    fn kind(&self) -> ToolKind {
        match self {
            Self::Select(tool) => tool.kind(),
            Self::Pen(tool) => tool.kind(),
            Self::Eraser(tool) => tool.kind(),
            Self::Hand(tool) => tool.kind(),
            Self::Zoom(tool) => tool.kind(),
        }
    }

    fn cursor(&self) -> CursorHint {
        match self {
            Self::Select(tool) => tool.cursor(),
            Self::Pen(tool) => tool.cursor(),
            Self::Eraser(tool) => tool.cursor(),
            Self::Hand(tool) => tool.cursor(),
            Self::Zoom(tool) => tool.cursor(),
        }
    }

    fn activate(&mut self, ctx: &mut ToolContext<'_>) {
        match self {
            Self::Select(tool) => tool.activate(ctx),
            Self::Pen(tool) => tool.activate(ctx),
            Self::Eraser(tool) => tool.activate(ctx),
            Self::Hand(tool) => tool.activate(ctx),
            Self::Zoom(tool) => tool.activate(ctx),
        }
    }

    fn deactivate(&mut self, ctx: &mut ToolContext<'_>) {
        match self {
            Self::Select(tool) => tool.deactivate(ctx),
            Self::Pen(tool) => tool.deactivate(ctx),
            Self::Eraser(tool) => tool.deactivate(ctx),
            Self::Hand(tool) => tool.deactivate(ctx),
            Self::Zoom(tool) => tool.deactivate(ctx),
        }
    }

    fn on_pointer_down(&mut self, input: &PointerInput, ctx: &mut ToolContext<'_>) {
        match self {
            Self::Select(tool) => tool.on_pointer_down(input, ctx),
            Self::Pen(tool) => tool.on_pointer_down(input, ctx),
            Self::Eraser(tool) => tool.on_pointer_down(input, ctx),
            Self::Hand(tool) => tool.on_pointer_down(input, ctx),
            Self::Zoom(tool) => tool.on_pointer_down(input, ctx),
        }
    }

    fn on_pointer_move(&mut self, input: &PointerInput, ctx: &mut ToolContext<'_>) {
        match self {
            Self::Select(tool) => tool.on_pointer_move(input, ctx),
            Self::Pen(tool) => tool.on_pointer_move(input, ctx),
            Self::Eraser(tool) => tool.on_pointer_move(input, ctx),
            Self::Hand(tool) => tool.on_pointer_move(input, ctx),
            Self::Zoom(tool) => tool.on_pointer_move(input, ctx),
        }
    }

    fn on_pointer_up(&mut self, input: &PointerInput, ctx: &mut ToolContext<'_>) {
        match self {
            Self::Select(tool) => tool.on_pointer_up(input, ctx),
            Self::Pen(tool) => tool.on_pointer_up(input, ctx),
            Self::Eraser(tool) => tool.on_pointer_up(input, ctx),
            Self::Hand(tool) => tool.on_pointer_up(input, ctx),
            Self::Zoom(tool) => tool.on_pointer_up(input, ctx),
        }
    }
}
