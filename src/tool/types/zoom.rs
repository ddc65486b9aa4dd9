use super::super::trait_def::{CursorHint, PointerInput, Tool, ToolContext};
use super::ToolKind;

/// Click-to-zoom tool: zooms the viewport in, or out while Shift is held.
/// Pointer moves only refresh the cursor hint so the user can see which
/// direction a click would take.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZoomTool {
    zoom_out: bool,
}

impl Tool for ZoomTool {
    fn kind(&self) -> ToolKind {
        ToolKind::Zoom
    }

    fn cursor(&self) -> CursorHint {
        if self.zoom_out {
            CursorHint::ZoomOut
        } else {
            CursorHint::ZoomIn
        }
    }

    fn on_pointer_down(&mut self, input: &PointerInput, ctx: &mut ToolContext<'_>) {
        self.zoom_out = input.modifiers.shift;
        if self.zoom_out {
            ctx.renderer.zoom_out();
        } else {
            ctx.renderer.zoom_in();
        }
    }

    fn on_pointer_move(&mut self, input: &PointerInput, _ctx: &mut ToolContext<'_>) {
        self.zoom_out = input.modifiers.shift;
    }

    fn on_pointer_up(&mut self, _input: &PointerInput, _ctx: &mut ToolContext<'_>) {}
}
