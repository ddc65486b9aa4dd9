use kurbo::Point;

use super::super::trait_def::{CursorHint, PointerInput, Tool, ToolContext};
use super::ToolKind;

/// Viewport pan tool. Forwards drag deltas to the renderer; the document
/// itself is never touched.
#[derive(Debug, Clone, Copy, Default)]
pub struct HandTool {
    dragging: bool,
    last: Point,
}

impl Tool for HandTool {
    fn kind(&self) -> ToolKind {
        ToolKind::Hand
    }

    fn cursor(&self) -> CursorHint {
        if self.dragging {
            CursorHint::Grabbing
        } else {
            CursorHint::Grab
        }
    }

    fn deactivate(&mut self, _ctx: &mut ToolContext<'_>) {
        self.dragging = false;
    }

    fn on_pointer_down(&mut self, input: &PointerInput, _ctx: &mut ToolContext<'_>) {
        self.dragging = true;
        self.last = input.pos;
    }

    fn on_pointer_move(&mut self, input: &PointerInput, ctx: &mut ToolContext<'_>) {
        if !self.dragging {
            return;
        }

        let delta = input.pos - self.last;
        ctx.renderer.pan_by(delta.x, delta.y);
        self.last = input.pos;
    }

    fn on_pointer_up(&mut self, _input: &PointerInput, _ctx: &mut ToolContext<'_>) {
        self.dragging = false;
    }
}
