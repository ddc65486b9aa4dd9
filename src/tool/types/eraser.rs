use super::super::trait_def::{CursorHint, PointerInput, Tool, ToolContext};
use super::ToolKind;

/// Shape eraser.
///
/// Deletes one shape per event while the primary button is held. The
/// victim is the last shape in the active layer's draw order, an explicit
/// stand-in for spatial picking.
// TODO: hit-test the pointer position against shape bounds instead of
// always taking the topmost shape of the active layer.
#[derive(Debug, Clone, Copy, Default)]
pub struct EraserTool;

impl EraserTool {
    fn delete_shape_at(&self, input: &PointerInput, ctx: &mut ToolContext<'_>) {
        log::trace!("eraser at ({:.1}, {:.1})", input.pos.x, input.pos.y);

        let last = ctx
            .layers
            .active_layer()
            .and_then(|layer| layer.shapes.last())
            .map(|shape| shape.id);

        if let Some(shape_id) = last {
            if ctx.layers.remove_shape(shape_id) {
                ctx.snapshot();
            }
        }
    }
}

impl Tool for EraserTool {
    fn kind(&self) -> ToolKind {
        ToolKind::Eraser
    }

    fn cursor(&self) -> CursorHint {
        CursorHint::Eraser
    }

    fn on_pointer_down(&mut self, input: &PointerInput, ctx: &mut ToolContext<'_>) {
        self.delete_shape_at(input, ctx);
    }

    fn on_pointer_move(&mut self, input: &PointerInput, ctx: &mut ToolContext<'_>) {
        // Keep erasing while the button is held.
        if input.primary_down {
            self.delete_shape_at(input, ctx);
        }
    }

    fn on_pointer_up(&mut self, _input: &PointerInput, _ctx: &mut ToolContext<'_>) {}
}
