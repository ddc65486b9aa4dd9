use kurbo::Point;

use crate::shape::ShapeId;

use super::super::trait_def::{CursorHint, PointerInput, Tool, ToolContext};
use super::ToolKind;

/// Selection tool.
///
/// Records the drag anchor and delta of a selection gesture. Hit-testing
/// and applying the move to the selected shape are extension points that
/// are not yet specified; until they are, the gesture only logs what it
/// would do. Multi-selection, grouping, handle-based rotate/scale and
/// clipboard operations belong to future tool variants built on the same
/// capability set.
// TODO: hit-test shapes under the pointer on press and apply the drag
// delta to the selected shape on move.
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectTool {
    dragging: bool,
    start: Point,
    selected_shape: Option<ShapeId>,
}

impl SelectTool {
    pub fn selected_shape(&self) -> Option<ShapeId> {
        self.selected_shape
    }
}

impl Tool for SelectTool {
    fn kind(&self) -> ToolKind {
        ToolKind::Select
    }

    fn cursor(&self) -> CursorHint {
        CursorHint::Default
    }

    fn deactivate(&mut self, _ctx: &mut ToolContext<'_>) {
        self.dragging = false;
    }

    fn on_pointer_down(&mut self, input: &PointerInput, _ctx: &mut ToolContext<'_>) {
        self.dragging = true;
        self.start = input.pos;
        log::debug!(
            "select: pointer down at ({:.1}, {:.1}); hit-testing not yet specified",
            input.pos.x,
            input.pos.y
        );
    }

    fn on_pointer_move(&mut self, input: &PointerInput, _ctx: &mut ToolContext<'_>) {
        if !self.dragging {
            return;
        }

        let delta = input.pos - self.start;
        if let Some(shape_id) = self.selected_shape {
            log::debug!(
                "select: would move shape {} by ({:.1}, {:.1}); move-apply not yet specified",
                shape_id,
                delta.x,
                delta.y
            );
        }
    }

    fn on_pointer_up(&mut self, _input: &PointerInput, _ctx: &mut ToolContext<'_>) {
        self.dragging = false;
    }
}
