use crate::config;
use crate::shape::geometry::create_shape;
use crate::shape::{Fill, PathPoint, ShapeType};

use super::super::trait_def::{CursorHint, PointerInput, Tool, ToolContext};
use super::ToolKind;

/// Freehand drawing tool.
///
/// Collects anchor points while the pointer is down, skipping any move
/// shorter than [`config::PEN_MIN_DISTANCE`] since the last recorded
/// point — which doubles as path simplification. On release the points
/// become a `path` shape on the active layer, unless fewer than two were
/// collected (a stray click draws nothing).
#[derive(Debug, Clone, Default)]
pub struct PenTool {
    drawing: bool,
    points: Vec<PathPoint>,
}

impl PenTool {
    fn last_pos(&self) -> Option<kurbo::Point> {
        self.points.last().map(PathPoint::pos)
    }
}

impl Tool for PenTool {
    fn kind(&self) -> ToolKind {
        ToolKind::Pen
    }

    fn cursor(&self) -> CursorHint {
        CursorHint::Crosshair
    }

    fn deactivate(&mut self, _ctx: &mut ToolContext<'_>) {
        // Abandon any stroke in progress.
        self.drawing = false;
        self.points.clear();
    }

    fn on_pointer_down(&mut self, input: &PointerInput, _ctx: &mut ToolContext<'_>) {
        self.drawing = true;
        self.points = vec![PathPoint::anchor(input.pos.x, input.pos.y)];
    }

    fn on_pointer_move(&mut self, input: &PointerInput, _ctx: &mut ToolContext<'_>) {
        if !self.drawing {
            return;
        }

        let far_enough = self
            .last_pos()
            .is_none_or(|last| last.distance(input.pos) > config::PEN_MIN_DISTANCE);
        if far_enough {
            self.points.push(PathPoint::anchor(input.pos.x, input.pos.y));
        }
    }

    fn on_pointer_up(&mut self, _input: &PointerInput, ctx: &mut ToolContext<'_>) {
        if !self.drawing {
            return;
        }
        self.drawing = false;

        let points = std::mem::take(&mut self.points);
        if points.len() < 2 {
            return;
        }

        let mut shape = create_shape(ShapeType::Path, 0.0, 0.0, config::DEFAULT_SHAPE_SIZE);
        shape.points = points;
        shape.fill = Fill::None;
        shape.stroke = ctx.style.stroke.clone();

        ctx.layers.add_shape(shape, None);
        ctx.snapshot();
    }
}
