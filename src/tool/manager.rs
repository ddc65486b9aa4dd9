//! The tool state machine: one active tool at a time, pointer events
//! delegated to it.

use super::trait_def::{CursorHint, PointerInput, Tool, ToolContext};
use super::types::{ToolKind, ToolType};

pub struct ToolManager {
    active: ToolType,
}

impl Default for ToolManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ToolManager {
    /// Starts on the selection tool.
    pub fn new() -> Self {
        Self {
            active: ToolType::default(),
        }
    }

    pub fn active_kind(&self) -> ToolKind {
        self.active.kind()
    }

    pub fn cursor(&self) -> CursorHint {
        self.active.cursor()
    }

    /// Switches the active tool: the old variant is deactivated (any
    /// gesture in flight is abandoned silently) and a fresh variant of
    /// `kind` takes over.
    pub fn set_active(&mut self, kind: ToolKind, ctx: &mut ToolContext<'_>) {
        self.active.deactivate(ctx);
        self.active = ToolType::new(kind);
        self.active.activate(ctx);
    }

    pub fn pointer_down(&mut self, input: &PointerInput, ctx: &mut ToolContext<'_>) {
        self.active.on_pointer_down(input, ctx);
    }

    pub fn pointer_move(&mut self, input: &PointerInput, ctx: &mut ToolContext<'_>) {
        self.active.on_pointer_move(input, ctx);
    }

    pub fn pointer_up(&mut self, input: &PointerInput, ctx: &mut ToolContext<'_>) {
        self.active.on_pointer_up(input, ctx);
    }

    /// The pointer left the canvas: treated exactly like a release so
    /// every drag terminates.
    pub fn pointer_leave(&mut self, input: &PointerInput, ctx: &mut ToolContext<'_>) {
        self.active.on_pointer_up(input, ctx);
    }
}
