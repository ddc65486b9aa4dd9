//! The editing session: one open project, its managers, and the gesture
//! routing between them.
//!
//! This is the explicit session value that replaces ad-hoc global state:
//! it owns the single open [`Project`], the [`LayerManager`] holding the
//! live layer collection, the [`History`] engine and the [`ToolManager`].
//! The host (DOM event wiring, UI widgets) talks to the session; tools and
//! managers never reach back into the host.

use crate::config;
use crate::error::EditorError;
use crate::history::History;
use crate::layer::{Layer, LayerId};
use crate::layer_manager::{LayerManager, ShapePatch};
use crate::project::Project;
use crate::renderer::Renderer;
use crate::shape::geometry::create_shape;
use crate::shape::{Fill, ShapeId, ShapeType, StrokeStyle};
use crate::storage::{ProjectStore, StorageResult};
use crate::tool::{CursorHint, PointerInput, ToolContext, ToolKind, ToolManager};
use crate::util::time;

/// The fill and stroke applied to newly created shapes, as picked in the
/// color/stroke panels.
#[derive(Debug, Clone, Default)]
pub struct DrawingStyle {
    pub fill: Fill,
    pub stroke: StrokeStyle,
}

pub struct Editor {
    project: Project,
    layers: LayerManager,
    history: History,
    tools: ToolManager,
    style: DrawingStyle,
    last_autosave: u64,
}

impl Editor {
    /// Opens `project` as the session's document. The project's layers
    /// become the live collection (a project persisted without layers gets
    /// a fresh default one) and a baseline history snapshot is taken so
    /// the first undo has somewhere to land.
    pub fn new(project: Project) -> Self {
        let mut layers = LayerManager::new();
        if !project.layers.is_empty() {
            layers.load_layers(project.layers.clone());
        }

        let mut history = History::new();
        history.save(&layers);

        Self {
            project,
            layers,
            history,
            tools: ToolManager::new(),
            style: DrawingStyle::default(),
            last_autosave: time::timestamp_millis(),
        }
    }

    /// Replaces the open document (project gallery load). History restarts
    /// from a fresh baseline.
    pub fn load_project(&mut self, project: Project) {
        if project.layers.is_empty() {
            self.layers.reset();
        } else {
            self.layers.load_layers(project.layers.clone());
        }
        self.history.clear();
        self.history.save(&self.layers);
        self.project = project;
    }

    pub fn project(&self) -> &Project {
        &self.project
    }

    pub fn layers(&self) -> &LayerManager {
        &self.layers
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn style(&self) -> &DrawingStyle {
        &self.style
    }

    pub fn set_style(&mut self, style: DrawingStyle) {
        self.style = style;
    }

    // ---- Tool state machine ------------------------------------------------

    pub fn tool_kind(&self) -> ToolKind {
        self.tools.active_kind()
    }

    pub fn cursor(&self) -> CursorHint {
        self.tools.cursor()
    }

    /// Assembles the narrow capability context tools are allowed to see
    /// and runs `f` with it.
    fn with_tool_ctx<R>(
        &mut self,
        renderer: &mut dyn Renderer,
        f: impl FnOnce(&mut ToolManager, &mut ToolContext<'_>) -> R,
    ) -> R {
        let Self {
            tools,
            layers,
            history,
            style,
            ..
        } = self;
        let mut ctx = ToolContext {
            layers,
            history,
            renderer,
            style,
        };
        f(tools, &mut ctx)
    }

    pub fn set_tool(&mut self, kind: ToolKind, renderer: &mut dyn Renderer) {
        self.with_tool_ctx(renderer, |tools, ctx| tools.set_active(kind, ctx));
    }

    pub fn pointer_down(&mut self, input: &PointerInput, renderer: &mut dyn Renderer) {
        self.with_tool_ctx(renderer, |tools, ctx| tools.pointer_down(input, ctx));
    }

    pub fn pointer_move(&mut self, input: &PointerInput, renderer: &mut dyn Renderer) {
        self.with_tool_ctx(renderer, |tools, ctx| tools.pointer_move(input, ctx));
    }

    pub fn pointer_up(&mut self, input: &PointerInput, renderer: &mut dyn Renderer) {
        self.with_tool_ctx(renderer, |tools, ctx| tools.pointer_up(input, ctx));
    }

    /// Pointer left the canvas mid-gesture; handled as a release so every
    /// drag terminates.
    pub fn pointer_leave(&mut self, input: &PointerInput, renderer: &mut dyn Renderer) {
        self.with_tool_ctx(renderer, |tools, ctx| tools.pointer_leave(input, ctx));
    }

    // ---- History ----------------------------------------------------------

    pub fn undo(&mut self) -> bool {
        self.history.undo(&mut self.layers)
    }

    pub fn redo(&mut self) -> bool {
        self.history.redo(&mut self.layers)
    }

    // ---- Document mutations (each takes a history snapshot) ---------------

    pub fn create_layer(&mut self, name: Option<&str>) -> Result<LayerId, EditorError> {
        let id = self.layers.create_layer(name)?.id;
        self.history.save(&self.layers);
        Ok(id)
    }

    pub fn delete_layer(&mut self, id: LayerId) -> bool {
        let deleted = self.layers.delete_layer(id);
        if deleted {
            self.history.save(&self.layers);
        }
        deleted
    }

    pub fn duplicate_layer(&mut self, id: LayerId) -> Result<Option<LayerId>, EditorError> {
        let duplicated = self.layers.duplicate_layer(id)?.map(|l| l.id);
        if duplicated.is_some() {
            self.history.save(&self.layers);
        }
        Ok(duplicated)
    }

    pub fn reorder_layers(&mut self, from: usize, to: usize) {
        self.layers.reorder_layers(from, to);
        self.history.save(&self.layers);
    }

    pub fn merge_layer_down(&mut self, id: LayerId) -> bool {
        let merged = self.layers.merge_layer_down(id);
        if merged {
            self.history.save(&self.layers);
        }
        merged
    }

    pub fn rename_layer(&mut self, id: LayerId, name: &str) {
        self.layers.rename_layer(id, name);
        self.history.save(&self.layers);
    }

    pub fn set_layer_opacity(&mut self, id: LayerId, opacity: i32) {
        self.layers.set_opacity(id, opacity);
        self.history.save(&self.layers);
    }

    pub fn toggle_layer_visibility(&mut self, id: LayerId) -> Option<bool> {
        let visible = self.layers.toggle_visibility(id);
        if visible.is_some() {
            self.history.save(&self.layers);
        }
        visible
    }

    pub fn toggle_layer_lock(&mut self, id: LayerId) -> Option<bool> {
        let locked = self.layers.toggle_lock(id);
        if locked.is_some() {
            self.history.save(&self.layers);
        }
        locked
    }

    pub fn set_active_layer(&mut self, id: LayerId) -> bool {
        self.layers.set_active_layer(id)
    }

    /// Adds a primitive at `(x, y)` with the session's current style to
    /// the active layer. Returns `None` (and adds nothing) when the
    /// active layer is locked, so the host can tell the user instead of
    /// silently losing the shape.
    pub fn add_shape(&mut self, shape_type: ShapeType, x: f64, y: f64, size: f64) -> Option<ShapeId> {
        match self.layers.active_layer() {
            Some(layer) if !layer.locked => {}
            _ => {
                log::debug!("add_shape: active layer locked or missing");
                return None;
            }
        }

        let mut shape = create_shape(shape_type, x, y, size);
        shape.fill = self.style.fill.clone();
        shape.stroke = self.style.stroke.clone();
        let id = shape.id;

        self.layers.add_shape(shape, None);
        self.history.save(&self.layers);
        Some(id)
    }

    pub fn remove_shape(&mut self, id: ShapeId) -> bool {
        let removed = self.layers.remove_shape(id);
        if removed {
            self.history.save(&self.layers);
        }
        removed
    }

    pub fn update_shape(&mut self, id: ShapeId, patch: ShapePatch) -> bool {
        let updated = self.layers.update_shape(id, patch);
        if updated {
            self.history.save(&self.layers);
        }
        updated
    }

    pub fn move_shape_to_layer(&mut self, shape_id: ShapeId, target: LayerId) -> bool {
        let moved = self.layers.move_shape_to_layer(shape_id, target);
        if moved {
            self.history.save(&self.layers);
        }
        moved
    }

    // ---- Rendering & persistence ------------------------------------------

    /// Hands the layer collection to the renderer, bottom layer first.
    pub fn render_to(&self, renderer: &mut dyn Renderer) {
        renderer.render(self.layers.layers());
    }

    /// Writes the open project to the store, refreshing its layer data
    /// and modification time.
    pub fn save_to(&mut self, store: &ProjectStore) -> StorageResult<()> {
        self.project.layers = self.layers.export();
        self.project.last_modified = time::timestamp_millis();
        store.save_project(&self.project)?;
        self.last_autosave = time::timestamp_millis();
        Ok(())
    }

    /// Saves if the autosave interval has elapsed. Driven by the host's
    /// timer; an in-flight gesture is unaffected because uncommitted
    /// stroke points live in tool state, not in the layer collection.
    pub fn maybe_autosave(&mut self, store: &ProjectStore) -> StorageResult<bool> {
        let now = time::timestamp_millis();
        if now.saturating_sub(self.last_autosave) < config::AUTOSAVE_INTERVAL_MS {
            return Ok(false);
        }
        self.save_to(store)?;
        Ok(true)
    }

    /// Layers in display order (topmost first), for layer panel hosts.
    pub fn layers_top_down(&self) -> Vec<&Layer> {
        self.layers.layers_top_down()
    }
}
