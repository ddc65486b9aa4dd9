//! The single owner of the live layer collection.
//!
//! Every mutation of layers and shapes goes through this manager so the
//! structural invariants hold at all times: at least one layer exists,
//! `order` values stay dense in `[0, layer_count)`, and the layer count
//! never exceeds [`config::MAX_LAYERS`].

use crate::config;
use crate::error::EditorError;
use crate::layer::{Layer, LayerId};
use crate::shape::{Fill, PathPoint, Shadow, Shape, ShapeId, StrokeStyle, Transform};

/// Partial shape update merged by [`LayerManager::update_shape`]. Absent
/// fields leave the shape untouched.
#[derive(Debug, Clone, Default)]
pub struct ShapePatch {
    pub points: Option<Vec<PathPoint>>,
    pub fill: Option<Fill>,
    pub stroke: Option<StrokeStyle>,
    pub transform: Option<Transform>,
    pub shadow: Option<Option<Shadow>>,
}

pub struct LayerManager {
    layers: Vec<Layer>,
    active_layer_id: Option<LayerId>,
    /// Counter feeding "Calque N" auto-names; only advances for
    /// auto-named layers.
    layer_counter: u32,
}

impl Default for LayerManager {
    fn default() -> Self {
        Self::new()
    }
}

impl LayerManager {
    /// Starts with one default layer so the ≥1-layer invariant holds from
    /// the first render on.
    pub fn new() -> Self {
        let layer = Layer::new(format!("{} 1", config::DEFAULT_LAYER_NAME), 0);
        Self {
            active_layer_id: Some(layer.id),
            layers: vec![layer],
            layer_counter: 2,
        }
    }

    /// Creates a layer on top of the stack and makes it active.
    /// Auto-names it "Calque N" when `name` is `None`.
    pub fn create_layer(&mut self, name: Option<&str>) -> Result<&Layer, EditorError> {
        if self.layers.len() >= config::MAX_LAYERS {
            return Err(EditorError::layer_capacity());
        }

        let name = match name {
            Some(name) => name.to_string(),
            None => {
                let name = format!("{} {}", config::DEFAULT_LAYER_NAME, self.layer_counter);
                self.layer_counter += 1;
                name
            }
        };

        let index = self.layers.len();
        let layer = Layer::new(name, index);
        self.active_layer_id = Some(layer.id);
        self.layers.push(layer);

        Ok(&self.layers[index])
    }

    /// Deletes a layer. Refuses to delete the sole remaining layer; when
    /// the active layer goes away, activity falls to the layer that was
    /// immediately before it.
    pub fn delete_layer(&mut self, id: LayerId) -> bool {
        let Some(index) = self.index_of(id) else {
            return false;
        };
        if self.layers.len() == 1 {
            return false;
        }

        self.layers.remove(index);
        self.normalize_order();

        if self.active_layer_id == Some(id) {
            let fallback = index.saturating_sub(1);
            self.active_layer_id = self.layers.get(fallback).map(|l| l.id);
        }

        true
    }

    /// Deep-copies a layer (fresh shape ids) onto the top of the stack and
    /// makes the copy active. Unknown ids are a silent no-op.
    pub fn duplicate_layer(&mut self, id: LayerId) -> Result<Option<&Layer>, EditorError> {
        if self.layers.len() >= config::MAX_LAYERS {
            return Err(EditorError::layer_capacity());
        }
        let Some(layer) = self.layer(id) else {
            return Ok(None);
        };

        let index = self.layers.len();
        let duplicated = layer.duplicate(index);
        self.active_layer_id = Some(duplicated.id);
        self.layers.push(duplicated);

        Ok(Some(&self.layers[index]))
    }

    /// Moves the layer at `from` to position `to` and re-normalizes the
    /// dense order values. Out-of-range indices are a no-op.
    pub fn reorder_layers(&mut self, from: usize, to: usize) {
        if from >= self.layers.len() || to >= self.layers.len() {
            return;
        }

        let moved = self.layers.remove(from);
        self.layers.insert(to, moved);
        self.normalize_order();
    }

    /// Returns the new visibility, or `None` for an unknown id.
    pub fn toggle_visibility(&mut self, id: LayerId) -> Option<bool> {
        let layer = self.layer_mut(id)?;
        layer.visible = !layer.visible;
        Some(layer.visible)
    }

    /// Returns the new locked state, or `None` for an unknown id.
    pub fn toggle_lock(&mut self, id: LayerId) -> Option<bool> {
        let layer = self.layer_mut(id)?;
        layer.locked = !layer.locked;
        Some(layer.locked)
    }

    /// Sets a layer's opacity, clamped into `0..=100`.
    pub fn set_opacity(&mut self, id: LayerId, opacity: i32) {
        if let Some(layer) = self.layer_mut(id) {
            layer.opacity = opacity.clamp(0, 100) as u8;
        }
    }

    /// Renames a layer; a blank name falls back to the default stem.
    pub fn rename_layer(&mut self, id: LayerId, name: &str) {
        if let Some(layer) = self.layer_mut(id) {
            let trimmed = name.trim();
            layer.name = if trimmed.is_empty() {
                config::DEFAULT_LAYER_NAME.to_string()
            } else {
                trimmed.to_string()
            };
        }
    }

    /// Adds a shape to `layer_id` (the active layer when `None`). Locked
    /// or missing targets silently drop the shape; callers wanting user
    /// feedback must check the target first.
    pub fn add_shape(&mut self, shape: Shape, layer_id: Option<LayerId>) {
        let target = layer_id
            .or(self.active_layer_id)
            .and_then(|id| self.index_of(id));

        match target {
            Some(index) if !self.layers[index].locked => self.layers[index].shapes.push(shape),
            Some(_) => log::debug!("add_shape: target layer is locked, shape dropped"),
            None => log::debug!("add_shape: no target layer, shape dropped"),
        }
    }

    /// Removes the first shape matching `shape_id` across all layers.
    pub fn remove_shape(&mut self, shape_id: ShapeId) -> bool {
        for layer in &mut self.layers {
            if let Some(index) = layer.shapes.iter().position(|s| s.id == shape_id) {
                layer.shapes.remove(index);
                return true;
            }
        }
        false
    }

    pub fn shape(&self, shape_id: ShapeId) -> Option<&Shape> {
        self.layers.iter().find_map(|l| l.shape(shape_id))
    }

    /// Merges `patch` into the matching shape, unless its owning layer is
    /// locked. Returns whether a shape was updated.
    pub fn update_shape(&mut self, shape_id: ShapeId, patch: ShapePatch) -> bool {
        for layer in &mut self.layers {
            if layer.locked {
                continue;
            }
            if let Some(shape) = layer.shapes.iter_mut().find(|s| s.id == shape_id) {
                if let Some(points) = patch.points {
                    shape.points = points;
                }
                if let Some(fill) = patch.fill {
                    shape.fill = fill;
                }
                if let Some(stroke) = patch.stroke {
                    shape.stroke = stroke;
                }
                if let Some(transform) = patch.transform {
                    shape.transform = transform;
                }
                if let Some(shadow) = patch.shadow {
                    shape.shadow = shadow;
                }
                return true;
            }
        }
        false
    }

    /// Moves a shape to another layer (appended on top). Fails silently if
    /// the target is locked or missing.
    pub fn move_shape_to_layer(&mut self, shape_id: ShapeId, target_layer_id: LayerId) -> bool {
        let target = match self.index_of(target_layer_id) {
            Some(index) if !self.layers[index].locked => index,
            _ => {
                log::debug!("move_shape_to_layer: target locked or missing");
                return false;
            }
        };

        let mut moved = None;
        for layer in &mut self.layers {
            if let Some(index) = layer.shapes.iter().position(|s| s.id == shape_id) {
                moved = Some(layer.shapes.remove(index));
                break;
            }
        }

        match moved {
            Some(shape) => {
                self.layers[target].shapes.push(shape);
                true
            }
            None => false,
        }
    }

    /// Appends a layer's shapes onto the layer visually below it, deletes
    /// the merged layer and makes the receiver active. Rejected for the
    /// bottom layer and for locked receivers.
    pub fn merge_layer_down(&mut self, id: LayerId) -> bool {
        let Some(index) = self.index_of(id) else {
            return false;
        };
        if index == 0 {
            return false;
        }
        if self.layers[index - 1].locked {
            return false;
        }

        let shapes = std::mem::take(&mut self.layers[index].shapes);
        self.layers[index - 1].shapes.extend(shapes);
        let receiver = self.layers[index - 1].id;

        self.delete_layer(id);
        self.active_layer_id = Some(receiver);

        true
    }

    /// Moves the active layer one step toward the top of the stack.
    pub fn move_active_layer_up(&mut self) -> bool {
        let Some(index) = self.active_layer_id.and_then(|id| self.index_of(id)) else {
            return false;
        };
        if index + 1 < self.layers.len() {
            self.reorder_layers(index, index + 1);
            return true;
        }
        false
    }

    /// Moves the active layer one step toward the bottom of the stack.
    pub fn move_active_layer_down(&mut self) -> bool {
        let Some(index) = self.active_layer_id.and_then(|id| self.index_of(id)) else {
            return false;
        };
        if index > 0 {
            self.reorder_layers(index, index - 1);
            return true;
        }
        false
    }

    pub fn active_layer(&self) -> Option<&Layer> {
        self.active_layer_id.and_then(|id| self.layer(id))
    }

    pub fn set_active_layer(&mut self, id: LayerId) -> bool {
        if self.layer(id).is_some() {
            self.active_layer_id = Some(id);
            return true;
        }
        false
    }

    pub fn layer(&self, id: LayerId) -> Option<&Layer> {
        self.layers.iter().find(|l| l.id == id)
    }

    fn layer_mut(&mut self, id: LayerId) -> Option<&mut Layer> {
        self.layers.iter_mut().find(|l| l.id == id)
    }

    fn index_of(&self, id: LayerId) -> Option<usize> {
        self.layers.iter().position(|l| l.id == id)
    }

    /// Storage order: bottom layer first. This is the draw order the
    /// renderer consumes.
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Display projection: topmost layer first, the order a layer panel
    /// lists them in.
    pub fn layers_top_down(&self) -> Vec<&Layer> {
        let mut layers: Vec<&Layer> = self.layers.iter().collect();
        layers.sort_by(|a, b| b.order.cmp(&a.order));
        layers
    }

    /// All shapes on visible layers, bottom-first.
    pub fn visible_shapes(&self) -> Vec<&Shape> {
        self.layers
            .iter()
            .filter(|l| l.visible)
            .flat_map(|l| l.shapes.iter())
            .collect()
    }

    /// Replaces the whole collection (history restore, project load). The
    /// first layer becomes active and the auto-name counter resumes past
    /// the highest "Calque N" present. Empty input falls back to a fresh
    /// default layer so the ≥1-layer invariant survives bad data.
    pub fn load_layers(&mut self, layers: Vec<Layer>) {
        if layers.is_empty() {
            log::warn!("load_layers: empty layer list, resetting to a fresh layer");
            self.reset();
            return;
        }

        self.active_layer_id = layers.first().map(|l| l.id);
        let prefix = format!("{} ", config::DEFAULT_LAYER_NAME);
        self.layer_counter = layers
            .iter()
            .filter_map(|l| l.name.strip_prefix(&prefix))
            .filter_map(|n| n.parse::<u32>().ok())
            .max()
            .unwrap_or(0)
            + 1;
        self.layers = layers;
    }

    /// Deep copy of the collection, for persistence and history snapshots.
    pub fn export(&self) -> Vec<Layer> {
        self.layers.clone()
    }

    /// Back to a single fresh default layer.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    fn normalize_order(&mut self) {
        for (index, layer) in self.layers.iter_mut().enumerate() {
            layer.order = index;
        }
    }
}
