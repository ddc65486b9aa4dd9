use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shape::{Shape, ShapeId};

/// A unique identifier for a layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LayerId(Uuid);

impl LayerId {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for LayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An ordered, named group of shapes.
///
/// `shapes` is the z-order within the layer (later = on top); `order` is
/// the layer's z-index among its siblings, kept dense in
/// `[0, layer_count)` by the manager, with 0 the bottommost layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    /// Unique identifier for the layer
    pub id: LayerId,
    /// Display name of the layer
    pub name: String,
    /// Whether the layer is currently visible
    pub visible: bool,
    /// Whether the layer rejects mutations
    pub locked: bool,
    /// Opacity in percent, `0..=100`
    pub opacity: u8,
    pub shapes: Vec<Shape>,
    pub order: usize,
}

impl Layer {
    pub fn new(name: impl Into<String>, order: usize) -> Self {
        Self {
            id: LayerId::new(),
            name: name.into(),
            visible: true,
            locked: false,
            opacity: 100,
            shapes: Vec::new(),
            order,
        }
    }

    pub fn shape(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.iter().find(|s| s.id == id)
    }

    /// Deep copy with fresh ids for the layer and every shape, unlocked,
    /// name suffixed for the layer panel.
    pub fn duplicate(&self, order: usize) -> Layer {
        Layer {
            id: LayerId::new(),
            name: format!("{} copie", self.name),
            visible: self.visible,
            locked: false,
            opacity: self.opacity,
            shapes: self.shapes.iter().map(Shape::duplicate).collect(),
            order,
        }
    }
}
