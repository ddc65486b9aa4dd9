use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config;
use crate::layer::Layer;
use crate::util::time;

/// A unique identifier for a project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(Uuid);

impl ProjectId {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Logical page sizes the canvas can take. Each maps to fixed pixel
/// dimensions except `Custom`, which reads them from the project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum CanvasFormat {
    #[default]
    A4Portrait,
    A4Landscape,
    A3Portrait,
    A3Landscape,
    InstagramSquare,
    InstagramStory,
    Custom,
}

impl CanvasFormat {
    /// Pixel dimensions; `None` for `Custom`.
    pub fn dimensions(self) -> Option<(u32, u32)> {
        match self {
            Self::A4Portrait => Some((2480, 3508)),
            Self::A4Landscape => Some((3508, 2480)),
            Self::A3Portrait => Some((3508, 4961)),
            Self::A3Landscape => Some((4961, 3508)),
            Self::InstagramSquare => Some((1080, 1080)),
            Self::InstagramStory => Some((1080, 1920)),
            Self::Custom => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::A4Portrait => "A4 Portrait (210×297mm)",
            Self::A4Landscape => "A4 Paysage (297×210mm)",
            Self::A3Portrait => "A3 Portrait (297×420mm)",
            Self::A3Landscape => "A3 Paysage (420×297mm)",
            Self::InstagramSquare => "Instagram Carré (1:1)",
            Self::InstagramStory => "Instagram Story (9:16)",
            Self::Custom => "Personnalisé",
        }
    }
}

/// The unit of persistence: all layers plus project metadata. Exactly one
/// project is open at a time, owned by the editor session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: ProjectId,
    pub owner_name: String,
    pub project_name: String,
    pub layers: Vec<Layer>,
    pub canvas_format: CanvasFormat,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_height: Option<u32>,
    /// Milliseconds since the UNIX epoch.
    pub created_at: u64,
    pub last_modified: u64,
}

impl Project {
    pub fn new(
        owner_name: impl Into<String>,
        project_name: impl Into<String>,
        canvas_format: CanvasFormat,
    ) -> Self {
        let now = time::timestamp_millis();
        Self {
            id: ProjectId::new(),
            owner_name: owner_name.into(),
            project_name: project_name.into(),
            layers: Vec::new(),
            canvas_format,
            custom_width: None,
            custom_height: None,
            created_at: now,
            last_modified: now,
        }
    }

    /// Canvas pixel dimensions, falling back to the stock custom size when
    /// the format is `Custom` and no explicit dimensions were set.
    pub fn canvas_size(&self) -> (u32, u32) {
        self.canvas_format.dimensions().unwrap_or((
            self.custom_width.unwrap_or(config::CUSTOM_CANVAS_DEFAULT.0),
            self.custom_height.unwrap_or(config::CUSTOM_CANVAS_DEFAULT.1),
        ))
    }
}
