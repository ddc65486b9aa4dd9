use serde::{Deserialize, Serialize};

use crate::config;

/// How a shape's interior is painted. Colors are CSS color strings so the
/// values flow to the markup renderer and back without conversion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Fill {
    Solid { color: String },
    Gradient { gradient: Gradient },
    None,
}

impl Fill {
    pub fn solid(color: impl Into<String>) -> Self {
        Self::Solid { color: color.into() }
    }
}

impl Default for Fill {
    fn default() -> Self {
        Self::solid(config::DEFAULT_FILL_COLOR)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GradientKind {
    Linear,
    Radial,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    /// Position along the gradient axis, in `[0, 1]`.
    pub offset: f64,
    pub color: String,
}

/// Gradient description. The coordinate fields are interpreted by the
/// renderer (start/end for linear, center/radius point for radial) and are
/// optional: absent values mean "span the shape's bounds".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gradient {
    #[serde(rename = "type")]
    pub kind: GradientKind,
    pub stops: Vec<GradientStop>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x1: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y1: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x2: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y2: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LineCap {
    Butt,
    #[default]
    Round,
    Square,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LineJoin {
    Miter,
    #[default]
    Round,
    Bevel,
}

/// Outline style of a shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrokeStyle {
    pub width: f64,
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dash_array: Option<String>,
    #[serde(default)]
    pub line_cap: LineCap,
    #[serde(default)]
    pub line_join: LineJoin,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            width: config::DEFAULT_STROKE_WIDTH,
            color: config::DEFAULT_STROKE_COLOR.to_string(),
            dash_array: None,
            line_cap: LineCap::default(),
            line_join: LineJoin::default(),
        }
    }
}

/// Drop shadow attached to a shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shadow {
    pub offset_x: f64,
    pub offset_y: f64,
    pub blur: f64,
    pub color: String,
}

/// Transform record layered on top of the baked point coordinates.
///
/// Rotation and scale operations mutate both the point coordinates (for
/// immediate visual effect) and this record (for traceability), so the
/// record is a running log of what was applied, not a pending transform.
/// Invariants: `rotation` stays in `[0, 360)`; `scale_x`/`scale_y` never 0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transform {
    pub x: f64,
    pub y: f64,
    pub rotation: f64,
    pub scale_x: f64,
    pub scale_y: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            rotation: 0.0,
            scale_x: 1.0,
            scale_y: 1.0,
        }
    }
}

impl Transform {
    /// Creates a new identity transform
    pub fn identity() -> Self {
        Self::default()
    }
}
