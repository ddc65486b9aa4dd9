pub mod geometry;
mod style;

pub use style::{
    Fill, Gradient, GradientKind, GradientStop, LineCap, LineJoin, Shadow, StrokeStyle, Transform,
};

use std::fmt;

use kurbo::{Point, Rect, Vec2};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config;

/// A unique identifier for a shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShapeId(Uuid);

impl ShapeId {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The nine drawable primitives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeType {
    Circle,
    Square,
    Rectangle,
    Triangle,
    Star,
    Heart,
    Polygon,
    Line,
    Path,
}

impl ShapeType {
    pub const ALL: [ShapeType; 9] = [
        ShapeType::Circle,
        ShapeType::Square,
        ShapeType::Rectangle,
        ShapeType::Triangle,
        ShapeType::Star,
        ShapeType::Heart,
        ShapeType::Polygon,
        ShapeType::Line,
        ShapeType::Path,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PointKind {
    #[default]
    Anchor,
    Control,
}

/// One point of a shape outline.
///
/// Anchors lie on the visible outline. The optional handles describe cubic
/// Bézier curvature: `control_before` shapes the segment arriving at this
/// anchor, `control_after` the segment leaving it. A segment whose two
/// adjacent anchors carry no handles is a straight line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathPoint {
    pub x: f64,
    pub y: f64,
    #[serde(rename = "type", default)]
    pub kind: PointKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub control_before: Option<Point>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub control_after: Option<Point>,
}

impl PathPoint {
    pub fn anchor(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            kind: PointKind::Anchor,
            control_before: None,
            control_after: None,
        }
    }

    pub fn control(x: f64, y: f64) -> Self {
        Self {
            kind: PointKind::Control,
            ..Self::anchor(x, y)
        }
    }

    pub fn with_handles(
        mut self,
        before: Option<(f64, f64)>,
        after: Option<(f64, f64)>,
    ) -> Self {
        self.control_before = before.map(|(x, y)| Point::new(x, y));
        self.control_after = after.map(|(x, y)| Point::new(x, y));
        self
    }

    pub fn pos(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn is_anchor(&self) -> bool {
        self.kind == PointKind::Anchor
    }
}

/// The atomic drawable unit: geometry + style + transform record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shape {
    pub id: ShapeId,
    #[serde(rename = "type")]
    pub shape_type: ShapeType,
    pub points: Vec<PathPoint>,
    pub fill: Fill,
    pub stroke: StrokeStyle,
    pub transform: Transform,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shadow: Option<Shadow>,
}

impl Shape {
    /// Deep copy with a fresh id, for duplication.
    pub fn duplicate(&self) -> Shape {
        Shape {
            id: ShapeId::new(),
            ..self.clone()
        }
    }

    /// True when this shape uses the two-point circle encoding
    /// (anchor center + radius vector stored in a control point).
    fn is_circle_encoding(&self) -> bool {
        self.shape_type == ShapeType::Circle && self.points.len() == 2
    }

    fn circle_radius(&self) -> f64 {
        Vec2::new(self.points[1].x, self.points[1].y).hypot()
    }

    /// Centroid of the anchor points; `(0, 0)` for an empty outline.
    pub fn center(&self) -> Point {
        let anchors: Vec<Point> = self
            .points
            .iter()
            .filter(|p| p.is_anchor())
            .map(PathPoint::pos)
            .collect();
        if anchors.is_empty() {
            return Point::ZERO;
        }
        let sum = anchors
            .iter()
            .fold(Vec2::ZERO, |acc, p| acc + p.to_vec2());
        (sum / anchors.len() as f64).to_point()
    }

    /// Axis-aligned bounding box, recomputed on demand.
    ///
    /// Circles are bounded as center ± radius, since their outline is not
    /// stored as a perimeter polygon. Everything else is the min/max of the
    /// anchor points (handles overshoot the outline and are ignored).
    pub fn bounds(&self) -> Rect {
        if self.is_circle_encoding() {
            let c = self.points[0].pos();
            let r = self.circle_radius();
            return Rect::new(c.x - r, c.y - r, c.x + r, c.y + r);
        }

        let mut anchors = self.points.iter().filter(|p| p.is_anchor());
        let Some(first) = anchors.next() else {
            return Rect::ZERO;
        };
        let mut rect = Rect::from_points(first.pos(), first.pos());
        for p in anchors {
            rect = rect.union_pt(p.pos());
        }
        rect
    }

    /// Approximate hit test: bounding box inflated by `threshold`.
    /// Deliberately not exact outline picking.
    pub fn contains_point(&self, pos: Point, threshold: f64) -> bool {
        let b = self.bounds().inflate(threshold, threshold);
        pos.x >= b.x0 && pos.x <= b.x1 && pos.y >= b.y0 && pos.y <= b.y1
    }

    /// Applies `map` to every absolute coordinate of the outline: anchor
    /// positions and their Bézier handles move together so curves keep
    /// their silhouette. A circle's radius vector is relative to its
    /// center and is mapped by `map_radius` instead.
    fn map_points(
        &self,
        map: impl Fn(Point) -> Point,
        map_radius: impl Fn(Vec2) -> Vec2,
    ) -> Vec<PathPoint> {
        if self.is_circle_encoding() {
            let center = map(self.points[0].pos());
            let radius = map_radius(Vec2::new(self.points[1].x, self.points[1].y));
            return vec![
                PathPoint::anchor(center.x, center.y),
                PathPoint::control(radius.x, radius.y),
            ];
        }

        self.points
            .iter()
            .map(|p| {
                let moved = map(p.pos());
                PathPoint {
                    x: moved.x,
                    y: moved.y,
                    kind: p.kind,
                    control_before: p.control_before.map(&map),
                    control_after: p.control_after.map(&map),
                }
            })
            .collect()
    }

    /// Returns this shape moved by `(dx, dy)`.
    pub fn translated(&self, dx: f64, dy: f64) -> Shape {
        let delta = Vec2::new(dx, dy);
        let points = self.map_points(|p| p + delta, |r| r);
        Shape {
            points,
            transform: Transform {
                x: self.transform.x + dx,
                y: self.transform.y + dy,
                ..self.transform
            },
            ..self.clone()
        }
    }

    /// Returns this shape rotated by `angle_deg` degrees about its center.
    /// Rotation composes additively and stays normalized to `[0, 360)`.
    pub fn rotated(&self, angle_deg: f64) -> Shape {
        let center = self.center();
        let (sin, cos) = angle_deg.to_radians().sin_cos();
        let rotate_about_center = |p: Point| {
            let d = p - center;
            center + Vec2::new(d.x * cos - d.y * sin, d.x * sin + d.y * cos)
        };
        let rotate_vec = |v: Vec2| Vec2::new(v.x * cos - v.y * sin, v.x * sin + v.y * cos);

        let points = self.map_points(rotate_about_center, rotate_vec);
        Shape {
            points,
            transform: Transform {
                rotation: (self.transform.rotation + angle_deg).rem_euclid(360.0),
                ..self.transform
            },
            ..self.clone()
        }
    }

    /// Returns this shape scaled by `(sx, sy)` about its center. Scale
    /// composes multiplicatively; a zero factor would collapse the shape
    /// irreversibly and is rejected as a no-op.
    pub fn scaled(&self, sx: f64, sy: f64) -> Shape {
        if sx == 0.0 || sy == 0.0 {
            log::warn!("ignoring scale by zero on shape {}", self.id);
            return self.clone();
        }

        let center = self.center();
        let scale_about_center = |p: Point| {
            Point::new(center.x + (p.x - center.x) * sx, center.y + (p.y - center.y) * sy)
        };
        let scale_vec = |v: Vec2| Vec2::new(v.x * sx, v.y * sy);

        let points = self.map_points(scale_about_center, scale_vec);
        Shape {
            points,
            transform: Transform {
                scale_x: self.transform.scale_x * sx,
                scale_y: self.transform.scale_y * sy,
                ..self.transform
            },
            ..self.clone()
        }
    }

    /// Default hit-test threshold variant of [`Shape::contains_point`].
    pub fn hit_test(&self, pos: Point) -> bool {
        self.contains_point(pos, config::HIT_THRESHOLD)
    }
}
