//! Pure point-set generators for the shape primitives.
//!
//! Every generator is deterministic and side-effect free: geometry is baked
//! into absolute coordinates at creation time, and later transforms rewrite
//! the points rather than stacking matrices.

use std::f64::consts::PI;

use super::{Fill, PathPoint, Shape, ShapeId, ShapeType, StrokeStyle, Transform};

/// Ratio of a star's inner radius to its outer radius when unspecified.
const STAR_INNER_RATIO: f64 = 0.4;

/// Generates the outline for `shape_type` centered on `(cx, cy)`.
///
/// `size` is the overall footprint: diameter for the circle, side length
/// for the square/triangle, width for the rectangle and line, outer
/// diameter for the star/polygon. A `path` yields a single placeholder
/// anchor; callers (the pen tool) supply the real sequence.
pub fn generate(shape_type: ShapeType, cx: f64, cy: f64, size: f64) -> Vec<PathPoint> {
    match shape_type {
        ShapeType::Circle => circle_points(cx, cy, size / 2.0),
        ShapeType::Square => square_points(cx - size / 2.0, cy - size / 2.0, size),
        ShapeType::Rectangle => {
            rectangle_points(cx - size / 2.0, cy - size / 4.0, size, size / 2.0)
        }
        ShapeType::Triangle => triangle_points(cx - size / 2.0, cy - size / 2.0, size),
        ShapeType::Star => star_points(cx, cy, size / 2.0, None),
        ShapeType::Heart => heart_points(cx, cy, size),
        ShapeType::Polygon => polygon_points(cx, cy, size / 2.0, 6),
        ShapeType::Line => line_points(cx - size / 2.0, cy, cx + size / 2.0, cy),
        ShapeType::Path => vec![PathPoint::anchor(cx, cy)],
    }
}

/// A circle is not a perimeter polygon: it is an anchor at the center plus
/// a control point holding the radius *vector* relative to that center.
pub fn circle_points(cx: f64, cy: f64, radius: f64) -> Vec<PathPoint> {
    vec![PathPoint::anchor(cx, cy), PathPoint::control(radius, 0.0)]
}

/// Square corners, clockwise from the top-left, `(x, y)` being that corner.
pub fn square_points(x: f64, y: f64, size: f64) -> Vec<PathPoint> {
    rectangle_points(x, y, size, size)
}

pub fn rectangle_points(x: f64, y: f64, width: f64, height: f64) -> Vec<PathPoint> {
    vec![
        PathPoint::anchor(x, y),
        PathPoint::anchor(x + width, y),
        PathPoint::anchor(x + width, y + height),
        PathPoint::anchor(x, y + height),
    ]
}

/// Equilateral triangle with side `size`, apex up, `(x, y)` the top-left of
/// its footprint.
pub fn triangle_points(x: f64, y: f64, size: f64) -> Vec<PathPoint> {
    let height = (3.0_f64.sqrt() / 2.0) * size;
    vec![
        PathPoint::anchor(x + size / 2.0, y),
        PathPoint::anchor(x + size, y + height),
        PathPoint::anchor(x, y + height),
    ]
}

/// Five-branch star: 10 anchors alternating outer/inner radius at angles
/// `i·π/5 − π/2`, so the first branch points straight up.
pub fn star_points(cx: f64, cy: f64, outer_radius: f64, inner_radius: Option<f64>) -> Vec<PathPoint> {
    let inner = inner_radius.unwrap_or(outer_radius * STAR_INNER_RATIO);

    (0..10)
        .map(|i| {
            let angle = (i as f64 * PI) / 5.0 - PI / 2.0;
            let radius = if i % 2 == 0 { outer_radius } else { inner };
            PathPoint::anchor(cx + radius * angle.cos(), cy + radius * angle.sin())
        })
        .collect()
}

/// Closed Bézier heart parametrized by `size / 100`.
///
/// Five anchors, the last revisiting the first; every segment carries both
/// cubic handles so the closing curve mirrors the opening one.
pub fn heart_points(cx: f64, cy: f64, size: f64) -> Vec<PathPoint> {
    let s = size / 100.0;

    vec![
        PathPoint::anchor(cx, cy + 30.0 * s)
            .with_handles(None, Some((cx - 20.0 * s, cy - 40.0 * s))),
        PathPoint::anchor(cx - 50.0 * s, cy - 20.0 * s).with_handles(
            Some((cx - 50.0 * s, cy - 40.0 * s)),
            Some((cx - 50.0 * s, cy - 50.0 * s)),
        ),
        PathPoint::anchor(cx, cy - 50.0 * s).with_handles(
            Some((cx, cy - 50.0 * s)),
            Some((cx + 50.0 * s, cy - 50.0 * s)),
        ),
        PathPoint::anchor(cx + 50.0 * s, cy - 20.0 * s).with_handles(
            Some((cx + 50.0 * s, cy - 40.0 * s)),
            Some((cx + 50.0 * s, cy - 40.0 * s)),
        ),
        PathPoint::anchor(cx, cy + 30.0 * s)
            .with_handles(Some((cx + 20.0 * s, cy - 40.0 * s)), None),
    ]
}

/// Regular polygon inscribed in `radius`, first vertex at the top.
pub fn polygon_points(cx: f64, cy: f64, radius: f64, sides: usize) -> Vec<PathPoint> {
    (0..sides)
        .map(|i| {
            let angle = (i as f64 * 2.0 * PI) / sides as f64 - PI / 2.0;
            PathPoint::anchor(cx + radius * angle.cos(), cy + radius * angle.sin())
        })
        .collect()
}

pub fn line_points(x1: f64, y1: f64, x2: f64, y2: f64) -> Vec<PathPoint> {
    vec![PathPoint::anchor(x1, y1), PathPoint::anchor(x2, y2)]
}

/// Shape factory: generated outline plus default style and an identity
/// transform record.
pub fn create_shape(shape_type: ShapeType, x: f64, y: f64, size: f64) -> Shape {
    Shape {
        id: ShapeId::new(),
        shape_type,
        points: generate(shape_type, x, y, size),
        fill: Fill::default(),
        stroke: StrokeStyle::default(),
        transform: Transform::default(),
        shadow: None,
    }
}
