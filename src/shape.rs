//! The `shape` module provides the closed set of shape variants a skin canvas can
//! contain: rectangles (optionally rounded), ellipses, and paths built from control
//! points with optional Bezier handles.
//!
//! Every shape carries exactly one [`Paint`] and a pair of relative paint anchor points
//! used to position gradients inside the shape's bounds.
//!
//! # Examples
//!
//! ```
//! use pictor::{Color, Matte, Paint, PaintAnchors, PathPoint, PathShape, RectShape, Shape};
//!
//! // A plain rectangle with a solid fill
//! let rect = Shape::Rect(RectShape::new(
//!     (2.0, 2.0),
//!     (28.0, 28.0),
//!     Paint::Matte(Matte::absolute(Color::rgb(214, 217, 223))),
//!     PaintAnchors::default(),
//! ));
//!
//! // A triangle path with sharp corners
//! let path = Shape::Path(PathShape::new(
//!     vec![
//!         PathPoint::sharp(0.0, 0.0),
//!         PathPoint::sharp(30.0, 10.0),
//!         PathPoint::sharp(15.0, 30.0),
//!     ],
//!     Paint::Matte(Matte::absolute(Color::BLACK)),
//!     PaintAnchors::default(),
//! ));
//! ```

use crate::paint::Paint;

/// A graphical shape on a skin canvas.
///
/// # Variants
///
/// - `Rect(RectShape)`: a rectangle, optionally with rounded corners.
/// - `Ellipse(EllipseShape)`: an ellipse defined by its frame.
/// - `Path(PathShape)`: a closed path of control points with optional Bezier handles.
#[derive(Debug, Clone)]
pub enum Shape {
    /// A rectangle, optionally with rounded corners.
    Rect(RectShape),
    /// An ellipse defined by its bounding frame.
    Ellipse(EllipseShape),
    /// A closed path of control points with optional Bezier handles.
    Path(PathShape),
}

impl Shape {
    /// The paint filling this shape.
    pub fn paint(&self) -> &Paint {
        match self {
            Shape::Rect(r) => &r.paint,
            Shape::Ellipse(e) => &e.paint,
            Shape::Path(p) => &p.paint,
        }
    }

    /// The relative anchor points gradients are positioned against.
    pub fn anchors(&self) -> &PaintAnchors {
        match self {
            Shape::Rect(r) => &r.anchors,
            Shape::Ellipse(e) => &e.anchors,
            Shape::Path(p) => &p.anchors,
        }
    }
}

impl From<RectShape> for Shape {
    fn from(value: RectShape) -> Self {
        Shape::Rect(value)
    }
}

impl From<EllipseShape> for Shape {
    fn from(value: EllipseShape) -> Self {
        Shape::Ellipse(value)
    }
}

impl From<PathShape> for Shape {
    fn from(value: PathShape) -> Self {
        Shape::Path(value)
    }
}

/// Gradient anchor points, expressed as fractions of the shape's bounds.
///
/// `(0.0, 0.0)` is the top-left corner of the bounds and `(1.0, 1.0)` the bottom-right.
/// A linear gradient runs from the first anchor to the second; a radial gradient is
/// centered on the first anchor with a radius equal to the distance between the two.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaintAnchors {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

impl PaintAnchors {
    pub fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }
}

impl Default for PaintAnchors {
    /// A top-to-bottom run through the center of the bounds.
    fn default() -> Self {
        Self::new(0.5, 0.0, 0.5, 1.0)
    }
}

/// A rectangle between two corner points, with an optional corner rounding radius.
#[derive(Debug, Clone)]
pub struct RectShape {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
    /// Corner rounding radius; zero means square corners.
    pub rounding: f32,
    pub paint: Paint,
    pub anchors: PaintAnchors,
}

impl RectShape {
    pub fn new(top_left: (f32, f32), bottom_right: (f32, f32), paint: Paint, anchors: PaintAnchors) -> Self {
        Self {
            x1: top_left.0,
            y1: top_left.1,
            x2: bottom_right.0,
            y2: bottom_right.1,
            rounding: 0.0,
            paint,
            anchors,
        }
    }

    /// Sets the corner rounding radius.
    pub fn rounded(mut self, rounding: f32) -> Self {
        self.rounding = rounding;
        self
    }

    pub fn is_rounded(&self) -> bool {
        self.rounding > 0.0
    }
}

/// An ellipse inscribed in the frame between two corner points.
#[derive(Debug, Clone)]
pub struct EllipseShape {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
    pub paint: Paint,
    pub anchors: PaintAnchors,
}

impl EllipseShape {
    pub fn new(top_left: (f32, f32), bottom_right: (f32, f32), paint: Paint, anchors: PaintAnchors) -> Self {
        Self {
            x1: top_left.0,
            y1: top_left.1,
            x2: bottom_right.0,
            y2: bottom_right.1,
            paint,
            anchors,
        }
    }
}

/// A closed path of ordered [`PathPoint`]s.
///
/// The path is implicitly closed: one final segment runs from the last point back to the
/// first, then the path closes.
#[derive(Debug, Clone)]
pub struct PathShape {
    pub points: Vec<PathPoint>,
    pub paint: Paint,
    pub anchors: PaintAnchors,
}

impl PathShape {
    pub fn new(points: Vec<PathPoint>, paint: Paint, anchors: PaintAnchors) -> Self {
        Self { points, paint, anchors }
    }
}

/// One path control point: an anchor plus a leading handle (`cp1`, toward the previous
/// point) and a trailing handle (`cp2`, toward the next point).
///
/// A handle that coincides exactly with its anchor is "sharp"; a segment between two
/// points is a straight line only when the surrounding handles on both sides are sharp.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathPoint {
    pub x: f32,
    pub y: f32,
    pub cp1x: f32,
    pub cp1y: f32,
    pub cp2x: f32,
    pub cp2y: f32,
}

impl PathPoint {
    /// A corner point: both handles collapsed onto the anchor.
    pub fn sharp(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            cp1x: x,
            cp1y: y,
            cp2x: x,
            cp2y: y,
        }
    }

    /// A point with explicit leading and trailing Bezier handles.
    pub fn with_handles(x: f32, y: f32, cp1: (f32, f32), cp2: (f32, f32)) -> Self {
        Self {
            x,
            y,
            cp1x: cp1.0,
            cp1y: cp1.1,
            cp2x: cp2.0,
            cp2y: cp2.1,
        }
    }

    /// True when the leading handle coincides exactly with the anchor.
    pub fn is_p1_sharp(&self) -> bool {
        self.cp1x == self.x && self.cp1y == self.y
    }

    /// True when the trailing handle coincides exactly with the anchor.
    pub fn is_p2_sharp(&self) -> bool {
        self.cp2x == self.x && self.cp2y == self.y
    }
}
