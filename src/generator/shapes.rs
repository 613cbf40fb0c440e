//! Shape body emission: turns a shape's control geometry into the statement sequence a
//! factory method replays, with every coordinate deferred to a runtime decode call.
//!
//! Widths and heights are always emitted as a difference of two decode calls so the
//! nine-patch scaling applies to both edges independently.

use crate::canvas::Canvas;
use crate::encode::{encode_x, encode_y};
use crate::generator::context::{GenContext, ShapeKind};
use crate::generator::paints::paint_expr;
use crate::shape::{EllipseShape, PathPoint, PathShape, RectShape, Shape};
use crate::util::float_literal;

fn decode_x(canvas: &Canvas, x: f32) -> String {
    format!("decodeX({})", float_literal(encode_x(canvas, x)))
}

fn decode_y(canvas: &Canvas, y: f32) -> String {
    format!("decodeY({})", float_literal(encode_y(canvas, y)))
}

/// A Bezier handle: the encoded anchor plus the raw pixel offset to the control point,
/// so curvature scales with the anchor under nine-patch stretching.
fn decode_anchor_x(canvas: &Canvas, anchor: f32, control: f32) -> String {
    format!(
        "decodeAnchorX({}, {})",
        float_literal(encode_x(canvas, anchor)),
        float_literal(control - anchor)
    )
}

fn decode_anchor_y(canvas: &Canvas, anchor: f32, control: f32) -> String {
    format!(
        "decodeAnchorY({}, {})",
        float_literal(encode_y(canvas, anchor)),
        float_literal(control - anchor)
    )
}

fn rect_body(canvas: &Canvas, r: &RectShape) -> String {
    if r.is_rounded() {
        let rounding = float_literal(r.rounding);
        format!(
            "        roundRect.setRoundRect({}, //x\n\
             \x20                              {}, //y\n\
             \x20                              {} - {}, //width\n\
             \x20                              {} - {}, //height\n\
             \x20                              {rounding}, {rounding}); //rounding\n",
            decode_x(canvas, r.x1),
            decode_y(canvas, r.y1),
            decode_x(canvas, r.x2),
            decode_x(canvas, r.x1),
            decode_y(canvas, r.y2),
            decode_y(canvas, r.y1),
        )
    } else {
        format!(
            "            rect.setRect({}, //x\n\
             \x20                        {}, //y\n\
             \x20                        {} - {}, //width\n\
             \x20                        {} - {}); //height\n",
            decode_x(canvas, r.x1),
            decode_y(canvas, r.y1),
            decode_x(canvas, r.x2),
            decode_x(canvas, r.x1),
            decode_y(canvas, r.y2),
            decode_y(canvas, r.y1),
        )
    }
}

fn ellipse_body(canvas: &Canvas, e: &EllipseShape) -> String {
    format!(
        "        ellipse.setFrame({}, //x\n\
         \x20                        {}, //y\n\
         \x20                        {} - {}, //width\n\
         \x20                        {} - {}); //height\n",
        decode_x(canvas, e.x1),
        decode_y(canvas, e.y1),
        decode_x(canvas, e.x2),
        decode_x(canvas, e.x1),
        decode_y(canvas, e.y2),
        decode_y(canvas, e.y1),
    )
}

/// Emits one segment from `prev` to `next`: a straight line only when the trailing
/// handle of `prev` and the leading handle of `next` are both sharp.
fn segment(canvas: &Canvas, prev: &PathPoint, next: &PathPoint) -> String {
    if prev.is_p2_sharp() && next.is_p1_sharp() {
        format!(
            "        path.lineTo({}, {});\n",
            decode_x(canvas, next.x),
            decode_y(canvas, next.y)
        )
    } else {
        format!(
            "        path.curveTo({}, {}, {}, {}, {}, {});\n",
            decode_anchor_x(canvas, prev.x, prev.cp2x),
            decode_anchor_y(canvas, prev.y, prev.cp2y),
            decode_anchor_x(canvas, next.x, next.cp1x),
            decode_anchor_y(canvas, next.y, next.cp1y),
            decode_x(canvas, next.x),
            decode_y(canvas, next.y),
        )
    }
}

fn path_body(canvas: &Canvas, p: &PathShape) -> String {
    let mut body = String::from("        path.reset();\n");
    let Some(first) = p.points.first() else {
        body.push_str("        path.closePath();\n");
        return body;
    };
    body.push_str(&format!(
        "        path.moveTo({}, {});\n",
        decode_x(canvas, first.x),
        decode_y(canvas, first.y)
    ));
    for pair in p.points.windows(2) {
        body.push_str(&segment(canvas, &pair[0], &pair[1]));
    }
    // implicit closing segment back to the first point
    if let Some(last) = p.points.last() {
        if p.points.len() > 1 {
            body.push_str(&segment(canvas, last, first));
        }
    }
    body.push_str("        path.closePath();\n");
    body
}

/// Emits the paint-method statements for one shape: factory call, paint selection, fill.
/// Factory and gradient methods are deduplicated through the context tables.
pub(crate) fn emit(ctx: &mut GenContext, canvas: &Canvas, shape: &Shape) -> String {
    let (kind, body) = match shape {
        Shape::Rect(r) if r.is_rounded() => (ShapeKind::RoundRect, rect_body(canvas, r)),
        Shape::Rect(r) => (ShapeKind::Rect, rect_body(canvas, r)),
        Shape::Ellipse(e) => (ShapeKind::Ellipse, ellipse_body(canvas, e)),
        Shape::Path(p) => (ShapeKind::Path, path_body(canvas, p)),
    };
    let variable = kind.variable();
    let method = ctx.shape_method(kind, body);
    let paint = paint_expr(ctx, variable, shape);
    format!(
        "        {variable} = {method}();\n\
         \x20       g.setPaint({paint});\n\
         \x20       g.fill({variable});\n"
    )
}

#[cfg(test)]
mod tests {
    use super::{emit, path_body, rect_body};
    use crate::canvas::{Canvas, StretchInsets};
    use crate::color::Color;
    use crate::generator::context::GenContext;
    use crate::paint::{Matte, Paint};
    use crate::shape::{PaintAnchors, PathPoint, PathShape, RectShape, Shape};

    fn canvas() -> Canvas {
        Canvas::new((30.0, 30.0), StretchInsets::uniform(10.0), Vec::new())
    }

    fn matte() -> Paint {
        Paint::Matte(Matte::absolute(Color::rgb(1, 2, 3)))
    }

    #[test]
    fn rect_at_stretch_boundaries_encodes_to_unit_zone_edges() {
        let r = RectShape::new((10.0, 10.0), (20.0, 20.0), matte(), PaintAnchors::default());
        let body = rect_body(&canvas(), &r);
        assert!(body.contains("rect.setRect(decodeX(1.0f), //x"));
        assert!(body.contains("decodeY(1.0f), //y"));
        assert!(body.contains("decodeX(2.0f) - decodeX(1.0f), //width"));
        assert!(body.contains("decodeY(2.0f) - decodeY(1.0f)); //height"));
    }

    #[test]
    fn rounded_rect_appends_the_rounding_pair() {
        let r = RectShape::new((0.0, 0.0), (30.0, 30.0), matte(), PaintAnchors::default()).rounded(8.5);
        let body = rect_body(&canvas(), &r);
        assert!(body.contains("roundRect.setRoundRect("));
        assert!(body.contains("8.5f, 8.5f); //rounding"));
    }

    #[test]
    fn sharp_points_emit_lines_and_an_implicit_close() {
        let p = PathShape::new(
            vec![
                PathPoint::sharp(0.0, 0.0),
                PathPoint::sharp(30.0, 0.0),
                PathPoint::sharp(30.0, 30.0),
            ],
            matte(),
            PaintAnchors::default(),
        );
        let body = path_body(&canvas(), &p);
        assert!(body.starts_with("        path.reset();\n        path.moveTo(decodeX(0.0f), decodeY(0.0f));\n"));
        // two declared segments plus the implicit closing one
        assert_eq!(body.matches("path.lineTo(").count(), 3);
        assert!(body.ends_with("        path.closePath();\n"));
        assert!(!body.contains("curveTo"));
    }

    #[test]
    fn a_single_soft_handle_turns_the_segment_into_a_curve() {
        let p = PathShape::new(
            vec![
                PathPoint::sharp(0.0, 0.0),
                PathPoint::with_handles(30.0, 0.0, (25.0, 5.0), (30.0, 0.0)),
                PathPoint::sharp(30.0, 30.0),
            ],
            matte(),
            PaintAnchors::default(),
        );
        let body = path_body(&canvas(), &p);
        // segment into the soft point curves; its trailing handle is sharp so the rest are lines
        assert_eq!(body.matches("path.curveTo(").count(), 1);
        assert_eq!(body.matches("path.lineTo(").count(), 2);
        // the leading handle offset is the raw pixel delta from the anchor
        assert!(body.contains("decodeAnchorX(3.0f, -5.0f)"));
        assert!(body.contains("decodeAnchorY(0.0f, 5.0f)"));
    }

    #[test]
    fn ellipses_use_frame_based_construction() {
        let shape = Shape::Ellipse(crate::shape::EllipseShape::new(
            (10.0, 10.0),
            (20.0, 20.0),
            matte(),
            PaintAnchors::default(),
        ));
        let mut ctx = GenContext::new();
        let stmts = emit(&mut ctx, &canvas(), &shape);
        assert!(stmts.contains("ellipse = decodeEllipse1();"));
        assert!(ctx.shape_methods.contains("ellipse.setFrame(decodeX(1.0f), //x"));
        assert!(ctx.shape_methods.contains("decodeX(2.0f) - decodeX(1.0f), //width"));
        assert!(ctx.shape_methods.contains("return ellipse;"));
    }

    #[test]
    fn emitted_statements_assign_paint_and_fill() {
        let mut ctx = GenContext::new();
        let shape = Shape::Rect(RectShape::new(
            (10.0, 10.0),
            (20.0, 20.0),
            matte(),
            PaintAnchors::default(),
        ));
        let stmts = emit(&mut ctx, &canvas(), &shape);
        assert_eq!(
            stmts,
            "        rect = decodeRect1();\n        g.setPaint(color1);\n        g.fill(rect);\n"
        );
    }
}
