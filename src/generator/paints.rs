//! Paint resolution: matte declarations, gradient stop interpolation, and linear/radial
//! gradient body emission.
//!
//! Gradient stops are interleaved with synthesized midpoint stops (a 50% blend between
//! the bounding colors), then repaired to be strictly increasing and clipped to `[0, 1]`
//! before they reach the emitted arrays.

use smallvec::SmallVec;

use crate::generator::context::{GenContext, GradientKind};
use crate::paint::{GradientStop, Matte, Paint};
use crate::shape::{PaintAnchors, Shape};
use crate::util::float_literal;

/// Fraction arrays are `2N - 1` long; skins rarely exceed a handful of stops.
type Fractions = SmallVec<[f32; 8]>;

/// The expression a paint method passes to `g.setPaint` for this shape.
pub(crate) fn paint_expr(ctx: &mut GenContext, shape_variable: &str, shape: &Shape) -> String {
    match shape.paint() {
        Paint::Matte(matte) => resolve_matte(ctx, matte),
        Paint::Gradient(gradient) => {
            let body = linear_body(ctx, shape.anchors(), &gradient.stops);
            let method = ctx.gradient_method(GradientKind::Linear, body);
            format!("{method}({shape_variable})")
        }
        Paint::Radial(gradient) => {
            let body = radial_body(ctx, shape.anchors(), &gradient.stops);
            let method = ctx.gradient_method(GradientKind::Radial, body);
            format!("{method}({shape_variable})")
        }
    }
}

/// Resolves a matte to either its deduplicated color field or, when bound to a component
/// property, an indexed read from the per-state component color array.
pub(crate) fn resolve_matte(ctx: &mut GenContext, matte: &Matte) -> String {
    let field = ctx.color_field(matte.declaration());
    match &matte.component_property {
        Some(property) => {
            let index = ctx.register_component_color(matte.component_color(property, &field));
            format!("(Color)componentColors[{index}]")
        }
        None => field,
    }
}

/// Interleaves declared stop positions with synthesized midpoints: `2N - 1` fractions.
pub(crate) fn interpolate_fractions(stops: &[GradientStop]) -> Fractions {
    let mut fractions = Fractions::new();
    for (i, stop) in stops.iter().enumerate() {
        if i > 0 {
            let prev = &stops[i - 1];
            fractions.push(prev.position + (stop.position - prev.position) * prev.midpoint);
        }
        fractions.push(stop.position);
    }
    fractions
}

/// Repairs the fraction sequence in a single forward pass so it is strictly increasing;
/// equal-or-regressing successors are bumped just past their predecessor, and bumps
/// cascade through consecutive ties.
pub(crate) fn repair_fractions(fractions: &mut [f32]) {
    for i in 1..fractions.len() {
        if fractions[i] <= fractions[i - 1] {
            fractions[i] = fractions[i - 1] + 0.000001;
        }
    }
}

/// Truncates both arrays at the first repaired fraction that overflowed past `1.0`,
/// discarding the tail entirely.
pub(crate) fn clip_overflow(fractions: &mut Fractions, colors: &mut Vec<String>) {
    if let Some(index) = fractions.iter().position(|f| *f > 1.0) {
        fractions.truncate(index);
        colors.truncate(index);
    }
}

/// Builds the corrected (fractions, color expressions) pair for a stop list. Midpoint
/// colors are emitted as a 50% runtime blend of the bounding stop colors; stop colors
/// resolve through the shared matte tables.
fn stop_arrays(ctx: &mut GenContext, stops: &[GradientStop]) -> (Fractions, Vec<String>) {
    let mut fractions = interpolate_fractions(stops);
    let mut colors = Vec::with_capacity(fractions.len());
    for (i, stop) in stops.iter().enumerate() {
        if i > 0 {
            let prev = resolve_matte(ctx, &stops[i - 1].color);
            let next = resolve_matte(ctx, &stop.color);
            colors.push(format!("decodeColor({prev},{next},0.5f)"));
        }
        colors.push(resolve_matte(ctx, &stop.color));
    }
    repair_fractions(&mut fractions);
    clip_overflow(&mut fractions, &mut colors);
    (fractions, colors)
}

fn fraction_array(fractions: &Fractions) -> String {
    let literals: Vec<String> = fractions.iter().map(|f| float_literal(*f)).collect();
    format!("new float[] {{ {} }}", literals.join(","))
}

fn color_array(colors: &[String]) -> String {
    format!(
        "new Color[] {{ {}}}",
        colors.join(",\n                            ")
    )
}

fn linear_body(ctx: &mut GenContext, anchors: &PaintAnchors, stops: &[GradientStop]) -> String {
    let (fractions, colors) = stop_arrays(ctx, stops);
    format!(
        "        return decodeGradient(({} * w) + x, ({} * h) + y, ({} * w) + x, ({} * h) + y,\n\
         \x20               {},\n\
         \x20               {});",
        float_literal(anchors.x1),
        float_literal(anchors.y1),
        float_literal(anchors.x2),
        float_literal(anchors.y2),
        fraction_array(&fractions),
        color_array(&colors),
    )
}

fn radial_body(ctx: &mut GenContext, anchors: &PaintAnchors, stops: &[GradientStop]) -> String {
    let (fractions, colors) = stop_arrays(ctx, stops);
    let dx = anchors.x2 - anchors.x1;
    let dy = anchors.y2 - anchors.y1;
    let radius = (dx * dx + dy * dy).sqrt();
    format!(
        "        return decodeRadialGradient(({} * w) + x, ({} * h) + y, {},\n\
         \x20               {},\n\
         \x20               {});",
        float_literal(anchors.x1),
        float_literal(anchors.y1),
        float_literal(radius),
        fraction_array(&fractions),
        color_array(&colors),
    )
}

#[cfg(test)]
mod tests {
    use super::{clip_overflow, interpolate_fractions, paint_expr, repair_fractions, Fractions};
    use crate::color::Color;
    use crate::generator::context::GenContext;
    use crate::paint::{Gradient, GradientStop, Matte, Paint};
    use crate::shape::{PaintAnchors, RectShape, Shape};

    fn stop(position: f32, midpoint: f32) -> GradientStop {
        GradientStop::new(position, midpoint, Matte::absolute(Color::BLACK))
    }

    #[test]
    fn interpolation_yields_two_n_minus_one_fractions() {
        let stops = vec![stop(0.0, 0.5), stop(0.5, 0.5), stop(1.0, 0.5)];
        let fractions = interpolate_fractions(&stops);
        assert_eq!(fractions.as_slice(), &[0.0, 0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn midpoints_respect_the_declared_bias() {
        let stops = vec![stop(0.0, 0.25), stop(1.0, 0.5)];
        let fractions = interpolate_fractions(&stops);
        assert_eq!(fractions.as_slice(), &[0.0, 0.25, 1.0]);
    }

    #[test]
    fn equal_stops_are_bumped_by_one_millionth() {
        let mut fractions = [0.0f32, 0.0];
        repair_fractions(&mut fractions);
        assert_eq!(fractions, [0.0, 0.000001]);
    }

    #[test]
    fn repair_cascades_through_consecutive_ties() {
        let mut fractions = [0.0f32, 0.0, 0.0];
        repair_fractions(&mut fractions);
        assert!(fractions[0] < fractions[1] && fractions[1] < fractions[2]);
        assert_eq!(fractions[1], 0.000001);
        assert_eq!(fractions[2], 0.000002);
    }

    #[test]
    fn repair_is_a_no_op_on_strictly_increasing_fractions() {
        let mut fractions = [0.0f32, 0.25, 0.5, 0.75, 1.0];
        let before = fractions;
        repair_fractions(&mut fractions);
        assert_eq!(fractions, before);
    }

    #[test]
    fn corrected_fractions_stay_strictly_increasing_and_bounded() {
        let stops = vec![stop(0.0, 0.5), stop(0.5, 0.5), stop(0.5, 0.5), stop(1.0, 0.5)];
        let mut fractions = interpolate_fractions(&stops);
        let mut colors = vec![String::new(); fractions.len()];
        repair_fractions(&mut fractions);
        clip_overflow(&mut fractions, &mut colors);
        for pair in fractions.windows(2) {
            assert!(pair[0] < pair[1]);
        }
        assert!(fractions.iter().all(|f| *f <= 1.0));
    }

    #[test]
    fn overflowing_tail_is_discarded_not_clamped() {
        let stops = vec![stop(0.5, 1.0), stop(1.0, 1.0), stop(1.0, 1.0)];
        let mut fractions = interpolate_fractions(&stops);
        assert_eq!(fractions.as_slice(), &[0.5, 1.0, 1.0, 1.0, 1.0]);
        let mut colors = vec![String::new(); fractions.len()];
        repair_fractions(&mut fractions);
        clip_overflow(&mut fractions, &mut colors);
        // first overflow lands at index 2, so both arrays keep exactly two entries
        assert_eq!(fractions.as_slice(), &[0.5, 1.0]);
        assert_eq!(colors.len(), 2);
    }

    #[test]
    fn clip_keeps_full_arrays_when_nothing_overflows() {
        let mut fractions: Fractions = [0.0f32, 0.5, 1.0].into_iter().collect();
        let mut colors = vec![String::new(); 3];
        clip_overflow(&mut fractions, &mut colors);
        assert_eq!(fractions.len(), 3);
        assert_eq!(colors.len(), 3);
    }

    #[test]
    fn gradient_paint_expr_emits_a_bounds_anchored_call() {
        let mut ctx = GenContext::new();
        let stops = vec![stop(0.0, 0.5), stop(1.0, 0.5)];
        let shape = Shape::Rect(RectShape::new(
            (0.0, 0.0),
            (30.0, 30.0),
            Paint::Gradient(Gradient::new(stops)),
            PaintAnchors::new(0.5, 0.0, 0.5, 1.0),
        ));
        let expr = paint_expr(&mut ctx, "rect", &shape);
        assert_eq!(expr, "decodeGradient1(rect)");
        assert!(ctx
            .gradient_methods
            .contains("decodeGradient((0.5f * w) + x, (0.0f * h) + y, (0.5f * w) + x, (1.0f * h) + y,"));
        assert!(ctx.gradient_methods.contains("new float[] { 0.0f,0.5f,1.0f }"));
        assert!(ctx.gradient_methods.contains("decodeColor(color1,color1,0.5f)"));
    }
}
