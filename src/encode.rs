//! Nine-patch coordinate encoding.
//!
//! An absolute canvas coordinate is mapped into one of three zones relative to the
//! stretch boundaries `a` (left/center) and `b` (center/right) of a canvas of width `w`:
//!
//! - `[0, 1)`: fixed left zone, as a ratio of `a`
//! - `[1, 2]`: stretchable middle zone
//! - `(2, 3]`: fixed right zone, offset by 2
//!
//! The emitted painter reverses the mapping against the actual rendered width, which is
//! what makes the painted skin resolution independent. The same function serves the
//! vertical axis with the top/bottom boundaries and the canvas height.

use crate::canvas::Canvas;

/// Encodes the absolute coordinate `x` into nine-patch-relative units, where `a` and `b`
/// are the stretch boundaries of a canvas of width `w`.
///
/// A degenerate zero-width center (`x == a == b`) encodes to the `1.5` sentinel.
/// NaN, infinite, and negative results clamp to `0`; results above `3` clamp to `3`, so
/// the returned value is always a finite value in `[0, 3]`.
///
/// # Examples
///
/// ```
/// use pictor::encode;
///
/// assert_eq!(encode(10.0, 10.0, 20.0, 30.0), 1.0); // left stretch boundary
/// assert_eq!(encode(20.0, 10.0, 20.0, 30.0), 2.0); // right stretch boundary
/// assert_eq!(encode(25.0, 10.0, 20.0, 30.0), 2.5); // fixed right zone
/// ```
pub fn encode(x: f32, a: f32, b: f32, w: f32) -> f32 {
    let r = if x < a {
        x / a
    } else if x > b {
        2.0 + ((x - b) / (w - b))
    } else if x == a && x == b {
        1.5
    } else {
        1.0 + ((x - a) / (b - a))
    };

    if r.is_nan() {
        tracing::debug!(x, a, b, w, "encoded coordinate was NaN, clamping to 0");
        0.0
    } else if r.is_infinite() {
        tracing::debug!(x, a, b, w, "encoded coordinate was infinite, clamping to 0");
        0.0
    } else if r < 0.0 {
        tracing::debug!(x, a, b, w, r, "encoded coordinate was negative, clamping to 0");
        0.0
    } else if r > 3.0 {
        tracing::debug!(x, a, b, w, r, "encoded coordinate was > 3, clamping to 3");
        3.0
    } else {
        r
    }
}

/// Encodes an x coordinate against the canvas's horizontal stretch boundaries.
pub(crate) fn encode_x(canvas: &Canvas, x: f32) -> f32 {
    let (a, b, w) = canvas.stretch_x();
    encode(x, a, b, w)
}

/// Encodes a y coordinate against the canvas's vertical stretch boundaries.
pub(crate) fn encode_y(canvas: &Canvas, y: f32) -> f32 {
    let (a, b, h) = canvas.stretch_y();
    encode(y, a, b, h)
}
