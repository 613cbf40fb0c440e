//! The painter generator: walks a region's per-state canvases and accumulates the
//! deduplicated source fragments of one painter class.
//!
//! Generation is a single-threaded batch transform. All mutable state lives in a
//! per-call [`context::GenContext`], so [`generate`] is a pure function of its input and
//! its output is byte-stable across repeated runs on the same region tree.

pub(crate) mod context;
pub(crate) mod paints;
pub(crate) mod shapes;

use crate::canvas::Canvas;
use crate::generator::context::GenContext;
use crate::region::{Region, State};
use crate::util::{constant_name, join_keys_camel};

/// The named source fragments of one generated painter class, handed to the template
/// writer as substitution variables.
///
/// Fragments are plain source text; an empty fragment substitutes to nothing (a region
/// with no component colors produces an empty [`cache_key_method`](Self::cache_key_method)).
#[derive(Debug, Clone)]
pub struct PainterFragments {
    /// The painter class name, also used as the output file stem.
    pub class_name: String,
    /// `static final int` state constant declarations, one per discovered state.
    pub state_constants: String,
    /// The dispatch switch body mapping state constants to paint methods.
    pub switch_body: String,
    /// Per-state paint method bodies.
    pub paint_methods: String,
    /// Deduplicated shape factory methods.
    pub shape_methods: String,
    /// Deduplicated linear/radial gradient factory methods.
    pub gradient_methods: String,
    /// Deduplicated color field declarations.
    pub color_fields: String,
    /// The component-color cache-key method, or empty when no state registered any.
    pub cache_key_method: String,
}

/// Generates the painter source fragments for one region, including any icon
/// sub-regions, which are absorbed into the same painter.
///
/// # Examples
///
/// ```
/// use pictor::{generate, Canvas, Region, State, StretchInsets};
///
/// let blank = Canvas::new((30.0, 30.0), StretchInsets::uniform(10.0), Vec::new());
/// let region = Region::new("Button").with_background(State::new(["Enabled"], blank));
/// let fragments = generate(&region);
/// assert_eq!(fragments.class_name, "ButtonPainter");
/// assert!(fragments.state_constants.contains("BACKGROUND_ENABLED = 1"));
/// ```
pub fn generate(region: &Region) -> PainterFragments {
    let mut ctx = GenContext::new();
    generate_region(&mut ctx, region, false);
    let cache_key_method = cache_key_method(&ctx);
    PainterFragments {
        class_name: format!("{}Painter", region.key),
        state_constants: ctx.state_constants,
        switch_body: ctx.switch_body,
        paint_methods: ctx.paint_methods,
        shape_methods: ctx.shape_methods,
        gradient_methods: ctx.gradient_methods,
        color_fields: ctx.color_fields,
        cache_key_method,
    }
}

/// Walks one region's state lists in the fixed order that defines constant numbering:
/// background, foreground, border, then icon sub-regions. Icon regions use their own key
/// as the state type prefix.
fn generate_region(ctx: &mut GenContext, region: &Region, icon: bool) {
    for state in &region.background_states {
        let kind = if icon { region.key.as_str() } else { "Background" };
        generate_state(ctx, kind, state);
    }
    for state in &region.foreground_states {
        let kind = if icon { region.key.as_str() } else { "Foreground" };
        generate_state(ctx, kind, state);
    }
    for state in &region.border_states {
        let kind = if icon { region.key.as_str() } else { "Border" };
        generate_state(ctx, kind, state);
    }
    for sub in &region.icon_regions {
        generate_region(ctx, sub, true);
    }
}

/// Generates one state: the constant always, the dispatch case and paint method only
/// when the canvas has content.
fn generate_state(ctx: &mut GenContext, kind: &str, state: &State) {
    let constant = constant_name(kind, &state.keys);
    let number = ctx.next_state_constant();
    ctx.state_constants
        .push_str(&format!("    static final int {constant} = {number};\n"));

    if state.canvas.is_blank() {
        return;
    }

    let method = format!("paint{}{}", kind, join_keys_camel(&state.keys));
    ctx.switch_body
        .push_str(&format!("            case {constant}: {method}(g); break;\n"));

    let body = paint_body(ctx, &state.canvas);
    ctx.paint_methods
        .push_str(&format!("    private void {method}(Graphics2D g) {{\n{body}    }}\n\n"));

    ctx.seal_state_component_colors(&constant);
}

/// Paints layers and shapes in reverse declaration order so later-declared shapes land
/// visually on top while emission order stays deterministic.
fn paint_body(ctx: &mut GenContext, canvas: &Canvas) -> String {
    let mut body = String::new();
    for layer in canvas.layers().iter().rev() {
        for shape in layer.shapes.iter().rev() {
            body.push_str(&shapes::emit(ctx, canvas, shape));
        }
    }
    body
}

/// Assembles the per-state component-color dispatcher, or an empty string when no state
/// registered component colors.
fn cache_key_method(ctx: &GenContext) -> String {
    if ctx.state_component_colors.is_empty() {
        return String::new();
    }
    let mut method = String::new();
    method.push_str("    protected Object[] getExtendedCacheKeys(JComponent c) {\n");
    method.push_str("        Object[] extendedCacheKeys = null;\n");
    method.push_str("        switch(state) {\n");
    for (constant, colors) in &ctx.state_component_colors {
        let entries: Vec<String> = colors.iter().map(|c| c.cache_key_expr()).collect();
        method.push_str(&format!(
            "            case {constant}:\n\
             \x20               extendedCacheKeys = new Object[] {{\n\
             \x20                    {}}};\n\
             \x20               break;\n",
            entries.join(",\n                     ")
        ));
    }
    method.push_str("        }\n");
    method.push_str("        return extendedCacheKeys;\n");
    method.push_str("    }\n");
    method
}
