//! Generation context: name counters, dedup tables, and output buffers for one painter.
//!
//! All generation state lives here and is created fresh per [`crate::generate`] call,
//! which keeps the generator reentrant. The dedup tables are keyed on emitted body text,
//! not on shape geometry: two constructs that emit byte-identical code collapse to one
//! declaration, while geometrically equal but textually different ones stay distinct.

use ahash::{HashMap, HashMapExt};

use crate::paint::ComponentColor;

/// Monotonically increasing 1-based counters used to mint unique emitted names.
/// Each advances only when a genuinely new body or declaration is seen.
#[derive(Debug)]
pub(crate) struct NameCounters {
    pub state_type: u32,
    pub color: u32,
    pub gradient: u32,
    pub radial: u32,
    pub rect: u32,
    pub round_rect: u32,
    pub ellipse: u32,
    pub path: u32,
}

impl NameCounters {
    fn new() -> Self {
        Self {
            state_type: 1,
            color: 1,
            gradient: 1,
            radial: 1,
            rect: 1,
            round_rect: 1,
            ellipse: 1,
            path: 1,
        }
    }
}

fn take(counter: &mut u32) -> u32 {
    let value = *counter;
    *counter += 1;
    value
}

/// The shape factory kinds, each with its own counter, reusable field, and return type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ShapeKind {
    Rect,
    RoundRect,
    Ellipse,
    Path,
}

impl ShapeKind {
    /// The reusable painter field the factory method writes into and returns.
    pub(crate) fn variable(self) -> &'static str {
        match self {
            ShapeKind::Rect => "rect",
            ShapeKind::RoundRect => "roundRect",
            ShapeKind::Ellipse => "ellipse",
            ShapeKind::Path => "path",
        }
    }

    fn method_prefix(self) -> &'static str {
        match self {
            ShapeKind::Rect => "decodeRect",
            ShapeKind::RoundRect => "decodeRoundRect",
            ShapeKind::Ellipse => "decodeEllipse",
            ShapeKind::Path => "decodePath",
        }
    }

    fn return_type(self) -> &'static str {
        match self {
            ShapeKind::Rect => "Rectangle2D",
            ShapeKind::RoundRect => "RoundRectangle2D",
            ShapeKind::Ellipse => "Ellipse2D",
            ShapeKind::Path => "Path2D",
        }
    }
}

/// The gradient factory kinds, sharing one dedup table but separate counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum GradientKind {
    Linear,
    Radial,
}

impl GradientKind {
    fn method_prefix(self) -> &'static str {
        match self {
            GradientKind::Linear => "decodeGradient",
            GradientKind::Radial => "decodeRadial",
        }
    }
}

/// All mutable state for one generation pass.
pub(crate) struct GenContext {
    pub counters: NameCounters,

    // body text -> emitted name
    colors: HashMap<String, String>,
    shapes: HashMap<String, String>,
    gradients: HashMap<String, String>,

    pub state_constants: String,
    pub switch_body: String,
    pub paint_methods: String,
    pub shape_methods: String,
    pub gradient_methods: String,
    pub color_fields: String,

    /// Component colors registered by the state currently being generated.
    pub component_colors: Vec<ComponentColor>,
    /// Frozen per-state rows, in state discovery order: (state constant, colors).
    pub state_component_colors: Vec<(String, Vec<ComponentColor>)>,
}

impl GenContext {
    pub(crate) fn new() -> Self {
        Self {
            counters: NameCounters::new(),
            colors: HashMap::new(),
            shapes: HashMap::new(),
            gradients: HashMap::new(),
            state_constants: String::new(),
            switch_body: String::new(),
            paint_methods: String::new(),
            shape_methods: String::new(),
            gradient_methods: String::new(),
            color_fields: String::new(),
            component_colors: Vec::new(),
            state_component_colors: Vec::new(),
        }
    }

    pub(crate) fn next_state_constant(&mut self) -> u32 {
        take(&mut self.counters.state_type)
    }

    /// Returns the field name for a color declaration, emitting the field on first use.
    pub(crate) fn color_field(&mut self, declaration: String) -> String {
        if let Some(existing) = self.colors.get(&declaration) {
            return existing.clone();
        }
        let name = format!("color{}", take(&mut self.counters.color));
        self.color_fields
            .push_str(&format!("    private Color {name} = {declaration};\n"));
        self.colors.insert(declaration, name.clone());
        name
    }

    /// Returns the factory method name for a shape body, emitting the method on first use.
    pub(crate) fn shape_method(&mut self, kind: ShapeKind, body: String) -> String {
        if let Some(existing) = self.shapes.get(&body) {
            return existing.clone();
        }
        let counter = match kind {
            ShapeKind::Rect => &mut self.counters.rect,
            ShapeKind::RoundRect => &mut self.counters.round_rect,
            ShapeKind::Ellipse => &mut self.counters.ellipse,
            ShapeKind::Path => &mut self.counters.path,
        };
        let name = format!("{}{}", kind.method_prefix(), take(counter));
        self.shape_methods.push_str(&format!(
            "    private {} {}() {{\n{}        return {};\n    }}\n\n",
            kind.return_type(),
            name,
            body,
            kind.variable(),
        ));
        self.shapes.insert(body, name.clone());
        name
    }

    /// Returns the factory method name for a gradient body, emitting the method on first
    /// use. The body is the full return statement; the bounds preamble is shared.
    pub(crate) fn gradient_method(&mut self, kind: GradientKind, body: String) -> String {
        if let Some(existing) = self.gradients.get(&body) {
            return existing.clone();
        }
        let counter = match kind {
            GradientKind::Linear => &mut self.counters.gradient,
            GradientKind::Radial => &mut self.counters.radial,
        };
        let name = format!("{}{}", kind.method_prefix(), take(counter));
        self.gradient_methods.push_str(&format!("    private Paint {name}(Shape s) {{\n"));
        self.gradient_methods.push_str("        float x = (float)s.getBounds2D().getX();\n");
        self.gradient_methods.push_str("        float y = (float)s.getBounds2D().getY();\n");
        self.gradient_methods.push_str("        float w = (float)s.getBounds2D().getWidth();\n");
        self.gradient_methods.push_str("        float h = (float)s.getBounds2D().getHeight();\n");
        self.gradient_methods.push_str(&body);
        self.gradient_methods.push_str("\n    }\n\n");
        self.gradients.insert(body, name.clone());
        name
    }

    /// Registers a component color for the current state, deduplicating by value within
    /// the state, and returns its runtime array index.
    pub(crate) fn register_component_color(&mut self, color: ComponentColor) -> usize {
        if let Some(index) = self.component_colors.iter().position(|c| *c == color) {
            index
        } else {
            self.component_colors.push(color);
            self.component_colors.len() - 1
        }
    }

    /// Freezes the current state's component colors into a dispatch row.
    pub(crate) fn seal_state_component_colors(&mut self, constant: &str) {
        if !self.component_colors.is_empty() {
            let row = std::mem::take(&mut self.component_colors);
            self.state_component_colors.push((constant.to_string(), row));
        }
    }
}
