//! Paint descriptions: solid mattes, linear gradients, and radial gradients.
//!
//! A [`Matte`] is either an absolute RGBA color or a color derived from a named UI
//! default by HSB/alpha offsets. A matte may additionally be bound to a live component
//! property, in which case the emitted painter resolves it per component instance at
//! paint time instead of referencing a static field.

use crate::color::Color;
use crate::util::float_literal;

/// The paint filling a shape.
#[derive(Debug, Clone)]
pub enum Paint {
    /// A solid or derived color.
    Matte(Matte),
    /// A linear gradient between the shape's paint anchors.
    Gradient(Gradient),
    /// A radial gradient centered on the first paint anchor.
    Radial(RadialGradient),
}

/// A solid color paint: an absolute RGBA value, or a color derived from a named UI
/// default via hue/saturation/brightness/alpha offsets.
#[derive(Debug, Clone)]
pub struct Matte {
    pub color: Color,
    /// Name of the UI default this color derives from, if any.
    pub ui_default_parent: Option<String>,
    pub hue_offset: f32,
    pub saturation_offset: f32,
    pub brightness_offset: f32,
    pub alpha_offset: i32,
    /// Component property this matte resolves against at paint time, if any.
    pub component_property: Option<String>,
}

impl Matte {
    /// An absolute color with no derivation.
    pub fn absolute(color: Color) -> Self {
        Self {
            color,
            ui_default_parent: None,
            hue_offset: 0.0,
            saturation_offset: 0.0,
            brightness_offset: 0.0,
            alpha_offset: 0,
            component_property: None,
        }
    }

    /// A color derived from the named UI default by HSB and alpha offsets.
    pub fn derived(
        parent: impl Into<String>,
        hue_offset: f32,
        saturation_offset: f32,
        brightness_offset: f32,
        alpha_offset: i32,
    ) -> Self {
        Self {
            color: Color::TRANSPARENT,
            ui_default_parent: Some(parent.into()),
            hue_offset,
            saturation_offset,
            brightness_offset,
            alpha_offset,
            component_property: None,
        }
    }

    /// Binds this matte to a live component property. The painter then resolves the
    /// color per component instance instead of using the static field directly.
    pub fn bound_to(mut self, property: impl Into<String>) -> Self {
        self.component_property = Some(property.into());
        self
    }

    /// The field initializer expression for this matte's color declaration.
    pub(crate) fn declaration(&self) -> String {
        match &self.ui_default_parent {
            Some(parent) => format!(
                "decodeColor(\"{parent}\", {}, {}, {}, {})",
                float_literal(self.hue_offset),
                float_literal(self.saturation_offset),
                float_literal(self.brightness_offset),
                self.alpha_offset,
            ),
            None => self.color.constructor_expr(),
        }
    }

    /// The per-state component-color entry for this matte, given the deduplicated
    /// default-color field name.
    pub(crate) fn component_color(&self, property: &str, default_color_field: &str) -> ComponentColor {
        ComponentColor {
            property: property.to_string(),
            default_color_field: default_color_field.to_string(),
            saturation_offset: self.saturation_offset,
            brightness_offset: self.brightness_offset,
            alpha_offset: self.alpha_offset,
        }
    }
}

/// A linear gradient running from the shape's first paint anchor to the second.
#[derive(Debug, Clone)]
pub struct Gradient {
    pub stops: Vec<GradientStop>,
}

impl Gradient {
    pub fn new(stops: Vec<GradientStop>) -> Self {
        Self { stops }
    }
}

/// A radial gradient centered on the shape's first paint anchor, with a radius equal to
/// the distance between the two anchors.
#[derive(Debug, Clone)]
pub struct RadialGradient {
    pub stops: Vec<GradientStop>,
}

impl RadialGradient {
    pub fn new(stops: Vec<GradientStop>) -> Self {
        Self { stops }
    }
}

/// One gradient stop: a position in `[0, 1]`, an interpolation midpoint toward the next
/// stop, and a color.
#[derive(Debug, Clone)]
pub struct GradientStop {
    pub position: f32,
    /// Where between this stop and the next the synthesized midpoint color sits,
    /// as a fraction of the gap. `0.5` is a plain linear blend.
    pub midpoint: f32,
    pub color: Matte,
}

impl GradientStop {
    pub fn new(position: f32, midpoint: f32, color: Matte) -> Self {
        Self { position, midpoint, color }
    }
}

/// A color resolved from a live component property at paint time, with offsets applied
/// to a deduplicated default color. Its index in the per-state list is the slot the
/// emitted painter reads out of `componentColors`.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentColor {
    pub property: String,
    pub default_color_field: String,
    pub saturation_offset: f32,
    pub brightness_offset: f32,
    pub alpha_offset: i32,
}

impl ComponentColor {
    /// The cache-key expression evaluated per component instance.
    pub(crate) fn cache_key_expr(&self) -> String {
        format!(
            "getComponentColor(c, \"{}\", {}, {}, {}, {})",
            self.property,
            self.default_color_field,
            float_literal(self.saturation_offset),
            float_literal(self.brightness_offset),
            self.alpha_offset,
        )
    }
}
