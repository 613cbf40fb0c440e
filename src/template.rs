//! The painter class template and its substitution writer.
//!
//! Generated fragments are spliced into a fixed class skeleton through `${VAR}`
//! placeholders, then written to a file named after the painter class. The skeleton
//! carries everything state-independent: imports, the reusable shape fields, the
//! constructor, and the dispatch method shell.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use regex::Regex;

use crate::error::Error;
use crate::generator::PainterFragments;

/// The painter class skeleton. `${PACKAGE}` and `${PAINTER_NAME}` come from the caller
/// and the region; the remaining variables are the generated fragments.
const CLASS_TEMPLATE: &str = r#"package ${PACKAGE};

import java.awt.*;
import java.awt.geom.*;
import java.awt.image.*;
import javax.swing.*;

final class ${PAINTER_NAME} extends AbstractRegionPainter {
    //package private integers representing the available states that
    //this painter will paint. These are used when creating a new instance
    //of ${PAINTER_NAME} to determine which region/state is being painted
    //by that instance.
${STATE_CONSTANTS}

    private int state; //refers to one of the static final ints above
    private PaintContext ctx;

    //the following 4 variables are reused during the painting code of the layers
    private Path2D path = new Path2D.Float();
    private Rectangle2D rect = new Rectangle2D.Float(0, 0, 0, 0);
    private RoundRectangle2D roundRect = new RoundRectangle2D.Float(0, 0, 0, 0, 0, 0);
    private Ellipse2D ellipse = new Ellipse2D.Float(0, 0, 0, 0);

    //All Colors used for painting are stored here. Ideally, only those colors being used
    //by a particular instance of ${PAINTER_NAME} would be created. For the moment at least,
    //however, all are created for each instance.
${COLOR_FIELDS}

    //Array of current component colors, updated in each paint call
    private Object[] componentColors;

    public ${PAINTER_NAME}(PaintContext ctx, int state) {
        super();
        this.state = state;
        this.ctx = ctx;
    }

    @Override
    protected void doPaint(Graphics2D g, JComponent c, int width, int height, Object[] extendedCacheKeys) {
        //populate componentColors array with colors calculated in getExtendedCacheKeys call
        componentColors = extendedCacheKeys;
        switch(state) {
${SWITCH_BODY}        }
    }

${CACHE_KEY_METHOD}
    @Override
    protected final PaintContext getPaintContext() {
        return ctx;
    }

${PAINT_METHODS}
${SHAPE_METHODS}
${GRADIENT_METHODS}
}
"#;

fn placeholder_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\$\{([A-Z_]+)\}").expect("placeholder pattern is valid"))
}

/// Substitutes `${VAR}` placeholders in `template`, resolving each through `lookup`.
fn substitute<'a, F>(template: &str, lookup: F) -> Result<String, Error>
where
    F: Fn(&str) -> Option<&'a str>,
{
    let pattern = placeholder_pattern();
    let mut out = String::with_capacity(template.len());
    let mut last = 0;
    for captures in pattern.captures_iter(template) {
        let Some(matched) = captures.get(0) else {
            continue;
        };
        let name = &captures[1];
        out.push_str(&template[last..matched.start()]);
        match lookup(name) {
            Some(value) => out.push_str(value),
            None => return Err(Error::MissingVariable(name.to_string())),
        }
        last = matched.end();
    }
    out.push_str(&template[last..]);
    Ok(out)
}

/// Renders the finished painter class source for a set of generated fragments.
///
/// # Examples
///
/// ```
/// use pictor::{generate, render, Canvas, Region, State, StretchInsets};
///
/// let blank = Canvas::new((30.0, 30.0), StretchInsets::uniform(10.0), Vec::new());
/// let region = Region::new("Button").with_background(State::new(["Enabled"], blank));
/// let source = render(&generate(&region), "javax.swing.plaf.nimbus")?;
/// assert!(source.contains("final class ButtonPainter"));
/// # Ok::<(), pictor::Error>(())
/// ```
pub fn render(fragments: &PainterFragments, package: &str) -> Result<String, Error> {
    substitute(CLASS_TEMPLATE, |name| match name {
        "PACKAGE" => Some(package),
        "PAINTER_NAME" => Some(&fragments.class_name),
        "STATE_CONSTANTS" => Some(&fragments.state_constants),
        "SWITCH_BODY" => Some(&fragments.switch_body),
        "PAINT_METHODS" => Some(&fragments.paint_methods),
        "SHAPE_METHODS" => Some(&fragments.shape_methods),
        "GRADIENT_METHODS" => Some(&fragments.gradient_methods),
        "COLOR_FIELDS" => Some(&fragments.color_fields),
        "CACHE_KEY_METHOD" => Some(&fragments.cache_key_method),
        _ => None,
    })
}

/// Renders the painter class and writes it to `<ClassName>.java` under `dir`, returning
/// the written path.
pub fn write(dir: &Path, fragments: &PainterFragments, package: &str) -> Result<PathBuf, Error> {
    let source = render(fragments, package)?;
    let path = dir.join(format!("{}.java", fragments.class_name));
    std::fs::write(&path, source)?;
    tracing::debug!(path = %path.display(), "wrote painter class");
    Ok(path)
}
