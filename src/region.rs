//! A UI region and its per-state canvases: the root input the generator walks.
//!
//! A region owns ordered background, foreground, and border state lists plus any icon
//! sub-regions, which are absorbed into the same painter. State iteration order defines
//! the dense 1-based constants the emitted dispatch switch is keyed on, so the order of
//! these lists is significant and preserved verbatim.

use crate::canvas::Canvas;

/// One widget state: the human-readable state key words (e.g. `["MouseOver", "Focused"]`)
/// and the canvas painted in that state.
#[derive(Debug, Clone)]
pub struct State {
    pub keys: Vec<String>,
    pub canvas: Canvas,
}

impl State {
    pub fn new<I, S>(keys: I, canvas: Canvas) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
            canvas,
        }
    }
}

/// A UI region: a key (e.g. `"Button"`), ordered per-state canvases for background,
/// foreground, and border, and any icon sub-regions collapsed into the same painter.
///
/// # Examples
///
/// ```
/// use pictor::{Canvas, Region, State, StretchInsets};
///
/// let canvas = Canvas::new((30.0, 30.0), StretchInsets::uniform(10.0), Vec::new());
/// let region = Region::new("Button").with_background(State::new(["Enabled"], canvas));
/// assert_eq!(region.key, "Button");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Region {
    pub key: String,
    pub background_states: Vec<State>,
    pub foreground_states: Vec<State>,
    pub border_states: Vec<State>,
    pub icon_regions: Vec<Region>,
}

impl Region {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Default::default()
        }
    }

    pub fn with_background(mut self, state: State) -> Self {
        self.background_states.push(state);
        self
    }

    pub fn with_foreground(mut self, state: State) -> Self {
        self.foreground_states.push(state);
        self
    }

    pub fn with_border(mut self, state: State) -> Self {
        self.border_states.push(state);
        self
    }

    /// Adds an icon sub-region. Its states are generated into this region's painter,
    /// using the sub-region's key as the state type prefix.
    pub fn with_icon_region(mut self, region: Region) -> Self {
        self.icon_regions.push(region);
        self
    }
}
