//! Single-open accordion panels with explicit open state.
//!
//! Open/closed is authoritative state here. The rendered content height,
//! the `+`/`–` indicator glyph, and the title highlight are all derived
//! presentation facts, never the other way around.

/// The indicator glyph of a collapsed panel title.
pub const COLLAPSED_INDICATOR: char = '+';

/// The indicator glyph of an expanded panel title.
pub const EXPANDED_INDICATOR: char = '–';

/// A title/content pair of an [`Accordion`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Panel {
    /// The natural height of the content block when fully expanded.
    pub content_height: f32,

    is_open: bool,
}

impl Panel {
    /// Creates a closed [`Panel`] with the given natural content height.
    pub fn new(content_height: f32) -> Self {
        Self {
            content_height,
            is_open: false,
        }
    }

    /// Returns true if the panel is expanded.
    pub fn is_open(self) -> bool {
        self.is_open
    }
}

/// A group of sibling panels where at most one is expanded at a time.
///
/// Clicking the title of the expanded panel collapses it; clicking the
/// title of a collapsed panel collapses every sibling and expands it.
#[derive(Debug, Clone, Default)]
pub struct Accordion {
    panels: Vec<Panel>,
}

impl Accordion {
    /// Creates an empty [`Accordion`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a closed [`Panel`] with the given natural content height and
    /// returns its index.
    pub fn push(&mut self, content_height: f32) -> usize {
        self.panels.push(Panel::new(content_height));

        self.panels.len() - 1
    }

    /// The amount of panels in the group.
    pub fn len(&self) -> usize {
        self.panels.len()
    }

    /// Returns true if the group contains no panels.
    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    /// Returns the [`Panel`] at the given index.
    pub fn get(&self, index: usize) -> Option<Panel> {
        self.panels.get(index).copied()
    }

    /// Returns the index of the expanded panel, if any.
    pub fn open(&self) -> Option<usize> {
        self.panels.iter().position(|panel| panel.is_open)
    }

    /// Handles a click on the title of the panel at `index`.
    ///
    /// An expanded panel collapses; a collapsed one collapses all of its
    /// siblings and expands. An out-of-range index is a no-op.
    pub fn toggle(&mut self, index: usize) {
        let Some(panel) = self.panels.get(index) else {
            return;
        };

        if panel.is_open {
            self.panels[index].is_open = false;
        } else {
            for panel in &mut self.panels {
                panel.is_open = false;
            }

            self.panels[index].is_open = true;
        }
    }

    /// The height the content block at `index` should render at: its
    /// natural height when expanded, zero otherwise.
    pub fn rendered_height(&self, index: usize) -> f32 {
        self.panels
            .get(index)
            .filter(|panel| panel.is_open)
            .map_or(0.0, |panel| panel.content_height)
    }

    /// The expand/collapse glyph the title at `index` should display.
    pub fn indicator(&self, index: usize) -> char {
        if self.panels.get(index).is_some_and(|panel| panel.is_open) {
            EXPANDED_INDICATOR
        } else {
            COLLAPSED_INDICATOR
        }
    }

    /// Returns true if the title at `index` should display the active
    /// highlight background.
    pub fn is_highlighted(&self, index: usize) -> bool {
        self.panels.get(index).is_some_and(|panel| panel.is_open)
    }
}
