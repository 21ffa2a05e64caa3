//! Viewport-aware placement of an opened content panel.
use super::Menu;
use crate::core::{Point, Rectangle, Size};

/// Viewport width at or below which the panel is clamped to the screen
/// edge instead of overflowing it.
pub const SMALL_SCREEN_WIDTH: f32 = 480.0;

/// Assumed panel width when no measurement is available.
pub const FALLBACK_PANEL_WIDTH: f32 = 160.0;

/// Assumed panel height when no measurement is available.
pub const FALLBACK_PANEL_HEIGHT: f32 = 200.0;

/// Fixed upward offset from the trigger's bottom edge used to flip an
/// unmeasured panel above its trigger, approximating the panel's height
/// plus some spacing.
pub const FLIP_OFFSET: f32 = 250.0;

/// Gap between the trigger and the panel.
pub const PANEL_GAP: f32 = 8.0;

/// The resolved position of an open menu's content panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Where the panel lands, in viewport coordinates.
    pub bounds: Rectangle,

    /// Whether the panel was flipped above its trigger for lack of space
    /// below.
    pub flipped: bool,
}

/// Resolves where the content panel of `menu` should open inside
/// `viewport`.
///
/// The panel is right-aligned on its trigger and placed [`PANEL_GAP`]
/// below it. On viewports at most [`SMALL_SCREEN_WIDTH`] wide the right
/// edge is clamped to the viewport. When the trigger's bottom edge plus
/// the estimated panel height exceeds the viewport height, the panel
/// flips above the trigger: by its measured height when known, by
/// [`FLIP_OFFSET`] otherwise.
pub(super) fn resolve(menu: &Menu, viewport: Size) -> Placement {
    let size = menu
        .panel
        .unwrap_or(Size::new(FALLBACK_PANEL_WIDTH, FALLBACK_PANEL_HEIGHT));

    let trigger = menu.trigger;

    let mut x = trigger.right() - size.width;

    if viewport.width <= SMALL_SCREEN_WIDTH && x + size.width > viewport.width {
        x = viewport.width - size.width;
    }

    let (y, flipped) = if trigger.bottom() + size.height > viewport.height {
        let y = match menu.panel {
            Some(measured) => trigger.y - measured.height - PANEL_GAP,
            None => trigger.bottom() - FLIP_OFFSET,
        };

        (y, true)
    } else {
        (trigger.bottom() + PANEL_GAP, false)
    };

    Placement {
        bounds: Rectangle::new(Point::new(x, y), size),
        flipped,
    }
}
