//! Handle window events.
use crate::Size;

/// A window event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// The window was resized to the given logical size.
    Resized(Size),

    /// The visibility of the window contents changed, e.g. the hosting
    /// tab was hidden or brought back to the foreground.
    VisibilityChanged {
        /// Whether the window contents are now visible.
        visible: bool,
    },
}
