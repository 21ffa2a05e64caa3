//! Handle events of a user interface.
use crate::mouse;
use crate::touch;
use crate::window;

/// A user interface event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// A mouse event
    Mouse(mouse::Event),

    /// A touch event
    Touch(touch::Event),

    /// A window event
    Window(window::Event),
}

/// The status of an [`Event`] after being processed.
///
/// A `Captured` event has been consumed by a controller and the platform
/// should suppress its default behavior, e.g. scrolling while a finger
/// rests on a menu trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The [`Event`] was **NOT** handled by any controller.
    Ignored,

    /// The [`Event`] was handled and processed by a controller.
    Captured,
}

impl Status {
    /// Merges two [`Status`] into one.
    ///
    /// `Captured` takes precedence over `Ignored`:
    ///
    /// ```
    /// use foldkit_core::event::Status;
    ///
    /// assert_eq!(Status::Ignored.merge(Status::Ignored), Status::Ignored);
    /// assert_eq!(Status::Ignored.merge(Status::Captured), Status::Captured);
    /// assert_eq!(Status::Captured.merge(Status::Ignored), Status::Captured);
    /// assert_eq!(Status::Captured.merge(Status::Captured), Status::Captured);
    /// ```
    pub fn merge(self, b: Self) -> Self {
        match self {
            Status::Ignored => b,
            Status::Captured => Status::Captured,
        }
    }
}
