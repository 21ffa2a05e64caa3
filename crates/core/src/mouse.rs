//! Track mouse input.
use crate::Point;

/// A mouse event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// A mouse button was pressed.
    ButtonPressed {
        /// The button that was pressed.
        button: Button,
        /// The position of the cursor when the button was pressed.
        position: Point,
    },

    /// A mouse button was released.
    ButtonReleased {
        /// The button that was released.
        button: Button,
        /// The position of the cursor when the button was released.
        position: Point,
    },

    /// The mouse cursor was moved.
    CursorMoved {
        /// The new position of the cursor.
        position: Point,
    },

    /// The mouse cursor left the window.
    CursorLeft,
}

/// The button of a mouse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    /// The left mouse button.
    Left,

    /// The right mouse button.
    Right,

    /// The middle (wheel) button.
    Middle,
}
