//! The core vocabulary of foldkit.
//!
//! This crate holds the geometry and input-event types shared by every
//! foldkit controller. It contains no interaction logic of its own.
pub mod event;
pub mod mouse;
pub mod touch;
pub mod window;

mod point;
mod rectangle;
mod size;
mod vector;

pub use event::Event;
pub use point::Point;
pub use rectangle::Rectangle;
pub use size::Size;
pub use vector::Vector;
