//! foldkit is a renderer-agnostic toolkit for disclosure UI: exclusive
//! collapsible menus, single-open accordion panels, and a privacy-friendly
//! page-view beacon.
//!
//! The toolkit holds authoritative widget state in explicit controllers
//! instantiated once per page, rather than ambient global listeners. Feed
//! them the [`Event`] stream of your shell and render from the
//! presentation facts they expose; nothing here draws, and nothing here
//! ever panics its way past an interaction.
//!
//! # Example
//! A hamburger menu that opens on click and stays inside the viewport:
//!
//! ```
//! use foldkit::menu::{Menu, MenuSet};
//! use foldkit::{Event, Point, Rectangle, Size, mouse};
//!
//! let viewport = Size::new(1024.0, 768.0);
//!
//! let mut menus = MenuSet::new();
//! let hamburger = menus.push(
//!     Menu::new(Rectangle::new(Point::new(980.0, 4.0), Size::new(40.0, 32.0)))
//!         .panel(Size::new(160.0, 220.0)),
//! );
//!
//! let click = |position| {
//!     [
//!         Event::Mouse(mouse::Event::ButtonPressed {
//!             button: mouse::Button::Left,
//!             position,
//!         }),
//!         Event::Mouse(mouse::Event::ButtonReleased {
//!             button: mouse::Button::Left,
//!             position,
//!         }),
//!     ]
//! };
//!
//! for event in click(Point::new(990.0, 10.0)) {
//!     let _ = menus.update(&event, viewport);
//! }
//!
//! assert!(menus.is_open(hamburger));
//! assert!(menus.placement(hamburger).is_some());
//! ```
pub use foldkit_beacon as beacon;
pub use foldkit_core as core;

pub use foldkit_core::{Event, Point, Rectangle, Size, Vector, event, mouse, touch, window};
pub use foldkit_widget::{Accordion, MenuSet, accordion, menu};

pub use event::Status;
