//! Exclusive disclosure menus with pointer and touch input normalization.
//!
//! A [`MenuSet`] owns every disclosure menu of a page and interprets raw
//! input as open/close commands: opening one menu closes all others, an
//! interaction outside an open menu dismisses it, and the opened content
//! panel is placed so it stays within the viewport.
//!
//! Touch and pointer input produce equivalent outcomes. While a finger
//! rests on a trigger the controller captures the event stream, which the
//! host should translate into suppressing the platform's default scroll
//! behavior, and reports a transient highlight for the trigger.
mod placement;


pub use placement::{
    FALLBACK_PANEL_HEIGHT, FALLBACK_PANEL_WIDTH, FLIP_OFFSET, PANEL_GAP, Placement,
    SMALL_SCREEN_WIDTH,
};

use crate::core::event::{self, Event};
use crate::core::{Point, Rectangle, Size, mouse, touch, window};

/// The identifier of a [`Menu`] within a [`MenuSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Id(usize);

/// A single disclosure menu: a trigger region and its content panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Menu {
    /// The on-screen bounding box of the trigger.
    pub trigger: Rectangle,

    /// The measured size of the content panel, when known.
    ///
    /// Placement falls back to approximated dimensions for an unmeasured
    /// panel; see [`Placement`].
    pub panel: Option<Size>,
}

impl Menu {
    /// Creates a [`Menu`] with the given trigger bounds and an unmeasured
    /// content panel.
    pub fn new(trigger: Rectangle) -> Self {
        Self {
            trigger,
            panel: None,
        }
    }

    /// Sets the measured [`Size`] of the content panel.
    pub fn panel(mut self, size: Size) -> Self {
        self.panel = Some(size);
        self
    }
}

#[derive(Debug, Clone)]
struct State {
    menu: Menu,
    is_open: bool,
    placement: Option<Placement>,
}

/// A set of disclosure menus with single-open-at-a-time semantics.
///
/// At most one menu in the set is open at any observable point: opening a
/// menu closes every other one first. All operations are defensive; an
/// [`Id`] that does not belong to the set is a no-op, never an error.
#[derive(Debug, Clone, Default)]
pub struct MenuSet {
    menus: Vec<State>,
    highlighted: Option<Id>,
    finger: Option<(touch::Finger, Id)>,
    pressed: Option<Id>,
}

impl MenuSet {
    /// Creates an empty [`MenuSet`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a [`Menu`] to the set and returns its [`Id`].
    pub fn push(&mut self, menu: Menu) -> Id {
        let id = Id(self.menus.len());

        self.menus.push(State {
            menu,
            is_open: false,
            placement: None,
        });

        id
    }

    /// The amount of menus in the set.
    pub fn len(&self) -> usize {
        self.menus.len()
    }

    /// Returns true if the set contains no menus.
    pub fn is_empty(&self) -> bool {
        self.menus.is_empty()
    }

    /// Returns true if the menu with the given [`Id`] is open.
    pub fn is_open(&self, id: Id) -> bool {
        self.menus.get(id.0).is_some_and(|state| state.is_open)
    }

    /// Returns the [`Id`] of the open menu, if any.
    pub fn open(&self) -> Option<Id> {
        self.menus
            .iter()
            .position(|state| state.is_open)
            .map(Id)
    }

    /// Returns true if the trigger of the given menu should display the
    /// transient contact highlight.
    pub fn is_highlighted(&self, id: Id) -> bool {
        self.highlighted == Some(id)
    }

    /// Returns the resolved [`Placement`] of the given menu's content
    /// panel, if the menu is open.
    pub fn placement(&self, id: Id) -> Option<Placement> {
        self.menus
            .get(id.0)
            .filter(|state| state.is_open)
            .and_then(|state| state.placement)
    }

    /// Updates the trigger bounds of the given menu, repositioning its
    /// panel if it is open.
    pub fn move_trigger(&mut self, id: Id, trigger: Rectangle, viewport: Size) {
        let Some(state) = self.menus.get_mut(id.0) else {
            return;
        };

        state.menu.trigger = trigger;

        if state.is_open {
            state.placement = Some(placement::resolve(&state.menu, viewport));
        }
    }

    /// Records the measured [`Size`] of the given menu's content panel,
    /// repositioning it if the menu is open.
    pub fn measure_panel(&mut self, id: Id, size: Size, viewport: Size) {
        let Some(state) = self.menus.get_mut(id.0) else {
            return;
        };

        state.menu.panel = Some(size);

        if state.is_open {
            state.placement = Some(placement::resolve(&state.menu, viewport));
        }
    }

    /// Toggles the menu with the given [`Id`].
    ///
    /// An open menu is closed. A closed menu closes every other open menu
    /// first, then opens with its panel placed inside the viewport.
    pub fn activate(&mut self, id: Id, viewport: Size) {
        let Some(state) = self.menus.get(id.0) else {
            return;
        };

        if state.is_open {
            log::trace!("closing menu {id:?}");

            self.close(id);
        } else {
            log::trace!("opening menu {id:?}");

            self.close_all();

            let state = &mut self.menus[id.0];
            state.is_open = true;
            state.placement = Some(placement::resolve(&state.menu, viewport));
        }
    }

    /// Closes every open menu whose trigger and placed panel both exclude
    /// the given [`Point`].
    ///
    /// Must be fed both pointer-press and finger-press interactions so the
    /// dismissal behaves the same across input modalities.
    pub fn outside_interaction(&mut self, point: Point) {
        let outside: Vec<Id> = self
            .menus
            .iter()
            .enumerate()
            .filter(|(_, state)| {
                state.is_open
                    && !state.menu.trigger.contains(point)
                    && !state
                        .placement
                        .is_some_and(|placement| placement.bounds.contains(point))
            })
            .map(|(index, _)| Id(index))
            .collect();

        for id in outside {
            self.close(id);
        }
    }

    /// Recomputes the panel placement of every open menu against the given
    /// viewport. Runs automatically when a [`window::Event::Resized`] is
    /// fed to [`update`](Self::update).
    pub fn reposition(&mut self, viewport: Size) {
        for state in &mut self.menus {
            if state.is_open {
                state.placement = Some(placement::resolve(&state.menu, viewport));
            }
        }
    }

    /// Processes a user interface [`Event`], normalizing pointer and touch
    /// input into the operations above.
    ///
    /// Returns [`event::Status::Captured`] when the platform's default
    /// behavior for the event should be suppressed.
    pub fn update(&mut self, event: &Event, viewport: Size) -> event::Status {
        match event {
            Event::Touch(touch::Event::FingerPressed { id, position }) => {
                if let Some(menu_id) = self.trigger_at(*position) {
                    self.highlighted = Some(menu_id);
                    self.finger = Some((*id, menu_id));

                    event::Status::Captured
                } else {
                    self.outside_interaction(*position);

                    event::Status::Ignored
                }
            }
            Event::Touch(touch::Event::FingerMoved { id, .. }) => {
                // Keep suppressing scroll while the finger that started on
                // a trigger is still down.
                if self.finger.is_some_and(|(finger, _)| finger == *id) {
                    event::Status::Captured
                } else {
                    event::Status::Ignored
                }
            }
            Event::Touch(touch::Event::FingerLifted { id, .. }) => {
                self.highlighted = None;

                if let Some((_, menu_id)) = self.finger.take_if(|(finger, _)| finger == id) {
                    self.activate(menu_id, viewport);

                    event::Status::Captured
                } else {
                    event::Status::Ignored
                }
            }
            Event::Touch(touch::Event::FingerLost { id, .. }) => {
                if self.finger.is_some_and(|(finger, _)| finger == *id) {
                    self.highlighted = None;
                    self.finger = None;
                }

                event::Status::Ignored
            }
            Event::Mouse(mouse::Event::ButtonPressed { button, position }) => {
                match self.trigger_at(*position) {
                    Some(menu_id) if *button == mouse::Button::Left => {
                        self.highlighted = Some(menu_id);
                        self.pressed = Some(menu_id);

                        event::Status::Captured
                    }
                    _ => {
                        self.outside_interaction(*position);

                        event::Status::Ignored
                    }
                }
            }
            Event::Mouse(mouse::Event::ButtonReleased { button, position }) => {
                self.highlighted = None;

                // A click only counts when press and release land on the
                // same trigger.
                let pressed = if *button == mouse::Button::Left {
                    self.pressed.take()
                } else {
                    None
                };

                match self.trigger_at(*position) {
                    Some(menu_id) if pressed == Some(menu_id) => {
                        self.activate(menu_id, viewport);

                        event::Status::Captured
                    }
                    _ => event::Status::Ignored,
                }
            }
            Event::Mouse(mouse::Event::CursorMoved { position }) => {
                // Mirrors losing the press highlight when the cursor
                // leaves the trigger before release.
                if let Some(id) = self.highlighted {
                    let over = self
                        .menus
                        .get(id.0)
                        .is_some_and(|state| state.menu.trigger.contains(*position));

                    if !over {
                        self.highlighted = None;
                    }
                }

                event::Status::Ignored
            }
            Event::Mouse(mouse::Event::CursorLeft) => {
                self.highlighted = None;

                event::Status::Ignored
            }
            Event::Window(window::Event::Resized(size)) => {
                self.reposition(*size);

                event::Status::Ignored
            }
            Event::Window(window::Event::VisibilityChanged { .. }) => event::Status::Ignored,
        }
    }

    fn trigger_at(&self, point: Point) -> Option<Id> {
        self.menus
            .iter()
            .position(|state| state.menu.trigger.contains(point))
            .map(Id)
    }

    fn close(&mut self, id: Id) {
        if let Some(state) = self.menus.get_mut(id.0) {
            state.is_open = false;
            state.placement = None;
        }
    }

    fn close_all(&mut self) {
        for state in &mut self.menus {
            state.is_open = false;
            state.placement = None;
        }
    }
}
