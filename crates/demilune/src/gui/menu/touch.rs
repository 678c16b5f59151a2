use super::item::ItemId;
use crate::geometry::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerPhase {
    Down,
    Up,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub phase: PointerPhase,
    pub position: Point,
}

impl PointerEvent {
    pub fn down(x: f64, y: f64) -> Self {
        Self {
            phase: PointerPhase::Down,
            position: Point::new(x, y),
        }
    }

    pub fn up(x: f64, y: f64) -> Self {
        Self {
            phase: PointerPhase::Up,
            position: Point::new(x, y),
        }
    }
}

/// What is currently held down. A single slot keeps toggle and item presses exclusive.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Press {
    #[default]
    None,
    Toggle,
    Item(ItemId),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MenuState {
    pub visible: bool,
    pub press: Press,
}

/// Flattened view of [`MenuState`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuPhase {
    Idle,
    Open,
    TogglePressed,
    ItemPressed(ItemId),
}

impl MenuState {
    pub fn phase(&self) -> MenuPhase {
        match (&self.press, self.visible) {
            (Press::Toggle, _) => MenuPhase::TogglePressed,
            (Press::Item(id), _) => MenuPhase::ItemPressed(id.clone()),
            (Press::None, true) => MenuPhase::Open,
            (Press::None, false) => MenuPhase::Idle,
        }
    }

    pub fn is_toggle_pressed(&self) -> bool {
        self.press == Press::Toggle
    }

    pub fn pressed_item(&self) -> Option<&ItemId> {
        match &self.press {
            Press::Item(id) => Some(id),
            _ => None,
        }
    }
}

/// Outcome of one pointer event. Repaints are requested on the menu itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TouchAction {
    /// The event was used by the menu and should not reach views underneath.
    pub consumed: bool,
}

impl TouchAction {
    pub fn consumed() -> Self {
        Self { consumed: true }
    }

    pub fn ignored() -> Self {
        Self::default()
    }
}
