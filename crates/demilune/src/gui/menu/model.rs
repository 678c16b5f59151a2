use super::canvas::{IconName, Paint, PaintStyle, Shadow};
use super::item::{self, ItemId, MenuItem};
use super::layout::{LayoutParams, MenuLayout, Orientation};
use super::touch::{MenuPhase, MenuState, PointerEvent, PointerPhase, Press, TouchAction};
use super::{
    DARK_GRAY, DEFAULT_ICON_SIZE, DEFAULT_MENU_SCALE_FACTOR, DEFAULT_MENU_TO_ITEM_RATIO,
    DEFAULT_SHADOW_RADIUS, DEFAULT_TEXT_SIZE, GRAY, HOLO_LIGHT_BLUE, MENU_STROKE_WIDTH, WHITE,
};
use crate::geometry::{Padding, Point, Size};
use indexmap::IndexMap;
use palette::Srgba;

/// Appearance settings. None of these affect geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuStyle {
    pub text_size: f64,
    pub show_shadows: bool,
    pub shadow_radius: f64,
    pub shadow_color: Srgba<f64>,
    pub open_text: String,
    pub close_text: String,
    pub show_center_text: bool,
    pub show_center_icon: bool,
    pub center_icon: Option<IconName>,
    pub center_background: Srgba<f64>,
    pub center_toggle_background: Srgba<f64>,
    pub center_text_color: Srgba<f64>,
    pub center_toggle_text_color: Srgba<f64>,
    pub menu_background: Srgba<f64>,
    pub(crate) border: Option<Paint>,
}

impl Default for MenuStyle {
    fn default() -> Self {
        Self {
            text_size: DEFAULT_TEXT_SIZE,
            show_shadows: true,
            shadow_radius: DEFAULT_SHADOW_RADIUS,
            shadow_color: GRAY,
            open_text: "Open".to_string(),
            close_text: "Close".to_string(),
            show_center_text: false,
            show_center_icon: false,
            center_icon: None,
            center_background: WHITE,
            center_toggle_background: HOLO_LIGHT_BLUE,
            center_text_color: DARK_GRAY,
            center_toggle_text_color: DARK_GRAY,
            menu_background: WHITE,
            border: None,
        }
    }
}

impl MenuStyle {
    pub fn border(&self) -> Option<&Paint> {
        self.border.as_ref()
    }

    /// Borders are outlines only; whatever style the paint carries is replaced by stroke.
    pub fn set_border(&mut self, border: Option<Paint>) {
        self.border = border.map(|mut paint| {
            paint.style = PaintStyle::Stroke;
            paint
        });
    }

    pub fn shadow(&self) -> Option<Shadow> {
        self.show_shadows.then_some(Shadow {
            radius: self.shadow_radius,
            offset: Point::default(),
            color: self.shadow_color,
        })
    }

    /// Base paint for slices, the menu background and the toggle.
    pub fn menu_paint(&self) -> Paint {
        Paint {
            style: PaintStyle::FillAndStroke,
            color: self.menu_background,
            stroke_width: MENU_STROKE_WIDTH,
            text_size: self.text_size,
            shadow: self.shadow(),
        }
    }
}

pub struct RadialMenu {
    params: LayoutParams,
    layout: MenuLayout,
    style: MenuStyle,
    items: IndexMap<ItemId, MenuItem>,
    state: MenuState,
    repaint_requested: bool,
}

impl RadialMenu {
    pub fn new(style: MenuStyle) -> Self {
        let params = LayoutParams {
            orientation: Orientation::default(),
            size: Size::default(),
            padding: Padding::default(),
            scale_factor: DEFAULT_MENU_SCALE_FACTOR,
            menu_to_item_ratio: DEFAULT_MENU_TO_ITEM_RATIO,
            icon_size: DEFAULT_ICON_SIZE,
        };
        Self {
            layout: MenuLayout::compute(&params),
            params,
            style,
            items: IndexMap::new(),
            state: MenuState::default(),
            repaint_requested: false,
        }
    }

    pub fn layout(&self) -> &MenuLayout {
        &self.layout
    }

    pub fn params(&self) -> &LayoutParams {
        &self.params
    }

    pub fn phase(&self) -> MenuPhase {
        self.state.phase()
    }

    pub fn is_open(&self) -> bool {
        self.state.visible
    }

    pub fn orientation(&self) -> Orientation {
        self.params.orientation
    }

    pub fn style(&self) -> &MenuStyle {
        &self.style
    }

    pub fn set_style(&mut self, style: MenuStyle) {
        self.style = style;
        self.request_repaint();
    }

    pub fn resize(&mut self, size: Size) {
        self.params.size = size;
        self.relayout();
    }

    pub fn set_padding(&mut self, padding: Padding) {
        self.params.padding = padding;
        self.relayout();
    }

    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.params.orientation = orientation;
        self.relayout();
    }

    pub fn set_menu_scale_factor(&mut self, scale_factor: f64) {
        self.params.scale_factor = scale_factor;
        self.relayout();
    }

    /// Ratio of the menu radius to the toggle radius. Non-positive values are ignored.
    pub fn set_menu_to_item_ratio(&mut self, ratio: f64) {
        if !(ratio.is_finite() && ratio > 0.0) {
            log::warn!("Ignoring menu to item ratio {}", ratio);
            return;
        }
        self.params.menu_to_item_ratio = ratio;
        self.relayout();
    }

    pub fn set_icon_size(&mut self, icon_size: i32) {
        self.params.icon_size = icon_size;
        self.relayout();
    }

    fn relayout(&mut self) {
        self.layout = MenuLayout::compute(&self.params);
        self.request_repaint();
    }

    pub fn items(&self) -> impl Iterator<Item = &MenuItem> {
        self.items.values()
    }

    pub fn item(&self, id: &ItemId) -> Option<&MenuItem> {
        self.items.get(id)
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Adds `item` at the end, or replaces the item with the same id in place.
    pub fn add_item(&mut self, mut item: MenuItem) {
        if self.state.pressed_item() == Some(item.id()) {
            item.set_pressed(true);
        }
        self.items.insert(item.id().clone(), item);
        self.request_repaint();
    }

    pub fn remove_item(&mut self, id: &ItemId) -> Option<MenuItem> {
        if self.state.pressed_item() == Some(id) {
            self.state.press = Press::None;
        }
        let removed = self.items.shift_remove(id);
        self.request_repaint();
        removed
    }

    pub fn clear_items(&mut self) {
        if self.state.pressed_item().is_some() {
            self.state.press = Press::None;
        }
        self.items.clear();
        self.request_repaint();
    }

    /// Force-closes the menu.
    pub fn dismiss(&mut self) {
        self.state.visible = false;
        self.request_repaint();
    }

    pub fn center_label(&self) -> &str {
        if self.state.visible {
            &self.style.close_text
        } else {
            &self.style.open_text
        }
    }

    pub fn center_background(&self) -> Srgba<f64> {
        if self.state.is_toggle_pressed() {
            self.style.center_toggle_background
        } else {
            self.style.center_background
        }
    }

    pub fn center_text_color(&self) -> Srgba<f64> {
        if self.state.is_toggle_pressed() {
            self.style.center_toggle_text_color
        } else {
            self.style.center_text_color
        }
    }

    /// Recomputes every slice from the current layout. Runs once per paint pass.
    pub fn arrange_items(&mut self) {
        item::arrange(&mut self.items, &self.layout, self.params.icon_size);
    }

    pub fn request_repaint(&mut self) {
        self.repaint_requested = true;
    }

    pub fn take_repaint_request(&mut self) -> bool {
        std::mem::take(&mut self.repaint_requested)
    }

    pub fn on_pointer(&mut self, event: PointerEvent) -> TouchAction {
        let position = event.position.truncated();
        let action = match event.phase {
            PointerPhase::Down => self.pointer_down(position),
            PointerPhase::Up => self.pointer_up(),
        };
        log::debug!(
            "{:?} at {:?} -> {:?} ({:?})",
            event.phase,
            position,
            self.state.phase(),
            action
        );
        action
    }

    /// Drops the current press without firing anything, for a grab that ends with no
    /// release.
    pub fn cancel_press(&mut self) {
        if self.release_press() != Press::None {
            self.request_repaint();
        }
    }

    /// Empties the press slot and restores the pressed item's normal color.
    fn release_press(&mut self) -> Press {
        let press = std::mem::take(&mut self.state.press);
        if let Press::Item(id) = &press
            && let Some(item) = self.items.get_mut(id)
        {
            item.set_pressed(false);
        }
        press
    }

    fn pointer_down(&mut self, position: Point) -> TouchAction {
        // a press whose release never arrived
        if self.release_press() != Press::None {
            self.request_repaint();
        }

        if self.layout.center_rect.contains(position) {
            self.state.press = Press::Toggle;
            return self.handled();
        }

        if !self.state.visible {
            return TouchAction::ignored();
        }

        match self.hit_item(position) {
            Some(id) => {
                if let Some(item) = self.items.get_mut(&id) {
                    item.set_pressed(true);
                }
                self.state.press = Press::Item(id);
            }
            None => self.state.visible = false,
        }
        self.handled()
    }

    fn pointer_up(&mut self) -> TouchAction {
        match self.release_press() {
            Press::Toggle => {
                self.state.visible = !self.state.visible;
                self.handled()
            }
            Press::Item(id) => {
                if let Some(item) = self.items.get(&id) {
                    item.fire();
                }
                self.handled()
            }
            Press::None => TouchAction::ignored(),
        }
    }

    /// First item, in insertion order, whose box holds `position`.
    fn hit_item(&self, position: Point) -> Option<ItemId> {
        if !self.layout.menu_rect.contains(position) {
            return None;
        }
        self.items
            .values()
            .find(|item| item.bounds().contains(position))
            .map(|item| item.id().clone())
    }

    fn handled(&mut self) -> TouchAction {
        self.request_repaint();
        TouchAction::consumed()
    }
}
