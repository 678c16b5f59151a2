use crate::config::{self, Config};
use crate::events::AppEvent;
use crate::geometry::Size;
use crate::gui::icon::IconCache;
use crate::gui::menu::{self, ItemCallback, ItemId, MenuItem, PointerEvent, RadialMenu};
use crate::gui::painter::CairoCanvas;
use crate::gui::{theme, window};
use crate::sys::launch::{self, ExecCommand};
use gtk::prelude::*;
use gtk4 as gtk;
use relm4::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

pub struct AppModel {
    pub menu: Rc<RefCell<RadialMenu>>,
    pub icons: Rc<RefCell<IconCache>>,
    pub visible: bool,
    pub root: gtk::ApplicationWindow,
    pub drawing_area: gtk::DrawingArea,
}

#[derive(Debug)]
pub enum AppMsg {
    Show,
    Hide,
    Dismiss,
    ConfigReload,
}

impl From<AppEvent> for AppMsg {
    fn from(event: AppEvent) -> Self {
        match event {
            AppEvent::Show => AppMsg::Show,
            AppEvent::Hide => AppMsg::Hide,
            AppEvent::Dismiss => AppMsg::Dismiss,
            AppEvent::ConfigReload => AppMsg::ConfigReload,
        }
    }
}

fn launcher(exec: ExecCommand) -> Rc<dyn ItemCallback> {
    Rc::new(move |id: &ItemId| {
        log::info!("Item '{}' pressed, running {}", id, exec);
        if let Err(e) = launch::launch(&exec) {
            log::error!("Failed to run '{}': {}", exec, e);
        }
    })
}

pub fn menu_items(config: &Config) -> Vec<MenuItem> {
    config
        .items
        .iter()
        .map(|item| item.to_menu_item(item.exec.clone().map(launcher)))
        .collect()
}

/// Replaces style, geometry inputs and items. Open/closed state is kept.
pub fn apply_config(menu: &mut RadialMenu, config: &Config) {
    menu.set_style(config.style());
    menu.set_orientation(config.orientation);
    menu.set_padding(config.padding);
    menu.set_menu_scale_factor(config.menu_scale_factor);
    menu.set_menu_to_item_ratio(config.menu_to_item_ratio);
    menu.set_icon_size(config.icon_size);

    menu.clear_items();
    for item in menu_items(config) {
        menu.add_item(item);
    }
}

fn flush_repaint(menu: &RefCell<RadialMenu>, area: &gtk::DrawingArea) {
    if menu.borrow_mut().take_repaint_request() {
        area.queue_draw();
    }
}

/// Routes press/release into the menu. Presses the menu handles claim the gesture;
/// the rest are denied so other controllers see them. A cancelled sequence drops the press.
fn attach_pointer(area: &gtk::DrawingArea, menu: &Rc<RefCell<RadialMenu>>) {
    let gesture = gtk::GestureClick::new();

    {
        let (menu, area) = (menu.clone(), area.clone());
        gesture.connect_pressed(move |gesture, _, x, y| {
            let action = menu.borrow_mut().on_pointer(PointerEvent::down(x, y));
            let state = if action.consumed {
                gtk::EventSequenceState::Claimed
            } else {
                gtk::EventSequenceState::Denied
            };
            gesture.set_state(state);
            flush_repaint(&menu, &area);
        });
    }

    {
        let (menu, area) = (menu.clone(), area.clone());
        gesture.connect_cancel(move |_, _| {
            menu.borrow_mut().cancel_press();
            flush_repaint(&menu, &area);
        });
    }

    {
        let (menu, area) = (menu.clone(), area.clone());
        gesture.connect_released(move |_, _, x, y| {
            // item callbacks run inside this borrow and must not reach back into the menu
            let action = menu.borrow_mut().on_pointer(PointerEvent::up(x, y));
            if !action.consumed {
                log::debug!("Release at ({}, {}) not handled", x, y);
            }
            flush_repaint(&menu, &area);
        });
    }

    area.add_controller(gesture);
}

fn attach_resize(area: &gtk::DrawingArea, menu: &Rc<RefCell<RadialMenu>>) {
    let menu = menu.clone();
    area.connect_resize(move |area, width, height| {
        menu.borrow_mut().resize(Size::new(width, height));
        flush_repaint(&menu, area);
    });
}

#[relm4::component(pub)]
impl SimpleComponent for AppModel {
    type Init = (Config, async_channel::Receiver<AppEvent>);
    type Input = AppMsg;
    type Output = ();

    view! {
        #[root]
        #[name = "window"]
        gtk::ApplicationWindow {
            set_title: Some("Demilune"),
            #[watch]
            set_visible: model.visible,
            add_css_class: "demilune-window",
            set_decorated: false,

            add_controller = gtk::EventControllerKey {
                connect_key_pressed[sender] => move |_, key, _, _| {
                    if key == gtk::gdk::Key::Escape {
                        sender.input(AppMsg::Dismiss);
                        return glib::Propagation::Stop;
                    }
                    glib::Propagation::Proceed
                }
            },

            #[name = "drawing_area"]
            gtk::DrawingArea {
                set_hexpand: true,
                set_vexpand: true,
                add_css_class: "demilune-drawing-area",
            }
        }
    }

    fn init(
        init: Self::Init,
        root: Self::Root,
        sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let (config, rx) = init;

        theme::load_css();
        window::init_layer_shell(&root);
        window::anchor_to_edge(&root, config.orientation, config.width, config.height);

        let mut radial = RadialMenu::new(config.style());
        apply_config(&mut radial, &config);
        let menu = Rc::new(RefCell::new(radial));
        let icons = Rc::new(RefCell::new(IconCache::new(config.icon_size)));

        let model = AppModel {
            menu: menu.clone(),
            icons: icons.clone(),
            visible: true,
            root: root.clone(),
            drawing_area: gtk::DrawingArea::default(),
        };

        let widgets = view_output!();

        let mut model = model;
        model.drawing_area = widgets.drawing_area.clone();

        attach_pointer(&widgets.drawing_area, &menu);
        attach_resize(&widgets.drawing_area, &menu);

        widgets
            .drawing_area
            .set_draw_func(move |_, cr, _, _| {
                let mut menu = menu.borrow_mut();
                let mut icons = icons.borrow_mut();
                let mut canvas = CairoCanvas::new(cr, &mut icons);
                if let Err(e) = menu::draw(&mut canvas, &mut menu) {
                    log::error!("Drawing error: {}", e);
                }
            });

        let sender_clone = sender.clone();
        relm4::spawn(async move {
            while let Ok(event) = rx.recv().await {
                sender_clone.input(AppMsg::from(event));
            }
        });

        ComponentParts { model, widgets }
    }

    fn update(&mut self, msg: Self::Input, _sender: ComponentSender<Self>) {
        match msg {
            AppMsg::Show => {
                self.visible = true;
                self.drawing_area.queue_draw();
            }
            AppMsg::Hide => {
                self.menu.borrow_mut().dismiss();
                self.visible = false;
            }
            AppMsg::Dismiss => {
                self.menu.borrow_mut().dismiss();
                flush_repaint(&self.menu, &self.drawing_area);
            }
            AppMsg::ConfigReload => match config::load_config() {
                Ok(new_config) => {
                    apply_config(&mut self.menu.borrow_mut(), &new_config);
                    *self.icons.borrow_mut() = IconCache::new(new_config.icon_size);
                    window::anchor_to_edge(
                        &self.root,
                        new_config.orientation,
                        new_config.width,
                        new_config.height,
                    );
                    flush_repaint(&self.menu, &self.drawing_area);
                    log::info!("Configuration reloaded");
                }
                Err(e) => log::error!("Failed to reload config: {}", e),
            },
        }
    }
}
