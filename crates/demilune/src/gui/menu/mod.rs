use palette::Srgba;

pub mod canvas;
pub mod item;
pub mod layout;
pub mod model;
pub mod touch;
pub mod view;

pub use canvas::{Canvas, IconName, Paint, PaintStyle, Path, PathSegment, Shadow};
pub use item::{ItemCallback, ItemId, MenuItem, SliceGeometry};
pub use layout::{LayoutParams, MenuLayout, Orientation};
pub use model::{MenuStyle, RadialMenu};
pub use touch::{MenuPhase, MenuState, PointerEvent, PointerPhase, Press, TouchAction};
pub use view::draw;

pub const HALF_TURN: usize = 180; // degrees shared by all slices
pub const DEFAULT_ICON_SIZE: i32 = 64;
pub const DEFAULT_MENU_TO_ITEM_RATIO: f64 = 3.0;
pub const DEFAULT_MENU_SCALE_FACTOR: f64 = 1.0;
pub const DEFAULT_TEXT_SIZE: f64 = 12.0;
pub const DEFAULT_SHADOW_RADIUS: f64 = 5.0;
pub const MENU_STROKE_WIDTH: f64 = 5.0;
pub const BORDER_HOTFIX: f64 = 2.0; // outset of the toggle border arc
pub const ICON_OFFSET_DIVISOR: f64 = 2.5; // toggle icon sits (toggle radius / 2.5) inside the edge

pub const WHITE: Srgba<f64> = Srgba::new(1.0, 1.0, 1.0, 1.0);
pub const GRAY: Srgba<f64> = Srgba::new(0.533, 0.533, 0.533, 1.0);
pub const DARK_GRAY: Srgba<f64> = Srgba::new(0.267, 0.267, 0.267, 1.0);
pub const HOLO_LIGHT_BLUE: Srgba<f64> = Srgba::new(0.2, 0.71, 0.898, 1.0);
