use super::canvas::{IconName, Path};
use super::layout::MenuLayout;
use super::{DARK_GRAY, HALF_TURN, HOLO_LIGHT_BLUE, WHITE};
use crate::geometry::{Point, Rect};
use derive_more::{AsRef, Deref, Display, From, Into};
use indexmap::IndexMap;
use palette::Srgba;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::rc::Rc;

#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, Deref, From, Into, AsRef,
)]
#[serde(transparent)]
pub struct ItemId(String);

crate::impl_string_newtype!(ItemId);

/// Invoked once per completed press/release on an item.
pub trait ItemCallback {
    fn on_item_pressed(&self, id: &ItemId);
}

impl<F: Fn(&ItemId)> ItemCallback for F {
    fn on_item_pressed(&self, id: &ItemId) {
        self(id)
    }
}

/// Per-item share of the half-disc, in whole degrees.
pub fn sweep_angle(count: usize) -> f64 {
    match count {
        0 => 0.0,
        n => (HALF_TURN / n) as f64,
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SliceGeometry {
    pub start: f64,
    pub sweep: f64,
    pub path: Path,
    pub border: Path,
    pub bounds: Rect,
    pub icon_rect: Rect,
}

impl SliceGeometry {
    pub fn compute(layout: &MenuLayout, start: f64, sweep: f64, icon_size: i32) -> Self {
        let (outer, inner) = (layout.outer_radius(), layout.inner_radius());
        let anchor = layout.anchor;
        let end = start + sweep;

        let mut path = Path::new();
        path.move_to(anchor.on_circle(outer, start))
            .arc_to(layout.menu_rect, start, sweep)
            .line_to(anchor.on_circle(inner, end))
            .arc_to(layout.center_rect, end, -sweep)
            .close();

        let mid = start + sweep / 2.0;
        let icon_center = anchor.on_circle((inner + outer) / 2.0, mid);
        let half_icon = icon_size as f64 / 2.0;

        Self {
            start,
            sweep,
            border: path.clone(),
            path,
            bounds: sector_bounds(anchor, inner, outer, start, sweep),
            icon_rect: Rect::from_center(icon_center, half_icon, half_icon),
        }
    }
}

/// Axis-aligned box around an annular sector. Used as the hit region, so touches in the
/// box corners outside the actual wedge still count for this slice.
pub fn sector_bounds(center: Point, inner: f64, outer: f64, start: f64, sweep: f64) -> Rect {
    let start = start.rem_euclid(360.0);
    let end = start + sweep;

    let corners = [
        center.on_circle(outer, start),
        center.on_circle(outer, end),
        center.on_circle(inner, start),
        center.on_circle(inner, end),
    ];
    let extrema = (0..=8)
        .map(|k| k as f64 * 90.0)
        .filter(|a| *a >= start && *a <= end)
        .map(|a| center.on_circle(outer, a));

    Rect::enclosing(corners.into_iter().chain(extrema)).unwrap_or_default()
}

#[derive(Clone)]
pub struct MenuItem {
    id: ItemId,
    pub text: String,
    pub normal_color: Srgba<f64>,
    pub selected_color: Srgba<f64>,
    pub text_color: Srgba<f64>,
    pub icon: Option<IconName>,
    background_color: Srgba<f64>,
    callback: Option<Rc<dyn ItemCallback>>,
    slice: SliceGeometry,
}

impl fmt::Debug for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MenuItem")
            .field("id", &self.id)
            .field("text", &self.text)
            .field("background_color", &self.background_color)
            .field("icon", &self.icon)
            .field("has_callback", &self.callback.is_some())
            .finish_non_exhaustive()
    }
}

impl MenuItem {
    pub fn new(id: impl Into<ItemId>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            normal_color: WHITE,
            selected_color: HOLO_LIGHT_BLUE,
            text_color: DARK_GRAY,
            icon: None,
            background_color: WHITE,
            callback: None,
            slice: SliceGeometry::default(),
        }
    }

    pub fn with_colors(mut self, normal: Srgba<f64>, selected: Srgba<f64>) -> Self {
        self.normal_color = normal;
        self.selected_color = selected;
        self.background_color = normal;
        self
    }

    pub fn with_text_color(mut self, color: Srgba<f64>) -> Self {
        self.text_color = color;
        self
    }

    pub fn with_icon(mut self, icon: impl Into<IconName>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn with_callback(mut self, callback: Rc<dyn ItemCallback>) -> Self {
        self.callback = Some(callback);
        self
    }

    pub fn id(&self) -> &ItemId {
        &self.id
    }

    pub fn background_color(&self) -> Srgba<f64> {
        self.background_color
    }

    pub fn slice(&self) -> &SliceGeometry {
        &self.slice
    }

    pub fn bounds(&self) -> Rect {
        self.slice.bounds
    }

    pub fn set_pressed(&mut self, pressed: bool) {
        self.background_color = if pressed {
            self.selected_color
        } else {
            self.normal_color
        };
    }

    pub fn fire(&self) {
        if let Some(callback) = &self.callback {
            callback.on_item_pressed(&self.id);
        }
    }
}

/// Hands out consecutive slices in insertion order, starting at the layout's start angle.
pub fn arrange(items: &mut IndexMap<ItemId, MenuItem>, layout: &MenuLayout, icon_size: i32) {
    let sweep = sweep_angle(items.len());
    let mut start = layout.start_angle;
    for item in items.values_mut() {
        item.slice = SliceGeometry::compute(layout, start, sweep, icon_size);
        start += sweep;
    }
}
