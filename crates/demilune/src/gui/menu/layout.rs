use super::{BORDER_HOTFIX, ICON_OFFSET_DIVISOR};
use crate::geometry::{Padding, Point, Rect, Size};
use serde_with::{DeserializeFromStr, SerializeDisplay};
use strum::{Display as StrumDisplay, EnumIter, EnumString};

/// Screen edge the half-disc is anchored to.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    SerializeDisplay,
    DeserializeFromStr,
    EnumString,
    EnumIter,
    StrumDisplay,
)]
#[strum(ascii_case_insensitive)]
pub enum Orientation {
    #[strum(to_string = "right", serialize = "vertical-right", serialize = "0")]
    VerticalRight,
    #[strum(to_string = "left", serialize = "vertical-left", serialize = "1")]
    VerticalLeft,
    #[strum(to_string = "top", serialize = "horizontal-top", serialize = "2")]
    HorizontalTop,
    #[default]
    #[strum(to_string = "bottom", serialize = "horizontal-bottom", serialize = "3")]
    HorizontalBottom,
}

impl Orientation {
    /// Degrees, clockwise from +x, where the first slice begins.
    pub fn start_angle(&self) -> f64 {
        match self {
            Self::VerticalRight => 90.0,
            Self::VerticalLeft => 270.0,
            Self::HorizontalTop => 0.0,
            Self::HorizontalBottom => 180.0,
        }
    }

    pub fn anchor(&self, size: Size) -> Point {
        let (w, h) = (size.width, size.height);
        let (x, y) = match self {
            Self::VerticalRight => (w, h / 2),
            Self::VerticalLeft => (0, h / 2),
            Self::HorizontalTop => (w / 2, 0),
            Self::HorizontalBottom => (w / 2, h),
        };
        Point::new(x as f64, y as f64)
    }

    /// Unit vector from the anchor into the visible half of the view.
    pub fn inward(&self) -> (f64, f64) {
        match self {
            Self::VerticalRight => (-1.0, 0.0),
            Self::VerticalLeft => (1.0, 0.0),
            Self::HorizontalTop => (0.0, 1.0),
            Self::HorizontalBottom => (0.0, -1.0),
        }
    }
}

/// Everything the layout depends on. A change to any field requires a new [`MenuLayout`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutParams {
    pub orientation: Orientation,
    pub size: Size,
    pub padding: Padding,
    pub scale_factor: f64,
    pub menu_to_item_ratio: f64,
    pub icon_size: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MenuLayout {
    pub radius: f64,
    pub menu_rect: Rect,
    pub center_rect: Rect,
    pub border_rect: Rect,
    pub icon_rect: Rect,
    pub start_angle: f64,
    pub anchor: Point,
}

impl MenuLayout {
    pub fn compute(params: &LayoutParams) -> Self {
        let radius = menu_radius(params.size, params.padding, params.scale_factor);

        let (menu_rect, start_angle, anchor) = compute_rect(
            params.orientation,
            params.size,
            radius,
            params.menu_to_item_ratio,
            false,
        );
        let (center_rect, _, _) = compute_rect(
            params.orientation,
            params.size,
            radius,
            params.menu_to_item_ratio,
            true,
        );

        let icon_rect = center_icon_rect(
            params.orientation,
            anchor,
            radius,
            params.menu_to_item_ratio,
            params.icon_size,
        );

        log::debug!(
            "layout {:?}: radius {} menu {:?} center {:?}",
            params.orientation,
            radius,
            menu_rect,
            center_rect
        );

        Self {
            radius,
            menu_rect,
            center_rect,
            // stroke overdraw at the surface edge leaves background visible without the margin
            border_rect: center_rect.outset(BORDER_HOTFIX),
            icon_rect,
            start_angle,
            anchor,
        }
    }

    pub fn outer_radius(&self) -> f64 {
        self.menu_rect.width() / 2.0
    }

    pub fn inner_radius(&self) -> f64 {
        self.center_rect.width() / 2.0
    }
}

/// Diameter follows the shorter side of the view; padding on that axis is subtracted
/// from the half diameter before scaling.
pub fn menu_radius(size: Size, padding: Padding, scale_factor: f64) -> f64 {
    let (diameter, pad) = if size.width > size.height {
        (size.height, padding.top + padding.bottom)
    } else {
        (size.width, padding.left + padding.right)
    };
    scale_factor * (diameter / 2 - pad) as f64
}

/// Square rect centered on the anchor, half of which lies outside the view.
/// Returns the rect together with the start angle and anchor for `orientation`.
pub fn compute_rect(
    orientation: Orientation,
    size: Size,
    radius: f64,
    menu_to_item_ratio: f64,
    is_center_button: bool,
) -> (Rect, f64, Point) {
    let extent = if is_center_button {
        (radius / menu_to_item_ratio) as i32
    } else {
        radius as i32
    } as f64;
    let anchor = orientation.anchor(size);
    (
        Rect::from_center(anchor, extent, extent),
        orientation.start_angle(),
        anchor,
    )
}

pub fn center_icon_rect(
    orientation: Orientation,
    anchor: Point,
    radius: f64,
    menu_to_item_ratio: f64,
    icon_size: i32,
) -> Rect {
    let offset = (radius / menu_to_item_ratio) / ICON_OFFSET_DIVISOR;
    let (dx, dy) = orientation.inward();
    let cx = (anchor.x + dx * offset) as i32;
    let cy = (anchor.y + dy * offset) as i32;

    let left = cx - icon_size / 2;
    let top = cy - icon_size / 2;
    Rect::new(
        left as f64,
        top as f64,
        (left + icon_size) as f64,
        (top + icon_size) as f64,
    )
}

/// Baseline origin of the toggle label, hugging the anchored edge.
pub fn label_origin(orientation: Orientation, size: Size, text_width: f64, text_size: f64) -> Point {
    let (w, h) = (size.width, size.height);
    match orientation {
        Orientation::VerticalRight => Point::new(w as f64 - text_width, (h / 2) as f64),
        Orientation::VerticalLeft => Point::new(2.0, (h / 2) as f64),
        Orientation::HorizontalTop => Point::new((w / 2) as f64 - text_width / 2.0, text_size),
        Orientation::HorizontalBottom => {
            Point::new((w / 2) as f64 - text_width / 2.0, h as f64 - text_size)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    fn params(orientation: Orientation, width: i32, height: i32) -> LayoutParams {
        LayoutParams {
            orientation,
            size: Size::new(width, height),
            padding: Padding::default(),
            scale_factor: 1.0,
            menu_to_item_ratio: 3.0,
            icon_size: 64,
        }
    }

    #[test]
    fn test_start_angles() {
        let cases = [
            (Orientation::VerticalRight, 90.0),
            (Orientation::VerticalLeft, 270.0),
            (Orientation::HorizontalTop, 0.0),
            (Orientation::HorizontalBottom, 180.0),
        ];
        for (orientation, expected) in cases {
            let layout = MenuLayout::compute(&params(orientation, 400, 300));
            assert_eq!(layout.start_angle, expected);
        }
        for orientation in Orientation::iter() {
            assert!([0.0, 90.0, 180.0, 270.0].contains(&orientation.start_angle()));
        }
    }

    #[test]
    fn test_anchor_points() {
        let size = Size::new(401, 301);
        assert_eq!(Orientation::VerticalRight.anchor(size), Point::new(401.0, 150.0));
        assert_eq!(Orientation::VerticalLeft.anchor(size), Point::new(0.0, 150.0));
        assert_eq!(Orientation::HorizontalTop.anchor(size), Point::new(200.0, 0.0));
        assert_eq!(Orientation::HorizontalBottom.anchor(size), Point::new(200.0, 301.0));
    }

    #[test]
    fn test_radius_follows_shorter_side_and_padding() {
        let padding = Padding {
            left: 3,
            top: 5,
            right: 7,
            bottom: 10,
        };
        // landscape: height wins, vertical padding applies
        assert_eq!(menu_radius(Size::new(400, 200), padding, 1.0), 85.0);
        // portrait: width wins, horizontal padding applies
        assert_eq!(menu_radius(Size::new(200, 400), padding, 0.5), 45.0);
    }

    #[test]
    fn test_bottom_layout_rects() {
        let layout = MenuLayout::compute(&params(Orientation::HorizontalBottom, 400, 200));
        assert_eq!(layout.radius, 100.0);
        assert_eq!(layout.menu_rect, Rect::new(100.0, 100.0, 300.0, 300.0));
        assert_eq!(layout.center_rect, Rect::new(167.0, 167.0, 233.0, 233.0));
        assert_eq!(layout.border_rect, Rect::new(165.0, 165.0, 235.0, 235.0));
        assert_eq!(layout.icon_rect, Rect::new(168.0, 154.0, 232.0, 218.0));
    }

    #[test]
    fn test_icon_rect_moves_inward() {
        let top = MenuLayout::compute(&params(Orientation::HorizontalTop, 400, 200));
        assert_eq!(top.icon_rect, Rect::new(168.0, -19.0, 232.0, 45.0));

        let right = MenuLayout::compute(&params(Orientation::VerticalRight, 200, 400));
        assert!(right.icon_rect.center().x < right.anchor.x);

        let left = MenuLayout::compute(&params(Orientation::VerticalLeft, 200, 400));
        assert!(left.icon_rect.center().x > left.anchor.x);
    }

    #[test]
    fn test_half_disc_is_displaced_off_the_view() {
        let layout = MenuLayout::compute(&params(Orientation::VerticalLeft, 300, 500));
        assert_eq!(layout.menu_rect.left, -layout.menu_rect.right);
        assert_eq!(layout.menu_rect.center(), layout.anchor);
    }

    #[test]
    fn test_orientation_parsing() {
        let cases = [
            ("bottom", Orientation::HorizontalBottom),
            ("TOP", Orientation::HorizontalTop),
            ("vertical-left", Orientation::VerticalLeft),
            ("0", Orientation::VerticalRight),
        ];
        for (text, expected) in cases {
            assert_eq!(Orientation::from_str(text).unwrap(), expected);
        }
        assert!(Orientation::from_str("diagonal").is_err());
        assert_eq!(Orientation::default(), Orientation::HorizontalBottom);
        assert_eq!(Orientation::VerticalRight.to_string(), "right");
    }
}
