use crate::geometry::{Point, Rect};
use derive_more::{AsRef, Deref, Display, From, Into};
use palette::Srgba;
use serde::{Deserialize, Serialize};

/// Themed icon name or absolute image path, resolved by the canvas.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, Deref, From, Into, AsRef,
)]
#[serde(transparent)]
pub struct IconName(String);

crate::impl_string_newtype!(IconName);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaintStyle {
    #[default]
    Fill,
    Stroke,
    FillAndStroke,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shadow {
    pub radius: f64,
    pub offset: Point,
    pub color: Srgba<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paint {
    pub style: PaintStyle,
    pub color: Srgba<f64>,
    pub stroke_width: f64,
    pub text_size: f64,
    pub shadow: Option<Shadow>,
}

impl Default for Paint {
    fn default() -> Self {
        Self {
            style: PaintStyle::Fill,
            color: Srgba::new(0.0, 0.0, 0.0, 1.0),
            stroke_width: 1.0,
            text_size: 12.0,
            shadow: None,
        }
    }
}

impl Paint {
    pub fn with_color(mut self, color: Srgba<f64>) -> Self {
        self.color = color;
        self
    }

    pub fn without_shadow(mut self) -> Self {
        self.shadow = None;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathSegment {
    MoveTo(Point),
    LineTo(Point),
    /// Arc over the ellipse inscribed in `oval`, connected to the current point by a line.
    /// Angles in degrees, clockwise from +x; a negative sweep runs counter-clockwise.
    ArcTo {
        oval: Rect,
        start: f64,
        sweep: f64,
    },
    Close,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Path {
    segments: Vec<PathSegment>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(&mut self, p: Point) -> &mut Self {
        self.segments.push(PathSegment::MoveTo(p));
        self
    }

    pub fn line_to(&mut self, p: Point) -> &mut Self {
        self.segments.push(PathSegment::LineTo(p));
        self
    }

    pub fn arc_to(&mut self, oval: Rect, start: f64, sweep: f64) -> &mut Self {
        self.segments.push(PathSegment::ArcTo { oval, start, sweep });
        self
    }

    pub fn close(&mut self) -> &mut Self {
        self.segments.push(PathSegment::Close);
        self
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }
}

/// Drawing surface supplied by the host toolkit.
pub trait Canvas {
    type Error;

    /// `use_center` closes the arc through the oval center, producing a pie wedge.
    fn draw_arc(
        &mut self,
        oval: Rect,
        start: f64,
        sweep: f64,
        use_center: bool,
        paint: &Paint,
    ) -> Result<(), Self::Error>;

    fn draw_path(&mut self, path: &Path, paint: &Paint) -> Result<(), Self::Error>;

    /// Lays `text` along `path`, shifted `h_offset` along it and `v_offset` away from it.
    fn draw_text_on_path(
        &mut self,
        text: &str,
        path: &Path,
        h_offset: f64,
        v_offset: f64,
        paint: &Paint,
    ) -> Result<(), Self::Error>;

    fn draw_text(&mut self, text: &str, origin: Point, paint: &Paint) -> Result<(), Self::Error>;

    fn measure_text(&mut self, text: &str, paint: &Paint) -> f64;

    fn draw_icon(&mut self, icon: &IconName, bounds: Rect) -> Result<(), Self::Error>;
}
