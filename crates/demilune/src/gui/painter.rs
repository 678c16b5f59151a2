use super::icon::IconCache;
use super::menu::{Canvas, IconName, Paint, PaintStyle, Path, PathSegment};
use crate::geometry::{Point, Rect};
use cairo::Context;
use gdk4::prelude::*;
use palette::Srgba;
use std::f64::consts::PI;

const SHADOW_ALPHA: f64 = 0.35;

/// [`Canvas`] backed by a cairo context for the duration of one draw callback.
pub struct CairoCanvas<'a> {
    cr: &'a Context,
    icons: &'a mut IconCache,
}

impl<'a> CairoCanvas<'a> {
    pub fn new(cr: &'a Context, icons: &'a mut IconCache) -> Self {
        Self { cr, icons }
    }

    fn set_color(&self, color: Srgba<f64>) {
        let (r, g, b, a) = color.into_components();
        self.cr.set_source_rgba(r, g, b, a);
    }

    fn set_font(&self, paint: &Paint) {
        self.cr
            .select_font_face("Sans", cairo::FontSlant::Normal, cairo::FontWeight::Bold);
        self.cr.set_font_size(paint.text_size);
    }

    fn arc_segment(&self, oval: Rect, start: f64, sweep: f64) -> Result<(), cairo::Error> {
        if oval.is_empty() {
            return Ok(());
        }
        let center = oval.center();
        let (a1, a2) = (start.to_radians(), (start + sweep).to_radians());

        self.cr.save()?;
        self.cr.translate(center.x, center.y);
        self.cr.scale(oval.width() / 2.0, oval.height() / 2.0);
        if sweep >= 0.0 {
            self.cr.arc(0.0, 0.0, 1.0, a1, a2);
        } else {
            self.cr.arc_negative(0.0, 0.0, 1.0, a1, a2);
        }
        self.cr.restore()
    }

    fn trace(&self, path: &Path) -> Result<(), cairo::Error> {
        self.cr.new_path();
        for segment in path.segments() {
            match *segment {
                PathSegment::MoveTo(p) => self.cr.move_to(p.x, p.y),
                PathSegment::LineTo(p) => self.cr.line_to(p.x, p.y),
                PathSegment::ArcTo { oval, start, sweep } => self.arc_segment(oval, start, sweep)?,
                PathSegment::Close => self.cr.close_path(),
            }
        }
        Ok(())
    }

    /// Renders the current path with `paint`, shadow first.
    fn finish(&self, paint: &Paint) -> Result<(), cairo::Error> {
        if let Some(shadow) = paint.shadow.filter(|s| s.radius > 0.0) {
            let path = self.cr.copy_path()?;
            self.cr.save()?;
            self.cr.new_path();
            self.cr.translate(shadow.offset.x, shadow.offset.y);
            self.cr.append_path(&path);
            let mut color = shadow.color;
            color.alpha *= SHADOW_ALPHA;
            self.set_color(color);
            self.cr.set_line_width(shadow.radius * 2.0);
            self.cr.stroke()?;
            self.cr.restore()?;
            self.cr.append_path(&path);
        }

        self.set_color(paint.color);
        self.cr.set_line_width(paint.stroke_width);
        match paint.style {
            PaintStyle::Fill => self.cr.fill(),
            PaintStyle::Stroke => self.cr.stroke(),
            PaintStyle::FillAndStroke => {
                self.cr.fill_preserve()?;
                self.cr.stroke()
            }
        }
    }

    fn advance(&self, text: &str) -> f64 {
        self.cr
            .text_extents(text)
            .map(|ext| ext.x_advance())
            .unwrap_or(0.0)
    }
}

impl Canvas for CairoCanvas<'_> {
    type Error = cairo::Error;

    fn draw_arc(
        &mut self,
        oval: Rect,
        start: f64,
        sweep: f64,
        use_center: bool,
        paint: &Paint,
    ) -> Result<(), cairo::Error> {
        self.cr.new_path();
        if use_center {
            let c = oval.center();
            self.cr.move_to(c.x, c.y);
        }
        self.arc_segment(oval, start, sweep)?;
        if use_center {
            self.cr.close_path();
        }
        self.finish(paint)
    }

    fn draw_path(&mut self, path: &Path, paint: &Paint) -> Result<(), cairo::Error> {
        self.trace(path)?;
        self.finish(paint)
    }

    /// Follows the first arc of `path` glyph by glyph; text on straight paths starts at
    /// the first point.
    fn draw_text_on_path(
        &mut self,
        text: &str,
        path: &Path,
        h_offset: f64,
        v_offset: f64,
        paint: &Paint,
    ) -> Result<(), cairo::Error> {
        self.set_font(paint);
        self.set_color(paint.color);

        let arc = path.segments().iter().find_map(|s| match *s {
            PathSegment::ArcTo { oval, start, sweep } if sweep > 0.0 => Some((oval, start, sweep)),
            _ => None,
        });

        let Some((oval, start, sweep)) = arc else {
            let origin = path.segments().iter().find_map(|s| match *s {
                PathSegment::MoveTo(p) => Some(p),
                _ => None,
            });
            return match origin {
                Some(p) => self.draw_text(text, Point::new(p.x + h_offset, p.y + v_offset), paint),
                None => Ok(()),
            };
        };

        let center = oval.center();
        let radius = oval.width() / 2.0 - v_offset;
        if radius <= 0.0 {
            return Ok(());
        }
        let arc_length = radius * sweep.to_radians();
        let mut travelled = h_offset;

        let mut buf = [0u8; 4];
        for ch in text.chars() {
            let glyph = ch.encode_utf8(&mut buf);
            let advance = self.advance(glyph);
            if travelled + advance > arc_length {
                break;
            }
            let angle = start.to_radians() + (travelled + advance / 2.0) / radius;
            let p = Point::new(
                center.x + radius * angle.cos(),
                center.y + radius * angle.sin(),
            );

            self.cr.save()?;
            self.cr.translate(p.x, p.y);
            self.cr.rotate(angle + PI / 2.0);
            self.cr.move_to(-advance / 2.0, 0.0);
            self.cr.show_text(glyph)?;
            self.cr.restore()?;

            travelled += advance;
        }
        Ok(())
    }

    fn draw_text(&mut self, text: &str, origin: Point, paint: &Paint) -> Result<(), cairo::Error> {
        self.set_font(paint);
        self.set_color(paint.color);
        self.cr.move_to(origin.x, origin.y);
        self.cr.show_text(text)
    }

    fn measure_text(&mut self, text: &str, paint: &Paint) -> f64 {
        self.set_font(paint);
        self.advance(text)
    }

    fn draw_icon(&mut self, icon: &IconName, bounds: Rect) -> Result<(), cairo::Error> {
        let Some(pixbuf) = self.icons.get(icon) else {
            return Ok(());
        };

        // fit icon into bounds, preserving aspect
        let (pw, ph) = (pixbuf.width() as f64, pixbuf.height() as f64);
        if pw <= 0.0 || ph <= 0.0 {
            return Ok(());
        }
        let scale = (bounds.width() / pw).min(bounds.height() / ph);
        let center = bounds.center();

        self.cr.save()?;
        self.cr
            .translate(center.x - pw * scale / 2.0, center.y - ph * scale / 2.0);
        self.cr.scale(scale, scale);
        self.cr.set_source_pixbuf(pixbuf, 0.0, 0.0);
        self.cr.paint()?;
        self.cr.restore()
    }
}
