use super::HALF_TURN;
use super::canvas::{Canvas, Paint};
use super::item::MenuItem;
use super::layout;
use super::model::{MenuStyle, RadialMenu};

const TEXT_PATH_H_OFFSET: f64 = 5.0;

struct SliceRenderer<'a> {
    item: &'a MenuItem,
    style: &'a MenuStyle,
    paint: Paint,
}

impl<'a> SliceRenderer<'a> {
    fn new(item: &'a MenuItem, style: &'a MenuStyle, paint: Paint) -> Self {
        Self { item, style, paint }
    }

    fn draw<C: Canvas>(&self, canvas: &mut C) -> Result<(), C::Error> {
        let slice = self.item.slice();
        canvas.draw_path(
            &slice.path,
            &self.paint.with_color(self.item.background_color()),
        )?;

        if let Some(border) = self.style.border() {
            canvas.draw_path(&slice.border, border)?;
        }

        if self.style.show_center_text {
            let text_paint = self
                .paint
                .without_shadow()
                .with_color(self.item.text_color);
            canvas.draw_text_on_path(
                &self.item.text,
                &slice.path,
                TEXT_PATH_H_OFFSET,
                self.style.text_size,
                &text_paint,
            )?;
        }

        if let Some(icon) = &self.item.icon {
            canvas.draw_icon(icon, slice.icon_rect)?;
        }
        Ok(())
    }
}

/// One paint pass. Slice geometry is rebuilt here, so hit testing always matches
/// what was last drawn.
pub fn draw<C: Canvas>(canvas: &mut C, menu: &mut RadialMenu) -> Result<(), C::Error> {
    let paint = menu.style().menu_paint();
    let half_turn = HALF_TURN as f64;

    if menu.is_open() {
        let layout = menu.layout();
        canvas.draw_arc(layout.menu_rect, layout.start_angle, half_turn, true, &paint)?;

        menu.arrange_items();
        for item in menu.items() {
            SliceRenderer::new(item, menu.style(), paint).draw(canvas)?;
        }
    }

    draw_toggle(canvas, menu, &paint)?;

    let style = menu.style();
    if style.show_center_text {
        draw_center_text(canvas, menu, &paint)?;
    }
    if style.show_center_icon
        && let Some(icon) = &style.center_icon
    {
        canvas.draw_icon(icon, menu.layout().icon_rect)?;
    }
    Ok(())
}

fn draw_toggle<C: Canvas>(
    canvas: &mut C,
    menu: &RadialMenu,
    paint: &Paint,
) -> Result<(), C::Error> {
    let layout = menu.layout();
    let half_turn = HALF_TURN as f64;
    canvas.draw_arc(
        layout.center_rect,
        layout.start_angle,
        half_turn,
        true,
        &paint.with_color(menu.center_background()),
    )?;

    if let Some(border) = menu.style().border() {
        canvas.draw_arc(layout.border_rect, layout.start_angle, half_turn, true, border)?;
    }
    Ok(())
}

fn draw_center_text<C: Canvas>(
    canvas: &mut C,
    menu: &RadialMenu,
    paint: &Paint,
) -> Result<(), C::Error> {
    let text_paint = paint.without_shadow().with_color(menu.center_text_color());
    let label = menu.center_label();
    let width = canvas.measure_text(label, &text_paint);
    let params = menu.params();
    let origin = layout::label_origin(
        params.orientation,
        params.size,
        width,
        menu.style().text_size,
    );
    canvas.draw_text(label, origin, &text_paint)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Point, Rect, Size};
    use crate::gui::menu::canvas::{IconName, PaintStyle, Path};
    use crate::gui::menu::item::MenuItem;
    use crate::gui::menu::touch::PointerEvent;
    use crate::gui::menu::{HOLO_LIGHT_BLUE, WHITE};
    use palette::Srgba;
    use std::convert::Infallible;

    #[derive(Debug, Clone, PartialEq)]
    enum Op {
        Arc { oval: Rect, color: Srgba<f64> },
        Fill(Srgba<f64>),
        Stroke,
        TextOnPath(String),
        Text(String, Point),
        Icon(String),
    }

    #[derive(Default)]
    struct Recorder {
        ops: Vec<Op>,
    }

    impl Canvas for Recorder {
        type Error = Infallible;

        fn draw_arc(
            &mut self,
            oval: Rect,
            _start: f64,
            sweep: f64,
            use_center: bool,
            paint: &Paint,
        ) -> Result<(), Infallible> {
            assert_eq!(sweep, 180.0);
            assert!(use_center);
            self.ops.push(Op::Arc {
                oval,
                color: paint.color,
            });
            Ok(())
        }

        fn draw_path(&mut self, _path: &Path, paint: &Paint) -> Result<(), Infallible> {
            self.ops.push(match paint.style {
                PaintStyle::Stroke => Op::Stroke,
                _ => Op::Fill(paint.color),
            });
            Ok(())
        }

        fn draw_text_on_path(
            &mut self,
            text: &str,
            _path: &Path,
            _h_offset: f64,
            _v_offset: f64,
            paint: &Paint,
        ) -> Result<(), Infallible> {
            assert!(paint.shadow.is_none());
            self.ops.push(Op::TextOnPath(text.to_string()));
            Ok(())
        }

        fn draw_text(&mut self, text: &str, origin: Point, _paint: &Paint) -> Result<(), Infallible> {
            self.ops.push(Op::Text(text.to_string(), origin));
            Ok(())
        }

        fn measure_text(&mut self, text: &str, _paint: &Paint) -> f64 {
            text.len() as f64 * 6.0
        }

        fn draw_icon(&mut self, icon: &IconName, _bounds: Rect) -> Result<(), Infallible> {
            self.ops.push(Op::Icon(icon.to_string()));
            Ok(())
        }
    }

    fn menu() -> RadialMenu {
        let mut menu = RadialMenu::new(MenuStyle::default());
        menu.resize(Size::new(400, 200));
        menu.add_item(MenuItem::new("a", "Alpha").with_icon("mail"));
        menu.add_item(MenuItem::new("b", "Beta"));
        menu
    }

    #[test]
    fn test_closed_menu_draws_only_toggle() {
        let mut menu = menu();
        let mut canvas = Recorder::default();
        draw(&mut canvas, &mut menu).unwrap();

        assert_eq!(
            canvas.ops,
            vec![Op::Arc {
                oval: menu.layout().center_rect,
                color: WHITE
            }]
        );
    }

    #[test]
    fn test_open_menu_draws_slices_in_order() {
        let mut menu = menu();
        let mut style = menu.style().clone();
        style.show_center_text = true;
        style.show_center_icon = true;
        style.center_icon = Some(IconName::from("open-menu"));
        style.set_border(Some(Paint::default()));
        menu.set_style(style);
        menu.on_pointer(PointerEvent::down(200.0, 190.0));
        menu.on_pointer(PointerEvent::up(200.0, 190.0));

        let mut canvas = Recorder::default();
        draw(&mut canvas, &mut menu).unwrap();

        let layout = *menu.layout();
        assert_eq!(
            canvas.ops,
            vec![
                Op::Arc {
                    oval: layout.menu_rect,
                    color: WHITE
                },
                Op::Fill(WHITE),
                Op::Stroke,
                Op::TextOnPath("Alpha".to_string()),
                Op::Icon("mail".to_string()),
                Op::Fill(WHITE),
                Op::Stroke,
                Op::TextOnPath("Beta".to_string()),
                Op::Arc {
                    oval: layout.center_rect,
                    color: WHITE
                },
                Op::Arc {
                    oval: layout.border_rect,
                    color: Paint::default().color
                },
                Op::Text("Close".to_string(), Point::new(185.0, 188.0)),
                Op::Icon("open-menu".to_string()),
            ]
        );
    }

    #[test]
    fn test_pressed_item_uses_selected_color() {
        let mut menu = menu();
        menu.on_pointer(PointerEvent::down(200.0, 190.0));
        menu.on_pointer(PointerEvent::up(200.0, 190.0));
        let mut canvas = Recorder::default();
        draw(&mut canvas, &mut menu).unwrap();

        menu.on_pointer(PointerEvent::down(280.0, 150.0));
        let mut canvas = Recorder::default();
        draw(&mut canvas, &mut menu).unwrap();

        let fills: Vec<&Op> = canvas
            .ops
            .iter()
            .filter(|op| matches!(op, Op::Fill(_)))
            .collect();
        assert_eq!(fills, vec![&Op::Fill(WHITE), &Op::Fill(HOLO_LIGHT_BLUE)]);
    }
}
