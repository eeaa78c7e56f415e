//! `Canvas` backed by an egui painter

use eframe::egui::{Align2, Color32, FontId, Painter, Pos2, Stroke};
use glam::Vec2;

use super::canvas::Canvas;
use super::colors::to_rgba8;

const LABEL_FONT_SIZE: f32 = 13.0;

/// Paints into an egui layer, offset so (0, 0) is the top-left of the
/// drawable area.
pub struct PainterCanvas<'a> {
    painter: &'a Painter,
    origin: Pos2,
}

impl<'a> PainterCanvas<'a> {
    pub fn new(painter: &'a Painter, origin: Pos2) -> Self {
        Self { painter, origin }
    }

    fn to_screen(&self, p: Vec2) -> Pos2 {
        Pos2::new(self.origin.x + p.x, self.origin.y + p.y)
    }
}

fn to_color32(color: [f32; 4]) -> Color32 {
    let [r, g, b, a] = to_rgba8(color);
    Color32::from_rgba_unmultiplied(r, g, b, a)
}

impl Canvas for PainterCanvas<'_> {
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: [f32; 4]) {
        self.painter
            .circle_filled(self.to_screen(center), radius, to_color32(color));
    }

    fn line(&mut self, from: Vec2, to: Vec2, width: f32, color: [f32; 4]) {
        self.painter.line_segment(
            [self.to_screen(from), self.to_screen(to)],
            Stroke::new(width, to_color32(color)),
        );
    }

    fn text(&mut self, pos: Vec2, text: &str, color: [f32; 4]) {
        self.painter.text(
            self.to_screen(pos),
            Align2::LEFT_TOP,
            text,
            FontId::proportional(LABEL_FONT_SIZE),
            to_color32(color),
        );
    }
}
