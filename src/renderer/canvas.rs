//! Drawing surface abstraction

use glam::Vec2;

/// Primitives the scene needs from a drawing surface.
/// Coordinates are pixels from the top-left of the drawable area.
pub trait Canvas {
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: [f32; 4]);

    fn line(&mut self, from: Vec2, to: Vec2, width: f32, color: [f32; 4]);

    /// Text anchored at its top-left corner
    fn text(&mut self, pos: Vec2, text: &str, color: [f32; 4]);
}

/// A recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Circle {
        center: Vec2,
        radius: f32,
        color: [f32; 4],
    },
    Line {
        from: Vec2,
        to: Vec2,
        width: f32,
        color: [f32; 4],
    },
    Text {
        pos: Vec2,
        text: String,
        color: [f32; 4],
    },
}

/// Canvas that stores draw calls instead of painting them
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    pub commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Line segments drawn in the given color
    pub fn lines_with_color(&self, color: [f32; 4]) -> Vec<(Vec2, Vec2)> {
        self.commands
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::Line { from, to, color: c, .. } if *c == color => Some((*from, *to)),
                _ => None,
            })
            .collect()
    }

    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Canvas for RecordingCanvas {
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: [f32; 4]) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
        });
    }

    fn line(&mut self, from: Vec2, to: Vec2, width: f32, color: [f32; 4]) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            width,
            color,
        });
    }

    fn text(&mut self, pos: Vec2, text: &str, color: [f32; 4]) {
        self.commands.push(DrawCommand::Text {
            pos,
            text: text.to_string(),
            color,
        });
    }
}
