//! Rendering module
//!
//! Draw routines only talk to the `Canvas` trait, so they run the same
//! against the egui painter and against a recording canvas in tests.

pub mod canvas;
pub mod colors;
pub mod painter;
pub mod scene;

pub use canvas::{Canvas, DrawCommand, RecordingCanvas};
pub use painter::PainterCanvas;
pub use scene::{ChartStyle, render};
