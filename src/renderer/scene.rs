//! Scene layout: the falling ball and the two rolling charts

use glam::Vec2;

use super::canvas::Canvas;
use super::colors;
use crate::consts::OBJECT_DIAMETER;
use crate::sim::{History, HistoryBuffer, SimulationState};

/// Left edge of the ball (pixels)
pub const BALL_X: f32 = 150.0;
/// X of the first sample in each chart
pub const CHART_ORIGIN_X: f32 = 350.0;
/// Pixels per unit of sample value
pub const CHART_SCALE: f32 = 5.0;
pub const CHART_LINE_WIDTH: f32 = 2.0;
/// Label sits this far above the chart baseline
pub const LABEL_OFFSET: f32 = 20.0;

/// How one chart is placed and labeled
#[derive(Debug, Clone, Copy)]
pub struct ChartStyle {
    pub label: &'static str,
    pub color: [f32; 4],
    /// Y of the zero line
    pub baseline: f32,
}

pub const VELOCITY_CHART: ChartStyle = ChartStyle {
    label: "Velocity (m/s)",
    color: colors::VELOCITY,
    baseline: 50.0,
};

pub const ACCELERATION_CHART: ChartStyle = ChartStyle {
    label: "Acceleration (m/s²)",
    color: colors::ACCELERATION,
    baseline: 250.0,
};

/// Paint the current frame. Reads state only.
pub fn render(canvas: &mut impl Canvas, state: &SimulationState, history: &History) {
    draw_ball(canvas, state);
    draw_chart(canvas, history.velocity(), &VELOCITY_CHART);
    draw_chart(canvas, history.acceleration(), &ACCELERATION_CHART);
}

/// Position is the top edge of the ball
fn draw_ball(canvas: &mut impl Canvas, state: &SimulationState) {
    let radius = OBJECT_DIAMETER / 2.0;
    let center = Vec2::new(BALL_X + radius, state.position + radius);
    canvas.fill_circle(center, radius, colors::BALL);
}

/// Screen point for sample `index` with value `value`
pub fn chart_point(style: &ChartStyle, index: usize, value: f32) -> Vec2 {
    Vec2::new(
        CHART_ORIGIN_X + index as f32,
        style.baseline - value * CHART_SCALE,
    )
}

fn draw_chart(canvas: &mut impl Canvas, samples: &HistoryBuffer, style: &ChartStyle) {
    canvas.text(
        Vec2::new(CHART_ORIGIN_X, style.baseline - LABEL_OFFSET),
        style.label,
        colors::LABEL,
    );

    let mut points = samples
        .iter()
        .enumerate()
        .map(|(i, value)| chart_point(style, i, value));

    // Zero or one sample: nothing to connect
    let Some(mut prev) = points.next() else {
        return;
    };
    for point in points {
        canvas.line(prev, point, CHART_LINE_WIDTH, style.color);
        prev = point;
    }
}
