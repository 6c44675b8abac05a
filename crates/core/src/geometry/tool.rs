//! Width calculations of the drawing tools.
//!
//! Constant width tools draw a stroke as a single line. The ballpoint width
//! varies with pressure, so its strokes are drawn as one line per segment
//! pair. The `pressure^2048` term stays near zero unless pressure is very
//! close to 1.

use super::line::{RenderLine, multi_line, single_line};
use crate::model::{Pen, Segment, Stroke};

/// How a pen's width is computed.
#[derive(Debug, Clone, Copy)]
pub enum WidthModel {
    /// Width depends on the stroke only.
    Stroke(fn(&Stroke) -> f32),
    /// Width depends on the leading segment of each segment pair.
    Segment(fn(&Stroke, &Segment) -> f32),
}

impl Pen {
    pub fn width_model(self) -> WidthModel {
        match self {
            Pen::Ballpoint => WidthModel::Segment(width_ballpoint),
            Pen::Fineliner => WidthModel::Stroke(width_fineliner),
            Pen::SharpPencil => WidthModel::Stroke(width_sharp_pencil),
            Pen::Highlighter => WidthModel::Stroke(|_| 30.0),
            Pen::Eraser => WidthModel::Stroke(width_eraser),
            Pen::EraseArea => WidthModel::Stroke(|_| 1.0),
        }
    }
}

pub fn width_fineliner(stroke: &Stroke) -> f32 {
    let w = f64::from(stroke.width);
    (32.0 * w * w - 116.0 * w + 107.0) as f32
}

pub fn width_sharp_pencil(stroke: &Stroke) -> f32 {
    let w = f64::from(stroke.width);
    (16.0 * w - 27.0) as f32
}

pub fn width_eraser(stroke: &Stroke) -> f32 {
    let w = f64::from(stroke.width);
    (1280.0 * w * w - 4800.0 * w + 4510.0) as f32
}

pub fn width_ballpoint(stroke: &Stroke, segment: &Segment) -> f32 {
    let w = f64::from(stroke.width);
    let base = 32.0 * w * w - 116.0 * w + 107.0;
    (base + f64::from(segment.pressure).powf(2048.0)) as f32
}

/// Render lines of a stroke drawn with a known pen.
pub fn pen_lines(pen: Pen, stroke: &Stroke) -> Vec<RenderLine> {
    match pen.width_model() {
        WidthModel::Stroke(calc) => single_line(calc, stroke),
        WidthModel::Segment(calc) => multi_line(calc, stroke),
    }
}

/// Render lines of a stroke.
///
/// A stroke with an unsupported pen id has no lines.
pub fn stroke_lines(stroke: &Stroke) -> Vec<RenderLine> {
    match Pen::from_id(stroke.pen) {
        Some(pen) => pen_lines(pen, stroke),
        None => {
            tracing::debug!(stroke = stroke.number, pen = stroke.pen, "pen not supported");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stroke(width: f32) -> Stroke {
        Stroke {
            number: 0,
            pen: 0,
            color: 0,
            width,
            segments: Vec::new(),
        }
    }

    #[test]
    fn test_width_formulas() {
        assert_eq!(width_fineliner(&stroke(0.5)), 57.0);
        assert_eq!(width_fineliner(&stroke(2.0)), 3.0);
        assert_eq!(width_sharp_pencil(&stroke(2.0)), 5.0);
        assert_eq!(width_eraser(&stroke(2.0)), 30.0);
    }

    #[test]
    fn test_ballpoint_pressure_step() {
        let st = stroke(0.5);
        let seg = |p| Segment::new(0, 0.0, 0.0, p);
        assert_eq!(width_ballpoint(&st, &seg(0.0)), 57.0);
        assert_eq!(width_ballpoint(&st, &seg(0.5)), 57.0);
        assert_eq!(width_ballpoint(&st, &seg(1.0)), 58.0);
        assert!(width_ballpoint(&st, &seg(2.0)).is_infinite());
    }

    #[test]
    fn test_strategy_per_pen() {
        for pen in Pen::ALL {
            let single = matches!(pen.width_model(), WidthModel::Stroke(_));
            assert_eq!(single, pen != Pen::Ballpoint, "{pen:?}");
        }
    }
}
