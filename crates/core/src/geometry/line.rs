//! Render lines and the two line strategies.

use itertools::Itertools;

use crate::model::{Segment, Stroke};

pub type Point = (f32, f32);

/// A polyline of constant width ready for stroking.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub struct RenderLine {
    pub width: f32,
    pub points: Vec<Point>,
}

impl RenderLine {
    pub fn new(width: f32, points: Vec<Point>) -> Self {
        Self { width, points }
    }
}

/// One line through all points of the stroke.
pub fn single_line<F>(calc: F, stroke: &Stroke) -> Vec<RenderLine>
where
    F: Fn(&Stroke) -> f32,
{
    let points = stroke.segments.iter().map(Segment::point).collect();
    vec![RenderLine::new(calc(stroke), points)]
}

/// One two-point line per consecutive segment pair.
///
/// The width of each piece is computed from its leading segment.
pub fn multi_line<F>(calc: F, stroke: &Stroke) -> Vec<RenderLine>
where
    F: Fn(&Stroke, &Segment) -> f32,
{
    stroke
        .segments
        .iter()
        .tuple_windows()
        .map(|(s1, s2)| RenderLine::new(calc(stroke, s1), vec![s1.point(), s2.point()]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stroke(width: f32, pressures: [f32; 3]) -> Stroke {
        Stroke {
            number: 0,
            pen: 0,
            color: 0,
            width,
            segments: pressures
                .iter()
                .enumerate()
                .map(|(i, &p)| Segment::new(i as u32, i as f32, i as f32, p))
                .collect(),
        }
    }

    #[test]
    fn test_single_line() {
        let lines = single_line(|_| 10.0, &stroke(0.0, [0.0; 3]));
        assert_eq!(
            lines,
            vec![RenderLine::new(10.0, vec![(0.0, 0.0), (1.0, 1.0), (2.0, 2.0)])]
        );
    }

    #[test]
    fn test_multi_line_uses_leading_segment() {
        let calc = |st: &Stroke, seg: &Segment| st.width.powi(seg.pressure as i32);
        let lines = multi_line(calc, &stroke(10.0, [1.0, 2.0, 3.0]));
        assert_eq!(
            lines,
            vec![
                RenderLine::new(10.0, vec![(0.0, 0.0), (1.0, 1.0)]),
                RenderLine::new(100.0, vec![(1.0, 1.0), (2.0, 2.0)]),
            ]
        );
    }

    #[test]
    fn test_multi_line_single_segment() {
        let mut st = stroke(1.0, [1.0; 3]);
        st.segments.truncate(1);
        assert!(multi_line(|_, _| 1.0, &st).is_empty());
    }
}
