//! Pen geometry model.
//!
//! Turns a decoded [`Stroke`] into render lines and a paint style. The model
//! is a pure function of the stroke, independent of the byte layout it was
//! decoded from.

pub mod line;
pub mod style;
pub mod tool;

pub use line::{Point, RenderLine, multi_line, single_line};
pub use style::{Brush, LineCap, LineJoin, Style};
pub use tool::{WidthModel, stroke_lines};

use crate::error::{Diagnostics, Warning};
use crate::model::{Pen, Stroke};

/// A stroke ready for drawing.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub struct ResolvedStroke {
    pub number: u32,
    pub style: Style,
    pub lines: Vec<RenderLine>,
}

/// Resolve style and lines of a stroke.
///
/// Returns `None` and records a warning when the stroke's pen has no
/// geometry model.
pub fn resolve_stroke(stroke: &Stroke, diagnostics: &mut Diagnostics) -> Option<ResolvedStroke> {
    let Some(pen) = Pen::from_id(stroke.pen) else {
        tracing::debug!(stroke = stroke.number, pen = stroke.pen, "pen not supported");
        diagnostics.push(Warning::UnsupportedPen {
            stroke: stroke.number,
            pen: stroke.pen,
        });
        return None;
    };

    let style = Style::resolve(pen, stroke, diagnostics);
    let lines = tool::pen_lines(pen, stroke);
    Some(ResolvedStroke {
        number: stroke.number,
        style,
        lines,
    })
}
