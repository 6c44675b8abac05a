//! Paint style of a stroke.
//!
//! Colour alpha is used only by the highlighter and the erase area tool.
//! All other tools draw at full opacity, so overlapping pieces of a
//! multi-line stroke do not darken each other.

use crate::error::{Diagnostics, Warning};
use crate::model::color::{self, ColorId, Rgba};
use crate::model::{Pen, Stroke};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub enum LineCap {
    Butt,
    Round,
    Square,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub enum LineJoin {
    Miter,
    Round,
    Bevel,
}

/// Texture painted instead of a solid colour.
///
/// The renderer resolves the texture name to a repeating fill pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub enum Brush {
    Pencil,
}

impl Brush {
    pub fn texture(self) -> &'static str {
        match self {
            Brush::Pencil => "pencil.png",
        }
    }
}

/// Resolved paint parameters of a stroke.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub struct Style {
    pub pen: Pen,
    pub color: ColorId,
    pub paint: Rgba,
    pub join: LineJoin,
    pub cap: LineCap,
    pub brush: Option<Brush>,
}

impl Style {
    /// Resolve the style of a stroke drawn with `pen`.
    ///
    /// Eraser tools paint with the background colour whatever colour the
    /// stroke stores. A stored colour outside the palette is drawn black.
    pub fn resolve(pen: Pen, stroke: &Stroke, diagnostics: &mut Diagnostics) -> Self {
        let color = match pen {
            Pen::Eraser | Pen::EraseArea => ColorId::BACKGROUND,
            _ => ColorId::from_raw(stroke.color).unwrap_or_else(|| {
                diagnostics.push(Warning::UnsupportedColor {
                    stroke: stroke.number,
                    color: stroke.color,
                });
                ColorId::Black
            }),
        };

        let paint = match pen {
            Pen::Highlighter => color::HIGHLIGHTER,
            Pen::EraseArea => color.rgba().with_alpha(0.0),
            _ => color.rgba(),
        };

        let cap = match pen {
            Pen::Highlighter => LineCap::Square,
            _ => LineCap::Round,
        };

        let brush = match pen {
            Pen::SharpPencil => Some(Brush::Pencil),
            _ => None,
        };

        Self {
            pen,
            color,
            paint,
            join: LineJoin::Round,
            cap,
            brush,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stroke(color: u32) -> Stroke {
        Stroke {
            number: 1,
            pen: 0,
            color,
            width: 2.0,
            segments: Vec::new(),
        }
    }

    fn resolve(pen: Pen, color: u32) -> (Style, Diagnostics) {
        let mut diag = Diagnostics::new();
        let style = Style::resolve(pen, &stroke(color), &mut diag);
        (style, diag)
    }

    #[test]
    fn test_stroke_color_used() {
        let (style, diag) = resolve(Pen::Fineliner, 1);
        assert_eq!(style.color, ColorId::Gray);
        assert_eq!(style.paint, Rgba::new(0.5, 0.5, 0.5, 1.0));
        assert_eq!(style.cap, LineCap::Round);
        assert_eq!(style.join, LineJoin::Round);
        assert_eq!(style.brush, None);
        assert!(diag.is_empty());
    }

    #[test]
    fn test_erasers_force_background() {
        let (style, diag) = resolve(Pen::Eraser, 0);
        assert_eq!(style.color, ColorId::White);
        assert_eq!(style.paint.alpha, 1.0);
        assert!(diag.is_empty());

        let (style, _) = resolve(Pen::EraseArea, 7);
        assert_eq!(style.color, ColorId::White);
        assert_eq!(style.paint, Rgba::new(1.0, 1.0, 1.0, 0.0));
    }

    #[test]
    fn test_highlighter_paint() {
        let (style, _) = resolve(Pen::Highlighter, 0);
        assert_eq!(style.paint, color::HIGHLIGHTER);
        assert_eq!(style.cap, LineCap::Square);
    }

    #[test]
    fn test_sharp_pencil_brush() {
        let (style, _) = resolve(Pen::SharpPencil, 0);
        assert_eq!(style.brush.map(Brush::texture), Some("pencil.png"));
    }

    #[test]
    fn test_unknown_color_falls_back_to_black() {
        let (style, diag) = resolve(Pen::Ballpoint, 9);
        assert_eq!(style.color, ColorId::Black);
        assert_eq!(
            diag.warnings(),
            &[Warning::UnsupportedColor { stroke: 1, color: 9 }]
        );
    }
}
