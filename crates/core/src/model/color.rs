//! Stroke colour indices.
//!
//! Files store a palette index, not a colour value. The index is turned into
//! paint by [`ColorId::rgba`] or by the pen style, which may override it.

/// Palette index stored with each stroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub enum ColorId {
    Black,
    Gray,
    White,
}

impl ColorId {
    /// Background colour, used by the eraser tools.
    pub const BACKGROUND: ColorId = ColorId::White;

    pub fn from_raw(value: u32) -> Option<Self> {
        match value {
            0 => Some(ColorId::Black),
            1 => Some(ColorId::Gray),
            2 => Some(ColorId::White),
            _ => None,
        }
    }

    pub fn raw(self) -> u32 {
        match self {
            ColorId::Black => 0,
            ColorId::Gray => 1,
            ColorId::White => 2,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ColorId::Black => "black",
            ColorId::Gray => "gray",
            ColorId::White => "white",
        }
    }

    pub fn rgba(self) -> Rgba {
        match self {
            ColorId::Black => Rgba::new(0.0, 0.0, 0.0, 1.0),
            ColorId::Gray => Rgba::new(0.5, 0.5, 0.5, 1.0),
            ColorId::White => Rgba::new(1.0, 1.0, 1.0, 1.0),
        }
    }
}

/// Colour with alpha, all channels in `0..=1`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub struct Rgba {
    pub red: f32,
    pub green: f32,
    pub blue: f32,
    pub alpha: f32,
}

impl Rgba {
    pub const fn new(red: f32, green: f32, blue: f32, alpha: f32) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    pub const fn with_alpha(self, alpha: f32) -> Self {
        Self { alpha, ..self }
    }
}

/// Paint of the highlighter, independent of the stored colour.
pub const HIGHLIGHTER: Rgba = Rgba::new(1.0, 0.8039, 0.0, 0.1);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_indices() {
        for raw in 0..3 {
            let color = ColorId::from_raw(raw).unwrap();
            assert_eq!(color.raw(), raw);
        }
        assert_eq!(ColorId::from_raw(3), None);
    }

    #[test]
    fn test_palette_values() {
        assert_eq!(ColorId::Black.rgba(), Rgba::new(0.0, 0.0, 0.0, 1.0));
        assert_eq!(ColorId::Gray.rgba(), Rgba::new(0.5, 0.5, 0.5, 1.0));
        assert_eq!(ColorId::BACKGROUND.rgba(), Rgba::new(1.0, 1.0, 1.0, 1.0));
    }
}
