//! Drawing primitives emitted by the lines decoder.
//!
//! A decoded file is a flat sequence of [`Item`]s nested as
//! `Page → (Layer → Stroke*)* → PageEnd`, repeated per page.

/// Start of page content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub struct Page {
    pub number: u32,
}

/// End of the page with the same number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub struct PageEnd {
    pub number: u32,
}

/// Start of a layer within a page. Later layers are drawn on top.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub struct Layer {
    pub number: u32,
}

/// Per-sample motion fields of single-page (version 3) files.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub struct Motion {
    pub speed: f32,
    pub direction: f32,
    pub width: f32,
}

/// One sample of a stroke.
///
/// The field set is fixed per format variant: multi-page files carry `tilt`,
/// single-page files carry `motion`. Both carry `pressure`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub struct Segment {
    pub number: u32,
    pub x: f32,
    pub y: f32,
    pub pressure: f32,
    pub tilt: Option<f32>,
    pub motion: Option<Motion>,
}

impl Segment {
    /// Create a segment carrying position and pressure only.
    pub fn new(number: u32, x: f32, y: f32, pressure: f32) -> Self {
        Self {
            number,
            x,
            y,
            pressure,
            tilt: None,
            motion: None,
        }
    }

    pub fn point(&self) -> (f32, f32) {
        (self.x, self.y)
    }
}

/// One pen-down to pen-up drawing action.
///
/// `pen` and `color` are raw identifiers as stored in the file; they are
/// interpreted by the geometry model, never by the decoder.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub struct Stroke {
    pub number: u32,
    pub pen: u32,
    pub color: u32,
    pub width: f32,
    pub segments: Vec<Segment>,
}

/// A decoded drawing primitive.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
#[cfg_attr(feature = "serialize", serde(tag = "type"))]
pub enum Item {
    Page(Page),
    Layer(Layer),
    Stroke(Stroke),
    PageEnd(PageEnd),
}

impl Item {
    pub fn as_stroke(&self) -> Option<&Stroke> {
        match self {
            Item::Stroke(stroke) => Some(stroke),
            _ => None,
        }
    }

    pub fn as_page(&self) -> Option<&Page> {
        match self {
            Item::Page(page) => Some(page),
            _ => None,
        }
    }

    /// Short name of the primitive kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Item::Page(_) => "page",
            Item::Layer(_) => "layer",
            Item::Stroke(_) => "stroke",
            Item::PageEnd(_) => "page_end",
        }
    }
}

impl From<Page> for Item {
    fn from(page: Page) -> Self {
        Item::Page(page)
    }
}

impl From<Layer> for Item {
    fn from(layer: Layer) -> Self {
        Item::Layer(layer)
    }
}

impl From<Stroke> for Item {
    fn from(stroke: Stroke) -> Self {
        Item::Stroke(stroke)
    }
}

impl From<PageEnd> for Item {
    fn from(end: PageEnd) -> Self {
        Item::PageEnd(end)
    }
}
