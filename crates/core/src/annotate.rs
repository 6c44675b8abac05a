//! Locating annotations made over PDF pages.
//!
//! Strokes are recorded in device coordinates of a 1404×1872 page. The text
//! under a stroke is found by scaling its bounding box onto the PDF page.

use std::iter::Fuse;
use std::mem;

use crate::error::Result;
use crate::model::{Item, Page, Stroke};

pub const PAGE_WIDTH: f32 = 1404.0;
pub const PAGE_HEIGHT: f32 = 1872.0;

/// Horizontal margin added on both sides of a stroke's bounding box.
pub const AREA_MARGIN: f32 = 15.0;

/// Axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub struct Rect {
    pub x0: f32,
    pub y0: f32,
    pub x1: f32,
    pub y1: f32,
}

/// Strokes drawn on one page.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub struct PageStrokes {
    pub page: Page,
    pub strokes: Vec<Stroke>,
}

/// Scale factor fitting device coordinates onto a PDF page of the given size.
pub fn pdf_scale(width: f32, height: f32) -> f32 {
    (width / PAGE_WIDTH).max(height / PAGE_HEIGHT)
}

/// Area of a PDF page annotated by a stroke.
///
/// Returns `None` for a stroke without segments.
pub fn stroke_area(stroke: &Stroke, factor: f32) -> Option<Rect> {
    let first = stroke.segments.first()?;
    let init = (first.x, first.y, first.x, first.y);
    let (x0, y0, x1, y1) = stroke.segments.iter().fold(init, |(x0, y0, x1, y1), s| {
        (x0.min(s.x), y0.min(s.y), x1.max(s.x), y1.max(s.y))
    });

    Some(Rect {
        x0: (x0 - AREA_MARGIN) * factor,
        y0: y0 * factor,
        x1: (x1 + AREA_MARGIN) * factor,
        y1: y1 * factor,
    })
}

/// Group strokes of a primitive stream by page.
///
/// Pages without strokes are skipped.
pub fn page_strokes<I>(items: I) -> PageStrokesIter<I::IntoIter>
where
    I: IntoIterator<Item = Result<Item>>,
{
    PageStrokesIter {
        items: items.into_iter().fuse(),
        page: None,
        strokes: Vec::new(),
    }
}

/// Iterator returned by [`page_strokes`].
pub struct PageStrokesIter<I> {
    items: Fuse<I>,
    page: Option<Page>,
    strokes: Vec<Stroke>,
}

impl<I> PageStrokesIter<I> {
    fn take_page(&mut self) -> Option<PageStrokes> {
        let strokes = mem::take(&mut self.strokes);
        let page = self.page?;
        if strokes.is_empty() {
            None
        } else {
            Some(PageStrokes { page, strokes })
        }
    }
}

impl<I> Iterator for PageStrokesIter<I>
where
    I: Iterator<Item = Result<Item>>,
{
    type Item = Result<PageStrokes>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.items.next() {
                Some(Ok(Item::Page(page))) => {
                    let done = self.take_page();
                    self.page = Some(page);
                    if let Some(done) = done {
                        return Some(Ok(done));
                    }
                }
                Some(Ok(Item::Stroke(stroke))) => {
                    if self.page.is_some() {
                        self.strokes.push(stroke);
                    }
                }
                Some(Ok(_)) => {}
                Some(Err(e)) => return Some(Err(e)),
                None => return self.take_page().map(Ok),
            }
        }
    }
}
