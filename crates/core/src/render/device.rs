//! Lines device - output interface for decoded primitives.
//!
//! A device receives page and layer boundaries and fully resolved strokes.
//! It owns canvas setup, PDF page overlay, brush textures and the actual
//! stroking of render lines.

use crate::error::{Diagnostics, Result};
use crate::geometry::{ResolvedStroke, resolve_stroke};
use crate::model::{Item, Layer, Page, PageEnd};

/// Drawing backend driven by [`render_items`].
pub trait LinesDevice {
    /// Begin a page. Drawing state saved here is restored in `end_page`.
    fn begin_page(&mut self, _page: &Page) -> Result<()> {
        Ok(())
    }

    /// End the page with the same number.
    fn end_page(&mut self, _page: &PageEnd) -> Result<()> {
        Ok(())
    }

    /// Begin a layer. Layers are drawn in order, later ones on top.
    fn begin_layer(&mut self, _layer: &Layer) -> Result<()> {
        Ok(())
    }

    /// Draw a stroke's render lines with its style.
    fn draw_stroke(&mut self, _stroke: &ResolvedStroke) -> Result<()> {
        Ok(())
    }
}

/// Drive a device with a primitive stream.
///
/// Strokes with unsupported pens are skipped and reported in the returned
/// diagnostics. The first decoding or device error aborts rendering.
pub fn render_items<I, D>(items: I, device: &mut D) -> Result<Diagnostics>
where
    I: IntoIterator<Item = Result<Item>>,
    D: LinesDevice + ?Sized,
{
    let mut diagnostics = Diagnostics::new();
    for item in items {
        match item? {
            Item::Page(page) => device.begin_page(&page)?,
            Item::Layer(layer) => device.begin_layer(&layer)?,
            Item::Stroke(stroke) => {
                if let Some(resolved) = resolve_stroke(&stroke, &mut diagnostics) {
                    device.draw_stroke(&resolved)?;
                }
            }
            Item::PageEnd(end) => device.end_page(&end)?,
        }
    }
    Ok(diagnostics)
}

/// Event received by a [`RecordingDevice`].
#[derive(Debug, Clone, PartialEq)]
pub enum DeviceEvent {
    BeginPage(u32),
    EndPage(u32),
    BeginLayer(u32),
    Stroke(ResolvedStroke),
}

/// Device keeping every call it receives, in order.
#[derive(Debug, Clone, Default)]
pub struct RecordingDevice {
    pub events: Vec<DeviceEvent>,
}

impl RecordingDevice {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn strokes(&self) -> impl Iterator<Item = &ResolvedStroke> {
        self.events.iter().filter_map(|e| match e {
            DeviceEvent::Stroke(stroke) => Some(stroke),
            _ => None,
        })
    }
}

impl LinesDevice for RecordingDevice {
    fn begin_page(&mut self, page: &Page) -> Result<()> {
        self.events.push(DeviceEvent::BeginPage(page.number));
        Ok(())
    }

    fn end_page(&mut self, page: &PageEnd) -> Result<()> {
        self.events.push(DeviceEvent::EndPage(page.number));
        Ok(())
    }

    fn begin_layer(&mut self, layer: &Layer) -> Result<()> {
        self.events.push(DeviceEvent::BeginLayer(layer.number));
        Ok(())
    }

    fn draw_stroke(&mut self, stroke: &ResolvedStroke) -> Result<()> {
        self.events.push(DeviceEvent::Stroke(stroke.clone()));
        Ok(())
    }
}
