//! Text dump device.

use std::io::Write;

use super::device::LinesDevice;
use crate::error::Result;
use crate::geometry::ResolvedStroke;
use crate::model::{Layer, Page, PageEnd};

/// Writes one line per primitive and one indented line per render line.
pub struct TextDevice<W: Write> {
    out: W,
}

impl<W: Write> TextDevice<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> LinesDevice for TextDevice<W> {
    fn begin_page(&mut self, page: &Page) -> Result<()> {
        writeln!(self.out, "page {}", page.number)?;
        Ok(())
    }

    fn end_page(&mut self, page: &PageEnd) -> Result<()> {
        writeln!(self.out, "end {}", page.number)?;
        Ok(())
    }

    fn begin_layer(&mut self, layer: &Layer) -> Result<()> {
        writeln!(self.out, "  layer {}", layer.number)?;
        Ok(())
    }

    fn draw_stroke(&mut self, stroke: &ResolvedStroke) -> Result<()> {
        let style = &stroke.style;
        write!(
            self.out,
            "    stroke {} {} {} alpha={}",
            stroke.number,
            style.pen.name(),
            style.color.name(),
            style.paint.alpha
        )?;
        if let Some(brush) = style.brush {
            write!(self.out, " brush={}", brush.texture())?;
        }
        writeln!(self.out)?;

        for line in &stroke.lines {
            write!(self.out, "      w={}", line.width)?;
            for (x, y) in &line.points {
                write!(self.out, " {x},{y}")?;
            }
            writeln!(self.out)?;
        }
        Ok(())
    }
}
