//! Lines file fixtures shared by the integration tests.
#![allow(dead_code)]

use byteorder::{LittleEndian, WriteBytesExt};
use remt_core::parser::{FormatVariant, HEADER_LAYERED, HEADER_VERSION3};

pub const FINELINER: u32 = 4;
pub const BALLPOINT: u32 = 2;
pub const HIGHLIGHTER: u32 = 5;
pub const ERASER: u32 = 6;
pub const SHARP_PENCIL: u32 = 7;
pub const ERASE_AREA: u32 = 8;
pub const UNKNOWN_PEN: u32 = 99;

/// Writer of lines files, record by record.
pub struct LinesWriter {
    variant: FormatVariant,
    data: Vec<u8>,
}

impl LinesWriter {
    pub fn layered(pages: u32) -> Self {
        let mut data = HEADER_LAYERED.to_vec();
        data.write_u32::<LittleEndian>(pages).unwrap();
        Self {
            variant: FormatVariant::Layered,
            data,
        }
    }

    pub fn version3() -> Self {
        Self {
            variant: FormatVariant::Version3,
            data: HEADER_VERSION3.to_vec(),
        }
    }

    pub fn page(self, layers: u8) -> Self {
        self.page_record([layers, 0, 0, 0])
    }

    /// Page record with explicit reserved bytes after the layer count.
    pub fn page_record(mut self, record: [u8; 4]) -> Self {
        self.data.extend_from_slice(&record);
        self
    }

    pub fn layer(mut self, strokes: u32) -> Self {
        self.data.write_u32::<LittleEndian>(strokes).unwrap();
        self
    }

    pub fn stroke(mut self, pen: u32, color: u32, width: f32, segments: u32) -> Self {
        self.data.write_u32::<LittleEndian>(pen).unwrap();
        self.data.write_u32::<LittleEndian>(color).unwrap();
        self.data.write_u32::<LittleEndian>(0).unwrap();
        self.data.write_f32::<LittleEndian>(width).unwrap();
        self.data.write_u32::<LittleEndian>(segments).unwrap();
        self
    }

    /// Segment with the given position and pressure; other fields are
    /// derived from the position so they can be checked after decoding.
    pub fn segment(mut self, x: f32, y: f32, pressure: f32) -> Self {
        let fields: Vec<f32> = match self.variant {
            FormatVariant::Layered => vec![x, y, pressure, x + y, 0.0],
            FormatVariant::Version3 => vec![x, y, x * 2.0, y * 2.0, 1.5, pressure],
        };
        for value in fields {
            self.data.write_f32::<LittleEndian>(value).unwrap();
        }
        self
    }

    /// Stroke with segments at `(i, i)` and the given pressures.
    pub fn diagonal(self, pen: u32, color: u32, width: f32, pressures: &[f32]) -> Self {
        let mut writer = self.stroke(pen, color, width, pressures.len() as u32);
        for (i, &p) in pressures.iter().enumerate() {
            writer = writer.segment(i as f32, i as f32, p);
        }
        writer
    }

    pub fn finish(self) -> Vec<u8> {
        self.data
    }
}

/// One page, two layers:
/// - layer 0: fineliner (3 segments), ballpoint with pressures 1, 2, 3
/// - layer 1: unknown pen (2 segments), highlighter (2 segments)
pub fn sample_notebook() -> Vec<u8> {
    LinesWriter::layered(1)
        .page(2)
        .layer(2)
        .diagonal(FINELINER, 0, 0.5, &[0.1, 0.2, 0.3])
        .diagonal(BALLPOINT, 1, 0.5, &[1.0, 2.0, 3.0])
        .layer(2)
        .diagonal(UNKNOWN_PEN, 0, 0.5, &[0.5, 0.5])
        .diagonal(HIGHLIGHTER, 0, 2.0, &[0.5, 0.5])
        .finish()
}
