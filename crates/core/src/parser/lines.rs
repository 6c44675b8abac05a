//! Lazy decoder of lines files.
//!
//! Records are nested with their repetition counts read immediately before
//! the repeated records:
//!
//! ```text
//! header [page count]
//! page:    u8 layer count, u8 reserved, u16 reserved
//! layer:   u32 stroke count
//! stroke:  u32 pen, u32 color, u32 reserved, f32 width, u32 segment count
//! segment: 5 or 6 f32, depending on the header
//! ```
//!
//! Counts are trusted as read. The parser never seeks, so the position of
//! every record depends on exact consumption of all prior records.

use std::array;
use std::io::Read;

use byteorder::{ByteOrder, LittleEndian};

use super::header::{FormatVariant, LAYERED_SEGMENT_LEN, VERSION3_SEGMENT_LEN, read_header};
use super::reader::RecordReader;
use crate::error::Result;
use crate::model::{Item, Layer, Motion, Page, PageEnd, Segment, Stroke};

const STROKE_RECORD_LEN: usize = 20;
const MAX_SEGMENT_PREALLOC: usize = 4096;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Page,
    Layer,
    Stroke,
    PageEnd,
    Done,
}

/// Pull-based iterator over the primitives of one lines file.
///
/// The header is validated on construction, so an unknown format fails
/// before any primitive is produced. After the first error the iterator is
/// exhausted.
pub struct LinesParser<R> {
    reader: RecordReader<R>,
    variant: FormatVariant,
    first_page: u32,
    page_count: u32,
    page: u32,
    layer_count: u32,
    layer: u32,
    stroke_count: u32,
    stroke: u32,
    state: State,
}

impl<R: Read> LinesParser<R> {
    /// Create a parser over `reader`.
    ///
    /// `page_number` is the number given to the page of a single-page
    /// (version 3) file. Multi-page files number their pages from 0.
    pub fn new(reader: R, page_number: u32) -> Result<Self> {
        let mut reader = RecordReader::new(reader);
        let (variant, page_count) = read_header(&mut reader)?;
        Ok(Self {
            reader,
            variant,
            first_page: page_number,
            page_count,
            page: 0,
            layer_count: 0,
            layer: 0,
            stroke_count: 0,
            stroke: 0,
            state: State::Page,
        })
    }

    pub fn variant(&self) -> FormatVariant {
        self.variant
    }

    /// Number of pages declared by the file.
    pub fn page_count(&self) -> u32 {
        self.page_count
    }

    /// Byte offset of the next record.
    pub fn offset(&self) -> u64 {
        self.reader.offset()
    }

    fn page_number(&self) -> u32 {
        match self.variant {
            FormatVariant::Layered => self.page,
            FormatVariant::Version3 => self.first_page + self.page,
        }
    }

    fn step(&mut self) -> Result<Option<Item>> {
        loop {
            match self.state {
                State::Page => {
                    if self.page >= self.page_count {
                        self.state = State::Done;
                        return Ok(None);
                    }
                    let buf: [u8; 4] = self.reader.read_record("page")?;
                    self.layer_count = u32::from(buf[0]);
                    self.layer = 0;
                    self.state = State::Layer;
                    return Ok(Some(Page {
                        number: self.page_number(),
                    }
                    .into()));
                }
                State::Layer => {
                    if self.layer >= self.layer_count {
                        self.state = State::PageEnd;
                        continue;
                    }
                    let buf: [u8; 4] = self.reader.read_record("layer")?;
                    self.stroke_count = LittleEndian::read_u32(&buf);
                    self.stroke = 0;
                    self.state = State::Stroke;
                    return Ok(Some(Layer { number: self.layer }.into()));
                }
                State::Stroke => {
                    if self.stroke >= self.stroke_count {
                        self.layer += 1;
                        self.state = State::Layer;
                        continue;
                    }
                    let stroke = self.read_stroke(self.stroke)?;
                    self.stroke += 1;
                    return Ok(Some(stroke.into()));
                }
                State::PageEnd => {
                    let number = self.page_number();
                    self.page += 1;
                    self.state = State::Page;
                    return Ok(Some(PageEnd { number }.into()));
                }
                State::Done => return Ok(None),
            }
        }
    }

    fn read_stroke(&mut self, number: u32) -> Result<Stroke> {
        let buf: [u8; STROKE_RECORD_LEN] = self.reader.read_record("stroke")?;
        let pen = LittleEndian::read_u32(&buf[0..4]);
        let color = LittleEndian::read_u32(&buf[4..8]);
        let width = LittleEndian::read_f32(&buf[12..16]);
        let count = LittleEndian::read_u32(&buf[16..20]);

        let mut segments = Vec::with_capacity((count as usize).min(MAX_SEGMENT_PREALLOC));
        for n in 0..count {
            segments.push(self.read_segment(n)?);
        }

        tracing::trace!(number, pen, color, width, segments = count, "stroke");
        Ok(Stroke {
            number,
            pen,
            color,
            width,
            segments,
        })
    }

    fn read_segment(&mut self, number: u32) -> Result<Segment> {
        match self.variant {
            FormatVariant::Layered => {
                let buf: [u8; LAYERED_SEGMENT_LEN] = self.reader.read_record("segment")?;
                let mut v = [0f32; LAYERED_SEGMENT_LEN / 4];
                LittleEndian::read_f32_into(&buf, &mut v);
                Ok(Segment {
                    number,
                    x: v[0],
                    y: v[1],
                    pressure: v[2],
                    tilt: Some(v[3]),
                    motion: None,
                })
            }
            FormatVariant::Version3 => {
                let buf: [u8; VERSION3_SEGMENT_LEN] = self.reader.read_record("segment")?;
                let mut v = [0f32; VERSION3_SEGMENT_LEN / 4];
                LittleEndian::read_f32_into(&buf, &mut v);
                Ok(Segment {
                    number,
                    x: v[0],
                    y: v[1],
                    pressure: v[5],
                    tilt: None,
                    motion: Some(Motion {
                        speed: v[2],
                        direction: v[3],
                        width: v[4],
                    }),
                })
            }
        }
    }
}

impl<R: Read> Iterator for LinesParser<R> {
    type Item = Result<Item>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.step() {
            Ok(item) => item.map(Ok),
            Err(e) => {
                self.state = State::Done;
                Some(Err(e))
            }
        }
    }
}

/// Primitives of a page without content.
pub type EmptyPage = array::IntoIter<Result<Item>, 2>;

/// Produce `Page(n)` immediately followed by `PageEnd(n)`.
///
/// Used for pages whose lines file does not exist.
pub fn empty_page(number: u32) -> EmptyPage {
    [
        Ok(Page { number }.into()),
        Ok(PageEnd { number }.into()),
    ]
    .into_iter()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RemtError;
    use crate::parser::header::{HEADER_LAYERED, HEADER_VERSION3};

    fn layered(pages: u32, body: &[u8]) -> Vec<u8> {
        let mut data = HEADER_LAYERED.to_vec();
        data.extend_from_slice(&pages.to_le_bytes());
        data.extend_from_slice(body);
        data
    }

    #[test]
    fn test_empty_containers() {
        // page with two layers, the first one without strokes
        let mut body = vec![2, 0, 0, 0];
        body.extend_from_slice(&0u32.to_le_bytes());
        body.extend_from_slice(&0u32.to_le_bytes());
        let data = layered(1, &body);

        let items: Vec<Item> = LinesParser::new(&data[..], 0)
            .unwrap()
            .collect::<Result<_>>()
            .unwrap();
        assert_eq!(
            items,
            vec![
                Item::Page(Page { number: 0 }),
                Item::Layer(Layer { number: 0 }),
                Item::Layer(Layer { number: 1 }),
                Item::PageEnd(PageEnd { number: 0 }),
            ]
        );
    }

    #[test]
    fn test_page_without_layers() {
        let data = layered(2, &[0, 0, 0, 0, 0, 0, 0, 0]);
        let kinds: Vec<&str> = LinesParser::new(&data[..], 0)
            .unwrap()
            .map(|item| item.unwrap().kind())
            .collect();
        assert_eq!(kinds, vec!["page", "page_end", "page", "page_end"]);
    }

    #[test]
    fn test_version3_uses_given_page_number() {
        let mut data = HEADER_VERSION3.to_vec();
        data.extend_from_slice(&[0, 0, 0, 0]);
        let items: Vec<Item> = LinesParser::new(&data[..], 5)
            .unwrap()
            .collect::<Result<_>>()
            .unwrap();
        assert_eq!(
            items,
            vec![
                Item::Page(Page { number: 5 }),
                Item::PageEnd(PageEnd { number: 5 }),
            ]
        );
    }

    #[test]
    fn test_fused_after_error() {
        // layer count promised, no layer record
        let data = layered(1, &[1, 0, 0, 0]);
        let mut parser = LinesParser::new(&data[..], 0).unwrap();
        assert!(matches!(parser.next(), Some(Ok(Item::Page(_)))));
        assert!(matches!(
            parser.next(),
            Some(Err(RemtError::Truncated { record: "layer", .. }))
        ));
        assert!(parser.next().is_none());
    }

    #[test]
    fn test_empty_page() {
        let items: Vec<Item> = empty_page(3).collect::<Result<_>>().unwrap();
        assert_eq!(
            items,
            vec![
                Item::Page(Page { number: 3 }),
                Item::PageEnd(PageEnd { number: 3 }),
            ]
        );
    }
}
