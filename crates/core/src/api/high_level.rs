//! High-level decoding functions.
//!
//! These functions wrap [`LinesParser`] for the common cases of decoding a
//! reader, a byte buffer or a file.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::error::{Diagnostics, Result};
use crate::geometry::{ResolvedStroke, resolve_stroke};
use crate::model::Item;
use crate::parser::LinesParser;

/// Options for decoding a lines file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Number of the page of a single-page (version 3) file. Multi-page
    /// files always number their pages from 0.
    pub page_number: u32,
}

impl DecodeOptions {
    pub fn page_number(page_number: u32) -> Self {
        Self { page_number }
    }
}

/// Start decoding a lines file.
///
/// The header is checked immediately; primitives are decoded as the
/// returned iterator is consumed.
pub fn decode<R: Read>(reader: R, options: Option<DecodeOptions>) -> Result<LinesParser<R>> {
    let options = options.unwrap_or_default();
    LinesParser::new(reader, options.page_number)
}

/// Decode all primitives of a lines file held in memory.
pub fn decode_bytes(data: &[u8], options: Option<DecodeOptions>) -> Result<Vec<Item>> {
    decode(data, options)?.collect()
}

/// Open and start decoding a lines file.
pub fn decode_file(
    path: impl AsRef<Path>,
    options: Option<DecodeOptions>,
) -> Result<LinesParser<BufReader<File>>> {
    let file = File::open(path.as_ref())?;
    decode(BufReader::new(file), options)
}

/// Resolve every stroke of a primitive stream.
///
/// Strokes with unsupported pens are left out and reported in the returned
/// diagnostics.
pub fn resolve_strokes<I>(items: I) -> Result<(Vec<ResolvedStroke>, Diagnostics)>
where
    I: IntoIterator<Item = Result<Item>>,
{
    let mut diagnostics = Diagnostics::new();
    let mut strokes = Vec::new();
    for item in items {
        if let Item::Stroke(stroke) = item? {
            strokes.extend(resolve_stroke(&stroke, &mut diagnostics));
        }
    }
    Ok((strokes, diagnostics))
}
