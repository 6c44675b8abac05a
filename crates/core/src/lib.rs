//! remt-core - decoder and pen geometry for reMarkable tablet lines files.
//!
//! A lines file is decoded into a lazy stream of [`Item`]s with
//! [`decode`](api::decode). Strokes of the stream are turned into render lines
//! and paint styles by the [`geometry`] model, and a [`LinesDevice`] drives
//! the actual drawing.

pub mod annotate;
pub mod api;
pub mod document;
pub mod error;
pub mod geometry;
pub mod model;
pub mod parser;
pub mod render;

pub use api::{DecodeOptions, DocumentBuilder, decode, decode_bytes, decode_file};
pub use error::{Diagnostics, RemtError, Result, Warning};
pub use geometry::{RenderLine, ResolvedStroke, Style, resolve_stroke, stroke_lines};
pub use model::{ColorId, Item, Layer, Page, PageEnd, Pen, Segment, Stroke};
pub use parser::{FormatVariant, LinesParser, empty_page};
pub use render::{LinesDevice, TextDevice, render_items};
