//! Lines format decoder.
//!
//! This module contains:
//! - `header`: format variant detection from the file signature
//! - `reader`: fixed-size little-endian record reads
//! - `lines`: lazy primitive iterator over a lines file

pub mod header;
pub mod lines;
pub mod reader;

pub use header::{FormatVariant, HEADER_LEN, HEADER_LAYERED, HEADER_VERSION3};
pub use lines::{EmptyPage, LinesParser, empty_page};
pub use reader::RecordReader;
