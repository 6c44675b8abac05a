//! Data model of decoded lines files.
//!
//! This module contains:
//! - `primitives`: drawing primitives produced by the decoder
//! - `color`: stroke colour indices and their paint values
//! - `pen`: writing instruments with a geometry model

pub mod color;
pub mod pen;
pub mod primitives;

pub use color::{ColorId, Rgba};
pub use pen::Pen;
pub use primitives::{Item, Layer, Motion, Page, PageEnd, Segment, Stroke};
