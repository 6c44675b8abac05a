//! Public API: decoding entry points and the document builder.

pub mod builder;
pub mod high_level;

pub use builder::DocumentBuilder;
pub use high_level::{DecodeOptions, decode, decode_bytes, decode_file, resolve_strokes};
