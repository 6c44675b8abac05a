//! Error and diagnostic types for the remt lines decoder.

use std::fmt;

use thiserror::Error;

/// Primary error type for decoding operations.
///
/// Every variant is fatal for the document being decoded. Pen level problems
/// are reported as [`Warning`] instead.
#[derive(Error, Debug)]
pub enum RemtError {
    #[error("unknown lines format header: {}", String::from_utf8_lossy(.found))]
    Format { found: Vec<u8> },

    #[error(
        "truncated {record} record at offset {offset}: need {needed} bytes, got {available}"
    )]
    Truncated {
        record: &'static str,
        offset: u64,
        needed: usize,
        available: usize,
    },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid document content: {0}")]
    Content(String),
}

/// Convenience Result type alias for RemtError.
pub type Result<T> = std::result::Result<T, RemtError>;

/// Recoverable condition found while resolving a stroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub enum Warning {
    /// Stroke drawn with a pen that has no geometry model. Nothing is drawn.
    UnsupportedPen { stroke: u32, pen: u32 },
    /// Stroke colour index outside the palette. Drawn black.
    UnsupportedColor { stroke: u32, color: u32 },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::UnsupportedPen { stroke, pen } => {
                let name = crate::model::pen::instrument_name(*pen).unwrap_or("unknown");
                write!(f, "stroke {stroke}: unsupported pen {pen} ({name})")
            }
            Warning::UnsupportedColor { stroke, color } => {
                write!(f, "stroke {stroke}: unsupported color {color}")
            }
        }
    }
}

/// Warnings collected while resolving strokes of a document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    warnings: Vec<Warning>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, warning: Warning) {
        tracing::debug!(%warning, "stroke diagnostic");
        self.warnings.push(warning);
    }

    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    pub fn is_empty(&self) -> bool {
        self.warnings.is_empty()
    }

    pub fn len(&self) -> usize {
        self.warnings.len()
    }
}
