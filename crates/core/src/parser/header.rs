//! Lines file signatures.
//!
//! Both supported signatures are 43 bytes long:
//!
//! - `reMarkable lines with selections and layers` followed by a `u32` page
//!   count; segments are 5 floats `(x, y, pressure, tilt, reserved)`
//! - `reMarkable .lines file, version=3` padded with 10 spaces; a single page,
//!   segments are 6 floats `(x, y, speed, direction, width, pressure)`

use std::io::Read;

use byteorder::{LittleEndian, ReadBytesExt};

use super::reader::RecordReader;
use crate::error::{RemtError, Result};

pub const HEADER_LEN: usize = 43;

pub const HEADER_LAYERED: &[u8; HEADER_LEN] = b"reMarkable lines with selections and layers";

pub const HEADER_VERSION3: &[u8; HEADER_LEN] =
    b"reMarkable .lines file, version=3          ";

/// Segment record sizes: 5 and 6 little-endian floats.
pub const LAYERED_SEGMENT_LEN: usize = 20;
pub const VERSION3_SEGMENT_LEN: usize = 24;

/// Wire layout of a lines file, selected once from its header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub enum FormatVariant {
    /// Multi-page file with an embedded page count, 20-byte segments.
    Layered,
    /// Single-page version 3 file, 24-byte segments.
    Version3,
}

impl FormatVariant {
    pub const ALL: [FormatVariant; 2] = [FormatVariant::Layered, FormatVariant::Version3];

    /// Match a header buffer against the known signatures.
    pub fn detect(header: &[u8]) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|variant| header == variant.signature())
    }

    /// Whether `prefix` could still grow into a known signature.
    pub fn is_signature_prefix(prefix: &[u8]) -> bool {
        Self::ALL
            .into_iter()
            .any(|variant| variant.signature().starts_with(prefix))
    }

    pub fn signature(self) -> &'static [u8; HEADER_LEN] {
        match self {
            FormatVariant::Layered => HEADER_LAYERED,
            FormatVariant::Version3 => HEADER_VERSION3,
        }
    }

    /// Size in bytes of one segment record.
    pub fn segment_size(self) -> usize {
        match self {
            FormatVariant::Layered => LAYERED_SEGMENT_LEN,
            FormatVariant::Version3 => VERSION3_SEGMENT_LEN,
        }
    }

    pub fn has_page_count(self) -> bool {
        matches!(self, FormatVariant::Layered)
    }
}

/// Read and validate the file header.
///
/// Returns the detected variant and the number of pages in the file, which
/// is always 1 for version 3 files. A short header is a format error as soon
/// as its bytes rule out every signature, and truncated otherwise.
pub fn read_header<R: Read>(reader: &mut RecordReader<R>) -> Result<(FormatVariant, u32)> {
    let (header, filled) = reader.read_partial::<HEADER_LEN>()?;
    if filled < HEADER_LEN {
        let found = &header[..filled];
        if !FormatVariant::is_signature_prefix(found) {
            return Err(RemtError::Format {
                found: found.to_vec(),
            });
        }
        return Err(RemtError::Truncated {
            record: "header",
            offset: reader.offset(),
            needed: HEADER_LEN,
            available: filled,
        });
    }

    let variant = FormatVariant::detect(&header).ok_or_else(|| RemtError::Format {
        found: header.to_vec(),
    })?;

    let page_count = if variant.has_page_count() {
        let buf: [u8; 4] = reader.read_record("page count")?;
        (&buf[..]).read_u32::<LittleEndian>()?
    } else {
        1
    };

    tracing::debug!(
        ?variant,
        page_count,
        segment_size = variant.segment_size(),
        "lines header"
    );
    Ok((variant, page_count))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signatures_have_fixed_length() {
        assert_eq!(HEADER_LAYERED.len(), HEADER_LEN);
        assert_eq!(HEADER_VERSION3.len(), HEADER_LEN);
        assert!(HEADER_VERSION3.ends_with(&[b' '; 10]));
    }

    #[test]
    fn test_detect() {
        assert_eq!(
            FormatVariant::detect(HEADER_LAYERED),
            Some(FormatVariant::Layered)
        );
        assert_eq!(
            FormatVariant::detect(HEADER_VERSION3),
            Some(FormatVariant::Version3)
        );

        let mut header = *HEADER_VERSION3;
        header[HEADER_LEN - 1] = 0;
        assert_eq!(FormatVariant::detect(&header), None);
    }

    #[test]
    fn test_short_header() {
        let mut reader = RecordReader::new(&b"reMarkable .li"[..]);
        assert!(matches!(
            read_header(&mut reader),
            Err(RemtError::Truncated {
                record: "header",
                available: 14,
                ..
            })
        ));

        let mut reader = RecordReader::new(&b"XeMarkable lines"[..]);
        match read_header(&mut reader) {
            Err(RemtError::Format { found }) => assert_eq!(found, b"XeMarkable lines"),
            other => panic!("unexpected result: {other:?}"),
        }

        let mut reader = RecordReader::new(&b""[..]);
        assert!(matches!(
            read_header(&mut reader),
            Err(RemtError::Truncated { available: 0, .. })
        ));
    }

    #[test]
    fn test_signature_prefix() {
        assert!(FormatVariant::is_signature_prefix(b"reMarkable "));
        assert!(FormatVariant::is_signature_prefix(b"reMarkable lines with"));
        assert!(FormatVariant::is_signature_prefix(b"reMarkable .lines"));
        assert!(!FormatVariant::is_signature_prefix(b"reMarkable x"));
    }

    #[test]
    fn test_segment_sizes() {
        for variant in FormatVariant::ALL {
            assert_eq!(FormatVariant::detect(variant.signature()), Some(variant));
        }
        assert_eq!(FormatVariant::Layered.segment_size(), 5 * 4);
        assert_eq!(FormatVariant::Version3.segment_size(), 6 * 4);
    }

    #[test]
    fn test_read_header_page_count() {
        let mut data = HEADER_LAYERED.to_vec();
        data.extend_from_slice(&3u32.to_le_bytes());
        let mut reader = RecordReader::new(&data[..]);
        let (variant, pages) = read_header(&mut reader).unwrap();
        assert_eq!(variant, FormatVariant::Layered);
        assert_eq!(pages, 3);
        assert_eq!(reader.offset(), 47);
    }

    #[test]
    fn test_read_header_version3_single_page() {
        let mut reader = RecordReader::new(&HEADER_VERSION3[..]);
        let (variant, pages) = read_header(&mut reader).unwrap();
        assert_eq!(variant, FormatVariant::Version3);
        assert_eq!(pages, 1);
    }
}
