//! Builder for decoding notebook documents.
//!
//! # Example
//! ```no_run
//! use remt_core::api::DocumentBuilder;
//!
//! let items = DocumentBuilder::new("xochitl", "6f1e0c1a-41a5-4d4e-8d7c-2b0c0d2b8e4f")
//!     .pages(0..5)
//!     .build()?;
//! for item in items {
//!     println!("{:?}", item?);
//! }
//! # Ok::<(), remt_core::RemtError>(())
//! ```

use std::fs::File;
use std::io::BufReader;
use std::ops::Range;
use std::path::{Path, PathBuf};

use crate::document::{Content, DocumentParser, FsPageSource};
use crate::error::Result;

/// A builder for decoding a document stored in a device data directory.
///
/// The document consists of `<dir>/<uuid>.content` and the page lines files
/// in `<dir>/<uuid>/`.
#[derive(Debug, Clone)]
pub struct DocumentBuilder {
    dir: PathBuf,
    uuid: String,
    content: Option<Content>,
    pages: Option<Range<usize>>,
    page_numbers: Option<Vec<usize>>,
}

impl DocumentBuilder {
    pub fn new(dir: impl AsRef<Path>, uuid: &str) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
            uuid: uuid.to_string(),
            content: None,
            pages: None,
            page_numbers: None,
        }
    }

    /// Use this content instead of reading the `.content` file.
    pub fn content(mut self, content: Content) -> Self {
        self.content = Some(content);
        self
    }

    /// Decode only a range of pages (zero-indexed).
    ///
    /// Replaces any previously set page numbers.
    pub fn pages(mut self, range: Range<usize>) -> Self {
        self.pages = Some(range);
        self.page_numbers = None;
        self
    }

    /// Decode only the given pages (zero-indexed).
    ///
    /// Replaces any previously set page range.
    pub fn page_numbers(mut self, numbers: Vec<usize>) -> Self {
        self.page_numbers = Some(numbers);
        self.pages = None;
        self
    }

    pub fn content_path(&self) -> PathBuf {
        self.dir.join(format!("{}.content", self.uuid))
    }

    pub fn pages_dir(&self) -> PathBuf {
        self.dir.join(&self.uuid)
    }

    fn selected(&self, index: usize) -> bool {
        if let Some(range) = &self.pages {
            return range.contains(&index);
        }
        if let Some(numbers) = &self.page_numbers {
            return numbers.contains(&index);
        }
        true
    }

    /// Read the document content and create the page parser.
    pub fn build(self) -> Result<DocumentParser<FsPageSource>> {
        let content = match &self.content {
            Some(content) => content.clone(),
            None => Content::from_reader(BufReader::new(File::open(self.content_path())?))?,
        };

        let pages: Vec<(u32, String)> = content
            .page_names()?
            .into_iter()
            .enumerate()
            .filter(|(n, _)| self.selected(*n))
            .map(|(n, name)| (n as u32, name))
            .collect();
        tracing::debug!(
            uuid = %self.uuid,
            pages = pages.len(),
            pdf = content.is_pdf(),
            "document content"
        );

        let source = FsPageSource::new(self.pages_dir());
        Ok(DocumentParser::with_pages(source, pages))
    }
}
