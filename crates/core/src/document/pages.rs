//! Decoding all pages of a document.

use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufReader, Cursor, Read};
use std::path::{Path, PathBuf};

use super::content::Content;
use crate::error::Result;
use crate::model::Item;
use crate::parser::{EmptyPage, LinesParser, empty_page};

/// Provider of page lines files by name.
pub trait PageSource {
    type Reader: Read;

    /// Open the lines file of a page, or `None` if the page has none.
    fn open(&self, name: &str) -> Result<Option<Self::Reader>>;
}

/// Page lines files stored as `<dir>/<name>.rm`.
#[derive(Debug, Clone)]
pub struct FsPageSource {
    dir: PathBuf,
}

impl FsPageSource {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}.rm"))
    }
}

impl PageSource for FsPageSource {
    type Reader = BufReader<File>;

    fn open(&self, name: &str) -> Result<Option<Self::Reader>> {
        match File::open(self.path(name)) {
            Ok(file) => Ok(Some(BufReader::new(file))),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

impl PageSource for HashMap<String, Vec<u8>> {
    type Reader = Cursor<Vec<u8>>;

    fn open(&self, name: &str) -> Result<Option<Self::Reader>> {
        Ok(self.get(name).cloned().map(Cursor::new))
    }
}

enum PageItems<R> {
    Lines(LinesParser<R>),
    Empty(EmptyPage),
}

impl<R: Read> Iterator for PageItems<R> {
    type Item = Result<Item>;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            PageItems::Lines(parser) => parser.next(),
            PageItems::Empty(items) => items.next(),
        }
    }
}

/// Lazy iterator over the primitives of all pages of a document.
///
/// Each page lines file is opened only when the previous page is consumed.
/// A missing page file yields an empty page. The first error ends the
/// iteration.
pub struct DocumentParser<S: PageSource> {
    source: S,
    pages: std::vec::IntoIter<(u32, String)>,
    current: Option<PageItems<S::Reader>>,
    failed: bool,
}

impl<S: PageSource> DocumentParser<S> {
    /// Parse all pages listed by `content`.
    pub fn new(source: S, content: &Content) -> Result<Self> {
        let pages = content
            .page_names()?
            .into_iter()
            .enumerate()
            .map(|(n, name)| (n as u32, name))
            .collect();
        Ok(Self::with_pages(source, pages))
    }

    /// Parse the given `(page number, page name)` pairs in order.
    pub fn with_pages(source: S, pages: Vec<(u32, String)>) -> Self {
        Self {
            source,
            pages: pages.into_iter(),
            current: None,
            failed: false,
        }
    }

    fn open_page(&self, number: u32, name: &str) -> Result<PageItems<S::Reader>> {
        match self.source.open(name)? {
            Some(reader) => {
                tracing::debug!(number, name, "parsing page");
                Ok(PageItems::Lines(LinesParser::new(reader, number)?))
            }
            None => {
                tracing::debug!(number, name, "page has no lines file");
                Ok(PageItems::Empty(empty_page(number)))
            }
        }
    }
}

impl<S: PageSource> Iterator for DocumentParser<S> {
    type Item = Result<Item>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        loop {
            if let Some(items) = self.current.as_mut() {
                match items.next() {
                    Some(Ok(item)) => return Some(Ok(item)),
                    Some(Err(e)) => {
                        self.failed = true;
                        return Some(Err(e));
                    }
                    None => self.current = None,
                }
            }

            let (number, name) = self.pages.next()?;
            match self.open_page(number, &name) {
                Ok(items) => self.current = Some(items),
                Err(e) => {
                    self.failed = true;
                    return Some(Err(e));
                }
            }
        }
    }
}
