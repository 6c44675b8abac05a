//! Notebook documents.
//!
//! A notebook is stored as a `<uuid>.content` JSON file describing its pages
//! and a `<uuid>/` directory holding one lines file per page. Pages without
//! a lines file are blank.

pub mod content;
pub mod pages;

pub use content::Content;
pub use pages::{DocumentParser, FsPageSource, PageSource};
