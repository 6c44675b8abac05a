//! Document `.content` file.

use std::io::Read;

use serde::Deserialize;

use crate::error::{RemtError, Result};

/// Page layout of a document.
///
/// Newer documents list page uuids in `pages`; older ones only store a
/// `pageCount` and name page files by index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Content {
    #[serde(default)]
    pub pages: Option<Vec<String>>,
    #[serde(default)]
    pub page_count: Option<usize>,
    #[serde(default)]
    pub file_type: Option<String>,
}

impl Content {
    pub fn from_json(data: &str) -> Result<Self> {
        serde_json::from_str(data).map_err(|e| RemtError::Content(e.to_string()))
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        serde_json::from_reader(reader).map_err(|e| RemtError::Content(e.to_string()))
    }

    /// Content of a notebook with `count` pages named by index.
    pub fn with_page_count(count: usize) -> Self {
        Self {
            page_count: Some(count),
            ..Self::default()
        }
    }

    /// File names, without extension, of the page lines files in page order.
    pub fn page_names(&self) -> Result<Vec<String>> {
        if let Some(pages) = &self.pages {
            return Ok(pages.clone());
        }
        match self.page_count {
            Some(count) => Ok((0..count).map(|n| n.to_string()).collect()),
            None => Err(RemtError::Content(
                "neither pages nor pageCount present".to_string(),
            )),
        }
    }

    /// Whether the document annotates a PDF file.
    pub fn is_pdf(&self) -> bool {
        self.file_type.as_deref() == Some("pdf")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_list_takes_precedence() {
        let content = Content::from_json(
            r#"{"fileType": "pdf", "pageCount": 5, "pages": ["a1", "b2"], "lineHeight": -1}"#,
        )
        .unwrap();
        assert!(content.is_pdf());
        assert_eq!(content.page_names().unwrap(), vec!["a1", "b2"]);
    }

    #[test]
    fn test_page_count_names() {
        let content = Content::from_json(r#"{"pageCount": 3}"#).unwrap();
        assert!(!content.is_pdf());
        assert_eq!(content.page_names().unwrap(), vec!["0", "1", "2"]);
    }

    #[test]
    fn test_missing_page_info() {
        let content = Content::from_json("{}").unwrap();
        assert!(matches!(content.page_names(), Err(RemtError::Content(_))));
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            Content::from_json("{pages"),
            Err(RemtError::Content(_))
        ));
    }
}
