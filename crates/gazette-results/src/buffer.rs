//! The results buffer for the page currently on screen.

use std::{fs, path::Path, slice};

use serde::Deserialize;

use crate::{ResultsError, SearchResult};

/// Accepted JSON shapes for a results payload.
#[derive(Deserialize)]
#[serde(untagged)]
enum Payload {
    /// A bare array of records.
    List(Vec<SearchResult>),
    /// The search server's native envelope.
    Envelope {
        /// Matching records.
        matches: Vec<SearchResult>,
    },
}

/// Ordered, read-only collection of results for one rendered page.
///
/// Populated once when the page is set up and only read afterwards. Positions are 1-based,
/// matching the numbering shown next to each result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultsBuffer {
    /// Results in display order.
    results: Vec<SearchResult>,
}

impl ResultsBuffer {
    /// Creates a buffer from already-decoded results.
    pub fn new(results: Vec<SearchResult>) -> Self {
        Self { results }
    }

    /// Parses a buffer from JSON.
    ///
    /// Accepts either an array of results or an object with a `matches` array.
    pub fn from_json_str(json: &str) -> Result<Self, ResultsError> {
        let payload: Payload = serde_json::from_str(json)?;
        let results = match payload {
            Payload::List(results) | Payload::Envelope { matches: results } => results,
        };
        Ok(Self::new(results))
    }

    /// Reads and parses a results file.
    pub fn load(path: &Path) -> Result<Self, ResultsError> {
        let contents = fs::read_to_string(path).map_err(|source| ResultsError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&contents)
    }

    /// Returns the result at a 1-based position.
    ///
    /// Position 0 and positions past the end return `None`; stale references from a
    /// previously rendered page land here.
    pub fn get(&self, position: usize) -> Option<&SearchResult> {
        position
            .checked_sub(1)
            .and_then(|index| self.results.get(index))
    }

    /// Number of results.
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Returns true if the buffer holds no results.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Iterates over results in display order.
    pub fn iter(&self) -> slice::Iter<'_, SearchResult> {
        self.results.iter()
    }
}

impl<'a> IntoIterator for &'a ResultsBuffer {
    type Item = &'a SearchResult;
    type IntoIter = slice::Iter<'a, SearchResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::Article;

    fn result_with_title(title: &str) -> SearchResult {
        SearchResult {
            article: Article {
                title: Some(title.into()),
                ..Article::default()
            },
            ..SearchResult::default()
        }
    }

    #[test]
    fn test_get_is_one_based() {
        let buffer = ResultsBuffer::new(vec![result_with_title("a"), result_with_title("b")]);
        assert_eq!(buffer.get(1).unwrap().article.title(), Some("a"));
        assert_eq!(buffer.get(2).unwrap().article.title(), Some("b"));
    }

    #[test]
    fn test_get_out_of_range() {
        let buffer = ResultsBuffer::new(vec![result_with_title("a")]);
        assert!(buffer.get(0).is_none());
        assert!(buffer.get(2).is_none());
        assert!(buffer.get(usize::MAX).is_none());
        assert!(ResultsBuffer::default().get(1).is_none());
    }

    #[test]
    fn test_parse_bare_array() {
        let buffer = ResultsBuffer::from_json_str(
            r#"[{"article": {"text": "a"}}, {"article": {"text": "b"}}]"#,
        )
        .unwrap();
        assert_eq!(buffer.len(), 2);
        assert_eq!(buffer.get(2).unwrap().article.text, "b");
    }

    #[test]
    fn test_parse_matches_envelope() {
        let buffer = ResultsBuffer::from_json_str(
            r#"{"matches": [{"article": {"text": "a"}, "terms_matched": ["a"]}], "stats": {}}"#,
        )
        .unwrap();
        assert_eq!(buffer.len(), 1);
        assert_eq!(buffer.get(1).unwrap().terms_matched, vec!["a"]);
    }

    #[test]
    fn test_parse_invalid_json() {
        let err = ResultsBuffer::from_json_str("{not json").unwrap_err();
        assert!(matches!(err, ResultsError::ParseJson { .. }));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = ResultsBuffer::load(&dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, ResultsError::ReadFile { .. }));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.json");
        fs::write(&path, r#"[{"article": {"title": "Portaria 7", "text": "t"}}]"#).unwrap();
        let buffer = ResultsBuffer::load(&path).unwrap();
        assert_eq!(buffer.iter().count(), 1);
        assert!(!buffer.is_empty());
    }
}
