//! Result record types.

use serde::{Deserialize, Deserializer, Serialize};

/// A single article from a gazette edition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// Article title, when the publication carries one.
    #[serde(default)]
    pub title: Option<String>,
    /// Name of the source file the article was extracted from.
    #[serde(default)]
    pub filename: Option<String>,
    /// Gazette section (e.g. `DO1`).
    #[serde(default)]
    pub section: Option<String>,
    /// Full document body. May be empty.
    #[serde(default, deserialize_with = "null_as_default")]
    pub text: String,
}

impl Article {
    /// Returns the title if it is present and non-empty.
    pub fn title(&self) -> Option<&str> {
        non_empty(self.title.as_deref())
    }

    /// Returns the filename if it is present and non-empty.
    pub fn filename(&self) -> Option<&str> {
        non_empty(self.filename.as_deref())
    }

    /// Returns the section if it is present and non-empty.
    pub fn section(&self) -> Option<&str> {
        non_empty(self.section.as_deref())
    }
}

/// One search hit: the matched article plus search metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// The matched article.
    #[serde(default)]
    pub article: Article,
    /// Terms that matched, in search order.
    #[serde(default, deserialize_with = "null_as_default")]
    pub terms_matched: Vec<String>,
    /// AI-generated summary, if one was produced.
    #[serde(default)]
    pub summary: Option<String>,
    /// Short excerpts around the matches, in original order.
    #[serde(default, deserialize_with = "null_as_default")]
    pub snippets: Vec<String>,
}

impl SearchResult {
    /// Returns the summary if it is present and non-empty.
    pub fn summary(&self) -> Option<&str> {
        non_empty(self.summary.as_deref())
    }
}

/// Treats empty strings like missing values.
fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Deserializes `null` as the type's default value.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_record_deserializes() {
        let json = r#"{
            "article": {
                "title": "Decreto 123",
                "filename": "d123.txt",
                "section": "Seção 1",
                "text": "O decreto 123 entra em vigor."
            },
            "terms_matched": ["decreto"],
            "summary": "",
            "snippets": []
        }"#;
        let result: SearchResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.article.title(), Some("Decreto 123"));
        assert_eq!(result.article.section(), Some("Seção 1"));
        assert_eq!(result.terms_matched, vec!["decreto"]);
        assert!(result.summary().is_none());
        assert!(result.snippets.is_empty());
    }

    #[test]
    fn test_missing_and_null_fields_default() {
        let json = r#"{"article": {"text": null, "filename": null}, "terms_matched": null}"#;
        let result: SearchResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.article.text, "");
        assert!(result.article.filename().is_none());
        assert!(result.terms_matched.is_empty());
        assert!(result.snippets.is_empty());
        assert!(result.summary.is_none());
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let json = r#"{"article": {"text": "x", "xml_path": "/tmp/a.xml"}, "score": 3}"#;
        let result: SearchResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.article.text, "x");
    }

    #[test]
    fn test_empty_strings_treated_as_absent() {
        let article = Article {
            title: Some(String::new()),
            filename: Some("a.xml".into()),
            section: Some(String::new()),
            text: String::new(),
        };
        assert!(article.title().is_none());
        assert_eq!(article.filename(), Some("a.xml"));
        assert!(article.section().is_none());
    }
}
