//! Builds rendered documents from search results.

use gazette_config::{Config, Labels, Strategy, ViewSettings};
use gazette_highlight::{Highlighted, TermHighlighter};
use gazette_results::SearchResult;
use tracing::debug;

use crate::document::{Metadata, RenderedDocument};

/// Composes the detail view of a single search result.
///
/// The builder holds only settings, so building is deterministic: the same result always
/// yields the same document, and the result itself is never modified.
#[derive(Debug, Clone)]
pub struct DetailViewBuilder {
    /// Resolved user-visible strings.
    labels: Labels,
    /// CSS class for highlight markers.
    highlight_class: String,
    /// How multiple terms are combined.
    strategy: Strategy,
    /// Whether snippets get the same highlighting as the body.
    highlight_snippets: bool,
    /// Maximum snippets kept (0 = all).
    max_snippets: usize,
    /// Digit group separator for the character count.
    separator: char,
}

impl DetailViewBuilder {
    /// Creates a builder from view settings and labels.
    pub fn new(view: &ViewSettings, labels: &Labels) -> Self {
        Self {
            labels: labels.clone(),
            highlight_class: view.highlight_class.clone(),
            strategy: view.strategy,
            highlight_snippets: view.highlight_snippets,
            max_snippets: view.max_snippets,
            separator: view.locale.thousands_separator(),
        }
    }

    /// Creates a builder from a loaded configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.view, &config.labels)
    }

    /// Returns the labels this builder renders with.
    pub fn labels(&self) -> &Labels {
        &self.labels
    }

    /// Builds the detail view for `result`.
    pub fn build(&self, result: &SearchResult) -> RenderedDocument {
        let article = &result.article;
        let title = article
            .title()
            .or_else(|| article.filename())
            .unwrap_or(&self.labels.document_placeholder)
            .to_string();

        let char_count = article.text.chars().count();
        let metadata = Metadata {
            title: title.clone(),
            section: self.or_not_available(article.section()),
            filename: self.or_not_available(article.filename()),
            terms: result.terms_matched.join(", "),
            char_count,
            size: format!(
                "{} {}",
                group_thousands(char_count, self.separator),
                self.labels.characters
            ),
        };

        let highlighter = TermHighlighter::with_strategy(&result.terms_matched, self.strategy);
        let body_is_placeholder = article.text.is_empty();
        let body = if body_is_placeholder {
            Highlighted::plain(&self.labels.content_unavailable)
        } else {
            highlighter.highlight(&article.text)
        };

        let limit = match self.max_snippets {
            0 => usize::MAX,
            n => n,
        };
        let snippets: Vec<Highlighted> = result
            .snippets
            .iter()
            .take(limit)
            .map(|s| {
                if self.highlight_snippets {
                    highlighter.highlight(s)
                } else {
                    Highlighted::plain(s)
                }
            })
            .collect();

        debug!(
            %title,
            terms = result.terms_matched.len(),
            marks = body.mark_count(),
            snippets = snippets.len(),
            "built detail view"
        );

        RenderedDocument {
            title,
            metadata,
            summary: result.summary().map(str::to_string),
            snippets,
            body,
            body_is_placeholder,
            labels: self.labels.clone(),
            highlight_class: self.highlight_class.clone(),
        }
    }

    /// Returns `value`, or the "not available" label when it is absent.
    fn or_not_available(&self, value: Option<&str>) -> String {
        value.unwrap_or(&self.labels.not_available).to_string()
    }
}

impl Default for DetailViewBuilder {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

/// Formats `value` with `separator` between groups of three digits.
pub fn group_thousands(value: usize, separator: char) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use gazette_config::Locale;
    use gazette_results::Article;

    use super::*;

    fn decree() -> SearchResult {
        SearchResult {
            article: Article {
                title: Some("Decreto 123".into()),
                filename: Some("d123.txt".into()),
                section: Some("Seção 1".into()),
                text: "O decreto 123 entra em vigor.".into(),
            },
            terms_matched: vec!["decreto".into()],
            summary: Some(String::new()),
            snippets: vec![],
        }
    }

    #[test]
    fn test_decree_scenario() {
        let doc = DetailViewBuilder::default().build(&decree());

        assert_eq!(doc.title, "Decreto 123");
        assert_eq!(doc.metadata.title, "Decreto 123");
        assert_eq!(doc.metadata.section, "Seção 1");
        assert_eq!(doc.metadata.filename, "d123.txt");
        assert_eq!(doc.metadata.terms, "decreto");
        assert_eq!(doc.metadata.char_count, 29);
        assert_eq!(doc.body.marked_texts(), vec!["decreto"]);
        assert!(doc.summary.is_none());
        assert!(doc.snippets.is_empty());
        assert!(!doc.body_is_placeholder);
    }

    #[test]
    fn test_title_falls_back_to_filename_then_placeholder() {
        let builder = DetailViewBuilder::default();
        let mut result = decree();

        result.article.title = Some(String::new());
        assert_eq!(builder.build(&result).title, "d123.txt");

        result.article.filename = None;
        let doc = builder.build(&result);
        assert_eq!(doc.title, "Gazette document");
        assert_eq!(doc.metadata.filename, "N/A");
    }

    #[test]
    fn test_missing_section_is_not_available() {
        let mut result = decree();
        result.article.section = None;
        assert_eq!(
            DetailViewBuilder::default().build(&result).metadata.section,
            "N/A"
        );
    }

    #[test]
    fn test_empty_text_uses_placeholder() {
        let mut result = decree();
        result.article.text = String::new();
        let doc = DetailViewBuilder::default().build(&result);

        assert!(doc.body_is_placeholder);
        assert_eq!(doc.body.plain_text(), "content unavailable");
        assert_eq!(doc.body.mark_count(), 0);
        assert_eq!(doc.metadata.char_count, 0);
    }

    #[test]
    fn test_summary_included_when_present() {
        let mut result = decree();
        result.summary = Some("Resumo curto.".into());
        let doc = DetailViewBuilder::default().build(&result);
        assert_eq!(doc.summary.as_deref(), Some("Resumo curto."));
    }

    #[test]
    fn test_terms_joined_in_order() {
        let mut result = decree();
        result.terms_matched = vec!["vigor".into(), "decreto".into()];
        let doc = DetailViewBuilder::default().build(&result);
        assert_eq!(doc.metadata.terms, "vigor, decreto");
        assert_eq!(doc.body.mark_count(), 2);
    }

    #[test]
    fn test_snippets_cap_and_highlight() {
        let view = ViewSettings {
            highlight_snippets: true,
            max_snippets: 2,
            ..ViewSettings::default()
        };
        let builder = DetailViewBuilder::new(&view, &Labels::default());
        let mut result = decree();
        result.snippets = vec![
            "primeiro decreto".into(),
            "segundo".into(),
            "terceiro decreto".into(),
        ];

        let doc = builder.build(&result);
        assert_eq!(doc.snippets.len(), 2);
        assert_eq!(doc.snippets[0].mark_count(), 1);
        assert_eq!(doc.snippets[1].plain_text(), "segundo");
    }

    #[test]
    fn test_snippets_plain_by_default() {
        let mut result = decree();
        result.snippets = vec!["um decreto".into()];
        let doc = DetailViewBuilder::default().build(&result);
        assert_eq!(doc.snippets[0].mark_count(), 0);
    }

    #[test]
    fn test_build_is_deterministic() {
        let builder = DetailViewBuilder::default();
        let result = decree();
        let before = result.clone();
        assert_eq!(builder.build(&result), builder.build(&result));
        assert_eq!(result, before);
    }

    #[test]
    fn test_locale_formats_size() {
        let view = ViewSettings {
            locale: Locale::PtBr,
            ..ViewSettings::default()
        };
        let builder = DetailViewBuilder::new(&view, &Labels::for_locale(Locale::PtBr));
        let mut result = decree();
        result.article.text = "a".repeat(12_345);
        assert_eq!(builder.build(&result).metadata.size, "12.345 caracteres");
    }

    #[test]
    fn test_char_count_counts_characters() {
        let mut result = decree();
        result.article.text = "Seção".into();
        assert_eq!(DetailViewBuilder::default().build(&result).metadata.char_count, 5);
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0, ','), "0");
        assert_eq!(group_thousands(999, ','), "999");
        assert_eq!(group_thousands(1000, ','), "1,000");
        assert_eq!(group_thousands(1_234_567, '.'), "1.234.567");
    }
}
