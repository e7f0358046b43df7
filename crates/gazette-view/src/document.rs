//! The rendered detail document and its HTML and terminal renderings.

use askama::Template;
use gazette_config::Labels;
use gazette_highlight::{Highlighted, dim, header, rule, sanitize_terminal, subheader};
use serde::Serialize;

use crate::ViewError;

/// Width of the terminal separator rule.
const RULE_WIDTH: usize = 60;

/// The metadata block of a detail view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Metadata {
    /// Display title (title, then filename, then the placeholder label).
    pub title: String,
    /// Section, or the "not available" label.
    pub section: String,
    /// Filename, or the "not available" label.
    pub filename: String,
    /// Matched terms joined with `", "`.
    pub terms: String,
    /// Characters in the original article text.
    pub char_count: usize,
    /// Character count with digit grouping and unit, ready for display.
    pub size: String,
}

/// The assembled detail view of one search result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedDocument {
    /// Title shown in the overlay's title slot.
    pub title: String,
    /// Metadata block.
    pub metadata: Metadata,
    /// AI summary, present only when non-empty.
    pub summary: Option<String>,
    /// Snippets in original order, each an independent unit.
    pub snippets: Vec<Highlighted>,
    /// Highlighted article body, or the unavailable placeholder.
    pub body: Highlighted,
    /// True when `body` is the placeholder rather than article text.
    pub body_is_placeholder: bool,
    /// Labels used for headings.
    #[serde(skip)]
    pub(crate) labels: Labels,
    /// CSS class for highlight markers.
    #[serde(skip)]
    pub(crate) highlight_class: String,
}

/// Askama template for the overlay content.
#[derive(Template)]
#[template(path = "detail.html")]
struct DetailTemplate<'a> {
    /// Headings and field labels.
    labels: &'a Labels,
    /// Metadata block.
    metadata: &'a Metadata,
    /// Summary text, escaped by the template.
    summary: Option<&'a str>,
    /// Pre-escaped snippet markup.
    snippets: Vec<String>,
    /// Pre-escaped body markup.
    body: String,
    /// Adds the unavailable class to the content block.
    body_is_placeholder: bool,
}

impl RenderedDocument {
    /// Renders the overlay content as HTML.
    ///
    /// Every field is escaped. Highlight markers are inserted only after the text they
    /// wrap has been escaped, so nothing from the result can be read as markup.
    pub fn to_html(&self) -> Result<String, ViewError> {
        let template = DetailTemplate {
            labels: &self.labels,
            metadata: &self.metadata,
            summary: self.summary.as_deref(),
            snippets: self
                .snippets
                .iter()
                .map(|s| s.to_html(&self.highlight_class))
                .collect(),
            body: self.body.to_html(&self.highlight_class),
            body_is_placeholder: self.body_is_placeholder,
        };
        Ok(template.render()?)
    }

    /// Renders the document for a terminal, with matches styled.
    ///
    /// Control characters in result fields are replaced, so the output carries no escape
    /// sequences besides the viewer's own styling.
    pub fn to_terminal(&self) -> String {
        let labels = &self.labels;
        let meta = &self.metadata;
        let mut out = String::new();

        out.push_str(&header(&self.title));
        out.push('\n');
        out.push_str(&rule(RULE_WIDTH));
        out.push('\n');
        for (label, value) in [
            (&labels.document, &meta.title),
            (&labels.section, &meta.section),
            (&labels.file, &meta.filename),
            (&labels.terms, &meta.terms),
            (&labels.size, &meta.size),
        ] {
            let value = sanitize_terminal(value);
            out.push_str(&format!("{}: {value}\n", subheader(label)));
        }

        if let Some(summary) = &self.summary {
            out.push('\n');
            out.push_str(&subheader(&labels.summary_heading));
            out.push('\n');
            out.push_str(&sanitize_terminal(summary));
            out.push('\n');
        }

        if !self.snippets.is_empty() {
            out.push('\n');
            out.push_str(&subheader(&labels.snippets_heading));
            out.push('\n');
            for snippet in &self.snippets {
                out.push_str(&format!("  • {}\n", snippet.to_ansi()));
            }
        }

        out.push('\n');
        out.push_str(&subheader(&labels.content_heading));
        out.push('\n');
        if self.body_is_placeholder {
            out.push_str(&dim(&self.body.plain_text()));
        } else {
            out.push_str(&self.body.to_ansi());
        }
        out.push('\n');
        out
    }
}

#[cfg(test)]
mod tests {
    use gazette_highlight::colors;
    use gazette_results::{Article, SearchResult};

    use crate::DetailViewBuilder;

    fn result(title: &str, text: &str, terms: &[&str]) -> SearchResult {
        SearchResult {
            article: Article {
                title: Some(title.into()),
                filename: Some("d123.txt".into()),
                section: Some("DO1".into()),
                text: text.into(),
            },
            terms_matched: terms.iter().map(|t| t.to_string()).collect(),
            summary: None,
            snippets: vec![],
        }
    }

    #[test]
    fn test_html_highlights_body() {
        let doc = DetailViewBuilder::default().build(&result(
            "Decreto 123",
            "O Decreto 123 e o decreto 124.",
            &["decreto"],
        ));
        let html = doc.to_html().unwrap();

        assert!(html.contains(r#"<span class="highlight">Decreto</span> 123"#));
        assert!(html.contains(r#"<span class="highlight">decreto</span> 124"#));
        assert!(html.contains("Decreto 123<br>"));
        assert!(!html.contains("class=\"summary\""));
        assert!(!html.contains("class=\"snippet\""));
    }

    #[test]
    fn test_html_escapes_every_field() {
        let mut r = result("<b>Title</b>", "x <script>alert(1)</script> y", &["script"]);
        r.summary = Some("<i>sum</i>".into());
        r.snippets = vec!["<img src=x>".into()];
        let html = DetailViewBuilder::default().build(&r).to_html().unwrap();

        assert!(!html.contains("<b>Title"));
        assert!(!html.contains("<script>"));
        assert!(!html.contains("<i>sum"));
        assert!(!html.contains("<img"));
        assert!(html.contains("&lt;b&gt;Title"));
        assert!(html.contains(r#"&lt;<span class="highlight">script</span>&gt;"#));
        assert!(html.contains("&lt;img"));
    }

    #[test]
    fn test_html_includes_summary_and_snippets() {
        let mut r = result("Portaria", "Texto.", &[]);
        r.summary = Some("Resumo gerado.".into());
        r.snippets = vec!["um".into(), "dois".into()];
        let html = DetailViewBuilder::default().build(&r).to_html().unwrap();

        assert!(html.contains("Resumo gerado."));
        let first = html.find(">um<").unwrap();
        let second = html.find(">dois<").unwrap();
        assert!(first < second);
        assert_eq!(html.matches("class=\"snippet\"").count(), 2);
    }

    #[test]
    fn test_html_placeholder_body() {
        let doc = DetailViewBuilder::default().build(&result("Vazio", "", &["x"]));
        let html = doc.to_html().unwrap();
        assert!(html.contains("content unavailable"));
        assert!(html.contains("content unavailable</div>"));
    }

    #[test]
    fn test_terminal_rendering() {
        let doc = DetailViewBuilder::default().build(&result(
            "Decreto 123",
            "O decreto 123.",
            &["decreto"],
        ));
        let text = doc.to_terminal();
        assert!(text.contains("Decreto 123"));
        assert!(text.contains(&format!("{}decreto{}", colors::MATCH, colors::RESET)));
        assert!(text.contains("14 characters"));
    }

    /// True when every ESC in `s` starts an SGR sequence.
    fn only_sgr(s: &str) -> bool {
        s.split('\x1b').skip(1).all(|rest| {
            let Some(params) = rest.strip_prefix('[') else {
                return false;
            };
            let end = params.find('m').unwrap_or(params.len());
            end < params.len() && params[..end].chars().all(|c| c.is_ascii_digit() || c == ';')
        })
    }

    #[test]
    fn test_terminal_replaces_control_sequences_in_every_field() {
        let osc = "\x1b]52;c;ZXZpbA==\x07";
        let mut r = result(
            &format!("Decreto{osc}"),
            &format!("O decreto\x1b[2J 123.{osc}"),
            &["decreto", "x\x1b[2J"],
        );
        r.article.section = Some(format!("DO1{osc}"));
        r.article.filename = Some("d\x1b[31m.txt".into());
        r.summary = Some(format!("Resumo{osc}"));
        r.snippets = vec![format!("o decreto{osc}")];
        let text = DetailViewBuilder::default().build(&r).to_terminal();

        assert!(!text.contains("\x1b]"));
        assert!(!text.contains("\x1b[2J"));
        assert!(!text.contains("\x1b[31m"));
        assert!(!text.contains('\x07'));
        assert!(only_sgr(&text));
        assert!(text.contains(&format!("{}decreto{}", colors::MATCH, colors::RESET)));
        assert!(text.contains("Resumo\u{FFFD}]52;c;ZXZpbA==\u{FFFD}"));
    }

    #[test]
    fn test_terminal_replaces_control_sequences_in_placeholder() {
        let doc = DetailViewBuilder::default().build(&result("\x1b[2JVazio", "", &[]));
        let text = doc.to_terminal();
        assert!(!text.contains("\x1b[2J"));
        assert!(only_sgr(&text));
    }

    #[test]
    fn test_json_omits_render_settings() {
        let doc = DetailViewBuilder::default().build(&result("T", "a b", &["a"]));
        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(json["title"], "T");
        assert_eq!(json["metadata"]["char_count"], 3);
        assert!(json.get("labels").is_none());
        assert!(json.get("highlight_class").is_none());
        assert_eq!(json["body"][0]["mark"][0]["text"], "a");
    }
}
