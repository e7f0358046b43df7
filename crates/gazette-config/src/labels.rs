//! User-visible strings and their locale presets.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::parse::RawLabels;

/// Locale preset for labels and number formatting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub enum Locale {
    /// English.
    #[default]
    #[serde(rename = "en")]
    En,
    /// Brazilian Portuguese, the language of the gazette itself.
    #[serde(rename = "pt-BR")]
    PtBr,
}

impl Locale {
    /// Digit group separator used when formatting counts.
    pub fn thousands_separator(self) -> char {
        match self {
            Self::En => ',',
            Self::PtBr => '.',
        }
    }

    /// The tag used in configuration files.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::PtBr => "pt-BR",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Every string the detail view, clipboard and busy feedback show to the user.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Labels {
    /// Title used when a result has neither title nor filename.
    pub document_placeholder: String,
    /// Shown for a missing section or filename.
    pub not_available: String,
    /// Shown in place of an empty article body.
    pub content_unavailable: String,
    /// Metadata label for the document title.
    pub document: String,
    /// Metadata label for the section.
    pub section: String,
    /// Metadata label for the filename.
    pub file: String,
    /// Metadata label for the matched terms.
    pub terms: String,
    /// Metadata label for the size.
    pub size: String,
    /// Unit appended to the character count.
    pub characters: String,
    /// Heading of the AI summary block.
    pub summary_heading: String,
    /// Heading of the snippets block.
    pub snippets_heading: String,
    /// Heading of the full text block.
    pub content_heading: String,
    /// Confirmation after a successful copy.
    pub copied: String,
    /// Error after both copy paths failed.
    pub copy_failed: String,
    /// Default progress text for busy forms.
    pub progress: String,
}

impl Labels {
    /// Returns the preset for a locale.
    pub fn for_locale(locale: Locale) -> Self {
        match locale {
            Locale::En => Self {
                document_placeholder: "Gazette document".into(),
                not_available: "N/A".into(),
                content_unavailable: "content unavailable".into(),
                document: "📄 Document".into(),
                section: "📋 Section".into(),
                file: "📁 File".into(),
                terms: "🔍 Matched terms".into(),
                size: "📝 Size".into(),
                characters: "characters".into(),
                summary_heading: "🤖 Summary (AI)".into(),
                snippets_heading: "📝 Relevant excerpts".into(),
                content_heading: "📄 Full content".into(),
                copied: "Content copied to the clipboard!".into(),
                copy_failed: "Could not copy the content to the clipboard.".into(),
                progress: "Download in progress. This operation takes about 20 seconds.".into(),
            },
            Locale::PtBr => Self {
                document_placeholder: "Documento DOU".into(),
                not_available: "N/A".into(),
                content_unavailable: "Conteúdo não disponível".into(),
                document: "📄 Documento".into(),
                section: "📋 Seção".into(),
                file: "📁 Arquivo".into(),
                terms: "🔍 Termos encontrados".into(),
                size: "📝 Tamanho".into(),
                characters: "caracteres".into(),
                summary_heading: "🤖 Resumo (IA)".into(),
                snippets_heading: "📝 Trechos Relevantes".into(),
                content_heading: "📄 Conteúdo Completo".into(),
                copied: "Conteúdo copiado para a área de transferência!".into(),
                copy_failed: "Não foi possível copiar o conteúdo.".into(),
                progress: "Download em andamento. Essa operação dura em torno de 20 segundos."
                    .into(),
            },
        }
    }

    /// Overwrites every label present in `raw`.
    pub(crate) fn apply(&mut self, raw: &RawLabels) {
        let fields: [(&mut String, &Option<String>); 15] = [
            (&mut self.document_placeholder, &raw.document_placeholder),
            (&mut self.not_available, &raw.not_available),
            (&mut self.content_unavailable, &raw.content_unavailable),
            (&mut self.document, &raw.document),
            (&mut self.section, &raw.section),
            (&mut self.file, &raw.file),
            (&mut self.terms, &raw.terms),
            (&mut self.size, &raw.size),
            (&mut self.characters, &raw.characters),
            (&mut self.summary_heading, &raw.summary_heading),
            (&mut self.snippets_heading, &raw.snippets_heading),
            (&mut self.content_heading, &raw.content_heading),
            (&mut self.copied, &raw.copied),
            (&mut self.copy_failed, &raw.copy_failed),
            (&mut self.progress, &raw.progress),
        ];
        for (target, value) in fields {
            if let Some(v) = value {
                target.clone_from(v);
            }
        }
    }
}

impl Default for Labels {
    fn default() -> Self {
        Self::for_locale(Locale::default())
    }
}
