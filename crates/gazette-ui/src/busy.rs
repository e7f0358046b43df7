//! Busy-state feedback for long-running form submissions.

use gazette_config::{Config, FormBinding};
use gazette_highlight::escape_html;
use tracing::debug;

use crate::surface::FormSurface;

/// Markup placed before the progress text.
pub const SPINNER_MARKUP: &str = r#"<span class="spinner"></span>"#;

/// Disables, relabels and annotates forms while their submission is in flight.
#[derive(Debug, Clone, Default)]
pub struct BusyFormBinder {
    /// One binding per form.
    bindings: Vec<FormBinding>,
}

impl BusyFormBinder {
    /// Creates a binder for `bindings`.
    pub fn new(bindings: Vec<FormBinding>) -> Self {
        Self { bindings }
    }

    /// Creates a binder for the configured forms.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.forms.clone())
    }

    /// Returns the bindings whose form, button and message elements all exist on
    /// `surface`. Bindings with a missing element are skipped.
    pub fn bind<F: FormSurface>(&self, surface: &F) -> Vec<&FormBinding> {
        self.bindings
            .iter()
            .filter(|b| {
                let present = [&b.form, &b.button, &b.message]
                    .iter()
                    .all(|id| surface.has_element(id));
                if !present {
                    debug!(form = %b.name, "skipping binding with missing elements");
                }
                present
            })
            .collect()
    }

    /// Applies busy feedback for a submitted form.
    ///
    /// Returns false if no usable binding is attached to `form_id`.
    pub fn on_submit<F: FormSurface>(&self, surface: &mut F, form_id: &str) -> bool {
        let Some(binding) = self
            .bind(surface)
            .into_iter()
            .find(|b| b.form == form_id)
        else {
            return false;
        };

        surface.disable(&binding.button);
        if !binding.busy_label.is_empty() {
            surface.set_label(&binding.button, &binding.busy_label);
        }
        let markup = format!("{SPINNER_MARKUP}{}", escape_html(&binding.progress));
        surface.set_markup(&binding.message, &markup);
        surface.show(&binding.message);
        debug!(form = %binding.name, "form marked busy");
        true
    }

    /// Returns all bindings.
    pub fn bindings(&self) -> &[FormBinding] {
        &self.bindings
    }
}

#[cfg(test)]
mod tests {
    use gazette_config::Locale;

    use super::*;
    use crate::headless::HeadlessSurface;

    fn page() -> HeadlessSurface {
        let mut surface = HeadlessSurface::new();
        surface.add_element("searchForm", "");
        surface.add_element("searchBtn", "Buscar");
        surface.add_element("searchProcessing", "");
        surface.add_element("sendAllNowForm", "");
        surface.add_element("sendAllNowBtn", "Enviar");
        surface
    }

    #[test]
    fn test_bind_skips_incomplete_forms() {
        let binder = BusyFormBinder::new(FormBinding::defaults(Locale::PtBr));
        let bound: Vec<_> = binder
            .bind(&page())
            .iter()
            .map(|b| b.name.as_str())
            .collect();
        assert_eq!(bound, vec!["search"]);
    }

    #[test]
    fn test_submit_marks_form_busy() {
        let binder = BusyFormBinder::new(FormBinding::defaults(Locale::PtBr));
        let mut surface = page();

        assert!(binder.on_submit(&mut surface, "searchForm"));

        let button = surface.element("searchBtn").unwrap();
        assert!(button.disabled);
        assert_eq!(button.label, "🔎 Buscando...");

        let message = surface.element("searchProcessing").unwrap();
        assert!(message.visible);
        assert_eq!(
            message.markup,
            "<span class=\"spinner\"></span>Download em andamento. Essa operação dura em torno de 20 segundos."
        );
    }

    #[test]
    fn test_refresh_cache_form_shows_download_progress() {
        let binder = BusyFormBinder::new(FormBinding::defaults(Locale::PtBr));
        let mut surface = page();
        surface.add_element("refreshCacheForm", "");
        surface.add_element("refreshCacheBtn", "Atualizar cache");
        surface.add_element("refreshProcessing", "");

        assert!(binder.on_submit(&mut surface, "refreshCacheForm"));

        let button = surface.element("refreshCacheBtn").unwrap();
        assert!(button.disabled);
        assert_eq!(button.label, "🔄 Atualizando cache...");
        let message = surface.element("refreshProcessing").unwrap();
        assert!(message.visible);
        assert!(message.markup.ends_with("dura em torno de 20 segundos."));
        assert!(!surface.element("searchBtn").unwrap().disabled);
    }

    #[test]
    fn test_unknown_or_incomplete_form_is_noop() {
        let binder = BusyFormBinder::new(FormBinding::defaults(Locale::En));
        let mut surface = page();

        assert!(!binder.on_submit(&mut surface, "otherForm"));
        assert!(!binder.on_submit(&mut surface, "sendAllNowForm"));
        assert!(!surface.element("sendAllNowBtn").unwrap().disabled);
    }

    #[test]
    fn test_progress_text_is_escaped_and_label_kept() {
        let binder = BusyFormBinder::new(vec![FormBinding {
            name: "refresh".into(),
            form: "searchForm".into(),
            button: "searchBtn".into(),
            message: "searchProcessing".into(),
            busy_label: String::new(),
            progress: "<b>wait</b>".into(),
        }]);
        let mut surface = page();

        binder.on_submit(&mut surface, "searchForm");

        assert_eq!(surface.element("searchBtn").unwrap().label, "Buscar");
        assert_eq!(
            surface.element("searchProcessing").unwrap().markup,
            "<span class=\"spinner\"></span>&lt;b&gt;wait&lt;/b&gt;"
        );
    }
}
