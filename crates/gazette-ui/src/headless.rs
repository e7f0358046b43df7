//! An in-memory surface.

use std::collections::BTreeMap;

use crate::surface::{FormSurface, Surface};

/// Overflow style of a page that has not been touched.
const DEFAULT_OVERFLOW: &str = "auto";

/// State of one addressable form element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementState {
    /// Whether the element is disabled.
    pub disabled: bool,
    /// Visible label (buttons).
    pub label: String,
    /// Inner markup (message elements).
    pub markup: String,
    /// Whether the element is shown.
    pub visible: bool,
}

/// A [`Surface`] and [`FormSurface`] that records every write.
///
/// Used by the CLI, which renders the overlay without a browser, and by tests.
#[derive(Debug, Clone)]
pub struct HeadlessSurface {
    /// Overlay title slot.
    pub title: String,
    /// Overlay content slot.
    pub content: String,
    /// Whether the overlay is shown.
    pub overlay_visible: bool,
    /// Page overflow style.
    pub page_overflow: String,
    /// Scroll offset of the content region.
    pub content_scroll: usize,
    /// Search input value.
    pub search_term: String,
    /// Form elements by identifier.
    pub elements: BTreeMap<String, ElementState>,
}

impl HeadlessSurface {
    /// Creates an empty surface with the overlay hidden.
    pub fn new() -> Self {
        Self {
            title: String::new(),
            content: String::new(),
            overlay_visible: false,
            page_overflow: DEFAULT_OVERFLOW.to_string(),
            content_scroll: 0,
            search_term: String::new(),
            elements: BTreeMap::new(),
        }
    }

    /// Adds an element, replacing any existing one with the same identifier.
    pub fn add_element(&mut self, id: &str, label: &str) {
        self.elements.insert(
            id.to_string(),
            ElementState {
                label: label.to_string(),
                ..ElementState::default()
            },
        );
    }

    /// Returns an element's state.
    pub fn element(&self, id: &str) -> Option<&ElementState> {
        self.elements.get(id)
    }
}

impl Default for HeadlessSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface for HeadlessSurface {
    fn set_title(&mut self, title: &str) {
        title.clone_into(&mut self.title);
    }

    fn set_content(&mut self, markup: &str) {
        markup.clone_into(&mut self.content);
    }

    fn set_overlay_visible(&mut self, visible: bool) {
        self.overlay_visible = visible;
    }

    fn page_overflow(&self) -> String {
        self.page_overflow.clone()
    }

    fn set_page_overflow(&mut self, value: &str) {
        value.clone_into(&mut self.page_overflow);
    }

    fn reset_content_scroll(&mut self) {
        self.content_scroll = 0;
    }

    fn set_search_term(&mut self, term: &str) {
        term.clone_into(&mut self.search_term);
    }
}

impl FormSurface for HeadlessSurface {
    fn has_element(&self, id: &str) -> bool {
        self.elements.contains_key(id)
    }

    fn disable(&mut self, id: &str) {
        if let Some(el) = self.elements.get_mut(id) {
            el.disabled = true;
        }
    }

    fn set_label(&mut self, id: &str, label: &str) {
        if let Some(el) = self.elements.get_mut(id) {
            label.clone_into(&mut el.label);
        }
    }

    fn set_markup(&mut self, id: &str, markup: &str) {
        if let Some(el) = self.elements.get_mut(id) {
            markup.clone_into(&mut el.markup);
        }
    }

    fn show(&mut self, id: &str) {
        if let Some(el) = self.elements.get_mut(id) {
            el.visible = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_surface_is_hidden() {
        let surface = HeadlessSurface::new();
        assert!(!surface.overlay_visible);
        assert_eq!(surface.page_overflow(), "auto");
    }

    #[test]
    fn test_writes_to_missing_elements_are_ignored() {
        let mut surface = HeadlessSurface::new();
        surface.disable("ghost");
        surface.show("ghost");
        assert!(surface.element("ghost").is_none());
    }

    #[test]
    fn test_element_writes() {
        let mut surface = HeadlessSurface::new();
        surface.add_element("btn", "Go");
        surface.disable("btn");
        surface.set_label("btn", "Going");
        let el = surface.element("btn").unwrap();
        assert!(el.disabled);
        assert_eq!(el.label, "Going");
        assert!(!el.visible);
    }
}
