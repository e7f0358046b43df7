//! The page boundary the controllers write through.

/// The overlay and page elements the modal controller drives.
pub trait Surface {
    /// Writes the overlay's title slot as plain text.
    fn set_title(&mut self, title: &str);

    /// Replaces the overlay's content slot with already-escaped markup.
    fn set_content(&mut self, markup: &str);

    /// Shows or hides the overlay.
    fn set_overlay_visible(&mut self, visible: bool);

    /// Returns the page's current overflow style.
    fn page_overflow(&self) -> String;

    /// Sets the page's overflow style.
    fn set_page_overflow(&mut self, value: &str);

    /// Scrolls the overlay's content region back to the top.
    fn reset_content_scroll(&mut self);

    /// Writes a literal term into the search input field.
    fn set_search_term(&mut self, term: &str);
}

/// The form elements the busy-state binder drives, addressed by identifier.
pub trait FormSurface {
    /// Returns true if an element with `id` exists.
    fn has_element(&self, id: &str) -> bool;

    /// Disables a button.
    fn disable(&mut self, id: &str);

    /// Replaces a button's label.
    fn set_label(&mut self, id: &str, label: &str);

    /// Replaces an element's inner markup.
    fn set_markup(&mut self, id: &str, markup: &str);

    /// Makes an element visible.
    fn show(&mut self, id: &str);
}
