//! The detail overlay state machine.

use gazette_results::ResultsBuffer;
use gazette_view::{DetailViewBuilder, RenderedDocument};
use tracing::{debug, error};

use crate::{
    clipboard::{ClipboardBridge, CopyOutcome, Notifier, PrimaryClipboard, ScratchBuffer},
    events::UiEvent,
    surface::Surface,
};

/// Page overflow while the overlay is open.
const LOCKED_OVERFLOW: &str = "hidden";

/// Whether the overlay is shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    /// Overlay hidden.
    #[default]
    Closed,
    /// Overlay shown for the result at `position` (1-based).
    Open {
        /// Position of the displayed result.
        position: usize,
    },
}

/// Observable state of the overlay.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModalState {
    /// Current phase.
    pub phase: Phase,
    /// Raw text of the displayed document; empty while closed.
    pub current_plain_text: String,
}

impl ModalState {
    /// Returns true while the overlay is shown.
    pub fn is_visible(&self) -> bool {
        matches!(self.phase, Phase::Open { .. })
    }
}

/// Opens and closes the detail overlay for results in a buffer.
pub struct ModalController<S> {
    /// Results of the current page.
    buffer: ResultsBuffer,
    /// Builds the displayed document.
    builder: DetailViewBuilder,
    /// Where the overlay lives.
    surface: S,
    /// Current state.
    state: ModalState,
    /// Page overflow in effect before the overlay opened.
    saved_overflow: Option<String>,
    /// Document currently displayed.
    document: Option<RenderedDocument>,
}

impl<S: Surface> ModalController<S> {
    /// Creates a closed controller.
    pub fn new(buffer: ResultsBuffer, builder: DetailViewBuilder, surface: S) -> Self {
        Self {
            buffer,
            builder,
            surface,
            state: ModalState::default(),
            saved_overflow: None,
            document: None,
        }
    }

    /// Opens the overlay on the result at `position` (1-based).
    ///
    /// Positions outside the buffer are ignored. Opening while already open replaces the
    /// displayed content. Returns true if the overlay now shows `position`.
    pub fn open(&mut self, position: usize) -> bool {
        let Some(result) = self.buffer.get(position) else {
            debug!(position, len = self.buffer.len(), "no result at position");
            return false;
        };

        let document = self.builder.build(result);
        let markup = match document.to_html() {
            Ok(markup) => markup,
            Err(e) => {
                error!(position, error = %e, "failed to render detail view");
                return false;
            }
        };

        self.surface.set_title(&document.title);
        self.surface.set_content(&markup);
        result
            .article
            .text
            .clone_into(&mut self.state.current_plain_text);

        if self.saved_overflow.is_none() {
            self.saved_overflow = Some(self.surface.page_overflow());
        }
        self.surface.set_overlay_visible(true);
        self.surface.set_page_overflow(LOCKED_OVERFLOW);
        self.surface.reset_content_scroll();

        self.state.phase = Phase::Open { position };
        self.document = Some(document);
        debug!(position, "opened detail overlay");
        true
    }

    /// Closes the overlay. Does nothing while closed.
    pub fn close(&mut self) {
        if !self.state.is_visible() {
            return;
        }

        self.surface.set_overlay_visible(false);
        if let Some(overflow) = self.saved_overflow.take() {
            self.surface.set_page_overflow(&overflow);
        }
        self.state.phase = Phase::Closed;
        self.state.current_plain_text.clear();
        self.document = None;
        debug!("closed detail overlay");
    }

    /// Routes a page event. Dismissal triggers close the overlay; everything else,
    /// and every event while closed, is ignored.
    pub fn handle_event(&mut self, event: &UiEvent) {
        if self.state.is_visible() && event.dismisses() {
            self.close();
        }
    }

    /// Writes `term` into the search field.
    pub fn set_term(&mut self, term: &str) {
        self.surface.set_search_term(term);
    }

    /// Copies the displayed document's raw text.
    pub async fn copy_to_clipboard<P, B, N>(
        &self,
        bridge: &mut ClipboardBridge<P, B, N>,
    ) -> CopyOutcome
    where
        P: PrimaryClipboard,
        B: ScratchBuffer,
        N: Notifier,
    {
        bridge.copy(&self.state.current_plain_text).await
    }

    /// Returns the current state.
    pub fn state(&self) -> &ModalState {
        &self.state
    }

    /// Returns the document on display, if open.
    pub fn document(&self) -> Option<&RenderedDocument> {
        self.document.as_ref()
    }

    /// Returns the results buffer.
    pub fn buffer(&self) -> &ResultsBuffer {
        &self.buffer
    }

    /// Returns the surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Returns the surface mutably.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}
