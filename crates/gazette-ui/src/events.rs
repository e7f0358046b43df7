//! UI events routed to the modal controller.

/// Key name that dismisses the overlay.
pub const ESCAPE_KEY: &str = "Escape";

/// Where a pointer interaction landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    /// The overlay backdrop itself.
    Backdrop,
    /// Anything inside the content region.
    Content,
}

/// A discrete event delivered by the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// The explicit close control was activated.
    CloseControl,
    /// A pointer interaction on the overlay.
    Pointer {
        /// The element the interaction targeted.
        target: PointerTarget,
    },
    /// A key was pressed, regardless of focus.
    KeyDown {
        /// Key name, as reported by the page.
        key: String,
    },
}

impl UiEvent {
    /// Returns true if this event dismisses an open overlay.
    pub fn dismisses(&self) -> bool {
        match self {
            Self::CloseControl => true,
            Self::Pointer { target } => *target == PointerTarget::Backdrop,
            Self::KeyDown { key } => key == ESCAPE_KEY,
        }
    }
}
