//! Interactive controllers for the gazette result viewer.
//!
//! The controllers never touch a concrete page. [`ModalController`] drives a [`Surface`],
//! [`BusyFormBinder`] drives a [`FormSurface`], and [`ClipboardBridge`] works through a
//! [`PrimaryClipboard`] and a [`ScratchBuffer`]. [`HeadlessSurface`] is an in-memory
//! implementation of both surfaces.

#![warn(missing_docs)]

mod busy;
mod clipboard;
mod events;
mod headless;
mod modal;
mod surface;

pub use busy::{BusyFormBinder, SPINNER_MARKUP};
pub use clipboard::{
    ClipboardBridge, ClipboardError, CopyOutcome, CopyPath, Notifier, PrimaryClipboard,
    ScratchBuffer,
};
pub use events::{ESCAPE_KEY, PointerTarget, UiEvent};
pub use headless::{ElementState, HeadlessSurface};
pub use modal::{ModalController, ModalState, Phase};
pub use surface::{FormSurface, Surface};
