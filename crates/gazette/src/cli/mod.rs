//! CLI support for the `gazette` binary.

pub mod args;
pub mod clipboard;
pub mod commands;
pub mod context;
pub mod logging;
pub mod output;
