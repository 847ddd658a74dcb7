//! CLI library components for roster.

pub mod logging;
pub mod render;
pub mod settings;
pub mod shell;
