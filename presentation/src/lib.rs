//! Presentation layer for ticket-desk
//!
//! This crate contains CLI definitions, output formatters,
//! progress reporters, and the interactive ticket form.

pub mod cli;
pub mod config;
pub mod form;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{CategoryArg, Cli, OutputFormat};
pub use config::{FormConfig, OutputConfig};
pub use form::{FormError, TicketForm};
pub use output::console::ConsoleFormatter;
pub use progress::reporter::ProgressReporter;
