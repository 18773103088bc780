//! Presentation layer for tutor-chat
//!
//! This crate contains the CLI definition, the interactive chat REPL,
//! the console message formatter, and the streaming progress printer.

pub mod chat;
pub mod cli;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use chat::ChatRepl;
pub use cli::commands::Cli;
pub use output::console::ConsoleFormatter;
pub use progress::stream_printer::StreamPrinter;
