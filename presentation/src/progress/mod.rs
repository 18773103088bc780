//! Streaming progress display

pub mod stream_printer;
