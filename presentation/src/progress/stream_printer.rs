//! Incremental display of a streaming response

use indicatif::{ProgressBar, ProgressStyle};
use std::io::Write;
use std::sync::Mutex;
use std::time::Duration;
use tutor_application::TurnProgress;

/// Prints response fragments as they arrive.
///
/// Shows a spinner between stream start and the first fragment, then writes
/// each fragment to stdout with an immediate flush so the text appears as
/// the model produces it. An optional prefix (the role label) is printed
/// just before the first fragment, after the spinner is cleared.
pub struct StreamPrinter {
    spinner: Mutex<Option<ProgressBar>>,
    prefix: Mutex<Option<String>>,
}

impl StreamPrinter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
            prefix: Mutex::new(None),
        }
    }

    /// Print `prefix` before the first fragment.
    pub fn with_prefix(self, prefix: impl Into<String>) -> Self {
        *self.prefix.lock().unwrap() = Some(prefix.into());
        self
    }

    fn clear_spinner(&self) {
        if let Some(spinner) = self.spinner.lock().unwrap().take() {
            spinner.finish_and_clear();
        }
    }
}

impl Default for StreamPrinter {
    fn default() -> Self {
        Self::new()
    }
}

impl TurnProgress for StreamPrinter {
    fn on_stream_start(&self) {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::with_template("{spinner} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        spinner.set_message("응답을 기다리는 중...");
        spinner.enable_steady_tick(Duration::from_millis(100));
        *self.spinner.lock().unwrap() = Some(spinner);
    }

    fn on_chunk(&self, text: &str) {
        self.clear_spinner();
        if let Some(prefix) = self.prefix.lock().unwrap().take() {
            print!("{} ", prefix);
        }
        print!("{}", text);
        let _ = std::io::stdout().flush();
    }

    fn on_stream_end(&self) {
        self.clear_spinner();
        println!();
    }
}
