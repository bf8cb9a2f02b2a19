//! indicatif-backed progress reporting.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::batch::BatchObserver;

/// Spinner shown while the model loads.  Call `finish_and_clear` when done.
pub fn spinner(message: String) -> ProgressBar {
    let sp = ProgressBar::new_spinner();
    sp.set_message(message);
    sp.enable_steady_tick(Duration::from_millis(100));
    sp
}

/// Batch progress bar: advances once per finished item, shows the file
/// currently being worked on.
pub struct BatchProgress {
    bar: ProgressBar,
}

impl BatchProgress {
    pub fn new(total: usize) -> Self {
        let bar = ProgressBar::new(total as u64);
        bar.set_style(
            ProgressStyle::with_template(
                "{spinner:.green} Transcribing [{bar:30.cyan/blue}] {pos}/{len} {msg}",
            )
            .expect("valid progress template")
            .progress_chars("=>-"),
        );
        Self { bar }
    }

    pub fn finish(&self) {
        self.bar.finish_with_message("done");
    }
}

impl BatchObserver for BatchProgress {
    fn item_started(&mut self, _index: usize, _total: usize, file: &str) {
        self.bar.set_message(file.to_string());
    }

    fn item_finished(&mut self, _index: usize, _total: usize, _file: &str, _success: bool) {
        self.bar.inc(1);
    }
}
