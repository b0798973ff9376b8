use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Scoped wrapper around the scan progress bar.
///
/// The bar owns a region of the terminal while it runs; dropping the
/// wrapper clears that region on every exit path, including an early return
/// from a failed scan.
pub struct ScanProgress {
    bar: ProgressBar,
}

impl ScanProgress {
    pub fn start(msg: &str, len: u64) -> Self {
        let bar = ProgressBar::new(len);
        let style = ProgressStyle::with_template(
            "{spinner:.blue} {msg} {bar:36.cyan/blue} {percent:>3}%",
        )
        .unwrap()
        .tick_strings(&[
            "▁▁▁▁▁",
            "▁▂▂▂▁",
            "▁▄▂▄▁",
            "▂▄▆▄▂",
            "▄▆█▆▄",
            "▂▄▆▄▂",
            "▁▄▂▄▁",
            "▁▂▂▂▁",
        ])
        .progress_chars("■■□");

        bar.set_style(style);
        bar.set_message(msg.to_string());
        bar.enable_steady_tick(Duration::from_millis(100));

        Self { bar }
    }

    pub fn advance(&self) {
        self.bar.inc(1);
    }

    pub fn finish(self) {
        self.bar.finish_and_clear();
    }
}

impl Drop for ScanProgress {
    fn drop(&mut self) {
        if !self.bar.is_finished() {
            self.bar.finish_and_clear();
        }
    }
}
