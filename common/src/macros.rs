//! Colored status-line macros for operator-facing messages.
//!
//! These are for the report surface, not diagnostics; anything meant for
//! `RUST_LOG` consumption goes through `tracing` instead.

use colored::Colorize as _;

#[doc(hidden)]
#[derive(Clone, Copy)]
pub enum Status {
    Info,
    Success,
    Warn,
    Error,
}

#[doc(hidden)]
pub fn status_line(status: Status, message: &str) {
    let symbol = match status {
        Status::Info => "[i]".blue(),
        Status::Success => "[+]".green().bold(),
        Status::Warn => "[*]".yellow().bold(),
        Status::Error => "[-]".red().bold(),
    };
    println!("{} {}", symbol, message);
}

#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        $crate::macros::status_line($crate::macros::Status::Info, &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::macros::status_line($crate::macros::Status::Success, &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::macros::status_line($crate::macros::Status::Warn, &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        $crate::macros::status_line($crate::macros::Status::Error, &format!($($arg)*))
    };
}
