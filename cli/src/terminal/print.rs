//! Shared print helpers for the report surface.
//!
//! Everything here writes straight to stdout; diagnostics belong to
//! `tracing` and land on stderr instead.

use colored::*;

use crate::terminal::colors;

pub const TOTAL_WIDTH: usize = 64;

pub fn header(msg: &str, q_level: u8) {
    if q_level > 0 {
        return;
    }

    let formatted: String = format!("⟦ {} ⟧", msg);
    let msg_len: usize = formatted.chars().count();

    let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_len);
    let left: usize = dash_count / 2;
    let right: usize = dash_count - left;

    let line: ColoredString = format!(
        "{}{}{}",
        "─".repeat(left),
        formatted.to_uppercase().bright_green(),
        "─".repeat(right)
    )
    .bright_black();

    println!("{}", line);
}

pub fn fat_separator() {
    let sep: ColoredString = "═".repeat(TOTAL_WIDTH).bright_black();
    println!("{}", sep);
}

pub fn print_status(msg: &str) {
    let prefix: ColoredString = ">".color(colors::SEPARATOR);
    println!("{} {}", prefix, msg);
}

pub fn centerln(msg: &str) {
    let width = console::measure_text_width(msg);
    let space = " ".repeat(TOTAL_WIDTH.saturating_sub(width) / 2);
    println!("{}{}", space, msg);
}

const NO_RESULTS_0: &str = r#"
  _  _  ___ _____ _  _ ___ _  _  ___
 | \| |/ _ \_   _| || |_ _| \| |/ __|
 | .` | (_) || | | __ || || .` | (_ |
 |_|\_|\___/ |_| |_||_|___|_|\_|\___|
"#;

pub fn no_results() {
    println!("{}", NO_RESULTS_0.red().bold());
    centerln(&"No devices found.".red().bold().to_string());
}

const CREDITS_TITLE: &str = "Credits";
const CREDITS_AUTHOR: &str = "Developed by: Nawaf Alzanbaqi";
const CREDITS_URL: &str = "https://github.com/Nawafalzanbaqi";

/// The closing panel. Content-fixed; rendered on every invocation that
/// reaches the report stage.
pub fn credits() {
    let lines = [
        CREDITS_AUTHOR.bold().color(colors::PRIMARY).to_string(),
        CREDITS_URL.bold().color(colors::ACCENT).to_string(),
    ];

    let inner: usize = lines
        .iter()
        .map(|line| console::measure_text_width(line))
        .max()
        .unwrap_or(0)
        + 4;

    let label = format!("─⟦ {CREDITS_TITLE} ⟧");
    let fill = inner.saturating_sub(console::measure_text_width(&label));

    println!();
    centerln(&format!(
        "{}{}{}",
        "╭".bright_black(),
        label.color(colors::ACCENT),
        format!("{}╮", "─".repeat(fill)).bright_black(),
    ));
    for line in &lines {
        let pad = inner.saturating_sub(2 + console::measure_text_width(line));
        centerln(&format!(
            "{}  {}{}{}",
            "│".bright_black(),
            line,
            " ".repeat(pad),
            "│".bright_black(),
        ));
    }
    centerln(&format!("╰{}╯", "─".repeat(inner)).bright_black().to_string());
}
