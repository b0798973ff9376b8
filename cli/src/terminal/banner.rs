use colored::*;
use unicode_width::UnicodeWidthStr;

use blemap_common::config::Config;

use crate::terminal::print::TOTAL_WIDTH;

const BANNER_0: &str = r#"
     ____  _     _____ __  __    _    ____
    | __ )| |   | ____|  \/  |  / \  |  _ \
    |  _ \| |   |  _| | |\/| | / _ \ | |_) |
    | |_) | |___| |___| |  | |/ ___ \|  __/
    |____/|_____|_____|_|  |_/_/   \_\_|
"#;

const BANNER_1: &str = r#"
     ___ _    ___ __  __   _   ___
    | _ ) |  | __|  \/  | /_\ | _ \
    | _ \ |__| _|| |\/| |/ _ \|  _/
    |___/____|___|_|  |_/_/ \_\_|
"#;

pub fn print(cfg: &Config) {
    if cfg.no_banner || cfg.quiet > 0 {
        return;
    }

    println!();
    version_line();
    match rand::random_range(0..=1) {
        0 => println!("{}", BANNER_0.blue()),
        _ => println!("{}", BANNER_1.truecolor(80, 80, 100)),
    }
}

fn version_line() {
    let text_content: String = format!("⟦ BLEMAP v{} ⟧ ", env!("CARGO_PKG_VERSION"));
    let text_width: usize = UnicodeWidthStr::width(text_content.as_str());
    let text: ColoredString = text_content.bright_green().bold();
    let sep: ColoredString = "═"
        .repeat(TOTAL_WIDTH.saturating_sub(text_width) / 2)
        .bright_black();
    println!("{}{}{}", sep, text, sep);
}
