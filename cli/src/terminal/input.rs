use std::io::{self, BufRead, Write};

use colored::*;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};

use blemap_common::config::Config;

use crate::terminal::colors;

/// Restores the terminal even when the wait loop bails out early.
struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> io::Result<Self> {
        enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
    }
}

/// Blocks until the operator dismisses the report.
///
/// Every outcome funnels through here, so a terminal window spawned just
/// for the scan never closes on the results before they are read.
pub fn pause_for_exit(cfg: &Config) {
    if cfg.no_input {
        return;
    }

    println!();
    print!("{}", "Press Enter to exit...".color(colors::SEPARATOR));
    let _ = io::stdout().flush();

    match RawModeGuard::enable() {
        Ok(_guard) => wait_for_enter(),
        // Not a terminal; fall back to a plain line read.
        Err(_) => {
            let mut line = String::new();
            let _ = io::stdin().lock().read_line(&mut line);
        }
    }

    println!();
}

fn wait_for_enter() {
    loop {
        match event::read() {
            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                let is_enter = key.code == KeyCode::Enter;
                let is_ctrl_c = key.code == KeyCode::Char('c')
                    && key.modifiers.contains(KeyModifiers::CONTROL);

                if is_enter || is_ctrl_c {
                    break;
                }
            }
            Err(_) => break,
            _ => {}
        }
    }
}
