//! The scan pipeline: drive one discovery window, then report on it.
//!
//! The discovery future runs as its own task while the progress bar walks
//! its fixed 100 steps on the wall clock. The two only meet again at the
//! join handle, so total wall time is max(simulated window, real scan).

use std::time::{Duration, Instant};

use anyhow::Context;
use colored::*;

use blemap_common::config::Config;
use blemap_common::device::{self, Device, SignalTier};
use blemap_common::{error, info, success};
use blemap_core::scanner::{self, SCAN_WINDOW};

use crate::terminal::progress::ScanProgress;
use crate::terminal::table::{Align, Table};
use crate::terminal::{colors, print};

/// Number of cosmetic progress steps across the scan window. The bar is
/// wall-clock simulated and carries no completion signal from the radio.
const PROGRESS_STEPS: u32 = 100;

pub async fn scan(cfg: &Config) -> anyhow::Result<()> {
    info!(
        "Listening for advertisers for {:.0} seconds",
        SCAN_WINDOW.as_secs_f64()
    );

    let start_time = Instant::now();

    let devices = match scan_window().await {
        Ok(devices) => devices,
        Err(e) => {
            // Terminal for the invocation: no report, no credits.
            error!("CRITICAL ERROR during scan: {e:#}");
            return Ok(());
        }
    };

    if let Err(e) = render_report(&devices, start_time.elapsed(), cfg) {
        error!("Error displaying results: {e:#}");
    }

    // Invariant: reaches the screen on the success, empty and render-error
    // paths alike. Only a scan-level failure above bypasses it.
    print::credits();

    Ok(())
}

/// Spawns the discovery task, walks the progress bar across the window,
/// then joins the task for its result.
async fn scan_window() -> anyhow::Result<Vec<Device>> {
    let progress = ScanProgress::start("Scanning for devices...", PROGRESS_STEPS as u64);
    let discovery = tokio::spawn(scanner::perform_scan(SCAN_WINDOW));

    let step = SCAN_WINDOW / PROGRESS_STEPS;
    for _ in 0..PROGRESS_STEPS {
        tokio::time::sleep(step).await;
        progress.advance();
    }

    // Usually resolved already; blocks further only when the radio runs
    // past the simulated window.
    let devices = discovery.await.context("discovery task aborted")??;
    progress.finish();

    Ok(devices)
}

fn render_report(devices: &[Device], total_time: Duration, cfg: &Config) -> anyhow::Result<()> {
    if devices.is_empty() {
        print::header("zero devices detected", cfg.quiet);
        print::no_results();
        return Ok(());
    }

    let mut ranked = devices.to_vec();
    device::rank_by_signal(&mut ranked);

    print_summary(ranked.len(), total_time, cfg);

    let table = build_table(&ranked)?;
    println!("{table}");
    print::print_status(&"Tip: closer to 0 dBm = stronger signal".dimmed().to_string());

    Ok(())
}

fn print_summary(count: usize, total_time: Duration, cfg: &Config) {
    let found: ColoredString = format!("{count} devices").bold().green();
    let elapsed: ColoredString = format!("{:.2}s", total_time.as_secs_f64()).bold().yellow();
    let line = format!("Scan complete: {found} identified in {elapsed}");

    match cfg.quiet {
        0 => {
            print::fat_separator();
            print::centerln(&line);
        }
        _ => success!("{}", line),
    }
}

fn build_table(devices: &[Device]) -> anyhow::Result<String> {
    let mut table = Table::new(&"Bluetooth LE Scan Results".bold().to_string());
    table.column("Signal", Align::Center);
    table.column("Device Name", Align::Left);
    table.column("Address", Align::Left);
    table.column("Manufacturer ID", Align::Left);

    for device in devices {
        table.row(vec![
            signal_cell(device),
            name_cell(device),
            device.address.color(colors::ADDRESS).to_string(),
            manufacturer_cell(device),
        ]);
    }

    Ok(table.render()?)
}

fn signal_cell(device: &Device) -> String {
    let color = match device.signal_tier() {
        SignalTier::Strong => colors::SIGNAL_STRONG,
        SignalTier::Medium => colors::SIGNAL_MEDIUM,
        SignalTier::Weak => colors::SIGNAL_WEAK,
    };
    format!("{} dBm", device.effective_rssi())
        .color(color)
        .to_string()
}

fn name_cell(device: &Device) -> String {
    match device.name.as_deref() {
        Some(name) => name.color(colors::PRIMARY).bold().to_string(),
        None => "Unknown".italic().dimmed().to_string(),
    }
}

fn manufacturer_cell(device: &Device) -> String {
    match device.first_manufacturer_id() {
        Some(id) => id.to_string().dimmed().to_string(),
        None => "-".dimmed().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn plain_device() -> Device {
        Device {
            address: "AA:BB:CC:DD:EE:FF".to_string(),
            name: None,
            rssi: None,
            manufacturer_data: HashMap::new(),
        }
    }

    #[test]
    fn nameless_device_renders_placeholder() {
        colored::control::set_override(false);
        let cell = name_cell(&plain_device());
        assert_eq!(cell, "Unknown");
    }

    #[test]
    fn empty_manufacturer_data_renders_dash() {
        colored::control::set_override(false);
        let cell = manufacturer_cell(&plain_device());
        assert_eq!(cell, "-");
    }

    #[test]
    fn manufacturer_cell_shows_first_id_as_string() {
        colored::control::set_override(false);
        let mut device = plain_device();
        device.manufacturer_data.insert(76, vec![0xde, 0xad]);
        assert_eq!(manufacturer_cell(&device), "76");
    }

    #[test]
    fn signal_cell_always_shows_raw_value() {
        colored::control::set_override(false);
        let mut device = plain_device();
        device.rssi = Some(-55);
        assert_eq!(signal_cell(&device), "-55 dBm");

        device.rssi = None;
        assert_eq!(signal_cell(&device), "-100 dBm");
    }
}
