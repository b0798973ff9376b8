//! The central **abstraction** for Bluetooth device discovery.
//!
//! This module defines the interface the concrete discovery strategy (the
//! [`ble`] scanner) implements, and the single entry point the CLI drives.
//!
//! **Architectural Note:**
//! Higher layers should depend on [`DeviceExplorer`] rather than on the
//! btleplug-backed implementation, so the orchestration stays decoupled from
//! the platform Bluetooth stack.

use std::time::Duration;

use async_trait::async_trait;

use blemap_common::device::Device;

mod ble;

use ble::BleScanner;

/// Length of the fixed advertising window.
///
/// Deliberately not a knob: one bounded listen, no retry, no backoff.
pub const SCAN_WINDOW: Duration = Duration::from_secs(5);

/// A strategy that listens for advertisers and returns a frozen snapshot of
/// everything seen during its window.
#[async_trait]
pub trait DeviceExplorer {
    /// Runs one bounded discovery cycle.
    ///
    /// The returned vector reflects the platform stack's own per-address
    /// deduplication: one entry per distinct advertiser, carrying the most
    /// recent advertisement metadata.
    async fn discover_devices(&mut self) -> anyhow::Result<Vec<Device>>;
}

/// Executes a full discovery cycle against the platform adapter.
///
/// Any failure here (adapter missing, permission denied, platform API
/// error) is terminal for the invocation; the caller reports it once and
/// renders nothing.
pub async fn perform_scan(window: Duration) -> anyhow::Result<Vec<Device>> {
    let mut scanner = BleScanner::new(window).await?;
    scanner.discover_devices().await
}
