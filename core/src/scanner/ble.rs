//! The btleplug-backed discovery strategy.
//!
//! Radio management, advertisement parsing and per-address deduplication all
//! happen inside the OS Bluetooth service. This adapter drives one bounded
//! listen and converts the collaborator's view into [`Device`] snapshots.

use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use btleplug::api::{Central, Manager as _, Peripheral as _, ScanFilter};
use btleplug::platform::{Adapter, Manager};
use tokio::time;
use tracing::debug;

use blemap_common::device::Device;
use blemap_common::error::ScanError;

use super::DeviceExplorer;

pub struct BleScanner {
    adapter: Adapter,
    window: Duration,
}

impl BleScanner {
    /// Binds to the first adapter the platform stack exposes.
    pub async fn new(window: Duration) -> anyhow::Result<Self> {
        let manager = Manager::new()
            .await
            .context("failed to reach the platform Bluetooth stack")?;
        let adapter = manager
            .adapters()
            .await?
            .into_iter()
            .next()
            .ok_or(ScanError::NoAdapter)?;

        Ok(Self { adapter, window })
    }
}

#[async_trait]
impl DeviceExplorer for BleScanner {
    async fn discover_devices(&mut self) -> anyhow::Result<Vec<Device>> {
        // Unfiltered scan: advertisement metadata (name, RSSI, manufacturer
        // data) arrives with the peripheral properties.
        self.adapter
            .start_scan(ScanFilter::default())
            .await
            .context("failed to start the advertising scan")?;

        time::sleep(self.window).await;

        let peripherals = self.adapter.peripherals().await?;
        let mut devices = Vec::with_capacity(peripherals.len());
        for peripheral in peripherals {
            let Some(props) = peripheral.properties().await? else {
                continue;
            };
            devices.push(Device {
                address: props.address.to_string(),
                name: props.local_name,
                rssi: props.rssi,
                manufacturer_data: props.manufacturer_data,
            });
        }
        self.adapter.stop_scan().await?;

        debug!("collected {} advertisers", devices.len());
        Ok(devices)
    }
}
