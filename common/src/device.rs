//! Domain model for one scan window.
//!
//! A [`Device`] is a frozen snapshot of the most recent advertisement the
//! platform stack saw for one address. Nothing here touches the radio: the
//! collaborator hands over finished values and this module only ranks and
//! classifies them for the report.

use std::cmp::Reverse;
use std::collections::HashMap;

/// Sentinel for advertisements that carried no RSSI.
///
/// Ranks below every real reading. A sort/classification stand-in for
/// "missing", not a claim about actual signal strength.
pub const MISSING_RSSI: i16 = -100;

/// One BLE advertiser seen during the scan window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Device {
    /// Platform-formatted hardware address.
    pub address: String,

    /// Advertised local name, absent when the device does not broadcast one.
    pub name: Option<String>,

    /// Received signal strength in dBm.
    pub rssi: Option<i16>,

    /// Manufacturer ID to raw payload, exactly as advertised.
    ///
    /// Only the key set is consumed by the report; payloads ride along
    /// unparsed.
    pub manufacturer_data: HashMap<u16, Vec<u8>>,
}

impl Device {
    /// RSSI with the missing-value sentinel applied.
    pub fn effective_rssi(&self) -> i16 {
        self.rssi.unwrap_or(MISSING_RSSI)
    }

    pub fn signal_tier(&self) -> SignalTier {
        SignalTier::classify(self.effective_rssi())
    }

    /// First advertised manufacturer ID, in the collaborator's iteration
    /// order. Devices can advertise several; only the first one is reported.
    pub fn first_manufacturer_id(&self) -> Option<u16> {
        self.manufacturer_data.keys().next().copied()
    }
}

/// Presentation tier for a signal reading.
///
/// Total over the integer range: every dBm value lands in exactly one tier,
/// no overlap, no gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalTier {
    /// Above -60 dBm.
    Strong,
    /// Above -80 dBm, up to and including -60 dBm.
    Medium,
    /// -80 dBm and below, including the missing-value sentinel.
    Weak,
}

impl SignalTier {
    pub fn classify(rssi: i16) -> Self {
        if rssi > -60 {
            SignalTier::Strong
        } else if rssi > -80 {
            SignalTier::Medium
        } else {
            SignalTier::Weak
        }
    }
}

/// Orders strongest-signal-first.
///
/// The sort is stable, so advertisers with equal effective RSSI keep their
/// discovery order.
pub fn rank_by_signal(devices: &mut [Device]) {
    devices.sort_by_key(|device| Reverse(device.effective_rssi()));
}
