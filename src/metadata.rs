//! Device metadata snapshot.
//!
//! [`DeviceMeta`] is a lightweight, cloneable description of a pointer device
//! suitable for logging, diagnostics, and persistence. The platform probe
//! populates what it knows; unknown fields remain `None`.
//!
//! # Conventions
//! - `name` should be the OS-reported device name when available.
//! - `vendor_id`/`product_id` are generally stable and useful for
//!   re-identification across reconnects.
//! - `source_bits` is the raw source bitmask as reported by the platform;
//!   treat it as diagnostic data, [`SourceClass`](crate::event::SourceClass)
//!   is the typed view.

use serde::{Deserialize, Serialize};

/// Snapshot of metadata describing a single pointer device.
///
/// All identifying fields are optional; populate what is known on the
/// current platform.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct DeviceMeta {
    /// Human-readable device name from the driver/firmware.
    pub name: Option<String>,

    /// USB Vendor ID (VID), if known.
    pub vendor_id: Option<u16>,

    /// USB Product ID (PID), if known.
    pub product_id: Option<u16>,

    /// Raw source bitmask reported by the input stack.
    pub source_bits: Option<u32>,

    /// Whether the device exposes relative X/Y axes, as resolved by the
    /// capability probe.
    pub supports_relative_axes: bool,
}
