//! Device identity tracking and capability probing.
//!
//! Captured pointer events only carry a device id. Whether that device
//! exposes relative X/Y axes decides how its motion is interpreted, and
//! querying the platform for axis ranges on every event would be wasteful.
//! [`DeviceIdentityCache`] keeps the answer for the one device currently
//! delivering events and re-probes only when the id changes.

use crate::metadata::DeviceMeta;

/// Identifier of an input device as reported by the input stack.
pub type DeviceId = i32;

/// Answers capability questions about an input device.
///
/// Implemented by the platform glue (on Android, backed by the
/// `InputDevice` motion-range queries). Probing must be side-effect free;
/// the cache decides when it happens.
pub trait DeviceProbe {
    /// Whether the device exposes both a relative-X and a relative-Y axis.
    ///
    /// Absent axis support yields `false`; there is no error case.
    fn has_relative_axes(&self, device: DeviceId) -> bool;

    /// Descriptive metadata for diagnostics and logging.
    fn meta(&self, device: DeviceId) -> DeviceMeta {
        let _ = device;
        DeviceMeta::default()
    }
}

#[derive(Clone, Copy, Debug)]
struct DeviceIdentity {
    id: DeviceId,
    supports_relative_axes: bool,
}

/// Result of a [`DeviceIdentityCache::resolve`] call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Resolution {
    /// Capability flag for the event's device (cached or freshly probed).
    pub supports_relative_axes: bool,
    /// `true` when the event came from a different device than the previous
    /// one. The caller must clear its touch-tracking state before deriving
    /// any motion from this event.
    pub device_changed: bool,
}

/// Process-lifetime cache of the single current input device.
///
/// Size one on purpose: captured-pointer delivery is serialized, so at any
/// moment exactly one device is "current". Interleaving devices costs one
/// probe per switch, which matches how the platform behaves anyway.
#[derive(Debug, Default)]
pub struct DeviceIdentityCache {
    current: Option<DeviceIdentity>,
}

impl DeviceIdentityCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve the capability flag for `device`, probing only on id change.
    pub fn resolve(&mut self, device: DeviceId, probe: &dyn DeviceProbe) -> Resolution {
        if let Some(cached) = self.current {
            if cached.id == device {
                return Resolution {
                    supports_relative_axes: cached.supports_relative_axes,
                    device_changed: false,
                };
            }
        }

        let supports_relative_axes = probe.has_relative_axes(device);
        self.current = Some(DeviceIdentity {
            id: device,
            supports_relative_axes,
        });
        Resolution {
            supports_relative_axes,
            device_changed: true,
        }
    }

    /// Id of the device the cache currently describes, if any.
    pub fn current_device(&self) -> Option<DeviceId> {
        self.current.map(|d| d.id)
    }
}
