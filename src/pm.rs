//! Power-management latency table for the OTG device.

use bitflags::bitflags;

use crate::device::OmapDevice;
use crate::osal::OmapBus;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct LatencyFlags: u32 {
        /// Let the framework re-measure the latencies at runtime.
        const AUTO_ADJUST = 1 << 0;
    }
}

pub type PmHook = fn(&mut dyn OmapBus, &OmapDevice) -> Result<(), i32>;

/// One idle/enable pair the framework may run for the device.
#[derive(Debug, Clone, Copy)]
pub struct PmLatency {
    pub deactivate_func: PmHook,
    pub activate_func: PmHook,
    pub flags: LatencyFlags,
}

impl PmLatency {
    pub fn deactivate(&self, bus: &mut dyn OmapBus, od: &OmapDevice) -> Result<(), i32> {
        (self.deactivate_func)(bus, od)
    }

    pub fn activate(&self, bus: &mut dyn OmapBus, od: &OmapDevice) -> Result<(), i32> {
        (self.activate_func)(bus, od)
    }
}

pub fn omap_device_idle_hwmods(bus: &mut dyn OmapBus, od: &OmapDevice) -> Result<(), i32> {
    bus.idle_hwmods(od)
}

pub fn omap_device_enable_hwmods(bus: &mut dyn OmapBus, od: &OmapDevice) -> Result<(), i32> {
    bus.enable_hwmods(od)
}

pub static OMAP_MUSB_LATENCY: [PmLatency; 1] = [PmLatency {
    deactivate_func: omap_device_idle_hwmods,
    activate_func: omap_device_enable_hwmods,
    flags: LatencyFlags::AUTO_ADJUST,
}];
