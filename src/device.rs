//! Device objects owned by the omap_device/hwmod framework.
//!
//! The init routine never creates these itself: it hands a [`DeviceBuild`]
//! request to [`OmapBus::device_build`](crate::osal::OmapBus::device_build)
//! and gets back a shared [`OmapDevice`].

use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec;
use alloc::vec::Vec;

use spin::Mutex;

use crate::pdata::MusbPlatformData;
use crate::pm::PmLatency;

/// Handle to an on-chip module description in the hwmod database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hwmod {
    name: String,
}

impl Hwmod {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Platform bus instance number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusId {
    /// Let the bus pick (`-1`).
    Auto,
    Fixed(u16),
}

impl BusId {
    pub fn raw(self) -> i32 {
        match self {
            BusId::Auto => -1,
            BusId::Fixed(id) => i32::from(id),
        }
    }
}

/// Everything `omap_device_build()` needs for one device.
#[derive(Debug, Clone)]
pub struct DeviceBuild<'a> {
    pub name: &'static str,
    pub bus_id: BusId,
    pub hwmod: &'a Hwmod,
    pub pdata: MusbPlatformData,
    pub pm_lats: &'static [PmLatency],
    pub is_early_device: bool,
}

/// Generic device state the driver model keeps per device.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Device {
    pub dma_mask: Option<u64>,
    pub coherent_dma_mask: u64,
}

#[derive(Debug)]
pub struct PlatformDevice {
    pub name: &'static str,
    pub id: i32,
    dev: Arc<Mutex<Device>>,
}

impl PlatformDevice {
    pub fn new(name: &'static str, id: i32) -> Self {
        Self {
            name,
            id,
            dev: Arc::new(Mutex::new(Device::default())),
        }
    }

    /// Take a reference on the embedded device; dropping it is the `put`.
    pub fn get_device(&self) -> Arc<Mutex<Device>> {
        Arc::clone(&self.dev)
    }

    /// Snapshot of the device state.
    pub fn device(&self) -> Device {
        self.dev.lock().clone()
    }

    /// References currently held on the embedded device, the owner's included.
    pub fn device_refs(&self) -> usize {
        Arc::strong_count(&self.dev)
    }
}

#[derive(Debug)]
pub struct OmapDevice {
    pub pdev: PlatformDevice,
    pub hwmods: Vec<Hwmod>,
    pub pm_lats: &'static [PmLatency],
    pub pdata: MusbPlatformData,
}

impl OmapDevice {
    /// Build the device object for `req`; `id` is the instance number the
    /// bus settled on.
    pub fn from_request(req: DeviceBuild<'_>, id: i32) -> Self {
        Self {
            pdev: PlatformDevice::new(req.name, id),
            hwmods: vec![req.hwmod.clone()],
            pm_lats: req.pm_lats,
            pdata: req.pdata,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BoardData;
    use crate::pm::OMAP_MUSB_LATENCY;

    #[test]
    fn test_bus_id() {
        assert_eq!(BusId::Auto.raw(), -1);
        assert_eq!(BusId::Fixed(2).raw(), 2);
        assert_eq!(BusId::Fixed(u16::MAX).raw(), 65535);
    }

    #[test]
    fn test_device_reference_counting() {
        let pdev = PlatformDevice::new("musb-omap2430", 0);
        assert_eq!(pdev.device_refs(), 1);

        let dev = pdev.get_device();
        assert_eq!(pdev.device_refs(), 2);
        dev.lock().coherent_dma_mask = 0xffff;
        drop(dev);

        assert_eq!(pdev.device_refs(), 1);
        assert_eq!(pdev.device().coherent_dma_mask, 0xffff);
    }

    #[test]
    fn test_from_request() {
        let oh = Hwmod::new("usb_otg_hs");
        let req = DeviceBuild {
            name: "musb-omap2430",
            bus_id: BusId::Auto,
            hwmod: &oh,
            pdata: MusbPlatformData::from_board(&BoardData::default()),
            pm_lats: &OMAP_MUSB_LATENCY,
            is_early_device: false,
        };
        let od = OmapDevice::from_request(req, 0);

        assert_eq!(od.pdev.name, "musb-omap2430");
        assert_eq!(od.hwmods, vec![Hwmod::new("usb_otg_hs")]);
        assert_eq!(od.pm_lats.len(), 1);
        assert_eq!(od.pdata.power, 50);
        assert_eq!(od.pdev.device(), Device::default());
    }
}
