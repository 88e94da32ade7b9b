//! Services the boot environment provides to the board glue.

use alloc::sync::Arc;
use core::ptr::NonNull;

use mbarrier::wmb;

use crate::device::{DeviceBuild, Hwmod, OmapDevice};
use crate::err::BuildError;
use crate::mux::PinConfig;
use crate::{Mmio, PhysAddr};

/// The omap_device/hwmod layer.
pub trait OmapBus {
    /// Find a module in the hwmod database by name.
    fn hwmod_lookup(&self, name: &str) -> Option<Hwmod>;

    /// Create and register the platform device described by `req`.
    ///
    /// The platform data in `req` is owned by the new device from here on.
    fn device_build(&mut self, req: DeviceBuild<'_>) -> Result<Arc<OmapDevice>, BuildError>;

    /// Idle every hwmod backing `od`.
    fn idle_hwmods(&mut self, od: &OmapDevice) -> Result<(), i32>;

    /// Enable every hwmod backing `od`.
    fn enable_hwmods(&mut self, od: &OmapDevice) -> Result<(), i32>;
}

/// Pad configuration through the OMAP mux tables.
pub trait PinMux {
    /// Route the named signal to its pad with `config`.
    ///
    /// Errors are the framework's to report; callers ignore them.
    fn init_signal(&mut self, name: &str, config: PinConfig) -> Result<(), i32>;
}

/// Memory-mapped register access.
pub trait Io {
    /// Map `size` bytes of physical address space.
    fn ioremap(&mut self, phys: PhysAddr, size: usize) -> Option<Mmio>;

    /// # Safety
    ///
    /// `base + offset` must lie inside a window returned by [`Io::ioremap`].
    unsafe fn readl(&self, base: Mmio, offset: usize) -> u32;

    /// # Safety
    ///
    /// `base + offset` must lie inside a window returned by [`Io::ioremap`].
    unsafe fn writel(&mut self, value: u32, base: Mmio, offset: usize);

    /// Write a register in the always-mapped L4 space by physical address.
    fn omap_writel(&mut self, value: u32, phys: PhysAddr);
}

/// Out-of-line OMAP4430 PHY setup, used when the MUSB glue is not built.
pub trait Omap4Phy {
    fn phy_init(&mut self) -> Result<(), i32>;
}

/// [`Io`] for boot code that runs with the peripheral space identity mapped.
#[derive(Debug, Default, Clone, Copy)]
pub struct DirectIo;

impl Io for DirectIo {
    fn ioremap(&mut self, phys: PhysAddr, _size: usize) -> Option<Mmio> {
        NonNull::new(phys as *mut u8)
    }

    unsafe fn readl(&self, base: Mmio, offset: usize) -> u32 {
        let reg = unsafe { base.as_ptr().add(offset) }.cast::<u32>();
        unsafe { reg.read_volatile() }
    }

    unsafe fn writel(&mut self, value: u32, base: Mmio, offset: usize) {
        wmb();
        let reg = unsafe { base.as_ptr().add(offset) }.cast::<u32>();
        unsafe { reg.write_volatile(value) }
    }

    fn omap_writel(&mut self, value: u32, phys: PhysAddr) {
        let Some(base) = self.ioremap(phys, 4) else {
            log::warn!("omap_writel: null address, {value:#x} dropped");
            return;
        };
        // SAFETY: identity mapping, `phys` is a 32-bit register in L4 space
        unsafe { self.writel(value, base, 0) }
    }
}
