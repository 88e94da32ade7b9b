use log::{debug, info, warn};

use super::{BoardEnv, MusbBoardInit};
use crate::PhysAddr;
use crate::board::{BoardData, InterfaceType};
use crate::device::{BusId, DeviceBuild, PlatformDevice};
use crate::err::{InitError, Result};
use crate::mux::usb_musb_mux_init;
use crate::osal::Io;
use crate::pdata::{MUSB_DMA_MASK, MusbPlatformData};
use crate::pm::OMAP_MUSB_LATENCY;
use crate::regs::{
    HSUSBOTG_CLKCTRL_OFFSET, HSUSBOTG_CLKCTRL_PAGE, PHY_PD, SZ_4K, hsusbotg_clkctrl, phy_pd_reg,
};
use crate::soc::{HwmodNames, Machine};

/// Registers the MUSB platform device and sets up the SoC around it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FullPlatformInit {
    phy_pd_reg: PhysAddr,
}

impl FullPlatformInit {
    pub const fn new() -> Self {
        Self::with_phy_pd_reg(phy_pd_reg())
    }

    /// Power the PHY down through `reg` instead of the build's die-id region.
    pub const fn with_phy_pd_reg(reg: PhysAddr) -> Self {
        Self { phy_pd_reg: reg }
    }

    pub fn phy_pd_reg(&self) -> PhysAddr {
        self.phy_pd_reg
    }
}

impl Default for FullPlatformInit {
    fn default() -> Self {
        Self::new()
    }
}

impl MusbBoardInit for FullPlatformInit {
    fn init(&self, board: Option<&BoardData>, env: &mut BoardEnv<'_>) -> Result {
        let board = board.copied().unwrap_or_default();
        let pdata = MusbPlatformData::from_board(&board);
        debug!("MUSB: {pdata:?}");

        usb_musb_mux_init(&mut *env.mux, board.interface_type);

        let HwmodNames { oh_name, name } = env.identity.otg_names();
        debug!("MUSB: {name} on hwmod {oh_name}");

        let oh = env
            .bus
            .hwmod_lookup(oh_name)
            .ok_or(InitError::HwmodNotFound { name: oh_name })?;

        let od = env
            .bus
            .device_build(DeviceBuild {
                name,
                bus_id: BusId::Auto,
                hwmod: &oh,
                pdata,
                pm_lats: &OMAP_MUSB_LATENCY,
                is_early_device: false,
            })
            .map_err(|source| InitError::DeviceBuild {
                name,
                oh_name,
                source,
            })?;

        set_dma_mask(&od.pdev);

        if env.identity.machine == Machine::Mapphone {
            setup_hsusbotg_clkctrl(&mut *env.io, board.interface_type)?;
        }

        debug!("MUSB: PHY power down @{:#x}", self.phy_pd_reg);
        env.io.omap_writel(PHY_PD, self.phy_pd_reg);
        Ok(())
    }
}

fn set_dma_mask(pdev: &PlatformDevice) {
    let dev = pdev.get_device();
    let mut dev = dev.lock();
    dev.dma_mask = Some(MUSB_DMA_MASK);
    dev.coherent_dma_mask = MUSB_DMA_MASK;
}

// Mapphone routes the OTG port through its own clock selection.
fn setup_hsusbotg_clkctrl(io: &mut dyn Io, interface_type: InterfaceType) -> Result {
    let Some(base) = io.ioremap(HSUSBOTG_CLKCTRL_PAGE, SZ_4K) else {
        warn!("MUSB: cannot map CLKCTRL page {HSUSBOTG_CLKCTRL_PAGE:#x}");
        return Err(InitError::Ioremap {
            phys: HSUSBOTG_CLKCTRL_PAGE,
            size: SZ_4K,
        });
    };

    // SAFETY: the register is inside the page mapped above
    let clkctrl = unsafe { io.readl(base, HSUSBOTG_CLKCTRL_OFFSET) };
    info!("USB MUSB Init-Initial value of CLKCTRL is {clkctrl:#x}");

    let clkctrl = hsusbotg_clkctrl(clkctrl, interface_type);
    // SAFETY: same register, same mapping
    unsafe { io.writel(clkctrl, base, HSUSBOTG_CLKCTRL_OFFSET) };

    // SAFETY: same register, same mapping
    let clkctrl = unsafe { io.readl(base, HSUSBOTG_CLKCTRL_OFFSET) };
    info!("USB MUSB Post-Initial value of CLKCTRL is {clkctrl:#x}");
    Ok(())
}
