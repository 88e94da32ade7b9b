//! SoC registers the board glue pokes directly.

use tock_registers::{LocalRegisterCopy, register_bitfields};

use crate::PhysAddr;
use crate::board::InterfaceType;

pub const L4_44XX_BASE: PhysAddr = 0x4a00_0000;
pub const L4_44XX_PHYS: PhysAddr = 0x4a00_0000;
pub const L4_WK_34XX_PHYS: PhysAddr = 0x4830_0000;

/// CM2 `CM_L3INIT_HSUSBOTG_CLKCTRL`, relative to [`L4_44XX_BASE`].
pub const L3INIT_HSUSBOTG_CLKCTRL: usize = 0x9360;

pub const SZ_4K: usize = 0x1000;

/// Page holding the OTG clock control register, and its offset in it.
pub const HSUSBOTG_CLKCTRL_PAGE: PhysAddr = (L4_44XX_BASE + L3INIT_HSUSBOTG_CLKCTRL) & !(SZ_4K - 1);
pub const HSUSBOTG_CLKCTRL_OFFSET: usize = (L4_44XX_BASE + L3INIT_HSUSBOTG_CLKCTRL) & (SZ_4K - 1);

pub const CONTROL_DEV_CONF: usize = 0x300;
/// `CONTROL_DEV_CONF.USBPHY_PD`
pub const PHY_PD: u32 = 1 << 0;

pub const OMAP4_DIE_ID_REG_BASE: PhysAddr = L4_44XX_PHYS + 0x2000;
pub const OMAP3_DIE_ID_REG_BASE: PhysAddr = L4_WK_34XX_PHYS + 0xa000;

/// Control register carrying the PHY power-down bit for this build.
pub const fn phy_pd_reg() -> PhysAddr {
    if cfg!(feature = "omap4") {
        OMAP4_DIE_ID_REG_BASE + CONTROL_DEV_CONF
    } else {
        OMAP3_DIE_ID_REG_BASE + CONTROL_DEV_CONF
    }
}

register_bitfields![u32,
    CLKCTRL [
        // Optional 60 MHz functional clock (XCLK) gate
        OPTFCLKEN_XCLK OFFSET(8) NUMBITS(1) [
            Disable = 0,
            Enable = 1
        ],
        // 60 MHz clock source
        CLKSEL_60M OFFSET(24) NUMBITS(1) [
            Utmi = 0,
            Ulpi = 1
        ],
    ]
];

/// Apply the interface's clock selection to a CLKCTRL value.
///
/// Only UTMI is checked for; anything else gets the ULPI clocking.
pub fn hsusbotg_clkctrl(value: u32, interface_type: InterfaceType) -> u32 {
    let mut reg = LocalRegisterCopy::<u32, CLKCTRL::Register>::new(value);
    if interface_type == InterfaceType::Utmi {
        reg.modify(CLKCTRL::CLKSEL_60M::Utmi + CLKCTRL::OPTFCLKEN_XCLK::Disable);
    } else {
        reg.modify(CLKCTRL::CLKSEL_60M::Ulpi + CLKCTRL::OPTFCLKEN_XCLK::Enable);
    }
    reg.get()
}

#[cfg(test)]
mod tests {
    use super::*;

    const ULPI_BITS: u32 = (1 << 24) | (1 << 8);

    #[test]
    fn test_clkctrl_location() {
        assert_eq!(HSUSBOTG_CLKCTRL_PAGE, 0x4a00_9000);
        assert_eq!(HSUSBOTG_CLKCTRL_OFFSET, 0x360);
        assert_eq!(
            HSUSBOTG_CLKCTRL_PAGE + HSUSBOTG_CLKCTRL_OFFSET,
            L4_44XX_BASE + L3INIT_HSUSBOTG_CLKCTRL
        );
    }

    #[test]
    fn test_ulpi_sets_both_bits() {
        for value in [0, 0x0000_0002, 0xffff_ffff, 0x0100_0000] {
            let out = hsusbotg_clkctrl(value, InterfaceType::Ulpi);
            assert_eq!(out & ULPI_BITS, ULPI_BITS);
            assert_eq!(out & !ULPI_BITS, value & !ULPI_BITS);
        }
    }

    #[test]
    fn test_utmi_clears_both_bits() {
        for value in [0, 0x0000_0002, 0xffff_ffff, 0x0000_0100] {
            let out = hsusbotg_clkctrl(value, InterfaceType::Utmi);
            assert_eq!(out & ULPI_BITS, 0);
            assert_eq!(out & !ULPI_BITS, value & !ULPI_BITS);
        }
    }

    #[test]
    fn test_die_id_regions() {
        assert_eq!(OMAP3_DIE_ID_REG_BASE + CONTROL_DEV_CONF, 0x4830_a300);
        assert_eq!(OMAP4_DIE_ID_REG_BASE + CONTROL_DEV_CONF, 0x4a00_2300);
        #[cfg(feature = "omap4")]
        assert_eq!(phy_pd_reg(), 0x4a00_2300);
        #[cfg(not(feature = "omap4"))]
        assert_eq!(phy_pd_reg(), 0x4830_a300);
    }

    #[test]
    fn test_phy_pd_bit() {
        assert_eq!(PHY_PD, 1);
    }
}
