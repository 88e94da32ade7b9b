//! Board-level setup of the Mentor MUSB OTG controller on OMAP2+/AM35x SoCs.
//!
//! Nothing in here drives the controller itself. At boot the board code calls
//! [`usb_musb_init`] once; it merges the board's USB description into the MUSB
//! platform data, registers the `musb-*` platform device against the OTG
//! hwmod, and touches the few SoC registers the controller driver expects to
//! be set up before it probes.
//!
//! The platform framework (hwmod database, pin mux, MMIO mapping) is reached
//! through the traits in [`osal`], so the same code runs against real hardware
//! and against recording fakes in tests.
#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod board;
pub mod device;
pub mod err;
pub mod init;
pub mod mux;
pub mod osal;
pub mod pdata;
pub mod pm;
pub mod regs;
pub mod soc;

pub use board::{BoardData, InterfaceType, MusbMode};
pub use device::{BusId, Device, DeviceBuild, Hwmod, OmapDevice, PlatformDevice};
pub use err::{BuildError, InitError, Result};
pub use init::{
    BoardEnv, FullPlatformInit, MusbBoardInit, MusbInit, PhyOnlyInit, try_init, usb_musb_init,
};
pub use mux::{PinConfig, usb_musb_mux_init, usb_musb_mux_init_raw};
pub use osal::{DirectIo, Io, Omap4Phy, OmapBus, PinMux};
pub use pdata::{MUSB_DMA_MASK, MusbHdrcConfig, MusbPlatformData};
pub use pm::{LatencyFlags, OMAP_MUSB_LATENCY, PmLatency};
pub use soc::{HwmodNames, Machine, PlatformIdentity, SocId};

/// Virtual address of a mapped register window.
pub type Mmio = core::ptr::NonNull<u8>;

/// Physical bus address as seen by the SoC interconnect.
pub type PhysAddr = usize;
