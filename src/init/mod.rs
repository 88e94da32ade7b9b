//! The board entry point.
//!
//! Two bodies exist for `usb_musb_init`: the full one registers the MUSB
//! platform device, the minimal one (MUSB glue not built) only brings up the
//! OMAP4430 PHY. Cargo features pick the default at build time, but both are
//! plain values and can be chosen explicitly.

use enum_dispatch::enum_dispatch;
use log::error;

use crate::board::BoardData;
use crate::err::Result;
use crate::osal::{Io, Omap4Phy, OmapBus, PinMux};
use crate::soc::PlatformIdentity;

mod full;
mod phy;

pub use full::FullPlatformInit;
pub use phy::PhyOnlyInit;

/// What the boot code hands to the board glue.
pub struct BoardEnv<'a> {
    pub identity: PlatformIdentity,
    pub bus: &'a mut dyn OmapBus,
    pub mux: &'a mut dyn PinMux,
    pub io: &'a mut dyn Io,
    pub phy: &'a mut dyn Omap4Phy,
}

#[enum_dispatch]
pub trait MusbBoardInit {
    /// Run the one-shot board setup. `None` means the built-in default board.
    fn init(&self, board: Option<&BoardData>, env: &mut BoardEnv<'_>) -> Result;
}

#[enum_dispatch(MusbBoardInit)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MusbInit {
    FullPlatform(FullPlatformInit),
    PhyOnly(PhyOnlyInit),
}

impl MusbInit {
    pub fn from_build_config() -> Self {
        if cfg!(feature = "musb-soc") {
            FullPlatformInit::new().into()
        } else {
            PhyOnlyInit.into()
        }
    }

    /// [`MusbBoardInit::init`], with failures going to the log only.
    pub fn run(&self, board: Option<&BoardData>, env: &mut BoardEnv<'_>) {
        if let Err(e) = self.init(board, env) {
            error!("{e}");
        }
    }
}

/// Board setup with the build's strategy, reporting the failing step.
pub fn try_init(board: Option<&BoardData>, env: &mut BoardEnv<'_>) -> Result {
    MusbInit::from_build_config().init(board, env)
}

/// Board setup with the build's strategy. Best effort: a failure only leaves
/// the controller unregistered.
pub fn usb_musb_init(board: Option<&BoardData>, env: &mut BoardEnv<'_>) {
    MusbInit::from_build_config().run(board, env)
}
