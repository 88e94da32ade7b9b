//! Platform data handed to the `musb-*` controller driver.

use crate::board::{BoardData, MusbMode};

/// The MUSB core only drives 32 address lines.
pub const MUSB_DMA_MASK: u64 = 0xffff_ffff;

/// Clock the controller driver requests by name.
pub const MUSB_CLOCK: &str = "ick";

/// Synthesis parameters of the MUSB core on these SoCs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MusbHdrcConfig {
    pub multipoint: bool,
    pub dyn_fifo: bool,
    pub num_eps: u8,
    pub ram_bits: u8,
}

impl MusbHdrcConfig {
    pub const OMAP: Self = Self {
        multipoint: true,
        dyn_fifo: true,
        num_eps: 16,
        ram_bits: 12,
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MusbPlatformData {
    pub mode: MusbMode,
    pub clock: &'static str,
    /// VBUS budget in units of 2 mA, as the MUSB driver expects.
    pub power: u16,
    pub extvbus: bool,
    pub config: MusbHdrcConfig,
    pub board_data: BoardData,
}

impl MusbPlatformData {
    /// Merge a board description into the controller's platform data.
    pub fn from_board(board: &BoardData) -> Self {
        Self {
            mode: board.mode,
            clock: MUSB_CLOCK,
            power: board.power >> 1,
            extvbus: board.extvbus,
            config: MusbHdrcConfig::OMAP,
            board_data: *board,
        }
    }

    /// Budget in mA the driver will actually advertise.
    pub fn power_ma(&self) -> u16 {
        self.power << 1
    }
}
