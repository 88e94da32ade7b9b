//! Board-supplied USB description.

use num_enum::{IntoPrimitive, TryFromPrimitive};

/// Electrical interface between the MUSB core and its transceiver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[repr(u8)]
pub enum InterfaceType {
    /// Integrated UTMI+ PHY.
    Utmi = 0,
    /// External ULPI transceiver.
    Ulpi = 1,
}

/// Role the controller is brought up in.
///
/// Numbering follows the MUSB glue ABI (`MUSB_HOST`, `MUSB_PERIPHERAL`,
/// `MUSB_OTG`), so values read from board tables convert with `try_from`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[repr(u8)]
pub enum MusbMode {
    Host = 1,
    Peripheral = 2,
    Otg = 3,
}

/// What a board tells us about its USB OTG port.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardData {
    pub interface_type: InterfaceType,
    pub mode: MusbMode,
    /// VBUS budget the board can source, in mA.
    pub power: u16,
    /// VBUS is driven by an external supply.
    pub extvbus: bool,
}

impl BoardData {
    pub const fn new(interface_type: InterfaceType, mode: MusbMode, power: u16) -> Self {
        Self {
            interface_type,
            mode,
            power,
            extvbus: false,
        }
    }

    pub const fn with_extvbus(mut self, extvbus: bool) -> Self {
        self.extvbus = extvbus;
        self
    }
}

impl Default for BoardData {
    /// ULPI transceiver, OTG, up to 100 mA.
    fn default() -> Self {
        Self::new(InterfaceType::Ulpi, MusbMode::Otg, 100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_board() {
        let board = BoardData::default();
        assert_eq!(board.interface_type, InterfaceType::Ulpi);
        assert_eq!(board.mode, MusbMode::Otg);
        assert_eq!(board.power, 100);
        assert!(!board.extvbus);
    }

    #[test]
    fn test_raw_values() {
        assert_eq!(InterfaceType::try_from(0u8).ok(), Some(InterfaceType::Utmi));
        assert_eq!(InterfaceType::try_from(1u8).ok(), Some(InterfaceType::Ulpi));
        assert!(InterfaceType::try_from(2u8).is_err());

        assert_eq!(MusbMode::try_from(3u8).ok(), Some(MusbMode::Otg));
        assert!(MusbMode::try_from(0u8).is_err());
        assert_eq!(u8::from(MusbMode::Peripheral), 2);
    }
}
