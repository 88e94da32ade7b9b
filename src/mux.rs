//! Pad muxing for the OTG port's transceiver interface.

use bitflags::bitflags;

use crate::board::InterfaceType;
use crate::osal::PinMux;

bitflags! {
    /// OMAP3/4 pad configuration bits.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct PinConfig: u16 {
        const PULL_ENA = 1 << 3;
        const PULL_UP = 1 << 4;
        const INPUT_EN = 1 << 8;
    }
}

impl PinConfig {
    /// `OMAP_PIN_INPUT`
    pub const INPUT: Self = Self::INPUT_EN;
    /// `OMAP_PIN_INPUT_PULLDOWN`
    pub const INPUT_PULLDOWN: Self = Self::INPUT_EN.union(Self::PULL_ENA);
}

const UTMI_SIGNALS: [&str; 2] = ["usba0_otg_dp", "usba0_otg_dm"];

const ULPI_SIGNALS: [&str; 12] = [
    "usba0_ulpiphy_clk",
    "usba0_ulpiphy_stp",
    "usba0_ulpiphy_dir",
    "usba0_ulpiphy_nxt",
    "usba0_ulpiphy_dat0",
    "usba0_ulpiphy_dat1",
    "usba0_ulpiphy_dat2",
    "usba0_ulpiphy_dat3",
    "usba0_ulpiphy_dat4",
    "usba0_ulpiphy_dat5",
    "usba0_ulpiphy_dat6",
    "usba0_ulpiphy_dat7",
];

/// Signals an interface needs and how their pads are configured.
pub fn signals(interface_type: InterfaceType) -> (&'static [&'static str], PinConfig) {
    match interface_type {
        InterfaceType::Utmi => (&UTMI_SIGNALS, PinConfig::INPUT),
        InterfaceType::Ulpi => (&ULPI_SIGNALS, PinConfig::INPUT_PULLDOWN),
    }
}

pub fn usb_musb_mux_init(mux: &mut dyn PinMux, interface_type: InterfaceType) {
    let (names, config) = signals(interface_type);
    for &name in names {
        if let Err(e) = mux.init_signal(name, config) {
            log::debug!("mux {name} -> {config:?}: {e}");
        }
    }
}

/// Same as [`usb_musb_mux_init`] for a raw interface number from a board
/// table. Unknown numbers leave the pads alone.
pub fn usb_musb_mux_init_raw(mux: &mut dyn PinMux, interface_type: u8) {
    match InterfaceType::try_from(interface_type) {
        Ok(ty) => usb_musb_mux_init(mux, ty),
        Err(e) => log::debug!("mux: {e}, skipped"),
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::{String, ToString};
    use alloc::vec::Vec;

    use super::*;

    #[derive(Default)]
    struct Recorder {
        calls: Vec<(String, PinConfig)>,
        fail: bool,
    }

    impl PinMux for Recorder {
        fn init_signal(&mut self, name: &str, config: PinConfig) -> Result<(), i32> {
            self.calls.push((name.to_string(), config));
            if self.fail { Err(-22) } else { Ok(()) }
        }
    }

    #[test]
    fn test_pin_config_values() {
        assert_eq!(PinConfig::INPUT.bits(), 0x0100);
        assert_eq!(PinConfig::INPUT_PULLDOWN.bits(), 0x0108);
    }

    #[test]
    fn test_utmi_two_plain_inputs() {
        let mut mux = Recorder::default();
        usb_musb_mux_init(&mut mux, InterfaceType::Utmi);

        assert_eq!(mux.calls.len(), 2);
        assert_eq!(mux.calls[0], ("usba0_otg_dp".to_string(), PinConfig::INPUT));
        assert_eq!(mux.calls[1], ("usba0_otg_dm".to_string(), PinConfig::INPUT));
    }

    #[test]
    fn test_ulpi_twelve_pulldown_inputs() {
        let mut mux = Recorder::default();
        usb_musb_mux_init(&mut mux, InterfaceType::Ulpi);

        assert_eq!(mux.calls.len(), 12);
        assert!(
            mux.calls
                .iter()
                .all(|(_, c)| *c == PinConfig::INPUT_PULLDOWN)
        );
        assert_eq!(mux.calls[0].0, "usba0_ulpiphy_clk");
        assert_eq!(mux.calls[11].0, "usba0_ulpiphy_dat7");
    }

    #[test]
    fn test_unknown_interface_is_noop() {
        let mut mux = Recorder::default();
        usb_musb_mux_init_raw(&mut mux, 7);
        assert!(mux.calls.is_empty());

        usb_musb_mux_init_raw(&mut mux, 0);
        assert_eq!(mux.calls.len(), 2);
    }

    #[test]
    fn test_pin_errors_do_not_stop_the_rest() {
        let mut mux = Recorder {
            fail: true,
            ..Default::default()
        };
        usb_musb_mux_init(&mut mux, InterfaceType::Ulpi);
        assert_eq!(mux.calls.len(), 12);
    }
}
