//! Which chip and which board we are running on.
//!
//! The boot code resolves this once (from the CPU id registers and the
//! machine number) and hands it to the init routine, instead of every
//! decision re-querying `cpu_is_*()` / `machine_is_*()`.

/// SoC part, as far as the USB glue cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SocId {
    Omap2430,
    Omap34xx,
    Omap3505,
    Omap3517,
    Omap44xx,
    Other,
}

impl SocId {
    /// AM35x parts carry their own OTG wrapper around the MUSB core.
    pub fn is_am35x(self) -> bool {
        matches!(self, SocId::Omap3517 | SocId::Omap3505)
    }

    pub fn is_omap44xx(self) -> bool {
        matches!(self, SocId::Omap44xx)
    }
}

/// Board product.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Machine {
    /// Motorola Mapphone (OMAP4 based).
    Mapphone,
    #[default]
    Generic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlatformIdentity {
    pub soc: SocId,
    pub machine: Machine,
}

impl PlatformIdentity {
    pub const fn new(soc: SocId, machine: Machine) -> Self {
        Self { soc, machine }
    }

    pub fn otg_names(&self) -> HwmodNames {
        if self.soc.is_am35x() {
            HwmodNames::AM35X
        } else {
            HwmodNames::OMAP2430
        }
    }
}

/// Hwmod to look up and platform device name to register it under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HwmodNames {
    pub oh_name: &'static str,
    pub name: &'static str,
}

impl HwmodNames {
    pub const AM35X: Self = Self {
        oh_name: "am35x_otg_hs",
        name: "musb-am35x",
    };

    pub const OMAP2430: Self = Self {
        oh_name: "usb_otg_hs",
        name: "musb-omap2430",
    };
}
