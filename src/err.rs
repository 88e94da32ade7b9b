use crate::PhysAddr;

pub type Result<T = ()> = core::result::Result<T, InitError>;

/// Failures reported by the platform framework while building a device.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    #[error("No memory available")]
    NoMemory,
    #[error("Device or resource busy")]
    Busy,
    #[error("errno {0}")]
    Errno(i32),
}

/// Why board setup stopped early.
///
/// None of these are fatal for the boot: the entry point logs them and the
/// USB controller simply stays unavailable.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum InitError {
    #[error("Could not look up {name}")]
    HwmodNotFound { name: &'static str },
    #[error("Could not build omap_device for {name} {oh_name}: {source}")]
    DeviceBuild {
        name: &'static str,
        oh_name: &'static str,
        #[source]
        source: BuildError,
    },
    #[error("Could not map {size:#x} bytes at {phys:#x}")]
    Ioremap { phys: PhysAddr, size: usize },
    #[error("OMAP4430 PHY init failed: {0}")]
    Phy(i32),
}
