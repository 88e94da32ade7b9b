use super::{BoardEnv, MusbBoardInit};
use crate::board::BoardData;
use crate::err::{InitError, Result};

/// Stand-in when the MUSB glue is not built: OMAP44xx still needs its PHY
/// brought up, everything else is left alone.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PhyOnlyInit;

impl MusbBoardInit for PhyOnlyInit {
    fn init(&self, _board: Option<&BoardData>, env: &mut BoardEnv<'_>) -> Result {
        if env.identity.soc.is_omap44xx() {
            env.phy.phy_init().map_err(InitError::Phy)?;
        }
        Ok(())
    }
}
