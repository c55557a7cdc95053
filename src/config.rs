//! Session configuration and its encoding into control registers.

use accelerometer::ErrorKind;
#[cfg(feature = "defmt")]
use defmt::Format;
use num_traits::FromPrimitive;

use crate::reg::*;

/// Operating parameters of a sampling session
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(Format))]
pub struct OperatingConfig {
    /// Output data rate
    pub odr: Odr,
    /// Full-scale range
    pub fs: FullScale,
    /// Power/resolution mode
    pub mode: Mode,
}

impl OperatingConfig {
    /// Create a configuration from already validated parts
    pub fn new(odr: Odr, fs: FullScale, mode: Mode) -> Self {
        Self { odr, fs, mode }
    }

    /// Create a configuration from a 4-bit `ODR` code and a range in g,
    /// fails with `ErrorKind::Param` on codes the device does not define
    pub fn from_raw(odr: u8, range: u8, mode: Mode) -> Result<Self, ErrorKind> {
        let odr = Odr::from_u8(odr).ok_or(ErrorKind::Param)?;
        let fs = FullScale::from_g(range).ok_or(ErrorKind::Param)?;
        Ok(Self::new(odr, fs, mode))
    }

    /// `CTRL_REG1` image: `ODR`, `LPen`, `Zen`, `Yen`, `Xen`
    pub fn ctrl_reg1(&self) -> u8 {
        let mut v = XYZen;
        v |= ((self.odr as u8) << 4) & ODR_MASK;
        if let Mode::LowPower = self.mode {
            v |= LPen;
        }
        v
    }

    /// `CTRL_REG4` image: `BDU`, `FS`, `HR`
    pub fn ctrl_reg4(&self) -> u8 {
        let mut v = BDU;
        v |= (self.fs.bits() << 4) & FS_MASK;
        if let Mode::HighResolution = self.mode {
            v |= HR;
        }
        v
    }

    /// `TEMP_CFG_REG` image, temperature sensor always on
    pub fn temp_cfg_reg(&self) -> u8 {
        TEMP_EN
    }
}

impl Default for OperatingConfig {
    fn default() -> Self {
        Self::new(Odr::HighRate1, FullScale::G2, Mode::Normal)
    }
}
