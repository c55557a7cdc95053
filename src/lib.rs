//! Platform-agnostic IIS2DH accelerometer driver which uses I2C via
//! [embedded-hal] and implements the [`Accelerometer` trait][trait]
//! from the `accelerometer` crate.
//!
//! Raw output registers are turned into °C and g with the device's
//! published per-mode and per-range sensitivities, see [`conv`].
//!
//! [embedded-hal]: https://docs.rs/embedded-hal
//! [trait]: https://docs.rs/accelerometer/latest/accelerometer/trait.Accelerometer.html
//!

#![deny(missing_docs)]
#![deny(warnings)]
#![no_std]
#![forbid(unsafe_code)]

mod config;
pub mod conv;
mod reg;

#[cfg(feature = "async")]
pub mod asynch;

use core::fmt::Debug;

pub use accelerometer::vector::{F32x3, I16x3};
pub use accelerometer::{Accelerometer, Error, ErrorKind, RawAccelerometer};
use embedded_hal as hal;
use hal::i2c::I2c;

pub use crate::config::OperatingConfig;
use crate::reg::*;
pub use crate::reg::{FullScale, Mode, Odr, DEVICE_ID, I2C_SAD};

/// Data status structure,
/// decoded from STATUS_REG register
#[derive(Debug)]
pub struct DataStatus {
    /// ZYXOR bit
    pub zyxor: bool,
    /// (XOR, YOR, ZOR) bits
    pub xyzor: (bool, bool, bool),
    /// ZYXDA bit
    pub zyxda: bool,
    /// (XDA, YDA, ZDA) bits
    pub xyzda: (bool, bool, bool),
}

impl DataStatus {
    pub(crate) fn from_reg(reg: u8) -> Self {
        DataStatus {
            zyxor: (reg & ZYXOR) != 0,
            xyzor: ((reg & XOR) != 0, (reg & YOR) != 0, (reg & ZOR) != 0),
            zyxda: (reg & ZYXDA) != 0,
            xyzda: ((reg & XDA) != 0, (reg & YDA) != 0, (reg & ZDA) != 0),
        }
    }
}

/// Check a `WHO_AM_I` value against the IIS2DH identity
pub fn is_known_device(who_am_i: u8) -> bool {
    who_am_i == DEVICE_ID
}

/// Registers shown by `dump_regs`
#[cfg(debug_assertions)]
pub(crate) const DUMP_REGS: [(Register, &str); 4] = [
    (Register::TEMP_CFG_REG, "TEMP_CFG_REG (1Fh)"),
    (Register::CTRL_REG1, "CTRL_REG1 (20h)"),
    (Register::CTRL_REG4, "CTRL_REG4 (23h)"),
    (Register::STATUS_REG, "STATUS_REG (27h)"),
];

/// `IIS2DH` driver
pub struct Iis2dh<I2C> {
    /// The concrete I²C device implementation
    i2c: I2C,
    /// Session configuration, fixed once written to the device
    config: OperatingConfig,
}

impl<I2C, E> Iis2dh<I2C>
where
    I2C: I2c<Error = E>,
    E: Debug,
{
    /// Create a new `IIS2DH` driver from the given `I2C` peripheral,
    /// verify the device identity and write `config` to it
    pub fn new(i2c: I2C, config: OperatingConfig) -> Result<Self, Error<E>> {
        let mut dev = Self { i2c, config };

        // Ensure we have the correct device ID
        let id = dev.get_device_id()?;
        if !is_known_device(id) {
            #[cfg(feature = "defmt")]
            defmt::debug!("unknown WHO_AM_I value {=u8:#x}", id);
            ErrorKind::Device.err()?;
        }

        dev.write_reg(Register::CTRL_REG1, config.ctrl_reg1())?;
        dev.write_reg(Register::CTRL_REG4, config.ctrl_reg4())?;
        dev.write_reg(Register::TEMP_CFG_REG, config.temp_cfg_reg())?;

        #[cfg(feature = "defmt")]
        defmt::debug!("IIS2DH configured: {}", config);

        Ok(dev)
    }

    /// Destroy driver instance, return `I2C` bus instance
    pub fn destroy(self) -> I2C {
        self.i2c
    }

    /// Session configuration
    pub fn config(&self) -> &OperatingConfig {
        &self.config
    }

    /// `WHO_AM_I` register
    pub fn get_device_id(&mut self) -> Result<u8, Error<E>> {
        self.read_reg(Register::WHO_AM_I).map_err(Into::into)
    }

    /// Data status,
    /// `STATUS_REG`: as
    /// DataStatus {zyxor: `ZYXOR`, xyzor: (`XOR`, `YOR`, `ZOR`), zyxda: `ZYXDA`, xyzda: (`XDA`, `YDA`, `ZDA`)}
    pub fn get_status(&mut self) -> Result<DataStatus, Error<E>> {
        let reg = self.read_reg(Register::STATUS_REG)?;
        Ok(DataStatus::from_reg(reg))
    }

    /// Temperature data status,
    /// `STATUS_REG_AUX`: `TOR` - Temperature data overrun,
    ///                   `TDA` - Temperature new data available
    pub fn get_temp_status(&mut self) -> Result<(bool, bool), Error<E>> {
        let reg = self.read_reg(Register::STATUS_REG_AUX)?;
        Ok(((reg & TOR) != 0, (reg & TDA) != 0))
    }

    /// Temperature sensor data,
    /// `OUT_TEMP_L`, `OUT_TEMP_H`
    pub fn get_temp_raw(&mut self) -> Result<u16, Error<E>> {
        self.read_pair(Register::OUT_TEMP_L).map_err(Into::into)
    }

    /// Temperature sensor data in °C
    pub fn get_temp_celsius(&mut self) -> Result<f32, Error<E>> {
        let raw = self.get_temp_raw()?;
        Ok(conv::temperature_celsius(raw))
    }

    /// Dump registers
    #[cfg(debug_assertions)]
    pub fn dump_regs<W>(&mut self, w: &mut W) -> Result<(), Error<E>>
    where
        W: core::fmt::Write,
    {
        for (reg, name) in DUMP_REGS.iter() {
            let value = self.read_reg(*reg)?;
            if writeln!(w, "{} = {:#04x}", name, value).is_err() {
                break;
            }
        }
        Ok(())
    }

    fn read_axes(&mut self) -> Result<[u16; 3], E> {
        Ok([
            self.read_pair(Register::OUT_X_L)?,
            self.read_pair(Register::OUT_Y_L)?,
            self.read_pair(Register::OUT_Z_L)?,
        ])
    }

    #[inline]
    fn read_reg(&mut self, reg: Register) -> Result<u8, E> {
        self.read_addr(reg.addr())
    }

    /// Two single-byte reads, low address first; the auto-increment block
    /// read is not reliable on every bus
    #[inline]
    fn read_pair(&mut self, reg: Register) -> Result<u16, E> {
        let low = self.read_addr(reg.addr())?;
        let high = self.read_addr(reg.high())?;
        Ok(conv::assemble_sample(low, high))
    }

    #[inline]
    fn read_addr(&mut self, addr: u8) -> Result<u8, E> {
        let mut buf = [0u8];
        self.i2c.write_read(I2C_SAD, &[addr], &mut buf)?;
        Ok(buf[0])
    }

    #[inline]
    fn write_reg(&mut self, reg: Register, val: u8) -> Result<(), E> {
        self.i2c.write(I2C_SAD, &[reg.addr(), val])
    }
}

impl<I2C, E> RawAccelerometer<I16x3> for Iis2dh<I2C>
where
    I2C: I2c<Error = E>,
    E: Debug,
{
    type Error = E;

    /// Get acceleration reading from the accelerometer
    fn accel_raw(&mut self) -> Result<I16x3, Error<E>> {
        let [x, y, z] = self.read_axes()?;

        Ok(I16x3::new(x as i16, y as i16, z as i16))
    }
}

impl<I2C, E> Accelerometer for Iis2dh<I2C>
where
    I2C: I2c<Error = E>,
    E: Debug,
{
    type Error = E;

    /// Get normalized ±g reading from the accelerometer
    fn accel_norm(&mut self) -> Result<F32x3, Error<E>> {
        let [x, y, z] = self.read_axes()?;

        Ok(F32x3::new(
            conv::acceleration_g(x, &self.config),
            conv::acceleration_g(y, &self.config),
            conv::acceleration_g(z, &self.config),
        ))
    }

    /// Get sample rate of accelerometer in Hz
    fn sample_rate(&mut self) -> Result<f32, Error<Self::Error>> {
        Ok(self.config.odr.hz(self.config.mode))
    }
}
