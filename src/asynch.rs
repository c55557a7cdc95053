//! Asynchronous version of the driver.
//!
//! Requires enabling the `async` feature.

use core::fmt::Debug;

use accelerometer::vector::{F32x3, I16x3};
use accelerometer::{Error, ErrorKind};
use embedded_hal_async as hal;
use hal::i2c::{ErrorType, I2c};

use crate::{conv, is_known_device, reg::*, DataStatus, OperatingConfig};

/// Asynchronous `IIS2DH` driver
pub struct Iis2dh<I2C> {
    /// The concrete I²C device implementation
    pub(crate) i2c: I2C,
    /// Session configuration, fixed once written to the device
    pub(crate) config: OperatingConfig,
}

impl<I2C, E> Iis2dh<I2C>
where
    I2C: I2c + ErrorType<Error = E>,
    E: Debug,
{
    /// Create a new `IIS2DH` driver from the given `I2C` peripheral,
    /// verify the device identity and write `config` to it
    pub async fn new(i2c: I2C, config: OperatingConfig) -> Result<Self, Error<E>> {
        let mut dev = Self { i2c, config };

        // Ensure we have the correct device ID
        let id = dev.get_device_id().await?;
        if !is_known_device(id) {
            #[cfg(feature = "defmt")]
            defmt::debug!("unknown WHO_AM_I value {=u8:#x}", id);
            ErrorKind::Device.err()?;
        }

        dev.write_reg(Register::CTRL_REG1, config.ctrl_reg1()).await?;
        dev.write_reg(Register::CTRL_REG4, config.ctrl_reg4()).await?;
        dev.write_reg(Register::TEMP_CFG_REG, config.temp_cfg_reg()).await?;

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
    pub async fn get_device_id(&mut self) -> Result<u8, Error<E>> {
        self.read_reg(Register::WHO_AM_I).await.map_err(Into::into)
    }

    /// Data status,
    /// `STATUS_REG`: as
    /// DataStatus {zyxor: `ZYXOR`, xyzor: (`XOR`, `YOR`, `ZOR`), zyxda: `ZYXDA`, xyzda: (`XDA`, `YDA`, `ZDA`)}
    pub async fn get_status(&mut self) -> Result<DataStatus, Error<E>> {
        let reg = self.read_reg(Register::STATUS_REG).await?;
        Ok(DataStatus::from_reg(reg))
    }

    /// Temperature data status,
    /// `STATUS_REG_AUX`: `TOR` - Temperature data overrun,
    ///                   `TDA` - Temperature new data available
    pub async fn get_temp_status(&mut self) -> Result<(bool, bool), Error<E>> {
        let reg = self.read_reg(Register::STATUS_REG_AUX).await?;
        Ok(((reg & TOR) != 0, (reg & TDA) != 0))
    }

    /// Temperature sensor data,
    /// `OUT_TEMP_L`, `OUT_TEMP_H`
    pub async fn get_temp_raw(&mut self) -> Result<u16, Error<E>> {
        self.read_pair(Register::OUT_TEMP_L).await.map_err(Into::into)
    }

    /// Temperature sensor data in °C
    pub async fn get_temp_celsius(&mut self) -> Result<f32, Error<E>> {
        let raw = self.get_temp_raw().await?;
        Ok(conv::temperature_celsius(raw))
    }

    /// Get acceleration reading from the accelerometer
    pub async fn accel_raw(&mut self) -> Result<I16x3, Error<E>> {
        let [x, y, z] = self.read_axes().await?;

        Ok(I16x3::new(x as i16, y as i16, z as i16))
    }

    /// Get normalized ±g reading from the accelerometer
    pub async fn accel_norm(&mut self) -> Result<F32x3, Error<E>> {
        let [x, y, z] = self.read_axes().await?;

        Ok(F32x3::new(
            conv::acceleration_g(x, &self.config),
            conv::acceleration_g(y, &self.config),
            conv::acceleration_g(z, &self.config),
        ))
    }

    /// Get sample rate of accelerometer in Hz
    pub fn sample_rate(&self) -> f32 {
        self.config.odr.hz(self.config.mode)
    }

    /// Dump registers
    #[cfg(debug_assertions)]
    pub async fn dump_regs<W>(&mut self, w: &mut W) -> Result<(), Error<E>>
    where
        W: core::fmt::Write,
    {
        for (reg, name) in crate::DUMP_REGS.iter() {
            let value = self.read_reg(*reg).await?;
            if writeln!(w, "{} = {:#04x}", name, value).is_err() {
                break;
            }
        }
        Ok(())
    }

    async fn read_axes(&mut self) -> Result<[u16; 3], E> {
        Ok([
            self.read_pair(Register::OUT_X_L).await?,
            self.read_pair(Register::OUT_Y_L).await?,
            self.read_pair(Register::OUT_Z_L).await?,
        ])
    }

    #[inline]
    async fn read_reg(&mut self, reg: Register) -> Result<u8, E> {
        self.read_addr(reg.addr()).await
    }

    /// Two single-byte reads, low address first
    #[inline]
    async fn read_pair(&mut self, reg: Register) -> Result<u16, E> {
        let low = self.read_addr(reg.addr()).await?;
        let high = self.read_addr(reg.high()).await?;
        Ok(conv::assemble_sample(low, high))
    }

    #[inline]
    async fn read_addr(&mut self, addr: u8) -> Result<u8, E> {
        let mut buf = [0u8];
        self.i2c.write_read(I2C_SAD, &[addr], &mut buf).await?;
        Ok(buf[0])
    }

    #[inline]
    async fn write_reg(&mut self, reg: Register, val: u8) -> Result<(), E> {
        self.i2c.write(I2C_SAD, &[reg.addr(), val]).await
    }
}
