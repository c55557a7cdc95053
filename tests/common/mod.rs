#![allow(dead_code)]

pub use iis2dh::{Iis2dh, OperatingConfig};

use embedded_hal_mock as hal;
pub use hal::eh1::i2c::{Mock as I2cMock, Transaction as I2cTrans};

pub const DEV_ADDR: u8 = 0b001_1000;

pub fn trans_who_am_i() -> I2cTrans {
    I2cTrans::write_read(DEV_ADDR, vec![0x0F], vec![0b0011_0011])
}

/// Identity check and configuration writes issued by `Iis2dh::new`
pub fn trans_new(config: &OperatingConfig) -> Vec<I2cTrans> {
    vec![
        trans_who_am_i(),
        I2cTrans::write(DEV_ADDR, vec![0x20, config.ctrl_reg1()]),
        I2cTrans::write(DEV_ADDR, vec![0x23, config.ctrl_reg4()]),
        I2cTrans::write(DEV_ADDR, vec![0x1F, 0b1100_0000]),
    ]
}

/// Single-byte read of `reg`
pub fn trans_read(reg: u8, value: u8) -> I2cTrans {
    I2cTrans::write_read(DEV_ADDR, vec![reg], vec![value])
}

/// Low then high byte of a register pair
pub fn trans_pair(reg: u8, low: u8, high: u8) -> [I2cTrans; 2] {
    [trans_read(reg, low), trans_read(reg + 1, high)]
}
