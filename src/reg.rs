#![allow(non_upper_case_globals)]

#[cfg(feature = "defmt")]
use defmt::Format;
use num_derive::FromPrimitive;

/// I2C slave address
pub const I2C_SAD: u8 = 0b001_1000;

/// Operating mode
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(Format))]
pub enum Mode {
    /// High-resolution mode (12-bit data output)
    HighResolution,
    /// Normal mode (10-bit data output)
    Normal,
    /// Low-power mode (8-bit data output)
    LowPower,
}

impl Mode {
    /// Column in the scale tables
    pub(crate) fn index(self) -> usize {
        match self {
            Mode::Normal => 0,
            Mode::LowPower => 1,
            Mode::HighResolution => 2,
        }
    }
}

/// Register mapping
#[allow(dead_code)]
#[allow(non_camel_case_types)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Register {
    STATUS_REG_AUX = 0x07,
    OUT_TEMP_L = 0x0C,
    OUT_TEMP_H = 0x0D,
    INT_COUNTER_REG = 0x0E,
    WHO_AM_I = 0x0F,
    TEMP_CFG_REG = 0x1F,
    CTRL_REG1 = 0x20,
    CTRL_REG2 = 0x21,
    CTRL_REG3 = 0x22,
    CTRL_REG4 = 0x23,
    CTRL_REG5 = 0x24,
    CTRL_REG6 = 0x25,
    REFERENCE = 0x26,
    STATUS_REG = 0x27,
    OUT_X_L = 0x28,
    OUT_X_H = 0x29,
    OUT_Y_L = 0x2A,
    OUT_Y_H = 0x2B,
    OUT_Z_L = 0x2C,
    OUT_Z_H = 0x2D,
    FIFO_CTRL_REG = 0x2E,
    FIFO_SRC_REG = 0x2F,
    INT1_CFG = 0x30,
    INT1_SRC = 0x31,
    INT1_THS = 0x32,
    INT1_DURATION = 0x33,
    INT2_CFG = 0x34,
    INT2_SRC = 0x35,
    INT2_THS = 0x36,
    INT2_DURATION = 0x37,
    CLICK_CFG = 0x38,
    CLICK_SRC = 0x39,
    CLICK_THS = 0x3A,
    TIME_LIMIT = 0x3B,
    TIME_LATENCY = 0x3C,
    TIME_WINDOW = 0x3D,
    ACT_THS = 0x3E,
    ACT_DUR = 0x3F,
}

impl Register {
    /// Get register address
    pub fn addr(self) -> u8 {
        self as u8
    }

    /// Register holding the most significant byte of a `_L`/`_H` pair
    pub(crate) fn high(self) -> u8 {
        self.addr() + 1
    }
}

// === STATUS_REG_AUX (07h) ===

pub const TOR: u8 = 0b0100_0000;
pub const TDA: u8 = 0b0000_0100;

// === WHO_AM_I (0Fh) ===

/// WHO_AM_I device identification register
pub const DEVICE_ID: u8 = 0b0011_0011;

// === TEMP_CFG_REG (1Fh) ===

pub const TEMP_EN: u8 = 0b1100_0000;

// === CTRL_REG1 (20h) ===

pub const ODR_MASK: u8 = 0b1111_0000;

/// Output Data Rate
#[derive(Copy, Clone, Debug, PartialEq, Eq, FromPrimitive)]
#[cfg_attr(feature = "defmt", derive(Format))]
pub enum Odr {
    /// Power-down mode
    PowerDown = 0b0000,
    /// 1 Hz
    Hz1 = 0b0001,
    /// 10 Hz
    Hz10 = 0b0010,
    /// 25 Hz
    Hz25 = 0b0011,
    /// 50 Hz
    Hz50 = 0b0100,
    /// 100 Hz
    Hz100 = 0b0101,
    /// 200 Hz
    Hz200 = 0b0110,
    /// 400 Hz
    Hz400 = 0b0111,
    /// Low-power mode (1.620 kHz), not defined in other modes
    HighRate0 = 0b1000,
    /// High-resolution / Normal (1.344 kHz),
    /// Low-power (5.376 kHz)
    HighRate1 = 0b1001,
}

impl Odr {
    /// Output data rate in Hz for the given operating mode,
    /// 0 for codes the mode does not define
    pub fn hz(self, mode: Mode) -> f32 {
        match self {
            Odr::PowerDown => 0.0,
            Odr::Hz1 => 1.0,
            Odr::Hz10 => 10.0,
            Odr::Hz25 => 25.0,
            Odr::Hz50 => 50.0,
            Odr::Hz100 => 100.0,
            Odr::Hz200 => 200.0,
            Odr::Hz400 => 400.0,
            Odr::HighRate0 => match mode {
                Mode::LowPower => 1620.0,
                _ => 0.0,
            },
            Odr::HighRate1 => match mode {
                Mode::LowPower => 5376.0,
                _ => 1344.0,
            },
        }
    }
}

/// X, Y and Z axis enable
pub const XYZen: u8 = Xen | Yen | Zen;

pub const LPen: u8 = 0b0000_1000;
pub const Zen: u8 = 0b0000_0100;
pub const Yen: u8 = 0b0000_0010;
pub const Xen: u8 = 0b0000_0001;

// === CTRL_REG4 (23h) ===

pub const BDU: u8 = 0b1000_0000;

pub const FS_MASK: u8 = 0b0011_0000;

/// Full-scale selection
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(Format))]
pub enum FullScale {
    /// ±2 g
    G2 = 0b00,
    /// ±4 g
    G4 = 0b01,
    /// ±8 g
    G8 = 0b10,
    /// ±16 g
    G16 = 0b11,
}

impl FullScale {
    /// Full-scale selection from the measurement span in g
    pub fn from_g(range: u8) -> Option<Self> {
        match range {
            2 => Some(FullScale::G2),
            4 => Some(FullScale::G4),
            8 => Some(FullScale::G8),
            16 => Some(FullScale::G16),
            _ => None,
        }
    }

    /// Measurement span in g
    pub fn g(self) -> u8 {
        match self {
            FullScale::G2 => 2,
            FullScale::G4 => 4,
            FullScale::G8 => 8,
            FullScale::G16 => 16,
        }
    }

    /// `FS` bit code, also the row in the scale table
    pub fn bits(self) -> u8 {
        self as u8
    }
}

pub const HR: u8 = 0b0000_1000;

// === STATUS_REG (27h) ===

pub const ZYXOR: u8 = 0b1000_0000;
pub const ZOR: u8 = 0b0100_0000;
pub const YOR: u8 = 0b0010_0000;
pub const XOR: u8 = 0b0001_0000;
pub const ZYXDA: u8 = 0b0000_1000;
pub const ZDA: u8 = 0b0000_0100;
pub const YDA: u8 = 0b0000_0010;
pub const XDA: u8 = 0b0000_0001;
