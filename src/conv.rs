//! Conversion of raw output registers into physical units.
//!
//! Everything here is pure arithmetic, the driver types only feed it with
//! register bytes read over the bus.

use cast::{f32, u16, u32};

use crate::config::OperatingConfig;
use crate::reg::{FullScale, Mode};

/// Sensitivity in mg/digit, one row per full-scale, one column per mode
/// (normal, low-power, high-resolution).
pub const SCALE_MG: [[f32; 3]; 4] = [
    [3.91, 15.63, 0.98],
    [7.81, 31.25, 1.95],
    [15.63, 62.50, 3.91],
    [46.95, 188.68, 11.72],
];

/// Left-justification divisor per mode (normal, low-power, high-resolution)
pub const MODE_FACTOR: [f32; 3] = [64.0, 256.0, 16.0];

/// Temperature sensor reference point in °C
const TEMP_OFFSET: f32 = 25.0;

/// LSB/°C of the 8.8 fixed-point temperature output
const TEMP_SENS: f32 = 256.0;

/// Interpret the low `bits` bits of `raw` as a two's-complement number
pub fn decode_signed(raw: u32, bits: u32) -> i32 {
    let raw = if bits >= 32 {
        raw
    } else {
        raw & ((1 << bits) - 1)
    };
    if bits > 0 && bits < 32 && raw & (1 << (bits - 1)) != 0 {
        (i64::from(raw) - (1i64 << bits)) as i32
    } else {
        raw as i32
    }
}

/// Join the bytes of an `_L`/`_H` register pair, low address first
pub fn assemble_sample(low: u8, high: u8) -> u16 {
    (u16(high) << 8) | u16(low)
}

/// Temperature in °C from a raw `OUT_TEMP` pair
pub fn temperature_celsius(raw: u16) -> f32 {
    f32(decode_signed(u32(raw), 16)) / TEMP_SENS + TEMP_OFFSET
}

/// Milli-g per LSB for the given full-scale and mode
pub fn mg_per_lsb(fs: FullScale, mode: Mode) -> f32 {
    SCALE_MG[usize::from(fs.bits())][mode.index()]
}

/// Normalization divisor for the given mode
pub fn mode_factor(mode: Mode) -> f32 {
    MODE_FACTOR[mode.index()]
}

/// Acceleration in g from a raw `OUT_X`/`OUT_Y`/`OUT_Z` pair
pub fn acceleration_g(raw: u16, config: &OperatingConfig) -> f32 {
    let counts = f32(decode_signed(u32(raw), 16));
    // two stages, the factors are published separately
    (counts / mode_factor(config.mode)) * mg_per_lsb(config.fs, config.mode) / 1000.0
}
