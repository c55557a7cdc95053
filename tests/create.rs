mod common;

use common::*;
use embedded_hal::i2c::ErrorKind as I2cErrorKind;
use iis2dh::{ErrorKind, FullScale, Mode, Odr};

#[test]
fn create() {
    let trans = [
        trans_who_am_i(),
        // write CTRL_REG1: ODR = 0b1001, Zen, Yen, Xen
        I2cTrans::write(DEV_ADDR, vec![0x20, 0b1001_0111]),
        // write CTRL_REG4: BDU
        I2cTrans::write(DEV_ADDR, vec![0x23, 0b1000_0000]),
        // write TEMP_CFG_REG: TEMP_EN
        I2cTrans::write(DEV_ADDR, vec![0x1F, 0b1100_0000]),
    ];
    let mock = I2cMock::new(&trans);
    let dev = Iis2dh::new(mock, OperatingConfig::default()).unwrap();
    dev.destroy().done();
}

#[test]
fn create_low_power() {
    let config = OperatingConfig::new(Odr::Hz100, FullScale::G4, Mode::LowPower);
    let trans = [
        trans_who_am_i(),
        // write CTRL_REG1: ODR = 0b0101, LPen, Zen, Yen, Xen
        I2cTrans::write(DEV_ADDR, vec![0x20, 0b0101_1111]),
        // write CTRL_REG4: BDU, FS = 0b01
        I2cTrans::write(DEV_ADDR, vec![0x23, 0b1001_0000]),
        I2cTrans::write(DEV_ADDR, vec![0x1F, 0b1100_0000]),
    ];
    let mock = I2cMock::new(&trans);
    let dev = Iis2dh::new(mock, config).unwrap();
    assert_eq!(*dev.config(), config);
    dev.destroy().done();
}

#[test]
fn create_high_resolution() {
    let config = OperatingConfig::new(Odr::Hz400, FullScale::G16, Mode::HighResolution);
    let trans = [
        trans_who_am_i(),
        // write CTRL_REG1: ODR = 0b0111, Zen, Yen, Xen
        I2cTrans::write(DEV_ADDR, vec![0x20, 0b0111_0111]),
        // write CTRL_REG4: BDU, FS = 0b11, HR
        I2cTrans::write(DEV_ADDR, vec![0x23, 0b1011_1000]),
        I2cTrans::write(DEV_ADDR, vec![0x1F, 0b1100_0000]),
    ];
    let mock = I2cMock::new(&trans);
    let dev = Iis2dh::new(mock, config).unwrap();
    dev.destroy().done();
}

#[test]
fn create_unknown_device() {
    // nothing is written after a failed identity check
    let trans = [I2cTrans::write_read(DEV_ADDR, vec![0x0F], vec![0x32])];
    let mut mock = I2cMock::new(&trans);
    let err = Iis2dh::new(mock.clone(), OperatingConfig::default())
        .err()
        .unwrap();
    assert!(matches!(err.kind(), ErrorKind::Device));
    mock.done();
}

#[test]
fn create_bus_error() {
    let trans = [I2cTrans::write_read(DEV_ADDR, vec![0x0F], vec![0x00])
        .with_error(I2cErrorKind::Other)];
    let mut mock = I2cMock::new(&trans);
    let err = Iis2dh::new(mock.clone(), OperatingConfig::default())
        .err()
        .unwrap();
    assert!(matches!(err.kind(), ErrorKind::Bus));
    mock.done();
}

#[test]
fn dev_id_get() {
    let config = OperatingConfig::default();
    let mut trans = trans_new(&config);
    trans.push(trans_who_am_i());
    let mock = I2cMock::new(&trans);
    let mut dev = Iis2dh::new(mock, config).unwrap();
    let dev_id = dev.get_device_id().unwrap();
    assert_eq!(dev_id, 0b0011_0011);
    dev.destroy().done();
}

#[test]
fn status_get() {
    let config = OperatingConfig::default();
    let mut trans = trans_new(&config);
    // read STATUS_REG
    trans.push(trans_read(0x27, 0b1001_1010));
    let mock = I2cMock::new(&trans);
    let mut dev = Iis2dh::new(mock, config).unwrap();

    let st = dev.get_status().unwrap();
    assert!(st.zyxor);
    assert_eq!(st.xyzor, (true, false, false));
    assert!(st.zyxda);
    assert_eq!(st.xyzda, (false, true, false));

    dev.destroy().done();
}

#[test]
#[cfg(debug_assertions)]
fn regs_dump() {
    let config = OperatingConfig::default();
    let mut trans = trans_new(&config);
    trans.push(trans_read(0x1F, 0b1100_0000));
    trans.push(trans_read(0x20, 0b1001_0111));
    trans.push(trans_read(0x23, 0b1000_0000));
    trans.push(trans_read(0x27, 0b0000_1111));
    let mock = I2cMock::new(&trans);
    let mut dev = Iis2dh::new(mock, config).unwrap();

    let mut out = String::new();
    dev.dump_regs(&mut out).unwrap();
    assert_eq!(
        out,
        "TEMP_CFG_REG (1Fh) = 0xc0\n\
         CTRL_REG1 (20h) = 0x97\n\
         CTRL_REG4 (23h) = 0x80\n\
         STATUS_REG (27h) = 0x0f\n"
    );

    dev.destroy().done();
}

#[cfg(debug_assertions)]
struct FailingWriter;

#[cfg(debug_assertions)]
impl core::fmt::Write for FailingWriter {
    fn write_str(&mut self, _: &str) -> core::fmt::Result {
        Err(core::fmt::Error)
    }
}

#[test]
#[cfg(debug_assertions)]
fn regs_dump_writer_error() {
    let config = OperatingConfig::default();
    let mut trans = trans_new(&config);
    // dump stops after the first line cannot be written
    trans.push(trans_read(0x1F, 0b1100_0000));
    let mock = I2cMock::new(&trans);
    let mut dev = Iis2dh::new(mock, config).unwrap();

    dev.dump_regs(&mut FailingWriter).unwrap();

    dev.destroy().done();
}
