//! SSD1306 command bytes.

pub const MEMORY_MODE: u8 = 0x20;
pub const COLUMN_ADDR: u8 = 0x21;
pub const PAGE_ADDR: u8 = 0x22;
pub const SET_CONTRAST: u8 = 0x81;
pub const CHARGE_PUMP: u8 = 0x8D;
pub const SEG_REMAP: u8 = 0xA0;
pub const DISPLAY_ALL_ON_RESUME: u8 = 0xA4;
pub const NORMAL_DISPLAY: u8 = 0xA6;
pub const INVERT_DISPLAY: u8 = 0xA7;
pub const SET_MULTIPLEX: u8 = 0xA8;
pub const DISPLAY_OFF: u8 = 0xAE;
pub const DISPLAY_ON: u8 = 0xAF;
pub const COM_SCAN_DEC: u8 = 0xC8;
pub const SET_DISPLAY_OFFSET: u8 = 0xD3;
pub const SET_DISPLAY_CLOCK_DIV: u8 = 0xD5;
pub const SET_PRECHARGE: u8 = 0xD9;
pub const SET_COM_PINS: u8 = 0xDA;
pub const SET_VCOM_DETECT: u8 = 0xDB;
pub const SET_START_LINE: u8 = 0x40;

pub const RIGHT_HORIZONTAL_SCROLL: u8 = 0x26;
pub const LEFT_HORIZONTAL_SCROLL: u8 = 0x27;
pub const VERTICAL_AND_RIGHT_HORIZONTAL_SCROLL: u8 = 0x29;
pub const VERTICAL_AND_LEFT_HORIZONTAL_SCROLL: u8 = 0x2A;
pub const DEACTIVATE_SCROLL: u8 = 0x2E;
pub const ACTIVATE_SCROLL: u8 = 0x2F;
pub const SET_VERTICAL_SCROLL_AREA: u8 = 0xA3;

/// Control byte announcing a command on the I2C bus.
pub const CONTROL_COMMAND: u8 = 0x00;
/// Control byte announcing display RAM data on the I2C bus.
pub const CONTROL_DATA: u8 = SET_START_LINE;
