//! Monochrome framebuffer and SSD1306 driver.
//!
//! The [`Framebuffer`] stores one bit per pixel in the controller's
//! page-major layout and draws pixels and runs in logical coordinates,
//! rotated by 0/90/180/270° before they reach the buffer. [`Ssd1306`] owns
//! a framebuffer plus a [`DisplayInterface`] and pushes frames to the panel.
//!
//! ```
//! use ssd1306_rp2040::{Framebuffer128x64, PaintMode, Rotation};
//!
//! let mut fb = Framebuffer128x64::new();
//! fb.set_rotation(Rotation::Rotate90);
//! fb.draw_hline(0, 0, 10, PaintMode::Set);
//! assert!(fb.get_pixel(9, 0));
//! ```

#![no_std]

pub mod command;
pub mod config;
pub mod driver;
pub mod error;
pub mod framebuffer;
pub mod interface;
pub mod mode;
pub mod raster;
pub mod rotation;
pub mod shared;

pub use config::{Config, VccSource};
pub use driver::{Display128x64, Ssd1306};
pub use error::{Error, InvalidRotation};
pub use framebuffer::{buffer_len, Framebuffer, Framebuffer128x64};
pub use interface::{DisplayInterface, I2cInterface, DEFAULT_ADDRESS};
pub use mode::PaintMode;
pub use rotation::Rotation;
pub use shared::Shared;
