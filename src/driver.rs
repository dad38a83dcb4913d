use core::convert::Infallible;

use embedded_graphics_core::{pixelcolor::BinaryColor, prelude::*, primitives::Rectangle};
use log::{debug, trace};

use crate::command::*;
use crate::config::Config;
use crate::error::Error;
use crate::framebuffer::{buffer_len, Framebuffer};
use crate::interface::DisplayInterface;
use crate::rotation::Rotation;

/// Driver for the common 128x64 panel.
pub type Display128x64<DI> = Ssd1306<DI, 128, 64, { buffer_len(128, 64) }>;

/// Highest page number accepted by the scroll commands.
const LAST_PAGE: u8 = 7;

/// SSD1306 controller together with the framebuffer it displays.
///
/// Drawing only touches the framebuffer; nothing reaches the panel until
/// [`Ssd1306::repaint`] is called.
pub struct Ssd1306<DI, const WIDTH: usize, const HEIGHT: usize, const BYTECOUNT: usize> {
    interface: DI,
    framebuffer: Framebuffer<WIDTH, HEIGHT, BYTECOUNT>,
    config: Config,
}

impl<DI, const WIDTH: usize, const HEIGHT: usize, const BYTECOUNT: usize> Ssd1306<DI, WIDTH, HEIGHT, BYTECOUNT>
where
    DI: DisplayInterface,
{
    pub fn new(interface: DI, config: Config) -> Self {
        Self {
            interface,
            framebuffer: Framebuffer::new(),
            config,
        }
    }

    /// Clear the framebuffer, run the controller bring-up sequence and
    /// select the configured rotation. Leaves the panel switched on.
    pub fn init(&mut self) -> Result<(), Error<DI::Error>> {
        debug!("ssd1306: init {}x{} {:?}", WIDTH, HEIGHT, self.config);
        self.framebuffer.clear();
        let sequence = self.init_sequence();
        self.commands(&sequence)?;
        self.framebuffer.set_rotation(self.config.rotation);
        Ok(())
    }

    fn init_sequence(&self) -> [u8; 26] {
        let (com_pins, contrast) = self.config.com_pins_and_contrast(WIDTH, HEIGHT);
        [
            DISPLAY_OFF,
            SET_DISPLAY_CLOCK_DIV,
            0xE0,
            SET_MULTIPLEX,
            (HEIGHT - 1) as u8,
            SET_DISPLAY_OFFSET,
            0x00,
            SET_START_LINE,
            CHARGE_PUMP,
            self.config.charge_pump(),
            MEMORY_MODE,
            0x00,
            SEG_REMAP | 0x10,
            COM_SCAN_DEC,
            SET_COM_PINS,
            com_pins,
            SET_CONTRAST,
            contrast,
            SET_PRECHARGE,
            self.config.precharge(),
            SET_VCOM_DETECT,
            0x40,
            DISPLAY_ALL_ON_RESUME,
            NORMAL_DISPLAY,
            DEACTIVATE_SCROLL,
            DISPLAY_ON,
        ]
    }

    /// Push the whole framebuffer to display RAM.
    pub fn repaint(&mut self) -> Result<(), Error<DI::Error>> {
        trace!("ssd1306: repaint {} bytes", BYTECOUNT);
        self.commands(&[PAGE_ADDR, 0x00, 0xFF, COLUMN_ADDR, 0x00, (WIDTH - 1) as u8])?;
        self.interface
            .write_block(CONTROL_DATA, self.framebuffer.buffer())
            .map_err(Error::Interface)
    }

    /// Scroll pages `start..=stop` to the right.
    pub fn start_scroll_right(&mut self, start: u8, stop: u8) -> Result<(), Error<DI::Error>> {
        self.horizontal_scroll(RIGHT_HORIZONTAL_SCROLL, start, stop)
    }

    /// Scroll pages `start..=stop` to the left.
    pub fn start_scroll_left(&mut self, start: u8, stop: u8) -> Result<(), Error<DI::Error>> {
        self.horizontal_scroll(LEFT_HORIZONTAL_SCROLL, start, stop)
    }

    /// Scroll pages `start..=stop` to the right while the whole panel scrolls up.
    pub fn start_scroll_diag_right(&mut self, start: u8, stop: u8) -> Result<(), Error<DI::Error>> {
        self.diagonal_scroll(VERTICAL_AND_RIGHT_HORIZONTAL_SCROLL, start, stop)
    }

    /// Scroll pages `start..=stop` to the left while the whole panel scrolls up.
    pub fn start_scroll_diag_left(&mut self, start: u8, stop: u8) -> Result<(), Error<DI::Error>> {
        self.diagonal_scroll(VERTICAL_AND_LEFT_HORIZONTAL_SCROLL, start, stop)
    }

    pub fn stop_scroll(&mut self) -> Result<(), Error<DI::Error>> {
        debug!("ssd1306: stop scroll");
        self.command(DEACTIVATE_SCROLL)
    }

    /// Switch between white-on-black and black-on-white. Takes effect
    /// immediately and leaves the framebuffer untouched.
    pub fn invert(&mut self, inverted: bool) -> Result<(), Error<DI::Error>> {
        debug!("ssd1306: invert {}", inverted);
        self.command(if inverted { INVERT_DISPLAY } else { NORMAL_DISPLAY })
    }

    pub fn set_contrast(&mut self, contrast: u8) -> Result<(), Error<DI::Error>> {
        self.commands(&[SET_CONTRAST, contrast])
    }

    pub fn rotation(&self) -> Rotation {
        self.framebuffer.rotation()
    }

    pub fn set_rotation(&mut self, rotation: Rotation) {
        self.framebuffer.set_rotation(rotation);
    }

    pub fn framebuffer(&self) -> &Framebuffer<WIDTH, HEIGHT, BYTECOUNT> {
        &self.framebuffer
    }

    pub fn framebuffer_mut(&mut self) -> &mut Framebuffer<WIDTH, HEIGHT, BYTECOUNT> {
        &mut self.framebuffer
    }

    pub fn release(self) -> DI {
        self.interface
    }

    fn horizontal_scroll(&mut self, direction: u8, start: u8, stop: u8) -> Result<(), Error<DI::Error>> {
        check_pages(start, stop)?;
        debug!("ssd1306: scroll {:#04x} pages {}..={}", direction, start, stop);
        self.commands(&[direction, 0x00, start, 0x00, stop, 0x00, 0xFF, ACTIVATE_SCROLL])
    }

    fn diagonal_scroll(&mut self, direction: u8, start: u8, stop: u8) -> Result<(), Error<DI::Error>> {
        check_pages(start, stop)?;
        debug!("ssd1306: scroll {:#04x} pages {}..={}", direction, start, stop);
        self.commands(&[
            SET_VERTICAL_SCROLL_AREA,
            0x00,
            HEIGHT as u8,
            direction,
            0x00,
            start,
            0x00,
            stop,
            0x01,
            ACTIVATE_SCROLL,
        ])
    }

    fn command(&mut self, command: u8) -> Result<(), Error<DI::Error>> {
        self.interface.write_command(command).map_err(Error::Interface)
    }

    fn commands(&mut self, commands: &[u8]) -> Result<(), Error<DI::Error>> {
        for &command in commands {
            self.command(command)?;
        }
        Ok(())
    }
}

fn check_pages<E>(start: u8, stop: u8) -> Result<(), Error<E>> {
    if start > stop || stop > LAST_PAGE {
        return Err(Error::InvalidPageRange { start, stop });
    }
    Ok(())
}

/// For use with embedded_graphics
impl<DI, const WIDTH: usize, const HEIGHT: usize, const BYTECOUNT: usize> DrawTarget
    for Ssd1306<DI, WIDTH, HEIGHT, BYTECOUNT>
{
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        self.framebuffer.draw_iter(pixels)
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        self.framebuffer.fill_solid(area, color)
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        DrawTarget::clear(&mut self.framebuffer, color)
    }
}

/// For use with embedded_graphics
impl<DI, const WIDTH: usize, const HEIGHT: usize, const BYTECOUNT: usize> OriginDimensions
    for Ssd1306<DI, WIDTH, HEIGHT, BYTECOUNT>
{
    fn size(&self) -> Size {
        self.framebuffer.size()
    }
}
