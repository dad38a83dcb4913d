use core::convert::Infallible;

use embedded_graphics_core::{pixelcolor::BinaryColor, prelude::*, primitives::Rectangle};

use crate::mode::PaintMode;
use crate::raster;
use crate::rotation::{transform_point, transform_run, Axis, Rotation};

/// Number of bytes needed for a `width` x `height` page-major buffer.
pub const fn buffer_len(width: usize, height: usize) -> usize {
    width * ((height + 7) / 8)
}

/// Buffer for the common 128x64 panel.
pub type Framebuffer128x64 = Framebuffer<128, 64, { buffer_len(128, 64) }>;

/// 1-bpp page-major pixel store with an orientation.
///
/// - WIDTH, HEIGHT: physical panel size, as seen at `Rotate0`
/// - BYTECOUNT: must equal `buffer_len(WIDTH, HEIGHT)`, checked at compile time
///
/// All drawing takes logical coordinates, which are mapped through the
/// current rotation. Changing the rotation only affects later calls.
pub struct Framebuffer<const WIDTH: usize, const HEIGHT: usize, const BYTECOUNT: usize> {
    data: [u8; BYTECOUNT],
    rotation: Rotation,
}

impl<const WIDTH: usize, const HEIGHT: usize, const BYTECOUNT: usize> Default
    for Framebuffer<WIDTH, HEIGHT, BYTECOUNT>
{
    fn default() -> Self {
        Self::new()
    }
}

impl<const WIDTH: usize, const HEIGHT: usize, const BYTECOUNT: usize> Framebuffer<WIDTH, HEIGHT, BYTECOUNT> {
    const LAYOUT: () = assert!(
        WIDTH > 0 && HEIGHT > 0 && BYTECOUNT == buffer_len(WIDTH, HEIGHT),
        "BYTECOUNT must be WIDTH * ceil(HEIGHT / 8)"
    );

    pub const fn new() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::LAYOUT;
        Self {
            data: [0u8; BYTECOUNT],
            rotation: Rotation::Rotate0,
        }
    }

    pub const fn width(&self) -> usize {
        WIDTH
    }

    pub const fn height(&self) -> usize {
        HEIGHT
    }

    /// Raw page-major bytes, as the controller expects them.
    pub fn buffer(&self) -> &[u8] {
        &self.data
    }

    pub fn clear(&mut self) {
        self.data.fill(0);
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    pub fn set_rotation(&mut self, rotation: Rotation) {
        self.rotation = rotation;
    }

    /// Size in logical coordinates under the current rotation.
    pub fn logical_size(&self) -> (i32, i32) {
        if self.rotation.swaps_axes() {
            (HEIGHT as i32, WIDTH as i32)
        } else {
            (WIDTH as i32, HEIGHT as i32)
        }
    }

    /// Paint a single pixel.
    ///
    /// The bounds check is made on the logical input against the unrotated
    /// panel size. On a non-square panel at 90° or 270° this rejects some
    /// visible pixels and accepts some that fall outside the buffer; the
    /// latter are dropped.
    pub fn set_pixel(&mut self, x: i32, y: i32, mode: PaintMode) {
        if Self::in_panel(x, y) {
            self.paint(x, y, mode);
        }
    }

    /// Read a single pixel, with the same bounds rule as [`Self::set_pixel`].
    pub fn get_pixel(&self, x: i32, y: i32) -> bool {
        Self::in_panel(x, y)
            && self
                .locate(x, y)
                .is_some_and(|(index, mask)| self.data[index] & mask != 0)
    }

    /// Draw `w` pixels rightwards from `(x, y)`.
    pub fn draw_hline(&mut self, x: i32, y: i32, w: i32, mode: PaintMode) {
        self.draw_run(x, y, w, Axis::Horizontal, mode);
    }

    /// Draw `h` pixels downwards from `(x, y)`.
    pub fn draw_vline(&mut self, x: i32, y: i32, h: i32, mode: PaintMode) {
        self.draw_run(x, y, h, Axis::Vertical, mode);
    }

    /// Fill a `w` x `h` rectangle, one column at a time.
    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, mode: PaintMode) {
        let (logical_width, _) = self.logical_size();
        let end = x.saturating_add(w).min(logical_width);
        for column in x.max(0)..end {
            self.draw_vline(column, y, h, mode);
        }
    }

    fn draw_run(&mut self, x: i32, y: i32, len: i32, axis: Axis, mode: PaintMode) {
        let run = transform_run(x, y, len, axis, WIDTH as i32, HEIGHT as i32, self.rotation);
        match run.axis {
            Axis::Horizontal => raster::hline(&mut self.data, WIDTH, HEIGHT, run.x, run.y, run.len, mode),
            Axis::Vertical => raster::vline(&mut self.data, WIDTH, HEIGHT, run.x, run.y, run.len, mode),
        }
    }

    fn in_panel(x: i32, y: i32) -> bool {
        (0..WIDTH as i32).contains(&x) && (0..HEIGHT as i32).contains(&y)
    }

    // byte index and bit mask of a logical point, if it lands in the buffer
    fn locate(&self, x: i32, y: i32) -> Option<(usize, u8)> {
        let (x, y) = transform_point(x, y, WIDTH as i32, HEIGHT as i32, self.rotation);
        if !Self::in_panel(x, y) {
            return None;
        }
        Some((x as usize + (y as usize / 8) * WIDTH, 1 << (y & 7)))
    }

    fn paint(&mut self, x: i32, y: i32, mode: PaintMode) {
        if let Some((index, mask)) = self.locate(x, y) {
            mode.apply(&mut self.data[index], mask);
        }
    }
}

/// For use with embedded_graphics
impl<const WIDTH: usize, const HEIGHT: usize, const BYTECOUNT: usize> DrawTarget
    for Framebuffer<WIDTH, HEIGHT, BYTECOUNT>
{
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        // bounded by the rotated size, not by set_pixel's rule
        for Pixel(point, color) in pixels {
            self.paint(point.x, point.y, color.into());
        }
        Ok(())
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        let area = area.intersection(&self.bounding_box());
        if area.size.width == 0 || area.size.height == 0 {
            return Ok(());
        }
        self.fill_rect(
            area.top_left.x,
            area.top_left.y,
            area.size.width as i32,
            area.size.height as i32,
            color.into(),
        );
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.data.fill(if color.is_on() { 0xFF } else { 0x00 });
        Ok(())
    }
}

/// For use with embedded_graphics
impl<const WIDTH: usize, const HEIGHT: usize, const BYTECOUNT: usize> OriginDimensions
    for Framebuffer<WIDTH, HEIGHT, BYTECOUNT>
{
    fn size(&self) -> Size {
        let (width, height) = self.logical_size();
        Size::new(width as u32, height as u32)
    }
}
