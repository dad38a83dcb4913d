//! Clipped run writes into a page-major 1-bpp buffer.
//!
//! Both entry points take physical coordinates only. Byte `x + (y / 8) * width`
//! holds column `x` of page `y / 8`, with row `y` in bit `y & 7`.

use crate::mode::PaintMode;

/// High `n` bits of a byte: rows from the start of a run to the page end.
const PREMASK: [u8; 8] = [0x00, 0x80, 0xC0, 0xE0, 0xF0, 0xF8, 0xFC, 0xFE];
/// Low `n` bits of a byte: rows from the page start to the end of a run.
const POSTMASK: [u8; 8] = [0x00, 0x01, 0x03, 0x07, 0x0F, 0x1F, 0x3F, 0x7F];

/// Draw `w` pixels of row `y` starting at column `x`.
pub fn hline(buffer: &mut [u8], width: usize, height: usize, x: i32, y: i32, w: i32, mode: PaintMode) {
    if y < 0 || y >= height as i32 {
        return;
    }

    let (mut x, mut w) = (x, w);
    if x < 0 {
        w = w.saturating_add(x);
        x = 0;
    }
    if x.saturating_add(w) > width as i32 {
        w = width as i32 - x;
    }
    if w <= 0 {
        return;
    }

    let start = (y as usize / 8) * width + x as usize;
    let mask = 1u8 << (y & 7);
    let run = &mut buffer[start..start + w as usize];

    match mode {
        PaintMode::Set => run.iter_mut().for_each(|byte| *byte |= mask),
        PaintMode::Clear => {
            let mask = !mask;
            run.iter_mut().for_each(|byte| *byte &= mask)
        }
        PaintMode::Invert => run.iter_mut().for_each(|byte| *byte ^= mask),
    }
}

/// Draw `h` pixels of column `x` starting at row `y`.
///
/// Writes at most one partial byte at each end and whole bytes in between.
pub fn vline(buffer: &mut [u8], width: usize, height: usize, x: i32, y: i32, h: i32, mode: PaintMode) {
    if x < 0 || x >= width as i32 {
        return;
    }

    let (mut y, mut h) = (y, h);
    if y < 0 {
        h = h.saturating_add(y);
        y = 0;
    }
    if y.saturating_add(h) > height as i32 {
        h = height as i32 - y;
    }
    if h <= 0 {
        return;
    }

    let mut index = (y as usize / 8) * width + x as usize;
    let mut remaining = h as usize;

    let offset = y as usize & 7;
    if offset != 0 {
        let fill = 8 - offset;
        let mut mask = PREMASK[fill];
        if remaining < fill {
            mask &= 0xFF >> (fill - remaining);
        }
        mode.apply(&mut buffer[index], mask);

        if remaining <= fill {
            return;
        }
        remaining -= fill;
        index += width;
    }

    if remaining >= 8 {
        if mode == PaintMode::Invert {
            while remaining >= 8 {
                buffer[index] ^= 0xFF;
                index += width;
                remaining -= 8;
            }
        } else {
            let value = if mode == PaintMode::Set { 0xFF } else { 0x00 };
            while remaining >= 8 {
                buffer[index] = value;
                index += width;
                remaining -= 8;
            }
        }
    }

    if remaining > 0 {
        mode.apply(&mut buffer[index], POSTMASK[remaining]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const W: usize = 8;
    const H: usize = 32;

    fn bit(buffer: &[u8], x: usize, y: usize) -> bool {
        buffer[x + (y / 8) * W] & (1 << (y & 7)) != 0
    }

    fn naive_vline(buffer: &mut [u8], x: i32, y: i32, h: i32, mode: PaintMode) {
        for row in y..y + h {
            if (0..W as i32).contains(&x) && (0..H as i32).contains(&row) {
                let (x, row) = (x as usize, row as usize);
                mode.apply(&mut buffer[x + (row / 8) * W], 1 << (row & 7));
            }
        }
    }

    #[test]
    fn masks_match_shift_forms() {
        for n in 0..8 {
            assert_eq!(PREMASK[n], !(0xFFu8.checked_shr(n as u32).unwrap_or(0)));
            assert_eq!(POSTMASK[n], ((1u16 << n) - 1) as u8);
        }
    }

    #[test]
    fn hline_sets_single_row_bits() {
        let mut buffer = [0u8; W * H / 8];
        hline(&mut buffer, W, H, 2, 3, 5, PaintMode::Set);

        for (index, &byte) in buffer.iter().enumerate() {
            let expected = if (2..7).contains(&index) { 0b0000_1000 } else { 0 };
            assert_eq!(byte, expected, "byte {}", index);
        }
    }

    #[test]
    fn hline_clips_both_sides() {
        let mut buffer = [0u8; W * H / 8];
        hline(&mut buffer, W, H, -3, 0, 5, PaintMode::Set);
        assert_eq!(&buffer[..W], &[1, 1, 0, 0, 0, 0, 0, 0]);

        let mut buffer = [0u8; W * H / 8];
        hline(&mut buffer, W, H, 5, 9, 10, PaintMode::Set);
        assert_eq!(&buffer[W..2 * W], &[0, 0, 0, 0, 0, 2, 2, 2]);
    }

    #[test]
    fn out_of_range_runs_leave_buffer_untouched() {
        let mut buffer = [0x5Au8; W * H / 8];
        hline(&mut buffer, W, H, 0, -1, 8, PaintMode::Invert);
        hline(&mut buffer, W, H, 0, H as i32, 8, PaintMode::Invert);
        hline(&mut buffer, W, H, -10, 0, 5, PaintMode::Invert);
        hline(&mut buffer, W, H, W as i32, 0, 5, PaintMode::Invert);
        hline(&mut buffer, W, H, 0, 0, 0, PaintMode::Invert);
        hline(&mut buffer, W, H, 3, 0, -4, PaintMode::Invert);
        vline(&mut buffer, W, H, -1, 0, 8, PaintMode::Invert);
        vline(&mut buffer, W, H, W as i32, 0, 8, PaintMode::Invert);
        vline(&mut buffer, W, H, 0, -20, 10, PaintMode::Invert);
        vline(&mut buffer, W, H, 0, H as i32, 10, PaintMode::Invert);
        vline(&mut buffer, W, H, 0, 4, 0, PaintMode::Invert);
        assert!(buffer.iter().all(|&byte| byte == 0x5A));
    }

    #[test]
    fn vline_crossing_pages_matches_single_pixels() {
        for mode in [PaintMode::Set, PaintMode::Clear, PaintMode::Invert] {
            let mut fast = [0x33u8; W * H / 8];
            let mut slow = fast;
            vline(&mut fast, W, H, 3, 5, 20, mode);
            naive_vline(&mut slow, 3, 5, 20, mode);
            assert_eq!(fast, slow, "{:?}", mode);
        }
    }

    #[test]
    fn vline_matches_single_pixels_everywhere() {
        for mode in [PaintMode::Set, PaintMode::Clear, PaintMode::Invert] {
            for y in -4..H as i32 + 2 {
                for h in -1..H as i32 + 4 {
                    let mut fast = [0xA5u8; W * H / 8];
                    let mut slow = fast;
                    vline(&mut fast, W, H, 6, y, h, mode);
                    naive_vline(&mut slow, 6, y, h, mode);
                    assert_eq!(fast, slow, "{:?} y={} h={}", mode, y, h);
                }
            }
        }
    }

    #[test]
    fn vline_inside_one_page() {
        let mut buffer = [0u8; W * H / 8];
        vline(&mut buffer, W, H, 0, 2, 3, PaintMode::Set);
        assert_eq!(buffer[0], 0b0001_1100);
        assert!((2..5).all(|y| bit(&buffer, 0, y)));
        assert!(buffer[1..].iter().all(|&byte| byte == 0));
    }

    #[test]
    fn vline_clips_to_height() {
        let mut buffer = [0u8; W * H / 8];
        vline(&mut buffer, W, H, 1, -3, 100, PaintMode::Set);
        for page in 0..H / 8 {
            assert_eq!(buffer[1 + page * W], 0xFF);
        }
        assert_eq!(buffer.iter().filter(|&&byte| byte != 0).count(), H / 8);
    }
}
