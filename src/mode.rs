use embedded_graphics_core::pixelcolor::BinaryColor;

/// How a drawn pixel combines with what is already in the buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PaintMode {
    /// Force the bit on.
    #[default]
    Set,
    /// Force the bit off.
    Clear,
    /// Flip the bit.
    Invert,
}

impl PaintMode {
    /// Apply this mode to every bit of `byte` selected by `mask`.
    #[inline]
    pub fn apply(self, byte: &mut u8, mask: u8) {
        match self {
            PaintMode::Set => *byte |= mask,
            PaintMode::Clear => *byte &= !mask,
            PaintMode::Invert => *byte ^= mask,
        }
    }
}

impl From<BinaryColor> for PaintMode {
    fn from(color: BinaryColor) -> Self {
        match color {
            BinaryColor::On => PaintMode::Set,
            BinaryColor::Off => PaintMode::Clear,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_only_touches_masked_bits() {
        let mut byte = 0b1010_0000;
        PaintMode::Set.apply(&mut byte, 0b0000_0011);
        assert_eq!(byte, 0b1010_0011);
        PaintMode::Clear.apply(&mut byte, 0b1000_0001);
        assert_eq!(byte, 0b0010_0010);
        PaintMode::Invert.apply(&mut byte, 0b1111_0000);
        assert_eq!(byte, 0b1101_0010);
    }

    #[test]
    fn binary_color_maps_to_set_and_clear() {
        assert_eq!(PaintMode::from(BinaryColor::On), PaintMode::Set);
        assert_eq!(PaintMode::from(BinaryColor::Off), PaintMode::Clear);
    }
}
