//! Logical to physical coordinate mapping.
//!
//! Callers draw in logical coordinates; the buffer is addressed in physical
//! ones. A point maps the same way whatever it belongs to, but a run does
//! not: when the rotation reflects the run's axis its first pixel lands at
//! the other end, so the physical start has to be pulled back by `len - 1`.

use crate::error::InvalidRotation;

/// Display orientation, in 90° steps.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Rotation {
    /// No rotation
    #[default]
    Rotate0,
    /// Rotate by 90 degrees
    Rotate90,
    /// Rotate by 180 degrees
    Rotate180,
    /// Rotate by 270 degrees
    Rotate270,
}

impl Rotation {
    /// Whether logical rows become physical columns.
    pub const fn swaps_axes(self) -> bool {
        matches!(self, Rotation::Rotate90 | Rotation::Rotate270)
    }
}

impl TryFrom<u8> for Rotation {
    type Error = InvalidRotation;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Rotation::Rotate0),
            1 => Ok(Rotation::Rotate90),
            2 => Ok(Rotation::Rotate180),
            3 => Ok(Rotation::Rotate270),
            other => Err(InvalidRotation(other)),
        }
    }
}

impl From<Rotation> for u8 {
    fn from(rotation: Rotation) -> Self {
        match rotation {
            Rotation::Rotate0 => 0,
            Rotation::Rotate90 => 1,
            Rotation::Rotate180 => 2,
            Rotation::Rotate270 => 3,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    pub const fn swapped(self) -> Self {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }
}

/// A run expressed in buffer coordinates, ready for the rasterizer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PhysicalRun {
    pub x: i32,
    pub y: i32,
    pub len: i32,
    pub axis: Axis,
}

/// Map a logical point to the physical buffer.
///
/// `width` and `height` are the physical (unrotated) buffer dimensions.
/// No bounds checking happens here.
pub fn transform_point(x: i32, y: i32, width: i32, height: i32, rotation: Rotation) -> (i32, i32) {
    match rotation {
        Rotation::Rotate0 => (x, y),
        // swap, then mirror x
        Rotation::Rotate90 => ((width - 1).saturating_sub(y), x),
        Rotation::Rotate180 => ((width - 1).saturating_sub(x), (height - 1).saturating_sub(y)),
        // swap, then mirror y
        Rotation::Rotate270 => (y, (height - 1).saturating_sub(x)),
    }
}

/// Map a logical run of `len` pixels starting at `(x, y)` along `axis`.
///
/// The returned run starts at its lowest physical coordinate along its
/// (possibly swapped) axis, so the rasterizer can always walk forward.
pub fn transform_run(
    x: i32,
    y: i32,
    len: i32,
    axis: Axis,
    width: i32,
    height: i32,
    rotation: Rotation,
) -> PhysicalRun {
    let (px, py) = transform_point(x, y, width, height, rotation);
    let shift = len.saturating_sub(1);

    let (x, y) = match (rotation, axis) {
        (Rotation::Rotate0, _)
        | (Rotation::Rotate90, Axis::Horizontal)
        | (Rotation::Rotate270, Axis::Vertical) => (px, py),
        (Rotation::Rotate90, Axis::Vertical) | (Rotation::Rotate180, Axis::Horizontal) => {
            (px.saturating_sub(shift), py)
        }
        (Rotation::Rotate180, Axis::Vertical) | (Rotation::Rotate270, Axis::Horizontal) => {
            (px, py.saturating_sub(shift))
        }
    };

    let axis = if rotation.swaps_axes() {
        axis.swapped()
    } else {
        axis
    };

    PhysicalRun { x, y, len, axis }
}
