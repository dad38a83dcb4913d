use core::fmt;

/// Errors returned by the display driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error<E> {
    /// The transport failed to deliver a command or data block.
    Interface(E),
    /// Scroll page bounds outside `0..=7` or reversed.
    InvalidPageRange { start: u8, stop: u8 },
}

impl<E: fmt::Debug> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Interface(err) => write!(f, "display interface error: {:?}", err),
            Error::InvalidPageRange { start, stop } => {
                write!(f, "invalid scroll page range {}..={}", start, stop)
            }
        }
    }
}

/// A numeric orientation outside `0..=3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidRotation(pub u8);

impl fmt::Display for InvalidRotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid rotation {}, expected 0..=3", self.0)
    }
}
