use crate::rotation::Rotation;

/// Where the panel drive voltage comes from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum VccSource {
    /// Supplied externally on VCC.
    External,
    /// Generated by the on-chip charge pump from 3.3V.
    #[default]
    SwitchCap,
}

/// Runtime settings applied by [`crate::Ssd1306::init`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    pub vcc: VccSource,
    /// Orientation selected once bring-up is done.
    pub rotation: Rotation,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            vcc: VccSource::default(),
            rotation: Rotation::Rotate180,
        }
    }
}

impl Config {
    pub fn vcc(mut self, vcc: VccSource) -> Self {
        self.vcc = vcc;
        self
    }

    pub fn rotation(mut self, rotation: Rotation) -> Self {
        self.rotation = rotation;
        self
    }

    pub(crate) fn charge_pump(&self) -> u8 {
        match self.vcc {
            VccSource::External => 0x10,
            VccSource::SwitchCap => 0x14,
        }
    }

    pub(crate) fn precharge(&self) -> u8 {
        match self.vcc {
            VccSource::External => 0x22,
            VccSource::SwitchCap => 0xF1,
        }
    }

    /// COM pins configuration and contrast for a panel geometry.
    pub(crate) fn com_pins_and_contrast(&self, width: usize, height: usize) -> (u8, u8) {
        let external = self.vcc == VccSource::External;
        match (width, height) {
            (128, 64) => (0x12, if external { 0x9F } else { 0xCF }),
            (96, 16) => (0x02, if external { 0x10 } else { 0xAF }),
            _ => (0x02, 0x8F),
        }
    }
}
