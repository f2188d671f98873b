use clap::ValueEnum;
use strum::VariantArray;
use strum_macros::{Display, EnumIter, EnumString, VariantArray};

use stellar_shared::constants::framebuffer::{frame_size, DEFAULT_HEIGHT, DEFAULT_WIDTH};

/// Framebuffer sizes dumps usually come in.
#[derive(ValueEnum, PartialEq, Debug, EnumString, Display, EnumIter, VariantArray, Hash, Eq, Clone, Copy)]
#[strum(serialize_all = "lowercase")]
pub enum Preset {
    /// 1280x720
    Hd720,
    /// 240x160, gba emulators
    Gba,
    /// 800x480, default celeste fb size
    Celeste,
}

impl Default for Preset {
    fn default() -> Self {
        Preset::Hd720
    }
}

impl Preset {
    pub fn dimensions(self) -> (u32, u32) {
        match self {
            Preset::Hd720 => (DEFAULT_WIDTH, DEFAULT_HEIGHT),
            Preset::Gba => (240, 160),
            Preset::Celeste => (800, 480),
        }
    }

    pub fn byte_size(self) -> usize {
        let (width, height) = self.dimensions();
        // presets are small enough to never overflow
        frame_size(width, height).unwrap_or(usize::MAX)
    }

    pub fn matching(len: usize) -> Vec<Preset> {
        Preset::VARIANTS.iter().copied().filter(|preset| preset.byte_size() == len).collect()
    }
}
