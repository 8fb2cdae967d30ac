use std::fmt;
use std::str::FromStr;

use crate::core::error::Error;

/// Machine revision whose quirks the dispatcher follows.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// COSMAC VIP CHIP-8.
    #[default]
    Baseline,
    /// SUPER-CHIP.
    Extended,
    /// XO-CHIP. Shares the SUPER-CHIP quirks below.
    ExtendedStream,
}

impl Variant {
    /// 8XY1/8XY2/8XY3 clobber VF.
    pub fn resets_flag_on_logic(self) -> bool {
        self == Variant::Baseline
    }

    /// 8XY6/8XYE shift VY into VX rather than shifting VX in place.
    pub fn shifts_from_vy(self) -> bool {
        self == Variant::Baseline
    }

    /// FX55/FX65 leave I pointing past the last register transferred.
    pub fn increments_index_on_bulk(self) -> bool {
        self == Variant::Baseline
    }
}

impl FromStr for Variant {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "chip8" | "chip-8" | "baseline" => Ok(Variant::Baseline),
            "schip" | "superchip" | "super-chip" | "extended" => Ok(Variant::Extended),
            "xochip" | "xo-chip" | "extended-stream" => Ok(Variant::ExtendedStream),
            _ => Err(Error::UnknownVariant(s.to_string())),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Variant::Baseline => "chip8",
            Variant::Extended => "schip",
            Variant::ExtendedStream => "xochip",
        };
        f.write_str(name)
    }
}
