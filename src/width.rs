use crate::common::*;
use crate::error::ConfigError;
use std::str::FromStr;

/// Bit width of one packed element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Width {
    W1,
    W2,
    W4,
    W8,
    W16,
    W32,
}

impl Width {
    pub const ALL: [Width; 6] = [
        Width::W1,
        Width::W2,
        Width::W4,
        Width::W8,
        Width::W16,
        Width::W32,
    ];

    #[inline(always)]
    pub const fn bits(self) -> u32 {
        match self {
            Width::W1 => 1,
            Width::W2 => 2,
            Width::W4 => 4,
            Width::W8 => 8,
            Width::W16 => 16,
            Width::W32 => 32,
        }
    }

    /// Mask covering the low `bits()` bits. `W32` yields `u32::MAX`.
    #[inline(always)]
    pub const fn mask(self) -> u32 {
        ((1u64 << self.bits()) - 1) as u32
    }

    /// True for the widths a byte-oriented source or a packed dest may use.
    pub const fn is_packed(self) -> bool {
        self.bits() <= BYTE_BITS
    }

    /// Elements held by one source byte. Zero for widths wider than a byte.
    pub const fn per_byte(self) -> u32 {
        BYTE_BITS / self.bits()
    }

    /// Elements held by one 32-bit word.
    pub const fn per_word(self) -> u32 {
        WORD_BITS / self.bits()
    }
}

impl std::fmt::Display for Width {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.bits())
    }
}

impl TryFrom<u32> for Width {
    type Error = ConfigError;

    fn try_from(bits: u32) -> Result<Self, Self::Error> {
        match bits {
            1 => Ok(Width::W1),
            2 => Ok(Width::W2),
            4 => Ok(Width::W4),
            8 => Ok(Width::W8),
            16 => Ok(Width::W16),
            32 => Ok(Width::W32),
            other => Err(ConfigError::UnsupportedWidth(other)),
        }
    }
}

impl TryFrom<u8> for Width {
    type Error = ConfigError;

    fn try_from(bits: u8) -> Result<Self, Self::Error> {
        Width::try_from(bits as u32)
    }
}

impl FromStr for Width {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let bits: u32 = s
            .parse()
            .map_err(|_| ConfigError::UnparsableWidth(s.to_string()))?;
        Width::try_from(bits)
    }
}
