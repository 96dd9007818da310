use crate::common::*;
use crate::error::{ConfigError, WidthRole};
use crate::width::Width;

/// Per-call transform settings. Buffers are passed to each call separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransformOptions {
    pub source_width: Width,
    pub dest_width: Width,
    pub offset: u32,
    pub offset_zero: bool,
}

impl TransformOptions {
    pub fn new(source_width: Width, dest_width: Width) -> Self {
        Self {
            source_width,
            dest_width,
            offset: 0,
            offset_zero: false,
        }
    }

    pub fn with_offset(mut self, offset: u32) -> Self {
        self.offset = offset;
        self
    }

    pub fn with_offset_zero(mut self, offset_zero: bool) -> Self {
        self.offset_zero = offset_zero;
        self
    }

    pub fn validate_inflate(&self) -> Result<(), ConfigError> {
        if !self.source_width.is_packed() {
            return Err(ConfigError::WidthRole {
                role: WidthRole::Source,
                bits: self.source_width.bits(),
                transform: "inflate",
            });
        }
        self.validate_offset()
    }

    pub fn validate_deflate(&self) -> Result<(), ConfigError> {
        if !self.dest_width.is_packed() {
            return Err(ConfigError::WidthRole {
                role: WidthRole::Dest,
                bits: self.dest_width.bits(),
                transform: "deflate",
            });
        }
        self.validate_offset()
    }

    fn validate_offset(&self) -> Result<(), ConfigError> {
        if self.offset >= OFFSET_LIMIT {
            return Err(ConfigError::OffsetTooLarge(self.offset));
        }
        Ok(())
    }
}

/// The 8-byte argument block the boot ROM call takes.
///
/// Layout, little-endian:
///
/// | bytes | field                                           |
/// |-------|-------------------------------------------------|
/// | 0..2  | source length in bytes                          |
/// | 2     | source width in bits                            |
/// | 3     | dest width in bits                              |
/// | 4..8  | bits 0-30 offset, bit 31 offset-zero flag       |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnpackHeader {
    pub source_len: u16,
    pub options: TransformOptions,
}

impl UnpackHeader {
    pub fn new(source_len: u16, options: TransformOptions) -> Self {
        Self {
            source_len,
            options,
        }
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ConfigError> {
        let Some(block) = bytes.get(..HEADER_SIZE) else {
            return Err(ConfigError::TruncatedHeader {
                expected: HEADER_SIZE,
                actual: bytes.len(),
            });
        };
        let source_len = u16::from_le_bytes([block[0], block[1]]);
        let source_width = Width::try_from(block[2])?;
        let dest_width = Width::try_from(block[3])?;
        let packed = u32::from_le_bytes([block[4], block[5], block[6], block[7]]);

        let options = TransformOptions::new(source_width, dest_width)
            .with_offset(packed & OFFSET_MASK)
            .with_offset_zero(packed & OFFSET_ZERO_FLAG != 0);
        Ok(Self {
            source_len,
            options,
        })
    }

    pub fn to_bytes(&self) -> Result<[u8; HEADER_SIZE], ConfigError> {
        if self.options.offset >= OFFSET_LIMIT {
            return Err(ConfigError::OffsetTooLarge(self.options.offset));
        }
        let mut packed = self.options.offset;
        if self.options.offset_zero {
            packed |= OFFSET_ZERO_FLAG;
        }

        let mut out = [0u8; HEADER_SIZE];
        out[0..2].copy_from_slice(&self.source_len.to_le_bytes());
        out[2] = self.options.source_width.bits() as u8;
        out[3] = self.options.dest_width.bits() as u8;
        out[4..8].copy_from_slice(&packed.to_le_bytes());
        Ok(out)
    }
}
