use crate::bitstream::{BitAccumulator, BitReader, Flow, Status, Unit};
use crate::common::*;
use crate::error::ConfigError;
use crate::options::TransformOptions;

/// Expands packed narrow elements into wider elements, optionally adding an
/// offset to each one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Inflater {
    options: TransformOptions,
}

impl Inflater {
    pub fn new(options: TransformOptions) -> Result<Self, ConfigError> {
        options.validate_inflate()?;
        Ok(Self { options })
    }

    pub fn options(&self) -> &TransformOptions {
        &self.options
    }

    /// Bytes a pass over `source_len` bytes writes when the destination is
    /// large enough. Only whole 32-bit groups count.
    pub fn output_len(&self, source_len: usize) -> usize {
        let elements =
            BitReader::element_count(source_len, Unit::Byte, self.options.source_width);
        let bits = elements * self.options.dest_width.bits() as usize;
        bits / WORD_BITS as usize * WORD_BYTES
    }

    /// Runs one pass and returns the number of bytes written to `dest`.
    pub fn inflate(&self, source: &[u8], dest: &mut [u8]) -> usize {
        self.inflate_with_status(source, dest).0
    }

    pub fn inflate_with_status(&self, source: &[u8], dest: &mut [u8]) -> (usize, Status) {
        if source.is_empty() || dest.is_empty() {
            return (0, Status::Done);
        }

        let TransformOptions {
            source_width,
            dest_width,
            offset,
            offset_zero,
        } = self.options;

        let mut acc = BitAccumulator::new(dest, dest_width);
        // Width roles were checked in `new`.
        for raw in BitReader::new(source, Unit::Byte, source_width) {
            // offset < 2^31 and raw <= 0xFF, so this cannot wrap.
            let value = if raw != 0 || offset_zero {
                raw + offset
            } else {
                raw
            };
            if acc.push(value) == Flow::Exhausted {
                let written = acc.finish();
                tracing::trace!(written, "inflate destination exhausted");
                return (written, Status::TruncatedByCapacity);
            }
        }
        (acc.finish(), Status::Done)
    }
}
