use crate::common::*;
use crate::error::{ConfigError, WidthRole};
use crate::width::Width;
use std::cmp::min;

/// Granularity at which a [`BitReader`] pulls bits from its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    /// One byte at a time (inflate sources)
    Byte,
    /// One little-endian 32-bit word at a time (deflate sources)
    Word,
}

impl Unit {
    #[inline(always)]
    pub const fn bytes(self) -> usize {
        match self {
            Unit::Byte => 1,
            Unit::Word => WORD_BYTES,
        }
    }

    /// Elements of `width` held by one unit.
    #[inline(always)]
    pub const fn elements(self, width: Width) -> usize {
        match self {
            Unit::Byte => width.per_byte() as usize,
            Unit::Word => width.per_word() as usize,
        }
    }
}

/// Yields fixed-width unsigned elements from a buffer, least significant
/// bits first within each unit.
///
/// A trailing partial unit (only possible in word mode) yields nothing.
#[derive(Debug, Clone)]
pub struct BitReader<'a> {
    input: &'a [u8],
    in_idx: usize,
    unit: Unit,
    width: Width,
    bitbuf: u64,
    bitsleft: u32,
}

impl<'a> BitReader<'a> {
    /// Callers guarantee that `width` divides the unit.
    pub(crate) fn new(input: &'a [u8], unit: Unit, width: Width) -> Self {
        Self {
            input,
            in_idx: 0,
            unit,
            width,
            bitbuf: 0,
            bitsleft: 0,
        }
    }

    /// Byte-wise reader. Only the packed widths divide a byte.
    pub fn bytes(input: &'a [u8], width: Width) -> Result<Self, ConfigError> {
        if !width.is_packed() {
            return Err(ConfigError::WidthRole {
                role: WidthRole::Source,
                bits: width.bits(),
                transform: "byte-wise reading",
            });
        }
        Ok(Self::new(input, Unit::Byte, width))
    }

    /// Word-wise reader over 4-byte little-endian groups.
    pub fn words(input: &'a [u8], width: Width) -> Self {
        Self::new(input, Unit::Word, width)
    }

    /// Number of elements a full pass over `len` input bytes produces.
    pub fn element_count(len: usize, unit: Unit, width: Width) -> usize {
        len / unit.bytes() * unit.elements(width)
    }

    #[inline(always)]
    fn refill(&mut self) -> bool {
        let end = self.in_idx + self.unit.bytes();
        let Some(chunk) = self.input.get(self.in_idx..end) else {
            return false;
        };
        let mut word = [0u8; WORD_BYTES];
        word[..chunk.len()].copy_from_slice(chunk);
        self.bitbuf = u32::from_le_bytes(word) as u64;
        self.bitsleft = chunk.len() as u32 * BYTE_BITS;
        self.in_idx = end;
        true
    }
}

impl Iterator for BitReader<'_> {
    type Item = u32;

    #[inline]
    fn next(&mut self) -> Option<u32> {
        if self.bitsleft == 0 && !self.refill() {
            return None;
        }
        let value = (self.bitbuf as u32) & self.width.mask();
        self.bitbuf >>= self.width.bits();
        self.bitsleft -= self.width.bits();
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let buffered = (self.bitsleft / self.width.bits()) as usize;
        let rest = Self::element_count(self.input.len() - self.in_idx, self.unit, self.width);
        (buffered + rest, Some(buffered + rest))
    }
}

impl ExactSizeIterator for BitReader<'_> {}

/// Result of pushing one element into a [`BitAccumulator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "Exhausted means the destination is full and the pass must stop"]
pub enum Flow {
    Continue,
    Exhausted,
}

/// How a transform pass ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Every source element was consumed
    Done,
    /// The destination filled up before the source ran out
    TruncatedByCapacity,
}

/// Packs fixed-width elements into 32-bit groups and stores each completed
/// group as 4 little-endian bytes.
///
/// The group register is 32 bits wide: an element is ORed in at the current
/// bit position without masking, so bits past its slot spill into the next
/// slot and bits past bit 31 are lost. Incomplete trailing groups are never
/// stored.
pub struct BitAccumulator<'a> {
    output: &'a mut [u8],
    out_idx: usize,
    bitbuf: u64,
    bitcount: u32,
    width: u32,
}

impl<'a> BitAccumulator<'a> {
    pub fn new(output: &'a mut [u8], width: Width) -> Self {
        Self {
            output,
            out_idx: 0,
            bitbuf: 0,
            bitcount: 0,
            width: width.bits(),
        }
    }

    #[inline(always)]
    pub fn push(&mut self, value: u32) -> Flow {
        self.bitbuf |= (value as u64) << self.bitcount;
        self.bitcount += self.width;
        if self.bitcount < WORD_BITS {
            return Flow::Continue;
        }
        self.flush_group()
    }

    /// Stores the current group. When fewer than 4 bytes of room remain, only
    /// the low bytes that fit are stored and the accumulator is exhausted.
    fn flush_group(&mut self) -> Flow {
        let group = (self.bitbuf as u32).to_le_bytes();
        self.bitbuf = 0;
        self.bitcount = 0;

        let room = self.output.len() - self.out_idx;
        let n = min(room, WORD_BYTES);
        self.output[self.out_idx..self.out_idx + n].copy_from_slice(&group[..n]);
        self.out_idx += n;

        if n < WORD_BYTES {
            Flow::Exhausted
        } else {
            Flow::Continue
        }
    }

    pub fn written(&self) -> usize {
        self.out_idx
    }

    /// Bits held in the current incomplete group.
    pub fn pending_bits(&self) -> u32 {
        self.bitcount
    }

    /// Ends the pass, dropping any incomplete group, and returns the number
    /// of bytes stored.
    pub fn finish(self) -> usize {
        self.out_idx
    }
}
