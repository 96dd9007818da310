use crate::bitstream::{BitAccumulator, BitReader, Flow, Status, Unit};
use crate::common::*;
use crate::error::{ConfigError, DeflateError};
use crate::options::TransformOptions;

/// Packs wide elements back into narrow elements, removing the offset and
/// checking that every element was produced by a compatible inflate.
///
/// A pass stops at the first bad element. Groups flushed before that point
/// stay in the destination; [`DeflateError::written`] reports how many bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deflater {
    options: TransformOptions,
}

impl Deflater {
    pub fn new(options: TransformOptions) -> Result<Self, ConfigError> {
        options.validate_deflate()?;
        Ok(Self { options })
    }

    pub fn options(&self) -> &TransformOptions {
        &self.options
    }

    /// Bytes a successful pass over `source_len` bytes writes when the
    /// destination is large enough.
    pub fn output_len(&self, source_len: usize) -> usize {
        let elements =
            BitReader::element_count(source_len, Unit::Word, self.options.source_width);
        let bits = elements * self.options.dest_width.bits() as usize;
        bits / WORD_BITS as usize * WORD_BYTES
    }

    pub fn deflate(&self, source: &[u8], dest: &mut [u8]) -> Result<usize, DeflateError> {
        self.deflate_with_status(source, dest).map(|(written, _)| written)
    }

    pub fn deflate_with_status(
        &self,
        source: &[u8],
        dest: &mut [u8],
    ) -> Result<(usize, Status), DeflateError> {
        if source.is_empty() || dest.is_empty() {
            return Ok((0, Status::Done));
        }
        if source.len() % WORD_BYTES != 0 {
            return Err(DeflateError::MisalignedSource(source.len()));
        }

        let dest_width = self.options.dest_width;
        let mut acc = BitAccumulator::new(dest, dest_width);
        for (element, raw) in BitReader::words(source, self.options.source_width).enumerate() {
            let Some(value) = self.remove_offset(raw) else {
                return Err(DeflateError::IncompatibleOffset {
                    element,
                    value: raw,
                    offset: self.options.offset,
                    written: acc.written(),
                });
            };
            if value > dest_width.mask() {
                return Err(DeflateError::ValueOutOfRange {
                    element,
                    value,
                    bits: dest_width.bits(),
                    written: acc.written(),
                });
            }
            if acc.push(value) == Flow::Exhausted {
                let written = acc.finish();
                tracing::trace!(written, element, "deflate destination exhausted");
                return Ok((written, Status::TruncatedByCapacity));
            }
        }
        Ok((acc.finish(), Status::Done))
    }

    /// Inverse of the inflate offset step. `None` when no inflate input
    /// could have produced `raw`.
    #[inline(always)]
    fn remove_offset(&self, raw: u32) -> Option<u32> {
        let offset = self.options.offset;
        if self.options.offset_zero {
            match raw {
                0 => Some(0),
                r if r > offset => Some(r - offset),
                _ => None,
            }
        } else {
            raw.checked_sub(offset)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::width::Width;

    fn deflater(sw: Width, dw: Width, offset: u32, offset_zero: bool) -> Deflater {
        let opts = TransformOptions::new(sw, dw)
            .with_offset(offset)
            .with_offset_zero(offset_zero);
        Deflater::new(opts).unwrap()
    }

    fn words(values: &[u32]) -> Vec<u8> {
        values.iter().flat_map(|v| v.to_le_bytes()).collect()
    }

    #[test]
    fn bytes_back_to_bits() {
        let mut dest = [0u8; 4];
        let src = [1u8; 32];
        let n = deflater(Width::W8, Width::W1, 0, false)
            .deflate(&src, &mut dest)
            .unwrap();
        assert_eq!(n, 4);
        assert_eq!(dest, [0xFF; 4]);
    }

    #[test]
    fn offset_below_value_fails() {
        let src = words(&[5]);
        let mut dest = [0u8; 4];
        let err = deflater(Width::W32, Width::W8, 10, false)
            .deflate(&src, &mut dest)
            .unwrap_err();
        assert_eq!(
            err,
            DeflateError::IncompatibleOffset {
                element: 0,
                value: 5,
                offset: 10,
                written: 0
            }
        );
    }

    #[test]
    fn offset_equal_allowed_without_flag() {
        let src = words(&[10, 11, 12, 13]);
        let mut dest = [0u8; 4];
        let n = deflater(Width::W32, Width::W8, 10, false)
            .deflate(&src, &mut dest)
            .unwrap();
        assert_eq!(n, 4);
        assert_eq!(dest, [0, 1, 2, 3]);
    }

    #[test]
    fn offset_equal_rejected_with_flag() {
        let src = words(&[0, 10, 11, 12]);
        let mut dest = [0u8; 4];
        let err = deflater(Width::W32, Width::W8, 10, true)
            .deflate(&src, &mut dest)
            .unwrap_err();
        assert!(matches!(
            err,
            DeflateError::IncompatibleOffset { element: 1, value: 10, .. }
        ));
    }

    #[test]
    fn zero_passes_with_flag() {
        let src = words(&[0, 11, 12, 13]);
        let mut dest = [0u8; 4];
        let n = deflater(Width::W32, Width::W8, 10, true)
            .deflate(&src, &mut dest)
            .unwrap();
        assert_eq!(n, 4);
        assert_eq!(dest, [0, 1, 2, 3]);
    }

    #[test]
    fn value_too_wide_fails() {
        let src = words(&[20]);
        let mut dest = [0u8; 4];
        let err = deflater(Width::W32, Width::W4, 0, false)
            .deflate(&src, &mut dest)
            .unwrap_err();
        assert_eq!(
            err,
            DeflateError::ValueOutOfRange {
                element: 0,
                value: 20,
                bits: 4,
                written: 0
            }
        );
    }

    #[test]
    fn failure_keeps_flushed_prefix() {
        // Four valid halfwords fill one group, the fifth needs 9 bits.
        let src = words(&[0x0002_0001, 0x0004_0003, 0x0000_01FF, 0]);
        let mut dest = [0xEEu8; 8];
        let err = deflater(Width::W16, Width::W8, 0, false)
            .deflate(&src, &mut dest)
            .unwrap_err();
        assert_eq!(err.written(), 4);
        assert_eq!(dest, [1, 2, 3, 4, 0xEE, 0xEE, 0xEE, 0xEE]);
    }

    #[test]
    fn misaligned_source_rejected() {
        let mut dest = [0u8; 4];
        let err = deflater(Width::W8, Width::W1, 0, false)
            .deflate(&[1, 2, 3], &mut dest)
            .unwrap_err();
        assert_eq!(err, DeflateError::MisalignedSource(3));
        assert_eq!(dest, [0; 4]);
    }

    #[test]
    fn truncates_when_dest_small() {
        let src = words(&[0x0403_0201]);
        let mut dest = [0u8; 2];
        let (n, status) = deflater(Width::W8, Width::W8, 0, false)
            .deflate_with_status(&src, &mut dest)
            .unwrap();
        assert_eq!(n, 2);
        assert_eq!(status, Status::TruncatedByCapacity);
        assert_eq!(dest, [1, 2]);
    }

    #[test]
    fn stops_at_truncating_flush_before_bad_element() {
        // The first group is cut to 2 bytes; the out-of-range nibble after
        // it is never examined.
        let src = words(&[1, 2, 3, 4, 5, 6, 7, 8, 0x30]);
        let mut dest = [0u8; 2];
        let (n, status) = deflater(Width::W32, Width::W4, 0, false)
            .deflate_with_status(&src, &mut dest)
            .unwrap();
        assert_eq!(n, 2);
        assert_eq!(status, Status::TruncatedByCapacity);
        assert_eq!(dest, [0x21, 0x43]);

        let src = words(&[1, 2, 3, 4, 0x1FF]);
        let mut dest = [0u8; 2];
        assert_eq!(
            deflater(Width::W32, Width::W8, 0, false).deflate(&src, &mut dest),
            Ok(2)
        );
        assert_eq!(dest, [1, 2]);
    }

    #[test]
    fn full_dest_still_validates_next_group() {
        // dest is exactly full after the first group, but the pass only
        // stops at the next flush, so the bad element before it fails.
        let src = words(&[1, 2, 3, 4, 5, 0x1FF, 0, 0]);
        let mut dest = [0u8; 4];
        let err = deflater(Width::W32, Width::W8, 0, false)
            .deflate(&src, &mut dest)
            .unwrap_err();
        assert_eq!(
            err,
            DeflateError::ValueOutOfRange {
                element: 5,
                value: 0x1FF,
                bits: 8,
                written: 4
            }
        );
        assert_eq!(dest, [1, 2, 3, 4]);

        // Without a bad element the same pass ends at the next flush.
        let src = words(&[1, 2, 3, 4, 5, 6, 7, 8]);
        let mut dest = [0u8; 4];
        let (n, status) = deflater(Width::W32, Width::W8, 0, false)
            .deflate_with_status(&src, &mut dest)
            .unwrap();
        assert_eq!(n, 4);
        assert_eq!(status, Status::TruncatedByCapacity);
    }

    #[test]
    fn empty_inputs_are_noops() {
        let d = deflater(Width::W32, Width::W8, 0, false);
        let mut dest = [0x77u8; 4];
        assert_eq!(d.deflate(&[], &mut dest), Ok(0));
        assert_eq!(d.deflate(&[1, 2, 3], &mut []), Ok(0));
        assert_eq!(dest, [0x77; 4]);
    }

    #[test]
    fn output_len_counts_whole_groups() {
        assert_eq!(deflater(Width::W8, Width::W1, 0, false).output_len(32), 4);
        assert_eq!(deflater(Width::W8, Width::W1, 0, false).output_len(16), 0);
        assert_eq!(deflater(Width::W32, Width::W8, 0, false).output_len(16), 4);
        assert_eq!(deflater(Width::W16, Width::W4, 0, false).output_len(18), 4);
    }

    #[test]
    fn rejects_wide_dest() {
        assert!(Deflater::new(TransformOptions::new(Width::W32, Width::W16)).is_err());
    }
}
