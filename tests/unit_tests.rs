use bitunpack::{DeflateError, Error, bit_unpack_deflate, bit_unpack_inflate};

#[test]
fn test_inflate_all_ones_to_bytes() {
    let mut dest = [0u8; 8];
    let n = bit_unpack_inflate(&[0xFF], &mut dest, 1, 8, 0, false).unwrap();
    assert_eq!(n, 8);
    assert_eq!(dest, [0x01; 8]);
}

#[test]
fn test_inflate_zero_ignores_offset() {
    let mut dest = [0xFFu8; 8];
    let n = bit_unpack_inflate(&[0x00], &mut dest, 1, 8, 5, false).unwrap();
    assert_eq!(n, 8);
    assert_eq!(dest, [0x00; 8]);
}

#[test]
fn test_deflate_incompatible_offset() {
    let src = 5u32.to_le_bytes();
    let mut dest = [0u8; 4];
    let err = bit_unpack_deflate(&src, &mut dest, 32, 8, 10, false).unwrap_err();
    assert!(matches!(
        err,
        Error::Deflate(DeflateError::IncompatibleOffset { value: 5, offset: 10, .. })
    ));
}

#[test]
fn test_deflate_value_out_of_range() {
    let src = 20u32.to_le_bytes();
    let mut dest = [0u8; 4];
    let err = bit_unpack_deflate(&src, &mut dest, 32, 4, 0, false).unwrap_err();
    assert!(matches!(
        err,
        Error::Deflate(DeflateError::ValueOutOfRange { value: 20, bits: 4, .. })
    ));
}

#[test]
fn test_inflate_truncated_flush() {
    let mut dest = [0u8; 2];
    let n = bit_unpack_inflate(&[0xFF], &mut dest, 1, 8, 0, false).unwrap();
    assert_eq!(n, 2);
    assert_eq!(dest, [0x01, 0x01]);
}

#[test]
fn test_deflate_truncated_flush() {
    let src: Vec<u8> = [1u32, 2, 3, 4]
        .iter()
        .flat_map(|v| v.to_le_bytes())
        .collect();
    let mut dest = [0u8; 3];
    let n = bit_unpack_deflate(&src, &mut dest, 32, 8, 0, false).unwrap();
    assert_eq!(n, 3);
    assert_eq!(dest, [1, 2, 3]);
}

#[test]
fn test_empty_buffers_leave_dest_untouched() {
    for sw in [1u8, 2, 4, 8] {
        for dw in [1u8, 2, 4, 8, 16, 32] {
            let mut dest = [0x5Au8; 16];
            assert_eq!(bit_unpack_inflate(&[], &mut dest, sw, dw, 3, true), Ok(0));
            assert_eq!(dest, [0x5A; 16]);
            assert_eq!(bit_unpack_inflate(&[0xFF; 4], &mut [], sw, dw, 3, true), Ok(0));
        }
    }
}

#[test]
fn test_output_is_whole_groups() {
    let src: Vec<u8> = (0..=255u8).collect();
    for sw in [1u8, 2, 4, 8] {
        for dw in [1u8, 2, 4, 8, 16, 32] {
            for len in [0usize, 1, 3, 5, 17, 64] {
                let mut dest = vec![0u8; 4096];
                let n = bit_unpack_inflate(&src[..len], &mut dest, sw, dw, 0, false).unwrap();
                assert_eq!(n % 4, 0, "sw={sw} dw={dw} len={len}");
                let bits = len * 8 / sw as usize * dw as usize;
                assert_eq!(n, bits / 32 * 4, "sw={sw} dw={dw} len={len}");
            }
        }
    }
}
