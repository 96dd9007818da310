pub const BYTE_BITS: u32 = 8;
pub const WORD_BITS: u32 = 32;
pub const WORD_BYTES: usize = 4;

pub const OFFSET_LIMIT: u32 = 1 << 31;
pub const OFFSET_MASK: u32 = OFFSET_LIMIT - 1;
pub const OFFSET_ZERO_FLAG: u32 = 1 << 31;

pub const HEADER_SIZE: usize = 8;
