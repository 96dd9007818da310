#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidthRole {
    Source,
    Dest,
}

impl std::fmt::Display for WidthRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WidthRole::Source => f.write_str("source"),
            WidthRole::Dest => f.write_str("dest"),
        }
    }
}

/// Errors raised while building or decoding a transform configuration.
/// These are reported before any byte of the destination is touched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("unsupported bit width: {0}")]
    UnsupportedWidth(u32),

    #[error("width {0:?} is not a number")]
    UnparsableWidth(String),

    #[error("{role} width of {bits} bits is not allowed for {transform}")]
    WidthRole {
        role: WidthRole,
        bits: u32,
        transform: &'static str,
    },

    #[error("offset {0:#x} does not fit in 31 bits")]
    OffsetTooLarge(u32),

    #[error("argument block too short: expected {expected} bytes, got {actual}")]
    TruncatedHeader { expected: usize, actual: usize },

    #[error("argument block declares {declared} source bytes, only {available} available")]
    SourceTooShort { declared: usize, available: usize },
}

/// Errors raised by the deflate transform.
///
/// Deflate is single pass: when a validation error is returned, every byte
/// counted in `written` has already been stored into the destination and is
/// left there. Nothing is rolled back.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeflateError {
    /// Raw element is below the offset, or equal to it when the offset also
    /// applies to zero elements.
    #[error("element {element}: value {value} is incompatible with offset {offset}")]
    IncompatibleOffset {
        element: usize,
        value: u32,
        offset: u32,
        written: usize,
    },

    /// `value` is the element after offset removal.
    #[error("element {element}: value {value} does not fit in {bits} bits")]
    ValueOutOfRange {
        element: usize,
        value: u32,
        bits: u32,
        written: usize,
    },

    #[error("source length {0} is not a multiple of 4")]
    MisalignedSource(usize),
}

impl DeflateError {
    /// Bytes already stored into the destination when the error was raised.
    pub fn written(&self) -> usize {
        match self {
            DeflateError::IncompatibleOffset { written, .. }
            | DeflateError::ValueOutOfRange { written, .. } => *written,
            DeflateError::MisalignedSource(_) => 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("deflate failed: {0}")]
    Deflate(#[from] DeflateError),
}
