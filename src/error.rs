use thiserror::Error;

/// Unified error type for all compression, decompression and access
/// operations in this crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// An input value needs more than 31 bits.
    #[error("value {value} needs {bits} bits; at most 31 are supported")]
    ValueTooLarge { value: u32, bits: u32 },

    /// The destination slice cannot hold all decompressed elements.
    #[error("destination holds {len} elements but {needed} are required")]
    DestinationTooSmall { needed: usize, len: usize },

    /// A random-access index is outside `0..n`.
    #[error("index {index} out of bounds for {len} elements")]
    OutOfBounds { index: usize, len: usize },

    /// Word 0 of the buffer is not the magic sentinel.
    #[error("bad magic word {0:#010x}")]
    BadMagic(u32),

    /// Word 2 of the buffer names no known codec.
    #[error("unknown codec tag {0}")]
    UnknownCodec(u32),

    /// The buffer is too short to hold a header.
    #[error("buffer of {0} words is too short to hold a header")]
    Truncated(usize),

    /// The header declares a field width outside the usable range.
    #[error("header declares an unusable field width of {0} bits")]
    BadWidth(u32),

    /// A computed layout exceeds the addressable bit range.
    #[error("packed layout of {0} bits exceeds the addressable capacity")]
    CapacityExceeded(u64),
}

pub type Result<T> = std::result::Result<T, Error>;
