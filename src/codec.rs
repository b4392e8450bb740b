//! Codec selection, dispatch and the helpers shared by all three codecs.

use crate::aligned::WordAligned;
use crate::contiguous::Contiguous;
use crate::error::{Error, Result};
use crate::header;
use crate::outlier::Outlier;

/// Identifies one of the three packing layouts. The numeric tags are part
/// of the packed-buffer format and must stay stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Codec {
    /// Fields packed back-to-back; may straddle word boundaries.
    Contiguous = 0,
    /// `⌊32/k⌋` fields per word; no field straddles.
    WordAligned = 1,
    /// Flag-bit main region with large values segregated into a trailing
    /// full-width region.
    Outlier = 2,
}

impl Codec {
    /// All codecs in tag order.
    pub const ALL: [Codec; 3] = [Codec::Contiguous, Codec::WordAligned, Codec::Outlier];

    /// The tag stored in header word 2.
    #[inline]
    pub fn tag(self) -> u32 {
        self as u32
    }

    /// Inverse of [`tag`](Codec::tag).
    pub fn from_tag(tag: u32) -> Result<Codec> {
        match tag {
            0 => Ok(Codec::Contiguous),
            1 => Ok(Codec::WordAligned),
            2 => Ok(Codec::Outlier),
            other => Err(Error::UnknownCodec(other)),
        }
    }

    /// Returns the codec implementation for this tag.
    pub fn compressor(self) -> &'static dyn IntCodec {
        match self {
            Codec::Contiguous => &Contiguous,
            Codec::WordAligned => &WordAligned,
            Codec::Outlier => &Outlier,
        }
    }

    /// Reads the codec tag back out of a packed buffer, for callers that
    /// no longer know which codec produced it.
    pub fn for_buffer(packed: &[u32]) -> Result<Codec> {
        header::codec(packed)
    }

    /// Compresses `src` with this codec.
    ///
    /// Shorthand for `self.compressor().compress(src)`.
    pub fn compress(self, src: &[u32]) -> Result<Vec<u32>> {
        self.compressor().compress(src)
    }
}

/// The three operations every codec provides.
///
/// A packed buffer produced by [`compress`](IntCodec::compress) is
/// self-describing; [`decompress`](IntCodec::decompress) and
/// [`get`](IntCodec::get) read everything they need from its header.
pub trait IntCodec {
    /// Compresses `src` into a freshly allocated, self-describing word
    /// buffer.
    fn compress(&self, src: &[u32]) -> Result<Vec<u32>>;

    /// Decompresses all `n` elements into `dst[0..n]`.
    fn decompress(&self, packed: &[u32], dst: &mut [u32]) -> Result<()>;

    /// Returns element `index` without materializing any other element.
    fn get(&self, packed: &[u32], index: usize) -> Result<u32>;
}

/// Decompresses a packed buffer into `dst`, dispatching on the codec tag
/// in its header.
pub fn decompress(packed: &[u32], dst: &mut [u32]) -> Result<()> {
    Codec::for_buffer(packed)?.compressor().decompress(packed, dst)
}

/// Random access into a packed buffer, dispatching on the codec tag in
/// its header.
pub fn get(packed: &[u32], index: usize) -> Result<u32> {
    Codec::for_buffer(packed)?.compressor().get(packed, index)
}

// ── shared helpers ─────────────────────────────────────────────────────

/// Every bit position in a packed buffer must fit the u32 domain; this
/// bound also keeps `n` representable in header word 1.
pub(crate) const MAX_TOTAL_BITS: u64 = u32::MAX as u64;

/// Minimum number of bits needed to represent `v`; 1 for 0.
#[inline]
pub(crate) fn width_of(v: u32) -> u32 {
    if v == 0 {
        1
    } else {
        32 - v.leading_zeros()
    }
}

/// Minimum width covering every value of `src`, 1 for an empty or
/// all-zero input. Values needing more than 31 bits are rejected.
pub(crate) fn min_width(src: &[u32]) -> Result<u32> {
    let max = src.iter().copied().max().unwrap_or(0);
    let bits = width_of(max);
    if bits > 31 {
        return Err(Error::ValueTooLarge { value: max, bits });
    }
    Ok(bits)
}

/// Allocates a zero-filled buffer of `header_words` plus enough words for
/// `data_bits` data bits. The total is computed in 64-bit arithmetic and
/// bound-checked before narrowing.
pub(crate) fn alloc_with_header(header_words: usize, data_bits: u64) -> Result<Vec<u32>> {
    let total_bits = header_words as u64 * 32 + data_bits;
    if total_bits > MAX_TOTAL_BITS {
        return Err(Error::CapacityExceeded(total_bits));
    }
    Ok(vec![0u32; total_bits.div_ceil(32) as usize])
}
