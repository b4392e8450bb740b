//! Word-aligned codec (tag 1): `⌊32/k⌋` fields per 32-bit word, unused
//! high bits left at zero. No field ever straddles a word boundary, so
//! every access is a single word read plus a mask and shift. When 32 is
//! not a multiple of `k`, `32 mod k` bits per word are wasted; that is
//! the deliberate trade against the contiguous layout.

use crate::bitio;
use crate::codec::{alloc_with_header, min_width, Codec, IntCodec};
use crate::error::{Error, Result};
use crate::header::{self, HEADER_WORDS};

/// The fastest of the three layouts for random access.
pub struct WordAligned;

impl IntCodec for WordAligned {
    fn compress(&self, src: &[u32]) -> Result<Vec<u32>> {
        let n = src.len();
        let k = min_width(src)?;
        let e = elements_per_word(k);
        let data_words = n.div_ceil(e);

        let mut out = alloc_with_header(HEADER_WORDS, data_words as u64 * 32)?;
        header::write(&mut out, n as u32, Codec::WordAligned, k, k, 0);

        for (i, &v) in src.iter().enumerate() {
            bitio::write_in_word(&mut out, HEADER_WORDS + i / e, bit_offset(i, e, k), k, v);
        }
        Ok(out)
    }

    fn decompress(&self, packed: &[u32], dst: &mut [u32]) -> Result<()> {
        let n = header::n(packed)? as usize;
        let k = checked_k(packed)?;
        if dst.len() < n {
            return Err(Error::DestinationTooSmall { needed: n, len: dst.len() });
        }

        let e = elements_per_word(k);
        for (i, slot) in dst.iter_mut().take(n).enumerate() {
            *slot = bitio::read_in_word(packed, HEADER_WORDS + i / e, bit_offset(i, e, k), k);
        }
        Ok(())
    }

    fn get(&self, packed: &[u32], index: usize) -> Result<u32> {
        let n = header::n(packed)? as usize;
        if index >= n {
            return Err(Error::OutOfBounds { index, len: n });
        }
        let k = checked_k(packed)?;
        let e = elements_per_word(k);
        Ok(bitio::read_in_word(packed, HEADER_WORDS + index / e, bit_offset(index, e, k), k))
    }
}

/// How many k-bit fields fit in one word without straddling.
#[inline]
fn elements_per_word(k: u32) -> usize {
    (32 / k).max(1) as usize
}

#[inline]
fn bit_offset(i: usize, e: usize, k: u32) -> u32 {
    (i % e) as u32 * k
}

fn checked_k(packed: &[u32]) -> Result<u32> {
    let k = header::k(packed)?;
    if k == 0 || k > 31 {
        return Err(Error::BadWidth(k));
    }
    Ok(k)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roundtrip(src: &[u32]) -> Vec<u32> {
        let packed = WordAligned.compress(src).unwrap();
        let mut out = vec![0u32; src.len()];
        WordAligned.decompress(&packed, &mut out).unwrap();
        out
    }

    #[test]
    fn test_roundtrip_small() {
        let src = vec![0, 1, 2, 3, 4, 5, 6, 7];
        assert_eq!(roundtrip(&src), src);

        // k = 3: ten elements per word, so eight fit in a single word.
        let packed = WordAligned.compress(&src).unwrap();
        assert_eq!(header::k(&packed), Ok(3));
        assert_eq!(packed.len(), HEADER_WORDS + 1);
    }

    #[test]
    fn test_perfect_fit() {
        // k = 8 divides 32: four elements per word, zero padding.
        let src = vec![255u32, 255, 255, 255];
        let packed = WordAligned.compress(&src).unwrap();
        assert_eq!(header::k(&packed), Ok(8));
        assert_eq!(packed.len(), HEADER_WORDS + 1);
        assert_eq!(packed[HEADER_WORDS], u32::MAX);
        assert_eq!(roundtrip(&src), src);
    }

    #[test]
    fn test_size_bound() {
        // Output words must equal 5 + ceil(n / floor(32/k)).
        for (n, max) in [(1usize, 1u32), (31, 1), (33, 1), (100, 511), (1000, 255), (7, 1 << 30)] {
            let src: Vec<u32> = (0..n as u32)
                .map(|i| if i == 0 { max } else { i % (max + 1) })
                .collect();
            let packed = WordAligned.compress(&src).unwrap();
            let k = header::k(&packed).unwrap();
            let e = (32 / k).max(1) as usize;
            assert_eq!(packed.len(), HEADER_WORDS + n.div_ceil(e));
        }
    }

    #[test]
    fn test_no_field_straddles() {
        // k = 9: three elements per word, offsets 0, 9 and 18; every
        // field's last bit stays inside its word.
        let src: Vec<u32> = (0..40).map(|i| 511 - i).collect();
        let packed = WordAligned.compress(&src).unwrap();
        let k = header::k(&packed).unwrap();
        assert_eq!(k, 9);
        let e = (32 / k).max(1) as usize;
        for i in 0..src.len() {
            assert!((i % e) as u32 * k + k <= 32);
        }
        assert_eq!(roundtrip(&src), src);
    }

    #[test]
    fn test_get_matches_index() {
        let src: Vec<u32> = (0..200).map(|i| i * 31 % 512).collect();
        let packed = WordAligned.compress(&src).unwrap();
        for (i, &v) in src.iter().enumerate() {
            assert_eq!(WordAligned.get(&packed, i), Ok(v));
        }
        assert_eq!(
            WordAligned.get(&packed, 200),
            Err(Error::OutOfBounds { index: 200, len: 200 })
        );
    }

    #[test]
    fn test_wide_values_one_per_word() {
        // k = 31: a single element per word.
        let src = vec![i32::MAX as u32, 12345, (1 << 30) + 7];
        let packed = WordAligned.compress(&src).unwrap();
        assert_eq!(header::k(&packed), Ok(31));
        assert_eq!(packed.len(), HEADER_WORDS + 3);
        assert_eq!(roundtrip(&src), src);
    }

    #[test]
    fn test_empty_input() {
        let packed = WordAligned.compress(&[]).unwrap();
        assert_eq!(packed.len(), HEADER_WORDS);
        assert_eq!(
            WordAligned.get(&packed, 0),
            Err(Error::OutOfBounds { index: 0, len: 0 })
        );
    }

    #[test]
    fn test_all_zero_input() {
        // k = 1: 32 elements per word.
        let src = vec![0u32; 100];
        let packed = WordAligned.compress(&src).unwrap();
        assert_eq!(packed.len(), HEADER_WORDS + 4);
        assert_eq!(roundtrip(&src), src);
    }

    #[test]
    fn test_destination_too_small() {
        let packed = WordAligned.compress(&[9, 8, 7]).unwrap();
        let mut dst = [0u32; 1];
        assert_eq!(
            WordAligned.decompress(&packed, &mut dst),
            Err(Error::DestinationTooSmall { needed: 3, len: 1 })
        );
    }
}
