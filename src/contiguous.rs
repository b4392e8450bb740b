//! Packed-contiguous codec (tag 0): `n` fields of width `k` stored
//! back-to-back, with no padding anywhere. Fields may straddle word
//! boundaries, so random access costs one or two word reads.

use crate::bitio;
use crate::codec::{alloc_with_header, min_width, Codec, IntCodec};
use crate::error::{Error, Result};
use crate::header::{self, HEADER_BITS, HEADER_WORDS};

/// The densest of the three layouts.
pub struct Contiguous;

impl IntCodec for Contiguous {
    fn compress(&self, src: &[u32]) -> Result<Vec<u32>> {
        let n = src.len();
        let k = min_width(src)?;

        let mut out = alloc_with_header(HEADER_WORDS, n as u64 * k as u64)?;
        header::write(&mut out, n as u32, Codec::Contiguous, k, k, 0);

        for (i, &v) in src.iter().enumerate() {
            bitio::write_bits(&mut out, HEADER_BITS + i * k as usize, k, v);
        }
        Ok(out)
    }

    fn decompress(&self, packed: &[u32], dst: &mut [u32]) -> Result<()> {
        let n = header::n(packed)? as usize;
        let k = checked_k(packed)?;
        if dst.len() < n {
            return Err(Error::DestinationTooSmall { needed: n, len: dst.len() });
        }

        for (i, slot) in dst.iter_mut().take(n).enumerate() {
            *slot = bitio::read_bits(packed, HEADER_BITS + i * k as usize, k);
        }
        Ok(())
    }

    fn get(&self, packed: &[u32], index: usize) -> Result<u32> {
        let n = header::n(packed)? as usize;
        if index >= n {
            return Err(Error::OutOfBounds { index, len: n });
        }
        let k = checked_k(packed)?;
        Ok(bitio::read_bits(packed, HEADER_BITS + index * k as usize, k))
    }
}

fn checked_k(packed: &[u32]) -> Result<u32> {
    let k = header::k(packed)?;
    if k == 0 || k > 31 {
        return Err(Error::BadWidth(k));
    }
    Ok(k)
}
