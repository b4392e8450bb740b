//! # wordpack
//!
//! Bit-packed compression for sequences of non-negative 32-bit integers
//! (each at most 2^31 - 1), with O(1) random access into the compressed
//! form.
//!
//! A compressed buffer is a plain `Vec<u32>` that starts with a five-word
//! self-describing header, so any buffer can later be decompressed or
//! indexed without remembering which codec produced it.
//!
//! ## Codecs
//!
//! Three layouts trade density against access cost:
//!
//! - [`Codec::Contiguous`] packs every value into exactly `k` bits,
//!   back-to-back; the densest fixed-width layout, at the price of fields
//!   straddling word boundaries.
//! - [`Codec::WordAligned`] fits `⌊32/k⌋` values per word and never
//!   straddles, so random access is a single word read.
//! - [`Codec::Outlier`] picks a narrower inline width by cost model and
//!   moves the few values that don't fit into a trailing full-width
//!   region, which pays off on skewed distributions.
//!
//! ## Example
//!
//! ```rust
//! use wordpack::Codec;
//!
//! let data = vec![3, 7, 1, 0, 42, 5];
//! let packed = Codec::Contiguous.compress(&data).unwrap();
//!
//! // The buffer is self-describing: no codec needed from here on.
//! let mut out = vec![0u32; data.len()];
//! wordpack::decompress(&packed, &mut out).unwrap();
//! assert_eq!(out, data);
//!
//! // Random access without touching any other element.
//! assert_eq!(wordpack::get(&packed, 4).unwrap(), 42);
//! ```

pub mod bitio;
pub mod header;

mod aligned;
mod codec;
mod contiguous;
mod error;
mod outlier;

// Re-export primary types at the crate root.
pub use aligned::WordAligned;
pub use codec::{decompress, get, Codec, IntCodec};
pub use contiguous::Contiguous;
pub use error::{Error, Result};
pub use outlier::{plan_widths, Outlier, WidthPlan};
