//! # Adaptive Range Coding
//!
//! *Fractional-bit entropy coding with a model that learns as it codes.*
//!
//! ## Intuition First
//!
//! Picture the interval `[0, 1)` as a street, with each byte value owning a
//! stretch of it sized by how likely that byte is. Coding a byte means
//! zooming into its stretch; coding the next byte means zooming into a
//! stretch *of that stretch*. After the whole message, any number inside
//! the final sliver identifies the message. Likely bytes own wide
//! stretches, so zooming into them barely shrinks the sliver and costs a
//! fraction of a bit; rare bytes cost several bits.
//!
//! Range coding is this idea carried out in 32-bit integer arithmetic: the
//! sliver is `[low, low + range)`, and whenever it gets too narrow for the
//! registers, the settled top byte is emitted and the rest is shifted up.
//!
//! ## The Problem
//!
//! Prefix coders like Huffman must spend a whole number of bits per
//! symbol, which wastes up to a bit per symbol on skewed distributions.
//! Classical arithmetic coding fixes the rate but renormalizes bit by bit
//! and needs careful carry handling. Range coding renormalizes a byte at a
//! time, keeping everything in native registers at a cost of at most one
//! extra bit versus the bit-exact coder.
//!
//! ## Historical Context
//!
//! ```text
//! 1948  Shannon       Entropy as the fundamental limit
//! 1976  Rissanen      Arithmetic coding: messages as nested intervals
//! 1979  Martin        Range coding: byte-wise renormalization
//! 1987  Witten et al. Adaptive models popularized (CACM implementation)
//! 1999  Subbotin      Carryless range coder folklore implementations
//! ```
//!
//! ## Mathematical Formulation
//!
//! With cumulative frequencies $C(s) = \sum_{t < s} f_t$ and total mass
//! $T$, coding symbol $s$ maps the interval as
//!
//! ```text
//! unit  = range / T
//! low   = low + unit * C(s)
//! range = unit * f_s
//! ```
//!
//! which approximates narrowing by $p_s = f_s / T$. The model here is
//! order-0 adaptive: every symbol starts with frequency one and gains a
//! count each time it is coded, with the total halved whenever it crosses
//! `2^23`.
//!
//! ## Complexity Analysis
//!
//! - **Time**: O(1) amortized per input byte; the model update touches at
//!   most 256 table entries and the rescale runs once per ~`2^23` counts.
//! - **Space**: O(1) beyond the output buffer (one 257-entry table).
//!
//! ## Failure Modes
//!
//! 1. **Dropped carries**: additions into `low` never patch already
//!    emitted bytes, so adversarial inputs can produce streams no decoder
//!    could resolve. Kept as-is; see [`RangeEncoder::encode`].
//! 2. **Model saturation**: on very long single-symbol runs the total
//!    frequency mass can approach the interval width, degrading the
//!    division-based narrowing and with it the compression rate.
//!
//! ## Implementation Notes
//!
//! This crate provides:
//! - **Reference coder**: [`compress`] / [`RangeEncoder`], the adaptive
//!   order-0 range coder. Compression only; no decoder exists.
//! - **Backend seam**: [`Compressor`] with a closed set of variants
//!   ([`BackendKind`]) selected at runtime from probed [`CpuFeatures`],
//!   the way deployments substitute accelerated codecs.
//!
//! ## References
//!
//! - Martin, G. N. N. (1979). "Range encoding: an algorithm for removing
//!   redundancy from a digitised message."
//! - Witten, I. H., Neal, R. M., Cleary, J. G. (1987). "Arithmetic coding
//!   for data compression."

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod backend;
pub mod error;
pub mod model;
pub mod range;

pub use backend::{AdaptiveBackend, BackendKind, Compressor, CpuFeatures, DeflateBackend};
pub use error::{Error, Result};
pub use model::ByteModel;
pub use range::{compress, RangeEncoder};
