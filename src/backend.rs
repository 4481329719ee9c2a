//! Compression backends and runtime selection.
//!
//! Deployments swap the reference coder for accelerated implementations
//! that satisfy the same bytes-to-bytes contract. The variants live
//! behind one trait and are chosen by explicit runtime configuration,
//! with hardware capability flags probed once and passed in rather than
//! read from hidden global state.

use std::io::Write;
use std::sync::OnceLock;

use flate2::write::DeflateEncoder;
use flate2::Compression;

use crate::error::{Error, Result};
use crate::range;

/// CPU capability flags relevant to backend choice.
///
/// Probed once per process via [`CpuFeatures::get`]; selection takes the
/// flags as an argument so tests can exercise every path regardless of
/// the host CPU.
#[derive(Debug, Clone, Copy, Default)]
pub struct CpuFeatures {
    /// AVX2 vector extensions are available.
    pub avx2: bool,
}

impl CpuFeatures {
    /// Probe the running CPU.
    pub fn detect() -> Self {
        #[cfg(target_arch = "x86_64")]
        {
            Self {
                avx2: is_x86_feature_detected!("avx2"),
            }
        }
        #[cfg(not(target_arch = "x86_64"))]
        {
            Self::default()
        }
    }

    /// The cached probe result, computed on first use.
    pub fn get() -> &'static Self {
        static FEATURES: OnceLock<CpuFeatures> = OnceLock::new();
        FEATURES.get_or_init(Self::detect)
    }
}

/// Bytes-to-bytes compression contract shared by every backend.
///
/// Implementations are free to use entirely different algorithms; only
/// the call contract is common: empty input is rejected, any other input
/// succeeds, and output is deterministic for a given input.
pub trait Compressor: Send + Sync {
    /// Compress `src` into a fresh buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyInput`] when `src` is empty.
    fn compress(&self, src: &[u8]) -> Result<Vec<u8>>;
}

/// The portable adaptive range coder.
#[derive(Debug, Default, Clone, Copy)]
pub struct AdaptiveBackend;

impl Compressor for AdaptiveBackend {
    fn compress(&self, src: &[u8]) -> Result<Vec<u8>> {
        range::compress(src)
    }
}

/// Library-backed deflate.
///
/// Stands in for the vector-accelerated deployment path, which replaces
/// the coder wholesale with a single call into a deflate codec library.
#[derive(Debug, Default, Clone, Copy)]
pub struct DeflateBackend;

impl Compressor for DeflateBackend {
    fn compress(&self, src: &[u8]) -> Result<Vec<u8>> {
        if src.is_empty() {
            return Err(Error::EmptyInput);
        }
        let mut encoder =
            DeflateEncoder::new(Vec::with_capacity(src.len() / 2), Compression::default());
        encoder.write_all(src)?;
        Ok(encoder.finish()?)
    }
}

/// The closed set of compressor backends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BackendKind {
    /// Portable adaptive range coder.
    #[default]
    Adaptive,
    /// Vectorized deflate through the codec library.
    Deflate,
}

impl BackendKind {
    /// Pick a backend for the probed CPU: the library deflate path when
    /// AVX2 is available, the portable coder otherwise.
    pub fn auto(features: &CpuFeatures) -> Self {
        let kind = if features.avx2 {
            Self::Deflate
        } else {
            Self::Adaptive
        };
        log::debug!("selected {kind:?} backend (avx2: {})", features.avx2);
        kind
    }

    /// Construct the chosen backend.
    pub fn build(self) -> Box<dyn Compressor> {
        match self {
            Self::Adaptive => Box::new(AdaptiveBackend),
            Self::Deflate => Box::new(DeflateBackend),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_backend_rejects_empty_input() {
        for kind in [BackendKind::Adaptive, BackendKind::Deflate] {
            let backend = kind.build();
            assert!(
                matches!(backend.compress(&[]), Err(Error::EmptyInput)),
                "{kind:?} accepted empty input"
            );
        }
    }

    #[test]
    fn test_every_backend_is_deterministic() {
        let data = b"mississippi mississippi mississippi".to_vec();
        for kind in [BackendKind::Adaptive, BackendKind::Deflate] {
            let backend = kind.build();
            let first = backend.compress(&data).unwrap();
            let second = backend.compress(&data).unwrap();
            assert!(!first.is_empty());
            assert_eq!(first, second, "{kind:?} output varied between calls");
        }
    }

    #[test]
    fn test_adaptive_backend_matches_compress() {
        let data = vec![0x42; 1024];
        let via_backend = AdaptiveBackend.compress(&data).unwrap();
        assert_eq!(via_backend, range::compress(&data).unwrap());
    }

    #[test]
    fn test_auto_selection_follows_capability_flag() {
        assert_eq!(
            BackendKind::auto(&CpuFeatures { avx2: true }),
            BackendKind::Deflate
        );
        assert_eq!(
            BackendKind::auto(&CpuFeatures { avx2: false }),
            BackendKind::Adaptive
        );
    }

    #[test]
    fn test_probe_is_cached() {
        assert!(std::ptr::eq(CpuFeatures::get(), CpuFeatures::get()));
    }
}
