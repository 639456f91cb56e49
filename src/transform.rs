//! Forward transform capability
//!
//! The detector consumes the Fourier transform through the [`ForwardTransform`]
//! trait so the core stays decoupled from any particular FFT implementation
//! and can be driven with a stub in tests. [`RustFftForward`] is the default
//! implementation, backed by `rustfft`.

use crate::error::DetectionError;
use rustfft::num_complex::Complex32;
use rustfft::{Fft, FftPlanner};
use std::sync::Arc;

/// Forward real-to-complex transform of a fixed block length
///
/// Implementations map a real-valued block of `block_len()` samples to
/// `block_len()` complex frequency coefficients (the standard DFT contract;
/// for real input the upper half mirrors the lower under conjugate symmetry).
pub trait ForwardTransform {
    /// Block length this transform expects
    fn block_len(&self) -> usize;

    /// Transform a real-valued block into complex frequency coefficients
    ///
    /// # Errors
    ///
    /// Returns `DetectionError::TransformError` if `block.len()` does not
    /// match `block_len()` or the underlying transform fails
    fn forward(&self, block: &[f32]) -> Result<Vec<Complex32>, DetectionError>;
}

/// Default forward transform backed by `rustfft`
pub struct RustFftForward {
    fft: Arc<dyn Fft<f32>>,
    len: usize,
}

impl RustFftForward {
    /// Plan a forward FFT of the given block length
    ///
    /// # Errors
    ///
    /// Returns `DetectionError::InvalidInput` if `len` is zero
    pub fn new(len: usize) -> Result<Self, DetectionError> {
        if len == 0 {
            return Err(DetectionError::InvalidInput(
                "Transform length must be > 0".to_string(),
            ));
        }

        let mut planner = FftPlanner::new();
        let fft = planner.plan_fft_forward(len);

        Ok(Self { fft, len })
    }
}

impl std::fmt::Debug for RustFftForward {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RustFftForward").field("len", &self.len).finish()
    }
}

impl ForwardTransform for RustFftForward {
    fn block_len(&self) -> usize {
        self.len
    }

    fn forward(&self, block: &[f32]) -> Result<Vec<Complex32>, DetectionError> {
        if block.len() != self.len {
            return Err(DetectionError::TransformError(format!(
                "Block length {} does not match transform length {}",
                block.len(),
                self.len
            )));
        }

        let mut buffer: Vec<Complex32> =
            block.iter().map(|&x| Complex32::new(x, 0.0)).collect();
        self.fft.process(&mut buffer);

        Ok(buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_length_rejected() {
        assert!(RustFftForward::new(0).is_err());
    }

    #[test]
    fn test_block_length_mismatch_rejected() {
        let transform = RustFftForward::new(64).unwrap();
        let block = vec![0.0f32; 32];
        assert!(transform.forward(&block).is_err());
    }

    #[test]
    fn test_dc_input() {
        // A constant block has all its energy in bin 0, with magnitude N * a
        let n = 256;
        let amplitude = 0.5f32;
        let transform = RustFftForward::new(n).unwrap();

        let block = vec![amplitude; n];
        let coeffs = transform.forward(&block).unwrap();

        assert_eq!(coeffs.len(), n);
        assert!((coeffs[0].norm() - n as f32 * amplitude).abs() < 1e-3);
        for c in &coeffs[1..] {
            assert!(c.norm() < 1e-3, "Non-DC bin should be near zero, got {}", c.norm());
        }
    }

    #[test]
    fn test_sine_peaks_at_its_bin() {
        // A sine at exactly bin k concentrates energy at bins k and N-k
        let n = 512;
        let k = 8;
        let transform = RustFftForward::new(n).unwrap();

        let block: Vec<f32> = (0..n)
            .map(|i| (2.0 * std::f32::consts::PI * k as f32 * i as f32 / n as f32).sin())
            .collect();
        let coeffs = transform.forward(&block).unwrap();

        let magnitudes: Vec<f32> = coeffs[..n / 2].iter().map(|c| c.norm()).collect();
        let peak_bin = magnitudes
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.partial_cmp(b.1).unwrap())
            .map(|(i, _)| i)
            .unwrap();

        assert_eq!(peak_bin, k);
        // Sine of amplitude 1 at an exact bin: |X[k]| = N / 2
        assert!((magnitudes[k] - n as f32 / 2.0).abs() < 1e-2);
    }
}
