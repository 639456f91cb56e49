//! Magnitude spectrum extraction
//!
//! Converts an analysis frame into a half-spectrum magnitude array via the
//! injected forward transform.

use crate::error::DetectionError;
use crate::transform::ForwardTransform;

/// Compute the half-spectrum magnitudes of one frame
///
/// Runs the forward transform and keeps `sqrt(re^2 + im^2)` for the first
/// `frame.len() / 2` coefficients; for a real input the bins beyond the
/// midpoint are redundant under conjugate symmetry and are discarded.
///
/// No length coercion happens here: a frame that does not match the
/// transform's block length is the transform's error to raise, and it is
/// propagated unchanged.
///
/// # Errors
///
/// Returns `DetectionError::TransformError` if the forward transform fails
pub fn magnitude_spectrum(
    frame: &[f32],
    transform: &dyn ForwardTransform,
) -> Result<Vec<f32>, DetectionError> {
    let coeffs = transform.forward(frame)?;

    Ok(coeffs[..frame.len() / 2].iter().map(|c| c.norm()).collect())
}
