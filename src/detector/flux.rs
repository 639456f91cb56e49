//! Spectral flux computation
//!
//! Maintains the single previous-spectrum slot and computes the onset
//! strength signal. Only positive frame-to-frame magnitude increases
//! contribute: onsets correspond to sudden spectral energy rises, and
//! decreases are ignored. This positive-only accumulation is what separates
//! spectral flux from a naive energy-difference detector.

/// Frame-to-frame spectral flux state
///
/// Holds at most one retained spectrum, the one from the immediately
/// preceding frame. The slot is scoped to a single detection pass; callers
/// reset it before starting a new pass.
#[derive(Debug, Default)]
pub struct SpectralFlux {
    previous: Option<Vec<f32>>,
}

impl SpectralFlux {
    /// Create flux state with no retained spectrum
    pub fn new() -> Self {
        Self { previous: None }
    }

    /// Clear the retained spectrum, e.g. at the start of a pass
    pub fn reset(&mut self) {
        self.previous = None;
    }

    /// Consume the next magnitude spectrum and return its onset strength
    ///
    /// The first spectrum of a pass yields flux 0. Afterwards the flux is
    /// the sum of positive per-bin increases over the retained spectrum,
    /// normalized by the bin count so values are comparable across frame
    /// sizes. The new spectrum then replaces the retained one
    /// unconditionally (no merging or averaging).
    pub fn advance(&mut self, spectrum: Vec<f32>) -> f32 {
        let flux = match &self.previous {
            Some(previous) if !spectrum.is_empty() => {
                let rises: f32 = spectrum
                    .iter()
                    .zip(previous.iter())
                    .map(|(&current, &prior)| (current - prior).max(0.0))
                    .sum();
                rises / spectrum.len() as f32
            }
            _ => 0.0,
        };

        self.previous = Some(spectrum);

        flux
    }
}
