//! # Fluxbeat
//!
//! A spectral-flux beat detection engine for audio analysis, turning a raw
//! audio signal into a time-ordered sequence of beat events.
//!
//! ## Features
//!
//! - **Spectral flux onset strength**: positive frame-to-frame magnitude
//!   rises, normalized per bin
//! - **Sensitivity thresholding**: raw flux threshold, tunable per signal
//! - **Temporal deduplication**: greedy minimum-gap merge keeping the
//!   strongest beat in each window
//! - **Injected transform**: FFT consumed through a trait, with a
//!   `rustfft`-backed default
//!
//! ## Quick Start
//!
//! ```no_run
//! use fluxbeat::{detect_beats, DetectorConfig};
//!
//! // Load audio samples (mono, f32, normalized)
//! let samples: Vec<f32> = vec![]; // Your audio data
//! let sample_rate = 44100;
//!
//! let beats = detect_beats(&samples, sample_rate, DetectorConfig::default())?;
//!
//! for beat in &beats {
//!     println!("{:.3}s  strength {:.3}  [{}]", beat.time, beat.strength, beat.kind);
//! }
//! # Ok::<(), fluxbeat::DetectionError>(())
//! ```
//!
//! ## Architecture
//!
//! The detection pass follows this flow:
//!
//! ```text
//! Signal → Frames → Magnitude Spectra → Spectral Flux → Threshold → Dedup → Beats
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod detector;
pub mod error;
pub mod transform;

// Re-export main types
pub use config::DetectorConfig;
pub use detector::classify::{BeatClassifier, ConstantLabel, BEAT_LABEL};
pub use detector::{BeatDetector, BeatEvent};
pub use error::DetectionError;
pub use transform::{ForwardTransform, RustFftForward};

/// Detect beats in a signal
///
/// Convenience wrapper that builds a [`BeatDetector`] with the default FFT
/// and classifier and runs a single detection pass.
///
/// # Arguments
///
/// * `samples` - Mono audio samples, normalized to [-1.0, 1.0]
/// * `sample_rate` - Sample rate in Hz (typically 44100 or 48000)
/// * `config` - Detection configuration parameters
///
/// # Returns
///
/// Deduplicated beat events, ascending by time. A signal shorter than one
/// frame yields an empty vector, not an error.
///
/// # Errors
///
/// Returns `DetectionError` for an invalid configuration, a zero sample
/// rate, or a forward-transform failure.
///
/// # Example
///
/// ```no_run
/// use fluxbeat::{detect_beats, DetectorConfig};
///
/// let samples = vec![0.0f32; 44100 * 30]; // 30 seconds of silence
/// let beats = detect_beats(&samples, 44100, DetectorConfig::default())?;
/// assert!(beats.is_empty());
/// # Ok::<(), fluxbeat::DetectionError>(())
/// ```
pub fn detect_beats(
    samples: &[f32],
    sample_rate: u32,
    config: DetectorConfig,
) -> Result<Vec<BeatEvent>, DetectionError> {
    let mut detector = BeatDetector::new(config)?;
    detector.detect(samples, sample_rate)
}
