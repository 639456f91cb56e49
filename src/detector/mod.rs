//! Beat detection pipeline
//!
//! The detection pass pushes a signal through the stages in order:
//! segmentation, magnitude spectrum, spectral flux, thresholding, then
//! deduplication of the resulting candidate stream.

pub mod classify;
pub mod dedup;
pub mod flux;
pub mod segment;
pub mod spectrum;
pub mod threshold;

use serde::{Deserialize, Serialize};

use crate::config::DetectorConfig;
use crate::error::DetectionError;
use crate::transform::{ForwardTransform, RustFftForward};
use self::classify::{BeatClassifier, ConstantLabel};
use self::flux::SpectralFlux;

/// A detected beat
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeatEvent {
    /// Beat time in seconds, anchored to the end of the producing hop
    pub time: f32,

    /// Onset strength (spectral flux) of the beat, always >= 0
    pub strength: f32,

    /// Beat type label, `"beat"` from the default classifier
    #[serde(rename = "type")]
    pub kind: String,
}

/// Spectral-flux beat detector
///
/// Owns the previous-spectrum state of an in-progress pass, so one instance
/// runs one pass at a time; `detect` taking `&mut self` makes interleaved
/// passes on a shared instance unrepresentable. Concurrent analyses need
/// one detector per signal.
pub struct BeatDetector {
    config: DetectorConfig,
    transform: Box<dyn ForwardTransform>,
    classifier: Box<dyn BeatClassifier>,
    flux: SpectralFlux,
}

impl BeatDetector {
    /// Create a detector with the default FFT and classifier
    ///
    /// # Errors
    ///
    /// Returns `DetectionError::InvalidInput` if the configuration is
    /// invalid
    pub fn new(config: DetectorConfig) -> Result<Self, DetectionError> {
        config.validate()?;
        let transform = RustFftForward::new(config.frame_size)?;

        Ok(Self {
            config,
            transform: Box::new(transform),
            classifier: Box::new(ConstantLabel),
            flux: SpectralFlux::new(),
        })
    }

    /// Create a detector with a caller-supplied forward transform
    ///
    /// # Errors
    ///
    /// Returns `DetectionError::InvalidInput` if the configuration is
    /// invalid or the transform's block length differs from the configured
    /// frame size
    pub fn with_transform(
        config: DetectorConfig,
        transform: Box<dyn ForwardTransform>,
    ) -> Result<Self, DetectionError> {
        config.validate()?;

        if transform.block_len() != config.frame_size {
            return Err(DetectionError::InvalidInput(format!(
                "Transform block length ({}) does not match frame size ({})",
                transform.block_len(),
                config.frame_size
            )));
        }

        Ok(Self {
            config,
            transform,
            classifier: Box::new(ConstantLabel),
            flux: SpectralFlux::new(),
        })
    }

    /// Replace the beat classifier
    pub fn with_classifier(mut self, classifier: Box<dyn BeatClassifier>) -> Self {
        self.classifier = classifier;
        self
    }

    /// Run one detection pass over a signal
    ///
    /// Frames are processed in strictly increasing offset order; the
    /// previous-spectrum state is reset at the start of the pass, so a
    /// detector can be reused across signals without leakage. Returns the
    /// deduplicated beats, ascending by time.
    ///
    /// A signal shorter than one frame yields no beats.
    ///
    /// # Errors
    ///
    /// Returns `DetectionError::InvalidInput` for a zero sample rate, or a
    /// propagated `DetectionError::TransformError` if the forward transform
    /// fails
    pub fn detect(
        &mut self,
        samples: &[f32],
        sample_rate: u32,
    ) -> Result<Vec<BeatEvent>, DetectionError> {
        use std::time::Instant;
        let start_time = Instant::now();

        if sample_rate == 0 {
            return Err(DetectionError::InvalidInput(
                "Sample rate must be > 0".to_string(),
            ));
        }

        if samples.len() < self.config.frame_size {
            log::warn!(
                "Signal ({} samples) shorter than one frame ({}), no beats detected",
                samples.len(),
                self.config.frame_size
            );
            return Ok(Vec::new());
        }

        log::debug!(
            "Detecting beats: {} samples at {} Hz, frame={}, hop={}, sensitivity={}",
            samples.len(),
            sample_rate,
            self.config.frame_size,
            self.config.hop_size,
            self.config.sensitivity
        );

        // Fresh pass: drop any spectrum retained from a previous signal
        self.flux.reset();

        let mut candidates = Vec::new();

        for (offset, frame) in
            segment::frames(samples, self.config.frame_size, self.config.hop_size)
        {
            let magnitudes = spectrum::magnitude_spectrum(frame, self.transform.as_ref())?;
            let flux = self.flux.advance(magnitudes);

            if let Some(time) = threshold::onset_time(
                flux,
                offset,
                self.config.hop_size,
                sample_rate,
                self.config.sensitivity,
            ) {
                candidates.push(BeatEvent {
                    time,
                    strength: flux,
                    kind: self.classifier.classify(frame, sample_rate),
                });
            }
        }

        log::debug!("{} onset candidates above sensitivity", candidates.len());

        let beats = dedup::dedup_beats(candidates, self.config.min_beat_gap);

        log::debug!(
            "{} beats after deduplication ({:.2} ms)",
            beats.len(),
            start_time.elapsed().as_secs_f32() * 1000.0
        );

        Ok(beats)
    }
}
