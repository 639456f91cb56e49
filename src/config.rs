//! Configuration parameters for beat detection

use crate::error::DetectionError;

/// Beat detection configuration parameters
#[derive(Debug, Clone)]
pub struct DetectorConfig {
    /// Minimum spectral flux for a frame to qualify as an onset candidate
    /// (default: 0.5)
    ///
    /// This is a raw threshold in flux units, not a normalized probability.
    /// Its effective range depends on input amplitude and on the frame/hop
    /// choice, so callers tune it empirically per signal.
    pub sensitivity: f32,

    /// Frame size for spectral analysis (default: 2048)
    /// Must be even; the retained half-spectrum has `frame_size / 2` bins
    pub frame_size: usize,

    /// Hop size between consecutive frames (default: 512)
    pub hop_size: usize,

    /// Minimum time gap between reported beats in seconds (default: 0.08)
    /// Candidates closer together than this are merged, keeping the stronger
    pub min_beat_gap: f32,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            sensitivity: 0.5,
            frame_size: 2048,
            hop_size: 512,
            min_beat_gap: 0.08,
        }
    }
}

impl DetectorConfig {
    /// Validate configuration invariants
    ///
    /// # Errors
    ///
    /// Returns `DetectionError::InvalidInput` if:
    /// - `frame_size` is zero or odd
    /// - `hop_size` is zero
    /// - `hop_size` exceeds `frame_size`
    pub fn validate(&self) -> Result<(), DetectionError> {
        if self.frame_size == 0 {
            return Err(DetectionError::InvalidInput(
                "Frame size must be > 0".to_string(),
            ));
        }

        if self.frame_size % 2 != 0 {
            return Err(DetectionError::InvalidInput(format!(
                "Frame size must be even to yield a half-spectrum, got {}",
                self.frame_size
            )));
        }

        if self.hop_size == 0 {
            return Err(DetectionError::InvalidInput(
                "Hop size must be > 0".to_string(),
            ));
        }

        if self.hop_size > self.frame_size {
            return Err(DetectionError::InvalidInput(format!(
                "Hop size ({}) must not exceed frame size ({})",
                self.hop_size, self.frame_size
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DetectorConfig::default();
        assert_eq!(config.sensitivity, 0.5);
        assert_eq!(config.frame_size, 2048);
        assert_eq!(config.hop_size, 512);
        assert_eq!(config.min_beat_gap, 0.08);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_frame_size() {
        let config = DetectorConfig {
            frame_size: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_odd_frame_size() {
        let config = DetectorConfig {
            frame_size: 2047,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_hop_size() {
        let config = DetectorConfig {
            hop_size: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_hop_larger_than_frame() {
        let config = DetectorConfig {
            frame_size: 512,
            hop_size: 1024,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_accepts_hop_equal_to_frame() {
        let config = DetectorConfig {
            frame_size: 1024,
            hop_size: 1024,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }
}
