//! Example: Detect beats in a synthetic kick pattern
//!
//! This example demonstrates how to run a detection pass and print the
//! resulting beat events.

use fluxbeat::{detect_beats, DetectorConfig};

/// 4-on-floor kick pattern: exponential-decay bursts every beat
fn kick_pattern(duration_seconds: f32, bpm: f32, sample_rate: f32) -> Vec<f32> {
    let num_samples = (duration_seconds * sample_rate) as usize;
    let mut samples = vec![0.0f32; num_samples];

    let beat_interval = (60.0 / bpm * sample_rate) as usize;
    let kick_samples = (0.1 * sample_rate) as usize;

    let mut pos = 0;
    while pos < num_samples {
        let end = (pos + kick_samples).min(num_samples);
        for i in pos..end {
            let t = (i - pos) as f32 / kick_samples as f32;
            samples[i] = 0.8 * (-t * 5.0).exp();
        }
        pos += beat_interval;
    }

    samples
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logger
    env_logger::init();

    // 8 seconds of 4-on-floor at 124 BPM
    let sample_rate = 44100;
    let samples = kick_pattern(8.0, 124.0, sample_rate as f32);

    // Configure detection
    let config = DetectorConfig {
        sensitivity: 0.05,
        ..Default::default()
    };

    // Detect
    let beats = detect_beats(&samples, sample_rate, config)?;

    // Print results
    println!("Detected {} beats:", beats.len());
    for beat in &beats {
        println!("  {:.3}s  strength {:.3}  [{}]", beat.time, beat.strength, beat.kind);
    }

    Ok(())
}
