//! Onset thresholding
//!
//! Turns a flux value into a candidate onset time using the sensitivity
//! threshold.

/// Decide whether a frame's flux qualifies as an onset candidate
///
/// Returns the candidate's time in seconds when `flux > sensitivity`
/// (strict comparison), `None` otherwise. The time is anchored to the end
/// of the hop that produced the frame, `(frame_offset + hop_size) /
/// sample_rate`, not to the frame start; downstream consumers depend on
/// this exact anchor.
///
/// The sensitivity is compared as-is with no bounds validation; it is a
/// raw flux-units threshold tuned empirically per signal.
pub fn onset_time(
    flux: f32,
    frame_offset: usize,
    hop_size: usize,
    sample_rate: u32,
    sensitivity: f32,
) -> Option<f32> {
    if flux > sensitivity {
        Some((frame_offset + hop_size) as f32 / sample_rate as f32)
    } else {
        None
    }
}
