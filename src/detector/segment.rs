//! Frame segmentation
//!
//! Slices a signal into overlapping fixed-length analysis windows.

/// Iterate over analysis frames of a signal
///
/// Yields `(offset, frame)` pairs, one frame starting at each multiple of
/// `hop_size` for as long as a full frame fits (`offset + frame_size <=
/// samples.len()`). A signal shorter than one frame yields nothing.
///
/// The iterator is lazy and borrows the signal; calling this again restarts
/// segmentation from the beginning.
///
/// # Arguments
///
/// * `samples` - Audio samples (mono, normalized to [-1.0, 1.0])
/// * `frame_size` - Frame size in samples (typically 2048)
/// * `hop_size` - Hop size between frames (typically 512)
pub fn frames(
    samples: &[f32],
    frame_size: usize,
    hop_size: usize,
) -> impl Iterator<Item = (usize, &[f32])> {
    (0..)
        .map(move |k| k * hop_size)
        .take_while(move |&offset| offset + frame_size <= samples.len())
        .map(move |offset| (offset, &samples[offset..offset + frame_size]))
}
