//! Beat deduplication
//!
//! Merges densely packed onset candidates so that only one beat, the
//! strongest, survives within a minimum time window.

use super::BeatEvent;

/// Deduplicate a time-ordered candidate stream
///
/// Greedy single forward pass: the first candidate is always kept. Each
/// subsequent candidate is compared against the currently kept last event:
/// beyond `min_gap` seconds it is appended; within the gap it replaces the
/// last event outright if it is stronger (time and strength both move),
/// otherwise it is discarded.
///
/// The comparison window rides the currently kept event rather than a fixed
/// time grid, so a chain of closely spaced strong candidates can repeatedly
/// replace the last event and slide the effective anchor forward, letting
/// the minimum gap drift relative to the first candidate of the chain.
/// Downstream consumers depend on this exact merge order; do not swap in
/// fixed-grid bucketing.
///
/// Consecutive output times always differ by more than `min_gap`. An empty
/// candidate stream yields an empty output.
pub fn dedup_beats(candidates: Vec<BeatEvent>, min_gap: f32) -> Vec<BeatEvent> {
    let mut kept: Vec<BeatEvent> = Vec::with_capacity(candidates.len());

    for candidate in candidates {
        match kept.last_mut() {
            None => kept.push(candidate),
            Some(last) => {
                if candidate.time - last.time > min_gap {
                    kept.push(candidate);
                } else if candidate.strength > last.strength {
                    *last = candidate;
                }
            }
        }
    }

    kept
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(time: f32, strength: f32) -> BeatEvent {
        BeatEvent {
            time,
            strength,
            kind: "beat".to_string(),
        }
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        assert!(dedup_beats(vec![], 0.08).is_empty());
    }

    #[test]
    fn test_single_candidate_kept() {
        let beats = dedup_beats(vec![event(0.5, 1.0)], 0.08);
        assert_eq!(beats.len(), 1);
        assert_eq!(beats[0].time, 0.5);
    }

    #[test]
    fn test_stronger_candidate_replaces_within_gap() {
        // 0.15 - 0.10 = 0.05 <= 0.08 and 0.9 > 0.6: replacement;
        // 0.30 - 0.15 = 0.15 > 0.08: appended
        let candidates = vec![event(0.10, 0.6), event(0.15, 0.9), event(0.30, 0.4)];
        let beats = dedup_beats(candidates, 0.08);

        assert_eq!(beats.len(), 2);
        assert_eq!(beats[0].time, 0.15);
        assert_eq!(beats[0].strength, 0.9);
        assert_eq!(beats[1].time, 0.30);
        assert_eq!(beats[1].strength, 0.4);
    }

    #[test]
    fn test_weaker_candidate_discarded_within_gap() {
        let candidates = vec![event(0.10, 0.9), event(0.15, 0.6)];
        let beats = dedup_beats(candidates, 0.08);

        assert_eq!(beats.len(), 1);
        assert_eq!(beats[0].time, 0.10);
        assert_eq!(beats[0].strength, 0.9);
    }

    #[test]
    fn test_chained_replacement_slides_the_anchor() {
        // Each candidate is within the gap of the *current* last event, not
        // the original one, so the anchor slides: 0.10 -> 0.17 -> 0.24, and
        // 0.24 is never compared against 0.10.
        let candidates = vec![event(0.10, 0.5), event(0.17, 0.6), event(0.24, 0.7)];
        let beats = dedup_beats(candidates, 0.08);

        assert_eq!(beats.len(), 1);
        assert_eq!(beats[0].time, 0.24);
        assert_eq!(beats[0].strength, 0.7);
    }

    #[test]
    fn test_no_pair_within_gap_survives() {
        let candidates = vec![
            event(0.10, 0.3),
            event(0.15, 0.8),
            event(0.21, 0.2),
            event(0.50, 0.4),
            event(0.55, 0.1),
        ];
        let beats = dedup_beats(candidates, 0.08);

        for pair in beats.windows(2) {
            assert!(
                pair[1].time - pair[0].time > 0.08,
                "Output beats at {} and {} are within the minimum gap",
                pair[0].time,
                pair[1].time
            );
        }
    }

    #[test]
    fn test_candidates_beyond_gap_all_kept() {
        let candidates = vec![event(0.1, 0.5), event(0.3, 0.5), event(0.5, 0.5)];
        let beats = dedup_beats(candidates, 0.08);
        assert_eq!(beats.len(), 3);
    }
}
