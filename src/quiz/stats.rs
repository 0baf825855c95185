//! Score and response-time tracking
//!
//! Features:
//! - Correct / total attempt counts
//! - Running average response time (rounded to 2 decimals every step)
//! - One chart point per 5 attempts

use serde::Serialize;

/// Attempts per chart bucket
pub const BUCKET_SIZE: u32 = 5;

/// Snapshot of the running score
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct AttemptStats {
    pub correct: u32,
    pub total: u32,
    pub average_secs: f64,
}

/// Average response time at the end of a bucket
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct TimeSeriesPoint {
    pub bucket: u32,
    pub average_secs: f64,
}

/// Round to two decimals, as shown on screen
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Accumulates attempt statistics for a session
#[derive(Clone, Debug, Default)]
pub struct StatsTracker {
    stats: AttemptStats,
    series: Vec<TimeSeriesPoint>,
}

impl StatsTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one submitted answer and return the updated stats
    pub fn record(&mut self, is_correct: bool, elapsed_secs: f64) -> AttemptStats {
        let previous_total = self.stats.total;
        let previous_avg = self.stats.average_secs;

        self.stats.total += 1;
        if is_correct {
            self.stats.correct += 1;
        }

        self.stats.average_secs = round2(
            (previous_avg * previous_total as f64 + elapsed_secs) / (previous_total as f64 + 1.0),
        );

        // Bucket points carry the average from before this attempt
        if self.stats.total % BUCKET_SIZE == 0 {
            self.series.push(TimeSeriesPoint {
                bucket: self.stats.total / BUCKET_SIZE,
                average_secs: previous_avg,
            });
        }

        self.stats
    }

    pub fn stats(&self) -> AttemptStats {
        self.stats
    }

    pub fn series(&self) -> &[TimeSeriesPoint] {
        &self.series
    }

    pub fn reset(&mut self) {
        self.stats = AttemptStats::default();
        self.series.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_five_correct_attempts() {
        let mut tracker = StatsTracker::new();
        for _ in 0..5 {
            tracker.record(true, 2.0);
        }

        let stats = tracker.stats();
        assert_eq!(stats.total, 5);
        assert_eq!(stats.correct, 5);
        assert_eq!(stats.average_secs, 2.0);
        assert_eq!(
            tracker.series(),
            &[TimeSeriesPoint {
                bucket: 1,
                average_secs: 2.0
            }]
        );
    }

    #[test]
    fn test_incorrect_then_correct() {
        let mut tracker = StatsTracker::new();
        tracker.record(false, 3.0);
        let stats = tracker.record(true, 1.0);

        assert_eq!(stats.total, 2);
        assert_eq!(stats.correct, 1);
        assert_eq!(stats.average_secs, 2.0);
        assert!(tracker.series().is_empty());
    }

    #[test]
    fn test_bucket_point_uses_previous_average() {
        let mut tracker = StatsTracker::new();
        for _ in 0..4 {
            tracker.record(true, 1.0);
        }
        let stats = tracker.record(true, 6.0);

        assert_eq!(stats.average_secs, 2.0);
        assert_eq!(tracker.series()[0].average_secs, 1.0);
    }

    #[test]
    fn test_average_rounds_each_step() {
        let mut tracker = StatsTracker::new();
        tracker.record(true, 1.0);
        tracker.record(true, 1.0);
        let stats = tracker.record(true, 2.0);
        // 4/3 = 1.333.. shown as 1.33
        assert_eq!(stats.average_secs, 1.33);

        // (1.33 * 3 + 1.1) / 4 = 1.2725, not the unrounded 1.275
        let stats = tracker.record(true, 1.1);
        assert_eq!(stats.average_secs, 1.27);
    }

    #[test]
    fn test_series_buckets_follow_insertion_order() {
        let mut tracker = StatsTracker::new();
        for i in 0..15 {
            tracker.record(i % 2 == 0, 1.5);
        }
        let buckets: Vec<u32> = tracker.series().iter().map(|p| p.bucket).collect();
        assert_eq!(buckets, vec![1, 2, 3]);
    }

    #[test]
    fn test_correct_never_exceeds_total() {
        let mut tracker = StatsTracker::new();
        let pattern = [true, false, false, true, true, false, true];
        for (i, &correct) in pattern.iter().cycle().take(40).enumerate() {
            let stats = tracker.record(correct, i as f64 * 0.37);
            assert!(stats.correct <= stats.total);
        }
    }

    #[test]
    fn test_reset() {
        let mut tracker = StatsTracker::new();
        for _ in 0..7 {
            tracker.record(true, 2.5);
        }
        tracker.reset();

        let stats = tracker.stats();
        assert_eq!(stats.correct, 0);
        assert_eq!(stats.total, 0);
        assert_eq!(stats.average_secs, 0.0);
        assert!(tracker.series().is_empty());
    }
}
