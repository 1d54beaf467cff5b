//! Score summary and feedback banding
//!
//! Pure derivations from a finished quiz: accuracy percentage, the
//! feedback message band, and the color band used by the results and
//! leaderboard screens. No state is kept here.

use serde::{Deserialize, Serialize};

/// Feedback band chosen from the accuracy percentage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreBand {
    /// Every question answered correctly
    Perfect,
    /// At least 80 percent
    Excellent,
    /// At least 60 percent
    Good,
    /// At least 40 percent
    Fair,
    /// Below 40 percent
    Encouragement,
}

impl ScoreBand {
    /// Picks the band for a score out of a total
    pub fn from_score(score: u32, total: u32) -> Self {
        let pct = percentage(score, total);
        if pct >= 100.0 {
            Self::Perfect
        } else if pct >= 80.0 {
            Self::Excellent
        } else if pct >= 60.0 {
            Self::Good
        } else if pct >= 40.0 {
            Self::Fair
        } else {
            Self::Encouragement
        }
    }

    /// The feedback message shown on the results screen
    pub fn message(self) -> &'static str {
        match self {
            Self::Perfect => "Perfect Score! Legendary!",
            Self::Excellent => "Excellent! You crushed it!",
            Self::Good => "Good Job! Keep it up!",
            Self::Fair => "Not bad! Keep practicing!",
            Self::Encouragement => "Keep studying! You'll get better!",
        }
    }
}

/// Color classification for a score, used by results and leaderboard rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreColor {
    /// At least 80 percent
    Green,
    /// At least 50 percent
    Yellow,
    /// Below 50 percent
    Red,
}

impl ScoreColor {
    /// Picks the color band for a score out of a total
    pub fn from_score(score: u32, total: u32) -> Self {
        let pct = percentage(score, total);
        if pct >= 80.0 {
            Self::Green
        } else if pct >= 50.0 {
            Self::Yellow
        } else {
            Self::Red
        }
    }
}

/// Aggregate statistics derived from a finished quiz
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    /// Points scored
    pub score: u32,
    /// Number of questions played
    pub total: u32,
    /// Correctly answered questions
    pub correct_count: u32,
    /// Wrong or timed-out questions
    pub wrong_count: u32,
    /// Accuracy as a rounded whole percentage
    pub accuracy_pct: u32,
    /// Feedback message band
    pub band: ScoreBand,
    /// Color classification
    pub color: ScoreColor,
    /// Whole seconds the quiz took
    pub elapsed_seconds: u64,
}

impl Summary {
    /// Derives the summary from final session counters
    pub fn from_results(
        score: u32,
        total: u32,
        correct_count: u32,
        wrong_count: u32,
        elapsed_seconds: u64,
    ) -> Self {
        Self {
            score,
            total,
            correct_count,
            wrong_count,
            accuracy_pct: percentage(score, total).round() as u32,
            band: ScoreBand::from_score(score, total),
            color: ScoreColor::from_score(score, total),
            elapsed_seconds,
        }
    }

    /// The feedback message for this summary's band
    pub fn message(&self) -> &'static str {
        self.band.message()
    }
}

/// Score as a percentage of the total; zero when the total is zero
fn percentage(score: u32, total: u32) -> f64 {
    if total == 0 {
        return 0.0;
    }
    f64::from(score) / f64::from(total) * 100.0
}

/// Formats whole seconds as an `m:ss` clock string
pub fn format_elapsed(seconds: u64) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn test_band_thresholds() {
        assert_eq!(ScoreBand::from_score(10, 10), ScoreBand::Perfect);
        assert_eq!(ScoreBand::from_score(8, 10), ScoreBand::Excellent);
        assert_eq!(ScoreBand::from_score(6, 10), ScoreBand::Good);
        assert_eq!(ScoreBand::from_score(4, 10), ScoreBand::Fair);
        assert_eq!(ScoreBand::from_score(3, 10), ScoreBand::Encouragement);
        assert_eq!(ScoreBand::from_score(0, 10), ScoreBand::Encouragement);
    }

    #[test]
    fn test_band_boundaries_are_inclusive() {
        // Exactly at each threshold lands in the higher band.
        assert_eq!(ScoreBand::from_score(4, 5), ScoreBand::Excellent);
        assert_eq!(ScoreBand::from_score(3, 5), ScoreBand::Good);
        assert_eq!(ScoreBand::from_score(2, 5), ScoreBand::Fair);
    }

    #[test]
    fn test_color_thresholds() {
        assert_eq!(ScoreColor::from_score(8, 10), ScoreColor::Green);
        assert_eq!(ScoreColor::from_score(5, 10), ScoreColor::Yellow);
        assert_eq!(ScoreColor::from_score(4, 10), ScoreColor::Red);
        assert_eq!(ScoreColor::from_score(10, 10), ScoreColor::Green);
    }

    #[test]
    fn test_summary_accuracy_rounding() {
        let summary = Summary::from_results(2, 3, 2, 1, 45);
        assert_eq!(summary.accuracy_pct, 67);

        let summary = Summary::from_results(1, 3, 1, 2, 45);
        assert_eq!(summary.accuracy_pct, 33);

        let summary = Summary::from_results(1, 8, 1, 7, 45);
        assert_eq!(summary.accuracy_pct, 13);
    }

    #[test]
    fn test_summary_zero_total() {
        let summary = Summary::from_results(0, 0, 0, 0, 0);
        assert_eq!(summary.accuracy_pct, 0);
        assert_eq!(summary.band, ScoreBand::Encouragement);
        assert_eq!(summary.color, ScoreColor::Red);
    }

    #[test]
    fn test_summary_message_matches_band() {
        let summary = Summary::from_results(10, 10, 10, 0, 120);
        assert_eq!(summary.message(), "Perfect Score! Legendary!");
        assert_eq!(summary.band, ScoreBand::Perfect);
        assert_eq!(summary.color, ScoreColor::Green);
    }

    #[test]
    fn test_format_elapsed() {
        assert_eq!(format_elapsed(0), "0:00");
        assert_eq!(format_elapsed(9), "0:09");
        assert_eq!(format_elapsed(65), "1:05");
        assert_eq!(format_elapsed(600), "10:00");
    }
}
