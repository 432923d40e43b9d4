//! Pure handicap arithmetic. Two rating-system variants share one signature
//! set; nothing in here touches storage.

/// Neutral slope for a course of standard difficulty.
pub const NEUTRAL_SLOPE: f64 = 113.0;

/// A scoring record never holds more than this many differentials.
pub const MAX_RECORD_LEN: usize = 20;

/// How many of the lowest differentials count, indexed by record length - 1.
const CURRENT_DIFFERENTIALS_USED: [usize; MAX_RECORD_LEN] = [
    1, 1, 1, 1, 1, 2, 2, 2, 3, 3, 4, 4, 5, 5, 6, 6, 7, 8, 9, 10,
];
const LEGACY_DIFFERENTIALS_USED: [usize; MAX_RECORD_LEN] = [
    1, 1, 1, 1, 2, 2, 3, 3, 4, 4, 5, 5, 6, 6, 7, 7, 8, 9, 10, 10,
];

const CURRENT_ADJUSTMENT_FACTOR: f64 = 0.96;
const LEGACY_ADJUSTMENT_FACTOR: f64 = 0.96;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HandicapSystem {
    Current,
    Legacy,
}

impl HandicapSystem {
    pub fn from_legacy_flag(use_legacy: bool) -> Self {
        if use_legacy {
            HandicapSystem::Legacy
        } else {
            HandicapSystem::Current
        }
    }

    fn differentials_used(self, record_len: usize) -> usize {
        let idx = record_len.min(MAX_RECORD_LEN) - 1;
        match self {
            HandicapSystem::Current => CURRENT_DIFFERENTIALS_USED[idx],
            HandicapSystem::Legacy => LEGACY_DIFFERENTIALS_USED[idx],
        }
    }

    fn adjustment_factor(self) -> f64 {
        match self {
            HandicapSystem::Current => CURRENT_ADJUSTMENT_FACTOR,
            HandicapSystem::Legacy => LEGACY_ADJUSTMENT_FACTOR,
        }
    }

    /// `(adjusted_gross - rating) * 113 / slope`. Callers round only at
    /// display time.
    pub fn score_differential(self, rating: f64, slope: i64, adjusted_gross: i64) -> f64 {
        (adjusted_gross as f64 - rating) * NEUTRAL_SLOPE / slope as f64
    }

    /// Mean of the lowest differentials in the record, most-recent first,
    /// scaled by the variant's adjustment factor. `None` on an empty record.
    pub fn handicap_index(self, record: &[f64]) -> Option<f64> {
        if record.is_empty() {
            return None;
        }
        let len = record.len().min(MAX_RECORD_LEN);
        let used = self.differentials_used(len);

        let mut sorted: Vec<f64> = record[..len].to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        let sum: f64 = sorted.iter().take(used).sum();
        Some(sum / used as f64 * self.adjustment_factor())
    }

    /// The index translated to a specific tee.
    pub fn course_handicap(self, par: i64, rating: f64, slope: i64, handicap_index: f64) -> f64 {
        handicap_index * slope as f64 / NEUTRAL_SLOPE + (rating - par as f64)
    }

    /// Strokes received on a hole: one per full 18 of the course handicap,
    /// plus one more on the holes whose stroke index is within the remainder.
    pub fn hole_handicap_strokes(self, stroke_index: i64, course_handicap: i64) -> i64 {
        if course_handicap <= 0 {
            return 0;
        }
        course_handicap / 18 + i64::from(stroke_index <= course_handicap % 18)
    }

    /// Equitable Stroke Control: gross capped at par + strokes + 2. A cap,
    /// never an inflation.
    pub fn hole_adjusted_gross_score(
        self,
        par: i64,
        stroke_index: i64,
        gross: i64,
        course_handicap: i64,
    ) -> i64 {
        let ceiling = par + self.hole_handicap_strokes(stroke_index, course_handicap) + 2;
        gross.min(ceiling)
    }
}
