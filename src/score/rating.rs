use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::ScorecardError;

/// Holes per segment; an 18 hole tee is ranked as two 9 hole segments or
/// one 18 hole permutation.
pub const SEGMENT_HOLES: usize = 9;

/// Difficulty data for one tee box set, as handed to the engine by the
/// course catalog.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TeeRating {
    pub rating: f64,
    pub slope: i32,
    pub hole_count: usize,
    pub hole_handicap_rank: Vec<i32>,
    pub hole_par: Vec<i32>,
}

impl TeeRating {
    /// Ranks `1..=hole_count` in hole order.
    #[must_use]
    pub fn sequential_ranks(hole_count: usize) -> Vec<i32> {
        (1..=hole_count)
            .map(|rank| i32::try_from(rank).unwrap_or(i32::MAX))
            .collect()
    }

    #[must_use]
    pub fn par_total(&self) -> i32 {
        self.hole_par.iter().sum()
    }

    #[must_use]
    pub fn front_par(&self) -> i32 {
        self.hole_par.iter().take(SEGMENT_HOLES).sum()
    }

    #[must_use]
    pub fn back_par(&self) -> i32 {
        self.hole_par.iter().skip(SEGMENT_HOLES).sum()
    }

    /// Checks hole count, list lengths and rank layout. Scoring functions
    /// never call this; bad rank data is reported, not repaired.
    pub fn validate(&self) -> Result<(), ScorecardError> {
        if self.hole_count != SEGMENT_HOLES && self.hole_count != SEGMENT_HOLES * 2 {
            return Err(ScorecardError::InvalidTee(format!(
                "hole count must be 9 or 18, got {}",
                self.hole_count
            )));
        }
        if self.hole_par.len() != self.hole_count || self.hole_handicap_rank.len() != self.hole_count
        {
            return Err(ScorecardError::InvalidTee(format!(
                "expected {} pars and ranks, got {} pars and {} ranks",
                self.hole_count,
                self.hole_par.len(),
                self.hole_handicap_rank.len()
            )));
        }

        let max_rank = i32::try_from(self.hole_count).unwrap_or(i32::MAX);
        if let Some(rank) = self
            .hole_handicap_rank
            .iter()
            .find(|rank| **rank < 1 || **rank > max_rank)
        {
            return Err(ScorecardError::InvalidTee(format!(
                "hole handicap rank {rank} is outside 1..={max_rank}"
            )));
        }

        for (segment_idx, segment) in self.hole_handicap_rank.chunks(SEGMENT_HOLES).enumerate() {
            let mut seen = HashSet::new();
            if let Some(dup) = segment.iter().find(|rank| !seen.insert(**rank)) {
                return Err(ScorecardError::InvalidTee(format!(
                    "duplicate hole handicap rank {dup} in holes {}..={}",
                    segment_idx * SEGMENT_HOLES + 1,
                    segment_idx * SEGMENT_HOLES + segment.len()
                )));
            }
        }

        if self.hole_count > SEGMENT_HOLES {
            let mut seen = HashSet::new();
            let full_permutation = self.hole_handicap_rank.iter().all(|rank| seen.insert(*rank));
            let split_nines = self.hole_handicap_rank.iter().all(|rank| *rank <= 9);
            if !full_permutation && !split_nines {
                return Err(ScorecardError::InvalidTee(
                    "18 hole ranks must be a 1..=18 permutation or 1..=9 per nine".to_string(),
                ));
            }
        }
        Ok(())
    }
}
