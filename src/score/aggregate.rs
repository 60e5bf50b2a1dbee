use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

use crate::score::allocation::{full_round_ranks, stroke_allocation};
use crate::score::rating::SEGMENT_HOLES;

/// Gross strokes of a hole that has not been played yet.
pub const UNSCORED: i32 = 0;

/// Net score of a hole that cannot be scored. Sits far outside any real
/// golf score so it never collides with one.
pub const NET_SCORE_NOT_AVAILABLE: i32 = 10_000;

/// Scorecard marker for the handicap strokes received on a hole.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrokeMarker {
    None,
    Dot,
    Colon,
}

impl StrokeMarker {
    #[must_use]
    pub fn from_allocation(allocation: i32) -> Self {
        match allocation {
            i32::MIN..=0 => Self::None,
            1 => Self::Dot,
            _ => Self::Colon,
        }
    }

    #[must_use]
    pub fn prefix(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Dot => ".",
            Self::Colon => ":",
        }
    }
}

impl fmt::Display for StrokeMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.prefix())
    }
}

/// Recovers the number from a marked display string (`":5"` -> 5).
#[must_use]
pub fn strip_marker(display: &str) -> Option<i32> {
    display
        .trim_start_matches([':', '.'])
        .parse::<i32>()
        .ok()
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RoundTotals {
    pub out_strokes: i32,
    pub in_strokes: i32,
    pub total_strokes: i32,
    pub net_total: i32,
}

/// One player's strokes against a tee's hole ranks, snapshotted for a
/// single scorecard computation.
#[derive(Debug, Clone)]
pub struct PlayerCard<'a> {
    strokes: Vec<i32>,
    hole_handicap_rank: Cow<'a, [i32]>,
    course_handicap: i32,
}

impl<'a> PlayerCard<'a> {
    #[must_use]
    pub fn new(strokes: Vec<i32>, hole_handicap_rank: &'a [i32], course_handicap: i32) -> Self {
        Self {
            strokes,
            hole_handicap_rank: full_round_ranks(hole_handicap_rank),
            course_handicap,
        }
    }

    #[must_use]
    pub fn course_handicap(&self) -> i32 {
        self.course_handicap
    }

    #[must_use]
    pub fn strokes(&self, hole_index: usize) -> i32 {
        self.strokes.get(hole_index).copied().unwrap_or(UNSCORED)
    }

    /// Handicap strokes on a hole; 0 for a hole outside the tee.
    #[must_use]
    pub fn allocation(&self, hole_index: usize) -> i32 {
        let hole_count = i32::try_from(self.hole_handicap_rank.len()).unwrap_or(i32::MAX);
        self.hole_handicap_rank
            .get(hole_index)
            .map_or(0, |rank| stroke_allocation(*rank, self.course_handicap, hole_count))
    }

    /// Gross minus allocation, or [`NET_SCORE_NOT_AVAILABLE`] for an
    /// unscored hole. Net scores at or below zero are returned as is.
    #[must_use]
    pub fn hole_net_score(&self, hole_index: usize) -> i32 {
        let strokes = self.strokes(hole_index);
        if strokes == UNSCORED {
            return NET_SCORE_NOT_AVAILABLE;
        }
        strokes - self.allocation(hole_index)
    }

    /// Net score with the historic clamp: anything at or below zero is
    /// reported as not available. Only for data that must match old
    /// scorecards exactly.
    #[must_use]
    pub fn hole_net_score_clamped(&self, hole_index: usize) -> i32 {
        match self.hole_net_score(hole_index) {
            net if net <= 0 => NET_SCORE_NOT_AVAILABLE,
            net => net,
        }
    }

    #[must_use]
    pub fn marker(&self, hole_index: usize) -> StrokeMarker {
        StrokeMarker::from_allocation(self.allocation(hole_index))
    }

    /// Gross strokes with the allocation marker, empty when unscored.
    #[must_use]
    pub fn hole_display(&self, hole_index: usize) -> String {
        let strokes = self.strokes(hole_index);
        if strokes == UNSCORED {
            return String::new();
        }
        format!("{}{strokes}", self.marker(hole_index))
    }

    /// Net strokes with the allocation marker, empty when unscored.
    #[must_use]
    pub fn hole_net_display(&self, hole_index: usize) -> String {
        match self.hole_net_score(hole_index) {
            NET_SCORE_NOT_AVAILABLE => String::new(),
            net => format!("{}{net}", self.marker(hole_index)),
        }
    }

    #[must_use]
    pub fn out_strokes(&self) -> i32 {
        self.strokes.iter().take(SEGMENT_HOLES).sum()
    }

    #[must_use]
    pub fn in_strokes(&self) -> i32 {
        self.strokes
            .iter()
            .skip(SEGMENT_HOLES)
            .take(SEGMENT_HOLES)
            .sum()
    }

    #[must_use]
    pub fn total_strokes(&self) -> i32 {
        self.out_strokes() + self.in_strokes()
    }

    #[must_use]
    pub fn net_total(&self) -> i32 {
        self.total_strokes() - self.course_handicap
    }

    #[must_use]
    pub fn totals(&self) -> RoundTotals {
        RoundTotals {
            out_strokes: self.out_strokes(),
            in_strokes: self.in_strokes(),
            total_strokes: self.total_strokes(),
            net_total: self.net_total(),
        }
    }
}
