use std::borrow::Cow;

use crate::score::rating::SEGMENT_HOLES;

/// Handicap strokes a player receives on one hole.
///
/// Every hole gets `floor(course_handicap / hole_count)` strokes and the
/// holes ranked `1..=remainder` get one more, where the remainder is taken
/// with a euclidean modulo so it always lands in `0..hole_count`. A
/// negative course handicap gives a negative base, which takes strokes
/// back from the easiest holes.
#[must_use]
pub fn stroke_allocation(hole_handicap_rank: i32, course_handicap: i32, hole_count: i32) -> i32 {
    if hole_count <= 0 {
        return 0;
    }
    let base = course_handicap.div_euclid(hole_count);
    let remainder = course_handicap.rem_euclid(hole_count);
    base + i32::from(hole_handicap_rank <= remainder)
}

/// Puts an 18 hole card ranked `1..=9` on each nine onto one `1..=18`
/// scale: front nine rank `r` becomes `2r - 1`, back nine rank `r` becomes
/// `2r`. Any other layout comes back unchanged.
#[must_use]
pub fn full_round_ranks(hole_handicap_rank: &[i32]) -> Cow<'_, [i32]> {
    let segment_max = i32::try_from(SEGMENT_HOLES).unwrap_or(i32::MAX);
    if hole_handicap_rank.len() != SEGMENT_HOLES * 2
        || hole_handicap_rank.iter().any(|rank| *rank > segment_max)
    {
        return Cow::Borrowed(hole_handicap_rank);
    }
    Cow::Owned(
        hole_handicap_rank
            .iter()
            .enumerate()
            .map(|(idx, rank)| if idx < SEGMENT_HOLES { 2 * rank - 1 } else { 2 * rank })
            .collect(),
    )
}

/// Allocation for each hole of a rank sequence, in hole order.
#[must_use]
pub fn stroke_allocations(hole_handicap_rank: &[i32], course_handicap: i32) -> Vec<i32> {
    let ranks = full_round_ranks(hole_handicap_rank);
    let hole_count = i32::try_from(ranks.len()).unwrap_or(i32::MAX);
    ranks
        .iter()
        .map(|rank| stroke_allocation(*rank, course_handicap, hole_count))
        .collect()
}
