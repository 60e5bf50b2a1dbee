use crate::model::HandicapIndex;
use crate::score::rating::TeeRating;

/// Slope of a tee of average difficulty.
pub const STANDARD_SLOPE: f64 = 113.0;

/// True when a raw handicap index has been entered. NaN is the "not yet
/// entered" marker used by input fields.
#[must_use]
pub fn is_handicap_index_set(value: f64) -> bool {
    value.is_finite()
}

/// Course handicap for the holes being played:
/// `round(index * slope / 113 + (rating - par))`, rounding half away from
/// zero. Returns `None` for an unset index; plus handicaps (negative
/// indexes) are not clamped.
#[must_use]
pub fn course_handicap(index: HandicapIndex, slope: i32, rating: f64, par: i32) -> Option<i32> {
    let index = index.value()?;
    let raw = index * f64::from(slope) / STANDARD_SLOPE + (rating - f64::from(par));
    Some(round_half_away_from_zero(raw))
}

/// Course handicap over every hole of the tee.
#[must_use]
pub fn course_handicap_for_tee(index: HandicapIndex, tee: &TeeRating) -> Option<i32> {
    course_handicap(index, tee.slope, tee.rating, tee.par_total())
}

#[allow(clippy::cast_possible_truncation)]
fn round_half_away_from_zero(value: f64) -> i32 {
    // f64::round already rounds ties away from zero; the cast saturates
    value.round() as i32
}
