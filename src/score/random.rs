//! Demo score generation.
//!
//! Strokes over par follow a fitted polynomial so the spread looks like a
//! mid handicapper's card. The generator is always explicitly seeded or
//! handed an rng; nothing here touches a global source.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::model::{PlayerScore, Tee};

const STROKE_COEFFICIENTS: [f64; 6] = [
    7.221_490_77e-12,
    2.792_150_08e-09,
    2.081_729_55e-07,
    -3.519_201_53e-04,
    6.054_114_43e-03,
    2.442_392_87e+00,
];
const SAMPLE_RANGE: std::ops::RangeInclusive<i32> = -523..=645;
const MIN_OVER_PAR: i32 = -2;
const MAX_OVER_PAR: i32 = 18;
const HANDICAP_RANGE: std::ops::RangeInclusive<i32> = 18..=30;
const MAX_DEMO_PLAYERS: usize = 4;

/// Strokes over par for a sample point, rounded and clamped to `-2..=18`.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn strokes_over_par(x: i32) -> i32 {
    let dx = f64::from(x);
    // Horner form of c0*x^5 + c1*x^4 + ... + c5
    let y = STROKE_COEFFICIENTS
        .iter()
        .fold(0.0, |acc, coeff| acc * dx + coeff);
    ((y / 100.0).round() as i32).clamp(MIN_OVER_PAR, MAX_OVER_PAR)
}

pub struct StrokeGenerator<R: Rng> {
    rng: R,
}

impl StrokeGenerator<StdRng> {
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> StrokeGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn random_strokes(&mut self) -> i32 {
        strokes_over_par(self.rng.gen_range(SAMPLE_RANGE))
    }

    /// A player with a course handicap of 18..=30 and gross strokes on the
    /// first `holes` holes of the tee.
    pub fn random_player(&mut self, name: &str, tee: &Tee, holes: usize) -> PlayerScore {
        let mut player = PlayerScore::new(tee.hole_count());
        player.name = name.to_string();
        player.course_handicap = self.rng.gen_range(HANDICAP_RANGE);
        for (hole_score, teebox) in player
            .hole_scores
            .iter_mut()
            .zip(&tee.teeboxes)
            .take(holes)
        {
            hole_score.strokes = (teebox.par + self.random_strokes()).max(1);
        }
        player
    }

    /// One to four players (bounded by `names`) who have all played the
    /// same random number of holes.
    pub fn random_players(&mut self, tee: &Tee, names: &[&str]) -> Vec<PlayerScore> {
        let max_players = names.len().min(MAX_DEMO_PLAYERS);
        if max_players == 0 || tee.hole_count() == 0 {
            return Vec::new();
        }
        let count = self.rng.gen_range(1..=max_players);
        self.random_group(tee, names, count)
    }

    /// A group of exactly `count` players, capped by the names on hand and
    /// the group limit, all scored through the same random number of holes.
    pub fn random_group(&mut self, tee: &Tee, names: &[&str], count: usize) -> Vec<PlayerScore> {
        let count = count.min(names.len()).min(MAX_DEMO_PLAYERS);
        if count == 0 || tee.hole_count() == 0 {
            return Vec::new();
        }
        let holes = self.rng.gen_range(1..=tee.hole_count());
        names
            .iter()
            .take(count)
            .map(|name| self.random_player(name, tee, holes))
            .collect()
    }
}
