use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::args::Settings;
use crate::error::ScorecardError;
use crate::model::{Course, HandicapIndex, HoleScore, Tee};
use crate::score::PlayerCard;

pub const MAX_PLAYERS: usize = 4;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RoundStatus {
    #[default]
    New,
    Incomplete,
    Complete,
    Submitted,
}

impl fmt::Display for RoundStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RoundStatus::New => "New",
            RoundStatus::Incomplete => "Incomplete",
            RoundStatus::Complete => "Complete",
            RoundStatus::Submitted => "Submitted",
        };
        write!(f, "{s}")
    }
}

/// Only stroke play is scored; the others are recorded on the round.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScoringSystem {
    #[default]
    Stroke,
    Stableford,
    Par,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PlayerScore {
    pub id: Uuid,
    pub name: String,
    pub handicap_index: HandicapIndex,
    /// Assigned from the engine whenever the index or tee changes; 0 until
    /// an index is entered.
    pub course_handicap: i32,
    pub hole_scores: Vec<HoleScore>,
}

impl PlayerScore {
    #[must_use]
    pub fn new(hole_count: usize) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: String::new(),
            handicap_index: HandicapIndex::UNSET,
            course_handicap: 0,
            hole_scores: vec![HoleScore::default(); hole_count],
        }
    }

    #[must_use]
    pub fn strokes(&self) -> Vec<i32> {
        self.hole_scores.iter().map(|h| h.strokes).collect()
    }

    /// Scoring snapshot against the given hole ranks.
    #[must_use]
    pub fn card<'a>(&self, hole_handicap_rank: &'a [i32]) -> PlayerCard<'a> {
        PlayerCard::new(self.strokes(), hole_handicap_rank, self.course_handicap)
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        !self.name.trim().is_empty() && self.handicap_index.is_set()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.hole_scores.iter().all(HoleScore::is_scored)
    }

    fn refresh_course_handicap(&mut self, tee: &Tee) {
        self.course_handicap = tee.course_handicap(self.handicap_index).unwrap_or(0);
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Round {
    pub id: Uuid,
    pub course_id: Uuid,
    pub tee_id: Uuid,
    pub date: NaiveDate,
    pub players: Vec<PlayerScore>,
    pub hole_count: usize,
    pub scoring_system: ScoringSystem,
    pub status: RoundStatus,
}

impl Round {
    /// Starts a round on `tee` with the configured player as player one.
    #[must_use]
    pub fn new(course: &Course, tee: &Tee, settings: &Settings, date: NaiveDate) -> Self {
        let mut player = PlayerScore::new(course.holes);
        player.name.clone_from(&settings.my_name);
        player.handicap_index = settings.my_handicap_index;
        player.refresh_course_handicap(tee);

        Self {
            id: Uuid::new_v4(),
            course_id: course.id,
            tee_id: tee.id,
            date,
            players: vec![player],
            hole_count: course.holes,
            scoring_system: ScoringSystem::Stroke,
            status: RoundStatus::Incomplete,
        }
    }

    /// Grows or shrinks the group to `count` players; counts outside
    /// `1..=4` are ignored.
    pub fn adjust_players(&mut self, count: usize) {
        if !(1..=MAX_PLAYERS).contains(&count) {
            log::debug!("ignoring player count {count} for round {}", self.id);
            return;
        }
        let hole_count = self.hole_count;
        self.players
            .resize_with(count, || PlayerScore::new(hole_count));
    }

    fn player_mut(&mut self, player: usize) -> Result<&mut PlayerScore, ScorecardError> {
        let count = self.players.len();
        self.players.get_mut(player).ok_or_else(|| {
            ScorecardError::InvalidRound(format!("player {player} of {count}"))
        })
    }

    pub fn set_player_name(&mut self, player: usize, name: &str) -> Result<(), ScorecardError> {
        self.player_mut(player)?.name = name.trim().to_string();
        Ok(())
    }

    pub fn set_handicap_index(
        &mut self,
        player: usize,
        index: HandicapIndex,
        tee: &Tee,
    ) -> Result<(), ScorecardError> {
        self.check_tee(tee)?;
        let player = self.player_mut(player)?;
        player.handicap_index = index;
        player.refresh_course_handicap(tee);
        Ok(())
    }

    /// Moves the round to another tee and recomputes every course handicap.
    pub fn set_tee(&mut self, tee: &Tee) -> Result<(), ScorecardError> {
        if tee.hole_count() != self.hole_count {
            return Err(ScorecardError::InvalidTee(format!(
                "tee {} has {} holes, round has {}",
                tee.id,
                tee.hole_count(),
                self.hole_count
            )));
        }
        self.tee_id = tee.id;
        for player in &mut self.players {
            player.refresh_course_handicap(tee);
        }
        Ok(())
    }

    fn check_tee(&self, tee: &Tee) -> Result<(), ScorecardError> {
        if tee.id == self.tee_id {
            Ok(())
        } else {
            Err(ScorecardError::InvalidTee(format!(
                "round {} is played from tee {}, not {}",
                self.id, self.tee_id, tee.id
            )))
        }
    }

    /// Records gross strokes for a one-based hole; 0 clears the hole.
    pub fn set_strokes(
        &mut self,
        player: usize,
        hole: usize,
        strokes: i32,
    ) -> Result<(), ScorecardError> {
        if strokes < 0 {
            return Err(ScorecardError::InvalidRound(format!(
                "strokes must not be negative, got {strokes}"
            )));
        }
        let hole_count = self.hole_count;
        let hole_score = match hole.checked_sub(1) {
            Some(idx) => self
                .players
                .get_mut(player)
                .and_then(|p| p.hole_scores.get_mut(idx)),
            None => None,
        }
        .ok_or_else(|| {
            ScorecardError::InvalidRound(format!("player {player}, hole {hole} of {hole_count}"))
        })?;
        hole_score.strokes = strokes;
        Ok(())
    }

    #[must_use]
    pub fn players_ready(&self) -> bool {
        !self.players.is_empty() && self.players.iter().all(PlayerScore::is_ready)
    }

    /// Incomplete rounds become complete once every hole has strokes.
    /// New and submitted rounds are left alone.
    pub fn update_status(&mut self) -> RoundStatus {
        if self.status == RoundStatus::Incomplete
            && !self.players.is_empty()
            && self.players.iter().all(PlayerScore::is_complete)
        {
            self.status = RoundStatus::Complete;
            log::info!("round {} complete", self.id);
        } else if self.status == RoundStatus::Complete
            && !self.players.iter().all(PlayerScore::is_complete)
        {
            self.status = RoundStatus::Incomplete;
        }
        self.status
    }
}

/// The saved rounds. Rounds are owned here and changed only through these
/// methods.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct RoundBook {
    pub rounds: Vec<Round>,
}

impl RoundBook {
    #[must_use]
    pub fn new(rounds: Vec<Round>) -> Self {
        Self { rounds }
    }

    pub fn add_round(&mut self, round: Round) -> Result<(), ScorecardError> {
        if self.round(round.id).is_some() {
            return Err(ScorecardError::InvalidRound(format!(
                "round {} already exists",
                round.id
            )));
        }
        log::info!("adding round {} on {}", round.id, round.date);
        self.rounds.push(round);
        Ok(())
    }

    pub fn update_round(&mut self, round: Round) -> Result<(), ScorecardError> {
        let existing = self
            .rounds
            .iter_mut()
            .find(|r| r.id == round.id)
            .ok_or_else(|| ScorecardError::NotFound(format!("round {}", round.id)))?;
        *existing = round;
        Ok(())
    }

    pub fn delete_round(&mut self, round_id: Uuid) -> Result<Round, ScorecardError> {
        let idx = self
            .rounds
            .iter()
            .position(|r| r.id == round_id)
            .ok_or_else(|| ScorecardError::NotFound(format!("round {round_id}")))?;
        Ok(self.rounds.remove(idx))
    }

    #[must_use]
    pub fn round(&self, round_id: Uuid) -> Option<&Round> {
        self.rounds.iter().find(|r| r.id == round_id)
    }
}
