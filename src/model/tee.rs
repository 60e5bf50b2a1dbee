use serde::{Deserialize, Serialize};
use std::ops::Range;
use uuid::Uuid;

use crate::error::ScorecardError;
use crate::model::HandicapIndex;
use crate::score::{TeeRating, course_handicap_for_tee};

pub const DEFAULT_PAR: i32 = 4;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Teebox {
    pub id: Uuid,
    /// One-based hole number.
    pub hole: usize,
    pub par: i32,
    /// Hole handicap rank, 1 is the hardest hole.
    pub hcp: i32,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Tee {
    pub id: Uuid,
    pub color: String,
    pub rating: f64,
    pub slope: i32,
    pub yardage: i32,
    pub teeboxes: Vec<Teebox>,
}

impl Tee {
    /// A blank tee: par 4 everywhere, ranked in hole order, no rating or
    /// slope yet.
    #[must_use]
    pub fn new(holes: usize) -> Self {
        let teeboxes = TeeRating::sequential_ranks(holes)
            .into_iter()
            .enumerate()
            .map(|(idx, hcp)| Teebox {
                id: Uuid::new_v4(),
                hole: idx + 1,
                par: DEFAULT_PAR,
                hcp,
            })
            .collect();
        Self {
            id: Uuid::new_v4(),
            color: String::new(),
            rating: 0.0,
            slope: 0,
            yardage: 0,
            teeboxes,
        }
    }

    #[must_use]
    pub fn hole_count(&self) -> usize {
        self.teeboxes.len()
    }

    fn clamp(&self, holes: Range<usize>) -> Range<usize> {
        let end = holes.end.min(self.teeboxes.len());
        holes.start.min(end)..end
    }

    /// Pars for a zero-based hole range; holes past the end are dropped.
    #[must_use]
    pub fn pars(&self, holes: Range<usize>) -> Vec<i32> {
        self.teeboxes[self.clamp(holes)].iter().map(|t| t.par).collect()
    }

    #[must_use]
    pub fn handicaps(&self, holes: Range<usize>) -> Vec<i32> {
        self.teeboxes[self.clamp(holes)].iter().map(|t| t.hcp).collect()
    }

    #[must_use]
    pub fn par_total(&self, holes: Range<usize>) -> i32 {
        self.pars(holes).iter().sum()
    }

    fn teebox_mut(&mut self, hole: usize) -> Result<&mut Teebox, ScorecardError> {
        let count = self.teeboxes.len();
        match hole.checked_sub(1) {
            Some(idx) => self.teeboxes.get_mut(idx),
            None => None,
        }
        .ok_or_else(|| ScorecardError::InvalidTee(format!("hole {hole} is not in 1..={count}")))
    }

    pub fn set_par(&mut self, hole: usize, par: i32) -> Result<(), ScorecardError> {
        if par < 1 {
            return Err(ScorecardError::InvalidTee(format!("par {par} for hole {hole}")));
        }
        self.teebox_mut(hole)?.par = par;
        Ok(())
    }

    /// Exchanges the handicap ranks of two holes, so a valid ranking stays
    /// a permutation while it is being edited.
    pub fn swap_handicaps(&mut self, hole_a: usize, hole_b: usize) -> Result<(), ScorecardError> {
        let hcp_a = self.teebox_mut(hole_a)?.hcp;
        let hcp_b = std::mem::replace(&mut self.teebox_mut(hole_b)?.hcp, hcp_a);
        self.teebox_mut(hole_a)?.hcp = hcp_b;
        Ok(())
    }

    /// The rating view the scoring engine works from.
    #[must_use]
    pub fn rating_model(&self) -> TeeRating {
        TeeRating {
            rating: self.rating,
            slope: self.slope,
            hole_count: self.hole_count(),
            hole_handicap_rank: self.teeboxes.iter().map(|t| t.hcp).collect(),
            hole_par: self.teeboxes.iter().map(|t| t.par).collect(),
        }
    }

    #[must_use]
    pub fn course_handicap(&self, index: HandicapIndex) -> Option<i32> {
        course_handicap_for_tee(index, &self.rating_model())
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Course {
    pub id: Uuid,
    pub name: String,
    pub holes: usize,
    pub tees: Vec<Tee>,
}

impl Course {
    #[must_use]
    pub fn new(name: impl Into<String>, holes: usize) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            holes,
            tees: Vec::new(),
        }
    }

    /// Adds a blank tee sized to the course and returns its id.
    pub fn add_tee(&mut self) -> Uuid {
        let tee = Tee::new(self.holes);
        let id = tee.id;
        self.tees.push(tee);
        log::debug!("course {} added tee {id}", self.name);
        id
    }

    #[must_use]
    pub fn tee(&self, tee_id: Uuid) -> Option<&Tee> {
        self.tees.iter().find(|t| t.id == tee_id)
    }

    pub fn update_tee(&mut self, tee: Tee) -> Result<(), ScorecardError> {
        if tee.hole_count() != self.holes {
            return Err(ScorecardError::InvalidTee(format!(
                "tee {} has {} holes, course {} has {}",
                tee.id,
                tee.hole_count(),
                self.name,
                self.holes
            )));
        }
        match self.tees.iter_mut().find(|t| t.id == tee.id) {
            Some(existing) => {
                *existing = tee;
                Ok(())
            }
            None => {
                log::warn!("course {} has no tee {} to update", self.name, tee.id);
                Err(ScorecardError::NotFound(format!("tee {}", tee.id)))
            }
        }
    }

    pub fn delete_tee(&mut self, tee_id: Uuid) -> Result<Tee, ScorecardError> {
        if let Some(idx) = self.tees.iter().position(|t| t.id == tee_id) {
            Ok(self.tees.remove(idx))
        } else {
            log::warn!("course {} has no tee {tee_id} to delete", self.name);
            Err(ScorecardError::NotFound(format!("tee {tee_id}")))
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct CourseCatalog {
    pub courses: Vec<Course>,
}

impl CourseCatalog {
    #[must_use]
    pub fn new(courses: Vec<Course>) -> Self {
        Self { courses }
    }

    pub fn add_course(&mut self, course: Course) {
        log::info!("adding course {}", course.name);
        self.courses.push(course);
    }

    pub fn delete_course(&mut self, course_id: Uuid) -> Result<Course, ScorecardError> {
        let idx = self
            .courses
            .iter()
            .position(|c| c.id == course_id)
            .ok_or_else(|| ScorecardError::NotFound(format!("course {course_id}")))?;
        let course = self.courses.remove(idx);
        log::info!("deleted course {}", course.name);
        Ok(course)
    }

    #[must_use]
    pub fn course(&self, course_id: Uuid) -> Option<&Course> {
        self.courses.iter().find(|c| c.id == course_id)
    }

    pub fn course_mut(&mut self, course_id: Uuid) -> Option<&mut Course> {
        self.courses.iter_mut().find(|c| c.id == course_id)
    }

    /// Resolves the course and tee a round was played on.
    pub fn course_and_tee(
        &self,
        course_id: Uuid,
        tee_id: Uuid,
    ) -> Result<(&Course, &Tee), ScorecardError> {
        let course = self
            .course(course_id)
            .ok_or_else(|| ScorecardError::NotFound(format!("course {course_id}")))?;
        let tee = course
            .tee(tee_id)
            .ok_or_else(|| ScorecardError::NotFound(format!("tee {tee_id} on {}", course.name)))?;
        Ok((course, tee))
    }
}
