#![allow(dead_code)]

use chrono::NaiveDate;
use rusty_scorecard::args::Settings;
use rusty_scorecard::model::{Course, HandicapIndex, Round, Tee};
use std::path::Path;

/// Pars and stroke index of a typical championship 18.
pub const PARS: [i32; 18] = [4, 5, 3, 4, 4, 4, 3, 5, 4, 4, 4, 3, 5, 4, 4, 3, 4, 5];
pub const RANKS: [i32; 18] = [7, 3, 17, 1, 11, 9, 15, 5, 13, 8, 2, 18, 6, 12, 4, 16, 10, 14];

pub fn tee_18() -> Tee {
    let mut tee = Tee::new(18);
    tee.color = "Blue".to_string();
    tee.rating = 72.4;
    tee.slope = 131;
    tee.yardage = 6_780;
    for (idx, teebox) in tee.teeboxes.iter_mut().enumerate() {
        teebox.par = PARS[idx];
        teebox.hcp = RANKS[idx];
    }
    tee
}

pub fn course_18() -> Course {
    let mut course = Course::new("Lakeside", 18);
    course.tees.push(tee_18());
    course
}

pub fn settings(data_dir: &Path, index: HandicapIndex) -> Settings {
    Settings {
        data_dir: data_dir.to_path_buf(),
        my_name: "Ron".to_string(),
        my_handicap_index: index,
    }
}

pub fn round_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 6, 14).unwrap_or_default()
}

/// A round on the course's first tee with every hole filled for player one.
pub fn played_round(course: &Course, strokes: &[i32]) -> Round {
    let tee = &course.tees[0];
    let mut round = Round::new(
        course,
        tee,
        &settings(Path::new("."), HandicapIndex::from(10.8)),
        round_date(),
    );
    for (idx, s) in strokes.iter().enumerate() {
        round
            .set_strokes(0, idx + 1, *s)
            .expect("hole inside the round");
    }
    round
}
