use serde::{Deserialize, Serialize};
use std::fmt;

use crate::score::UNSCORED;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Drive {
    #[default]
    Other,
    Fairway,
    #[serde(rename = "Left Rough")]
    LeftRough,
    #[serde(rename = "Right Rough")]
    RightRough,
}

impl fmt::Display for Drive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Drive::Other => "Other",
            Drive::Fairway => "Fairway",
            Drive::LeftRough => "Left Rough",
            Drive::RightRough => "Right Rough",
        };
        write!(f, "{s}")
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Approach {
    #[default]
    Other,
    #[serde(rename = "GIR")]
    Green,
    #[serde(rename = "Back Left")]
    BackLeft,
    Back,
    #[serde(rename = "Back Right")]
    BackRight,
    Left,
    Right,
    #[serde(rename = "Front Left")]
    FrontLeft,
    Front,
    #[serde(rename = "Front Right")]
    FrontRight,
}

impl fmt::Display for Approach {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Approach::Other => "Other",
            Approach::Green => "GIR",
            Approach::BackLeft => "Back Left",
            Approach::Back => "Back",
            Approach::BackRight => "Back Right",
            Approach::Left => "Left",
            Approach::Right => "Right",
            Approach::FrontLeft => "Front Left",
            Approach::Front => "Front",
            Approach::FrontRight => "Front Right",
        };
        write!(f, "{s}")
    }
}

/// What happened on one hole. `strokes == 0` means the hole hasn't been
/// played yet.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct HoleScore {
    pub strokes: i32,
    pub putts: i32,
    pub penalties: i32,
    pub good_shots: i32,
    pub drive: Drive,
    pub approach: Approach,
    pub sand: bool,
}

impl HoleScore {
    #[must_use]
    pub fn is_scored(&self) -> bool {
        self.strokes != UNSCORED
    }

    /// A sand save only applies to a missed green.
    #[must_use]
    pub fn is_sand_disabled(&self) -> bool {
        matches!(self.approach, Approach::Other | Approach::Green)
    }
}
