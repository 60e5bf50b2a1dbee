use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ScorecardError;
use crate::score::is_handicap_index_set;

/// A player's handicap index, or nothing when it hasn't been entered.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
#[serde(transparent)]
pub struct HandicapIndex(Option<f64>);

impl HandicapIndex {
    pub const UNSET: Self = Self(None);

    /// Non-finite values (NaN in particular) are treated as unset.
    #[must_use]
    pub fn new(value: f64) -> Self {
        if is_handicap_index_set(value) {
            Self(Some(value))
        } else {
            Self::UNSET
        }
    }

    #[must_use]
    pub fn value(self) -> Option<f64> {
        self.0
    }

    #[must_use]
    pub fn is_set(self) -> bool {
        self.0.is_some()
    }

    /// Blank text is an unset index.
    pub fn parse(text: &str) -> Result<Self, ScorecardError> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(Self::UNSET);
        }
        let value = text
            .parse::<f64>()
            .map_err(|e| ScorecardError::Parse(format!("handicap index '{text}': {e}")))?;
        if !is_handicap_index_set(value) {
            return Err(ScorecardError::Parse(format!(
                "handicap index '{text}' is not a finite number"
            )));
        }
        Ok(Self(Some(value)))
    }
}

impl From<f64> for HandicapIndex {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl FromStr for HandicapIndex {
    type Err = ScorecardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// at most one fractional digit, no trailing ".0", never "-0"
impl fmt::Display for HandicapIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(value) = self.0 else {
            return Ok(());
        };
        let mut text = format!("{value:.1}");
        if text == "-0.0" {
            text.remove(0);
        }
        write!(f, "{}", text.strip_suffix(".0").unwrap_or(&text))
    }
}
