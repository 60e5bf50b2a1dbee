use crate::error::ScorecardError;

/// Progress of loading a resource from a store.
///
/// Transitions: `Idle | Loaded | Failed -> Loading` through [`LoadState::start`],
/// `Loading -> Loaded | Failed` through [`LoadState::finish`]. A failed load
/// keeps a fallback value (the default) so callers still have something to
/// show.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Idle,
    Loading,
    Failed(ScorecardError, T),
    Loaded(T),
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<T: Default> LoadState<T> {
    pub fn start(&mut self) -> Result<(), ScorecardError> {
        if matches!(self, Self::Loading) {
            return Err(ScorecardError::Other("load already in progress".to_string()));
        }
        *self = Self::Loading;
        Ok(())
    }

    pub fn finish(&mut self, result: Result<T, ScorecardError>) -> Result<(), ScorecardError> {
        if !matches!(self, Self::Loading) {
            return Err(ScorecardError::Other(format!(
                "cannot finish a load from state {}",
                self.state_name()
            )));
        }
        *self = match result {
            Ok(value) => Self::Loaded(value),
            Err(err) => Self::Failed(err, T::default()),
        };
        Ok(())
    }
}

impl<T> LoadState<T> {
    #[must_use]
    pub fn state_name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Loading => "loading",
            Self::Failed(..) => "failed",
            Self::Loaded(_) => "loaded",
        }
    }

    #[must_use]
    pub fn state_value(&self) -> u8 {
        match self {
            Self::Idle => 0,
            Self::Loading => 1,
            Self::Failed(..) => 2,
            Self::Loaded(_) => 3,
        }
    }

    /// The loaded value, or the fallback of a failed load.
    #[must_use]
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Loaded(value) | Self::Failed(_, value) => Some(value),
            Self::Idle | Self::Loading => None,
        }
    }

    #[must_use]
    pub fn error(&self) -> Option<&ScorecardError> {
        match self {
            Self::Failed(err, _) => Some(err),
            _ => None,
        }
    }
}
