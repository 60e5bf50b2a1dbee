pub mod args;
pub mod error;
pub mod model;
pub mod score {
    pub mod aggregate;
    pub mod allocation;
    pub mod handicap;
    pub mod random;
    pub mod rating;

    pub use aggregate::*;
    pub use allocation::*;
    pub use handicap::*;
    pub use random::*;
    pub use rating::*;
}
pub mod storage {
    pub mod json_store;
    pub mod loadable;

    pub use json_store::*;
    pub use loadable::*;
}
pub mod view {
    pub mod scorecard;
}

pub use error::ScorecardError;
