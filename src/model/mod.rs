pub mod handicap_index;
pub mod hole_score;
pub mod round;
pub mod tee;

pub use handicap_index::*;
pub use hole_score::*;
pub use round::*;
pub use tee::*;
