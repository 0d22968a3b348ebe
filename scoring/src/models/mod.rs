pub mod athlete;
pub mod division;
pub mod event;
pub mod event_part;
pub mod heat;
pub mod part_spec;
pub mod score;

pub use athlete::Athlete;
pub use division::Division;
pub use event::{Event, EventKind};
pub use event_part::{EventPart, ScoringKind};
pub use heat::{Heat, LaneAssignment};
pub use part_spec::PartDivisionSpec;
pub use score::{Score, ScoreStatus};
