mod builder;
mod fairness;
mod types;
mod util;

pub use builder::ScheduleBuilder;
pub use fairness::FairnessAssigner;
pub use types::{PreviousDayAssignment, SchedError, Schedule, WorkloadCounters};

use crate::model::Roster;
use rand::Rng;

/// Raccourci : escala du mois pour `roster`.
pub fn generate<R: Rng>(
    roster: &Roster,
    month: u32,
    year: i32,
    rng: R,
) -> Result<Schedule, SchedError> {
    ScheduleBuilder::new(roster).build(month, year, rng)
}
