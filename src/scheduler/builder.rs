use super::fairness::FairnessAssigner;
use super::types::{PreviousDayAssignment, SchedError, Schedule, WorkloadCounters};
use crate::calendar;
use crate::model::{Assignment, DayRecord, Role, Roster, StaffingDay};
use rand::Rng;
use std::collections::HashSet;
use tracing::{debug, info, warn};

/// Orchestre calendrier et attribution sur tout un mois.
#[derive(Debug, Clone, Copy)]
pub struct ScheduleBuilder<'a> {
    roster: &'a Roster,
}

impl<'a> ScheduleBuilder<'a> {
    pub fn new(roster: &'a Roster) -> Self {
        Self { roster }
    }

    /// Génère l'escala du mois. Chaque appel repart de compteurs à zéro.
    pub fn build<R: Rng>(&self, month: u32, year: i32, rng: R) -> Result<Schedule, SchedError> {
        let days = calendar::select_month(month, year)?;
        let (days, workload) = self.build_days(&days, rng);
        info!(
            month,
            year,
            days = days.len(),
            assignments = workload.total(),
            "escala generated"
        );
        Ok(Schedule {
            month,
            year,
            days,
            workload,
        })
    }

    /// Pourvoit les jours fournis, dans l'ordre donné.
    pub fn build_days<R: Rng>(
        &self,
        days: &[StaffingDay],
        rng: R,
    ) -> (Vec<DayRecord>, WorkloadCounters) {
        let mut assigner = FairnessAssigner::new(WorkloadCounters::for_roster(self.roster), rng);
        let records: Vec<DayRecord> = days
            .iter()
            .map(|day| self.staff_day(&mut assigner, *day))
            .collect();
        (records, assigner.into_counters())
    }

    fn staff_day<R: Rng>(&self, assigner: &mut FairnessAssigner<R>, day: StaffingDay) -> DayRecord {
        let (men, women) = self.roster.pools(day.kind);
        let mut today: HashSet<String> = HashSet::new();
        let mut pick = |assigner: &mut FairnessAssigner<R>, pool: &[String], role: Role| {
            let chosen = assigner.choose(pool, role, &today);
            match chosen.worker() {
                Some(name) => {
                    today.insert(name.to_string());
                }
                None => warn!(date = %day.date, %role, "no candidate left"),
            }
            chosen
        };

        // L'ordre compte : il fixe qui reste disponible pour les fonctions suivantes.
        let central_door = [
            pick(assigner, &men, Role::CentralDoor),
            pick(assigner, &men, Role::CentralDoor),
        ];
        let pulpit_side = pick(assigner, &men, Role::PulpitSide);
        let right_door = pick(assigner, &men, Role::RightDoor);
        let left_door = pick(assigner, &women, Role::LeftDoor);

        let record = DayRecord {
            date: day.date,
            kind: day.kind,
            central_door,
            pulpit_side,
            right_door,
            left_door,
        };
        assigner.remember(occupants(&record));
        debug!(date = %record.date, kind = %record.kind, "day staffed");
        record
    }
}

fn occupants(record: &DayRecord) -> PreviousDayAssignment {
    let mut out = PreviousDayAssignment::new();
    for (role, seat) in record.seats() {
        let names = out.entry(role).or_insert_with(Vec::new);
        if let Assignment::Worker(name) = seat {
            names.push(name.clone());
        }
    }
    out
}
