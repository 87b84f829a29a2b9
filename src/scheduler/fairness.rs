use super::types::{PreviousDayAssignment, WorkloadCounters};
use super::util;
use crate::model::{Assignment, Role};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;

/// Moteur d'attribution équitable, propre à une génération.
///
/// Règles, par priorité décroissante :
/// 1. exclure les obreiros déjà escalados ce jour (dure) ;
/// 2. exclure les occupants de la même fonction au culte précédent (souple) ;
/// 3. ne garder que les moins chargés (dure), puis tirage uniforme.
#[derive(Debug)]
pub struct FairnessAssigner<R> {
    counters: WorkloadCounters,
    previous: PreviousDayAssignment,
    rng: R,
}

impl<R: Rng> FairnessAssigner<R> {
    pub fn new(counters: WorkloadCounters, rng: R) -> Self {
        Self {
            counters,
            previous: PreviousDayAssignment::new(),
            rng,
        }
    }

    pub fn counters(&self) -> &WorkloadCounters {
        &self.counters
    }

    pub fn previous(&self) -> &PreviousDayAssignment {
        &self.previous
    }

    /// Remplace en bloc la mémoire du culte précédent.
    pub fn remember(&mut self, day: PreviousDayAssignment) {
        self.previous = day;
    }

    pub fn into_counters(self) -> WorkloadCounters {
        self.counters
    }

    /// Choisit un obreiro pour `role` parmi `candidates`.
    pub fn choose(
        &mut self,
        candidates: &[String],
        role: Role,
        excluded: &HashSet<String>,
    ) -> Assignment {
        let pool: Vec<&str> = candidates
            .iter()
            .map(String::as_str)
            .filter(|name| !excluded.contains(*name))
            .collect();
        if pool.is_empty() {
            return Assignment::Unavailable;
        }

        let last_time = self.previous.get(&role).map(Vec::as_slice).unwrap_or(&[]);
        let pool = util::relax(pool, |name| !last_time.iter().any(|p| p == name));

        let counters = &self.counters;
        let best = util::least_loaded(&pool, |name| counters.get(name));
        let Some(&chosen) = best.choose(&mut self.rng) else {
            return Assignment::Unavailable;
        };

        let chosen = chosen.to_string();
        self.counters.bump(&chosen);
        Assignment::Worker(chosen)
    }
}
