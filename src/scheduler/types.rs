use crate::model::{DayRecord, Role, Roster};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use thiserror::Error;

/// Nombre de fonctions attribuées à chaque obreiro pendant une génération.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkloadCounters(BTreeMap<String, u32>);

impl WorkloadCounters {
    /// Tous les obreiros de l'effectif, à zéro.
    pub fn for_roster(roster: &Roster) -> Self {
        Self(roster.all_names().map(|n| (n.to_string(), 0)).collect())
    }

    /// Charge actuelle ; un nom inconnu compte pour zéro.
    pub fn get(&self, name: &str) -> u32 {
        self.0.get(name).copied().unwrap_or(0)
    }

    pub(crate) fn bump(&mut self, name: &str) {
        *self.0.entry(name.to_string()).or_insert(0) += 1;
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Somme des attributions.
    pub fn total(&self) -> u32 {
        self.0.values().sum()
    }
}

impl<S: Into<String>> FromIterator<(S, u32)> for WorkloadCounters {
    fn from_iter<I: IntoIterator<Item = (S, u32)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

/// Occupants de chaque fonction au culte précédent.
pub type PreviousDayAssignment = HashMap<Role, Vec<String>>;

/// Escala complète d'un mois.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    pub month: u32,
    pub year: i32,
    pub days: Vec<DayRecord>,
    pub workload: WorkloadCounters,
}

impl Schedule {
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Nombre de places restées sans obreiro.
    pub fn gap_count(&self) -> usize {
        self.days
            .iter()
            .flat_map(|d| d.seats())
            .filter(|(_, a)| a.is_unavailable())
            .count()
    }
}

#[derive(Error, Debug)]
pub enum SchedError {
    #[error("invalid month: {0} (expected 1-12)")]
    InvalidMonth(u32),
    #[error("invalid year: {0}")]
    InvalidYear(i32),
    #[error("unknown site: {0}")]
    UnknownSite(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
