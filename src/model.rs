use crate::scheduler::SchedError;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::path::PathBuf;

/// Marqueur affiché quand une fonction n'a pu être pourvue.
pub const UNAVAILABLE_LABEL: &str = "N/D";

/// Effectif d'une église : quatre listes disjointes de noms d'obreiros.
///
/// Le nom sert d'identifiant : deux entrées portant le même nom partagent
/// le même compteur de charge.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    #[serde(default, alias = "homens_sede")]
    pub men_home: Vec<String>,
    #[serde(default, alias = "mulheres_sede")]
    pub women_home: Vec<String>,
    #[serde(default, alias = "homens_nao_sede")]
    pub men_visiting: Vec<String>,
    #[serde(default, alias = "mulheres_nao_sede")]
    pub women_visiting: Vec<String>,
}

impl Roster {
    /// Tous les noms, dans l'ordre des listes.
    pub fn all_names(&self) -> impl Iterator<Item = &str> {
        self.men_home
            .iter()
            .chain(&self.women_home)
            .chain(&self.men_visiting)
            .chain(&self.women_visiting)
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.all_names().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Noms présents plusieurs fois (toléré, mais le compteur est partagé).
    pub fn shared_names(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut shared = Vec::new();
        for name in self.all_names() {
            if !seen.insert(name) && !shared.iter().any(|s: &String| s == name) {
                shared.push(name.to_string());
            }
        }
        shared
    }

    /// Candidats (hommes, femmes) pour un type de culte donné.
    pub fn pools(&self, kind: EventKind) -> (Vec<String>, Vec<String>) {
        if kind.draws_full_roster() {
            let men = self.men_home.iter().chain(&self.men_visiting).cloned().collect();
            let women = self
                .women_home
                .iter()
                .chain(&self.women_visiting)
                .cloned()
                .collect();
            (men, women)
        } else {
            (self.men_home.clone(), self.women_home.clone())
        }
    }
}

/// Fonctions pourvues à chaque culte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Role {
    /// Deux hommes.
    CentralDoor,
    PulpitSide,
    RightDoor,
    /// Une femme.
    LeftDoor,
}

impl Role {
    pub fn label(self) -> &'static str {
        match self {
            Role::CentralDoor => "Porta Central",
            Role::PulpitSide => "Lateral do Púlpito",
            Role::RightDoor => "Porta Direita",
            Role::LeftDoor => "Porta Esquerda",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Type de culte, déduit du jour de la semaine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    /// 3e samedi du mois (Santa Ceia).
    Communion,
    Wednesday,
    Friday,
    SundayNight,
}

impl EventKind {
    pub fn label(self) -> &'static str {
        match self {
            EventKind::Communion => "Santa Ceia do Senhor",
            EventKind::Wednesday => "Quarta-Feira",
            EventKind::Friday => "Sexta-Feira",
            EventKind::SundayNight => "Domingo Noite",
        }
    }

    /// Mercredi et Sainte-Cène puisent dans l'effectif complet (sede + visiteurs).
    pub fn draws_full_roster(self) -> bool {
        matches!(self, EventKind::Wednesday | EventKind::Communion)
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Résultat d'une place : un obreiro ou la sentinelle "indisponible".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "status", content = "name", rename_all = "snake_case")]
pub enum Assignment {
    Worker(String),
    Unavailable,
}

impl Assignment {
    pub fn worker(&self) -> Option<&str> {
        match self {
            Assignment::Worker(name) => Some(name),
            Assignment::Unavailable => None,
        }
    }

    pub fn is_unavailable(&self) -> bool {
        matches!(self, Assignment::Unavailable)
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Assignment::Worker(name) => f.write_str(name),
            Assignment::Unavailable => f.write_str(UNAVAILABLE_LABEL),
        }
    }
}

/// Jour à pourvoir, produit par le calendrier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffingDay {
    pub date: NaiveDate,
    pub kind: EventKind,
}

/// Escala d'un culte.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayRecord {
    pub date: NaiveDate,
    pub kind: EventKind,
    pub central_door: [Assignment; 2],
    pub pulpit_side: Assignment,
    pub right_door: Assignment,
    pub left_door: Assignment,
}

impl DayRecord {
    /// Date au format `dd/mm`.
    pub fn day_month(&self) -> String {
        format!("{:02}/{:02}", self.date.day(), self.date.month())
    }

    /// Porte centrale rendue en paire : `A e B`.
    pub fn central_door_label(&self) -> String {
        format!("{} e {}", self.central_door[0], self.central_door[1])
    }

    /// Toutes les places du jour, dans l'ordre d'attribution.
    pub fn seats(&self) -> [(Role, &Assignment); 5] {
        [
            (Role::CentralDoor, &self.central_door[0]),
            (Role::CentralDoor, &self.central_door[1]),
            (Role::PulpitSide, &self.pulpit_side),
            (Role::RightDoor, &self.right_door),
            (Role::LeftDoor, &self.left_door),
        ]
    }

    pub fn has_gaps(&self) -> bool {
        self.seats().iter().any(|(_, a)| a.is_unavailable())
    }
}

/// Église (site) : effectif + logo éventuel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Site {
    #[serde(flatten)]
    pub roster: Roster,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_path: Option<PathBuf>,
}

/// Registre des églises, indexé par nom.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SiteBook {
    pub sites: BTreeMap<String, Site>,
}

impl SiteBook {
    pub fn site(&self, name: &str) -> Result<&Site, SchedError> {
        self.sites
            .get(name)
            .ok_or_else(|| SchedError::UnknownSite(name.to_string()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.sites.keys().map(String::as_str)
    }

    pub fn upsert<S: Into<String>>(&mut self, name: S, site: Site) {
        self.sites.insert(name.into(), site);
    }
}
