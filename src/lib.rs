#![forbid(unsafe_code)]
//! Escala — génération mensuelle de l'escala des obreiros.
//!
//! - Calendrier : mercredis, vendredis, dimanches + Sainte-Cène (3e samedi).
//! - Attribution équitable : moins chargés d'abord, anti-répétition souple.
//! - Aléa injectable (`rand::Rng`) pour des tests reproductibles.
//! - Export CSV/JSON ; registre des églises en JSON.

pub mod calendar;
pub mod export;
pub mod io;
pub mod model;
pub mod months;
pub mod scheduler;
pub mod storage;

pub use export::{default_file_name, CsvSheetExporter, DocumentExporter, SheetRequest};
pub use model::{Assignment, DayRecord, EventKind, Role, Roster, Site, SiteBook, StaffingDay};
pub use scheduler::{
    generate, FairnessAssigner, PreviousDayAssignment, SchedError, Schedule, ScheduleBuilder,
    WorkloadCounters,
};
pub use storage::{JsonStorage, Storage};
