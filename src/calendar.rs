//! Sélection des jours de culte à pourvoir.

use crate::model::{EventKind, StaffingDay};
use crate::scheduler::SchedError;
use chrono::{Datelike, NaiveDate, Weekday};

/// Bornes des années acceptées.
pub const MIN_YEAR: i32 = 1900;
pub const MAX_YEAR: i32 = 9999;

/// Rang du samedi retenu pour la Sainte-Cène.
const COMMUNION_SATURDAY: usize = 3;

/// Premier et dernier jour du mois, après validation.
pub fn month_bounds(month: u32, year: i32) -> Result<(NaiveDate, NaiveDate), SchedError> {
    if !(1..=12).contains(&month) {
        return Err(SchedError::InvalidMonth(month));
    }
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(SchedError::InvalidYear(year));
    }
    let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or(SchedError::InvalidYear(year))?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .ok_or(SchedError::InvalidYear(year))?;
    let last = next.pred_opt().ok_or(SchedError::InvalidYear(year))?;
    Ok((first, last))
}

/// Jours à pourvoir du mois, triés par date.
pub fn select_month(month: u32, year: i32) -> Result<Vec<StaffingDay>, SchedError> {
    let (first, last) = month_bounds(month, year)?;
    Ok(select_between(first, last))
}

/// Jours à pourvoir dans `[first, last]`.
///
/// Mercredis, vendredis et dimanches sont toujours retenus ; la Sainte-Cène
/// tombe sur le 3e samedi rencontré dans l'intervalle, et n'existe pas s'il
/// y en a moins de trois.
pub fn select_between(first: NaiveDate, last: NaiveDate) -> Vec<StaffingDay> {
    let mut days = Vec::new();
    let mut saturdays = Vec::new();

    for date in first.iter_days().take_while(|d| *d <= last) {
        let kind = match date.weekday() {
            Weekday::Wed => EventKind::Wednesday,
            Weekday::Fri => EventKind::Friday,
            Weekday::Sun => EventKind::SundayNight,
            Weekday::Sat => {
                saturdays.push(date);
                continue;
            }
            _ => continue,
        };
        days.push(StaffingDay { date, kind });
    }

    if let Some(&date) = saturdays.get(COMMUNION_SATURDAY - 1) {
        days.push(StaffingDay {
            date,
            kind: EventKind::Communion,
        });
    }

    days.sort_by_key(|d| d.date);
    days
}
