use crate::export::table_row;
use crate::model::Roster;
use crate::scheduler::Schedule;
use anyhow::{bail, Context};
use csv::{ReaderBuilder, WriterBuilder};
use std::fs;
use std::path::Path;

/// Import d'un effectif depuis CSV: header `name,group`
///
/// `group` vaut `men_home`, `women_home`, `men_visiting` ou `women_visiting`
/// (ou les anciens noms `homens_sede`, `mulheres_sede`, `homens_nao_sede`,
/// `mulheres_nao_sede`). L'ordre des lignes est conservé.
pub fn import_roster_csv<P: AsRef<Path>>(path: P) -> anyhow::Result<Roster> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_path(path)?;
    let mut roster = Roster::default();
    for (line, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let name = rec.get(0).context("missing name")?.trim();
        let group = rec.get(1).context("missing group")?.trim();
        if name.is_empty() {
            bail!("invalid roster row {} (empty name)", line + 2);
        }
        let list = match group.to_ascii_lowercase().as_str() {
            "men_home" | "homens_sede" => &mut roster.men_home,
            "women_home" | "mulheres_sede" => &mut roster.women_home,
            "men_visiting" | "homens_nao_sede" => &mut roster.men_visiting,
            "women_visiting" | "mulheres_nao_sede" => &mut roster.women_visiting,
            other => bail!("unknown group '{other}' for {name}"),
        };
        list.push(name.to_string());
    }
    Ok(roster)
}

/// Export JSON de l'escala (jolie mise en forme)
pub fn export_schedule_json<P: AsRef<Path>>(path: P, schedule: &Schedule) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(schedule)?;
    fs::write(path, s)?;
    Ok(())
}

/// Export CSV brut du tableau: header `event,date,central_door,left_door,pulpit_side,right_door`
pub fn export_schedule_csv<P: AsRef<Path>>(path: P, schedule: &Schedule) -> anyhow::Result<()> {
    let mut w = WriterBuilder::new().has_headers(true).from_path(path)?;
    w.write_record([
        "event",
        "date",
        "central_door",
        "left_door",
        "pulpit_side",
        "right_door",
    ])?;
    for day in &schedule.days {
        w.write_record(table_row(day))?;
    }
    w.flush()?;
    Ok(())
}
