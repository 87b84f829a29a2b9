//! Rendu de l'escala en feuille de calcul (CSV).

use crate::model::{DayRecord, Role};
use anyhow::{Context, Result};
use csv::WriterBuilder;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Texte d'avertissement placé sous le tableau.
pub const NOTICE: [&str; 4] = [
    "ATENÇÃO!!!",
    "Em caso de impossibilidade de atender a escala, o obreiro DEVE:",
    "1º Comunicar-se com outro obreiro que atenda sua escala",
    "2º Notificar ao pastor presidente quanto a ausência e troca",
];

/// Ce que l'exporteur doit rendre.
#[derive(Debug, Clone, Copy)]
pub struct SheetRequest<'a> {
    pub days: &'a [DayRecord],
    pub month_name: &'a str,
    pub year: i32,
    pub logo: Option<&'a Path>,
}

/// Permet de brancher d'autres formats de document.
pub trait DocumentExporter {
    fn export(&self, sheet: &SheetRequest<'_>, out: &mut dyn Write) -> Result<()>;
}

/// Feuille CSV lisible par un tableur.
#[derive(Debug, Default, Clone, Copy)]
pub struct CsvSheetExporter;

impl DocumentExporter for CsvSheetExporter {
    fn export(&self, sheet: &SheetRequest<'_>, out: &mut dyn Write) -> Result<()> {
        let mut w = WriterBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_writer(out);

        w.write_record([logo_cell(sheet.logo)])?;
        w.write_record([format!(
            "ESCALA DE OBREIROS - {}/{}",
            sheet.month_name.to_uppercase(),
            sheet.year
        )])?;
        w.write_record([""])?;

        w.write_record([
            format!("Mês da escala ({})", sheet.month_name).as_str(),
            "Data",
            Role::CentralDoor.label(),
            Role::LeftDoor.label(),
            Role::PulpitSide.label(),
            Role::RightDoor.label(),
        ])?;
        for day in sheet.days {
            w.write_record(table_row(day))?;
        }

        w.write_record([""])?;
        for line in NOTICE {
            w.write_record([line])?;
        }
        w.flush().context("flushing sheet")?;
        Ok(())
    }
}

/// Ligne du tableau : événement, date, porte centrale, porte gauche, púlpito, porte droite.
pub fn table_row(day: &DayRecord) -> [String; 6] {
    [
        day.kind.label().to_string(),
        day.day_month(),
        day.central_door_label(),
        day.left_door.to_string(),
        day.pulpit_side.to_string(),
        day.right_door.to_string(),
    ]
}

fn logo_cell(logo: Option<&Path>) -> String {
    match logo {
        Some(path) if path.is_file() => format!("Logo: {}", path.display()),
        Some(path) => format!("Logo não encontrada em {}", path.display()),
        None => "Logo não informada".to_string(),
    }
}

/// Écrit la feuille dans un fichier.
pub fn export_sheet_to_path<P: AsRef<Path>>(
    path: P,
    exporter: &dyn DocumentExporter,
    sheet: &SheetRequest<'_>,
) -> Result<()> {
    let path = path.as_ref();
    let mut file =
        File::create(path).with_context(|| format!("creating {}", path.display()))?;
    exporter.export(sheet, &mut file)?;
    file.flush()?;
    Ok(())
}

/// Nom de fichier proposé : `escala_<site>_<mois>_<année>.<ext>`.
pub fn default_file_name(site: &str, month_name: &str, year: i32, ext: &str) -> String {
    format!(
        "escala_{}_{}_{}.{}",
        site.replace(' ', "_"),
        month_name.to_lowercase(),
        year,
        ext
    )
}
