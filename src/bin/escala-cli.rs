#![forbid(unsafe_code)]
use anyhow::{Context, Result};
use chrono::{Datelike, Utc};
use clap::{Parser, Subcommand};
use escala::{
    calendar,
    export::{self, CsvSheetExporter, SheetRequest},
    io, months,
    model::Site,
    scheduler::ScheduleBuilder,
    storage::{JsonStorage, Storage},
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// Générateur d'escala des obreiros
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    /// Fichier JSON des églises
    #[arg(long, global = true, default_value = "sites.json")]
    sites: String,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Lister les jours de culte du mois
    Days {
        /// 1-12 ou nom du mois (ex. "março")
        #[arg(long)]
        month: String,
        #[arg(long)]
        year: Option<i32>,
    },

    /// Lister les églises connues
    Sites,

    /// Créer ou remplacer l'effectif d'une église depuis un CSV
    ImportRoster {
        #[arg(long)]
        site: String,
        /// header `name,group`
        #[arg(long)]
        csv: String,
        #[arg(long)]
        logo: Option<PathBuf>,
    },

    /// Générer l'escala du mois
    Generate {
        #[arg(long)]
        site: String,
        /// 1-12 ou nom du mois (ex. "março")
        #[arg(long)]
        month: String,
        #[arg(long)]
        year: Option<i32>,
        /// Graine pour un tirage reproductible
        #[arg(long)]
        seed: Option<u64>,
        /// Feuille CSV formatée
        #[arg(long)]
        out: Option<PathBuf>,
        /// Export JSON (escala + charges)
        #[arg(long)]
        json: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();
    }

    let storage = JsonStorage::open(&cli.sites)?;

    let code = match cli.cmd {
        Commands::Days { month, year } => {
            let month = months::parse_month(&month)?;
            let year = year.unwrap_or_else(|| Utc::now().year());
            let days = calendar::select_month(month, year)?;
            if days.is_empty() {
                println!("nothing to generate");
            }
            for d in &days {
                println!("{} | {}", d.date.format("%d/%m"), d.kind);
            }
            0
        }
        Commands::Sites => {
            let book = storage.load_or_default()?;
            for (name, site) in &book.sites {
                println!("{} | {} obreiros", name, site.roster.len());
            }
            0
        }
        Commands::ImportRoster { site, csv, logo } => {
            let roster = io::import_roster_csv(&csv)?;
            for name in roster.shared_names() {
                eprintln!("Warning: {name} appears in several groups (shared counter)");
            }
            let mut book = storage.load_or_default()?;
            book.upsert(site, Site { roster, logo_path: logo });
            storage.save(&book)?;
            0
        }
        Commands::Generate {
            site,
            month,
            year,
            seed,
            out,
            json,
        } => {
            let month = months::parse_month(&month)?;
            let month_name = months::month_name(month).context("month name")?;
            let year = year.unwrap_or_else(|| Utc::now().year());
            let book = storage
                .load()
                .with_context(|| format!("loading sites from {}", storage.path().display()))?;
            let entry = book.site(&site)?;
            for name in entry.roster.shared_names() {
                eprintln!("Warning: {name} appears in several groups (shared counter)");
            }

            let rng = match seed {
                Some(s) => StdRng::seed_from_u64(s),
                None => StdRng::from_entropy(),
            };
            let schedule = ScheduleBuilder::new(&entry.roster).build(month, year, rng)?;

            if schedule.is_empty() {
                println!("nothing to generate");
                0
            } else {
                println!("ESCALA DE OBREIROS - {}/{}", month_name.to_uppercase(), year);
                for day in &schedule.days {
                    println!("{}", export::table_row(day).join(" | "));
                }
                println!();
                for (name, count) in schedule.workload.iter() {
                    println!("{name}: {count}");
                }

                if let Some(path) = out {
                    let sheet = SheetRequest {
                        days: &schedule.days,
                        month_name,
                        year,
                        logo: entry.logo_path.as_deref(),
                    };
                    export::export_sheet_to_path(&path, &CsvSheetExporter, &sheet)?;
                    println!("Sheet written to {}", path.display());
                } else {
                    println!(
                        "Tip: --out {}",
                        export::default_file_name(&site, month_name, year, "csv")
                    );
                }
                if let Some(path) = json {
                    io::export_schedule_json(&path, &schedule)?;
                }

                let gaps = schedule.gap_count();
                if gaps > 0 {
                    eprintln!("Incomplete: {gaps} seat(s) without obreiro");
                    // Code 2 = WARNING/INCOMPLETE
                    2
                } else {
                    0
                }
            }
        }
    };

    std::process::exit(code);
}
