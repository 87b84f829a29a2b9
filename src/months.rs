use anyhow::{bail, Result};

const NAMES: [&str; 12] = [
    "Janeiro",
    "Fevereiro",
    "Março",
    "Abril",
    "Maio",
    "Junho",
    "Julho",
    "Agosto",
    "Setembro",
    "Outubro",
    "Novembro",
    "Dezembro",
];

/// Nom portugais du mois (1-12).
pub fn month_name(month: u32) -> Option<&'static str> {
    let idx = usize::try_from(month).ok()?.checked_sub(1)?;
    NAMES.get(idx).copied()
}

/// Accepte `3`, `03`, `Março`, `marco`, `MARÇO`.
pub fn parse_month(raw: &str) -> Result<u32> {
    let raw = raw.trim();
    if let Ok(n) = raw.parse::<u32>() {
        if (1..=12).contains(&n) {
            return Ok(n);
        }
        bail!("month out of range: {n}");
    }
    let wanted = fold(raw);
    match NAMES.iter().position(|name| fold(name) == wanted) {
        Some(idx) => Ok(idx as u32 + 1),
        None => bail!("unknown month: {raw}"),
    }
}

fn fold(s: &str) -> String {
    s.to_lowercase().replace('ç', "c")
}
