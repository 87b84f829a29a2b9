#![forbid(unsafe_code)]
use chrono::{Datelike, NaiveDate, Weekday};
use escala::calendar::{select_between, select_month};
use escala::{EventKind, SchedError};

#[test]
fn march_2025_has_communion_on_third_saturday() {
    let days = select_month(3, 2025).unwrap();
    assert_eq!(days.len(), 14);

    let rendered: Vec<String> = days
        .iter()
        .map(|d| format!("{} {}", d.date.format("%d/%m"), d.kind))
        .collect();
    insta::assert_snapshot!(rendered.join("\n"), @r###"
    02/03 Domingo Noite
    05/03 Quarta-Feira
    07/03 Sexta-Feira
    09/03 Domingo Noite
    12/03 Quarta-Feira
    14/03 Sexta-Feira
    15/03 Santa Ceia do Senhor
    16/03 Domingo Noite
    19/03 Quarta-Feira
    21/03 Sexta-Feira
    23/03 Domingo Noite
    26/03 Quarta-Feira
    28/03 Sexta-Feira
    30/03 Domingo Noite
    "###);
}

#[test]
fn every_month_is_sorted_and_weekdays_match() {
    for year in [2024, 2025, 2026] {
        for month in 1..=12 {
            let days = select_month(month, year).unwrap();
            assert!(!days.is_empty());
            for pair in days.windows(2) {
                assert!(pair[0].date < pair[1].date, "{month}/{year} not ascending");
            }
            for d in &days {
                assert_eq!(d.date.month(), month);
                let expected = match d.kind {
                    EventKind::Wednesday => Weekday::Wed,
                    EventKind::Friday => Weekday::Fri,
                    EventKind::SundayNight => Weekday::Sun,
                    EventKind::Communion => Weekday::Sat,
                };
                assert_eq!(d.date.weekday(), expected);
            }

            let communions: Vec<_> = days
                .iter()
                .filter(|d| d.kind == EventKind::Communion)
                .collect();
            assert_eq!(communions.len(), 1);
            let day = communions[0].date.day();
            assert!((15..=21).contains(&day), "third saturday, got {day}");
        }
    }
}

#[test]
fn short_range_without_three_saturdays_has_no_communion() {
    let first = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
    let last = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
    let days = select_between(first, last);
    assert!(days.iter().all(|d| d.kind != EventKind::Communion));
    assert_eq!(days.len(), 4); // 02 dim, 05 mer, 07 ven, 09 dim
}

#[test]
fn empty_range_gives_no_day() {
    let first = NaiveDate::from_ymd_opt(2025, 3, 11).unwrap();
    let last = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
    assert!(select_between(first, last).is_empty());
}

#[test]
fn invalid_month_fails_fast() {
    assert!(matches!(select_month(0, 2025), Err(SchedError::InvalidMonth(0))));
    assert!(matches!(select_month(13, 2025), Err(SchedError::InvalidMonth(13))));
    assert!(matches!(select_month(3, 1200), Err(SchedError::InvalidYear(1200))));
}

#[test]
fn month_names_parse_in_portuguese() {
    use escala::months::{month_name, parse_month};
    assert_eq!(parse_month("3").unwrap(), 3);
    assert_eq!(parse_month("março").unwrap(), 3);
    assert_eq!(parse_month("MARCO").unwrap(), 3);
    assert_eq!(parse_month(" Dezembro ").unwrap(), 12);
    assert!(parse_month("13").is_err());
    assert!(parse_month("brumaire").is_err());
    assert_eq!(month_name(3), Some("Março"));
    assert_eq!(month_name(0), None);
}
