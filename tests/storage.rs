#![forbid(unsafe_code)]
use escala::{JsonStorage, Roster, SchedError, Site, SiteBook, Storage};
use std::fs;
use tempfile::tempdir;

#[test]
fn site_book_roundtrip() {
    let dir = tempdir().unwrap();
    let storage = JsonStorage::open(dir.path().join("sites.json")).unwrap();
    assert!(storage.load_or_default().unwrap().sites.is_empty());

    let mut book = SiteBook::default();
    book.upsert(
        "Templo Central",
        Site {
            roster: Roster {
                men_home: vec!["Dc. Edson".into()],
                women_home: vec!["Dca. Jane".into()],
                ..Roster::default()
            },
            logo_path: Some("pics/logo.png".into()),
        },
    );
    storage.save(&book).unwrap();
    assert_eq!(storage.load().unwrap(), book);
}

#[test]
fn legacy_portuguese_keys_are_accepted() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("sites.json");
    fs::write(
        &path,
        r#"{"ADPaulista": {"homens_sede": ["Dc. Ely"], "mulheres_sede": ["Dca. Carla"],
            "homens_nao_sede": ["Coop. Ryan"], "mulheres_nao_sede": [],
            "logo_path": "pics/logo-adpaulista.png"}}"#,
    )
    .unwrap();
    let book = JsonStorage::open(&path).unwrap().load().unwrap();
    let site = book.site("ADPaulista").unwrap();
    assert_eq!(site.roster.men_home, vec!["Dc. Ely"]);
    assert_eq!(site.roster.men_visiting, vec!["Coop. Ryan"]);
    assert!(site.roster.women_visiting.is_empty());
    assert_eq!(site.logo_path.as_deref(), Some(std::path::Path::new("pics/logo-adpaulista.png")));
}

#[test]
fn unknown_site_is_reported() {
    let book = SiteBook::default();
    assert!(matches!(book.site("Nowhere"), Err(SchedError::UnknownSite(_))));
}

#[test]
fn shared_names_are_detected() {
    let roster = Roster {
        men_home: vec!["Dc. Ely".into()],
        men_visiting: vec!["Dc. Ely".into(), "Coop. Ryan".into()],
        ..Roster::default()
    };
    assert_eq!(roster.shared_names(), vec!["Dc. Ely".to_string()]);
}
