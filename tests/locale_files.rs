use fraction_core::locale::english;
use fraction_core::persistence::{
    load_tables, load_tables_auto, load_tables_json, save_tables, save_tables_json,
};
use fraction_core::{parse_fraction_with, FractionParser, Grammar, LocaleError, LocaleTables};
use std::fs;
use tempfile::tempdir;

fn spanish() -> LocaleTables {
    let mut tables = english::tables();
    tables.name = "es-test".into();
    tables.junction = r"\by\b".into();
    tables.over = r"\s*(?:\bsobre\b|/)\s*".into();
    tables.point = r"\s*(?:\bcoma\b|\.)\s*".into();
    for (word, value) in [("uno", 1.0), ("dos", 2.0), ("tres", 3.0)] {
        tables.units.insert(word.into(), value);
    }
    for (word, value) in [("medio", 2.0), ("tercio", 3.0), ("tercios", 3.0)] {
        tables.ordinal_units.insert(word.into(), value);
    }
    tables
}

fn pair(text: &str, grammar: &Grammar) -> (i64, i64) {
    let f = parse_fraction_with(text, grammar).unwrap_or_else(|e| panic!("`{}` failed: {}", text, e));
    (f.numerator(), f.denominator())
}

#[test]
fn snapshot_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("english.bin");

    save_tables(&english::tables(), &path).unwrap();
    assert_eq!(load_tables(&path).unwrap(), english::tables());
    assert_eq!(load_tables_auto(&path).unwrap(), english::tables());
}

#[test]
fn json_round_trip_creates_parent_dirs() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("locales").join("spanish.json");

    save_tables_json(&spanish(), &path).unwrap();
    assert_eq!(load_tables_json(&path).unwrap(), spanish());
    assert_eq!(load_tables_auto(&path).unwrap(), spanish());
}

#[test]
fn saving_twice_replaces_the_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("locale.json");

    save_tables_json(&english::tables(), &path).unwrap();
    save_tables_json(&spanish(), &path).unwrap();
    assert_eq!(load_tables_json(&path).unwrap().name, "es-test");
}

#[test]
fn load_errors_are_typed() {
    let dir = tempdir().unwrap();

    let missing = dir.path().join("nope.bin");
    assert!(matches!(load_tables(&missing), Err(LocaleError::Io(_))));

    let broken_json = dir.path().join("broken.json");
    fs::write(&broken_json, "{ \"name\": ").unwrap();
    assert!(matches!(load_tables_auto(&broken_json), Err(LocaleError::Json(_))));

    let broken_snapshot = dir.path().join("broken.bin");
    fs::write(&broken_snapshot, b"\xff\xff\xff\xff\xff\xff\xff\xff").unwrap();
    assert!(matches!(load_tables(&broken_snapshot), Err(LocaleError::Snapshot(_))));
}

#[test]
fn custom_locale_parses_its_own_words() {
    let grammar = Grammar::from_tables(spanish()).unwrap();
    assert_eq!(grammar.name(), "es-test");

    assert_eq!(pair("dos tercios", &grammar), (2, 3));
    assert_eq!(pair("uno y medio", &grammar), (3, 2));
    assert_eq!(pair("dos coma tres", &grammar), (23, 10));
    assert_eq!(pair("tres sobre dos", &grammar), (3, 2));
    assert_eq!(pair("9 1/2", &grammar), (19, 2));
}

#[test]
fn loaded_locale_behaves_like_the_saved_one() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("spanish.json");
    save_tables_json(&spanish(), &path).unwrap();

    let grammar = Grammar::from_tables(load_tables_auto(&path).unwrap()).unwrap();
    let parser = FractionParser::new(&grammar);
    assert_eq!(parser.parse("dos tercios").unwrap().to_string(), "2/3");
}

#[test]
fn bad_matcher_in_a_file_is_reported() {
    let mut tables = spanish();
    tables.point = "(coma".into();
    match Grammar::from_tables(tables) {
        Err(LocaleError::Matcher { name, .. }) => assert_eq!(name, "point"),
        other => panic!("expected matcher error, got {:?}", other.err()),
    }
}
