use super::*;
use libago::catalog::LocaleStrings;
use std::fs;
use std::path::PathBuf;

#[test]
fn test_list_builtin_locales() {
    let catalog = load_catalog(&Config::default()).unwrap();
    let rows = list_locales(&catalog);

    let tags: Vec<&str> = rows.iter().map(|r| r.locale.as_str()).collect();
    assert_eq!(tags, vec!["en", "pl", "ru", "uk"]);

    let ru = &rows[2];
    assert_eq!(ru.plural_forms, "3");
    assert_eq!(ru.entries, 27);
    assert_eq!(ru.missing, 0);

    let en = &rows[0];
    assert_eq!(en.plural_forms, "1");
    assert_eq!(en.entries, 13);
}

#[test]
fn test_locale_summary_pretty() {
    let row = LocaleSummary {
        locale: "pl".to_string(),
        entries: 13,
        plural_forms: "1".to_string(),
        missing: 0,
    };
    assert_eq!(row.format_pretty(), "pl: 13 entries, 0 missing");
}

#[test]
fn test_check_builtin_locale_is_complete() {
    let catalog = load_catalog(&Config::default()).unwrap();
    let report = check_locale(&catalog, &LocaleCode::new("uk"));

    assert!(report.is_complete());
    assert_eq!(report.required, 27);
    assert!(report.inherited.is_empty());
}

#[test]
fn test_check_unknown_locale_inherits_from_fallback() {
    let catalog = load_catalog(&Config::default()).unwrap();
    let report = check_locale(&catalog, &LocaleCode::new("fr"));

    assert!(report.is_complete());
    assert_eq!(report.inherited.len(), report.required);
}

#[test]
fn test_check_reports_missing_keys() {
    let mut catalog = Catalog::new();
    let mut ru = LocaleStrings::new();
    ru.insert("time_one_day_ago", "вчера");
    catalog.add_locale("ru", ru);

    let report = check_locale(&catalog, &LocaleCode::new("ru"));
    assert!(!report.is_complete());
    assert_eq!(report.missing.len(), report.required - 1);
    assert!(report.missing.contains(&"%d__y".to_string()));

    let pretty = report.format_pretty();
    assert!(pretty.contains("Status: ✗ 26 missing"));
    assert!(pretty.contains("  - time_few_days_ago"));
}

#[test]
fn test_coverage_pretty_when_complete() {
    let report = CoverageReport {
        locale: "en".to_string(),
        required: 13,
        missing: vec![],
        inherited: vec!["%dy".to_string()],
    };
    let pretty = report.format_pretty();
    assert!(pretty.contains("Status: ✓ Complete"));
    assert!(pretty.contains("Inherited from fallback: %dy"));
}

#[test]
fn test_load_catalog_merges_directory() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("de.toml"), "time_few_days_ago = \"vor %d Tagen\"\n").unwrap();

    let config = Config {
        catalog_dir: Some(dir.path().to_path_buf()),
        ..Config::default()
    };
    let catalog = load_catalog(&config).unwrap();
    assert!(catalog.locales().contains(&"de"));

    let report = check_locale(&catalog, &LocaleCode::new("de"));
    assert!(report.is_complete());
    assert_eq!(report.inherited.len(), report.required - 1);
}

#[test]
fn test_load_catalog_missing_directory() {
    let config = Config {
        catalog_dir: Some(PathBuf::from("/nonexistent/ago/catalogs")),
        ..Config::default()
    };
    let err = load_catalog(&config).unwrap_err();
    assert!(err.contains("Catalog error"));
}
