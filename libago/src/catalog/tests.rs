use super::*;
use std::fs;
use tempfile::TempDir;

fn code(tag: &str) -> LocaleCode {
    LocaleCode::new(tag)
}

#[test]
fn test_builtin_locales() {
    let catalog = Catalog::builtin();
    assert_eq!(catalog.locales(), vec!["en", "pl", "ru", "uk"]);
    assert_eq!(catalog.fallback_chain(), ["en".to_string()]);
}

#[test]
fn test_builtin_catalogs_cover_required_keys() {
    let catalog = Catalog::builtin();
    for tag in ["en", "pl", "ru", "uk"] {
        let locale = code(tag);
        let own = catalog.strings(tag).unwrap();
        let missing: Vec<String> = Catalog::required_keys(&locale)
            .into_iter()
            .filter(|key| own.get(key).is_none())
            .collect();
        assert!(missing.is_empty(), "{tag} is missing {missing:?}");
    }
}

#[test]
fn test_required_keys_for_plain_locale() {
    let keys = Catalog::required_keys(&code("en"));

    assert_eq!(keys.len(), LONG_FORM_KEYS.len() + ShortUnit::ALL.len());
    assert!(keys.contains(&"time_0_seconds_ago".to_string()));
    assert!(keys.contains(&"%dM".to_string()));
    assert!(!keys.contains(&"%d_M".to_string()));
}

#[test]
fn test_required_keys_for_slavic_locale() {
    let keys = Catalog::required_keys(&code("ru"));

    assert_eq!(keys.len(), LONG_FORM_KEYS.len() + 3 * ShortUnit::ALL.len());
    for key in ["%dd", "%d_d", "%d__d"] {
        assert!(keys.contains(&key.to_string()), "missing {key}");
    }
}

#[test]
fn test_lookup_exact_locale() {
    let catalog = Catalog::builtin();
    assert_eq!(catalog.get(&code("pl"), "time_one_day_ago"), Some("1 dzień temu"));
}

#[test]
fn test_lookup_region_falls_back_to_language() {
    let catalog = Catalog::builtin();
    assert_eq!(catalog.get(&code("ru_RU"), "%d_d"), Some("%dд"));
    assert_eq!(catalog.get(&code("RU-ru"), "%d_d"), Some("%dд"));
}

#[test]
fn test_lookup_unknown_locale_uses_fallback_chain() {
    let catalog = Catalog::builtin();
    assert_eq!(
        catalog.get(&code("fr"), "time_few_days_ago"),
        Some("%d days ago")
    );
}

#[test]
fn test_lookup_missing_key_returns_key() {
    let catalog = Catalog::builtin();
    assert_eq!(catalog.get(&code("en"), "%d___d"), None);
    assert_eq!(catalog.lookup(&code("en"), "%d___d"), "%d___d");
}

#[test]
fn test_empty_catalog_resolves_everything_to_keys() {
    let catalog = Catalog::new();
    assert!(catalog.locales().is_empty());
    assert_eq!(catalog.lookup(&code("en"), "time_one_day_ago"), "time_one_day_ago");
}

#[test]
fn test_fallback_chain_order() {
    let mut catalog = Catalog::new();

    let mut en = LocaleStrings::new();
    en.insert("time_one_day_ago", "yesterday");
    en.insert("time_0_seconds_ago", "just now");
    catalog.add_locale("en", en);

    let mut pl = LocaleStrings::new();
    pl.insert("time_one_day_ago", "wczoraj");
    catalog.add_locale("pl", pl);

    catalog.set_fallback_chain(vec![code("pl"), code("en")]);

    let de = code("de");
    assert_eq!(catalog.get(&de, "time_one_day_ago"), Some("wczoraj"));
    assert_eq!(catalog.get(&de, "time_0_seconds_ago"), Some("just now"));
}

#[test]
fn test_merge_locale_overrides_single_entries() {
    let mut catalog = Catalog::builtin();

    let mut en = LocaleStrings::new();
    en.insert("time_one_day_ago", "yesterday");
    catalog.merge_locale("en", en);

    let en = code("en");
    assert_eq!(catalog.get(&en, "time_one_day_ago"), Some("yesterday"));
    assert_eq!(catalog.get(&en, "time_few_days_ago"), Some("%d days ago"));
}

#[test]
fn test_add_locale_replaces_table() {
    let mut catalog = Catalog::builtin();
    catalog.add_locale("pl", LocaleStrings::new());

    assert!(catalog.strings("pl").unwrap().is_empty());
    // Falls through to English now
    assert_eq!(
        catalog.get(&code("pl"), "time_one_day_ago"),
        Some("1 day ago")
    );
}

#[test]
fn test_missing_keys_with_and_without_fallback() {
    let mut catalog = Catalog::new();
    let mut uk = LocaleStrings::new();
    uk.insert("time_one_day_ago", "вчора");
    catalog.add_locale("uk", uk);

    let uk = code("uk");
    let missing = catalog.missing_keys(&uk);
    assert_eq!(missing.len(), Catalog::required_keys(&uk).len() - 1);
    assert!(!missing.contains(&"time_one_day_ago".to_string()));

    let builtin = Catalog::builtin();
    assert!(builtin.missing_keys(&code("de")).is_empty());
}

#[test]
fn test_locale_strings_parsing() {
    let strings = LocaleStrings::from_toml_str("time_one_day_ago = \"gestern\"\n\"%dd\" = \"%d T.\"\n").unwrap();
    assert_eq!(strings.len(), 2);
    assert_eq!(strings.get("%dd"), Some("%d T."));

    let strings = LocaleStrings::from_json_str(r#"{"time_one_day_ago": "hier"}"#).unwrap();
    assert_eq!(strings.get("time_one_day_ago"), Some("hier"));

    let strings = LocaleStrings::from_toml_str("b = \"B\"\na = \"A\"").unwrap();
    let mut keys: Vec<&str> = strings.keys().collect();
    keys.sort_unstable();
    assert_eq!(keys, vec!["a", "b"]);
}

#[test]
fn test_locale_strings_rejects_nested_tables() {
    let err = LocaleStrings::from_toml_str("[section]\nkey = \"value\"").unwrap_err();
    assert!(matches!(err, AgoError::Catalog { .. }));
}

#[test]
fn test_load_dir_merges_files() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("de.toml"), "time_one_day_ago = \"gestern\"\n").unwrap();
    fs::write(dir.path().join("fr.json"), r#"{"time_one_day_ago": "hier"}"#).unwrap();
    fs::write(dir.path().join("en.toml"), "time_one_day_ago = \"yesterday\"\n").unwrap();
    fs::write(dir.path().join("README.md"), "not a catalog").unwrap();
    fs::create_dir(dir.path().join("nested")).unwrap();
    fs::write(dir.path().join("nested").join("it.toml"), "time_one_day_ago = \"ieri\"\n").unwrap();

    let mut catalog = Catalog::builtin();
    let loaded = catalog.load_dir(dir.path()).unwrap();

    assert_eq!(loaded, 3);
    assert_eq!(catalog.locales(), vec!["de", "en", "fr", "pl", "ru", "uk"]);
    assert_eq!(catalog.get(&code("de"), "time_one_day_ago"), Some("gestern"));
    assert_eq!(catalog.get(&code("fr"), "time_one_day_ago"), Some("hier"));
    assert_eq!(catalog.get(&code("en"), "time_one_day_ago"), Some("yesterday"));
    assert_eq!(catalog.get(&code("en"), "time_few_days_ago"), Some("%d days ago"));
    assert!(catalog.strings("it").is_none());
}

#[test]
fn test_load_dir_reports_malformed_file() {
    let dir = TempDir::new().unwrap();
    let bad = dir.path().join("ru.toml");
    fs::write(&bad, "this is = = not toml").unwrap();

    let err = Catalog::new().load_dir(dir.path()).unwrap_err();
    match err {
        AgoError::Catalog { path, .. } => {
            assert_eq!(path, Some(bad.display().to_string()));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_load_dir_missing_directory() {
    let dir = TempDir::new().unwrap();
    let err = Catalog::new()
        .load_dir(&dir.path().join("does-not-exist"))
        .unwrap_err();
    assert!(matches!(err, AgoError::Catalog { .. }));
}
