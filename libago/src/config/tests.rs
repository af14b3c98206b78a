use super::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_default_config() {
    let config = Config::default();

    assert_eq!(config.locale, LocaleCode::new("en"));
    assert_eq!(config.fallback_locales, vec![LocaleCode::new("en")]);
    assert!(config.catalog_dir.is_none());
    assert_eq!(config.timezone, TimeZoneChoice::Local);
    assert_eq!(config.style, Style::Long);
}

#[test]
fn test_from_str_empty_yaml() {
    let config = Config::from_yaml_str("").unwrap();
    // Should be equivalent to default
    assert_eq!(config, Config::default());
}

#[test]
fn test_from_str_partial_yaml() {
    let yaml = r#"
locale: ru
style: short
"#;
    let config = Config::from_yaml_str(yaml).unwrap();

    assert_eq!(config.locale, LocaleCode::new("ru"));
    assert_eq!(config.style, Style::Short);

    // Check that other values are still default
    assert_eq!(config.timezone, TimeZoneChoice::Local);
    assert_eq!(config.fallback_locales, vec![LocaleCode::new("en")]);
}

#[test]
fn test_from_str_full_toml() {
    let toml = r#"
locale = "uk"
fallback_locales = ["ru", "en"]
catalog_dir = "/usr/share/ago/catalogs"
timezone = "utc"
style = "short"
"#;
    let config = Config::from_toml_str(toml).unwrap();

    assert_eq!(config.locale.as_str(), "uk");
    assert_eq!(
        config.fallback_locales,
        vec![LocaleCode::new("ru"), LocaleCode::new("en")]
    );
    assert_eq!(
        config.catalog_dir,
        Some(PathBuf::from("/usr/share/ago/catalogs"))
    );
    assert_eq!(config.timezone, TimeZoneChoice::Utc);
    assert_eq!(config.style, Style::Short);
}

#[test]
fn test_from_str_invalid_value() {
    let err = Config::from_yaml_str("style: tiny").unwrap_err();
    assert!(matches!(err, AgoError::Config { .. }));
}

#[test]
fn test_load_without_file_uses_defaults() {
    let config = Config::load(None).unwrap();
    // Environment may override the locale on a developer machine, but the
    // fallback chain always parses
    assert!(!config.fallback_locales.is_empty());
}

#[test]
fn test_load_toml_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "timezone = \"utc\"\nfallback_locales = [\"pl\", \"en\"]\n").unwrap();

    let config = Config::load(Some(&path)).unwrap();
    assert_eq!(config.timezone, TimeZoneChoice::Utc);
    assert_eq!(
        config.fallback_locales,
        vec![LocaleCode::new("pl"), LocaleCode::new("en")]
    );
}

#[test]
fn test_load_yaml_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.yaml");
    fs::write(&path, "style: short\n").unwrap();

    let config = Config::load(Some(&path)).unwrap();
    assert_eq!(config.style, Style::Short);
}

#[test]
fn test_load_missing_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing.toml");

    let err = Config::load(Some(&path)).unwrap_err();
    match err {
        AgoError::Config { path: reported, .. } => {
            assert_eq!(reported, Some(path.display().to_string()));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_config_roundtrips_through_toml() {
    let config = Config {
        locale: LocaleCode::new("pl"),
        catalog_dir: Some(PathBuf::from("catalogs")),
        ..Config::default()
    };

    let text = toml::to_string(&config).unwrap();
    assert!(text.contains("locale = \"pl\""));
    assert_eq!(Config::from_toml_str(&text).unwrap(), config);
}
