use super::*;
use libago::LocaleCode;

// Note: Most of the logic is tested in config module tests.
// These tests focus on the Formattable implementation.

fn display(config: Config) -> ConfigDisplay {
    ConfigDisplay {
        path: "/home/user/.config/ago/config.toml".to_string(),
        config,
    }
}

#[test]
fn test_config_format_pretty() {
    let output = display(Config::default()).format_pretty();
    assert!(output.starts_with("# /home/user/.config/ago/config.toml\n"));
    assert!(output.contains("locale = en\n"));
    assert!(output.contains("fallback_locales = en\n"));
    assert!(output.contains("timezone = local\n"));
    assert!(output.contains("style = long\n"));
}

#[test]
fn test_config_format_pretty_with_values() {
    let config = Config {
        locale: LocaleCode::new("ru"),
        fallback_locales: vec![LocaleCode::new("uk"), LocaleCode::new("en")],
        ..Config::default()
    };

    let output = display(config).format_pretty();
    assert!(output.contains("locale = ru\n"));
    assert!(output.contains("fallback_locales = uk,en\n"));
}

#[test]
fn test_config_serialization_is_flat() {
    let json = serde_json::to_value(display(Config::default())).unwrap();
    assert_eq!(json["path"], "/home/user/.config/ago/config.toml");
    assert_eq!(json["locale"], "en");
    assert_eq!(json["style"], "long");
}
