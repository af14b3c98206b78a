use super::*;

fn ru() -> LocaleCode {
    LocaleCode::new("ru")
}

#[test]
fn test_variant_infixes() {
    assert_eq!(PluralVariant::Many.infix(), "");
    assert_eq!(PluralVariant::Few.infix(), "_");
    assert_eq!(PluralVariant::One.infix(), "__");
}

#[test]
fn test_slavic_one() {
    for n in [1, 21, 31, 101, 1001] {
        assert_eq!(resolve(&ru(), n as f64), PluralVariant::One, "n = {n}");
    }
}

#[test]
fn test_slavic_few() {
    for n in [2, 3, 4, 22, 23, 24, 102, 1004] {
        assert_eq!(resolve(&ru(), n as f64), PluralVariant::Few, "n = {n}");
    }
}

#[test]
fn test_slavic_many() {
    for n in [0, 5, 9, 10, 11, 12, 13, 14, 15, 19, 20, 25, 100, 111, 112] {
        assert_eq!(resolve(&ru(), n as f64), PluralVariant::Many, "n = {n}");
    }
}

#[test]
fn test_fractional_values_are_floored() {
    assert_eq!(resolve(&ru(), 21.9), PluralVariant::One);
    assert_eq!(resolve(&ru(), 4.99), PluralVariant::Few);
}

#[test]
fn test_ukrainian_follows_slavic_rule() {
    let uk = LocaleCode::new("uk");
    assert_eq!(infix(&uk, 1.0), "__");
    assert_eq!(infix(&uk, 3.0), "_");
    assert_eq!(infix(&uk, 11.0), "");
}

#[test]
fn test_region_tag_uses_language() {
    let ru_ru = LocaleCode::new("ru-RU");
    assert!(has_plural_forms(&ru_ru));
    assert_eq!(infix(&ru_ru, 21.0), "__");
}

#[test]
fn test_other_locales_never_distinguish() {
    for tag in ["en", "pl", "de", "", "xx-YY"] {
        let locale = LocaleCode::new(tag);
        assert!(!has_plural_forms(&locale));
        for n in [0, 1, 2, 3, 5, 21] {
            assert_eq!(infix(&locale, n as f64), "", "{tag:?} n = {n}");
        }
    }
}
