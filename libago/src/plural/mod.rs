//! Numeral plural variants.
//!
//! Only Russian and Ukrainian distinguish variants. The variant is encoded
//! as an underscore infix that becomes part of a short-form catalog key
//! (`%d_d`, `%d__y`), so a catalog can hold one template per grammatical
//! form without any plural machinery of its own.

use crate::locale::LocaleCode;
use serde::Serialize;

#[cfg(test)]
mod tests;

/// Languages that use the three-form Slavic rule.
const SLAVIC_LANGUAGES: &[&str] = &["ru", "uk"];

/// Plural category of a count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PluralVariant {
    /// Zero, 5–20, 11–14 and the default for non-Slavic locales.
    Many,
    /// Counts ending in 2–4, except 12–14.
    Few,
    /// Counts ending in 1, except 11.
    One,
}

impl PluralVariant {
    /// All variants, in infix length order.
    pub const ALL: [PluralVariant; 3] = [PluralVariant::Many, PluralVariant::Few, PluralVariant::One];

    /// Key infix for this variant.
    pub fn infix(self) -> &'static str {
        match self {
            PluralVariant::Many => "",
            PluralVariant::Few => "_",
            PluralVariant::One => "__",
        }
    }
}

/// Whether `locale` distinguishes plural variants at all.
pub fn has_plural_forms(locale: &LocaleCode) -> bool {
    SLAVIC_LANGUAGES.contains(&locale.language().as_str())
}

/// Resolves the plural variant of `value` for `locale`.
///
/// # Examples
///
/// ```
/// use libago::LocaleCode;
/// use libago::plural::{PluralVariant, resolve};
///
/// let ru = LocaleCode::new("ru");
/// assert_eq!(resolve(&ru, 21.0), PluralVariant::One);
/// assert_eq!(resolve(&ru, 3.0), PluralVariant::Few);
/// assert_eq!(resolve(&ru, 5.0), PluralVariant::Many);
/// assert_eq!(resolve(&LocaleCode::new("en"), 21.0), PluralVariant::Many);
/// ```
pub fn resolve(locale: &LocaleCode, value: f64) -> PluralVariant {
    if !has_plural_forms(locale) {
        return PluralVariant::Many;
    }
    slavic(value.floor() as i64)
}

/// Key infix for `value` in `locale`: `""`, `"_"` or `"__"`.
pub fn infix(locale: &LocaleCode, value: f64) -> &'static str {
    resolve(locale, value).infix()
}

fn slavic(n: i64) -> PluralVariant {
    let last_two = n % 100;
    let last_one = n % 10;

    if last_one == 0 || last_one > 4 || (last_two > 10 && last_two < 15) {
        return PluralVariant::Many;
    }
    if (2..=4).contains(&last_one) && !(10..=20).contains(&last_two) {
        return PluralVariant::Few;
    }
    if last_one == 1 && last_two != 11 {
        return PluralVariant::One;
    }
    PluralVariant::Many
}
