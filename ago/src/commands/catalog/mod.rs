use crate::format::Formattable;
use libago::plural::has_plural_forms;
use libago::{Catalog, Config, LocaleCode};
use serde::Serialize;
use tabled::Tabled;

pub mod handlers;

/// Catalog locale summary for display purposes
#[derive(Debug, Tabled, Serialize)]
pub struct LocaleSummary {
    #[tabled(rename = "LOCALE")]
    pub locale: String,
    #[tabled(rename = "ENTRIES")]
    pub entries: usize,
    #[tabled(rename = "PLURALS")]
    pub plural_forms: String,
    #[tabled(rename = "MISSING")]
    pub missing: usize,
}

impl Formattable for LocaleSummary {
    fn format_pretty(&self) -> String {
        format!(
            "{}: {} entries, {} missing",
            self.locale, self.entries, self.missing
        )
    }
}

/// Coverage of the keys the formatters may request for one locale
#[derive(Debug, Serialize)]
pub struct CoverageReport {
    pub locale: String,
    pub required: usize,
    /// Keys no locale in the lookup order provides
    pub missing: Vec<String>,
    /// Keys served by a fallback locale rather than this one
    pub inherited: Vec<String>,
}

impl CoverageReport {
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

impl Formattable for CoverageReport {
    fn format_pretty(&self) -> String {
        let mut output = format!(
            "Locale: {}\nRequired keys: {}\n",
            self.locale, self.required
        );
        if self.is_complete() {
            output.push_str("Status: ✓ Complete\n");
        } else {
            output.push_str(&format!("Status: ✗ {} missing\n", self.missing.len()));
            for key in &self.missing {
                output.push_str(&format!("  - {}\n", key));
            }
        }
        if !self.inherited.is_empty() {
            output.push_str(&format!(
                "Inherited from fallback: {}\n",
                self.inherited.join(", ")
            ));
        }
        output
    }
}

/// Catalog the formatters would use under `config`
pub fn load_catalog(config: &Config) -> Result<Catalog, String> {
    let mut catalog = Catalog::builtin();
    catalog.set_fallback_chain(config.fallback_locales.clone());
    if let Some(dir) = &config.catalog_dir {
        catalog.load_dir(dir).map_err(|e| e.to_string())?;
    }
    Ok(catalog)
}

/// One summary row per locale of the catalog
pub fn list_locales(catalog: &Catalog) -> Vec<LocaleSummary> {
    catalog
        .locales()
        .into_iter()
        .map(|tag| {
            let locale = LocaleCode::new(tag);
            LocaleSummary {
                locale: tag.to_string(),
                entries: catalog.strings(tag).map_or(0, |s| s.len()),
                plural_forms: if has_plural_forms(&locale) {
                    "3".to_string()
                } else {
                    "1".to_string()
                },
                missing: catalog.missing_keys(&locale).len(),
            }
        })
        .collect()
}

/// Coverage of `locale` in `catalog`
pub fn check_locale(catalog: &Catalog, locale: &LocaleCode) -> CoverageReport {
    let required = Catalog::required_keys(locale);
    let missing = catalog.missing_keys(locale);
    let own = catalog.strings(locale.as_str());
    let inherited = required
        .iter()
        .filter(|key| !missing.contains(*key))
        .filter(|key| own.and_then(|s| s.get(key)).is_none())
        .cloned()
        .collect();

    CoverageReport {
        locale: locale.to_string(),
        required: required.len(),
        missing,
        inherited,
    }
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
