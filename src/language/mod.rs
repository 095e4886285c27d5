//! Language and region display names
//!
//! Resolves the codes found in subtitle file names to the human readable
//! NAME attribute of a subtitle rendition. Resolution never fails: an
//! unknown code is logged and shown upper-cased.

use std::collections::HashMap;
use tracing::warn;

pub mod tables;

/// Resolved language metadata for a subtitle track
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageInfo {
    pub language: String,
    pub region: Option<String>,
    pub display_name: String,
}

/// Maps language and region codes to display names
#[derive(Debug, Clone)]
pub struct LanguageResolver {
    languages: HashMap<String, String>,
    regions: HashMap<String, String>,
}

impl LanguageResolver {
    /// Create a resolver over the given code tables. Keys are matched
    /// case-insensitively.
    pub fn new<L, R>(languages: L, regions: R) -> Self
    where
        L: IntoIterator<Item = (String, String)>,
        R: IntoIterator<Item = (String, String)>,
    {
        Self {
            languages: languages
                .into_iter()
                .map(|(code, name)| (code.to_lowercase(), name))
                .collect(),
            regions: regions
                .into_iter()
                .map(|(code, name)| (code.to_lowercase(), name))
                .collect(),
        }
    }

    /// Resolver backed by the ISO 639-1 and ISO 3166-1 tables
    pub fn iso() -> Self {
        Self::new(
            tables::LANGUAGES
                .iter()
                .map(|(code, name)| (code.to_string(), name.to_string())),
            tables::REGIONS
                .iter()
                .map(|(code, name)| (code.to_string(), name.to_string())),
        )
    }

    /// Display name for a language and optional region, e.g. `English (Canada)`
    pub fn resolve(&self, language: &str, region: Option<&str>) -> String {
        self.resolve_info(language, region).display_name
    }

    /// Normalised codes plus display name
    pub fn resolve_info(&self, language: &str, region: Option<&str>) -> LanguageInfo {
        let language = language.to_lowercase();
        let region = region.map(str::to_lowercase);

        let mut display_name = match self.languages.get(&language) {
            Some(name) => name.clone(),
            None => {
                warn!(
                    "Unknown language code: {}. Using code as display name.",
                    language
                );
                language.to_uppercase()
            }
        };

        if let Some(region) = &region {
            let region_name = match self.regions.get(region) {
                Some(name) => name.clone(),
                None => {
                    warn!(
                        "Unknown region code: {}. Using code as display name.",
                        region
                    );
                    region.to_uppercase()
                }
            };
            display_name = format!("{} ({})", display_name, region_name);
        }

        LanguageInfo {
            language,
            region,
            display_name,
        }
    }
}

impl Default for LanguageResolver {
    fn default() -> Self {
        Self::iso()
    }
}
