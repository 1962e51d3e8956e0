use crate::reference;
use adjudex_protocol::GuidelineCode;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CatalogError>;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog JSON is invalid: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unsupported catalog schema version {found} (expected {expected})")]
    SchemaVersion { found: u32, expected: u32 },
    #[error("catalog entry '{0}' is not a guideline code A-M")]
    UnknownCode(String),
    #[error("catalog is missing guideline {0}")]
    MissingGuideline(GuidelineCode),
}

/// A single cited disqualifying or mitigating condition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Condition {
    /// Paragraph citation, e.g. "AG ¶ 19(a)".
    pub code: String,
    pub text: String,
}

/// Reference entry for one guideline: name, concern paragraph, and the cited
/// disqualifying and mitigating conditions in their published order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuidelineRef {
    pub code: GuidelineCode,
    pub name: String,
    pub concern: String,
    pub disqualifiers: Vec<Condition>,
    pub mitigators: Vec<Condition>,
}

impl GuidelineRef {
    /// Combined "name. concern" reference text used by the relevance scorers.
    #[must_use]
    pub fn reference_text(&self) -> String {
        format!("{}. {}", self.name, self.concern)
    }
}

const CATALOG_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Deserialize)]
struct CatalogFile {
    schema_version: u32,
    guidelines: BTreeMap<String, CatalogFileEntry>,
}

#[derive(Debug, Deserialize)]
struct CatalogFileEntry {
    name: String,
    concern: String,
    #[serde(default)]
    disqualifiers: Vec<Condition>,
    #[serde(default)]
    mitigators: Vec<Condition>,
}

/// Immutable reference catalog covering all 13 guidelines.
///
/// Built once (either from the compiled-in tables or an external JSON file)
/// and passed by reference into the classifiers; never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: BTreeMap<GuidelineCode, GuidelineRef>,
}

static BUILTIN: Lazy<Catalog> = Lazy::new(Catalog::from_reference_tables);

impl Catalog {
    /// The compiled-in SEAD-4 catalog.
    #[must_use]
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    fn from_reference_tables() -> Self {
        let mut entries = BTreeMap::new();
        for raw in reference::GUIDELINES {
            let code = GuidelineCode::from_char(raw.code)
                .expect("built-in reference table uses codes A-M");
            entries.insert(
                code,
                GuidelineRef {
                    code,
                    name: raw.name.to_string(),
                    concern: raw.concern.to_string(),
                    disqualifiers: raw
                        .disqualifiers
                        .iter()
                        .map(|c| Condition {
                            code: c.code.to_string(),
                            text: c.text.to_string(),
                        })
                        .collect(),
                    mitigators: raw
                        .mitigators
                        .iter()
                        .map(|c| Condition {
                            code: c.code.to_string(),
                            text: c.text.to_string(),
                        })
                        .collect(),
                },
            );
        }
        Self { entries }
    }

    /// Load a replacement catalog from external JSON configuration.
    ///
    /// The file must cover all 13 guidelines; a partial catalog would break
    /// the one-assessment-per-code invariant downstream.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(json)?;
        if file.schema_version != CATALOG_SCHEMA_VERSION {
            return Err(CatalogError::SchemaVersion {
                found: file.schema_version,
                expected: CATALOG_SCHEMA_VERSION,
            });
        }

        let mut entries = BTreeMap::new();
        for (key, entry) in file.guidelines {
            let code: GuidelineCode = key
                .parse()
                .map_err(|_| CatalogError::UnknownCode(key.clone()))?;
            entries.insert(
                code,
                GuidelineRef {
                    code,
                    name: entry.name,
                    concern: entry.concern,
                    disqualifiers: entry.disqualifiers,
                    mitigators: entry.mitigators,
                },
            );
        }

        for code in GuidelineCode::ALL {
            if !entries.contains_key(&code) {
                return Err(CatalogError::MissingGuideline(code));
            }
        }

        log::info!("Loaded external guideline catalog ({} entries)", entries.len());
        Ok(Self { entries })
    }

    /// Every code is present, so lookups by a valid code cannot miss.
    #[must_use]
    pub fn get(&self, code: GuidelineCode) -> &GuidelineRef {
        self.entries
            .get(&code)
            .expect("catalog covers all guideline codes")
    }

    #[must_use]
    pub fn name(&self, code: GuidelineCode) -> &str {
        &self.get(code).name
    }

    pub fn iter(&self) -> impl Iterator<Item = &GuidelineRef> {
        self.entries.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn builtin_covers_all_codes() {
        let catalog = Catalog::builtin();
        for code in GuidelineCode::ALL {
            let entry = catalog.get(code);
            assert_eq!(entry.code, code);
            assert!(!entry.name.is_empty());
            assert!(!entry.concern.is_empty());
            assert!(!entry.disqualifiers.is_empty());
            assert!(!entry.mitigators.is_empty());
        }
    }

    #[test]
    fn builtin_financial_entry_matches_published_text() {
        let f = Catalog::builtin().get(GuidelineCode::F);
        assert_eq!(f.name, "Financial Considerations");
        assert_eq!(f.disqualifiers[0].code, "AG \u{b6} 19(a)");
        assert_eq!(f.disqualifiers[0].text, "inability to satisfy debts");
        assert_eq!(f.mitigators.len(), 7);
    }

    #[test]
    fn json_catalog_round_trips() {
        let mut guidelines = serde_json::Map::new();
        for entry in Catalog::builtin().iter() {
            guidelines.insert(
                entry.code.to_string(),
                serde_json::json!({
                    "name": entry.name,
                    "concern": entry.concern,
                    "disqualifiers": entry.disqualifiers,
                    "mitigators": entry.mitigators,
                }),
            );
        }
        let json = serde_json::json!({
            "schema_version": 1,
            "guidelines": guidelines,
        })
        .to_string();

        let loaded = Catalog::from_json_str(&json).unwrap();
        assert_eq!(loaded.get(GuidelineCode::G).name, "Alcohol Consumption");
    }

    #[test]
    fn json_catalog_rejects_bad_schema_and_partial_coverage() {
        let err = Catalog::from_json_str(r#"{"schema_version": 9, "guidelines": {}}"#)
            .unwrap_err();
        assert!(matches!(err, CatalogError::SchemaVersion { found: 9, .. }));

        let partial = r#"{
            "schema_version": 1,
            "guidelines": {
                "A": {"name": "Allegiance to the United States", "concern": "x"}
            }
        }"#;
        let err = Catalog::from_json_str(partial).unwrap_err();
        assert!(matches!(err, CatalogError::MissingGuideline(GuidelineCode::B)));
    }
}
