use crate::findings::FormalFinding;
use crate::guideline::GuidelineCode;
use crate::outcome::Outcome;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Structured fields of a parsed decision document.
///
/// Unknown fields are rejected so that the untagged `CaseRecord` keeps maps
/// with extra keys in their raw representation instead of silently dropping
/// the extras.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CaseFields {
    pub case_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    pub outcome: Option<Outcome>,
    #[serde(default)]
    pub guidelines: Vec<GuidelineCode>,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub full_text: String,
    #[serde(default)]
    pub sor_allegations: Vec<String>,
    #[serde(default)]
    pub mitigating_factors: Vec<String>,
    /// Administrative judge or hearing officer, when identified.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adjudicator: Option<String>,
    /// "hearing" or "appeal".
    #[serde(default)]
    pub case_type: String,
    #[serde(default)]
    pub formal_findings: BTreeMap<GuidelineCode, FormalFinding>,
}

/// A case record as seen at the engine boundary.
///
/// Callers hand records around both as structured values and as raw
/// JSON maps; this normalizes field access over either representation so the
/// engine never branches on the shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CaseRecord {
    Structured(CaseFields),
    Raw(Map<String, Value>),
}

impl CaseRecord {
    #[must_use]
    pub fn get_field(&self, name: &str) -> Option<Value> {
        match self {
            Self::Raw(map) => map.get(name).cloned(),
            Self::Structured(fields) => {
                // Round-trip through the serde representation so field names
                // match the wire format exactly.
                let value = serde_json::to_value(fields).ok()?;
                value.get(name).cloned()
            }
        }
    }

    /// Set a field by name. Structured records are converted to the raw
    /// representation when the name is not a known field.
    pub fn set_field(&mut self, name: &str, value: Value) {
        match self {
            Self::Raw(map) => {
                map.insert(name.to_string(), value);
            }
            Self::Structured(fields) => {
                let mut map = match serde_json::to_value(&*fields) {
                    Ok(Value::Object(map)) => map,
                    _ => Map::new(),
                };
                map.insert(name.to_string(), value);
                if let Ok(back) = serde_json::from_value::<CaseFields>(Value::Object(map.clone())) {
                    *fields = back;
                } else {
                    *self = Self::Raw(map);
                }
            }
        }
    }

    #[must_use]
    pub fn case_number(&self) -> Option<String> {
        match self.get_field("case_number")? {
            Value::String(s) => Some(s),
            _ => None,
        }
    }
}

impl From<CaseFields> for CaseRecord {
    fn from(fields: CaseFields) -> Self {
        Self::Structured(fields)
    }
}
