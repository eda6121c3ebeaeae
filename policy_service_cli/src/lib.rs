pub mod ai;
pub mod analysis;
pub mod breach;
pub mod error;
pub mod pipeline;
pub mod prompt;
pub mod scrape;
pub mod utils;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

pub use error::{BreachError, FetchError, ModelError};

pub const NOT_SPECIFIED: &str = "Not specified";

/// Coarse verdict on how well a policy satisfies a framework.
///
/// Deserializes from any JSON value: strings match by case-insensitive
/// prefix, everything else maps to `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum ComplianceLabel {
    Strong,
    Partial,
    Weak,
    #[default]
    Unknown,
}

impl ComplianceLabel {
    pub fn from_raw(raw: &str) -> Self {
        let lower = raw.trim().to_lowercase();
        if lower.starts_with("strong") {
            Self::Strong
        } else if lower.starts_with("partial") {
            Self::Partial
        } else if lower.starts_with("weak") {
            Self::Weak
        } else {
            Self::Unknown
        }
    }
}

impl<'de> Deserialize<'de> for ComplianceLabel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(value.as_str().map(Self::from_raw).unwrap_or(Self::Unknown))
    }
}

/// Accept whatever the model produced for a field; wrong shapes fall back to
/// the field's default instead of failing the whole report.
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => s,
        _ => NOT_SPECIFIED.to_string(),
    })
}

fn not_specified() -> String {
    NOT_SPECIFIED.to_string()
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CollectedData {
    #[serde(default, deserialize_with = "lenient")]
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UsageAndSharing {
    #[serde(default, deserialize_with = "lenient")]
    pub usage_purposes: Vec<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub third_parties: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeletionRights {
    #[serde(default = "not_specified", deserialize_with = "lenient_text")]
    pub data_retention: String,
    #[serde(default, deserialize_with = "lenient")]
    pub your_rights: Vec<String>,
}

impl Default for DeletionRights {
    fn default() -> Self {
        Self {
            data_retention: not_specified(),
            your_rights: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ComplianceCheck {
    #[serde(default)]
    pub overall_compliance: ComplianceLabel,
    #[serde(default, deserialize_with = "lenient")]
    pub strengths: Vec<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub gaps: Vec<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub questions_to_ask: Vec<String>,
}

/// The complete analysis payload returned for every policy check.
///
/// Every field is always present with its documented shape; missing or
/// malformed fields in the model output degrade to their defaults during
/// deserialization, never to an absent key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolicyReport {
    #[serde(default = "not_specified", deserialize_with = "lenient_text")]
    pub explanation: String,
    #[serde(default, deserialize_with = "lenient")]
    pub data_they_collect: CollectedData,
    #[serde(default, deserialize_with = "lenient")]
    pub usage_and_sharing: UsageAndSharing,
    #[serde(default, deserialize_with = "lenient")]
    pub deletion_and_your_rights: DeletionRights,
    #[serde(default, deserialize_with = "lenient")]
    pub ndpr_check: ComplianceCheck,
    #[serde(default, deserialize_with = "lenient")]
    pub gdpr_check: ComplianceCheck,
    #[serde(default, deserialize_with = "lenient")]
    pub changes_needed_to_be_ndpr_compliant: Vec<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub changes_needed_to_be_gdpr_compliant: Vec<String>,
}

impl Default for PolicyReport {
    fn default() -> Self {
        Self {
            explanation: not_specified(),
            data_they_collect: CollectedData::default(),
            usage_and_sharing: UsageAndSharing::default(),
            deletion_and_your_rights: DeletionRights::default(),
            ndpr_check: ComplianceCheck::default(),
            gdpr_check: ComplianceCheck::default(),
            changes_needed_to_be_ndpr_compliant: Vec::new(),
            changes_needed_to_be_gdpr_compliant: Vec::new(),
        }
    }
}

impl PolicyReport {
    /// Fully defaulted report that records `gap` in both compliance checks.
    /// Used when the policy text could not be fetched or the model produced
    /// nothing usable.
    pub fn unavailable(gap: impl Into<String>) -> Self {
        let gap = gap.into();
        let mut report = Self::default();
        report.ndpr_check.gaps = vec![gap.clone()];
        report.gdpr_check.gaps = vec![gap];
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_matches_by_case_insensitive_prefix() {
        assert_eq!(ComplianceLabel::from_raw("Strong"), ComplianceLabel::Strong);
        assert_eq!(ComplianceLabel::from_raw("STRONG"), ComplianceLabel::Strong);
        assert_eq!(
            ComplianceLabel::from_raw("Partially compliant"),
            ComplianceLabel::Partial
        );
        assert_eq!(
            ComplianceLabel::from_raw("weak coverage of transfers"),
            ComplianceLabel::Weak
        );
        assert_eq!(
            ComplianceLabel::from_raw("somewhere in between"),
            ComplianceLabel::Unknown
        );
    }

    #[test]
    fn label_deserializes_non_strings_to_unknown() {
        let check: ComplianceCheck =
            serde_json::from_value(serde_json::json!({ "overall_compliance": 42 })).unwrap();
        assert_eq!(check.overall_compliance, ComplianceLabel::Unknown);

        let check: ComplianceCheck = serde_json::from_value(serde_json::json!({})).unwrap();
        assert_eq!(check.overall_compliance, ComplianceLabel::Unknown);
    }

    #[test]
    fn label_serializes_as_bare_name() {
        let value = serde_json::to_value(ComplianceLabel::Partial).unwrap();
        assert_eq!(value, serde_json::json!("Partial"));
    }

    #[test]
    fn malformed_fields_degrade_individually() {
        let report: PolicyReport = serde_json::from_value(serde_json::json!({
            "explanation": ["not", "a", "string"],
            "data_they_collect": "oops",
            "ndpr_check": {
                "overall_compliance": "Strong",
                "strengths": "not a list"
            }
        }))
        .unwrap();

        assert_eq!(report.explanation, NOT_SPECIFIED);
        assert!(report.data_they_collect.items.is_empty());
        assert_eq!(report.ndpr_check.overall_compliance, ComplianceLabel::Strong);
        assert!(report.ndpr_check.strengths.is_empty());
    }

    #[test]
    fn unavailable_report_carries_gap_in_both_checks() {
        let report = PolicyReport::unavailable("no luck");
        assert_eq!(report.ndpr_check.gaps, vec!["no luck".to_string()]);
        assert_eq!(report.gdpr_check.gaps, vec!["no luck".to_string()]);
        assert_eq!(report.ndpr_check.overall_compliance, ComplianceLabel::Unknown);
        assert_eq!(report.explanation, NOT_SPECIFIED);
    }
}
