use crate::ai::ChatMessage;

pub const SYSTEM_PROMPT: &str = "You are the policy analysis engine for Shadow Data. \
Your job: read a privacy policy and return a single JSON object that explains the \
policy in simple language, extracts key UI details, and assesses both NDPR and GDPR \
compliance. You MUST include the fields 'changes_needed_to_be_ndpr_compliant' and \
'changes_needed_to_be_gdpr_compliant'. Return ONLY valid JSON with no commentary.";

// Literal schema the model is asked to follow, one key per report field.
const SCHEMA_BLOCK: &str = r#"{
  "explanation": "string, 1-3 sentences explaining the policy in simple language",

  "data_they_collect": {
    "items": ["string list of data types"]
  },

  "usage_and_sharing": {
    "usage_purposes": ["string list"],
    "third_parties": ["string list"]
  },

  "deletion_and_your_rights": {
    "data_retention": "string or 'Not specified'",
    "your_rights": ["string list"]
  },

  "ndpr_check": {
    "overall_compliance": "Strong | Partial | Weak | Unknown",
    "strengths": ["string list"],
    "gaps": ["string list"],
    "questions_to_ask": ["string list"]
  },

  "gdpr_check": {
    "overall_compliance": "Strong | Partial | Weak | Unknown",
    "strengths": ["string list"],
    "gaps": ["string list"],
    "questions_to_ask": ["string list"]
  },

  "changes_needed_to_be_ndpr_compliant": [
    "list missing disclosures, rights, processes required under NDPR"
  ],

  "changes_needed_to_be_gdpr_compliant": [
    "list missing disclosures, rights, processes required under GDPR"
  ]
}"#;

const RULES_BLOCK: &str = r#"Rules:
- Use [] for missing lists and "Not specified" for missing fields.
- Keep answers neutral and non-legal.
- NDPR evaluation: consent, processing rules, breach reporting, accuracy, minimisation, retention, transfers, DPO/contact person.
- GDPR evaluation: Articles 5-30.
- Output ONLY valid JSON."#;

pub fn user_prompt(policy_text: &str) -> String {
    format!(
        "INPUT_POLICY_TEXT:\n{policy_text}\n\nINSTRUCTIONS:\nReturn EXACTLY one JSON \
         object only (no markdown, no commentary). The object must follow this \
         schema:\n\n{SCHEMA_BLOCK}\n\n{RULES_BLOCK}"
    )
}

/// Ordered system + user pair for one analysis call.
pub fn build_messages(policy_text: &str) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(SYSTEM_PROMPT),
        ChatMessage::user(user_prompt(policy_text)),
    ]
}
