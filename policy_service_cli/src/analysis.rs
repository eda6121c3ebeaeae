use crate::PolicyReport;
use serde_json::Value;
use tracing::debug;

pub const INVALID_JSON_GAP: &str = "Model did not return valid JSON.";

/// Outcome of looking for a JSON object in raw model text.
#[derive(Debug)]
enum ModelJson {
    /// The whole response parsed as an object.
    Direct(Value),
    /// A brace-delimited substring parsed after the full response did not.
    Salvaged(Value),
    /// Nothing parseable.
    Absent,
}

/// Turn whatever the model produced into a complete [`PolicyReport`].
///
/// Never fails: unparsable output yields the fully defaulted report with an
/// invalid-JSON gap recorded in both compliance checks.
pub fn normalize_model_output(raw: &str) -> PolicyReport {
    match parse_model_output(raw) {
        ModelJson::Direct(value) => fill_schema(value),
        ModelJson::Salvaged(value) => {
            debug!("model wrapped its JSON in commentary; salvaged the object");
            fill_schema(value)
        }
        ModelJson::Absent => {
            debug!("model output contained no parseable JSON object");
            PolicyReport::unavailable(INVALID_JSON_GAP)
        }
    }
}

fn parse_model_output(raw: &str) -> ModelJson {
    match serde_json::from_str::<Value>(raw) {
        // A strict parse that yields a non-object (a bare number, say) is a
        // total failure; salvage only runs when strict parsing fails.
        Ok(value) if value.is_object() => ModelJson::Direct(value),
        Ok(_) => ModelJson::Absent,
        Err(_) => match salvage_object(raw) {
            Some(value) => ModelJson::Salvaged(value),
            None => ModelJson::Absent,
        },
    }
}

/// Widest `{...}` candidate: first opening brace through last closing brace,
/// newlines included.
fn salvage_object(raw: &str) -> Option<Value> {
    let start = raw.find('{')?;
    let end = raw.rfind('}')?;
    if end < start {
        return None;
    }
    serde_json::from_str::<Value>(&raw[start..=end])
        .ok()
        .filter(Value::is_object)
}

fn fill_schema(value: Value) -> PolicyReport {
    // The lenient field deserializers make this infallible for any JSON
    // object; the fallback covers the remaining impossible-in-practice path.
    serde_json::from_value(value).unwrap_or_else(|_| PolicyReport::unavailable(INVALID_JSON_GAP))
}
