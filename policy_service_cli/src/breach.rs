use crate::error::BreachError;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

pub const BREACH_API_URL: &str = "https://breachdirectory.p.rapidapi.com/";
pub const BREACH_API_HOST: &str = "breachdirectory.p.rapidapi.com";

const LOOKUP_TIMEOUT: Duration = Duration::from_secs(12);

/// What the breach directory reported for one email.
#[derive(Debug, Clone)]
pub struct BreachReport {
    pub found: u64,
    /// Opaque upstream entries, passed through to the caller unchanged.
    pub result: Vec<Value>,
}

/// Client for the RapidAPI breach-directory lookup.
pub struct BreachClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl BreachClient {
    pub fn new(api_key: impl Into<String>) -> Result<Self, BreachError> {
        let client = Client::builder().timeout(LOOKUP_TIMEOUT).build()?;
        Ok(Self {
            client,
            base_url: BREACH_API_URL.to_string(),
            api_key: api_key.into(),
        })
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Look up an email. The email is passed through verbatim; the upstream
    /// does its own matching.
    pub async fn lookup(&self, email: &str) -> Result<BreachReport, BreachError> {
        let resp = self
            .client
            .get(&self.base_url)
            .header("x-rapidapi-key", &self.api_key)
            .header("x-rapidapi-host", BREACH_API_HOST)
            .query(&[("func", "auto"), ("term", email)])
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(BreachError::Status(status));
        }

        parse_breach_body(resp.json::<Value>().await?)
    }
}

/// The upstream contract is `found` (count) plus `result` (list). Anything
/// else is treated as a failed lookup rather than "zero breaches".
fn parse_breach_body(body: Value) -> Result<BreachReport, BreachError> {
    let found = body
        .get("found")
        .and_then(Value::as_u64)
        .ok_or(BreachError::MissingField("found"))?;
    let result = body
        .get("result")
        .and_then(Value::as_array)
        .cloned()
        .ok_or(BreachError::MissingField("result"))?;
    Ok(BreachReport { found, result })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn well_formed_body_parses() {
        let report = parse_breach_body(json!({
            "found": 3,
            "result": [
                {"sources": ["SomeSite"], "email": "user@example.com"},
                {"sources": ["OtherSite"]},
                {}
            ]
        }))
        .unwrap();
        assert_eq!(report.found, 3);
        assert_eq!(report.result.len(), 3);
    }

    #[test]
    fn missing_found_is_an_error() {
        let err = parse_breach_body(json!({ "result": [] })).unwrap_err();
        assert!(matches!(err, BreachError::MissingField("found")));
    }

    #[test]
    fn missing_result_is_an_error() {
        let err = parse_breach_body(json!({ "found": 1 })).unwrap_err();
        assert!(matches!(err, BreachError::MissingField("result")));
    }

    #[test]
    fn upstream_error_shapes_do_not_parse_as_success() {
        let err = parse_breach_body(json!({ "success": false, "message": "quota" })).unwrap_err();
        assert!(matches!(err, BreachError::MissingField(_)));
    }
}
