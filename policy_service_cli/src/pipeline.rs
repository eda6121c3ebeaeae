use crate::ai::ChatModel;
use crate::analysis::{normalize_model_output, INVALID_JSON_GAP};
use crate::{prompt, scrape, PolicyReport};
use tracing::warn;

pub const MAX_POLICY_CHARS: usize = 120_000;
pub const TRUNCATION_MARKER: &str = "\n\n[TRUNCATED]";

/// Analyze a privacy policy given either a URL or the policy text itself.
///
/// Always returns a complete report. A fetch failure short-circuits into a
/// defaulted report carrying the error in both gap lists, without calling
/// the model; a gateway failure degrades the same way as unparsable output.
pub async fn analyze_policy_input(input: &str, model: &dyn ChatModel) -> PolicyReport {
    let policy_text = if is_http_url(input) {
        match scrape::scrape_policy_from_url(input).await {
            Ok(text) => text,
            Err(err) => {
                warn!(error = %err, "policy fetch failed");
                return PolicyReport::unavailable(format!("Error scraping URL: {err}"));
            }
        }
    } else {
        input.to_string()
    };

    let policy_text = truncate_policy_text(policy_text);
    let messages = prompt::build_messages(&policy_text);

    match model.complete(&messages).await {
        Ok(raw) => normalize_model_output(&raw),
        Err(err) => {
            warn!(error = %err, "model call failed");
            PolicyReport::unavailable(INVALID_JSON_GAP)
        }
    }
}

fn is_http_url(input: &str) -> bool {
    let head: String = input.chars().take(8).collect::<String>().to_lowercase();
    head.starts_with("http://") || head.starts_with("https://")
}

/// Cap oversized policy text, appending an explicit marker so downstream
/// consumers know the text was cut.
pub fn truncate_policy_text(text: String) -> String {
    if text.chars().count() <= MAX_POLICY_CHARS {
        return text;
    }
    let mut out: String = text.chars().take(MAX_POLICY_CHARS).collect();
    out.push_str(TRUNCATION_MARKER);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_detection_is_case_insensitive_on_the_scheme() {
        assert!(is_http_url("http://example.com/privacy"));
        assert!(is_http_url("HTTPS://example.com/privacy"));
        assert!(is_http_url("Http://example.com"));
        assert!(!is_http_url("ftp://example.com"));
        assert!(!is_http_url("Our http:// usage is described below"));
        assert!(!is_http_url("We collect data as described in this policy."));
    }

    #[test]
    fn short_text_passes_through_untouched() {
        let text = "a".repeat(MAX_POLICY_CHARS);
        assert_eq!(truncate_policy_text(text.clone()), text);
    }

    #[test]
    fn oversized_text_is_cut_and_marked() {
        let text = "a".repeat(MAX_POLICY_CHARS + 5);
        let out = truncate_policy_text(text);
        assert!(out.ends_with(TRUNCATION_MARKER));
        let kept = &out[..out.len() - TRUNCATION_MARKER.len()];
        assert_eq!(kept.chars().count(), MAX_POLICY_CHARS);
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        let text = "é".repeat(MAX_POLICY_CHARS + 1);
        let out = truncate_policy_text(text);
        assert!(out.ends_with(TRUNCATION_MARKER));
        let kept = &out[..out.len() - TRUNCATION_MARKER.len()];
        assert_eq!(kept.chars().count(), MAX_POLICY_CHARS);
    }
}
