use crate::error::FetchError;
use reqwest::Client;
use scraper::node::Node;
use scraper::{ElementRef, Html};
use std::time::Duration;
use url::Url;

const USER_AGENT: &str = "shadow-data-policy-checker/1.0";
const FETCH_TIMEOUT: Duration = Duration::from_secs(12);

// Subtrees that never carry policy prose.
const NON_CONTENT_TAGS: [&str; 7] = [
    "script", "style", "noscript", "header", "footer", "nav", "form",
];

/// Fetch a privacy-policy page and reduce it to clean plain text.
///
/// One GET, no retry. Non-2xx statuses and transport failures surface as
/// [`FetchError`] so the caller can report them.
pub async fn scrape_policy_from_url(url: &str) -> Result<String, FetchError> {
    let url = Url::parse(url)?;

    let client = Client::builder()
        .timeout(FETCH_TIMEOUT)
        .user_agent(USER_AGENT)
        .build()?;

    let resp = client.get(url).send().await?;
    if !resp.status().is_success() {
        return Err(FetchError::Status(resp.status()));
    }

    let body = resp.text().await?;
    Ok(visible_text(&body))
}

/// Extract the visible text of an HTML document, skipping non-content
/// regions, with whitespace runs collapsed to single spaces.
pub fn visible_text(html: &str) -> String {
    let doc = Html::parse_document(html);
    let mut parts: Vec<String> = Vec::new();
    collect_text(doc.root_element(), &mut parts);
    normalize_whitespace(&parts.join("\n"))
}

fn collect_text(element: ElementRef<'_>, parts: &mut Vec<String>) {
    for child in element.children() {
        match child.value() {
            Node::Text(text) => {
                let fragment = text.trim();
                if !fragment.is_empty() {
                    parts.push(fragment.to_owned());
                }
            }
            Node::Element(_) => {
                if let Some(el) = ElementRef::wrap(child) {
                    if !NON_CONTENT_TAGS.contains(&el.value().name()) {
                        collect_text(el, parts);
                    }
                }
            }
            _ => {}
        }
    }
}

fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
