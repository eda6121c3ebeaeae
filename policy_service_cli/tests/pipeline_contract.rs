use policy_service_cli::ai::MockModel;
use policy_service_cli::analysis::INVALID_JSON_GAP;
use policy_service_cli::pipeline::{analyze_policy_input, MAX_POLICY_CHARS, TRUNCATION_MARKER};
use policy_service_cli::ComplianceLabel;

#[tokio::test]
async fn raw_text_flows_to_the_model_and_back() {
    let model = MockModel::new(
        r#"{"explanation":"plain policy","ndpr_check":{"overall_compliance":"Strong"}}"#,
    );

    let report = analyze_policy_input("We collect emails.", &model).await;

    assert_eq!(report.explanation, "plain policy");
    assert_eq!(report.ndpr_check.overall_compliance, ComplianceLabel::Strong);
    assert_eq!(model.call_count(), 1);

    let messages = model.last_messages().unwrap();
    assert_eq!(messages[0].role, "system");
    assert_eq!(messages[1].role, "user");
    assert!(messages[1].content.contains("We collect emails."));
}

#[tokio::test]
async fn oversized_text_reaches_the_model_cut_and_marked() {
    let model = MockModel::new("{}");
    let input = "a".repeat(MAX_POLICY_CHARS + 100);

    let _ = analyze_policy_input(&input, &model).await;

    let user = model.last_messages().unwrap()[1].content.clone();
    let start = user.find("INPUT_POLICY_TEXT:\n").unwrap() + "INPUT_POLICY_TEXT:\n".len();
    let end = user.find("\n\nINSTRUCTIONS:").unwrap();
    let embedded = &user[start..end];
    assert_eq!(
        embedded,
        format!("{}{}", "a".repeat(MAX_POLICY_CHARS), TRUNCATION_MARKER)
    );
}

#[tokio::test]
async fn fetch_failure_short_circuits_before_the_model() {
    let model = MockModel::new("{}");

    // Discard port; nothing listens there.
    let report = analyze_policy_input("http://127.0.0.1:9/privacy", &model).await;

    assert_eq!(model.call_count(), 0);
    assert_eq!(report.ndpr_check.gaps.len(), 1);
    assert!(report.ndpr_check.gaps[0].starts_with("Error scraping URL:"));
    assert_eq!(report.gdpr_check.gaps, report.ndpr_check.gaps);
    assert_eq!(report.ndpr_check.overall_compliance, ComplianceLabel::Unknown);
    assert_eq!(report.explanation, "Not specified");
}

#[tokio::test]
async fn gateway_failure_degrades_like_unparsable_output() {
    let model = MockModel::failing();

    let report = analyze_policy_input("some policy text", &model).await;

    assert_eq!(model.call_count(), 1);
    assert_eq!(report.ndpr_check.gaps, vec![INVALID_JSON_GAP.to_string()]);
    assert_eq!(report.gdpr_check.gaps, vec![INVALID_JSON_GAP.to_string()]);
    assert_eq!(report.gdpr_check.overall_compliance, ComplianceLabel::Unknown);
}

#[tokio::test]
async fn commentary_wrapped_output_still_produces_a_report() {
    let model = MockModel::new("Here is your analysis:\n{\"explanation\":\"ok\"}\nCheers!");

    let report = analyze_policy_input("short policy", &model).await;

    assert_eq!(report.explanation, "ok");
    assert!(report.ndpr_check.gaps.is_empty());
}
