use axum::http::StatusCode;
use axum::response::Html;
use axum::routing::get;
use axum::Router;
use policy_service_cli::ai::MockModel;
use policy_service_cli::pipeline::analyze_policy_input;
use policy_service_cli::scrape::scrape_policy_from_url;
use policy_service_cli::FetchError;
use tokio::net::TcpListener;

const POLICY_PAGE: &str = r#"<!doctype html>
<html>
  <head>
    <title>Privacy Policy</title>
    <script>window.tracker = true;</script>
    <style>.banner { display: none; }</style>
  </head>
  <body>
    <header>Cookie banner</header>
    <nav><a href="/">Back to site</a></nav>
    <main>
      <h1>Privacy Policy</h1>
      <p>We collect your   name and
      email address.</p>
      <p>Data is retained for two years after account closure.</p>
    </main>
    <form action="/subscribe"><input name="email"/><button>Subscribe</button></form>
    <footer>Copyright notice</footer>
  </body>
</html>"#;

async fn serve(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn scrape_reduces_a_page_to_clean_policy_text() {
    let base = serve(Router::new().route("/privacy", get(|| async { Html(POLICY_PAGE) }))).await;

    let text = scrape_policy_from_url(&format!("{base}/privacy")).await.unwrap();

    assert!(text.contains("We collect your name and email address."));
    assert!(text.contains("Data is retained for two years after account closure."));
    assert!(!text.contains("Cookie banner"));
    assert!(!text.contains("Back to site"));
    assert!(!text.contains("Subscribe"));
    assert!(!text.contains("Copyright notice"));
    assert!(!text.contains("window.tracker"));
    assert!(!text.contains("  "), "whitespace runs survived: {text:?}");
}

#[tokio::test]
async fn non_2xx_status_is_a_fetch_error() {
    let base = serve(Router::new().route(
        "/privacy",
        get(|| async { (StatusCode::NOT_FOUND, "nothing here") }),
    ))
    .await;

    let err = scrape_policy_from_url(&format!("{base}/privacy"))
        .await
        .unwrap_err();

    assert!(matches!(err, FetchError::Status(status) if status.as_u16() == 404));
}

#[tokio::test]
async fn url_input_routes_through_the_extractor() {
    let base = serve(Router::new().route("/privacy", get(|| async { Html(POLICY_PAGE) }))).await;
    let model = MockModel::new(r#"{"explanation":"analyzed from url"}"#);

    let report = analyze_policy_input(&format!("{base}/privacy"), &model).await;

    assert_eq!(report.explanation, "analyzed from url");
    assert_eq!(model.call_count(), 1);

    let user = model.last_messages().unwrap()[1].content.clone();
    assert!(user.contains("Data is retained for two years after account closure."));
    assert!(!user.contains("Cookie banner"));
}

#[tokio::test]
async fn erroring_origin_short_circuits_before_the_model() {
    let base = serve(Router::new().route(
        "/privacy",
        get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
    ))
    .await;
    let model = MockModel::new("{}");

    let report = analyze_policy_input(&format!("{base}/privacy"), &model).await;

    assert_eq!(model.call_count(), 0);
    assert!(report.ndpr_check.gaps[0].contains("Error scraping URL"));
    assert!(report.gdpr_check.gaps[0].contains("500"));
}
