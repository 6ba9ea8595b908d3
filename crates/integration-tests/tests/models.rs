mod harness;

use harness::config::ConfigBuilder;
use harness::mock_gemini::MockGemini;
use harness::server::TestServer;
use serde_json::json;

#[tokio::test]
async fn models_lists_catalog_without_calling_provider() {
    let mock = MockGemini::start().await.unwrap();
    let config = ConfigBuilder::new().with_base_url(&mock.base_url()).build();
    let server = TestServer::start(config).await.unwrap();

    let (status, body) = server.get_json("/gemini/models").await;

    assert_eq!(status, 200);
    assert_eq!(
        body,
        json!({"models": ["gemini-2.5-flash", "gemini-2.5-pro", "gemini-1.5-flash", "gemini-1.5-pro"]})
    );
    assert!(mock.calls().is_empty());
}

#[tokio::test]
async fn routes_follow_configured_prefix() {
    let mock = MockGemini::start().await.unwrap();
    let config = ConfigBuilder::new()
        .with_base_url(&mock.base_url())
        .with_route_prefix("/api/gemini")
        .build();
    let server = TestServer::start(config).await.unwrap();

    let (status, _) = server.get_json("/api/gemini/models").await;
    assert_eq!(status, 200);

    let resp = server.client().get(server.url("/gemini/models")).send().await.unwrap();
    assert_eq!(resp.status(), 404);
}
