use gh_rate_limit::config::Config;
use gh_rate_limit::http::{ClientError, UpstreamClient};
use httpmock::{Method::GET, MockServer};

fn client_for(server: &MockServer, token: Option<&str>) -> UpstreamClient {
    let base = server.base_url();
    let token = token.map(str::to_string);
    let cfg = Config::from_lookup(move |k| match k {
        "GITHUB_API_URL" => Some(base.clone()),
        "GITHUB_TOKEN" => token.clone(),
        _ => None,
    })
    .unwrap();
    UpstreamClient::new(&cfg).unwrap()
}

#[tokio::test]
async fn sends_accept_and_token_headers() {
    let server = MockServer::start_async().await;
    let m = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/rate_limit")
                .header("accept", "application/vnd.github.v3+json")
                .header("authorization", "token t0k3n")
                .header_exists("user-agent");
            then.status(200).body("{\"ok\":true}");
        })
        .await;

    let body = client_for(&server, Some("t0k3n"))
        .fetch_rate_limit()
        .await
        .unwrap();
    m.assert_async().await;
    assert_eq!(body, b"{\"ok\":true}");
}

#[tokio::test]
async fn missing_token_still_calls_upstream() {
    let server = MockServer::start_async().await;
    let m = server
        .mock_async(|when, then| {
            when.method(GET).path("/rate_limit");
            then.status(200).body("{}");
        })
        .await;

    client_for(&server, None).fetch_rate_limit().await.unwrap();
    m.assert_async().await;
}

#[tokio::test]
async fn non_success_status_is_reported_with_body() {
    let server = MockServer::start_async().await;
    let _m = server
        .mock_async(|when, then| {
            when.method(GET).path("/rate_limit");
            then.status(401).body("{\"message\":\"Bad credentials\"}\n");
        })
        .await;

    let err = client_for(&server, Some("bad"))
        .fetch_rate_limit()
        .await
        .unwrap_err();
    match &err {
        ClientError::Status { status, body } => {
            assert_eq!(status.as_u16(), 401);
            assert_eq!(body, "{\"message\":\"Bad credentials\"}");
        }
        other => panic!("unexpected error: {:?}", other),
    }
    assert!(err.to_string().starts_with("upstream request failed: 401"));
}
