use super::*;

fn client_for(endpoint: &str) -> SearchClient {
    let config = SearchConfig {
        endpoint: endpoint.to_string(),
        ..SearchConfig::default()
    };
    SearchClient::new(&config).unwrap()
}

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap()
}

#[test]
fn test_request_url_appends_query() {
    let client = client_for("https://revesta.net/api/search");
    assert_eq!(
        client.request_url("AAPL").as_str(),
        "https://revesta.net/api/search?query=AAPL"
    );
}

#[test]
fn test_request_url_encodes_query() {
    let client = client_for("https://revesta.net/api/search");
    assert_eq!(
        client.request_url("s&p 500").as_str(),
        "https://revesta.net/api/search?query=s%26p+500"
    );
}

#[test]
fn test_request_url_keeps_existing_params() {
    let client = client_for("http://localhost:9000/search?limit=5");
    assert_eq!(
        client.request_url("ms").as_str(),
        "http://localhost:9000/search?limit=5&query=ms"
    );
}

#[test]
fn test_invalid_endpoint_rejected() {
    let config = SearchConfig {
        endpoint: "not a url".to_string(),
        ..SearchConfig::default()
    };
    let err = SearchClient::new(&config).unwrap_err();
    assert!(matches!(err, TickrError::InvalidEndpoint { .. }));
    assert!(err.to_string().contains("not a url"));
}

#[test]
fn test_parse_results_preserves_order() {
    let body = r#"[
        {"document": {"ticker": "MSFT", "name": "Microsoft Corporation", "country": "US"}},
        {"document": {"ticker": "MSTR", "name": "MicroStrategy Incorporated", "country": "US"}}
    ]"#;
    let results = parse_results(body).unwrap();
    let tickers: Vec<&str> = results.iter().map(|r| r.document.ticker.as_str()).collect();
    assert_eq!(tickers, vec!["MSFT", "MSTR"]);
}

#[test]
fn test_parse_results_empty_array() {
    assert!(parse_results("[]").unwrap().is_empty());
}

#[test]
fn test_parse_results_rejects_object() {
    let err = parse_results(r#"{"error": "bad"}"#).unwrap_err();
    assert!(matches!(err, SearchError::Parse(_)));
}

#[test]
fn test_empty_query_short_circuits() {
    // Port 9 (discard) would fail if a request were actually made
    let client = client_for("http://127.0.0.1:9/search");
    let results = runtime().block_on(client.search("")).unwrap();
    assert!(results.is_empty());
}

#[test]
fn test_cancelled_token_returns_cancelled() {
    let client = client_for("http://127.0.0.1:9/search");
    let token = CancellationToken::new();
    token.cancel();

    let result = runtime().block_on(client.search_with_cancel("AAPL", &token));
    assert!(matches!(result, Err(SearchError::Cancelled)));
}

#[test]
fn test_error_display() {
    let err = SearchError::Status {
        code: 503,
        message: "unavailable".to_string(),
    };
    assert_eq!(err.to_string(), "Search service error (503): unavailable");
}

mod http {
    use super::*;
    use std::time::Duration;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn results_json(tickers: &[(&str, &str)]) -> serde_json::Value {
        serde_json::Value::Array(
            tickers
                .iter()
                .map(|(ticker, name)| {
                    serde_json::json!({
                        "document": {
                            "_id": format!("id-{}", ticker),
                            "ticker": ticker,
                            "name": name,
                            "country": "US",
                            "in_SP_500": 1
                        }
                    })
                })
                .collect(),
        )
    }

    fn client_for_server(server: &MockServer) -> SearchClient {
        client_for(&format!("{}/api/search", server.uri()))
    }

    #[tokio::test]
    async fn search_returns_results_in_service_order() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/search"))
            .and(query_param("query", "app"))
            .respond_with(ResponseTemplate::new(200).set_body_json(results_json(&[
                ("AAPL", "Apple Inc."),
                ("APP", "AppLovin Corporation"),
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let results = client_for_server(&server).search("app").await.unwrap();

        let tickers: Vec<&str> = results.iter().map(|r| r.document.ticker.as_str()).collect();
        assert_eq!(tickers, vec!["AAPL", "APP"]);
        assert!(results[0].document.is_sp_500());
    }

    #[tokio::test]
    async fn search_sends_encoded_query() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/search"))
            .and(query_param("query", "s&p 500"))
            .respond_with(ResponseTemplate::new(200).set_body_json(results_json(&[(
                "SPY",
                "SPDR S&P 500 ETF Trust",
            )])))
            .expect(1)
            .mount(&server)
            .await;

        let results = client_for_server(&server).search("s&p 500").await.unwrap();
        assert_eq!(results[0].document.ticker, "SPY");

        let received = server.received_requests().await.unwrap();
        assert_eq!(received[0].url.query(), Some("query=s%26p+500"));
    }

    #[tokio::test]
    async fn search_maps_server_error_to_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/search"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let err = client_for_server(&server).search("AAPL").await.unwrap_err();
        match &err {
            SearchError::Status { code, message } => {
                assert_eq!(*code, 500);
                assert_eq!(message, "boom");
            }
            other => panic!("expected status error, got {:?}", other),
        }
        assert_eq!(err.to_string(), "Search service error (500): boom");
    }

    #[tokio::test]
    async fn search_maps_not_found_to_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let err = client_for_server(&server).search("AAPL").await.unwrap_err();
        assert!(matches!(err, SearchError::Status { code: 404, .. }));
    }

    #[tokio::test]
    async fn search_rejects_malformed_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/search"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let err = client_for_server(&server).search("AAPL").await.unwrap_err();
        assert!(matches!(err, SearchError::Parse(_)));
    }

    #[tokio::test]
    async fn search_rejects_document_without_ticker() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!([{"document": {"name": "Nameless"}}])),
            )
            .mount(&server)
            .await;

        let err = client_for_server(&server).search("x").await.unwrap_err();
        assert!(matches!(err, SearchError::Parse(_)));
    }

    #[tokio::test]
    async fn empty_query_sends_no_request() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(results_json(&[])))
            .expect(0)
            .mount(&server)
            .await;

        let results = client_for_server(&server).search("").await.unwrap();
        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn slow_response_times_out_as_network_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(results_json(&[("AAPL", "Apple Inc.")]))
                    .set_delay(Duration::from_secs(3)),
            )
            .mount(&server)
            .await;

        let config = SearchConfig {
            endpoint: format!("{}/api/search", server.uri()),
            timeout_ms: 100,
            ..SearchConfig::default()
        };
        let client = SearchClient::new(&config).unwrap();

        let err = client.search("AAPL").await.unwrap_err();
        assert!(matches!(err, SearchError::Network(_)));
    }

    #[tokio::test]
    async fn cancel_during_request_wins() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(results_json(&[("AAPL", "Apple Inc.")]))
                    .set_delay(Duration::from_secs(3)),
            )
            .mount(&server)
            .await;

        let client = client_for_server(&server);
        let token = CancellationToken::new();
        let canceller = token.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(50)).await;
            canceller.cancel();
        });

        let result = client.search_with_cancel("AAPL", &token).await;
        assert!(matches!(result, Err(SearchError::Cancelled)));
    }
}
