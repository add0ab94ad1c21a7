use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use mindmirror_server::{create_router, create_test_router, AppConfig, AppState};
use serde_json::{json, Value};
use tower::ServiceExt;

const TEST_SEED: u64 = 42;

const STRESSED_TEXT: &str =
    "I am stressed and anxious about work, feeling exhausted and tired every day";

// ===== Helper Functions =====

async fn parse_response_body(body: Body) -> Value {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn create_json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn contains_str(values: &Value, expected: &str) -> bool {
    values
        .as_array()
        .map(|items| items.iter().any(|v| v == expected))
        .unwrap_or(false)
}

// ===== Health Check Tests =====

mod health {
    use super::*;

    #[tokio::test]
    async fn should_return_ok() {
        let app = create_test_router(TEST_SEED);

        let request = Request::builder()
            .method("GET")
            .uri("/api/health")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key("x-request-id"));

        let body = parse_response_body(response.into_body()).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["message"], "MindMirror AI backend is running");
        assert!(body["uptimeSecs"].is_u64());
    }

    #[tokio::test]
    async fn should_echo_client_request_id() {
        let app = create_test_router(TEST_SEED);

        let request = Request::builder()
            .method("GET")
            .uri("/api/health")
            .header("x-request-id", "trace-me")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.headers()["x-request-id"], "trace-me");
    }
}

// ===== Analyze API Tests =====

mod analyze_api {
    use super::*;

    const ANALYZE_URI: &str = "/api/analysis/analyze";

    #[tokio::test]
    async fn should_analyze_stressed_entry() {
        // Arrange
        let app = create_test_router(TEST_SEED);
        let request = create_json_request("POST", ANALYZE_URI, json!({ "text": STRESSED_TEXT }));

        // Act
        let response = app.oneshot(request).await.unwrap();

        // Assert
        assert_eq!(response.status(), StatusCode::OK);

        let body = parse_response_body(response.into_body()).await;
        assert_eq!(body["isSuccess"], true);
        assert_eq!(body["code"], "COMMON200");

        let result = &body["result"];
        assert!(result["emotions"]["stress"].as_u64().unwrap() > 0);
        assert!(result["emotions"]["anxiety"].as_u64().unwrap() > 0);
        assert!(result["emotions"]["fatigue"].as_u64().unwrap() > 0);
        assert!(result["emotions"].get("happiness").is_none());
        assert!(result["sentimentScore"].as_i64().unwrap() <= 0);
        assert!(result["burnoutScore"].as_u64().unwrap() > 0);
        assert_eq!(result["trend"], "insufficient");

        let risk = &result["riskAnalysis"];
        assert_ne!(risk["riskLevel"]["level"], "Low");
        assert!(contains_str(&risk["primaryConcerns"], "High stress levels"));
        assert!(contains_str(&risk["primaryConcerns"], "Elevated anxiety"));

        assert!(!result["recommendations"]["longterm"].as_array().unwrap().is_empty());
        assert!(!result["psychologicalSummary"].as_str().unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_analyze_positive_entry() {
        let app = create_test_router(TEST_SEED);
        let request = create_json_request(
            "POST",
            ANALYZE_URI,
            json!({ "text": "Today was wonderful, I felt happy and grateful and blessed" }),
        );

        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = parse_response_body(response.into_body()).await;
        let result = &body["result"];
        assert!(result["sentimentScore"].as_i64().unwrap() > 20);
        assert_eq!(result["sentimentLabel"], "Positive");
        assert!(contains_str(
            &result["riskAnalysis"]["strengths"],
            "Overall positive outlook"
        ));
    }

    #[tokio::test]
    async fn should_use_history_for_trend() {
        let app = create_test_router(TEST_SEED);
        let request = create_json_request(
            "POST",
            ANALYZE_URI,
            json!({
                "text": STRESSED_TEXT,
                "history": [
                    { "sentimentScore": 50 },
                    { "sentimentScore": 50 },
                    { "sentimentScore": 10 }
                ]
            }),
        );

        let response = app.oneshot(request).await.unwrap();

        let body = parse_response_body(response.into_body()).await;
        assert_eq!(body["result"]["trend"], "declining");
    }

    #[tokio::test]
    async fn should_return_identical_results_for_same_seed() {
        let payload = json!({ "text": STRESSED_TEXT });

        let first = create_test_router(TEST_SEED)
            .oneshot(create_json_request("POST", ANALYZE_URI, payload.clone()))
            .await
            .unwrap();
        let second = create_test_router(TEST_SEED)
            .oneshot(create_json_request("POST", ANALYZE_URI, payload))
            .await
            .unwrap();

        let first = parse_response_body(first.into_body()).await;
        let second = parse_response_body(second.into_body()).await;
        assert_eq!(first["result"], second["result"]);
    }

    #[tokio::test]
    async fn should_return_400_with_short_text() {
        let app = create_test_router(TEST_SEED);
        let request = create_json_request("POST", ANALYZE_URI, json!({ "text": "too short" }));

        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = parse_response_body(response.into_body()).await;
        assert_eq!(body["isSuccess"], false);
        assert_eq!(body["code"], "COMMON400");
        assert!(body["result"].is_null());
    }

    #[tokio::test]
    async fn should_return_400_with_history_score_out_of_range() {
        let app = create_test_router(TEST_SEED);
        let request = create_json_request(
            "POST",
            ANALYZE_URI,
            json!({
                "text": "a perfectly ordinary day",
                "history": [
                    { "sentimentScore": i32::MAX },
                    { "sentimentScore": i32::MAX },
                    { "sentimentScore": 0 }
                ]
            }),
        );

        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = parse_response_body(response.into_body()).await;
        assert_eq!(body["isSuccess"], false);
        assert_eq!(body["code"], "COMMON400");
    }

    #[tokio::test]
    async fn should_return_400_when_text_exceeds_default_limit() {
        let app = create_test_router(TEST_SEED);
        let request = create_json_request("POST", ANALYZE_URI, json!({ "text": "a".repeat(5001) }));

        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = parse_response_body(response.into_body()).await;
        assert_eq!(body["code"], "COMMON400");
    }

    #[tokio::test]
    async fn should_accept_text_up_to_configured_limit() {
        // Arrange: 기본값보다 큰 MAX_TEXT_LENGTH
        let config = AppConfig {
            max_text_length: 6000,
            recommendation_seed: Some(TEST_SEED),
            ..AppConfig::default()
        };
        let app = create_router(AppState::new(config));
        let request = create_json_request("POST", ANALYZE_URI, json!({ "text": "a".repeat(5500) }));

        // Act
        let response = app.oneshot(request).await.unwrap();

        // Assert
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn should_return_400_with_missing_text() {
        let app = create_test_router(TEST_SEED);
        let request = create_json_request("POST", ANALYZE_URI, json!({ "text": null }));

        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = parse_response_body(response.into_body()).await;
        assert_eq!(body["code"], "COMMON400");
    }

    #[tokio::test]
    async fn should_return_400_with_malformed_json() {
        let app = create_test_router(TEST_SEED);
        let request = Request::builder()
            .method("POST")
            .uri(ANALYZE_URI)
            .header("Content-Type", "application/json")
            .body(Body::from("{ \"text\": "))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = parse_response_body(response.into_body()).await;
        assert_eq!(body["isSuccess"], false);
        assert_eq!(body["code"], "COMMON400");
    }
}

// ===== Dashboard API Tests =====

mod dashboard_api {
    use super::*;

    #[tokio::test]
    async fn should_return_zeroes_for_empty_entries() {
        let app = create_test_router(TEST_SEED);
        let request =
            create_json_request("POST", "/api/analysis/dashboard", json!({ "entries": [] }));

        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = parse_response_body(response.into_body()).await;
        let result = &body["result"];
        assert_eq!(result["averageBurnoutScore"], 0);
        assert_eq!(result["averageSentiment"], 0);
        assert_eq!(result["totalEntries"], 0);
        assert_eq!(result["recentTrend"], json!([]));
        assert_eq!(result["sentimentTrend"], "insufficient");
    }

    #[tokio::test]
    async fn should_aggregate_entries() {
        // Arrange
        let app = create_test_router(TEST_SEED);
        let request = create_json_request(
            "POST",
            "/api/analysis/dashboard",
            json!({
                "entries": [
                    {
                        "date": "2024-05-02T09:00:00Z",
                        "emotions": { "stressed": 40, "tired": 20 },
                        "sentimentScore": -20,
                        "burnoutScore": 60
                    },
                    {
                        "date": "2024-05-01T09:00:00Z",
                        "emotions": { "stressed": 20 },
                        "sentimentScore": 10,
                        "burnoutScore": 30
                    }
                ]
            }),
        );

        // Act
        let response = app.oneshot(request).await.unwrap();

        // Assert
        assert_eq!(response.status(), StatusCode::OK);

        let body = parse_response_body(response.into_body()).await;
        let result = &body["result"];
        assert_eq!(result["totalEntries"], 2);
        assert_eq!(result["averageBurnoutScore"], 45);
        assert_eq!(result["averageSentiment"], -5);
        assert_eq!(result["emotionDistribution"]["stressed"], 30);
        assert_eq!(result["emotionDistribution"]["tired"], 10);
        assert_eq!(result["recentTrend"][0]["date"], "2024-05-01");
        assert_eq!(result["recentTrend"][1]["sentiment"], -20);
        assert_eq!(result["weeklyData"][1]["emotions"]["stressed"], 40.0);
    }

    #[tokio::test]
    async fn should_return_trends_oldest_first() {
        let app = create_test_router(TEST_SEED);
        let request = create_json_request(
            "POST",
            "/api/analysis/trends",
            json!({
                "entries": [
                    { "date": "2024-05-03T09:00:00Z", "sentimentScore": 5, "burnoutScore": 20 },
                    { "date": "2024-05-01T09:00:00Z", "sentimentScore": -5, "burnoutScore": 50 }
                ]
            }),
        );

        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = parse_response_body(response.into_body()).await;
        let result = body["result"].as_array().unwrap();
        assert_eq!(result.len(), 2);
        assert_eq!(result[0]["date"], "2024-05-01");
        assert_eq!(result[1]["sentimentScore"], 5);
    }

    #[tokio::test]
    async fn should_return_400_with_sentiment_score_out_of_range() {
        let app = create_test_router(TEST_SEED);
        let request = create_json_request(
            "POST",
            "/api/analysis/dashboard",
            json!({ "entries": [{ "date": "2024-05-01T09:00:00Z", "sentimentScore": 500 }] }),
        );

        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = parse_response_body(response.into_body()).await;
        assert_eq!(body["code"], "COMMON400");
    }

    #[tokio::test]
    async fn should_return_400_with_invalid_date() {
        let app = create_test_router(TEST_SEED);
        let request = create_json_request(
            "POST",
            "/api/analysis/trends",
            json!({ "entries": [{ "date": "yesterday" }] }),
        );

        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}

// ===== Fallback Tests =====

mod fallback {
    use super::*;

    #[tokio::test]
    async fn should_return_404_for_unknown_route() {
        let app = create_test_router(TEST_SEED);
        let request = Request::builder()
            .method("GET")
            .uri("/api/unknown")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = parse_response_body(response.into_body()).await;
        assert_eq!(body["isSuccess"], false);
        assert_eq!(body["code"], "COMMON404");
    }
}
