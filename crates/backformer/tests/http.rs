use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use tower::util::ServiceExt;

use backformer::handlers::{AppState, router};

fn make_state() -> AppState {
    AppState {
        max_records: 3,
        ..AppState::default()
    }
}

async fn get_json(state: AppState, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = router(state)
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body_bytes = to_bytes(response.into_body(), 1024 * 1024).await.unwrap();
    (status, serde_json::from_slice(&body_bytes).unwrap())
}

async fn post_json(state: AppState, uri: &str, body: serde_json::Value) -> (StatusCode, serde_json::Value) {
    let response = router(state)
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let body_bytes = to_bytes(response.into_body(), 1024 * 1024).await.unwrap();
    (status, serde_json::from_slice(&body_bytes).unwrap())
}

#[tokio::test]
async fn healthz_ok() {
    let app = router(make_state());
    let response = app
        .oneshot(
            Request::builder()
                .uri("/healthz")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn suffixes_lists_both_rule_sets() {
    let (status, body) = get_json(make_state(), "/v1/suffixes").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["default"], "v2");
    let rule_sets = body["rule_sets"].as_array().unwrap();
    assert_eq!(rule_sets.len(), 2);
    let v1 = &rule_sets[0]["suffixes"];
    assert_eq!(v1.as_array().unwrap().len(), 34);
    assert_eq!(v1[0]["suffix"], "-age");
    assert_eq!(v1[0]["strip"], 3);
}

#[tokio::test]
async fn candidates_endpoint_backforms_one_lemma() {
    let (status, body) =
        get_json(make_state(), "/v1/candidates?suffix=-ung&lemma=L%C3%B6sung").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["rule_set"], "v2");
    assert_eq!(body["rejected"], false);
    assert_eq!(body["slots"][0]["slot"], "base_cand1_VVINF");
    assert_eq!(body["slots"][0]["form"], "lösen");
    assert_eq!(body["slots"][1]["form"], "");
    let queries = body["queries"].as_array().unwrap();
    assert_eq!(queries.len(), 1);
    assert_eq!(queries[0], r#"[lemma="lösen" & tag="VVINF"] within <s/>"#);
}

#[tokio::test]
async fn candidates_endpoint_flags_rejected_lemmas() {
    let (status, body) =
        get_json(make_state(), "/v1/candidates?suffix=-nis&lemma=Tennis&ruleset=v1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["rule_set"], "v1");
    assert_eq!(body["rejected"], true);
    assert!(body["slots"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn candidates_endpoint_rejects_unknown_suffix() {
    let (status, body) =
        get_json(make_state(), "/v1/candidates?suffix=-keit&lemma=Heiterkeit").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap_or_default().contains("-keit"));
    assert_eq!(body["recognized"].as_array().unwrap().len(), 34);
}

#[tokio::test]
async fn candidates_endpoint_rejects_unknown_rule_set() {
    let (status, body) =
        get_json(make_state(), "/v1/candidates?suffix=-ung&lemma=Haltung&ruleset=v9").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap_or_default().contains("rule set"));
}

#[tokio::test]
async fn cache_headers_follow_state() {
    let app = router(make_state());
    let response = app
        .oneshot(
            Request::builder()
                .uri("/v1/suffixes")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert!(response.headers().contains_key(header::CACHE_CONTROL));

    let state = AppState {
        disable_cache: true,
        ..make_state()
    };
    let response = router(state)
        .oneshot(
            Request::builder()
                .uri("/v1/suffixes")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert!(!response.headers().contains_key(header::CACHE_CONTROL));
}

#[tokio::test]
async fn backform_endpoint_normalizes_and_dedupes() {
    let request = serde_json::json!({
        "suffix": "-heit",
        "records": [
            {"lemma": "Verkehrssicherheit", "word": "Verkehrssicherheit", "compana": "Verkehr_Sicherheit"},
            {"lemma": "Sicherheit", "word": "Sicherheit", "compana": "_"},
            {"lemma": "Schönheit|Schonheit", "word": "Schönheit"}
        ]
    });
    let (status, body) = post_json(make_state(), "/v1/backform", request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["mode"], "suffix");
    assert_eq!(body["rows"], 2);
    let candidates = body["candidates"].as_array().unwrap();
    let sicher: Vec<_> = candidates
        .iter()
        .filter(|c| c["form"] == "sicher")
        .collect();
    assert_eq!(sicher.len(), 1);
    assert_eq!(sicher[0]["pos"], "ADJ.");
    assert_eq!(
        sicher[0]["cql"],
        r#"[lemma="sicher" & tag="ADJ."] within <s/>"#
    );
}

#[tokio::test]
async fn backform_endpoint_enforces_record_limit() {
    let records: Vec<_> = (0..4)
        .map(|_| serde_json::json!({"lemma": "Lösung"}))
        .collect();
    let request = serde_json::json!({"suffix": "-ung", "records": records});
    let (status, body) = post_json(make_state(), "/v1/backform", request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap_or_default().contains("at most 3"));
}

#[tokio::test]
async fn backform_endpoint_rejects_unknown_mode() {
    let request = serde_json::json!({
        "suffix": "-ung",
        "mode": "infix",
        "records": [{"lemma": "Lösung"}]
    });
    let (status, body) = post_json(make_state(), "/v1/backform", request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap_or_default().contains("infix"));
}

#[tokio::test]
async fn backform_endpoint_reports_malformed_records_as_json() {
    let request = serde_json::json!({
        "suffix": "-ung",
        "records": [{"word": "Lösung"}]
    });
    let (status, body) = post_json(make_state(), "/v1/backform", request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap_or_default().contains("lemma"));
}

#[tokio::test]
async fn candidates_endpoint_reports_missing_lemma_as_json() {
    let (status, body) = get_json(make_state(), "/v1/candidates?suffix=-ung").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap_or_default().contains("lemma"));
}
