use std::time::Duration;

use futures_util::future::join_all;
use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

use dealgate_core::metrics::HttpMethod;

use crate::helpers::TestApp;

async fn mount_list(app: &TestApp, status: u16, delay: Duration) {
    Mock::given(method("GET"))
        .and(path("/v1/deals"))
        .respond_with(
            ResponseTemplate::new(status)
                .set_body_json(json!({"success": status == 200, "data": [{"id": 1}]}))
                .set_delay(delay),
        )
        .mount(&app.upstream)
        .await;
}

#[tokio::test]
async fn metrics_change_after_requests() {
    let app = TestApp::spawn().await;
    mount_list(&app, 200, Duration::ZERO).await;

    let before = app.get_metrics().await;
    app.get_deals(&[]).await;
    app.put_deals(None, &json!({"title": "x"})).await;
    let after = app.get_metrics().await;

    assert_ne!(before, after);
    assert!(!after["PUT"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn empty_store_exposes_all_methods() {
    let app = TestApp::spawn().await;

    let body = app.get_metrics().await;

    assert_eq!(body, json!({"GET": [], "POST": [], "PUT": []}));
}

#[tokio::test]
async fn one_complete_record_per_request() {
    let app = TestApp::spawn().await;
    mount_list(&app, 200, Duration::ZERO).await;
    Mock::given(method("POST"))
        .and(path("/v1/deals"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"data": {"id": 3}})))
        .mount(&app.upstream)
        .await;

    app.get_deals(&[]).await;
    app.post_deals(&json!({"title": "t"})).await;
    app.put_deals(None, &json!({"title": "t"})).await;

    let snap = app.state.metrics().snapshot();

    assert_eq!(snap.get.len(), 1);
    let get = &snap.get[0];
    assert_eq!(get.method, HttpMethod::Get);
    assert_eq!(get.status_code, 200);
    let latency = get.latency.expect("upstream latency recorded");
    assert!(get.duration >= latency);
    assert!(!get.date.is_empty());

    assert_eq!(snap.post.len(), 1);
    assert_eq!(snap.post[0].status_code, 200);
    assert!(snap.post[0].latency.is_some());

    // Rejected before any upstream call.
    assert_eq!(snap.put.len(), 1);
    assert_eq!(snap.put[0].status_code, 400);
    assert!(snap.put[0].latency.is_none());
}

#[tokio::test]
async fn error_responses_are_recorded() {
    let app = TestApp::spawn().await;
    mount_list(&app, 500, Duration::ZERO).await;

    let resp = app.get_deals(&[]).await;
    assert_eq!(resp.status().as_u16(), 500);

    let snap = app.state.metrics().snapshot();
    assert_eq!(snap.get.len(), 1);
    assert_eq!(snap.get[0].status_code, 500);
    assert!(snap.get[0].latency.is_some());
}

#[tokio::test]
async fn concurrent_requests_each_get_their_own_record() {
    let app = TestApp::spawn().await;
    mount_list(&app, 200, Duration::from_millis(50)).await;

    let calls = (0..25).map(|_| app.get_deals(&[]));
    let responses = join_all(calls).await;
    assert!(responses.iter().all(|r| r.status().as_u16() == 200));

    let snap = app.state.metrics().snapshot();
    assert_eq!(snap.get.len(), 25);
    for rec in &snap.get {
        assert_eq!(rec.status_code, 200);
        let latency = rec.latency.expect("every proxied GET carries latency");
        assert!(latency >= 50.0);
        assert!(rec.duration >= latency);
    }
}

#[tokio::test]
async fn metrics_endpoint_is_itself_tracked() {
    let app = TestApp::spawn().await;

    app.get_metrics().await;
    let body: Value = app.get_metrics().await;

    let get = body["GET"].as_array().unwrap();
    assert_eq!(get.len(), 1);
    assert_eq!(get[0]["statusCode"], 200);
    assert!(get[0].get("latency").is_none());
}

#[tokio::test]
async fn reset_empties_the_store() {
    let app = TestApp::spawn().await;
    mount_list(&app, 200, Duration::ZERO).await;
    app.get_deals(&[]).await;
    assert_eq!(app.state.metrics().len(HttpMethod::Get), 1);

    app.state.metrics().reset();

    assert_eq!(
        app.get_metrics().await,
        json!({"GET": [], "POST": [], "PUT": []})
    );
}

#[tokio::test]
async fn configured_cap_bounds_each_method() {
    let app = TestApp::spawn_configured(|cfg| cfg.metrics.max_records_per_method = 2).await;
    mount_list(&app, 200, Duration::ZERO).await;

    for _ in 0..5 {
        app.get_deals(&[]).await;
    }
    app.put_deals(None, &json!({"title": "x"})).await;

    let snap = app.state.metrics().snapshot();
    assert_eq!(snap.get.len(), 2);
    assert!(snap.get.iter().all(|r| r.latency.is_some()));
    assert_eq!(snap.put.len(), 1);
}

#[tokio::test]
async fn untracked_methods_leave_no_record() {
    let app = TestApp::spawn().await;

    let resp = app
        .http_client
        .delete(&format!("{}/deals", app.address))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 405);

    assert!(app.state.metrics().is_empty());
}

#[tokio::test]
async fn healthz_answers_ok() {
    let app = TestApp::spawn().await;

    let resp = app
        .http_client
        .get(&format!("{}/healthz", app.address))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status().as_u16(), 200);
    assert_eq!(resp.text().await.unwrap(), "ok");
}
