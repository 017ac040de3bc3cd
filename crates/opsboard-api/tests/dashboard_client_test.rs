#![allow(clippy::unwrap_used)]
// Integration tests for `DashboardClient` using wiremock.

use serde_json::json;
use url::Url;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use opsboard_api::wire::{SaveLayoutEntry, WireDimension, WireLayoutItem, WireWidgetData};
use opsboard_api::{DashboardClient, Error, WireWidgetConfig};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, DashboardClient) {
    let server = MockServer::start().await;
    let base_url = Url::parse(&server.uri()).unwrap();
    let client = DashboardClient::with_client(reqwest::Client::new(), base_url);
    (server, client)
}

fn ok_envelope(data: serde_json::Value) -> serde_json::Value {
    json!({ "result": { "code": "SUCCESS" }, "data": data })
}

fn layout_entry(i: &str, seq_num: Option<i64>) -> SaveLayoutEntry {
    SaveLayoutEntry {
        dashboard_id: "main".into(),
        widget_id: 101,
        widget_info: WireLayoutItem {
            i: i.into(),
            x: 0,
            y: 0,
            w: 6,
            h: 4,
            data: WireWidgetData {
                id: i.into(),
                widget_type: "eventTrends".into(),
                title: "Event Trends".into(),
                dimension: WireDimension { w: 6, h: 4 },
                group: "event".into(),
                api_url: "/api/widgets/event-trends".into(),
                options: None,
            },
        },
        seq_num,
    }
}

// ── Fetch tests ─────────────────────────────────────────────────────

#[tokio::test]
async fn test_fetch_widgets() {
    let (server, client) = setup().await;

    let data = json!([{
        "seqNum": 7,
        "widgetId": 101,
        "actionUrl": "/api/widgets/event-trends",
        "widgetConf": {
            "updtCycleCd": "2",
            "eventLv": "0",
            "deviceKindSubArr": "1,3"
        },
        "widgetInfo": {
            "i": "7",
            "x": 0, "y": 0, "w": 6, "h": 4,
            "data": {
                "id": "7",
                "type": "eventTrends",
                "title": "Event Trends",
                "dimension": { "w": 6, "h": 4 },
                "group": "event",
                "apiUrl": "/api/widgets/event-trends"
            }
        }
    }]);

    Mock::given(method("GET"))
        .and(path("/api/dashboards/main/widgets"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_envelope(data)))
        .mount(&server)
        .await;

    let widgets = client.fetch_widgets("main").await.unwrap();

    assert_eq!(widgets.len(), 1);
    assert_eq!(widgets[0].seq_num, 7);
    assert_eq!(widgets[0].widget_id, 101);
    let conf = widgets[0].widget_conf.as_ref().unwrap();
    assert_eq!(conf.event_lv.as_deref(), Some("0"));
    assert_eq!(conf.device_kind_sub_arr.as_deref(), Some("1,3"));
    // Untouched fields stay absent, not empty.
    assert!(conf.phone_type_arr.is_none());
}

#[tokio::test]
async fn test_fetch_widgets_failure_envelope() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/dashboards/missing/widgets"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "result": { "code": "DASHBOARD_NOT_FOUND", "message": "no such dashboard" }
        })))
        .mount(&server)
        .await;

    let result = client.fetch_widgets("missing").await;

    match result {
        Err(Error::Api { code, message, .. }) => {
            assert_eq!(code.as_deref(), Some("DASHBOARD_NOT_FOUND"));
            assert_eq!(message, "no such dashboard");
        }
        other => panic!("expected Api error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_fetch_widgets_http_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/dashboards/main/widgets"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let result = client.fetch_widgets("main").await;

    assert!(
        matches!(result, Err(Error::Api { status: Some(500), .. })),
        "expected Api error with status 500, got: {result:?}"
    );
}

// ── Layout batch tests ──────────────────────────────────────────────

#[tokio::test]
async fn test_save_layout_batch_body() {
    let (server, client) = setup().await;

    // The create entry must serialize without a seqNum key at all.
    let expected = json!([
        {
            "dashboardId": "main",
            "widgetId": 101,
            "widgetInfo": {
                "i": "12",
                "x": 0, "y": 0, "w": 6, "h": 4,
                "data": {
                    "id": "12",
                    "type": "eventTrends",
                    "title": "Event Trends",
                    "dimension": { "w": 6, "h": 4 },
                    "group": "event",
                    "apiUrl": "/api/widgets/event-trends"
                }
            },
            "seqNum": 12
        },
        {
            "dashboardId": "main",
            "widgetId": 101,
            "widgetInfo": {
                "i": "local-abc",
                "x": 0, "y": 0, "w": 6, "h": 4,
                "data": {
                    "id": "local-abc",
                    "type": "eventTrends",
                    "title": "Event Trends",
                    "dimension": { "w": 6, "h": 4 },
                    "group": "event",
                    "apiUrl": "/api/widgets/event-trends"
                }
            }
        }
    ]);

    Mock::given(method("POST"))
        .and(path("/api/dashboards/main/widgets"))
        .and(body_json(&expected))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "result": { "code": "SUCCESS" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let entries = vec![layout_entry("12", Some(12)), layout_entry("local-abc", None)];
    client.save_layout("main", &entries).await.unwrap();
}

// ── Scoped config update tests ──────────────────────────────────────

#[tokio::test]
async fn test_update_widget_conf_sends_only_present_fields() {
    let (server, client) = setup().await;

    Mock::given(method("PUT"))
        .and(path("/api/dashboards/main/widgets/7/conf"))
        .and(body_json(json!({ "indctTypeCd": "2", "eventLv": "0" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "result": { "code": "SUCCESS" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let conf = WireWidgetConfig {
        indct_type_cd: Some("2".into()),
        event_lv: Some("0".into()),
        ..WireWidgetConfig::default()
    };
    client.update_widget_conf("main", 7, &conf).await.unwrap();
}

#[tokio::test]
async fn test_update_widget_conf_rejection() {
    let (server, client) = setup().await;

    Mock::given(method("PUT"))
        .and(path("/api/dashboards/main/widgets/9/conf"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "result": { "code": "WIDGET_NOT_FOUND" }
        })))
        .mount(&server)
        .await;

    let result = client
        .update_widget_conf("main", 9, &WireWidgetConfig::default())
        .await;

    assert!(
        matches!(result, Err(Error::Api { .. })),
        "expected Api error, got: {result:?}"
    );
}
