// Dashboard backend wire types
//
// Models for the widget persistence endpoints. Every response is wrapped in
// the `Envelope<T>` result envelope. `WireWidgetConfig` is the flattened
// option representation the backend stores: multi-selects as comma-joined
// strings, enums as stringified numeric codes. Fields use `#[serde(default)]`
// liberally because persisted records from older backend versions omit
// fields freely.

use serde::{Deserialize, Serialize};

// ── Response Envelope ────────────────────────────────────────────────

/// Standard backend response envelope.
///
/// Every endpoint wraps its payload:
/// ```json
/// { "result": { "code": "SUCCESS", "message": "optional" }, "data": ... }
/// ```
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Envelope<T> {
    pub result: ResultMeta,
    #[serde(default)]
    pub data: Option<T>,
}

/// Result metadata from the envelope. `code` == `"SUCCESS"` means success.
#[derive(Debug, Deserialize)]
pub struct ResultMeta {
    pub code: String,
    #[serde(default)]
    pub message: Option<String>,
}

impl ResultMeta {
    pub fn is_success(&self) -> bool {
        self.code == "SUCCESS"
    }
}

// ── Widget configuration ─────────────────────────────────────────────

/// Flattened widget option record as the backend stores it.
///
/// Absence carries meaning: a field missing from the record means "never
/// configured", which is distinct from any in-band value. Serialization
/// therefore skips `None` fields instead of writing empty strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireWidgetConfig {
    /// Update cycle code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updt_cycle_cd: Option<String>,

    /// Ranking display count.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub indct_cnt_cd: Option<String>,

    /// Chart display type code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub indct_type_cd: Option<String>,

    /// Sort order code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_type_cd: Option<String>,

    /// Resource kind code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rsrc_cd: Option<String>,

    /// Comma-joined device kind filter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_kind_sub_arr: Option<String>,

    /// Comma-joined event level filter. The literal `"0"` means "all
    /// levels" -- an irregular sentinel that collides with a
    /// syntactically valid id, so it must only ever be compared exactly.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_lv: Option<String>,

    /// Comma-joined phone type filter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_type_arr: Option<String>,

    /// Comma-joined call type filter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub call_type_arr: Option<String>,

    /// Comma-joined call peak type filter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub call_peak_type_arr: Option<String>,

    /// Single device kind selection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_kind_cd: Option<String>,

    /// Single phone kind selection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_kind_cd: Option<String>,

    /// Selected map identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub map_seq: Option<String>,

    /// Selected device identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_seq: Option<String>,

    /// Business-unit scope.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mngmt_cd: Option<String>,

    /// Catch-all for fields this client does not model. Preserved through
    /// merge-style updates so partial writes never drop them.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

// ── Layout geometry ──────────────────────────────────────────────────

/// Grid tile as persisted: react-grid style geometry plus the embedded
/// widget payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireLayoutItem {
    /// Grid item key. Equals the stringified `seqNum` once persisted.
    pub i: String,
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
    pub data: WireWidgetData,
}

/// Widget payload embedded in a layout item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireWidgetData {
    pub id: String,
    #[serde(rename = "type")]
    pub widget_type: String,
    pub title: String,
    pub dimension: WireDimension,
    pub group: String,
    pub api_url: String,
    /// Flattened option state, same encoding as `PersistedWidget::widget_conf`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<WireWidgetConfig>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireDimension {
    pub w: u32,
    pub h: u32,
}

// ── Persistence records ──────────────────────────────────────────────

/// Server-side widget record from `GET /api/dashboards/{id}/widgets`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedWidget {
    pub seq_num: i64,
    /// Catalog code of the widget type.
    pub widget_id: i32,
    #[serde(default)]
    pub action_url: Option<String>,
    #[serde(default)]
    pub widget_conf: Option<WireWidgetConfig>,
    pub widget_info: WireLayoutItem,
}

/// One entry of the layout batch sent to
/// `POST /api/dashboards/{id}/widgets`. An absent `seq_num` tells the
/// backend to create the record.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveLayoutEntry {
    pub dashboard_id: String,
    pub widget_id: i32,
    pub widget_info: WireLayoutItem,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seq_num: Option<i64>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn widget_conf_absent_fields_stay_absent() {
        let conf = WireWidgetConfig {
            updt_cycle_cd: Some("2".into()),
            ..WireWidgetConfig::default()
        };
        let value = serde_json::to_value(&conf).unwrap();
        assert_eq!(value, json!({ "updtCycleCd": "2" }));
    }

    #[test]
    fn widget_conf_preserves_unmodeled_fields() {
        let raw = json!({
            "updtCycleCd": "3",
            "legacyThemeCd": "dark"
        });
        let conf: WireWidgetConfig = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(conf.updt_cycle_cd.as_deref(), Some("3"));
        assert_eq!(
            conf.extra.get("legacyThemeCd"),
            Some(&serde_json::Value::String("dark".into()))
        );
        // Round-trips untouched.
        assert_eq!(serde_json::to_value(&conf).unwrap(), raw);
    }

    #[test]
    fn save_entry_omits_seq_num_for_creates() {
        let entry = SaveLayoutEntry {
            dashboard_id: "main".into(),
            widget_id: 101,
            widget_info: WireLayoutItem {
                i: "local-1".into(),
                x: 0,
                y: 0,
                w: 6,
                h: 4,
                data: WireWidgetData {
                    id: "local-1".into(),
                    widget_type: "eventTrends".into(),
                    title: "Event Trends".into(),
                    dimension: WireDimension { w: 6, h: 4 },
                    group: "event".into(),
                    api_url: "/api/widgets/event-trends".into(),
                    options: None,
                },
            },
            seq_num: None,
        };
        let value = serde_json::to_value(&entry).unwrap();
        assert!(value.get("seqNum").is_none());
        assert_eq!(value["widgetInfo"]["i"], "local-1");
    }

    #[test]
    fn envelope_failure_codes_deserialize() {
        let body = json!({
            "result": { "code": "DASHBOARD_NOT_FOUND", "message": "no such dashboard" }
        });
        let envelope: Envelope<Vec<PersistedWidget>> = serde_json::from_value(body).unwrap();
        assert!(!envelope.result.is_success());
        assert!(envelope.data.is_none());
    }
}
