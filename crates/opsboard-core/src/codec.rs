// ── Widget option codec ──
//
// Bidirectional transform between the backend's flattened option record
// (`WireWidgetConfig`: comma-joined strings, stringified codes, sentinel
// literals) and the typed `OptionFields` the rest of the system works
// in. Wire literals never escape this module: "all" strings become
// `IdFilter::All`, the backend's no-filter sentinel on single selects
// becomes `SingleSelect::NotChosen`.
//
// Decoding is total. Unparseable segments are dropped with a warning
// and a field absent on the wire decodes to `None`, never to an empty
// collection -- "no filter sent" and "filter matches nothing" are
// different states. Schema validation happens after decode, not here.

use tracing::warn;

use opsboard_api::WireWidgetConfig;

use crate::model::options::{
    ChartType, OptionFields, ResourceKind, SortOrder, UpdateInterval,
};
use crate::model::selection::{FilterCategory, IdFilter, NONE_SELECTED, SingleSelect};

// ── Decode ──────────────────────────────────────────────────────────

/// Decode a wire record into typed option fields.
pub fn decode(wire: &WireWidgetConfig) -> OptionFields {
    OptionFields {
        update_interval: decode_code(
            wire.updt_cycle_cd.as_deref(),
            "updtCycleCd",
            UpdateInterval::from_wire_code,
        ),
        chart_type: decode_code(
            wire.indct_type_cd.as_deref(),
            "indctTypeCd",
            ChartType::from_wire_code,
        ),
        order: decode_code(
            wire.sort_type_cd.as_deref(),
            "sortTypeCd",
            SortOrder::from_wire_code,
        ),
        selected_resource: decode_code(
            wire.rsrc_cd.as_deref(),
            "rsrcCd",
            ResourceKind::from_wire_code,
        ),
        rank_count: decode_number(wire.indct_cnt_cd.as_deref(), "indctCntCd"),
        device_types: wire
            .device_kind_sub_arr
            .as_deref()
            .map(|raw| decode_filter(raw, FilterCategory::DeviceTypes)),
        event_types: wire
            .event_lv
            .as_deref()
            .map(|raw| decode_filter(raw, FilterCategory::EventLevels)),
        phone_types: wire
            .phone_type_arr
            .as_deref()
            .map(|raw| decode_filter(raw, FilterCategory::PhoneTypes)),
        call_types: wire
            .call_type_arr
            .as_deref()
            .map(|raw| decode_filter(raw, FilterCategory::CallTypes)),
        call_peak_types: wire
            .call_peak_type_arr
            .as_deref()
            .map(|raw| decode_filter(raw, FilterCategory::CallPeakTypes)),
        device_type: wire
            .device_kind_cd
            .as_deref()
            .and_then(|raw| decode_single(raw, FilterCategory::DeviceTypes, "deviceKindCd")),
        phone_type: wire
            .phone_kind_cd
            .as_deref()
            .and_then(|raw| decode_single(raw, FilterCategory::PhoneTypes, "phoneKindCd")),
        selected_map: decode_number(wire.map_seq.as_deref(), "mapSeq"),
        selected_device: decode_number(wire.device_seq.as_deref(), "deviceSeq"),
        management_cd: decode_number(wire.mngmt_cd.as_deref(), "mngmtCd"),
    }
}

/// Decode a multi-select field.
///
/// The comparison against the category's "all" literal is exact string
/// equality on the raw value. For event levels that literal is `"0"` --
/// checking a parsed number for falsiness instead would swallow a real
/// id 0 appearing in a longer list like `"0,3"`.
fn decode_filter(raw: &str, category: FilterCategory) -> IdFilter {
    if raw == category.all_wire() {
        return IdFilter::All;
    }
    let ids = raw
        .split(',')
        .filter(|segment| !segment.is_empty())
        .filter_map(|segment| match segment.trim().parse::<i32>() {
            Ok(id) => Some(id),
            Err(_) => {
                warn!(?category, segment, "dropping unparseable filter segment");
                None
            }
        })
        .collect();
    IdFilter::Ids(ids)
}

/// Decode a single-select-with-none field.
///
/// The backend's own no-filter sentinel (the category "all" literal)
/// maps to `NotChosen` -- the UI cannot tell "never filtered" from
/// "not yet chosen", so the two collapse deliberately.
fn decode_single(raw: &str, category: FilterCategory, field: &str) -> Option<SingleSelect> {
    if raw == category.all_wire() {
        return Some(SingleSelect::NotChosen);
    }
    match raw.trim().parse::<i32>() {
        Ok(id) if id == NONE_SELECTED => Some(SingleSelect::NotChosen),
        Ok(id) => Some(SingleSelect::Id(id)),
        Err(_) => {
            warn!(field, raw, "dropping unparseable selection");
            None
        }
    }
}

/// Decode a stringified enum code, preserving valid-but-falsy values
/// and dropping anything unparseable or out of range.
fn decode_code<T>(raw: Option<&str>, field: &str, from_code: fn(i32) -> Option<T>) -> Option<T> {
    let raw = raw?;
    match raw.trim().parse::<i32>().ok().and_then(from_code) {
        Some(value) => Some(value),
        None => {
            warn!(field, raw, "dropping unrecognized option code");
            None
        }
    }
}

/// Decode a stringified number, dropping unparseable values.
fn decode_number<T: std::str::FromStr>(raw: Option<&str>, field: &str) -> Option<T> {
    let raw = raw?;
    match raw.trim().parse::<T>() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!(field, raw, "dropping unparseable numeric option");
            None
        }
    }
}

// ── Encode ──────────────────────────────────────────────────────────

/// Encode option fields over an existing wire record.
///
/// This is a merge, not a replace: `None` fields leave the existing
/// value (and any unmodeled `extra` fields) untouched, so a
/// single-field update never erases its siblings. Sentinels encode to
/// the category's fixed literal, never to a re-join of the id list.
pub fn encode(fields: &OptionFields, existing: &WireWidgetConfig) -> WireWidgetConfig {
    let mut wire = existing.clone();

    if let Some(v) = fields.update_interval {
        wire.updt_cycle_cd = Some(v.wire_code().to_string());
    }
    if let Some(v) = fields.chart_type {
        wire.indct_type_cd = Some(v.wire_code().to_string());
    }
    if let Some(v) = fields.order {
        wire.sort_type_cd = Some(v.wire_code().to_string());
    }
    if let Some(v) = fields.selected_resource {
        wire.rsrc_cd = Some(v.wire_code().to_string());
    }
    if let Some(v) = fields.rank_count {
        wire.indct_cnt_cd = Some(v.to_string());
    }
    if let Some(ref v) = fields.device_types {
        wire.device_kind_sub_arr = Some(encode_filter(v, FilterCategory::DeviceTypes));
    }
    if let Some(ref v) = fields.event_types {
        wire.event_lv = Some(encode_filter(v, FilterCategory::EventLevels));
    }
    if let Some(ref v) = fields.phone_types {
        wire.phone_type_arr = Some(encode_filter(v, FilterCategory::PhoneTypes));
    }
    if let Some(ref v) = fields.call_types {
        wire.call_type_arr = Some(encode_filter(v, FilterCategory::CallTypes));
    }
    if let Some(ref v) = fields.call_peak_types {
        wire.call_peak_type_arr = Some(encode_filter(v, FilterCategory::CallPeakTypes));
    }
    if let Some(v) = fields.device_type {
        wire.device_kind_cd = Some(encode_single(v, FilterCategory::DeviceTypes));
    }
    if let Some(v) = fields.phone_type {
        wire.phone_kind_cd = Some(encode_single(v, FilterCategory::PhoneTypes));
    }
    if let Some(v) = fields.selected_map {
        wire.map_seq = Some(v.to_string());
    }
    if let Some(v) = fields.selected_device {
        wire.device_seq = Some(v.to_string());
    }
    if let Some(v) = fields.management_cd {
        wire.mngmt_cd = Some(v.to_string());
    }

    wire
}

fn encode_filter(filter: &IdFilter, category: FilterCategory) -> String {
    match filter {
        IdFilter::All => category.all_wire().to_owned(),
        IdFilter::Ids(ids) => ids
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(","),
    }
}

fn encode_single(select: SingleSelect, category: FilterCategory) -> String {
    match select {
        SingleSelect::NotChosen => category.all_wire().to_owned(),
        SingleSelect::Id(id) => id.to_string(),
    }
}
