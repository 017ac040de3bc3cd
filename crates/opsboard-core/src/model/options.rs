// ── Widget option model ──
//
// `WidgetOptions` is the tagged union the rest of the system works in:
// one variant per widget type, each declaring exactly the fields that
// widget's renderer consumes. `OptionFields` is the flat, all-optional
// form the codec produces from a wire record and consumes when encoding;
// the conversion between the two (with required-field enforcement) lives
// in the schema module.

use super::selection::{IdFilter, SingleSelect};
use super::widget::WidgetType;

// ── Scalar option enums ─────────────────────────────────────────────

/// Widget refresh cadence (`updtCycleCd`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateInterval {
    Sec10,
    Sec30,
    Min1,
    Min5,
    Min10,
}

impl UpdateInterval {
    pub fn wire_code(self) -> i32 {
        match self {
            Self::Sec10 => 1,
            Self::Sec30 => 2,
            Self::Min1 => 3,
            Self::Min5 => 4,
            Self::Min10 => 5,
        }
    }

    pub fn from_wire_code(code: i32) -> Option<Self> {
        match code {
            1 => Some(Self::Sec10),
            2 => Some(Self::Sec30),
            3 => Some(Self::Min1),
            4 => Some(Self::Min5),
            5 => Some(Self::Min10),
            _ => None,
        }
    }

    pub fn as_secs(self) -> u64 {
        match self {
            Self::Sec10 => 10,
            Self::Sec30 => 30,
            Self::Min1 => 60,
            Self::Min5 => 300,
            Self::Min10 => 600,
        }
    }
}

/// Chart rendering style (`indctTypeCd`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartType {
    Line,
    Bar,
    Pie,
    Area,
}

impl ChartType {
    pub fn wire_code(self) -> i32 {
        match self {
            Self::Line => 1,
            Self::Bar => 2,
            Self::Pie => 3,
            Self::Area => 4,
        }
    }

    pub fn from_wire_code(code: i32) -> Option<Self> {
        match code {
            1 => Some(Self::Line),
            2 => Some(Self::Bar),
            3 => Some(Self::Pie),
            4 => Some(Self::Area),
            _ => None,
        }
    }
}

/// Ranking / listing sort direction (`sortTypeCd`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Desc,
    Asc,
}

impl SortOrder {
    pub fn wire_code(self) -> i32 {
        match self {
            Self::Desc => 1,
            Self::Asc => 2,
        }
    }

    pub fn from_wire_code(code: i32) -> Option<Self> {
        match code {
            1 => Some(Self::Desc),
            2 => Some(Self::Asc),
            _ => None,
        }
    }
}

/// Monitored resource kind (`rsrcCd`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Cpu,
    Memory,
    Disk,
    Traffic,
}

impl ResourceKind {
    pub fn wire_code(self) -> i32 {
        match self {
            Self::Cpu => 1,
            Self::Memory => 2,
            Self::Disk => 3,
            Self::Traffic => 4,
        }
    }

    pub fn from_wire_code(code: i32) -> Option<Self> {
        match code {
            1 => Some(Self::Cpu),
            2 => Some(Self::Memory),
            3 => Some(Self::Disk),
            4 => Some(Self::Traffic),
            _ => None,
        }
    }
}

// ── Field names ─────────────────────────────────────────────────────

/// Option field identifiers, used for required-field reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "camelCase")]
pub enum OptionField {
    UpdateInterval,
    ChartType,
    Order,
    SelectedResource,
    RankCount,
    DeviceTypes,
    EventTypes,
    PhoneTypes,
    CallTypes,
    CallPeakTypes,
    DeviceType,
    PhoneType,
    SelectedMap,
    SelectedDevice,
    ManagementCd,
}

// ── Flat decoded form ───────────────────────────────────────────────

/// All option fields, every one optional.
///
/// This is what the codec hands back from a wire record: `None` means
/// the field was absent on the wire, never "empty". It is also the
/// encode input -- `None` fields leave the existing wire value alone.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OptionFields {
    pub update_interval: Option<UpdateInterval>,
    pub chart_type: Option<ChartType>,
    pub order: Option<SortOrder>,
    pub selected_resource: Option<ResourceKind>,
    pub rank_count: Option<u32>,
    pub device_types: Option<IdFilter>,
    pub event_types: Option<IdFilter>,
    pub phone_types: Option<IdFilter>,
    pub call_types: Option<IdFilter>,
    pub call_peak_types: Option<IdFilter>,
    pub device_type: Option<SingleSelect>,
    pub phone_type: Option<SingleSelect>,
    pub selected_map: Option<i64>,
    pub selected_device: Option<i64>,
    pub management_cd: Option<i64>,
}

impl OptionFields {
    /// Fill every `None` field from `defaults`, leaving set fields alone.
    /// Used by tolerant hydrate to repair incomplete persisted records.
    pub fn fill_missing(&mut self, defaults: &OptionFields) {
        macro_rules! fill {
            ($($field:ident),* $(,)?) => {
                $(
                    if self.$field.is_none() {
                        self.$field.clone_from(&defaults.$field);
                    }
                )*
            };
        }
        fill!(
            update_interval,
            chart_type,
            order,
            selected_resource,
            rank_count,
            device_types,
            event_types,
            phone_types,
            call_types,
            call_peak_types,
            device_type,
            phone_type,
            selected_map,
            selected_device,
            management_cd,
        );
    }
}

// ── Tagged option union ─────────────────────────────────────────────

/// Per-widget-type option bag.
///
/// A value of this type is always complete: every field its variant
/// declares required is present by construction. Building one from a
/// flat [`OptionFields`] goes through the schema gate, which rejects
/// bags missing required fields.
#[derive(Debug, Clone, PartialEq)]
pub enum WidgetOptions {
    EventTrends {
        update_interval: UpdateInterval,
        chart_type: ChartType,
        device_types: IdFilter,
        event_types: IdFilter,
    },
    EventStatusByDeviceTypes {
        update_interval: UpdateInterval,
        device_types: IdFilter,
        event_types: IdFilter,
    },
    RecentEvents {
        update_interval: UpdateInterval,
        event_types: IdFilter,
        order: SortOrder,
        management_cd: Option<i64>,
    },
    DeviceRanking {
        update_interval: UpdateInterval,
        chart_type: ChartType,
        rank_count: u32,
        device_types: IdFilter,
        event_types: IdFilter,
    },
    DeviceResourceGauge {
        update_interval: UpdateInterval,
        selected_resource: ResourceKind,
        selected_device: Option<i64>,
    },
    DeviceTypeSummary {
        update_interval: UpdateInterval,
        device_type: SingleSelect,
    },
    MapView {
        update_interval: UpdateInterval,
        selected_map: Option<i64>,
    },
    PhoneStatus {
        update_interval: UpdateInterval,
        phone_types: IdFilter,
    },
    PhoneTypeSummary {
        update_interval: UpdateInterval,
        phone_type: SingleSelect,
    },
    CallTraffic {
        update_interval: UpdateInterval,
        chart_type: ChartType,
        call_types: IdFilter,
    },
    CallPeak {
        update_interval: UpdateInterval,
        order: SortOrder,
        call_peak_types: IdFilter,
    },
}

impl WidgetOptions {
    /// The widget type this bag belongs to.
    pub fn widget_type(&self) -> WidgetType {
        match self {
            Self::EventTrends { .. } => WidgetType::EventTrends,
            Self::EventStatusByDeviceTypes { .. } => WidgetType::EventStatusByDeviceTypes,
            Self::RecentEvents { .. } => WidgetType::RecentEvents,
            Self::DeviceRanking { .. } => WidgetType::DeviceRanking,
            Self::DeviceResourceGauge { .. } => WidgetType::DeviceResourceGauge,
            Self::DeviceTypeSummary { .. } => WidgetType::DeviceTypeSummary,
            Self::MapView { .. } => WidgetType::MapView,
            Self::PhoneStatus { .. } => WidgetType::PhoneStatus,
            Self::PhoneTypeSummary { .. } => WidgetType::PhoneTypeSummary,
            Self::CallTraffic { .. } => WidgetType::CallTraffic,
            Self::CallPeak { .. } => WidgetType::CallPeak,
        }
    }
}
