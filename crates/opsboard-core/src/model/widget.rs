// ── Widget identity and layout types ──
//
// WidgetType / WidgetGroup are the closed sets the catalog is keyed by.
// LayoutItem is the grid tile the store owns: geometry plus the embedded
// widget state the UI renders from.

use std::fmt;

use uuid::Uuid;

use super::options::WidgetOptions;

// ── WidgetType ──────────────────────────────────────────────────────

/// Every widget type the dashboard can place.
///
/// The strum representation (`eventTrends`, ...) is the `type` string
/// carried in persisted layout blobs; [`wire_code`](Self::wire_code) is
/// the numeric catalog code used as `widgetId`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(serialize_all = "camelCase")]
pub enum WidgetType {
    EventTrends,
    EventStatusByDeviceTypes,
    RecentEvents,
    DeviceRanking,
    DeviceResourceGauge,
    DeviceTypeSummary,
    MapView,
    PhoneStatus,
    PhoneTypeSummary,
    CallTraffic,
    CallPeak,
}

impl WidgetType {
    /// Numeric catalog code (the backend's `widgetId`).
    pub fn wire_code(self) -> i32 {
        match self {
            Self::EventTrends => 101,
            Self::EventStatusByDeviceTypes => 102,
            Self::RecentEvents => 103,
            Self::DeviceRanking => 201,
            Self::DeviceResourceGauge => 202,
            Self::DeviceTypeSummary => 203,
            Self::MapView => 301,
            Self::PhoneStatus => 401,
            Self::PhoneTypeSummary => 402,
            Self::CallTraffic => 501,
            Self::CallPeak => 502,
        }
    }

    pub fn from_wire_code(code: i32) -> Option<Self> {
        match code {
            101 => Some(Self::EventTrends),
            102 => Some(Self::EventStatusByDeviceTypes),
            103 => Some(Self::RecentEvents),
            201 => Some(Self::DeviceRanking),
            202 => Some(Self::DeviceResourceGauge),
            203 => Some(Self::DeviceTypeSummary),
            301 => Some(Self::MapView),
            401 => Some(Self::PhoneStatus),
            402 => Some(Self::PhoneTypeSummary),
            501 => Some(Self::CallTraffic),
            502 => Some(Self::CallPeak),
            _ => None,
        }
    }
}

// ── WidgetGroup ─────────────────────────────────────────────────────

/// Palette grouping for the widget picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[strum(serialize_all = "camelCase")]
pub enum WidgetGroup {
    Event,
    Device,
    Phone,
    Call,
    Map,
}

// ── Geometry ────────────────────────────────────────────────────────

/// Widget size in grid cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimension {
    pub w: u32,
    pub h: u32,
}

/// Grid placement of a layout item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridRect {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

impl fmt::Display for GridRect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{}) {}x{}", self.x, self.y, self.w, self.h)
    }
}

// ── Widget state ────────────────────────────────────────────────────

/// Widget payload embedded in a layout item.
///
/// `id` always mirrors the owning [`LayoutItem::id`]; the store enforces
/// that on every mutation.
#[derive(Debug, Clone, PartialEq)]
pub struct WidgetData {
    pub id: String,
    pub widget_type: WidgetType,
    pub title: String,
    pub dimension: Dimension,
    pub group: WidgetGroup,
    pub api_url: String,
    pub options: WidgetOptions,
}

/// A tile on the dashboard grid.
///
/// `id` is the stringified server sequence number once persisted; before
/// that it is a provisional client token (see [`provisional_id`]).
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutItem {
    pub id: String,
    pub rect: GridRect,
    pub data: WidgetData,
}

// ── Provisional identifiers ─────────────────────────────────────────

const PROVISIONAL_PREFIX: &str = "local-";

/// Mint a client-side id for a widget that has not been persisted yet.
pub fn provisional_id() -> String {
    format!("{PROVISIONAL_PREFIX}{}", Uuid::new_v4())
}

/// Whether an id is a provisional client token rather than a server
/// sequence number.
pub fn is_provisional(id: &str) -> bool {
    id.starts_with(PROVISIONAL_PREFIX)
}
