// ── Widget catalog ──
//
// Static registry of widget definitions: palette grouping, default
// dimension, data-source endpoint, and default option set. Defined at
// process start, never mutated. Every default option set is
// schema-complete for its type -- tolerant hydrate leans on that to
// repair incomplete persisted records.

use strum::IntoEnumIterator;

use crate::model::options::{
    ChartType, ResourceKind, SortOrder, UpdateInterval, WidgetOptions,
};
use crate::model::selection::{IdFilter, SingleSelect};
use crate::model::widget::{Dimension, WidgetGroup, WidgetType};

/// Immutable description of one widget type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidgetDefinition {
    pub widget_type: WidgetType,
    pub group: WidgetGroup,
    pub title: &'static str,
    pub default_dimension: Dimension,
    /// Data-source endpoint the rendered widget polls.
    pub data_source: &'static str,
}

/// Lookup surface over the static widget registry.
pub struct WidgetCatalog;

impl WidgetCatalog {
    /// The definition for a widget type.
    pub fn definition(ty: WidgetType) -> WidgetDefinition {
        match ty {
            WidgetType::EventTrends => WidgetDefinition {
                widget_type: ty,
                group: WidgetGroup::Event,
                title: "Event Trends",
                default_dimension: Dimension { w: 6, h: 4 },
                data_source: "/api/widgets/event-trends",
            },
            WidgetType::EventStatusByDeviceTypes => WidgetDefinition {
                widget_type: ty,
                group: WidgetGroup::Event,
                title: "Event Status by Device Type",
                default_dimension: Dimension { w: 4, h: 3 },
                data_source: "/api/widgets/event-status-by-device-types",
            },
            WidgetType::RecentEvents => WidgetDefinition {
                widget_type: ty,
                group: WidgetGroup::Event,
                title: "Recent Events",
                default_dimension: Dimension { w: 6, h: 4 },
                data_source: "/api/widgets/recent-events",
            },
            WidgetType::DeviceRanking => WidgetDefinition {
                widget_type: ty,
                group: WidgetGroup::Device,
                title: "Device Event Ranking",
                default_dimension: Dimension { w: 4, h: 4 },
                data_source: "/api/widgets/device-ranking",
            },
            WidgetType::DeviceResourceGauge => WidgetDefinition {
                widget_type: ty,
                group: WidgetGroup::Device,
                title: "Device Resource Gauge",
                default_dimension: Dimension { w: 3, h: 3 },
                data_source: "/api/widgets/device-resource-gauge",
            },
            WidgetType::DeviceTypeSummary => WidgetDefinition {
                widget_type: ty,
                group: WidgetGroup::Device,
                title: "Device Type Summary",
                default_dimension: Dimension { w: 3, h: 3 },
                data_source: "/api/widgets/device-type-summary",
            },
            WidgetType::MapView => WidgetDefinition {
                widget_type: ty,
                group: WidgetGroup::Map,
                title: "Facility Map",
                default_dimension: Dimension { w: 8, h: 6 },
                data_source: "/api/widgets/map-view",
            },
            WidgetType::PhoneStatus => WidgetDefinition {
                widget_type: ty,
                group: WidgetGroup::Phone,
                title: "Phone Status",
                default_dimension: Dimension { w: 4, h: 3 },
                data_source: "/api/widgets/phone-status",
            },
            WidgetType::PhoneTypeSummary => WidgetDefinition {
                widget_type: ty,
                group: WidgetGroup::Phone,
                title: "Phone Type Summary",
                default_dimension: Dimension { w: 3, h: 3 },
                data_source: "/api/widgets/phone-type-summary",
            },
            WidgetType::CallTraffic => WidgetDefinition {
                widget_type: ty,
                group: WidgetGroup::Call,
                title: "Call Traffic",
                default_dimension: Dimension { w: 6, h: 4 },
                data_source: "/api/widgets/call-traffic",
            },
            WidgetType::CallPeak => WidgetDefinition {
                widget_type: ty,
                group: WidgetGroup::Call,
                title: "Call Peaks",
                default_dimension: Dimension { w: 4, h: 4 },
                data_source: "/api/widgets/call-peak",
            },
        }
    }

    /// The default option set for a widget type. Multi-selects default to
    /// the category "all" sentinel, single-selects to not-chosen.
    pub fn default_options(ty: WidgetType) -> WidgetOptions {
        match ty {
            WidgetType::EventTrends => WidgetOptions::EventTrends {
                update_interval: UpdateInterval::Sec30,
                chart_type: ChartType::Line,
                device_types: IdFilter::All,
                event_types: IdFilter::All,
            },
            WidgetType::EventStatusByDeviceTypes => WidgetOptions::EventStatusByDeviceTypes {
                update_interval: UpdateInterval::Sec30,
                device_types: IdFilter::All,
                event_types: IdFilter::All,
            },
            WidgetType::RecentEvents => WidgetOptions::RecentEvents {
                update_interval: UpdateInterval::Sec10,
                event_types: IdFilter::All,
                order: SortOrder::Desc,
                management_cd: None,
            },
            WidgetType::DeviceRanking => WidgetOptions::DeviceRanking {
                update_interval: UpdateInterval::Min1,
                chart_type: ChartType::Bar,
                rank_count: 5,
                device_types: IdFilter::All,
                event_types: IdFilter::All,
            },
            WidgetType::DeviceResourceGauge => WidgetOptions::DeviceResourceGauge {
                update_interval: UpdateInterval::Sec30,
                selected_resource: ResourceKind::Cpu,
                selected_device: None,
            },
            WidgetType::DeviceTypeSummary => WidgetOptions::DeviceTypeSummary {
                update_interval: UpdateInterval::Min1,
                device_type: SingleSelect::NotChosen,
            },
            WidgetType::MapView => WidgetOptions::MapView {
                update_interval: UpdateInterval::Min1,
                selected_map: None,
            },
            WidgetType::PhoneStatus => WidgetOptions::PhoneStatus {
                update_interval: UpdateInterval::Sec30,
                phone_types: IdFilter::All,
            },
            WidgetType::PhoneTypeSummary => WidgetOptions::PhoneTypeSummary {
                update_interval: UpdateInterval::Min1,
                phone_type: SingleSelect::NotChosen,
            },
            WidgetType::CallTraffic => WidgetOptions::CallTraffic {
                update_interval: UpdateInterval::Min1,
                chart_type: ChartType::Line,
                call_types: IdFilter::All,
            },
            WidgetType::CallPeak => WidgetOptions::CallPeak {
                update_interval: UpdateInterval::Min5,
                order: SortOrder::Desc,
                call_peak_types: IdFilter::All,
            },
        }
    }

    /// All definitions, in catalog order.
    pub fn all() -> impl Iterator<Item = WidgetDefinition> {
        WidgetType::iter().map(Self::definition)
    }

    /// Look up a definition by its numeric catalog code.
    pub fn by_wire_code(code: i32) -> Option<WidgetDefinition> {
        WidgetType::from_wire_code(code).map(Self::definition)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_type_has_a_definition() {
        assert_eq!(WidgetCatalog::all().count(), WidgetType::iter().count());
    }

    #[test]
    fn definitions_carry_consistent_types() {
        for def in WidgetCatalog::all() {
            assert_eq!(
                WidgetCatalog::by_wire_code(def.widget_type.wire_code()),
                Some(def)
            );
        }
    }

    #[test]
    fn default_options_match_their_type() {
        for def in WidgetCatalog::all() {
            assert_eq!(
                WidgetCatalog::default_options(def.widget_type).widget_type(),
                def.widget_type
            );
        }
    }
}
