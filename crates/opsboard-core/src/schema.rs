// ── Option schema gate ──
//
// The only way to build a `WidgetOptions` from flat decoded fields.
// Each widget type declares its required fields; a bag missing any of
// them is rejected with the exact field names, so callers can re-prompt
// the originating form. Fields a variant does not declare are ignored.

use crate::model::options::{OptionField, OptionFields, WidgetOptions};
use crate::model::widget::WidgetType;

/// Required option fields per widget type.
pub fn required_fields(ty: WidgetType) -> &'static [OptionField] {
    match ty {
        WidgetType::EventTrends => &[
            OptionField::UpdateInterval,
            OptionField::ChartType,
            OptionField::DeviceTypes,
            OptionField::EventTypes,
        ],
        WidgetType::EventStatusByDeviceTypes => &[
            OptionField::UpdateInterval,
            OptionField::DeviceTypes,
            OptionField::EventTypes,
        ],
        WidgetType::RecentEvents => &[
            OptionField::UpdateInterval,
            OptionField::EventTypes,
            OptionField::Order,
        ],
        WidgetType::DeviceRanking => &[
            OptionField::UpdateInterval,
            OptionField::ChartType,
            OptionField::RankCount,
            OptionField::DeviceTypes,
            OptionField::EventTypes,
        ],
        WidgetType::DeviceResourceGauge => &[
            OptionField::UpdateInterval,
            OptionField::SelectedResource,
        ],
        WidgetType::DeviceTypeSummary => {
            &[OptionField::UpdateInterval, OptionField::DeviceType]
        }
        WidgetType::MapView => &[OptionField::UpdateInterval],
        WidgetType::PhoneStatus => &[OptionField::UpdateInterval, OptionField::PhoneTypes],
        WidgetType::PhoneTypeSummary => {
            &[OptionField::UpdateInterval, OptionField::PhoneType]
        }
        WidgetType::CallTraffic => &[
            OptionField::UpdateInterval,
            OptionField::ChartType,
            OptionField::CallTypes,
        ],
        WidgetType::CallPeak => &[
            OptionField::UpdateInterval,
            OptionField::Order,
            OptionField::CallPeakTypes,
        ],
    }
}

fn take<T>(value: Option<T>, field: OptionField, missing: &mut Vec<OptionField>) -> Option<T> {
    if value.is_none() {
        missing.push(field);
    }
    value
}

impl WidgetOptions {
    /// Build the option bag for `ty` from flat fields.
    ///
    /// Fails with the list of missing required fields; extra fields the
    /// variant does not declare are silently dropped.
    #[allow(clippy::too_many_lines)]
    pub fn from_fields(ty: WidgetType, fields: &OptionFields) -> Result<Self, Vec<OptionField>> {
        let mut missing = Vec::new();
        match ty {
            WidgetType::EventTrends => {
                let update_interval =
                    take(fields.update_interval, OptionField::UpdateInterval, &mut missing);
                let chart_type = take(fields.chart_type, OptionField::ChartType, &mut missing);
                let device_types =
                    take(fields.device_types.clone(), OptionField::DeviceTypes, &mut missing);
                let event_types =
                    take(fields.event_types.clone(), OptionField::EventTypes, &mut missing);
                let (
                    Some(update_interval),
                    Some(chart_type),
                    Some(device_types),
                    Some(event_types),
                ) = (update_interval, chart_type, device_types, event_types)
                else {
                    return Err(missing);
                };
                Ok(Self::EventTrends {
                    update_interval,
                    chart_type,
                    device_types,
                    event_types,
                })
            }
            WidgetType::EventStatusByDeviceTypes => {
                let update_interval =
                    take(fields.update_interval, OptionField::UpdateInterval, &mut missing);
                let device_types =
                    take(fields.device_types.clone(), OptionField::DeviceTypes, &mut missing);
                let event_types =
                    take(fields.event_types.clone(), OptionField::EventTypes, &mut missing);
                let (Some(update_interval), Some(device_types), Some(event_types)) =
                    (update_interval, device_types, event_types)
                else {
                    return Err(missing);
                };
                Ok(Self::EventStatusByDeviceTypes {
                    update_interval,
                    device_types,
                    event_types,
                })
            }
            WidgetType::RecentEvents => {
                let update_interval =
                    take(fields.update_interval, OptionField::UpdateInterval, &mut missing);
                let event_types =
                    take(fields.event_types.clone(), OptionField::EventTypes, &mut missing);
                let order = take(fields.order, OptionField::Order, &mut missing);
                let (Some(update_interval), Some(event_types), Some(order)) =
                    (update_interval, event_types, order)
                else {
                    return Err(missing);
                };
                Ok(Self::RecentEvents {
                    update_interval,
                    event_types,
                    order,
                    management_cd: fields.management_cd,
                })
            }
            WidgetType::DeviceRanking => {
                let update_interval =
                    take(fields.update_interval, OptionField::UpdateInterval, &mut missing);
                let chart_type = take(fields.chart_type, OptionField::ChartType, &mut missing);
                let rank_count = take(fields.rank_count, OptionField::RankCount, &mut missing);
                let device_types =
                    take(fields.device_types.clone(), OptionField::DeviceTypes, &mut missing);
                let event_types =
                    take(fields.event_types.clone(), OptionField::EventTypes, &mut missing);
                let (
                    Some(update_interval),
                    Some(chart_type),
                    Some(rank_count),
                    Some(device_types),
                    Some(event_types),
                ) = (update_interval, chart_type, rank_count, device_types, event_types)
                else {
                    return Err(missing);
                };
                Ok(Self::DeviceRanking {
                    update_interval,
                    chart_type,
                    rank_count,
                    device_types,
                    event_types,
                })
            }
            WidgetType::DeviceResourceGauge => {
                let update_interval =
                    take(fields.update_interval, OptionField::UpdateInterval, &mut missing);
                let selected_resource =
                    take(fields.selected_resource, OptionField::SelectedResource, &mut missing);
                let (Some(update_interval), Some(selected_resource)) =
                    (update_interval, selected_resource)
                else {
                    return Err(missing);
                };
                Ok(Self::DeviceResourceGauge {
                    update_interval,
                    selected_resource,
                    selected_device: fields.selected_device,
                })
            }
            WidgetType::DeviceTypeSummary => {
                let update_interval =
                    take(fields.update_interval, OptionField::UpdateInterval, &mut missing);
                let device_type = take(fields.device_type, OptionField::DeviceType, &mut missing);
                let (Some(update_interval), Some(device_type)) = (update_interval, device_type)
                else {
                    return Err(missing);
                };
                Ok(Self::DeviceTypeSummary {
                    update_interval,
                    device_type,
                })
            }
            WidgetType::MapView => {
                let Some(update_interval) =
                    take(fields.update_interval, OptionField::UpdateInterval, &mut missing)
                else {
                    return Err(missing);
                };
                Ok(Self::MapView {
                    update_interval,
                    selected_map: fields.selected_map,
                })
            }
            WidgetType::PhoneStatus => {
                let update_interval =
                    take(fields.update_interval, OptionField::UpdateInterval, &mut missing);
                let phone_types =
                    take(fields.phone_types.clone(), OptionField::PhoneTypes, &mut missing);
                let (Some(update_interval), Some(phone_types)) = (update_interval, phone_types)
                else {
                    return Err(missing);
                };
                Ok(Self::PhoneStatus {
                    update_interval,
                    phone_types,
                })
            }
            WidgetType::PhoneTypeSummary => {
                let update_interval =
                    take(fields.update_interval, OptionField::UpdateInterval, &mut missing);
                let phone_type = take(fields.phone_type, OptionField::PhoneType, &mut missing);
                let (Some(update_interval), Some(phone_type)) = (update_interval, phone_type)
                else {
                    return Err(missing);
                };
                Ok(Self::PhoneTypeSummary {
                    update_interval,
                    phone_type,
                })
            }
            WidgetType::CallTraffic => {
                let update_interval =
                    take(fields.update_interval, OptionField::UpdateInterval, &mut missing);
                let chart_type = take(fields.chart_type, OptionField::ChartType, &mut missing);
                let call_types =
                    take(fields.call_types.clone(), OptionField::CallTypes, &mut missing);
                let (Some(update_interval), Some(chart_type), Some(call_types)) =
                    (update_interval, chart_type, call_types)
                else {
                    return Err(missing);
                };
                Ok(Self::CallTraffic {
                    update_interval,
                    chart_type,
                    call_types,
                })
            }
            WidgetType::CallPeak => {
                let update_interval =
                    take(fields.update_interval, OptionField::UpdateInterval, &mut missing);
                let order = take(fields.order, OptionField::Order, &mut missing);
                let call_peak_types = take(
                    fields.call_peak_types.clone(),
                    OptionField::CallPeakTypes,
                    &mut missing,
                );
                let (Some(update_interval), Some(order), Some(call_peak_types)) =
                    (update_interval, order, call_peak_types)
                else {
                    return Err(missing);
                };
                Ok(Self::CallPeak {
                    update_interval,
                    order,
                    call_peak_types,
                })
            }
        }
    }

    /// Project back into the flat form, for encoding. Every declared
    /// field comes out `Some`; undeclared fields come out `None`.
    pub fn fields(&self) -> OptionFields {
        let mut f = OptionFields::default();
        match self {
            Self::EventTrends {
                update_interval,
                chart_type,
                device_types,
                event_types,
            } => {
                f.update_interval = Some(*update_interval);
                f.chart_type = Some(*chart_type);
                f.device_types = Some(device_types.clone());
                f.event_types = Some(event_types.clone());
            }
            Self::EventStatusByDeviceTypes {
                update_interval,
                device_types,
                event_types,
            } => {
                f.update_interval = Some(*update_interval);
                f.device_types = Some(device_types.clone());
                f.event_types = Some(event_types.clone());
            }
            Self::RecentEvents {
                update_interval,
                event_types,
                order,
                management_cd,
            } => {
                f.update_interval = Some(*update_interval);
                f.event_types = Some(event_types.clone());
                f.order = Some(*order);
                f.management_cd = *management_cd;
            }
            Self::DeviceRanking {
                update_interval,
                chart_type,
                rank_count,
                device_types,
                event_types,
            } => {
                f.update_interval = Some(*update_interval);
                f.chart_type = Some(*chart_type);
                f.rank_count = Some(*rank_count);
                f.device_types = Some(device_types.clone());
                f.event_types = Some(event_types.clone());
            }
            Self::DeviceResourceGauge {
                update_interval,
                selected_resource,
                selected_device,
            } => {
                f.update_interval = Some(*update_interval);
                f.selected_resource = Some(*selected_resource);
                f.selected_device = *selected_device;
            }
            Self::DeviceTypeSummary {
                update_interval,
                device_type,
            } => {
                f.update_interval = Some(*update_interval);
                f.device_type = Some(*device_type);
            }
            Self::MapView {
                update_interval,
                selected_map,
            } => {
                f.update_interval = Some(*update_interval);
                f.selected_map = *selected_map;
            }
            Self::PhoneStatus {
                update_interval,
                phone_types,
            } => {
                f.update_interval = Some(*update_interval);
                f.phone_types = Some(phone_types.clone());
            }
            Self::PhoneTypeSummary {
                update_interval,
                phone_type,
            } => {
                f.update_interval = Some(*update_interval);
                f.phone_type = Some(*phone_type);
            }
            Self::CallTraffic {
                update_interval,
                chart_type,
                call_types,
            } => {
                f.update_interval = Some(*update_interval);
                f.chart_type = Some(*chart_type);
                f.call_types = Some(call_types.clone());
            }
            Self::CallPeak {
                update_interval,
                order,
                call_peak_types,
            } => {
                f.update_interval = Some(*update_interval);
                f.order = Some(*order);
                f.call_peak_types = Some(call_peak_types.clone());
            }
        }
        f
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use strum::IntoEnumIterator;

    use crate::catalog::WidgetCatalog;
    use crate::model::options::{ChartType, UpdateInterval};
    use crate::model::selection::IdFilter;

    use super::*;

    #[test]
    fn event_trends_missing_event_types_is_rejected() {
        let fields = OptionFields {
            update_interval: Some(UpdateInterval::Sec30),
            chart_type: Some(ChartType::Line),
            device_types: Some(IdFilter::All),
            ..OptionFields::default()
        };
        let err = WidgetOptions::from_fields(WidgetType::EventTrends, &fields).unwrap_err();
        assert_eq!(err, vec![OptionField::EventTypes]);
    }

    #[test]
    fn event_trends_complete_bag_passes() {
        let fields = OptionFields {
            update_interval: Some(UpdateInterval::Sec30),
            chart_type: Some(ChartType::Line),
            device_types: Some(IdFilter::All),
            event_types: Some(IdFilter::Ids(vec![1, 2])),
            ..OptionFields::default()
        };
        let options = WidgetOptions::from_fields(WidgetType::EventTrends, &fields).unwrap();
        assert_eq!(options.widget_type(), WidgetType::EventTrends);
    }

    #[test]
    fn undeclared_fields_are_dropped() {
        // A map-view bag carrying ranking fields keeps only its own.
        let fields = OptionFields {
            update_interval: Some(UpdateInterval::Min5),
            rank_count: Some(10),
            chart_type: Some(ChartType::Pie),
            ..OptionFields::default()
        };
        let options = WidgetOptions::from_fields(WidgetType::MapView, &fields).unwrap();
        let projected = options.fields();
        assert_eq!(projected.update_interval, Some(UpdateInterval::Min5));
        assert_eq!(projected.rank_count, None);
        assert_eq!(projected.chart_type, None);
    }

    #[test]
    fn catalog_defaults_satisfy_every_schema() {
        for ty in WidgetType::iter() {
            let defaults = WidgetCatalog::default_options(ty);
            assert_eq!(defaults.widget_type(), ty);
            // Projecting and rebuilding must succeed for every type.
            let rebuilt = WidgetOptions::from_fields(ty, &defaults.fields()).unwrap();
            assert_eq!(rebuilt, defaults);
        }
    }

    #[test]
    fn fields_projection_round_trips() {
        for ty in WidgetType::iter() {
            let options = WidgetCatalog::default_options(ty);
            let rebuilt = WidgetOptions::from_fields(ty, &options.fields()).unwrap();
            assert_eq!(rebuilt, options);
        }
    }

    #[test]
    fn missing_everything_reports_all_required_fields() {
        for ty in WidgetType::iter() {
            let err = match WidgetOptions::from_fields(ty, &OptionFields::default()) {
                Err(missing) => missing,
                Ok(_) => {
                    assert!(
                        required_fields(ty).is_empty(),
                        "{ty} accepted an empty bag but requires fields"
                    );
                    continue;
                }
            };
            assert_eq!(err, required_fields(ty).to_vec());
        }
    }
}
