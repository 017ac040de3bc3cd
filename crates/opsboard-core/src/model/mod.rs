//! Canonical domain types for the dashboard core.

pub mod options;
pub mod selection;
pub mod widget;

pub use options::{
    ChartType, OptionField, OptionFields, ResourceKind, SortOrder, UpdateInterval, WidgetOptions,
};
pub use selection::{FilterCategory, IdFilter, NONE_SELECTED, SingleSelect};
pub use widget::{
    Dimension, GridRect, LayoutItem, WidgetData, WidgetGroup, WidgetType, is_provisional,
    provisional_id,
};
