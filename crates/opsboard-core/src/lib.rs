//! Widget configuration codec and dashboard layout reconciliation for
//! opsboard.
//!
//! This crate owns the typed side of the dashboard: translating between
//! the backend's flattened widget-option records and a strongly-typed
//! option model, and keeping the client-held grid layout consistent
//! with the server-persisted widget list.
//!
//! - **[`WidgetCatalog`]** — static registry of widget definitions:
//!   grouping, default dimension, data-source endpoint, and a
//!   schema-complete default option set per type.
//!
//! - **Codec** ([`codec`]) — pure bidirectional transform between
//!   [`OptionFields`] and the backend's `WireWidgetConfig`. Sentinel
//!   literals ("all per category", "none chosen") become real variants
//!   at this boundary and nowhere else. Decoding is total and tolerant;
//!   encoding is a merge that never erases untouched sibling fields.
//!
//! - **Schema gate** ([`schema`]) — [`WidgetOptions`] is a tagged union
//!   with one variant per widget type; building one from flat fields
//!   enforces the per-type required-field list, so a widget's option bag
//!   is never observed missing a field its renderer needs.
//!
//! - **[`LayoutStore`]** — ordered, index-backed layout state; the
//!   single source of truth the UI renders from, mutated only through
//!   named methods that uphold the id and schema invariants.
//!
//! - **[`SyncEngine`]** — optimistic mutation + persistence: batch
//!   geometry sync, two-phase scoped option sync, provisional-id
//!   reconciliation, and tag-scoped query invalidation via
//!   [`InvalidationBus`].

pub mod catalog;
pub mod codec;
pub mod config;
pub mod error;
pub mod model;
pub mod schema;
pub mod store;
pub mod sync;

// ── Primary re-exports ──────────────────────────────────────────────
pub use catalog::{WidgetCatalog, WidgetDefinition};
pub use config::{DashboardConfig, TlsVerification};
pub use error::CoreError;
pub use store::LayoutStore;
pub use sync::{InvalidationBus, InvalidationStream, QueryTag, SyncEngine, SyncStatus};

// Re-export model types at the crate root for ergonomics.
pub use model::{
    ChartType,
    Dimension,
    FilterCategory,
    GridRect,
    IdFilter,
    LayoutItem,
    NONE_SELECTED,
    OptionField,
    OptionFields,
    ResourceKind,
    SingleSelect,
    SortOrder,
    UpdateInterval,
    WidgetData,
    WidgetGroup,
    WidgetOptions,
    WidgetType,
    is_provisional,
    provisional_id,
};
