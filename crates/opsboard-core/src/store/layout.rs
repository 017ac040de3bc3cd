// ── Layout store ──
//
// Ordered collection of layout items plus an id -> position index for
// O(1) lookup during sync. This is the single source of truth the UI
// renders from; the sync engine requests mutations but never holds its
// own copy. Every mutation goes through a named method so the two
// store-wide invariants hold at one choke point: `item.id == data.id`,
// and `data.options` always matches the variant for `data.widget_type`.

use std::collections::HashMap;

use tracing::warn;

use crate::error::CoreError;
use crate::model::options::WidgetOptions;
use crate::model::widget::{GridRect, LayoutItem};

/// In-memory, ordered layout state.
#[derive(Debug, Default)]
pub struct LayoutStore {
    items: Vec<LayoutItem>,
    /// Reverse index: item id -> position in `items`.
    index: HashMap<String, usize>,
}

impl LayoutStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole collection. Used once after the initial fetch.
    ///
    /// Re-establishes the id/data.id invariant on every item in case the
    /// caller assembled them from separately-decoded pieces.
    pub fn hydrate(&mut self, items: Vec<LayoutItem>) {
        self.items = items;
        for item in &mut self.items {
            item.data.id.clone_from(&item.id);
        }
        self.rebuild_index();
    }

    /// Append a new item. The caller supplies a unique id (typically a
    /// provisional one from [`crate::model::provisional_id`]).
    pub fn insert(&mut self, mut item: LayoutItem) {
        item.data.id.clone_from(&item.id);
        self.index.insert(item.id.clone(), self.items.len());
        self.items.push(item);
    }

    /// Pure geometry change; does not touch `data`.
    pub fn upsert_geometry(&mut self, id: &str, rect: GridRect) -> Result<(), CoreError> {
        let position = self.position(id)?;
        self.items[position].rect = rect;
        Ok(())
    }

    /// Replace a widget's options, keeping the option/type invariant.
    ///
    /// A rejected mutation leaves the store unchanged.
    pub fn upsert_options(&mut self, id: &str, options: WidgetOptions) -> Result<(), CoreError> {
        let position = self.position(id)?;
        let expected = self.items[position].data.widget_type;
        let got = options.widget_type();
        if got != expected {
            return Err(CoreError::OptionsMismatch { expected, got });
        }
        self.items[position].data.options = options;
        Ok(())
    }

    /// Remove an item, returning it if present.
    pub fn remove(&mut self, id: &str) -> Option<LayoutItem> {
        let position = self.index.remove(id)?;
        let removed = self.items.remove(position);
        // Positions after the removal point all shifted down.
        self.rebuild_index();
        Some(removed)
    }

    /// Swap a provisional id for its server-assigned one.
    ///
    /// Item order is preserved and the index is updated in the same call,
    /// so there is no window where both ids resolve or neither does.
    /// Idempotent when `old_id == new_id` (re-saving an already-persisted
    /// item); a no-op with a warning when `old_id` is unknown (duplicate
    /// or late server responses).
    pub fn reassign_id(&mut self, old_id: &str, new_id: &str) -> bool {
        if old_id == new_id {
            return self.index.contains_key(old_id);
        }
        let Some(position) = self.index.remove(old_id) else {
            warn!(old_id, new_id, "reassign for unknown id ignored");
            return false;
        };
        let item = &mut self.items[position];
        item.id = new_id.to_owned();
        item.data.id = new_id.to_owned();
        self.index.insert(new_id.to_owned(), position);
        true
    }

    // ── Reads ────────────────────────────────────────────────────────

    pub fn get(&self, id: &str) -> Option<&LayoutItem> {
        self.index.get(id).map(|&position| &self.items[position])
    }

    /// All items in display order.
    pub fn items(&self) -> &[LayoutItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    // ── Private helpers ──────────────────────────────────────────────

    fn position(&self, id: &str) -> Result<usize, CoreError> {
        self.index
            .get(id)
            .copied()
            .ok_or_else(|| CoreError::WidgetNotFound { id: id.to_owned() })
    }

    fn rebuild_index(&mut self) {
        self.index = self
            .items
            .iter()
            .enumerate()
            .map(|(position, item)| (item.id.clone(), position))
            .collect();
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use crate::catalog::WidgetCatalog;
    use crate::model::options::{ChartType, UpdateInterval, WidgetOptions};
    use crate::model::selection::IdFilter;
    use crate::model::widget::{LayoutItem, WidgetData, WidgetType, provisional_id};

    use super::*;

    fn item(id: &str, ty: WidgetType) -> LayoutItem {
        let def = WidgetCatalog::definition(ty);
        LayoutItem {
            id: id.to_owned(),
            rect: GridRect {
                x: 0,
                y: 0,
                w: def.default_dimension.w,
                h: def.default_dimension.h,
            },
            data: WidgetData {
                id: id.to_owned(),
                widget_type: ty,
                title: def.title.to_owned(),
                dimension: def.default_dimension,
                group: def.group,
                api_url: def.data_source.to_owned(),
                options: WidgetCatalog::default_options(ty),
            },
        }
    }

    #[test]
    fn hydrate_repairs_embedded_ids() {
        let mut stale = item("7", WidgetType::EventTrends);
        stale.data.id = "out-of-date".into();

        let mut store = LayoutStore::new();
        store.hydrate(vec![stale]);

        assert_eq!(store.get("7").unwrap().data.id, "7");
    }

    #[test]
    fn reassign_moves_lookup_and_preserves_order() {
        let provisional = provisional_id();
        let mut store = LayoutStore::new();
        store.insert(item("1", WidgetType::MapView));
        store.insert(item(&provisional, WidgetType::EventTrends));
        store.insert(item("3", WidgetType::PhoneStatus));

        assert!(store.reassign_id(&provisional, "42"));

        assert!(store.get(&provisional).is_none());
        let reassigned = store.get("42").unwrap();
        assert_eq!(reassigned.id, "42");
        assert_eq!(reassigned.data.id, "42");
        let order: Vec<&str> = store.items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(order, vec!["1", "42", "3"]);
    }

    #[test]
    fn reassign_is_idempotent_for_equal_ids() {
        let mut store = LayoutStore::new();
        store.insert(item("5", WidgetType::CallTraffic));
        assert!(store.reassign_id("5", "5"));
        assert_eq!(store.get("5").unwrap().id, "5");
    }

    #[test]
    fn reassign_for_unknown_id_is_a_noop() {
        let mut store = LayoutStore::new();
        store.insert(item("5", WidgetType::CallTraffic));
        assert!(!store.reassign_id("nope", "9"));
        assert_eq!(store.len(), 1);
        assert!(store.get("9").is_none());
    }

    #[test]
    fn upsert_geometry_leaves_data_alone() {
        let mut store = LayoutStore::new();
        store.insert(item("1", WidgetType::EventTrends));
        let before = store.get("1").unwrap().data.clone();

        store
            .upsert_geometry("1", GridRect { x: 2, y: 3, w: 4, h: 5 })
            .unwrap();

        let after = store.get("1").unwrap();
        assert_eq!(after.rect, GridRect { x: 2, y: 3, w: 4, h: 5 });
        assert_eq!(after.data, before);
    }

    #[test]
    fn upsert_options_rejects_mismatched_variant() {
        let mut store = LayoutStore::new();
        store.insert(item("1", WidgetType::EventTrends));
        let before = store.get("1").unwrap().clone();

        let wrong = WidgetCatalog::default_options(WidgetType::MapView);
        let err = store.upsert_options("1", wrong).unwrap_err();

        assert!(matches!(err, CoreError::OptionsMismatch { .. }));
        // Rejected mutation leaves the store unchanged.
        assert_eq!(store.get("1").unwrap(), &before);
    }

    #[test]
    fn upsert_options_replaces_in_place() {
        let mut store = LayoutStore::new();
        store.insert(item("1", WidgetType::EventTrends));

        let updated = WidgetOptions::EventTrends {
            update_interval: UpdateInterval::Min10,
            chart_type: ChartType::Area,
            device_types: IdFilter::Ids(vec![2]),
            event_types: IdFilter::All,
        };
        store.upsert_options("1", updated.clone()).unwrap();

        assert_eq!(store.get("1").unwrap().data.options, updated);
    }

    #[test]
    fn remove_reindexes_later_items() {
        let mut store = LayoutStore::new();
        store.insert(item("1", WidgetType::MapView));
        store.insert(item("2", WidgetType::EventTrends));
        store.insert(item("3", WidgetType::PhoneStatus));

        let removed = store.remove("2").unwrap();
        assert_eq!(removed.id, "2");

        assert_eq!(store.len(), 2);
        assert_eq!(store.get("3").unwrap().id, "3");
        let order: Vec<&str> = store.items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(order, vec!["1", "3"]);
    }

    #[test]
    fn missing_widget_errors() {
        let mut store = LayoutStore::new();
        let err = store
            .upsert_geometry("ghost", GridRect { x: 0, y: 0, w: 1, h: 1 })
            .unwrap_err();
        assert!(matches!(err, CoreError::WidgetNotFound { .. }));
    }
}
