// ── Sync engine ──
//
// Orchestrates the layout lifecycle: fetch + decode into the store,
// optimistic local mutation, encode + persist, and provisional-id
// reconciliation. Two flows:
//
// * Geometry/insertion sync -- the whole current layout is encoded and
//   sent as one batch whenever the grid changes. Items the server
//   already knows carry their seqNum (update in place); the rest are
//   creates. Whole-batch resend trades bandwidth for never tracking a
//   diff.
// * Option sync -- a scoped per-widget config update, two-phase: the
//   local store is patched and the scoped request fired (phase 1), then
//   on its resolution the broader layout save runs against the updated
//   snapshot (phase 2), so a later geometry sync never resends stale
//   options.
//
// All mutation entry points run on one logical flow at a time (UI event
// dispatch); the locks below are never held across an await. Ordering
// across awaited calls is NOT guaranteed, so an unresolved create acts
// as a barrier: operations touching its provisional id are queued and
// drained once the server has assigned the real id.

mod invalidate;

pub use invalidate::{InvalidationBus, InvalidationStream, QueryTag};

use std::collections::{HashMap, HashSet, VecDeque};
use std::str::FromStr;
use std::sync::{Arc, Mutex, MutexGuard};

use arc_swap::ArcSwap;
use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use opsboard_api::{
    DashboardClient, PersistedWidget, SaveLayoutEntry, WireDimension, WireLayoutItem,
    WireWidgetConfig, WireWidgetData,
};

use crate::catalog::WidgetCatalog;
use crate::codec;
use crate::config::DashboardConfig;
use crate::error::CoreError;
use crate::model::options::{OptionFields, WidgetOptions};
use crate::model::widget::{
    Dimension, GridRect, LayoutItem, WidgetData, WidgetGroup, WidgetType, is_provisional,
    provisional_id,
};
use crate::store::LayoutStore;

// ── Outcomes ────────────────────────────────────────────────────────

/// How a sync request resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncStatus {
    /// The operation was persisted.
    Synced,
    /// The operation was queued behind an unresolved create and will be
    /// replayed once the provisional id is reconciled.
    Deferred,
}

// ── Server snapshot ─────────────────────────────────────────────────

/// Last-known server state, keyed by stringified seqNum.
#[derive(Debug, Clone, Default)]
struct ServerSnapshot {
    entries: HashMap<String, SnapshotEntry>,
    fetched_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone)]
struct SnapshotEntry {
    seq_num: i64,
    wire_conf: WireWidgetConfig,
}

fn snapshot_from(records: &[PersistedWidget]) -> ServerSnapshot {
    let entries = records
        .iter()
        .map(|record| {
            let wire_conf = record
                .widget_conf
                .clone()
                .or_else(|| record.widget_info.data.options.clone())
                .unwrap_or_default();
            (
                record.seq_num.to_string(),
                SnapshotEntry {
                    seq_num: record.seq_num,
                    wire_conf,
                },
            )
        })
        .collect();
    ServerSnapshot {
        entries,
        fetched_at: Some(Utc::now()),
    }
}

// ── Pending-create barrier ──────────────────────────────────────────

#[derive(Debug, Default)]
struct PendingState {
    /// Provisional ids whose create is on the wire.
    in_flight: HashSet<String>,
    /// Operations queued behind the in-flight creates, in issue order.
    deferred: VecDeque<DeferredOp>,
}

#[derive(Debug)]
enum DeferredOp {
    LayoutSync,
    Configure { id: String, fields: OptionFields },
}

// ── SyncEngine ──────────────────────────────────────────────────────

/// Keeps the client-held layout consistent with the server-persisted
/// widget list. Cheaply cloneable; all clones share one store.
#[derive(Clone)]
pub struct SyncEngine {
    inner: Arc<EngineInner>,
}

struct EngineInner {
    client: DashboardClient,
    dashboard_id: String,
    /// The single source of truth the UI renders from. Lock is only ever
    /// held for synchronous mutation, never across an await.
    store: Mutex<LayoutStore>,
    snapshot: ArcSwap<ServerSnapshot>,
    pending: Mutex<PendingState>,
    invalidations: InvalidationBus,
}

impl SyncEngine {
    /// Build an engine (and its HTTP client) from configuration.
    pub fn new(config: &DashboardConfig) -> Result<Self, CoreError> {
        let client = DashboardClient::new(config.url.clone(), &config.transport())
            .map_err(|e| CoreError::Config {
                message: e.to_string(),
            })?;
        Ok(Self::with_client(client, config.dashboard_id.clone()))
    }

    /// Build an engine around an existing client.
    pub fn with_client(client: DashboardClient, dashboard_id: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(EngineInner {
                client,
                dashboard_id: dashboard_id.into(),
                store: Mutex::new(LayoutStore::new()),
                snapshot: ArcSwap::from_pointee(ServerSnapshot::default()),
                pending: Mutex::new(PendingState::default()),
                invalidations: InvalidationBus::new(),
            }),
        }
    }

    /// The invalidation bus consumers watch for selective refetches.
    pub fn invalidations(&self) -> &InvalidationBus {
        &self.inner.invalidations
    }

    /// How long ago the server snapshot was last fetched.
    pub fn data_age(&self) -> Option<chrono::Duration> {
        self.inner
            .snapshot
            .load()
            .fetched_at
            .map(|t| Utc::now() - t)
    }

    // ── Reads ────────────────────────────────────────────────────────

    /// Current layout, in display order.
    pub fn layout(&self) -> Vec<LayoutItem> {
        self.lock_store().items().to_vec()
    }

    pub fn item(&self, id: &str) -> Option<LayoutItem> {
        self.lock_store().get(id).cloned()
    }

    // ── Initial hydrate ──────────────────────────────────────────────

    /// Fetch the persisted widget list and hydrate the store from it.
    ///
    /// Malformed records are repaired with catalog defaults (or skipped
    /// when even the widget type is unrecognizable) -- a bad persisted
    /// record must not take the dashboard down.
    pub async fn load(&self) -> Result<usize, CoreError> {
        let records = self
            .inner
            .client
            .fetch_widgets(&self.inner.dashboard_id)
            .await?;
        let snapshot = snapshot_from(&records);
        let items: Vec<LayoutItem> = records.iter().filter_map(hydrate_item).collect();
        let count = items.len();

        self.lock_store().hydrate(items);
        self.inner.snapshot.store(Arc::new(snapshot));
        self.inner.invalidations.invalidate([QueryTag::WidgetList]);
        debug!(count, "layout hydrated from server");
        Ok(count)
    }

    // ── Local mutations ──────────────────────────────────────────────

    /// Drop a new widget onto the grid with catalog defaults and a
    /// provisional id. Call [`sync_layout`](Self::sync_layout) afterwards
    /// to persist the insertion.
    pub fn add_widget(&self, ty: WidgetType, rect: Option<GridRect>) -> LayoutItem {
        let def = WidgetCatalog::definition(ty);
        let id = provisional_id();
        let rect = rect.unwrap_or(GridRect {
            x: 0,
            y: 0,
            w: def.default_dimension.w,
            h: def.default_dimension.h,
        });
        let item = LayoutItem {
            id: id.clone(),
            rect,
            data: WidgetData {
                id,
                widget_type: ty,
                title: def.title.to_owned(),
                dimension: def.default_dimension,
                group: def.group,
                api_url: def.data_source.to_owned(),
                options: WidgetCatalog::default_options(ty),
            },
        };
        self.lock_store().insert(item.clone());
        debug!(id = %item.id, %ty, "widget added locally");
        item
    }

    /// Move or resize a widget locally. Persisted by the next
    /// [`sync_layout`](Self::sync_layout).
    pub fn update_geometry(&self, id: &str, rect: GridRect) -> Result<(), CoreError> {
        self.lock_store().upsert_geometry(id, rect)
    }

    /// Remove a widget locally. Persisted by the next
    /// [`sync_layout`](Self::sync_layout), since the batch replaces the
    /// server-side widget set.
    pub fn remove_widget(&self, id: &str) -> Result<LayoutItem, CoreError> {
        self.lock_store()
            .remove(id)
            .ok_or_else(|| CoreError::WidgetNotFound { id: id.to_owned() })
    }

    // ── Geometry/insertion sync ──────────────────────────────────────

    /// Encode the full current layout and persist it as one batch.
    ///
    /// Items present in the last server snapshot are sent with their
    /// seqNum (update in place); the rest are creates. When the batch
    /// contained creates, the persisted list is re-fetched afterwards to
    /// learn the assigned seqNums, and provisional ids are reconciled
    /// in store order against the fresh records in server order.
    pub async fn sync_layout(&self) -> Result<SyncStatus, CoreError> {
        {
            let mut pending = self.lock_pending();
            if !pending.in_flight.is_empty() {
                debug!("layout sync queued behind unresolved create");
                pending.deferred.push_back(DeferredOp::LayoutSync);
                return Ok(SyncStatus::Deferred);
            }
        }

        let snapshot = self.inner.snapshot.load_full();
        let mut creates: Vec<String> = Vec::new();
        let mut update_tags: Vec<QueryTag> = Vec::new();
        let entries: Vec<SaveLayoutEntry> = {
            let store = self.lock_store();
            store
                .items()
                .iter()
                .map(|item| {
                    let known = snapshot.entries.get(&item.id);
                    let existing = known.map(|e| e.wire_conf.clone()).unwrap_or_default();
                    let conf = codec::encode(&item.data.options.fields(), &existing);
                    let seq_num = known.map(|e| e.seq_num);
                    match seq_num {
                        Some(seq) => update_tags.push(QueryTag::Widget(seq.to_string())),
                        None => creates.push(item.id.clone()),
                    }
                    SaveLayoutEntry {
                        dashboard_id: self.inner.dashboard_id.clone(),
                        widget_id: item.data.widget_type.wire_code(),
                        widget_info: wire_item(item, conf),
                        seq_num,
                    }
                })
                .collect()
        };

        if !creates.is_empty() {
            self.lock_pending().in_flight.extend(creates.iter().cloned());
        }

        let saved = self
            .inner
            .client
            .save_layout(&self.inner.dashboard_id, &entries)
            .await
            .map_err(CoreError::from);

        let outcome = match saved {
            Ok(()) if creates.is_empty() => {
                // No new ids to learn; fold the confs we just sent into
                // the snapshot so future merges start from them. The
                // batch replaced the server-side set, so entries it no
                // longer carries are gone server-side too.
                let batch_seqs: HashSet<i64> =
                    entries.iter().filter_map(|e| e.seq_num).collect();
                self.inner.snapshot.rcu(|current| {
                    let mut next = ServerSnapshot::clone(current);
                    next.entries.retain(|_, e| batch_seqs.contains(&e.seq_num));
                    for entry in &entries {
                        let Some(seq) = entry.seq_num else { continue };
                        if let Some(slot) = next.entries.get_mut(&seq.to_string()) {
                            if let Some(conf) = &entry.widget_info.data.options {
                                slot.wire_conf = conf.clone();
                            }
                        }
                    }
                    next
                });
                Ok(update_tags)
            }
            Ok(()) => self.reconcile_creates(&snapshot, &creates, update_tags).await,
            Err(e) => Err(e),
        };

        self.lock_pending().in_flight.clear();

        match outcome {
            Ok(mut tags) => {
                tags.push(QueryTag::WidgetList);
                self.inner.invalidations.invalidate(tags);
                self.drain_deferred().await;
                Ok(SyncStatus::Synced)
            }
            // Deferred ops stay queued; the user's next edit re-triggers
            // a sync, which drains them on success. No automatic retry.
            Err(e) => Err(e),
        }
    }

    /// Learn server-assigned seqNums for a just-created batch.
    async fn reconcile_creates(
        &self,
        prior: &ServerSnapshot,
        creates: &[String],
        mut tags: Vec<QueryTag>,
    ) -> Result<Vec<QueryTag>, CoreError> {
        let records = self
            .inner
            .client
            .fetch_widgets(&self.inner.dashboard_id)
            .await?;
        let next = snapshot_from(&records);

        // Fresh seqNums (absent from the prior snapshot) in server order
        // pair with the provisional items in store order.
        let fresh: Vec<i64> = records
            .iter()
            .map(|r| r.seq_num)
            .filter(|seq| !prior.entries.contains_key(&seq.to_string()))
            .collect();
        if fresh.len() != creates.len() {
            warn!(
                expected = creates.len(),
                got = fresh.len(),
                "unexpected number of fresh records during reconciliation"
            );
        }

        let mut remap: HashMap<String, String> = HashMap::new();
        {
            let mut store = self.lock_store();
            for (provisional, seq) in creates.iter().zip(fresh.iter()) {
                let new_id = seq.to_string();
                debug!(%provisional, %new_id, "provisional id reconciled");
                store.reassign_id(provisional, &new_id);
                tags.push(QueryTag::Widget(new_id.clone()));
                remap.insert(provisional.clone(), new_id);
            }
        }

        // Deferred ops captured the provisional id; point them at the
        // server-assigned one before they replay.
        {
            let mut pending = self.lock_pending();
            for op in &mut pending.deferred {
                if let DeferredOp::Configure { id, .. } = op {
                    if let Some(new_id) = remap.get(id) {
                        id.clone_from(new_id);
                    }
                }
            }
        }

        self.inner.snapshot.store(Arc::new(next));
        Ok(tags)
    }

    // ── Option sync ──────────────────────────────────────────────────

    /// Commit a configuration change for one widget.
    ///
    /// The bag is schema-gated first: missing required fields reject the
    /// whole change before any state is touched, and the UI should
    /// re-prompt. On success the local store is patched immediately
    /// (optimistic -- a later transport failure does NOT roll it back),
    /// then the scoped update is persisted and, on its resolution, the
    /// broader layout save runs so geometry syncs see fresh options.
    pub async fn configure_widget(
        &self,
        id: &str,
        fields: OptionFields,
    ) -> Result<SyncStatus, CoreError> {
        let options = {
            let store = self.lock_store();
            let item = store
                .get(id)
                .ok_or_else(|| CoreError::WidgetNotFound { id: id.to_owned() })?;
            let ty = item.data.widget_type;
            WidgetOptions::from_fields(ty, &fields).map_err(|missing| {
                CoreError::ConfigRejected {
                    widget_type: ty,
                    missing,
                }
            })?
        };

        // Optimistic local commit; whichever call runs this last wins,
        // regardless of how the network round trips land.
        self.lock_store().upsert_options(id, options)?;

        if is_provisional(id) {
            debug!(id, "option sync queued until create resolves");
            self.lock_pending().deferred.push_back(DeferredOp::Configure {
                id: id.to_owned(),
                fields,
            });
            return Ok(SyncStatus::Deferred);
        }

        // Phase 1: scoped update against the last-known wire config.
        self.push_options(id, &fields).await?;
        // Phase 2: broader layout save from the now-updated snapshot.
        debug!(id, "option update persisted; running follow-up layout save");
        self.sync_layout().await?;
        Ok(SyncStatus::Synced)
    }

    async fn push_options(&self, id: &str, fields: &OptionFields) -> Result<(), CoreError> {
        let snapshot = self.inner.snapshot.load_full();
        let Some(entry) = snapshot.entries.get(id) else {
            return Err(CoreError::WidgetNotFound { id: id.to_owned() });
        };
        let seq_num = entry.seq_num;
        let merged = codec::encode(fields, &entry.wire_conf);

        self.inner
            .client
            .update_widget_conf(&self.inner.dashboard_id, seq_num, &merged)
            .await?;

        self.inner.snapshot.rcu(|current| {
            let mut next = ServerSnapshot::clone(current);
            if let Some(slot) = next.entries.get_mut(id) {
                slot.wire_conf = merged.clone();
            }
            next
        });
        self.inner
            .invalidations
            .invalidate([QueryTag::Widget(id.to_owned()), QueryTag::WidgetList]);
        Ok(())
    }

    // ── Deferred replay ──────────────────────────────────────────────

    /// Replay operations that were queued behind a create, in issue
    /// order. Failures are logged, not retried -- the optimistic local
    /// state already holds the intended values and the next sync carries
    /// them.
    async fn drain_deferred(&self) {
        loop {
            let op = {
                let mut pending = self.lock_pending();
                if !pending.in_flight.is_empty() {
                    return;
                }
                pending.deferred.pop_front()
            };
            let Some(op) = op else { return };
            match op {
                DeferredOp::LayoutSync => {
                    if let Err(e) = Box::pin(self.sync_layout()).await {
                        warn!(error = %e, "deferred layout sync failed");
                    }
                }
                DeferredOp::Configure { id, fields } => {
                    if let Err(e) = Box::pin(self.configure_widget(&id, fields)).await {
                        warn!(error = %e, id, "deferred option sync failed");
                    }
                }
            }
        }
    }

    // ── Lock helpers ─────────────────────────────────────────────────

    fn lock_store(&self) -> MutexGuard<'_, LayoutStore> {
        self.inner.store.lock().expect("layout store lock poisoned")
    }

    fn lock_pending(&self) -> MutexGuard<'_, PendingState> {
        self.inner.pending.lock().expect("pending state lock poisoned")
    }
}

// ── Wire translation ────────────────────────────────────────────────

/// Decode one persisted record into a layout item.
///
/// Performs the id denormalization the fetch contract requires: both the
/// grid key and the embedded `data.id` become the stringified seqNum.
/// Options decode from `widgetConf`, falling back to the copy embedded
/// in `widgetInfo`; records failing the schema gate are repaired from
/// catalog defaults. Only an unrecognizable widget type drops a record.
fn hydrate_item(record: &PersistedWidget) -> Option<LayoutItem> {
    let info = &record.widget_info;
    let ty = WidgetType::from_str(&info.data.widget_type)
        .ok()
        .or_else(|| WidgetType::from_wire_code(record.widget_id));
    let Some(ty) = ty else {
        warn!(
            seq_num = record.seq_num,
            widget_type = %info.data.widget_type,
            widget_id = record.widget_id,
            "skipping persisted widget of unknown type"
        );
        return None;
    };
    let def = WidgetCatalog::definition(ty);

    let wire_conf = record
        .widget_conf
        .clone()
        .or_else(|| info.data.options.clone())
        .unwrap_or_default();
    let mut fields = codec::decode(&wire_conf);
    let options = match WidgetOptions::from_fields(ty, &fields) {
        Ok(options) => options,
        Err(missing) => {
            warn!(
                seq_num = record.seq_num,
                %ty,
                missing = ?missing,
                "persisted widget missing required options; substituting defaults"
            );
            let defaults = WidgetCatalog::default_options(ty);
            fields.fill_missing(&defaults.fields());
            WidgetOptions::from_fields(ty, &fields).unwrap_or(defaults)
        }
    };

    let id = record.seq_num.to_string();
    let group = WidgetGroup::from_str(&info.data.group).unwrap_or(def.group);
    let title = if info.data.title.is_empty() {
        def.title.to_owned()
    } else {
        info.data.title.clone()
    };
    let api_url = record
        .action_url
        .clone()
        .unwrap_or_else(|| def.data_source.to_owned());

    Some(LayoutItem {
        id: id.clone(),
        rect: GridRect {
            x: info.x,
            y: info.y,
            w: info.w,
            h: info.h,
        },
        data: WidgetData {
            id,
            widget_type: ty,
            title,
            dimension: Dimension {
                w: info.data.dimension.w,
                h: info.data.dimension.h,
            },
            group,
            api_url,
            options,
        },
    })
}

/// Encode a layout item for the batch endpoint, embedding the merged
/// wire config so the persisted blob carries current options.
fn wire_item(item: &LayoutItem, conf: WireWidgetConfig) -> WireLayoutItem {
    WireLayoutItem {
        i: item.id.clone(),
        x: item.rect.x,
        y: item.rect.y,
        w: item.rect.w,
        h: item.rect.h,
        data: WireWidgetData {
            id: item.data.id.clone(),
            widget_type: item.data.widget_type.to_string(),
            title: item.data.title.clone(),
            dimension: WireDimension {
                w: item.data.dimension.w,
                h: item.data.dimension.h,
            },
            group: item.data.group.to_string(),
            api_url: item.data.api_url.clone(),
            options: Some(conf),
        },
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use crate::model::selection::IdFilter;

    use super::*;

    fn record(value: serde_json::Value) -> PersistedWidget {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn hydrate_denormalizes_both_ids() {
        let persisted = record(json!({
            "seqNum": 42,
            "widgetId": 301,
            "widgetConf": { "updtCycleCd": "3" },
            "widgetInfo": {
                "i": "stale", "x": 1, "y": 2, "w": 8, "h": 6,
                "data": {
                    "id": "also-stale",
                    "type": "mapView",
                    "title": "Facility Map",
                    "dimension": { "w": 8, "h": 6 },
                    "group": "map",
                    "apiUrl": "/api/widgets/map-view"
                }
            }
        }));
        let item = hydrate_item(&persisted).unwrap();
        assert_eq!(item.id, "42");
        assert_eq!(item.data.id, "42");
        assert_eq!(item.rect, GridRect { x: 1, y: 2, w: 8, h: 6 });
    }

    #[test]
    fn hydrate_repairs_incomplete_conf_with_defaults() {
        // Phone status without its required phoneTypeArr.
        let persisted = record(json!({
            "seqNum": 9,
            "widgetId": 401,
            "widgetConf": { "updtCycleCd": "1" },
            "widgetInfo": {
                "i": "9", "x": 0, "y": 0, "w": 4, "h": 3,
                "data": {
                    "id": "9",
                    "type": "phoneStatus",
                    "title": "Phone Status",
                    "dimension": { "w": 4, "h": 3 },
                    "group": "phone",
                    "apiUrl": "/api/widgets/phone-status"
                }
            }
        }));
        let item = hydrate_item(&persisted).unwrap();
        match item.data.options {
            WidgetOptions::PhoneStatus {
                update_interval,
                ref phone_types,
            } => {
                // The field that was present survives...
                assert_eq!(update_interval.wire_code(), 1);
                // ...and the missing one comes from catalog defaults.
                assert_eq!(phone_types, &IdFilter::All);
            }
            ref other => panic!("unexpected options: {other:?}"),
        }
    }

    #[test]
    fn hydrate_skips_unknown_widget_types() {
        let persisted = record(json!({
            "seqNum": 5,
            "widgetId": 999,
            "widgetInfo": {
                "i": "5", "x": 0, "y": 0, "w": 2, "h": 2,
                "data": {
                    "id": "5",
                    "type": "retiredWidget",
                    "title": "Old",
                    "dimension": { "w": 2, "h": 2 },
                    "group": "event",
                    "apiUrl": "/x"
                }
            }
        }));
        assert!(hydrate_item(&persisted).is_none());
    }

    #[test]
    fn hydrate_falls_back_to_embedded_options() {
        // No widgetConf at all; options live in the layout blob.
        let persisted = record(json!({
            "seqNum": 3,
            "widgetId": 102,
            "widgetInfo": {
                "i": "3", "x": 0, "y": 0, "w": 4, "h": 3,
                "data": {
                    "id": "3",
                    "type": "eventStatusByDeviceTypes",
                    "title": "Event Status by Device Type",
                    "dimension": { "w": 4, "h": 3 },
                    "group": "event",
                    "apiUrl": "/api/widgets/event-status-by-device-types",
                    "options": {
                        "updtCycleCd": "2",
                        "deviceKindSubArr": "1,2",
                        "eventLv": "0"
                    }
                }
            }
        }));
        let item = hydrate_item(&persisted).unwrap();
        match item.data.options {
            WidgetOptions::EventStatusByDeviceTypes {
                ref device_types,
                ref event_types,
                ..
            } => {
                assert_eq!(device_types, &IdFilter::Ids(vec![1, 2]));
                // The irregular "0" literal decodes to the sentinel.
                assert_eq!(event_types, &IdFilter::All);
            }
            ref other => panic!("unexpected options: {other:?}"),
        }
    }

    #[test]
    fn wire_item_embeds_current_state() {
        let def = WidgetCatalog::definition(WidgetType::CallPeak);
        let item = LayoutItem {
            id: "11".into(),
            rect: GridRect { x: 4, y: 0, w: 4, h: 4 },
            data: WidgetData {
                id: "11".into(),
                widget_type: WidgetType::CallPeak,
                title: def.title.to_owned(),
                dimension: def.default_dimension,
                group: def.group,
                api_url: def.data_source.to_owned(),
                options: WidgetCatalog::default_options(WidgetType::CallPeak),
            },
        };
        let conf = codec::encode(&item.data.options.fields(), &WireWidgetConfig::default());
        let wire = wire_item(&item, conf);
        assert_eq!(wire.i, "11");
        assert_eq!(wire.data.widget_type, "callPeak");
        assert_eq!(wire.data.group, "call");
        let options = wire.data.options.unwrap();
        assert_eq!(options.call_peak_type_arr.as_deref(), Some("1,2,3"));
    }
}
