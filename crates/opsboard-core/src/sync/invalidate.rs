// ── Query-tag invalidation ──
//
// Every query that reads per-widget data is tagged with that widget's
// id; list-level queries carry the whole-list tag. A successful sync
// invalidates exactly the affected tags -- never a global flush, which
// would force-refetch every rendered widget's live data on each drag.
//
// Consumers compare a tag's epoch against the one they cached at fetch
// time, and can subscribe to a change stream for push-based refresh.

use std::pin::Pin;
use std::task::{Context, Poll};

use dashmap::DashMap;
use futures_core::Stream;
use tokio::sync::watch;
use tokio_stream::wrappers::WatchStream;
use tracing::debug;

/// Cache tag for a data query.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum QueryTag {
    /// Per-widget data reads, keyed by the widget's id.
    Widget(String),
    /// The persisted widget list itself.
    WidgetList,
}

/// Tag-scoped invalidation registry with push notification.
pub struct InvalidationBus {
    /// Per-tag epoch, bumped when the tag is invalidated. A tag never
    /// invalidated is at epoch 0.
    epochs: DashMap<QueryTag, u64>,
    /// Global change counter for subscribers.
    notify: watch::Sender<u64>,
}

impl InvalidationBus {
    pub(crate) fn new() -> Self {
        let (notify, _) = watch::channel(0u64);
        Self {
            epochs: DashMap::new(),
            notify,
        }
    }

    /// Bump the epoch of each given tag and notify subscribers once.
    pub(crate) fn invalidate<I>(&self, tags: I)
    where
        I: IntoIterator<Item = QueryTag>,
    {
        let mut count = 0usize;
        for tag in tags {
            *self.epochs.entry(tag).or_insert(0) += 1;
            count += 1;
        }
        if count > 0 {
            debug!(count, "invalidated query tags");
            self.notify.send_modify(|v| *v += 1);
        }
    }

    /// Current epoch of a tag. Callers re-fetch when this is newer than
    /// the epoch they saw at query time.
    pub fn epoch(&self, tag: &QueryTag) -> u64 {
        self.epochs.get(tag).map_or(0, |e| *e)
    }

    /// Subscribe to invalidation rounds.
    pub fn subscribe(&self) -> InvalidationStream {
        InvalidationStream {
            inner: WatchStream::new(self.notify.subscribe()),
        }
    }
}

/// `Stream` of invalidation rounds, yielding the global change counter.
pub struct InvalidationStream {
    inner: WatchStream<u64>,
}

impl Stream for InvalidationStream {
    type Item = u64;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        Pin::new(&mut self.inner).poll_next(cx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn untouched_tags_start_at_zero() {
        let bus = InvalidationBus::new();
        assert_eq!(bus.epoch(&QueryTag::WidgetList), 0);
        assert_eq!(bus.epoch(&QueryTag::Widget("7".into())), 0);
    }

    #[test]
    fn invalidation_is_tag_scoped() {
        let bus = InvalidationBus::new();
        bus.invalidate([QueryTag::Widget("7".into()), QueryTag::WidgetList]);

        assert_eq!(bus.epoch(&QueryTag::Widget("7".into())), 1);
        assert_eq!(bus.epoch(&QueryTag::WidgetList), 1);
        // An unrelated widget's tag is untouched -- no global flush.
        assert_eq!(bus.epoch(&QueryTag::Widget("8".into())), 0);
    }

    #[test]
    fn empty_round_does_not_notify() {
        let bus = InvalidationBus::new();
        let receiver = bus.notify.subscribe();
        bus.invalidate(std::iter::empty());
        assert_eq!(*receiver.borrow(), 0);
    }
}
