// ── Core error types ──
//
// User-facing errors from opsboard-core. Transport details never leak
// through: every API-layer failure collapses into `SyncFailed`, because
// by the time a persistence call fails the optimistic local mutation is
// already applied and the caller's only move is to surface the error.
// Tolerated decode failures and queued-behind-create operations are not
// errors at all -- the former is a logged default substitution, the
// latter a deferred op.

use thiserror::Error;

use crate::model::options::OptionField;
use crate::model::widget::WidgetType;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A user-initiated configuration change is missing required fields.
    /// Rejected before any network call; the originating form should
    /// re-prompt.
    #[error(
        "configuration rejected for {widget_type}: missing {}",
        .missing.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
    )]
    ConfigRejected {
        widget_type: WidgetType,
        missing: Vec<OptionField>,
    },

    /// An option bag built for one widget type was applied to another.
    #[error("options for {got} cannot be applied to a {expected} widget")]
    OptionsMismatch {
        expected: WidgetType,
        got: WidgetType,
    },

    #[error("widget not found: {id}")]
    WidgetNotFound { id: String },

    /// Persistence failed. The optimistic local mutation stays applied;
    /// the next successful sync overwrites server state with it.
    #[error("sync failed: {message}")]
    SyncFailed { message: String },

    #[error("configuration error: {message}")]
    Config { message: String },
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<opsboard_api::Error> for CoreError {
    fn from(err: opsboard_api::Error) -> Self {
        CoreError::SyncFailed {
            message: err.to_string(),
        }
    }
}
