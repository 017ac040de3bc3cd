//! Async HTTP client for the opsboard dashboard backend.
//!
//! This crate owns the wire-format types and the raw transport for the
//! widget-persistence endpoints:
//!
//! - **[`DashboardClient`]** — envelope-unwrapping HTTP client for the
//!   three widget endpoints (fetch list, batch layout save, scoped
//!   config update).
//! - **Wire types** ([`wire`]) — `WireWidgetConfig` (the flattened,
//!   comma-joined option record the backend stores), `PersistedWidget`,
//!   and the layout-item blobs exchanged with the backend.
//! - **[`TransportConfig`]** — shared TLS / timeout / session-token
//!   settings for building `reqwest` clients.
//!
//! Nothing in this crate interprets option values. Decoding the wire
//! strings into typed sentinels is the job of `opsboard-core`'s codec;
//! this crate ships them verbatim.

pub mod client;
pub mod error;
pub mod transport;
pub mod wire;

pub use client::DashboardClient;
pub use error::Error;
pub use transport::{TlsMode, TransportConfig};
pub use wire::{
    Envelope, PersistedWidget, ResultMeta, SaveLayoutEntry, WireDimension, WireLayoutItem,
    WireWidgetConfig, WireWidgetData,
};
