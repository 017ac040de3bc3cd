// Dashboard backend HTTP client
//
// Wraps `reqwest::Client` with opsboard URL construction and envelope
// unwrapping. All methods return unwrapped `data` payloads -- the envelope
// is stripped before the caller sees it.

use serde::de::DeserializeOwned;
use tracing::{debug, trace};
use url::Url;

use crate::error::Error;
use crate::transport::TransportConfig;
use crate::wire::{Envelope, PersistedWidget, SaveLayoutEntry, WireWidgetConfig};

/// HTTP client for the dashboard widget-persistence endpoints.
pub struct DashboardClient {
    http: reqwest::Client,
    base_url: Url,
}

impl DashboardClient {
    /// Create a new client from a `TransportConfig`. The `base_url` should
    /// be the backend root (e.g. `https://ops.example.com`).
    pub fn new(base_url: Url, transport: &TransportConfig) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Ok(Self { http, base_url })
    }

    /// Create a client with a pre-built `reqwest::Client`.
    ///
    /// Use this when a shared client (with its session state) already exists.
    pub fn with_client(http: reqwest::Client, base_url: Url) -> Self {
        Self { http, base_url }
    }

    /// The backend base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // ── Endpoints ────────────────────────────────────────────────────

    /// Fetch the persisted widget list for a dashboard, in display order.
    pub async fn fetch_widgets(&self, dashboard_id: &str) -> Result<Vec<PersistedWidget>, Error> {
        let url = self.api_url(&format!("dashboards/{dashboard_id}/widgets"))?;
        debug!(%dashboard_id, "fetching persisted widgets");
        let widgets: Vec<PersistedWidget> = self.get(url).await?;
        trace!(count = widgets.len(), "persisted widgets received");
        Ok(widgets)
    }

    /// Persist the full layout as one batch. Entries without a `seq_num`
    /// are created; the rest are updated in place. The batch replaces the
    /// dashboard's widget set, so omitted widgets are deleted.
    pub async fn save_layout(
        &self,
        dashboard_id: &str,
        entries: &[SaveLayoutEntry],
    ) -> Result<(), Error> {
        let url = self.api_url(&format!("dashboards/{dashboard_id}/widgets"))?;
        debug!(%dashboard_id, count = entries.len(), "saving layout batch");
        self.send_expecting_empty(self.http.post(url).json(entries))
            .await
    }

    /// Persist a scoped option update for one widget. `conf` is merged by
    /// the backend into the stored record; fields absent from it are left
    /// untouched server-side.
    pub async fn update_widget_conf(
        &self,
        dashboard_id: &str,
        seq_num: i64,
        conf: &WireWidgetConfig,
    ) -> Result<(), Error> {
        let url = self.api_url(&format!("dashboards/{dashboard_id}/widgets/{seq_num}/conf"))?;
        debug!(%dashboard_id, seq_num, "updating widget configuration");
        self.send_expecting_empty(self.http.put(url).json(conf))
            .await
    }

    // ── Transport helpers ────────────────────────────────────────────

    fn api_url(&self, path: &str) -> Result<Url, Error> {
        let base = self.base_url.as_str().trim_end_matches('/');
        Ok(Url::parse(&format!("{base}/api/{path}"))?)
    }

    async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<T, Error> {
        let response = self.http.get(url).send().await?;
        Self::unwrap_envelope(response).await
    }

    /// Issue a mutating request whose envelope carries no payload.
    async fn send_expecting_empty(&self, request: reqwest::RequestBuilder) -> Result<(), Error> {
        let response = request.send().await?;
        let _: Option<serde_json::Value> = Self::unwrap_envelope_opt(response).await?;
        Ok(())
    }

    async fn unwrap_envelope<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, Error> {
        let data: Option<T> = Self::unwrap_envelope_opt(response).await?;
        data.ok_or_else(|| Error::Deserialization {
            message: "envelope carried no data".into(),
            body: String::new(),
        })
    }

    async fn unwrap_envelope_opt<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<Option<T>, Error> {
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(Error::Api {
                message: format!("HTTP {status}"),
                code: None,
                status: Some(status.as_u16()),
            });
        }

        let envelope: Envelope<T> = serde_json::from_str(&body).map_err(|e| {
            Error::Deserialization {
                message: e.to_string(),
                body: body.clone(),
            }
        })?;

        if !envelope.result.is_success() {
            return Err(Error::Api {
                message: envelope
                    .result
                    .message
                    .unwrap_or_else(|| envelope.result.code.clone()),
                code: Some(envelope.result.code),
                status: Some(status.as_u16()),
            });
        }

        Ok(envelope.data)
    }
}
