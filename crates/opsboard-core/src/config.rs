// ── Engine configuration ──

use std::path::PathBuf;
use std::time::Duration;

use secrecy::SecretString;
use url::Url;

use opsboard_api::{TlsMode, TransportConfig};

use crate::error::CoreError;

/// TLS verification mode for the backend connection.
#[derive(Debug, Clone, Default)]
pub enum TlsVerification {
    /// Use the system certificate store.
    #[default]
    System,
    /// Trust a custom CA certificate (PEM file).
    CustomCa(PathBuf),
    /// Accept any certificate (self-signed on-prem backends).
    AcceptInvalid,
}

/// Configuration for a [`crate::sync::SyncEngine`].
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// Backend root URL (e.g. `https://ops.example.com`).
    pub url: Url,
    /// Dashboard whose widget set this engine owns.
    pub dashboard_id: String,
    /// Per-request timeout.
    pub timeout: Duration,
    pub tls: TlsVerification,
    /// Session token for the backend, if the deployment requires one.
    /// Obtaining it is outside this crate's scope.
    pub session_token: Option<SecretString>,
}

impl DashboardConfig {
    /// Create a config with defaults for everything but the URL and
    /// dashboard id.
    pub fn new(url: impl AsRef<str>, dashboard_id: impl Into<String>) -> Result<Self, CoreError> {
        let url = Url::parse(url.as_ref()).map_err(|e| CoreError::Config {
            message: format!("invalid backend URL: {e}"),
        })?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(CoreError::Config {
                message: format!("unsupported URL scheme: {}", url.scheme()),
            });
        }
        Ok(Self {
            url,
            dashboard_id: dashboard_id.into(),
            timeout: Duration::from_secs(30),
            tls: TlsVerification::default(),
            session_token: None,
        })
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_tls(mut self, tls: TlsVerification) -> Self {
        self.tls = tls;
        self
    }

    pub fn with_session_token(mut self, token: SecretString) -> Self {
        self.session_token = Some(token);
        self
    }

    /// Translate into the API crate's transport settings.
    pub(crate) fn transport(&self) -> TransportConfig {
        TransportConfig {
            tls: match &self.tls {
                TlsVerification::System => TlsMode::System,
                TlsVerification::CustomCa(path) => TlsMode::CustomCa(path.clone()),
                TlsVerification::AcceptInvalid => TlsMode::DangerAcceptInvalid,
            },
            timeout: self.timeout,
            cookie_jar: None,
            session_token: self.session_token.clone(),
        }
    }
}
