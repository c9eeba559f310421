/*
[INPUT]:  HTTP configuration (base URL, API version, timeouts, credentials)
[OUTPUT]: Configured client that signs, sends and classifies API actions
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing dispatch behavior
*/

use chrono::Utc;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, RequestBuilder, Url};
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::time::Duration;
use tracing::{debug, warn};

use crate::http::error::status_code_of;
use crate::http::signature::RequestSigner;
use crate::http::{OnOfficeError, Result};
use crate::types::{ActionBatch, ActionRequest, ApiResponse, Envelope};

/// Base URL for the onOffice API; the version segment is appended per config
const DEFAULT_BASE_URL: &str = "https://api.onoffice.de/api";
const DEFAULT_API_VERSION: &str = "stable";
const HMAC_VERSION: &str = "2";

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
    pub api_version: String,
    pub base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            api_version: DEFAULT_API_VERSION.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl ClientConfig {
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    pub fn with_api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = version.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// `{base_url}/{api_version}/api.php`
    pub fn endpoint(&self) -> Result<Url> {
        let base = self.base_url.trim_end_matches('/');
        Ok(Url::parse(&format!("{base}/{}/api.php", self.api_version))?)
    }
}

/// API token and secret
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    token: String,
    secret: String,
}

impl Credentials {
    /// Both values must be non-empty
    pub fn new(token: impl Into<String>, secret: impl Into<String>) -> Result<Self> {
        let token = token.into();
        let secret = secret.into();
        if token.is_empty() {
            return Err(OnOfficeError::Config("API token must not be empty".to_string()));
        }
        if secret.is_empty() {
            return Err(OnOfficeError::Config("API secret must not be empty".to_string()));
        }
        Ok(Self { token, secret })
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn secret(&self) -> &str {
        &self.secret
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("token", &self.token)
            .field("secret", &"<redacted>")
            .finish()
    }
}

/// Main HTTP client for the onOffice API
#[derive(Debug)]
pub struct OnOfficeClient {
    http_client: Client,
    endpoint: Url,
    signer: RequestSigner,
    config: ClientConfig,
}

impl OnOfficeClient {
    /// Create a new client with default configuration
    pub fn new(token: impl Into<String>, secret: impl Into<String>) -> Result<Self> {
        Self::with_config(Credentials::new(token, secret)?, ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(credentials: Credentials, config: ClientConfig) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()
            .map_err(|e| OnOfficeError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http_client,
            endpoint: config.endpoint()?,
            signer: RequestSigner::new(credentials),
            config,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// URL every action is posted to
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub fn token(&self) -> &str {
        self.signer.token()
    }

    /// Build the signed envelope for one action at `timestamp`
    pub fn build_envelope(
        &self,
        resource_type: &str,
        action_id: &str,
        parameters: Value,
        timestamp: i64,
    ) -> Envelope {
        let hmac = self.signer.sign(timestamp, resource_type, action_id);

        Envelope {
            token: self.signer.token().to_string(),
            request: ActionBatch {
                actions: vec![ActionRequest {
                    action_id: action_id.to_string(),
                    resource_id: String::new(),
                    resource_type: resource_type.to_string(),
                    identifier: String::new(),
                    timestamp,
                    hmac,
                    hmac_version: HMAC_VERSION.to_string(),
                    parameters,
                }],
            },
        }
    }

    /// Sign and send one action, returning the body when `status.code` is 200
    pub async fn execute<P>(
        &self,
        resource_type: &str,
        action_id: &str,
        parameters: &P,
    ) -> Result<ApiResponse>
    where
        P: Serialize + ?Sized,
    {
        let parameters = serde_json::to_value(parameters)?;
        let timestamp = Utc::now().timestamp();
        let envelope = self.build_envelope(resource_type, action_id, parameters, timestamp);

        debug!(resource_type, action_id, timestamp, "dispatching action");

        let builder = self
            .http_client
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, "application/json")
            .json(&envelope);
        self.send_json(builder).await
    }

    /// Send a prepared request and classify the decoded body
    pub(crate) async fn send_json(&self, builder: RequestBuilder) -> Result<ApiResponse> {
        let response = builder.send().await?.error_for_status()?;
        let bytes = response.bytes().await?;
        parse_body(&bytes)
    }
}

fn parse_body(bytes: &[u8]) -> Result<ApiResponse> {
    let body: Value = serde_json::from_slice(bytes)
        .map_err(|e| OnOfficeError::InvalidResponse(format!("body is not JSON: {e}")))?;

    if status_code_of(&body) == Some(200) {
        return Ok(ApiResponse::new(body));
    }

    let err = OnOfficeError::from_status(body);
    warn!(code = ?err.status_code(), error = %err, "API returned error status");
    Err(err)
}
