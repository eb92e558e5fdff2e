use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};

const USER_AGENT: &str = concat!("NoteFlow/", env!("CARGO_PKG_VERSION"));

/// Raised when no response could be obtained at all
#[derive(Debug, Clone, PartialEq)]
pub struct TransportError(pub String);

impl std::fmt::Display for TransportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Network error: {}", self.0)
    }
}

impl std::error::Error for TransportError {}

/// Status and raw body of a completed request
#[derive(Debug, Clone, PartialEq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl TransportResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Network seam of the auth flow
#[async_trait]
pub trait Transport: Send + Sync {
    /// POST `body` as JSON to `path`, relative to the backend root
    async fn post_json(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> Result<TransportResponse, TransportError>;
}

/// reqwest-backed transport for a NoteFlow server
pub struct HttpTransport {
    base_url: String,
    client: reqwest::Client,
}

impl HttpTransport {
    /// Create a transport for the server at `base_url`.
    ///
    /// The URL must be an absolute `http` or `https` URL with a host. Only the
    /// connect phase is bounded; the request itself waits as long as the
    /// server takes.
    pub fn new(base_url: impl Into<String>) -> Result<Self, TransportError> {
        let base_url = base_url.into();
        let parsed = reqwest::Url::parse(&base_url)
            .map_err(|e| TransportError(format!("Invalid server URL '{}': {}", base_url, e)))?;
        // "localhost:10106" parses with "localhost" as the scheme
        if !matches!(parsed.scheme(), "http" | "https") || !parsed.has_host() {
            return Err(TransportError(format!(
                "Invalid server URL '{}': expected http:// or https://",
                base_url
            )));
        }

        let client = reqwest::Client::builder()
            .connect_timeout(std::time::Duration::from_secs(10))
            .tcp_keepalive(std::time::Duration::from_secs(30))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| TransportError(format!("Client build failed: {}", e)))?;

        Ok(Self { base_url, client })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post_json(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> Result<TransportResponse, TransportError> {
        let url = self.url(path);
        log::debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .json(body)
            .send()
            .await
            .map_err(|e| TransportError(format!("Request failed: {}", e)))?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| TransportError(format!("Reading response failed: {}", e)))?;

        log::debug!("POST {} -> {} ({} bytes)", url, status, body.len());
        Ok(TransportResponse {
            status,
            body: body.to_vec(),
        })
    }
}
