//! High-level asynchronous Pterodactyl application-API client.

use crate::{
    Error, SecretString, api,
    transport::{Request, Response},
    util::url::{endpoint_url, normalize_base_url},
};
use http::{HeaderMap, HeaderValue, header};
use serde::de::DeserializeOwned;
use std::{sync::Arc, time::Duration};
use url::Url;

#[cfg(feature = "rustls")]
fn ensure_rustls_provider() {
    static ONCE: std::sync::Once = std::sync::Once::new();
    ONCE.call_once(|| {
        let _ = rustls::crypto::ring::default_provider().install_default();
    });
}

#[cfg(not(feature = "rustls"))]
fn ensure_rustls_provider() {}

const DEFAULT_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Configures and constructs [`Client`].
pub struct ClientBuilder {
    base_url: Url,
    api_key: SecretString,
    user_agent: String,
    insecure: bool,
    timeout: Duration,
    connect_timeout: Duration,
    no_proxy: bool,
}

impl ClientBuilder {
    fn try_new(base: impl AsRef<str>, api_key: impl Into<SecretString>) -> Result<Self, Error> {
        let base_url = normalize_base_url(base.as_ref())?;
        Ok(Self {
            base_url,
            api_key: api_key.into(),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
            insecure: false,
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            no_proxy: false,
        })
    }

    /// Override the default `User-Agent` header.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = ua.into();
        self
    }

    /// Adjust the per-request timeout.
    pub fn timeout(mut self, value: Duration) -> Self {
        self.timeout = value;
        self
    }

    /// Adjust the connection establishment timeout.
    pub fn connect_timeout(mut self, value: Duration) -> Self {
        self.connect_timeout = value;
        self
    }

    /// Accept invalid TLS certificates (**dangerous**).
    pub fn danger_accept_invalid_certs(mut self, yes: bool) -> Self {
        self.insecure = yes;
        self
    }

    /// Ignore system proxy environment variables.
    pub fn no_system_proxy(mut self) -> Self {
        self.no_proxy = true;
        self
    }

    /// Finalise configuration and build the client.
    pub fn build(self) -> Result<Client, Error> {
        ensure_rustls_provider();

        let mut builder = reqwest::Client::builder()
            .danger_accept_invalid_certs(self.insecure)
            .user_agent(&self.user_agent)
            .connect_timeout(self.connect_timeout)
            .timeout(self.timeout);

        if self.no_proxy {
            builder = builder.no_proxy();
        }

        let http = builder.build().map_err(|err| Error::InvalidConfig {
            message: "failed to build HTTP client".into(),
            source: Some(Box::new(err)),
        })?;

        Ok(Client {
            inner: Arc::new(Inner {
                base: self.base_url,
                api_key: self.api_key,
                http,
            }),
        })
    }
}

/// Shared handle to the panel; cheap to clone.
#[derive(Clone)]
pub struct Client {
    inner: Arc<Inner>,
}

struct Inner {
    base: Url,
    api_key: SecretString,
    http: reqwest::Client,
}

impl Client {
    pub fn builder(
        base: impl AsRef<str>,
        api_key: impl Into<SecretString>,
    ) -> Result<ClientBuilder, Error> {
        ClientBuilder::try_new(base, api_key)
    }

    /// Quick path: all default settings.
    pub fn new(base: impl AsRef<str>, api_key: impl Into<SecretString>) -> Result<Self, Error> {
        Self::builder(base, api_key)?.build()
    }

    #[must_use]
    pub fn users(&self) -> api::UsersService {
        api::UsersService::new(self.clone())
    }

    #[must_use]
    pub fn nodes(&self) -> api::NodesService {
        api::NodesService::new(self.clone())
    }

    #[must_use]
    pub fn locations(&self) -> api::LocationsService {
        api::LocationsService::new(self.clone())
    }

    #[must_use]
    pub fn servers(&self) -> api::ServersService {
        api::ServersService::new(self.clone())
    }

    #[must_use]
    pub fn allocations(&self) -> api::AllocationsService {
        api::AllocationsService::new(self.clone())
    }

    pub(crate) async fn send_json<T: DeserializeOwned + Send + 'static>(
        &self,
        req: Request,
    ) -> Result<T, Error> {
        let resp = self.execute_request(&req).await?;
        Ok(resp.json()?)
    }

    /// Execute a request whose response body is irrelevant (204 No Content
    /// endpoints); the body is never JSON-parsed.
    pub(crate) async fn send_unit(&self, req: Request) -> Result<(), Error> {
        let _ = self.execute_request(&req).await?;
        Ok(())
    }

    async fn execute_request(&self, req: &Request) -> Result<Response, Error> {
        let url = endpoint_url(&self.inner.base, req.segments.iter().map(|s| s.as_str()))?;

        let mut headers = HeaderMap::new();
        headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
        self.inner.api_key.apply(&mut headers)?;

        let mut builder = self
            .inner
            .http
            .request(req.method.clone(), url.clone())
            .query(&req.query)
            .headers(headers);

        if let Some(body) = &req.body {
            builder = builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(body.clone());
        }

        let resp = builder.send().await.map_err(|e| Error::Transport {
            source: e,
            method: req.method.clone(),
            url: url.clone(),
        })?;

        let status = resp.status();
        let resp_headers = resp.headers().clone();
        let body = resp.bytes().await.map_err(|e| Error::Transport {
            source: e,
            method: req.method.clone(),
            url: url.clone(),
        })?;

        #[cfg(feature = "tracing")]
        tracing::debug!(
            http.method = %req.method,
            http.path = url.path(),
            http.status = status.as_u16(),
            "panel request"
        );

        if !status.is_success() {
            return Err(Error::Http {
                status,
                method: req.method.clone(),
                url,
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }

        Ok(Response {
            status,
            headers: resp_headers,
            body: body.to_vec(),
        })
    }
}
