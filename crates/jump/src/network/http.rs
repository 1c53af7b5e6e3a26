//! reqwest-backed [`DataFetcher`] for the JUMP listing API.

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use reqwest::Url;
use reqwest::header::{ACCEPT, HeaderMap, HeaderName, HeaderValue, REFERER, USER_AGENT};
use tracing::{debug, warn};

use crate::identifiers::NetworkIdentifier;
use crate::models::types::{JumpError, Resource, Result};
use crate::network::traits::DataFetcher;

pub const DEFAULT_BASE_URL: &str = "https://app.jumpbikes.com";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);
/// Large enough to return a whole network in one page
pub const DEFAULT_PAGE_SIZE: u32 = 999;

// The API only answers requests that look like they come from the map page.
const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_14_6) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/76.0.3809.100 Safari/537.36";
const ACCEPT_JSON: &str = "application/json, text/javascript, */*; q=0.01";
const SEC_FETCH_MODE: HeaderName = HeaderName::from_static("sec-fetch-mode");

/// Everything needed to talk to one JUMP network
#[derive(Clone, Debug)]
pub struct JumpConfig {
    pub base_url: String,
    pub network_id: NetworkIdentifier,
    /// Client-wide request timeout
    pub timeout: Duration,
    pub page_size: u32,
}

impl JumpConfig {
    pub fn new(network_id: impl Into<NetworkIdentifier>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            network_id: network_id.into(),
            timeout: DEFAULT_TIMEOUT,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }
}

pub struct HttpFetcher {
    inner: reqwest::Client,
    base: Url,
    network_id: NetworkIdentifier,
    timeout: Duration,
    page_size: u32,
}

impl HttpFetcher {
    pub fn new(config: JumpConfig) -> Result<Self> {
        let base = Url::parse(&config.base_url).map_err(|e| JumpError::InvalidUrl {
            url: config.base_url.clone(),
            message: e.to_string(),
        })?;
        if base.cannot_be_a_base() {
            return Err(cannot_be_a_base(&base));
        }

        let inner = reqwest::Client::builder()
            .timeout(config.timeout)
            .default_headers(default_headers(&config.network_id)?)
            .build()
            .map_err(JumpError::Client)?;

        Ok(Self {
            inner,
            base,
            network_id: config.network_id,
            timeout: config.timeout,
            page_size: config.page_size,
        })
    }

    /// `<base>/api/networks/<id>/<resource>?collapsed=false&per_page=<n>`
    ///
    /// Segments are appended to the base path, so a base such as
    /// `http://proxy/jump` keeps its prefix. The network id is escaped.
    pub fn url(&self, resource: Resource) -> Result<Url> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|()| cannot_be_a_base(&self.base))?
            .pop_if_empty()
            .extend(["api", "networks", self.network_id.as_str(), resource.path()]);

        url.query_pairs_mut()
            .append_pair("collapsed", "false")
            .append_pair("per_page", &self.page_size.to_string());

        Ok(url)
    }

    async fn get(&self, resource: Resource) -> Result<Vec<u8>> {
        let url = self.url(resource)?;
        debug!(%url, "fetching {resource}");

        let response = self
            .inner
            .get(url)
            .send()
            .await
            .map_err(|e| self.request_error(resource, e))?;

        let status = response.status();
        if !status.is_success() {
            let body = match response.text().await {
                Ok(body) => body,
                Err(e) => format!("could not read body ({e})"),
            };
            warn!(status = status.as_u16(), "{resource} request was rejected");
            return Err(JumpError::Status {
                resource,
                status: status.as_u16(),
                body,
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| self.request_error(resource, e))?;

        debug!(bytes = body.len(), "received {resource}");
        Ok(body.to_vec())
    }

    fn request_error(&self, resource: Resource, source: reqwest::Error) -> JumpError {
        if source.is_timeout() {
            JumpError::Timeout {
                resource,
                timeout: self.timeout,
            }
        } else {
            JumpError::Transport { resource, source }
        }
    }
}

impl DataFetcher for HttpFetcher {
    fn fetch<'a>(
        &'a self,
        resource: Resource,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<u8>>> + Send + 'a>> {
        Box::pin(self.get(resource))
    }
}

fn cannot_be_a_base(url: &Url) -> JumpError {
    JumpError::InvalidUrl {
        url: url.to_string(),
        message: "cannot be used as a base".into(),
    }
}

fn default_headers(network_id: &NetworkIdentifier) -> Result<HeaderMap> {
    let referer = format!("https://map.jump.com/?network_id={network_id}&theme=jump");

    let mut headers = HeaderMap::new();
    headers.insert(
        REFERER,
        HeaderValue::from_str(&referer)
            .map_err(|_| JumpError::InvalidNetwork(network_id.clone()))?,
    );
    headers.insert(USER_AGENT, HeaderValue::from_static(BROWSER_USER_AGENT));
    headers.insert(SEC_FETCH_MODE, HeaderValue::from_static("cors"));
    headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_JSON));
    Ok(headers)
}
