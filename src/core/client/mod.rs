//! Public client surface + builder.
//! Defaults (endpoints, UA, viewport) live in `constants`.

pub(crate) mod constants;

use crate::core::EtfError;
use crate::render::{ChromeRenderer, PageRenderer, Viewport};
use constants::{DEFAULT_BASE_FLOWS, DEFAULT_BASE_PROFILE, USER_AGENT};
use reqwest::Client;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// Shared configuration for both sources: the HTTP client for the flows page,
/// the renderer for the profile page, and the base URLs tickers are appended to.
///
/// Cloning is cheap; clones share the HTTP connection pool and the renderer.
#[derive(Clone)]
pub struct EtfClient {
    http: Client,
    base_profile: Url,
    base_flows: Url,
    viewport: Viewport,
    renderer: Arc<dyn PageRenderer>,
}

impl fmt::Debug for EtfClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EtfClient")
            .field("base_profile", &self.base_profile.as_str())
            .field("base_flows", &self.base_flows.as_str())
            .field("viewport", &self.viewport)
            .finish_non_exhaustive()
    }
}

impl EtfClient {
    /// Create a new builder.
    pub fn builder() -> EtfClientBuilder {
        EtfClientBuilder::default()
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }
    pub(crate) fn base_profile(&self) -> &Url {
        &self.base_profile
    }
    pub(crate) fn base_flows(&self) -> &Url {
        &self.base_flows
    }
    pub(crate) fn viewport(&self) -> Viewport {
        self.viewport
    }
    pub(crate) fn renderer(&self) -> Arc<dyn PageRenderer> {
        Arc::clone(&self.renderer)
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct EtfClientBuilder {
    user_agent: Option<String>,
    base_profile: Option<Url>,
    base_flows: Option<Url>,
    viewport: Option<Viewport>,
    renderer: Option<Arc<dyn PageRenderer>>,

    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl EtfClientBuilder {
    /// Override the User-Agent used for the flows request.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the profile page base (e.g., `https://www.etf.com/`).
    pub fn base_profile(mut self, url: Url) -> Self {
        self.base_profile = Some(url);
        self
    }

    /// Override the fund-flow page base (e.g., `https://etfdb.com/etf/`).
    pub fn base_flows(mut self, url: Url) -> Self {
        self.base_flows = Some(url);
        self
    }

    /// Override the viewport the profile page is rendered at. Default: 1680x1050.
    pub fn viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = Some(viewport);
        self
    }

    /// Render the profile page with `renderer` instead of the default headless Chrome.
    pub fn renderer(mut self, renderer: impl PageRenderer + 'static) -> Self {
        self.renderer = Some(Arc::new(renderer));
        self
    }

    /// Set a global request timeout for the flows request. Default: none.
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout for the flows request. Default: none.
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// # Errors
    ///
    /// Returns an error if a default base URL fails to parse or the HTTP client
    /// cannot be built.
    pub fn build(self) -> Result<EtfClient, EtfError> {
        let base_profile = match self.base_profile {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_PROFILE)?,
        };
        let base_flows = match self.base_flows {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_FLOWS)?,
        };

        let mut httpb = reqwest::Client::builder()
            .user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT))
            .cookie_store(true);

        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        let http = httpb.build()?;

        Ok(EtfClient {
            http,
            base_profile,
            base_flows,
            viewport: self.viewport.unwrap_or_default(),
            renderer: self
                .renderer
                .unwrap_or_else(|| Arc::new(ChromeRenderer::default())),
        })
    }
}
