//! Headless Chrome backed [`PageRenderer`].

use std::ffi::OsStr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use headless_chrome::protocol::cdp::Network;
use headless_chrome::{Browser, LaunchOptions, Tab};

use super::{PageRenderer, RenderSession, Viewport};
use crate::core::EtfError;
use crate::core::client::constants::USER_AGENT;

const ACCEPT_LANGUAGE: &str = "en-US,en;q=0.9";

/// Ad and tracker hosts blocked by default. They slow the page down and some of
/// them fingerprint automated clients.
const DEFAULT_BLOCKED_URLS: &[&str] = &[
    "*doubleclick.net*",
    "*googlesyndication.com*",
    "*googletagmanager.com*",
    "*google-analytics.com*",
    "*googleadservices.com*",
    "*adservice.google.com*",
    "*amazon-adsystem.com*",
    "*facebook.net*",
    "*scorecardresearch.com*",
    "*quantserve.com*",
    "*taboola.com*",
    "*outbrain.com*",
    "*hotjar.com*",
    "*criteo.com*",
];

fn page_load(context: &str, e: impl std::fmt::Display) -> EtfError {
    EtfError::PageLoad(format!("{context}: {e}"))
}

/// Launches a headless Chrome per session, with automation fingerprints masked
/// and known ad/tracker hosts blocked.
#[derive(Clone, Debug)]
pub struct ChromeRenderer {
    path: Option<PathBuf>,
    headless: bool,
    sandbox: bool,
    default_timeout: Duration,
    user_agent: String,
    blocked_urls: Vec<String>,
}

impl Default for ChromeRenderer {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl ChromeRenderer {
    /// Create a new builder.
    pub fn builder() -> ChromeRendererBuilder {
        ChromeRendererBuilder::default()
    }
}

impl PageRenderer for ChromeRenderer {
    fn launch(&self, viewport: Viewport) -> Result<Box<dyn RenderSession>, EtfError> {
        let args = [OsStr::new("--disable-blink-features=AutomationControlled")];
        let options = LaunchOptions::default_builder()
            .headless(self.headless)
            .sandbox(self.sandbox)
            .path(self.path.clone())
            .window_size(Some((viewport.width, viewport.height)))
            .args(args.to_vec())
            .build()
            .map_err(|e| page_load("invalid browser launch options", e))?;

        let browser = Browser::new(options).map_err(|e| page_load("browser launch failed", e))?;
        tracing::debug!(?viewport, "browser launched");

        Ok(Box::new(ChromeSession {
            browser: Some(browser),
            tab: None,
            default_timeout: self.default_timeout,
            user_agent: self.user_agent.clone(),
            blocked_urls: self.blocked_urls.clone(),
        }))
    }
}

struct ChromeSession {
    browser: Option<Browser>,
    tab: Option<Arc<Tab>>,
    default_timeout: Duration,
    user_agent: String,
    blocked_urls: Vec<String>,
}

impl ChromeSession {
    fn tab(&self) -> Result<&Arc<Tab>, EtfError> {
        self.tab
            .as_ref()
            .ok_or_else(|| EtfError::PageLoad("no page open in renderer session".into()))
    }
}

impl RenderSession for ChromeSession {
    fn open_page(&mut self) -> Result<(), EtfError> {
        let browser = self
            .browser
            .as_ref()
            .ok_or_else(|| EtfError::PageLoad("renderer session already closed".into()))?;
        let tab = browser
            .new_tab()
            .map_err(|e| page_load("failed to open page", e))?;
        // Keep the handle before configuring it so close() can release it.
        self.tab = Some(tab.clone());

        tab.set_default_timeout(self.default_timeout);
        tab.enable_stealth_mode()
            .map_err(|e| page_load("failed to enable stealth mode", e))?;
        tab.set_user_agent(&self.user_agent, Some(ACCEPT_LANGUAGE), None)
            .map_err(|e| page_load("failed to set user agent", e))?;

        if !self.blocked_urls.is_empty() {
            tab.call_method(Network::Enable {
                max_total_buffer_size: None,
                max_resource_buffer_size: None,
                max_post_data_size: None,
                report_direct_socket_traffic: None,
                enable_durable_messages: None,
            })
            .map_err(|e| page_load("failed to enable network domain", e))?;
            tab.call_method(Network::SetBlockedURLs {
                urls: self.blocked_urls.clone(),
            })
            .map_err(|e| page_load("failed to install URL blocklist", e))?;
        }
        Ok(())
    }

    fn navigate(&mut self, url: &str) -> Result<(), EtfError> {
        let tab = self.tab()?;
        tab.navigate_to(url)
            .and_then(|t| t.wait_until_navigated())
            .map_err(|e| page_load(&format!("navigation to {url} failed"), e))?;
        Ok(())
    }

    fn wait_for_selector(&mut self, selector: &str) -> Result<(), EtfError> {
        self.tab()?
            .wait_for_element(selector)
            .map_err(|e| page_load(&format!("waiting for `{selector}` failed"), e))?;
        Ok(())
    }

    fn content(&mut self) -> Result<String, EtfError> {
        self.tab()?
            .get_content()
            .map_err(|e| page_load("failed to read rendered DOM", e))
    }

    fn close(&mut self) {
        if let Some(tab) = self.tab.take()
            && let Err(e) = tab.close(true)
        {
            tracing::warn!(error = %e, "failed to close renderer page");
        }
        // Dropping the browser terminates the Chrome process.
        drop(self.browser.take());
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct ChromeRendererBuilder {
    path: Option<PathBuf>,
    headless: Option<bool>,
    sandbox: Option<bool>,
    default_timeout: Option<Duration>,
    user_agent: Option<String>,
    blocked_urls: Option<Vec<String>>,
}

impl ChromeRendererBuilder {
    /// Use a specific Chrome/Chromium executable instead of auto-detection.
    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Run with a visible window. Default: headless.
    pub fn headless(mut self, headless: bool) -> Self {
        self.headless = Some(headless);
        self
    }

    /// Enable Chrome's sandbox. Default: disabled, as it is in most containers.
    pub fn sandbox(mut self, sandbox: bool) -> Self {
        self.sandbox = Some(sandbox);
        self
    }

    /// Timeout for navigation and readiness waits. Default: 30s.
    pub fn default_timeout(mut self, dur: Duration) -> Self {
        self.default_timeout = Some(dur);
        self
    }

    /// Override the User-Agent presented by the page.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Replace the blocked URL patterns (`*` wildcards). An empty list disables blocking.
    pub fn blocked_urls<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.blocked_urls = Some(patterns.into_iter().map(Into::into).collect());
        self
    }

    pub fn build(self) -> ChromeRenderer {
        ChromeRenderer {
            path: self.path,
            headless: self.headless.unwrap_or(true),
            sandbox: self.sandbox.unwrap_or(false),
            default_timeout: self.default_timeout.unwrap_or(Duration::from_secs(30)),
            user_agent: self.user_agent.unwrap_or_else(|| USER_AGENT.to_string()),
            blocked_urls: self.blocked_urls.unwrap_or_else(|| {
                DEFAULT_BLOCKED_URLS.iter().map(|s| (*s).to_string()).collect()
            }),
        }
    }
}
