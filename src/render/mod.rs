//! Rendering of the client-side profile page.
//!
//! The renderer is an injected capability. A [`PageRenderer`] launches one
//! [`RenderSession`] per call; [`with_rendered_page`] drives that session through
//! open -> navigate -> readiness wait -> DOM snapshot and always releases it.
//! Tests swap in a renderer that serves a fixed DOM snapshot.

mod chrome;

pub use chrome::{ChromeRenderer, ChromeRendererBuilder};

use std::ops::{Deref, DerefMut};
use std::sync::Arc;

use url::Url;

use crate::core::EtfError;
use crate::core::client::constants::{DEFAULT_VIEWPORT_HEIGHT, DEFAULT_VIEWPORT_WIDTH};

/// Size of the page area the profile is rendered at.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: DEFAULT_VIEWPORT_WIDTH,
            height: DEFAULT_VIEWPORT_HEIGHT,
        }
    }
}

/// Something that can start a browser-like session able to render a
/// script-heavy page.
///
/// Implementations are called from a blocking worker thread, so they may block.
pub trait PageRenderer: Send + Sync {
    /// Starts a fresh session. Sessions are never reused between calls.
    ///
    /// # Errors
    ///
    /// Returns [`EtfError::PageLoad`] if the underlying renderer cannot start.
    fn launch(&self, viewport: Viewport) -> Result<Box<dyn RenderSession>, EtfError>;
}

/// One live renderer session holding at most one page.
pub trait RenderSession {
    /// Opens the page that subsequent calls operate on.
    ///
    /// # Errors
    ///
    /// Returns [`EtfError::PageLoad`] if no page can be created.
    fn open_page(&mut self) -> Result<(), EtfError>;

    /// Navigates the page and waits until it reports loaded.
    ///
    /// # Errors
    ///
    /// Returns [`EtfError::PageLoad`] on navigation failure or timeout.
    fn navigate(&mut self, url: &str) -> Result<(), EtfError>;

    /// Waits until `selector` matches an element in the live DOM.
    ///
    /// # Errors
    ///
    /// Returns [`EtfError::PageLoad`] if the element never shows up.
    fn wait_for_selector(&mut self, selector: &str) -> Result<(), EtfError>;

    /// Serializes the current DOM.
    ///
    /// # Errors
    ///
    /// Returns [`EtfError::PageLoad`] if the DOM cannot be read.
    fn content(&mut self) -> Result<String, EtfError>;

    /// Releases the page (if one was opened) and then the session itself.
    ///
    /// Must tolerate partially initialized sessions and must never panic.
    fn close(&mut self);
}

/// Closes the wrapped session when dropped, on success, error and unwind alike.
struct SessionGuard(Box<dyn RenderSession>);

impl Deref for SessionGuard {
    type Target = dyn RenderSession;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

impl DerefMut for SessionGuard {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.0.as_mut()
    }
}

impl Drop for SessionGuard {
    fn drop(&mut self) {
        self.0.close();
        tracing::debug!("renderer session released");
    }
}

fn render_blocking(
    renderer: &dyn PageRenderer,
    url: &str,
    await_selector: &str,
    viewport: Viewport,
) -> Result<String, EtfError> {
    let mut session = SessionGuard(renderer.launch(viewport)?);
    session.open_page()?;
    session.navigate(url)?;
    session.wait_for_selector(await_selector)?;
    session.content()
}

/// Renders `url` in a fresh session and returns the DOM once `await_selector`
/// is present.
///
/// The readiness selector stands in for the whole page: once it matches, every
/// other fragment is assumed to have been rendered too.
///
/// # Errors
///
/// Returns [`EtfError::PageLoad`] if launching, navigating or waiting fails. The
/// session has been released by the time the error is returned.
pub async fn with_rendered_page(
    renderer: Arc<dyn PageRenderer>,
    url: &Url,
    await_selector: &str,
    viewport: Viewport,
) -> Result<String, EtfError> {
    let url = url.to_string();
    let await_selector = await_selector.to_string();

    tokio::task::spawn_blocking(move || {
        render_blocking(renderer.as_ref(), &url, &await_selector, viewport)
    })
    .await
    .map_err(|e| EtfError::PageLoad(format!("renderer task failed: {e}")))?
}
