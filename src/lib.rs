//! etf-snapshot: one ETF, one normalized record.
//!
//! Renders the ETF's profile page in a headless browser, fetches its fund-flow
//! page over plain HTTP, and merges both into an [`EtfSnapshot`].

pub mod core;
pub mod etf;
pub mod flows;
pub mod handler;
pub mod profile;
pub mod render;
pub mod snapshot;

#[cfg(feature = "debug-dumps")]
pub(crate) mod debug;

pub use crate::core::{EtfClient, EtfClientBuilder, EtfError, parse_abbreviated_number};
pub use etf::Etf;
pub use flows::FundFlows;
pub use handler::{EtfResponse, respond};
pub use profile::{FundProfile, Performance, Rated};
pub use render::{ChromeRenderer, PageRenderer, RenderSession, Viewport};
pub use snapshot::{EtfSnapshot, fetch_snapshot};
