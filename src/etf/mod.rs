use crate::flows::{self, FundFlows};
use crate::profile::{self, FundProfile};
use crate::snapshot::{self, EtfSnapshot};
use crate::{EtfClient, EtfError};

/// A handle for a single ETF ticker.
///
/// An `Etf` is created with an [`EtfClient`] and a ticker symbol. It can load the
/// full snapshot, or either source on its own.
///
/// # Example
///
/// ```no_run
/// # use etf_snapshot::{Etf, EtfClient};
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = EtfClient::builder().build()?;
/// let spy = Etf::new(&client, "SPY");
///
/// let snapshot = spy.snapshot().await?;
/// println!("{} manages {}", snapshot.name, snapshot.aum);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Etf {
    client: EtfClient,
    ticker: String,
}

impl Etf {
    /// Creates a new `Etf` for a given ticker, used as supplied.
    pub fn new(client: &EtfClient, ticker: impl Into<String>) -> Self {
        Self {
            client: client.clone(),
            ticker: ticker.into(),
        }
    }

    /// The ticker this handle was created for.
    #[must_use]
    pub fn ticker(&self) -> &str {
        &self.ticker
    }

    /// Loads the full snapshot: the rendered profile page, then the flows page.
    ///
    /// # Errors
    ///
    /// See [`snapshot::fetch_snapshot`].
    pub async fn snapshot(&self) -> Result<EtfSnapshot, EtfError> {
        snapshot::fetch_snapshot(&self.client, &self.ticker).await
    }

    /// Loads only the rendered profile page.
    ///
    /// # Errors
    ///
    /// Returns an error if the ticker is empty or the page cannot be rendered.
    #[tracing::instrument(skip(self), err, fields(ticker = %self.ticker))]
    pub async fn profile(&self) -> Result<FundProfile, EtfError> {
        if self.ticker.is_empty() {
            return Err(EtfError::MissingTicker);
        }
        profile::load_profile(&self.client, &self.ticker).await
    }

    /// Loads only the fund-flow figures.
    ///
    /// # Errors
    ///
    /// Returns an error if the ticker is empty or the flows page is unreachable.
    #[tracing::instrument(skip(self), err, fields(ticker = %self.ticker))]
    pub async fn flows(&self) -> Result<FundFlows, EtfError> {
        if self.ticker.is_empty() {
            return Err(EtfError::MissingTicker);
        }
        flows::load_flows(&self.client, &self.ticker).await
    }
}
