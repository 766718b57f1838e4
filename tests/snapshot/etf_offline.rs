use crate::common::{FixtureRenderer, client_for, fixture, mock_flows_page, setup_server};
use etf_snapshot::{Etf, EtfError, Rated};
use rust_decimal::Decimal;

#[tokio::test]
async fn etf_handle_loads_sources_separately_and_together() {
    let server = setup_server();
    let flows_mock = mock_flows_page(&server, "SPY");
    let (renderer, log) = FixtureRenderer::new(fixture("profile_html", "SPY", "html"));
    let client = client_for(&server, renderer);
    let spy = Etf::new(&client, "SPY");

    let profile = spy.profile().await.unwrap();
    assert_eq!(profile.grade, Rated::Value(1));
    flows_mock.assert_calls(0);

    let flows = spy.flows().await.unwrap();
    assert_eq!(flows.five_day, Decimal::from(1_230_000_000u64));
    assert_eq!(log.launches(), 1);

    let snap = spy.snapshot().await.unwrap();
    assert_eq!(snap.name, profile.name);
    assert_eq!(snap.flow_1m, flows.one_month);
    assert_eq!(log.launches(), 2);
    assert_eq!(log.closes(), 2);
    flows_mock.assert_calls(2);
}

#[tokio::test]
async fn empty_ticker_is_rejected_before_any_io() {
    let server = setup_server();
    let (renderer, log) = FixtureRenderer::new("");
    let client = client_for(&server, renderer);
    let etf = Etf::new(&client, "");

    assert!(matches!(etf.snapshot().await, Err(EtfError::MissingTicker)));
    assert!(matches!(etf.profile().await, Err(EtfError::MissingTicker)));
    assert!(matches!(etf.flows().await, Err(EtfError::MissingTicker)));
    assert_eq!(log.launches(), 0);
}
