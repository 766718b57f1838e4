use httpmock::Method::GET;
use httpmock::MockServer;
use etf_snapshot::{EtfClient, EtfError, FundFlows};
use etf_snapshot::flows::load_flows;
use url::Url;

fn client(server: &MockServer) -> EtfClient {
    EtfClient::builder()
        .base_flows(Url::parse(&format!("{}/etf/", server.base_url())).unwrap())
        .build()
        .unwrap()
}

#[tokio::test]
async fn error_status_is_not_an_error_and_is_not_retried() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(GET).path("/etf/FAIL");
        then.status(503).body("<html><body>Service Unavailable</body></html>");
    });

    let flows = load_flows(&client(&server), "FAIL").await.unwrap();

    mock.assert_calls(1);
    assert_eq!(flows, FundFlows::default());
}

#[tokio::test]
async fn not_found_with_empty_body_reads_zero() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(GET).path("/etf/NOPE");
        then.status(404);
    });

    let flows = load_flows(&client(&server), "NOPE").await.unwrap();
    mock.assert();
    assert_eq!(flows, FundFlows::default());
}

#[tokio::test]
async fn unreachable_host_is_a_transport_error() {
    let client = EtfClient::builder()
        .base_flows(Url::parse("http://127.0.0.1:9/etf/").unwrap())
        .build()
        .unwrap();

    let err = load_flows(&client, "SPY").await.unwrap_err();
    assert!(matches!(err, EtfError::Http(_)), "expected Http error, got {err:?}");
}
