use crate::common::{FailAt, FixtureRenderer, client_for, fixture, mock_flows_page, setup_server};
use etf_snapshot::respond;
use httpmock::Method::GET;
use reqwest::StatusCode;
use serde_json::{Value, json};

const PERIODS: [&str; 7] = ["YTD", "1M", "3M", "1Y", "3Y", "5Y", "10Y"];

#[tokio::test]
async fn missing_or_empty_ticker_is_bad_request() {
    let server = setup_server();
    let (renderer, log) = FixtureRenderer::new(fixture("profile_html", "SPY", "html"));
    let client = client_for(&server, renderer);

    for ticker in [None, Some("")] {
        let resp = respond(&client, ticker).await;
        assert_eq!(resp.status, StatusCode::BAD_REQUEST);
        assert_eq!(resp.content_type, "application/json");
        assert_eq!(resp.body, r#"{"error":"ETF ticker missing"}"#);
    }
    assert_eq!(log.launches(), 0);
}

#[tokio::test]
async fn full_snapshot_is_ok() {
    let server = setup_server();
    let flows = mock_flows_page(&server, "SPY");
    let (renderer, log) = FixtureRenderer::new(fixture("profile_html", "SPY", "html"));
    let client = client_for(&server, renderer);

    let resp = respond(&client, Some("SPY")).await;
    flows.assert();

    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.content_type, "application/json");
    let body: Value = serde_json::from_str(&resp.body).unwrap();

    let keys: Vec<&str> = body.as_object().unwrap().keys().map(String::as_str).collect();
    let mut expected = vec![
        "Name", "Segment", "AUM", "Grade", "Score", "Pick", "Expense Ratio", "Performance",
        "Dividend", "Inception", "5D Flow", "1M Flow",
    ];
    let mut sorted = keys.clone();
    sorted.sort_unstable();
    expected.sort_unstable();
    assert_eq!(sorted, expected);

    assert_eq!(body["Name"], "SPDR S&P 500 ETF Trust");
    assert_eq!(body["Segment"], "Equity: U.S. - Large Cap");
    assert_eq!(body["AUM"].as_f64(), Some(375_620_000_000.0));
    assert_eq!(body["Grade"], json!(1));
    assert_eq!(body["Score"].as_f64(), Some(87.51));
    assert_eq!(body["Pick"], json!(true));
    assert_eq!(body["Expense Ratio"], "0.09%");
    assert_eq!(body["Dividend"], "1.35%");
    assert_eq!(body["Inception"], "01/22/93");
    assert_eq!(body["5D Flow"].as_f64(), Some(1_230_000_000.0));
    assert_eq!(body["1M Flow"].as_f64(), Some(845_600_000.0));

    let perf = body["Performance"].as_object().unwrap();
    assert_eq!(perf.len(), PERIODS.len());
    for period in PERIODS {
        let v = perf[period].as_str().unwrap();
        assert!(v.ends_with('%'), "{period} = {v}");
    }
    assert_eq!(perf["10Y"], "12.87%");

    // whole amounts go out as integers, fractional ones as floats
    assert!(resp.body.contains(r#""AUM":375620000000,"#), "{}", resp.body);
    assert!(resp.body.contains(r#""Score":87.51,"#), "{}", resp.body);
    assert!(resp.body.contains(r#""5D Flow":1230000000,"#), "{}", resp.body);
    assert!(resp.body.contains(r#""1M Flow":845600000}"#), "{}", resp.body);

    assert_eq!(log.closes(), 1);
}

#[tokio::test]
async fn reserved_characters_in_ticker_stay_in_the_path_segment() {
    let server = setup_server();
    let flows = server.mock(|when, then| {
        when.method(GET);
        then.status(200).body(fixture("flows_html", "SPY", "html"));
    });
    let (renderer, log) = FixtureRenderer::new(fixture("profile_html", "SPY", "html"));
    let client = client_for(&server, renderer);

    let resp = respond(&client, Some("SPY/../X?t=QQQ#top")).await;
    flows.assert_calls(1);

    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(
        log.visited(),
        vec![format!(
            "{}/profile/SPY%2F..%2FX%3Ft=QQQ%23top",
            server.base_url()
        )]
    );
    let body: Value = serde_json::from_str(&resp.body).unwrap();
    assert_eq!(body["Name"], "SPDR S&P 500 ETF Trust");
}

#[tokio::test]
async fn navigation_failure_is_server_error_and_releases_session() {
    let server = setup_server();
    let flows = mock_flows_page(&server, "SPY");
    let (renderer, log) =
        FixtureRenderer::failing(fixture("profile_html", "SPY", "html"), FailAt::Navigate);
    let client = client_for(&server, renderer);

    let resp = respond(&client, Some("SPY")).await;

    assert_eq!(resp.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(resp.content_type.starts_with("text/plain"));
    assert_eq!(
        resp.body,
        format!(
            "navigation to {}/profile/SPY failed: net::ERR_CONNECTION_RESET",
            server.base_url()
        )
    );
    assert_eq!(log.launches(), 1);
    assert_eq!(log.closes(), 1);
    flows.assert_calls(0);
}

#[tokio::test]
async fn flows_error_status_still_returns_ok_with_zero_flows() {
    let server = setup_server();
    let flows = server.mock(|when, then| {
        when.method(GET).path("/etf/SPY");
        then.status(502).body("<<<bad gateway>>>");
    });
    let (renderer, _log) = FixtureRenderer::new(fixture("profile_html", "SPY", "html"));
    let client = client_for(&server, renderer);

    let resp = respond(&client, Some("SPY")).await;
    flows.assert();

    assert_eq!(resp.status, StatusCode::OK);
    let body: Value = serde_json::from_str(&resp.body).unwrap();
    assert_eq!(body["5D Flow"].as_f64(), Some(0.0));
    assert_eq!(body["1M Flow"].as_f64(), Some(0.0));
    assert_eq!(body["Name"], "SPDR S&P 500 ETF Trust");
}

#[tokio::test]
async fn degraded_fields_keep_the_key_set() {
    let server = setup_server();
    let _flows = mock_flows_page(&server, "BARE");
    let (renderer, _log) = FixtureRenderer::new(
        r#"<html><body><h1 class="font18 medium_blue_type w-100 pull-left">Bare</h1></body></html>"#,
    );
    let client = client_for(&server, renderer);

    let resp = respond(&client, Some("BARE")).await;

    assert_eq!(resp.status, StatusCode::OK);
    let body: Value = serde_json::from_str(&resp.body).unwrap();
    assert_eq!(body.as_object().unwrap().len(), 12);
    assert_eq!(body["Grade"], "unavailable");
    assert_eq!(body["Score"], "unavailable");
    assert_eq!(body["Pick"], json!(false));
    assert_eq!(body["AUM"].as_f64(), Some(0.0));
    assert!(body["Expense Ratio"].is_null());
    assert_eq!(body["Performance"]["YTD"], "");
}
