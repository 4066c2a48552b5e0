use crate::common;
use chrono::{NaiveDate, TimeZone, Utc};
use httpmock::Method::GET;
use hawkiz_rs::OptionsChainBuilder;

#[tokio::test]
async fn expiration_filter_without_timestamp() {
    let server = common::setup_server();

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/v1/market-data/options/SPY")
            .query_param("expiration_date", "2024-06-21")
            .is_true(|req| !req.query_params().iter().any(|(k, _)| k == "timestamp"));
        then.status(200)
            .header("content-type", "application/json")
            .body(common::fixture("options_chain", "SPY", "json"));
    });

    let client = common::test_client(&server);

    let _ = OptionsChainBuilder::new(&client, "SPY")
        .expiration_date(NaiveDate::from_ymd_opt(2024, 6, 21).unwrap())
        .fetch()
        .await
        .unwrap();

    mock.assert();
}

#[tokio::test]
async fn no_filters_means_no_query_string() {
    let server = common::setup_server();

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/v1/market-data/options/SPY")
            .is_true(|req| req.query_params().is_empty());
        then.status(200)
            .header("content-type", "application/json")
            .body(common::fixture("options_chain", "SPY", "json"));
    });

    let client = common::test_client(&server);

    let _ = OptionsChainBuilder::new(&client, "SPY").fetch().await.unwrap();

    mock.assert();
}

#[tokio::test]
async fn timestamp_is_sent_as_rfc3339() {
    let server = common::setup_server();

    let ts = Utc.with_ymd_and_hms(2024, 6, 10, 15, 30, 0).unwrap();

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/v1/market-data/options/SPY")
            .query_param("timestamp", ts.to_rfc3339());
        then.status(200)
            .header("content-type", "application/json")
            .body(common::fixture("options_chain", "SPY", "json"));
    });

    let client = common::test_client(&server);

    let _ = OptionsChainBuilder::new(&client, "SPY")
        .timestamp(ts)
        .fetch()
        .await
        .unwrap();

    mock.assert();
}
