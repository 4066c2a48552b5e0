use crate::common;
use chrono::NaiveDate;
use httpmock::Method::GET;
use hawkiz_rs::StockPricesBuilder;

#[tokio::test]
async fn prices_send_all_optional_params() {
    let server = common::setup_server();

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/v1/market-data/stocks/AAPL")
            .query_param("start_date", "2024-01-01")
            .query_param("end_date", "2024-03-31")
            .query_param("limit", "250");
        then.status(200)
            .header("content-type", "application/json")
            .body(common::fixture("stock_prices", "AAPL", "json"));
    });

    let client = common::test_client(&server);

    let _ = StockPricesBuilder::new(&client, "AAPL")
        .start_date(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
        .end_date(NaiveDate::from_ymd_opt(2024, 3, 31).unwrap())
        .limit(250)
        .fetch()
        .await
        .unwrap();

    mock.assert();
}

#[tokio::test]
async fn prices_omit_absent_optional_params() {
    let server = common::setup_server();

    // an omitted filter must not show up as an empty pair either
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/v1/market-data/stocks/AAPL")
            .is_true(|req| req.query_params().is_empty());
        then.status(200)
            .header("content-type", "application/json")
            .body(common::fixture("stock_prices", "AAPL", "json"));
    });

    let client = common::test_client(&server);

    let _ = StockPricesBuilder::new(&client, "AAPL")
        .fetch()
        .await
        .unwrap();

    mock.assert();
}

#[tokio::test]
async fn prices_send_only_the_supplied_param() {
    let server = common::setup_server();

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/v1/market-data/stocks/MSFT")
            .query_param("start_date", "2023-11-15")
            .is_true(|req| {
                !req.query_params()
                    .iter()
                    .any(|(k, _)| k == "end_date" || k == "limit")
            });
        then.status(200).header("content-type", "application/json").body(
            r#"{"symbol":"MSFT","data":[],"count":0}"#,
        );
    });

    let client = common::test_client(&server);

    let resp = StockPricesBuilder::new(&client, "MSFT")
        .start_date(NaiveDate::from_ymd_opt(2023, 11, 15).unwrap())
        .fetch()
        .await
        .unwrap();

    assert_eq!(resp.symbol, "MSFT");
    assert!(resp.data.is_empty());
    mock.assert();
}
