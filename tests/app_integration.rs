use std::fs;
use std::sync::Arc;
use tracing::{error, info};

// Adds automatic logging to test
mod test_utils {
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    pub fn chart_response(price: f64) -> String {
        format!(
            r#"{{
                "chart": {{
                    "result": [{{
                        "meta": {{"regularMarketPrice": {price}, "currency": "USD"}},
                        "indicators": {{"quote": [{{"close": [{price}]}}]}}
                    }}],
                    "error": null
                }}
            }}"#
        )
    }

    pub async fn create_mock_server(quotes: &[(&str, f64)]) -> MockServer {
        let mock_server = MockServer::start().await;
        for (symbol, price) in quotes {
            Mock::given(method("GET"))
                .and(path(format!("/v8/finance/chart/{symbol}")))
                .respond_with(ResponseTemplate::new(200).set_body_string(chart_response(*price)))
                .mount(&mock_server)
                .await;
        }
        mock_server
    }

    pub fn write_config(base_url: &str) -> tempfile::NamedTempFile {
        write_config_with_ttl(base_url, 300)
    }

    pub fn write_config_with_ttl(base_url: &str, cache_ttl_secs: u64) -> tempfile::NamedTempFile {
        let config_file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
        let config_content = format!(
            r#"
            pair:
              reference: "TSLA"
              leveraged: "TSLL"
            providers:
              yahoo:
                base_url: {base_url}
                timeout_secs: 5
                cache_ttl_secs: {cache_ttl_secs}
            "#
        );
        std::fs::write(config_file.path(), config_content).expect("Failed to write config file");
        config_file
    }
}

#[test_log::test(tokio::test)]
async fn test_live_baseline_from_mock() {
    use levcalc::core::fetch_baseline;

    let mock_server = test_utils::create_mock_server(&[("TSLA", 450.0), ("TSLL", 21.5)]).await;
    let config_file = test_utils::write_config(&mock_server.uri());
    let config = levcalc::load_config(config_file.path().to_str()).unwrap();

    let cache = Arc::new(levcalc::core::cache::Cache::new());
    let provider =
        levcalc::providers::YahooFinanceProvider::new(&config.providers.yahoo.base_url, cache);
    let baseline = fetch_baseline(&provider, &config).await.unwrap();

    assert!(!baseline.is_fallback());
    assert_eq!(baseline.prices.reference_price(), 450.0);
    assert_eq!(baseline.prices.leveraged_price(), 21.5);
}

#[test_log::test(tokio::test)]
async fn test_unavailable_prices_use_defaults_and_still_project() {
    use levcalc::core::{LeverageMultiple, fetch_baseline, project};

    // Server knows neither ticker, every fetch gets a 404
    let mock_server = test_utils::create_mock_server(&[]).await;
    let config_file = test_utils::write_config(&mock_server.uri());
    let config = levcalc::load_config(config_file.path().to_str()).unwrap();

    let cache = Arc::new(levcalc::core::cache::Cache::new());
    let provider =
        levcalc::providers::YahooFinanceProvider::new(&config.providers.yahoo.base_url, cache);
    let baseline = fetch_baseline(&provider, &config).await.unwrap();

    assert!(baseline.is_fallback());
    assert_eq!(baseline.prices.reference_price(), 439.31);
    assert_eq!(baseline.prices.leveraged_price(), 20.17);

    let result = project(&baseline.prices, LeverageMultiple::DOUBLE, 483.24).unwrap();
    assert!((result.projected_leveraged_price - 24.20).abs() < 0.01);
}

#[test_log::test(tokio::test)]
async fn test_full_app_flow_project_with_mock() {
    let mock_server = test_utils::create_mock_server(&[("TSLA", 439.31), ("TSLL", 20.17)]).await;
    let config_file = test_utils::write_config(&mock_server.uri());

    let result = levcalc::run_command(
        levcalc::AppCommand::Project { price: 483.24 },
        Some(config_file.path().to_str().unwrap()),
        false,
    )
    .await;
    assert!(
        result.is_ok(),
        "Main function failed with: {:?}",
        result.err()
    );
}

#[test_log::test(tokio::test)]
async fn test_quote_with_unbounded_cache_ttl() {
    let mock_server = test_utils::create_mock_server(&[("TSLA", 439.31), ("TSLL", 20.17)]).await;
    let config_file = test_utils::write_config_with_ttl(&mock_server.uri(), u64::MAX);

    let result = levcalc::run_command(
        levcalc::AppCommand::Quote,
        Some(config_file.path().to_str().unwrap()),
        false,
    )
    .await;
    assert!(result.is_ok(), "Quote failed with: {:?}", result.err());
    let requests = mock_server.received_requests().await.unwrap_or_default();
    assert_eq!(requests.len(), 2);
}

#[test_log::test(tokio::test)]
async fn test_full_app_flow_quote_offline() {
    let config_file = test_utils::write_config("http://127.0.0.1:9");

    let result = levcalc::run_command(
        levcalc::AppCommand::Quote,
        Some(config_file.path().to_str().unwrap()),
        true,
    )
    .await;
    assert!(
        result.is_ok(),
        "Main function failed with: {:?}",
        result.err()
    );
}

#[test_log::test(tokio::test)]
async fn test_project_rejects_negative_price() {
    let config_file = test_utils::write_config("http://127.0.0.1:9");

    let result = levcalc::run_command(
        levcalc::AppCommand::Project { price: -10.0 },
        Some(config_file.path().to_str().unwrap()),
        true,
    )
    .await;
    let err = result.unwrap_err();
    assert!(err.to_string().contains("Invalid hypothetical price"));
}

#[test_log::test(tokio::test)]
async fn test_about_needs_no_network() {
    let mock_server = test_utils::create_mock_server(&[("TSLA", 439.31), ("TSLL", 20.17)]).await;
    let config_file = test_utils::write_config(&mock_server.uri());
    let result = levcalc::run_command(
        levcalc::AppCommand::About,
        Some(config_file.path().to_str().unwrap()),
        false,
    )
    .await;
    assert!(result.is_ok());
    let requests = mock_server.received_requests().await.unwrap_or_default();
    assert!(requests.is_empty());
}

#[test_log::test(tokio::test)]
async fn test_invalid_config_is_an_error() {
    let config_file = tempfile::NamedTempFile::new().unwrap();
    fs::write(
        config_file.path(),
        "defaults:\n  reference_price: 0\n  leveraged_price: 20.17\n",
    )
    .unwrap();

    let result = levcalc::run_command(
        levcalc::AppCommand::Quote,
        Some(config_file.path().to_str().unwrap()),
        true,
    )
    .await;
    assert!(result.is_err());
}

#[test_log::test(tokio::test)]
#[ignore = "hits the live Yahoo Finance API"]
async fn test_real_yahoo_finance_api() {
    use levcalc::core::price::PriceProvider;
    use levcalc::providers::YahooFinanceProvider;

    let base_url = levcalc::config::DEFAULT_YAHOO_BASE_URL;
    let cache = Arc::new(levcalc::core::cache::Cache::new());
    let provider = YahooFinanceProvider::new(base_url, cache);

    let symbol = "TSLA";
    info!(?symbol, "Fetching latest close from Yahoo Finance");

    match provider.fetch_latest_close(symbol).await {
        Ok(quote) => {
            info!(?quote, "Received successful price response");
            assert!(quote.price > 0.0, "Price should be positive");
            assert!(!quote.currency.is_empty(), "Currency should not be empty");
        }
        Err(e) => {
            error!("API request failed: {e}\n{e:?}");
            panic!("API request failed: {e}");
        }
    }
}
