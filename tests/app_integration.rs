mod test_utils {
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    pub async fn create_mock_server(base: &str, mock_response: &str) -> MockServer {
        let mock_server = MockServer::start().await;
        let url_path = format!("/{base}");

        Mock::given(method("GET"))
            .and(path(&url_path))
            .respond_with(ResponseTemplate::new(200).set_body_string(mock_response))
            .mount(&mock_server)
            .await;

        mock_server
    }

    /// Writes a config file pointing the provider at the mock server.
    pub fn write_config(base_url: &str) -> tempfile::NamedTempFile {
        let config_file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
        let config_content = format!("provider:\n  base_url: {base_url}\n");
        std::fs::write(config_file.path(), config_content).expect("Failed to write config file");
        config_file
    }
}

#[test_log::test(tokio::test)]
async fn test_convert_command_with_mock() {
    let mock_response = r#"{
        "base": "USD",
        "date": "2026-08-29",
        "rates": {"EUR": 0.85, "GBP": 0.79}
    }"#;
    let mock_server = test_utils::create_mock_server("USD", mock_response).await;
    let config_file = test_utils::write_config(&mock_server.uri());

    let result = cambio::run_command(
        cambio::AppCommand::Convert {
            amount: 100.0,
            from: "usd".to_string(),
            to: "eur".to_string(),
        },
        Some(config_file.path().to_str().unwrap()),
    )
    .await;

    assert!(result.is_ok(), "Convert failed with: {:?}", result.err());
}

#[test_log::test(tokio::test)]
async fn test_convert_unknown_target_currency() {
    let mock_response = r#"{"base": "USD", "rates": {"EUR": 0.85}}"#;
    let mock_server = test_utils::create_mock_server("USD", mock_response).await;
    let config_file = test_utils::write_config(&mock_server.uri());

    let result = cambio::run_command(
        cambio::AppCommand::Convert {
            amount: 100.0,
            from: "USD".to_string(),
            to: "XXX".to_string(),
        },
        Some(config_file.path().to_str().unwrap()),
    )
    .await;

    let err = result.expect_err("Conversion to an unknown currency should fail");
    assert!(
        err.to_string().contains("not found"),
        "Unexpected error: {err}"
    );
}

#[test_log::test(tokio::test)]
async fn test_convert_provider_error() {
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/USD"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;
    let config_file = test_utils::write_config(&mock_server.uri());

    let result = cambio::run_command(
        cambio::AppCommand::Convert {
            amount: 100.0,
            from: "USD".to_string(),
            to: "EUR".to_string(),
        },
        Some(config_file.path().to_str().unwrap()),
    )
    .await;

    let err = result.expect_err("Transport failure should surface as an error");
    assert!(err.to_string().contains("503"), "Unexpected error: {err}");
}

#[test_log::test(tokio::test)]
async fn test_identity_conversion_makes_no_request() {
    // No mocks mounted: any request to the server would 404 and fail the
    // conversion, so success proves the network was never touched.
    let mock_server = wiremock::MockServer::start().await;
    let config_file = test_utils::write_config(&mock_server.uri());

    let result = cambio::run_command(
        cambio::AppCommand::Convert {
            amount: 42.0,
            from: "USD".to_string(),
            to: "USD".to_string(),
        },
        Some(config_file.path().to_str().unwrap()),
    )
    .await;

    assert!(result.is_ok(), "Identity conversion failed: {:?}", result.err());
    assert!(mock_server.received_requests().await.unwrap().is_empty());
}

#[test_log::test(tokio::test)]
async fn test_negative_amount_is_rejected_before_fetch() {
    let mock_server = wiremock::MockServer::start().await;
    let config_file = test_utils::write_config(&mock_server.uri());

    let result = cambio::run_command(
        cambio::AppCommand::Convert {
            amount: -5.0,
            from: "USD".to_string(),
            to: "EUR".to_string(),
        },
        Some(config_file.path().to_str().unwrap()),
    )
    .await;

    let err = result.expect_err("Negative amount should be rejected");
    assert!(
        err.to_string().contains("negative"),
        "Unexpected error: {err}"
    );
    assert!(mock_server.received_requests().await.unwrap().is_empty());
}

#[test_log::test(tokio::test)]
async fn test_list_and_info_commands() {
    let config_file = test_utils::write_config("http://127.0.0.1:1");

    let result = cambio::run_command(
        cambio::AppCommand::List,
        Some(config_file.path().to_str().unwrap()),
    )
    .await;
    assert!(result.is_ok());

    // Info never fails, even for unknown codes.
    for code in ["usd", "ZZZ"] {
        let result = cambio::run_command(
            cambio::AppCommand::Info {
                code: code.to_string(),
            },
            Some(config_file.path().to_str().unwrap()),
        )
        .await;
        assert!(result.is_ok(), "Info for {code} failed: {:?}", result.err());
    }
}

#[test_log::test(tokio::test)]
async fn test_malformed_provider_response() {
    let mock_server = test_utils::create_mock_server("USD", r#"{"base": "USD"}"#).await;
    let config_file = test_utils::write_config(&mock_server.uri());

    let result = cambio::run_command(
        cambio::AppCommand::Convert {
            amount: 1.0,
            from: "USD".to_string(),
            to: "EUR".to_string(),
        },
        Some(config_file.path().to_str().unwrap()),
    )
    .await;

    let err = result.expect_err("Malformed response should surface as an error");
    assert!(
        err.to_string().contains("malformed"),
        "Unexpected error: {err}"
    );
}

#[test_log::test(tokio::test)]
async fn test_missing_config_file_fails_with_context() {
    let result = cambio::run_command(
        cambio::AppCommand::List,
        Some("/nonexistent/cambio-config.yaml"),
    )
    .await;

    let err = result.expect_err("Explicit config path must exist");
    assert!(
        err.to_string().contains("Failed to read config file"),
        "Unexpected error: {err}"
    );
}

#[test_log::test(tokio::test)]
async fn test_rounding_matches_display_convention() {
    // 1 * 10.005 rounds half-up to 10.01; exercised end to end through the
    // provider and converter.
    let mock_response = r#"{"base": "USD", "rates": {"EUR": 10.005}}"#;
    let mock_server = test_utils::create_mock_server("USD", mock_response).await;
    let config_file = test_utils::write_config(&mock_server.uri());

    let config = cambio::config::AppConfig::load_from_path(config_file.path()).unwrap();
    let provider = cambio::rates::ExchangeRateApiProvider::new(&config.provider.base_url);
    let converter = cambio::convert::Converter::new(&provider);
    let request = cambio::convert::ConversionRequest::new(1.0, "USD", "EUR").unwrap();

    let result = converter.convert(&request).await.unwrap();
    assert_eq!(result.converted, 10.01);
    assert_eq!(result.rate, 10.005);
}
