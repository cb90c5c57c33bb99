//! Focused unit tests covering serve configuration.

use super::*;
use crate::serve::{ServeArgs, ServeConfig, config_from_layers_for_test};
use georoute_api::ApiConfig;
use georoute_export::{ExportSettings, PageSize};
use ortho_config::MergeComposer;
use rstest::rstest;
use serde_json::json;
use std::time::Duration;

#[rstest]
fn serve_config_defaults_match_the_api() {
    let config = ServeConfig::try_from(ServeArgs::default()).expect("defaults should build");
    assert_eq!(config.api, ApiConfig::default());
    assert_eq!(config.settings, ExportSettings::default());
}

#[rstest]
fn serve_config_applies_overrides() {
    let args = ServeArgs {
        bind: Some("0.0.0.0:9000".into()),
        cors_origin: Some(vec!["https://trips.example".into()]),
        optimize_timeout_ms: Some(2500),
        max_body_bytes: Some(1024),
        title: Some("Trips".into()),
        page_size: Some("letter".into()),
    };
    let config = ServeConfig::try_from(args).expect("config should build");
    assert_eq!(config.api.bind.to_string(), "0.0.0.0:9000");
    assert_eq!(config.api.cors_origins, vec!["https://trips.example"]);
    assert_eq!(config.api.optimize_timeout, Duration::from_millis(2500));
    assert_eq!(config.api.max_body_bytes, 1024);
    assert_eq!(config.settings.title, "Trips");
    assert_eq!(config.settings.page_size, PageSize::Letter);
}

#[rstest]
fn empty_origin_list_keeps_defaults() {
    let args = ServeArgs {
        cors_origin: Some(Vec::new()),
        ..ServeArgs::default()
    };
    let config = ServeConfig::try_from(args).expect("config should build");
    assert_eq!(config.api.cors_origins, ApiConfig::default().cors_origins);
}

#[rstest]
#[case::not_an_address(ServeArgs { bind: Some("localhost".into()), ..ServeArgs::default() }, ARG_BIND)]
#[case::zero_deadline(ServeArgs { optimize_timeout_ms: Some(0), ..ServeArgs::default() }, ARG_OPTIMIZE_TIMEOUT_MS)]
#[case::bad_page_size(ServeArgs { page_size: Some("a5".into()), ..ServeArgs::default() }, ARG_PAGE_SIZE)]
fn invalid_values_are_rejected(#[case] args: ServeArgs, #[case] expected: &'static str) {
    let err = ServeConfig::try_from(args).expect_err("value should be rejected");
    assert!(matches!(err, CliError::InvalidArgument { field, .. } if field == expected));
}

#[rstest]
fn merge_layers_honours_precedence() {
    let mut composer = MergeComposer::new();
    composer.push_file(
        json!({
            "bind": "127.0.0.1:7000",
            "optimize_timeout_ms": 5000,
            "cors_origin": ["http://file.example"],
        }),
        None,
    );
    composer.push_environment(json!({ "optimize_timeout_ms": 3000 }));
    composer.push_cli(json!({ "bind": "127.0.0.1:9100" }));

    let config =
        config_from_layers_for_test(composer.layers()).expect("merged config should build");
    assert_eq!(config.api.bind.to_string(), "127.0.0.1:9100");
    assert_eq!(config.api.optimize_timeout, Duration::from_millis(3000));
    assert_eq!(config.api.cors_origins, vec!["http://file.example"]);
}

#[rstest]
fn merge_layers_maps_configuration_errors() {
    let mut composer = MergeComposer::new();
    composer.push_cli(json!({ "optimize_timeout_ms": "soon" }));
    let err = config_from_layers_for_test(composer.layers())
        .expect_err("invalid layer should fail");
    assert!(matches!(err, CliError::Configuration(_)));
}
