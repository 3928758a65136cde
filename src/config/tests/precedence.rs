//! Tests for configuration layer precedence.

use ortho_config::MergeComposer;
use rstest::rstest;
use serde_json::{Value, json};

use super::helpers::build_config_from_layers;
use crate::JokePagerConfig;

#[rstest]
#[case::file_overrides_defaults(
    vec![("defaults", json!({"base_url": "http://default"})), ("file", json!({"base_url": "http://file"}))],
    "http://file",
    "file should override default"
)]
#[case::environment_overrides_file(
    vec![("file", json!({"base_url": "http://file"})), ("environment", json!({"base_url": "http://env"}))],
    "http://env",
    "environment should override file"
)]
#[case::cli_overrides_environment(
    vec![("environment", json!({"base_url": "http://env"})), ("cli", json!({"base_url": "http://cli"}))],
    "http://cli",
    "CLI should override environment"
)]
fn base_url_layer_precedence(
    #[case] layers: Vec<(&str, Value)>,
    #[case] expected: &str,
    #[case] message: &str,
) {
    let config = build_config_from_layers(&layers);

    assert_eq!(config.base_url.as_deref(), Some(expected), "{message}");
}

#[rstest]
fn defaults_apply_when_no_sources_provided() {
    let mut composer = MergeComposer::new();
    composer.push_defaults(json!({"base_url": null, "page": null}));

    let config = JokePagerConfig::merge_from_layers(composer.layers())
        .expect("merge should succeed with empty defaults");

    assert!(config.base_url.is_none(), "base_url should be None");
    assert!(config.page.is_none(), "page should be None");
    assert!(config.log_file.is_none(), "log_file should be None");
    assert_eq!(config.per_page, 20, "per_page should default to 20");
    assert_eq!(config.timeout_seconds, 10, "timeout should default to 10s");
    assert_eq!(config.cache_capacity, 128, "cache should hold 128 pages");
}

#[rstest]
fn full_precedence_chain() {
    let config = build_config_from_layers(&[
        ("defaults", json!({"per_page": 5, "timeout_seconds": 3, "page": 1})),
        ("file", json!({"per_page": 10, "timeout_seconds": 4, "page": 2})),
        ("environment", json!({"per_page": 15, "page": 3})),
        ("cli", json!({"page": 4})),
    ]);

    assert_eq!(config.page, Some(4), "CLI wins for page");
    assert_eq!(config.per_page, 15, "environment wins for per_page");
    assert_eq!(
        config.timeout_seconds, 4,
        "file wins for timeout_seconds (no env/cli override)"
    );
}

#[rstest]
fn partial_overrides_preserve_lower_values() {
    let config = build_config_from_layers(&[
        (
            "file",
            json!({"user_agent": "file-agent", "log_file": "file.log"}),
        ),
        ("cli", json!({"log_file": "cli.log"})),
    ]);

    assert_eq!(config.log_file.as_deref(), Some("cli.log"));
    assert_eq!(
        config.user_agent.as_deref(),
        Some("file-agent"),
        "file user_agent should be preserved"
    );
}
