//! CLI 실행 경로 테스트.
use clap::Parser;
use invest_calc::config::{self, ConfigError};
use invest_calc::{app, app::AppError, ui_cli::Cli, DeploymentModel, InvestmentScenario};

fn run(args: &[&str]) -> String {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("scenario.toml");
    let path = path.to_str().expect("utf-8 path");
    let mut argv = vec!["invest_calc_cli", "--scenario", path];
    argv.extend_from_slice(args);
    app::run(&Cli::parse_from(argv)).expect("run")
}

#[test]
fn text_report_lists_sensitivity() {
    let out = run(&[]);
    assert!(out.contains("10850000"));
    assert!(out.contains("98.16"));
    assert!(out.contains("roi_high_capex"));
}

#[test]
fn model_and_period_overrides_apply() {
    let out = run(&["--model", "cloud", "--period", "1"]);
    // 0.85M + 1.512M + 0.4M
    assert!(out.contains("2762000"));
    assert!(out.contains("roi_high_subscription"));
    assert!(!out.contains("roi_high_capex"));
}

#[test]
fn toml_output_parses_back() {
    let out = run(&["--format", "toml"]);
    let value: toml::Value = toml::from_str(&out).expect("valid toml");
    assert_eq!(value["roi"].as_str(), Some("98.16"));
    assert_eq!(
        value["sensitivity"]
            .as_table()
            .map(|t| t.len()),
        Some(6)
    );
}

#[test]
fn compare_reports_both_models() {
    let out = run(&["--compare"]);
    assert!(out.contains("[local]"));
    assert!(out.contains("[cloud]"));
    assert!(out.contains("TCO 우위: cloud"));
}

#[test]
fn out_of_range_file_is_an_error_not_a_panic() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("scenario.toml");
    let mut scenario = InvestmentScenario::sample_retail(DeploymentModel::Local);
    scenario.capex = "70000000000000000000000000000".parse().expect("decimal");
    config::save(&scenario, &path).expect("save");

    let cli = Cli::parse_from(["invest_calc_cli", "--scenario", path.to_str().expect("utf-8")]);
    let err = app::run(&cli).unwrap_err();
    assert!(matches!(err, AppError::Config(ConfigError::OutOfRange(_))));
}
