//! 시나리오 TOML 로드/저장 테스트.
use invest_calc::config::{self, ConfigError, ScenarioOverrides};
use invest_calc::investment::OutOfRange;
use invest_calc::{DeploymentModel, InvestmentScenario};
use rust_decimal_macros::dec;

#[test]
fn load_or_default_creates_sample_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("scenario.toml");
    let scenario = config::load_or_default(&path).expect("create");
    assert!(path.exists());
    assert_eq!(
        scenario,
        InvestmentScenario::sample_retail(DeploymentModel::Local)
    );
    let reloaded = config::load(&path).expect("reload");
    assert_eq!(reloaded, scenario);
}

#[test]
fn parses_hand_written_scenario() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("cloud.toml");
    std::fs::write(
        &path,
        r#"
name = "pilot"
type = "cloud"
capex = 0
annual_opex = 0
implementation = 850000
annual_subscription = "1512000"
training = 400000.50
period = 3
annual_savings = 1000000
annual_revenue_growth = 250000
"#,
    )
    .expect("write");
    let s = config::load(&path).expect("load");
    assert_eq!(s.model, DeploymentModel::Cloud);
    assert_eq!(s.annual_subscription, dec!(1512000));
    assert_eq!(s.training, dec!(400000.50));
    assert_eq!(s.period, 3);
}

#[test]
fn unknown_model_is_rejected() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("bad.toml");
    let mut text = toml::to_string(&InvestmentScenario::sample_retail(DeploymentModel::Local))
        .expect("serialize");
    text = text.replace("type = \"local\"", "type = \"hybrid\"");
    std::fs::write(&path, text).expect("write");
    assert!(matches!(config::load(&path), Err(ConfigError::Parse(_))));
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let err = config::load(&dir.path().join("none.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn overrides_replace_only_given_fields() {
    let base = InvestmentScenario::sample_retail(DeploymentModel::Local);
    let same = ScenarioOverrides::default().apply(base.clone());
    assert_eq!(same, base);

    let changed = ScenarioOverrides {
        model: Some(DeploymentModel::Cloud),
        period: Some(7),
    }
    .apply(base.clone());
    assert_eq!(changed.model, DeploymentModel::Cloud);
    assert_eq!(changed.period, 7);
    assert_eq!(changed.capex, base.capex);
}

#[test]
fn capex_that_overflows_under_perturbation_is_rejected() {
    // 7e28 자체는 Decimal 범위 안이지만 1.2배 하면 넘는다
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("huge.toml");
    let mut scenario = InvestmentScenario::sample_retail(DeploymentModel::Local);
    scenario.capex = "70000000000000000000000000000".parse().expect("decimal");
    config::save(&scenario, &path).expect("save");

    let err = config::load(&path).unwrap_err();
    match err {
        ConfigError::OutOfRange(e) => assert_eq!(
            e,
            OutOfRange {
                model: DeploymentModel::Local,
                stage: "roi_high_capex",
            }
        ),
        other => panic!("expected range error, got {other}"),
    }
}
