use thiserror::Error;
use tracing::info;

use crate::config::{self, ConfigError};
use crate::investment::{calculate_all, check_range, compare_deployments, OutOfRange};
use crate::report::{ComparisonReport, ResultReport};
use crate::ui_cli::{Cli, OutputFormat};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 시나리오 로드/저장 오류
    #[error("시나리오 오류: {0}")]
    Config(#[from] ConfigError),
    /// 결과 직렬화 오류
    #[error("결과 출력 오류: {0}")]
    Render(#[from] toml::ser::Error),
    /// 덮어쓰기 적용 후 범위를 넘는 시나리오
    #[error("시나리오 값 범위 오류: {0}")]
    OutOfRange(#[from] OutOfRange),
}

/// 시나리오를 읽어 계산하고 결과 문자열을 만든다.
pub fn run(cli: &Cli) -> Result<String, AppError> {
    let scenario = config::load_or_default(&cli.scenario)?;
    let scenario = cli.overrides().apply(scenario);
    check_range(&scenario)?;
    info!(
        name = %scenario.name,
        model = %scenario.model,
        period = scenario.period,
        compare = cli.compare,
        "running calculation"
    );

    let output = if cli.compare {
        let comparison = compare_deployments(&scenario);
        match cli.format {
            OutputFormat::Text => ComparisonReport {
                scenario: &scenario,
                comparison: &comparison,
            }
            .to_string(),
            OutputFormat::Toml => toml::to_string_pretty(&comparison)?,
        }
    } else {
        let result = calculate_all(&scenario);
        match cli.format {
            OutputFormat::Text => ResultReport {
                scenario: &scenario,
                result: &result,
            }
            .to_string(),
            OutputFormat::Toml => toml::to_string_pretty(&result)?,
        }
    };
    Ok(output)
}
