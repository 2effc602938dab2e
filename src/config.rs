use std::fs;
use std::path::Path;

use thiserror::Error;
use tracing::{debug, info};

use crate::investment::{check_range, DeploymentModel, InvestmentScenario, OutOfRange};

/// 시나리오 파일 기본 경로.
pub const DEFAULT_SCENARIO_PATH: &str = "scenario.toml";

/// 시나리오 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 파일 입출력 오류
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// TOML 역직렬화 오류
    #[error("시나리오 파싱 오류: {0}")]
    Parse(#[from] toml::de::Error),
    /// TOML 직렬화 오류
    #[error("시나리오 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
    /// 계산 시 Decimal 범위를 넘는 입력
    #[error("시나리오 값 범위 오류: {0}")]
    OutOfRange(#[from] OutOfRange),
}

/// TOML 파일에서 시나리오를 읽는다. 계산 중 범위를 넘는 값이면 거부한다.
pub fn load(path: &Path) -> Result<InvestmentScenario, ConfigError> {
    let content = fs::read_to_string(path)?;
    let scenario: InvestmentScenario = toml::from_str(&content)?;
    check_range(&scenario)?;
    debug!(path = %path.display(), name = %scenario.name, "loaded scenario");
    Ok(scenario)
}

/// 시나리오 파일을 로드하거나, 없으면 예제 시나리오로 새로 만든다.
pub fn load_or_default(path: &Path) -> Result<InvestmentScenario, ConfigError> {
    if path.exists() {
        load(path)
    } else {
        let scenario = InvestmentScenario::sample_retail(DeploymentModel::Local);
        save(&scenario, path)?;
        info!(path = %path.display(), "created sample scenario file");
        Ok(scenario)
    }
}

/// 시나리오를 TOML 파일로 저장한다.
pub fn save(scenario: &InvestmentScenario, path: &Path) -> Result<(), ConfigError> {
    let content = toml::to_string_pretty(scenario)?;
    fs::write(path, content)?;
    Ok(())
}

/// 파일 값 위에 덮어쓸 선택 항목.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScenarioOverrides {
    pub model: Option<DeploymentModel>,
    pub period: Option<i32>,
}

impl ScenarioOverrides {
    /// 지정된 항목만 바꾼 시나리오를 돌려준다.
    pub fn apply(&self, scenario: InvestmentScenario) -> InvestmentScenario {
        let mut scenario = scenario;
        if let Some(model) = self.model {
            scenario.model = model;
        }
        if let Some(period) = self.period {
            scenario.period = period;
        }
        scenario
    }
}
