use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::{ScenarioOverrides, DEFAULT_SCENARIO_PATH};
use crate::investment::DeploymentModel;

/// 투자 시나리오의 TCO/ROI/회수기간/민감도를 계산한다.
#[derive(Debug, Parser)]
#[command(name = "invest_calc_cli", version, about)]
pub struct Cli {
    /// 시나리오 TOML 파일. 없으면 예제 시나리오로 생성한다.
    #[arg(long, default_value = DEFAULT_SCENARIO_PATH)]
    pub scenario: PathBuf,
    /// 파일의 배포 모델 대신 사용할 모델
    #[arg(long, value_enum)]
    pub model: Option<ModelArg>,
    /// 파일의 분석 기간 대신 사용할 기간 [년]
    #[arg(long, allow_negative_numbers = true)]
    pub period: Option<i32>,
    /// local/cloud 두 모델을 나란히 비교한다
    #[arg(long)]
    pub compare: bool,
    /// 출력 형식
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

impl Cli {
    /// 명령행에서 지정한 덮어쓰기 항목.
    pub fn overrides(&self) -> ScenarioOverrides {
        ScenarioOverrides {
            model: self.model.map(DeploymentModel::from),
            period: self.period,
        }
    }
}

/// 명령행 배포 모델 선택지.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModelArg {
    Local,
    Cloud,
}

impl From<ModelArg> for DeploymentModel {
    fn from(value: ModelArg) -> Self {
        match value {
            ModelArg::Local => DeploymentModel::Local,
            ModelArg::Cloud => DeploymentModel::Cloud,
        }
    }
}

/// 결과 출력 형식.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// 사람이 읽는 표
    Text,
    /// TOML 문서
    Toml,
}
