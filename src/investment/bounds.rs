//! 계산 전 입력 범위 검사.
//!
//! `Decimal` 연산자는 표현 범위(약 ±7.9e28)를 넘으면 panic 하므로, 외부에서 읽은
//! 시나리오는 계산 전에 전체 파이프라인을 checked 연산으로 한 번 따라가 본다.
//! local/cloud 양쪽과 모든 민감도 케이스를 검사하므로 통과한 시나리오는 모델을
//! 바꾸거나 비교해도 안전하다.

use thiserror::Error;

use super::payback::checked_payback_period;
use super::roi::checked_roi;
use super::scenario::{DeploymentModel, InvestmentScenario};
use super::sensitivity::SensitivityCase;
use super::tco::checked_tco;

/// 계산 중 `Decimal` 범위를 넘는 시나리오.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{model} 모델 계산이 Decimal 범위를 벗어납니다 (단계: {stage})")]
pub struct OutOfRange {
    /// 범위를 넘은 배포 모델
    pub model: DeploymentModel,
    /// 기본 계산이면 "base", 민감도 케이스면 그 키
    pub stage: &'static str,
}

/// 시나리오를 local/cloud 양쪽과 모든 민감도 케이스로 계산해도 범위를 넘지 않는지 검사한다.
pub fn check_range(scenario: &InvestmentScenario) -> Result<(), OutOfRange> {
    for model in [scenario.model, scenario.model.other()] {
        let base = scenario.with_model(model);
        check_pipeline(&base).ok_or(OutOfRange {
            model,
            stage: "base",
        })?;
        for case in SensitivityCase::for_model(model) {
            case.checked_apply(&base)
                .as_ref()
                .and_then(check_pipeline)
                .ok_or(OutOfRange {
                    model,
                    stage: case.key(),
                })?;
        }
    }
    Ok(())
}

fn check_pipeline(scenario: &InvestmentScenario) -> Option<()> {
    let tco = checked_tco(scenario)?;
    checked_roi(scenario, tco)?;
    checked_payback_period(scenario, tco)?;
    Some(())
}
