use rust_decimal::Decimal;

use super::scenario::{DeploymentModel, InvestmentScenario};

/// 총소유비용(TCO)을 계산한다.
/// - local: TCO = CAPEX + OPEX × 기간 + 교육비
/// - cloud: TCO = 도입비 + 구독료 × 기간 + 교육비
///
/// 음수나 0을 포함한 모든 입력을 그대로 받는다.
pub fn compute_tco(scenario: &InvestmentScenario) -> Decimal {
    let period = scenario.period_decimal();
    match scenario.model {
        DeploymentModel::Local => {
            scenario.capex + scenario.annual_opex * period + scenario.training
        }
        DeploymentModel::Cloud => {
            scenario.implementation + scenario.annual_subscription * period + scenario.training
        }
    }
}

/// `compute_tco`와 같은 식을 오버플로 검사와 함께 계산한다.
pub(crate) fn checked_tco(scenario: &InvestmentScenario) -> Option<Decimal> {
    let period = scenario.period_decimal();
    let (upfront, annual) = match scenario.model {
        DeploymentModel::Local => (scenario.capex, scenario.annual_opex),
        DeploymentModel::Cloud => (scenario.implementation, scenario.annual_subscription),
    };
    upfront
        .checked_add(annual.checked_mul(period)?)?
        .checked_add(scenario.training)
}
