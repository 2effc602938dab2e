use rust_decimal::Decimal;

use super::roi::round_result;
use super::scenario::InvestmentScenario;

/// 단순 회수기간[년]을 계산한다. 회수기간 = TCO / (절감액 + 매출 증가액)
///
/// 연간 순편익이 0이면 0을 반환한다. "회수 불가"와 "즉시 회수"가 구분되지 않는다.
pub fn compute_payback_period(scenario: &InvestmentScenario, tco: Decimal) -> Decimal {
    let annual_net_benefit = scenario.annual_net_benefit();
    if annual_net_benefit.is_zero() {
        return Decimal::ZERO;
    }
    round_result(tco / annual_net_benefit)
}

/// `compute_payback_period`와 같은 식을 오버플로 검사와 함께 계산한다.
pub(crate) fn checked_payback_period(scenario: &InvestmentScenario, tco: Decimal) -> Option<Decimal> {
    let annual_net_benefit = scenario
        .annual_savings
        .checked_add(scenario.annual_revenue_growth)?;
    if annual_net_benefit.is_zero() {
        return Some(Decimal::ZERO);
    }
    tco.checked_div(annual_net_benefit)
}
