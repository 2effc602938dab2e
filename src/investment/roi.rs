use rust_decimal::Decimal;

use super::scenario::InvestmentScenario;

/// 결과값의 소수 자릿수. ROI와 회수기간에 동일하게 적용한다.
pub const RESULT_DECIMAL_PLACES: u32 = 2;

/// ROI 계산 결과.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoiOutcome {
    /// 분석 기간 전체의 편익
    pub benefits: Decimal,
    /// 투자수익률 [%], 소수 둘째 자리
    pub roi: Decimal,
}

/// 편익과 ROI를 계산한다.
/// - 편익 = (절감액 + 매출 증가액) × 기간
/// - ROI = (편익 - TCO) / TCO × 100
///
/// TCO가 0이면 ROI는 0으로 둔다.
pub fn compute_roi(scenario: &InvestmentScenario, tco: Decimal) -> RoiOutcome {
    let benefits = scenario.annual_net_benefit() * scenario.period_decimal();
    let roi = if tco.is_zero() {
        Decimal::ZERO
    } else {
        (benefits - tco) / tco * Decimal::ONE_HUNDRED
    };
    RoiOutcome {
        benefits,
        roi: round_result(roi),
    }
}

/// `compute_roi`와 같은 식을 오버플로 검사와 함께 계산한다.
pub(crate) fn checked_roi(scenario: &InvestmentScenario, tco: Decimal) -> Option<Decimal> {
    let benefits = scenario
        .annual_savings
        .checked_add(scenario.annual_revenue_growth)?
        .checked_mul(scenario.period_decimal())?;
    if tco.is_zero() {
        return Some(Decimal::ZERO);
    }
    benefits
        .checked_sub(tco)?
        .checked_div(tco)?
        .checked_mul(Decimal::ONE_HUNDRED)
}

/// 은행가 반올림(half-to-even)으로 소수 둘째 자리까지 맞춘다.
pub(crate) fn round_result(value: Decimal) -> Decimal {
    value.round_dp(RESULT_DECIMAL_PLACES)
}
