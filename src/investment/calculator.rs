use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::payback::compute_payback_period;
use super::roi::{compute_roi, RoiOutcome};
use super::scenario::InvestmentScenario;
use super::sensitivity::compute_sensitivity;
use super::tco::compute_tco;

/// 전체 계산 결과.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// 총소유비용
    pub tco: Decimal,
    /// 투자수익률 [%]
    pub roi: Decimal,
    /// 회수기간 [년], 연간 순편익이 0이면 0
    pub payback_period: Decimal,
    /// 기간 전체 편익
    pub total_benefits: Decimal,
    /// 민감도 케이스 키 → ROI [%]
    pub sensitivity: BTreeMap<String, Decimal>,
}

/// 파이프라인을 어디까지 수행할지 나타낸다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AnalysisDepth {
    /// 민감도 분석까지 수행
    Full,
    /// 민감도 분석 내부의 재계산. 민감도 맵은 비워 둔다.
    Nested,
}

/// TCO → ROI/편익 → 회수기간 → 민감도 순으로 계산해 결과를 조립한다.
pub fn calculate_all(scenario: &InvestmentScenario) -> CalculationResult {
    calculate(scenario, AnalysisDepth::Full)
}

pub(crate) fn calculate(scenario: &InvestmentScenario, depth: AnalysisDepth) -> CalculationResult {
    let tco = compute_tco(scenario);
    let RoiOutcome { benefits, roi } = compute_roi(scenario, tco);
    let payback_period = compute_payback_period(scenario, tco);
    let sensitivity = match depth {
        AnalysisDepth::Full => compute_sensitivity(scenario),
        AnalysisDepth::Nested => BTreeMap::new(),
    };
    debug!(
        scenario = %scenario.name,
        model = %scenario.model,
        ?depth,
        %tco,
        %roi,
        %payback_period,
        "calculated scenario"
    );
    CalculationResult {
        tco,
        roi,
        payback_period,
        total_benefits: benefits,
        sensitivity,
    }
}
