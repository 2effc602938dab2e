//! ±20% 섭동에 대한 ROI 민감도 분석.
//!
//! 각 케이스마다 시나리오를 복제해 입력 하나만 바꾼 뒤 TCO → ROI → 회수기간
//! 전체 파이프라인을 다시 계산하고, 그 결과의 ROI만 남긴다.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use tracing::debug;

use super::calculator::{calculate, AnalysisDepth};
use super::scenario::{DeploymentModel, InvestmentScenario};

/// 섭동 폭(±20%).
pub const SENSITIVITY_VARIATION: Decimal = Decimal::from_parts(20, 0, 0, false, 2);

/// 섭동 대상 입력 항목.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SensitivityDriver {
    AnnualSavings,
    AnnualRevenueGrowth,
    AnnualOpex,
    Capex,
    AnnualSubscription,
}

/// 섭동 방향.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shift {
    /// 1 - 변동폭
    Low,
    /// 1 + 변동폭
    High,
}

impl Shift {
    /// 입력값에 곱할 계수.
    pub fn factor(&self) -> Decimal {
        match self {
            Shift::Low => Decimal::ONE - SENSITIVITY_VARIATION,
            Shift::High => Decimal::ONE + SENSITIVITY_VARIATION,
        }
    }
}

/// 민감도 분석 케이스 하나. 결과 맵의 키와 1:1로 대응한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SensitivityCase {
    LowSavings,
    HighSavings,
    LowRevenue,
    HighRevenue,
    HighOpex,
    HighCapex,
    HighSubscription,
}

const LOCAL_CASES: [SensitivityCase; 6] = [
    SensitivityCase::LowSavings,
    SensitivityCase::HighSavings,
    SensitivityCase::LowRevenue,
    SensitivityCase::HighRevenue,
    SensitivityCase::HighOpex,
    SensitivityCase::HighCapex,
];

// cloud 쪽에는 도입비(implementation) 케이스가 없다.
const CLOUD_CASES: [SensitivityCase; 5] = [
    SensitivityCase::LowSavings,
    SensitivityCase::HighSavings,
    SensitivityCase::LowRevenue,
    SensitivityCase::HighRevenue,
    SensitivityCase::HighSubscription,
];

impl SensitivityCase {
    /// 배포 모델별로 수행하는 케이스 목록.
    pub fn for_model(model: DeploymentModel) -> &'static [SensitivityCase] {
        match model {
            DeploymentModel::Local => &LOCAL_CASES,
            DeploymentModel::Cloud => &CLOUD_CASES,
        }
    }

    /// 결과 맵에 쓰이는 키.
    pub fn key(&self) -> &'static str {
        match self {
            SensitivityCase::LowSavings => "roi_low_savings",
            SensitivityCase::HighSavings => "roi_high_savings",
            SensitivityCase::LowRevenue => "roi_low_revenue",
            SensitivityCase::HighRevenue => "roi_high_revenue",
            SensitivityCase::HighOpex => "roi_high_opex",
            SensitivityCase::HighCapex => "roi_high_capex",
            SensitivityCase::HighSubscription => "roi_high_subscription",
        }
    }

    pub fn driver(&self) -> SensitivityDriver {
        match self {
            SensitivityCase::LowSavings | SensitivityCase::HighSavings => {
                SensitivityDriver::AnnualSavings
            }
            SensitivityCase::LowRevenue | SensitivityCase::HighRevenue => {
                SensitivityDriver::AnnualRevenueGrowth
            }
            SensitivityCase::HighOpex => SensitivityDriver::AnnualOpex,
            SensitivityCase::HighCapex => SensitivityDriver::Capex,
            SensitivityCase::HighSubscription => SensitivityDriver::AnnualSubscription,
        }
    }

    pub fn shift(&self) -> Shift {
        match self {
            SensitivityCase::LowSavings | SensitivityCase::LowRevenue => Shift::Low,
            _ => Shift::High,
        }
    }

    /// 원본은 그대로 두고, 해당 입력만 계수를 곱한 복제본을 만든다.
    pub fn apply(&self, scenario: &InvestmentScenario) -> InvestmentScenario {
        let mut perturbed = scenario.clone();
        *self.driver_field(&mut perturbed) *= self.shift().factor();
        perturbed
    }

    /// `apply`와 같지만 계수를 곱하다 범위를 넘으면 None.
    pub(crate) fn checked_apply(&self, scenario: &InvestmentScenario) -> Option<InvestmentScenario> {
        let mut perturbed = scenario.clone();
        let field = self.driver_field(&mut perturbed);
        *field = field.checked_mul(self.shift().factor())?;
        Some(perturbed)
    }

    fn driver_field<'a>(&self, scenario: &'a mut InvestmentScenario) -> &'a mut Decimal {
        match self.driver() {
            SensitivityDriver::AnnualSavings => &mut scenario.annual_savings,
            SensitivityDriver::AnnualRevenueGrowth => &mut scenario.annual_revenue_growth,
            SensitivityDriver::AnnualOpex => &mut scenario.annual_opex,
            SensitivityDriver::Capex => &mut scenario.capex,
            SensitivityDriver::AnnualSubscription => &mut scenario.annual_subscription,
        }
    }
}

/// 케이스 키 → ROI[%] 맵을 만든다.
pub fn compute_sensitivity(scenario: &InvestmentScenario) -> BTreeMap<String, Decimal> {
    SensitivityCase::for_model(scenario.model)
        .iter()
        .map(|case| {
            let perturbed = case.apply(scenario);
            // 중첩 계산은 자체 민감도 맵을 비워 둔 채로 끝난다.
            let nested = calculate(&perturbed, AnalysisDepth::Nested);
            debug!(case = case.key(), roi = %nested.roi, "sensitivity case");
            (case.key().to_string(), nested.roi)
        })
        .collect()
}
