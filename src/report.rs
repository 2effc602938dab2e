//! 계산 결과를 텍스트로 출력하기 위한 표시 형식.

use std::fmt;

use crate::investment::{CalculationResult, DeploymentComparison, DeploymentModel, InvestmentScenario};

/// 단일 시나리오 결과 보고서.
pub struct ResultReport<'a> {
    pub scenario: &'a InvestmentScenario,
    pub result: &'a CalculationResult,
}

impl fmt::Display for ResultReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "=== {} ({}, {}년) ===",
            self.scenario.name, self.scenario.model, self.scenario.period
        )?;
        write_summary(f, self.result)?;
        writeln!(f, "-- 민감도 분석 (±20%) --")?;
        for (key, roi) in &self.result.sensitivity {
            writeln!(f, "  {key:<24} {roi:>10} %")?;
        }
        Ok(())
    }
}

/// local/cloud 비교 보고서.
pub struct ComparisonReport<'a> {
    pub scenario: &'a InvestmentScenario,
    pub comparison: &'a DeploymentComparison,
}

impl fmt::Display for ComparisonReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "=== {} : local vs cloud ({}년) ===",
            self.scenario.name, self.scenario.period
        )?;
        for model in [DeploymentModel::Local, DeploymentModel::Cloud] {
            writeln!(f, "[{model}]")?;
            write_summary(f, self.comparison.result(model))?;
        }
        writeln!(f, "TCO 우위: {}", verdict(self.comparison.lower_tco))?;
        writeln!(f, "ROI 우위: {}", verdict(self.comparison.higher_roi))?;
        Ok(())
    }
}

fn write_summary(f: &mut fmt::Formatter<'_>, result: &CalculationResult) -> fmt::Result {
    writeln!(f, "TCO         : {}", result.tco)?;
    writeln!(f, "총 편익     : {}", result.total_benefits)?;
    writeln!(f, "ROI         : {} %", result.roi)?;
    writeln!(f, "회수기간    : {} 년", result.payback_period)
}

fn verdict(model: Option<DeploymentModel>) -> &'static str {
    match model {
        Some(model) => model.as_str(),
        None => "동일",
    }
}
