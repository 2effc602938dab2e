//! 투자 계산 로직을 라이브러리로 분리하여 CLI 외의 호출자도 같은 API를 쓰게 한다.

pub mod app;
pub mod config;
pub mod investment;
pub mod report;
pub mod ui_cli;

pub use investment::{
    calculate_all, check_range, compare_deployments, compute_payback_period, compute_roi, compute_sensitivity,
    compute_tco, CalculationResult, DeploymentComparison, DeploymentModel, InvestmentScenario,
    RoiOutcome,
};
