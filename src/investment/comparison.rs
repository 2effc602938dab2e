use serde::{Deserialize, Serialize};

use super::calculator::{calculate_all, CalculationResult};
use super::scenario::{DeploymentModel, InvestmentScenario};

/// 같은 시나리오를 두 배포 모델로 계산한 비교 결과.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentComparison {
    /// TCO가 더 낮은 모델. 같으면 None
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lower_tco: Option<DeploymentModel>,
    /// ROI가 더 높은 모델. 같으면 None
    #[serde(skip_serializing_if = "Option::is_none")]
    pub higher_roi: Option<DeploymentModel>,
    pub local: CalculationResult,
    pub cloud: CalculationResult,
}

impl DeploymentComparison {
    /// 모델에 해당하는 결과.
    pub fn result(&self, model: DeploymentModel) -> &CalculationResult {
        match model {
            DeploymentModel::Local => &self.local,
            DeploymentModel::Cloud => &self.cloud,
        }
    }
}

/// 시나리오의 `model` 값과 무관하게 local/cloud 양쪽을 모두 계산한다.
pub fn compare_deployments(scenario: &InvestmentScenario) -> DeploymentComparison {
    let local = calculate_all(&scenario.with_model(DeploymentModel::Local));
    let cloud = calculate_all(&scenario.with_model(DeploymentModel::Cloud));
    let lower_tco = match local.tco.cmp(&cloud.tco) {
        std::cmp::Ordering::Less => Some(DeploymentModel::Local),
        std::cmp::Ordering::Greater => Some(DeploymentModel::Cloud),
        std::cmp::Ordering::Equal => None,
    };
    let higher_roi = match local.roi.cmp(&cloud.roi) {
        std::cmp::Ordering::Greater => Some(DeploymentModel::Local),
        std::cmp::Ordering::Less => Some(DeploymentModel::Cloud),
        std::cmp::Ordering::Equal => None,
    };
    DeploymentComparison {
        lower_tco,
        higher_roi,
        local,
        cloud,
    }
}
