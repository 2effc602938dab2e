use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 배포 모델. 어떤 비용 공식을 적용할지 결정한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeploymentModel {
    /// 자체 인프라(CAPEX + 연간 OPEX)
    Local,
    /// 클라우드 구독(도입비 + 연간 구독료)
    Cloud,
}

impl DeploymentModel {
    /// 직렬화 및 화면 표시에 쓰는 소문자 이름.
    pub fn as_str(&self) -> &'static str {
        match self {
            DeploymentModel::Local => "local",
            DeploymentModel::Cloud => "cloud",
        }
    }

    /// 반대편 배포 모델.
    pub fn other(&self) -> DeploymentModel {
        match self {
            DeploymentModel::Local => DeploymentModel::Cloud,
            DeploymentModel::Cloud => DeploymentModel::Local,
        }
    }
}

impl std::fmt::Display for DeploymentModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 투자 시나리오 입력.
///
/// 계산 한 번 동안은 불변으로 취급하고, 민감도 분석에서는 복제본만 변형한다.
/// 금액 필드는 모두 같은 통화 단위라고 가정하며 단위 검증은 하지 않는다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvestmentScenario {
    /// 시나리오 이름(계산에는 쓰이지 않음)
    pub name: String,
    /// 배포 모델
    #[serde(rename = "type")]
    pub model: DeploymentModel,
    /// 초기 투자비(local)
    pub capex: Decimal,
    /// 연간 운영비(local)
    pub annual_opex: Decimal,
    /// 도입비(cloud)
    pub implementation: Decimal,
    /// 연간 구독료(cloud)
    pub annual_subscription: Decimal,
    /// 직원 교육비(공통, 1회성)
    pub training: Decimal,
    /// 분석 기간 [년]
    pub period: i32,
    /// 연간 비용 절감액
    pub annual_savings: Decimal,
    /// 연간 매출 증가액
    pub annual_revenue_growth: Decimal,
}

impl InvestmentScenario {
    /// 의류 매장 도입 사례 수치로 채운 예제 시나리오.
    ///
    /// CLI가 처음 실행될 때 생성하는 시나리오 파일의 내용이기도 하다.
    pub fn sample_retail(model: DeploymentModel) -> Self {
        Self {
            name: "StylePoint clothing store".to_string(),
            model,
            capex: Decimal::from(3_200_000),
            annual_opex: Decimal::from(1_450_000),
            implementation: Decimal::from(850_000),
            annual_subscription: Decimal::from(1_512_000),
            training: Decimal::from(400_000),
            period: 5,
            annual_savings: Decimal::from(2_800_000),
            annual_revenue_growth: Decimal::from(1_500_000),
        }
    }

    /// 배포 모델만 바꾼 복제본을 만든다.
    pub fn with_model(&self, model: DeploymentModel) -> Self {
        Self {
            model,
            ..self.clone()
        }
    }

    /// 분석 기간만 바꾼 복제본을 만든다.
    pub fn with_period(&self, period: i32) -> Self {
        Self {
            period,
            ..self.clone()
        }
    }

    /// 연간 순편익(절감액 + 매출 증가액).
    pub fn annual_net_benefit(&self) -> Decimal {
        self.annual_savings + self.annual_revenue_growth
    }

    /// 기간을 Decimal로 변환한 값.
    pub(crate) fn period_decimal(&self) -> Decimal {
        Decimal::from(self.period)
    }
}
