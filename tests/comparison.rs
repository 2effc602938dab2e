//! local/cloud 비교 테스트.
use invest_calc::{calculate_all, compare_deployments, DeploymentModel, InvestmentScenario};
use rust_decimal_macros::dec;

#[test]
fn compares_both_models_regardless_of_scenario_model() {
    let local = InvestmentScenario::sample_retail(DeploymentModel::Local);
    let cloud = local.with_model(DeploymentModel::Cloud);
    let a = compare_deployments(&local);
    let b = compare_deployments(&cloud);
    assert_eq!(a, b);
    assert_eq!(a.local, calculate_all(&local));
    assert_eq!(a.cloud, calculate_all(&cloud));
}

#[test]
fn sample_favours_cloud() {
    let cmp = compare_deployments(&InvestmentScenario::sample_retail(DeploymentModel::Local));
    assert_eq!(cmp.result(DeploymentModel::Local).tco, dec!(10850000));
    assert_eq!(cmp.result(DeploymentModel::Cloud).tco, dec!(8810000));
    assert_eq!(cmp.lower_tco, Some(DeploymentModel::Cloud));
    assert_eq!(cmp.higher_roi, Some(DeploymentModel::Cloud));
}

#[test]
fn equal_costs_give_no_winner() {
    let mut s = InvestmentScenario::sample_retail(DeploymentModel::Local);
    s.implementation = s.capex;
    s.annual_subscription = s.annual_opex;
    let cmp = compare_deployments(&s);
    assert_eq!(cmp.lower_tco, None);
    assert_eq!(cmp.higher_roi, None);
}
