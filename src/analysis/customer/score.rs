use super::super::engine::{Adjustment, ScoreModel};
use super::{CustomerSnapshot, EngagementPolicy, RelationshipStage};

const BASELINE: i16 = 50;

pub(super) fn score_model(policy: &EngagementPolicy) -> ScoreModel<CustomerSnapshot> {
    let policy = *policy;
    ScoreModel::new(
        BASELINE,
        vec![
            Adjustment::new("relationship-stage", |customer: &CustomerSnapshot| {
                match customer.stage {
                    RelationshipStage::Active => 10,
                    RelationshipStage::Churned => -20,
                    RelationshipStage::Prospect => 0,
                }
            }),
            Adjustment::new("contact-coverage", |customer: &CustomerSnapshot| {
                if customer.has_email && customer.has_phone {
                    10
                } else if !customer.has_email {
                    -10
                } else {
                    0
                }
            }),
            Adjustment::new("order-recency", move |customer: &CustomerSnapshot| {
                match customer.last_order_age_days {
                    Some(age) if age > policy.inactivity_days => -15,
                    Some(_) => 15,
                    None => -5,
                }
            }),
            Adjustment::new("lifetime-revenue", move |customer: &CustomerSnapshot| {
                if customer.total_revenue >= policy.key_account_revenue {
                    10
                } else {
                    0
                }
            }),
            Adjustment::new("lead-quality", move |customer: &CustomerSnapshot| {
                if customer.stage != RelationshipStage::Prospect {
                    0
                } else if customer.lead_score.value() >= policy.hot_lead_score {
                    10
                } else if customer.lead_score.value() < policy.warm_lead_score {
                    -10
                } else {
                    0
                }
            }),
            Adjustment::new("open-pipeline", |customer: &CustomerSnapshot| {
                if customer.open_opportunities > 0 {
                    10
                } else {
                    0
                }
            }),
        ],
    )
}
