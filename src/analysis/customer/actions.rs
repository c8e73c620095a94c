use super::super::engine::{ActionRule, ActionRuleSet};
use super::{CustomerSnapshot, EngagementPolicy, RelationshipStage};

// Registration order is the priority order shown to the account manager:
// contact-data gaps, then churn recovery, then dormancy, then lead work,
// then pipeline and expansion plays, then the terminal all-clear.
pub(super) fn action_rules(policy: &EngagementPolicy) -> ActionRuleSet<CustomerSnapshot> {
    let policy = *policy;
    ActionRuleSet::new(vec![
        ActionRule::new("collect-email", 90, |customer: &CustomerSnapshot| {
            (!customer.has_email).then(|| {
                (
                    "Collect an email address".to_string(),
                    "Without an email address no campaign can reach this customer; fill the gap first.".to_string(),
                )
            })
        })
        .with_label("Add email"),
        ActionRule::new("win-back", 85, |customer: &CustomerSnapshot| {
            (customer.stage == RelationshipStage::Churned).then(|| {
                (
                    "Launch a win-back campaign".to_string(),
                    "The relationship has churned; a targeted win-back offer is the remaining play.".to_string(),
                )
            })
        })
        .with_label("Win back"),
        ActionRule::new("re-engage-dormant", 80, move |customer: &CustomerSnapshot| {
            customer
                .last_order_age_days
                .filter(|age| *age > policy.inactivity_days)
                .map(|age| {
                    (
                        "Re-engage the account".to_string(),
                        format!(
                            "The last order is {} day(s) old; schedule a re-engagement touchpoint.",
                            age
                        ),
                    )
                })
        })
        .with_label("Re-engage"),
        ActionRule::new("follow-up-hot-lead", 88, move |customer: &CustomerSnapshot| {
            (customer.stage == RelationshipStage::Prospect
                && customer.lead_score.value() >= policy.hot_lead_score)
                .then(|| {
                    (
                        "Schedule a sales call".to_string(),
                        format!(
                            "Lead score {} is in the hot band; a direct call closes these.",
                            customer.lead_score.value()
                        ),
                    )
                })
        })
        .with_label("Call now"),
        ActionRule::new("nurture-cold-lead", 60, move |customer: &CustomerSnapshot| {
            (customer.stage == RelationshipStage::Prospect
                && customer.lead_score.value() < policy.warm_lead_score)
                .then(|| {
                    (
                        "Move to a nurture track".to_string(),
                        "Buying intent is low; drip content until the lead score recovers."
                            .to_string(),
                    )
                })
        }),
        ActionRule::new("advance-pipeline", 70, |customer: &CustomerSnapshot| {
            (customer.open_opportunities > 0).then(|| {
                (
                    "Advance open opportunities".to_string(),
                    format!(
                        "{} open opportunity(ies) worth {} are waiting on a next step.",
                        customer.open_opportunities, customer.open_opportunity_value
                    ),
                )
            })
        })
        .with_label("Review pipeline"),
        ActionRule::new("propose-expansion", 55, move |customer: &CustomerSnapshot| {
            (customer.stage == RelationshipStage::Active
                && customer.total_revenue >= policy.key_account_revenue
                && customer.open_opportunities == 0)
                .then(|| {
                    (
                        "Propose an expansion".to_string(),
                        "A key account with an empty pipeline is an opening for a cross-sell proposal.".to_string(),
                    )
                })
        }),
        ActionRule::new("relationship-healthy", 100, move |customer: &CustomerSnapshot| {
            (customer.stage == RelationshipStage::Active
                && customer.has_email
                && customer.has_phone
                && customer.ordered_recently(&policy)
                && customer.open_opportunities == 0
                && customer.total_revenue < policy.key_account_revenue)
                .then(|| {
                    (
                        "No immediate action".to_string(),
                        "The relationship is healthy; maintain the current cadence.".to_string(),
                    )
                })
        }),
    ])
}
