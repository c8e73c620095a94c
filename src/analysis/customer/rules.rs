use super::super::engine::{InsightKind, Rule, RuleSet};
use super::{CustomerSnapshot, EngagementPolicy, RelationshipStage};

pub(super) fn insight_rules(policy: &EngagementPolicy) -> RuleSet<CustomerSnapshot> {
    let policy = *policy;
    RuleSet::new(vec![
        Rule::new(
            "churned-customer",
            InsightKind::Warning,
            |customer: &CustomerSnapshot| {
                (customer.stage == RelationshipStage::Churned).then(|| {
                    (
                        "Relationship churned".to_string(),
                        "The customer is classified as churned; commercial activity has ended."
                            .to_string(),
                    )
                })
            },
        ),
        Rule::new(
            "active-customer",
            InsightKind::Success,
            |customer: &CustomerSnapshot| {
                (customer.stage == RelationshipStage::Active).then(|| {
                    (
                        "Active customer".to_string(),
                        format!(
                            "The relationship is active with {} in lifetime revenue.",
                            customer.total_revenue
                        ),
                    )
                })
            },
        ),
        // The three lead bands only ever fire for prospects; one immutable
        // rule set serves every customer, the guard does the gating.
        Rule::new("hot-lead", InsightKind::Success, move |customer: &CustomerSnapshot| {
            (customer.stage == RelationshipStage::Prospect
                && customer.lead_score.value() >= policy.hot_lead_score)
                .then(|| {
                    (
                        "Hot lead".to_string(),
                        format!(
                            "Lead score {} puts this prospect in the hot band; it is ready for a sales push.",
                            customer.lead_score.value()
                        ),
                    )
                })
        }),
        Rule::new(
            "warm-lead",
            InsightKind::Suggestion,
            move |customer: &CustomerSnapshot| {
                (customer.stage == RelationshipStage::Prospect
                    && customer.lead_score.value() >= policy.warm_lead_score
                    && customer.lead_score.value() < policy.hot_lead_score)
                    .then(|| {
                        (
                            "Warm lead".to_string(),
                            format!(
                                "Lead score {} is promising; keep nurturing this prospect.",
                                customer.lead_score.value()
                            ),
                        )
                    })
            },
        ),
        Rule::new(
            "cold-lead",
            InsightKind::Warning,
            move |customer: &CustomerSnapshot| {
                (customer.stage == RelationshipStage::Prospect
                    && customer.lead_score.value() < policy.warm_lead_score)
                    .then(|| {
                        (
                            "Cold lead".to_string(),
                            format!(
                                "Lead score {} is low; this prospect shows little buying intent.",
                                customer.lead_score.value()
                            ),
                        )
                    })
            },
        ),
        Rule::new(
            "missing-email",
            InsightKind::Warning,
            |customer: &CustomerSnapshot| {
                (!customer.has_email).then(|| {
                    (
                        "No email address".to_string(),
                        "No email address is on file; most outreach channels are unusable."
                            .to_string(),
                    )
                })
            },
        ),
        Rule::new(
            "missing-phone",
            InsightKind::Suggestion,
            |customer: &CustomerSnapshot| {
                (!customer.has_phone).then(|| {
                    (
                        "No phone number".to_string(),
                        "No phone number is on file; add one to enable call campaigns.".to_string(),
                    )
                })
            },
        ),
        Rule::new(
            "contact-complete",
            InsightKind::Success,
            |customer: &CustomerSnapshot| {
                (customer.has_email && customer.has_phone).then(|| {
                    (
                        "Contact details complete".to_string(),
                        "Email and phone are both on file.".to_string(),
                    )
                })
            },
        ),
        Rule::new(
            "no-orders",
            InsightKind::Suggestion,
            |customer: &CustomerSnapshot| {
                (customer.stage != RelationshipStage::Prospect
                    && customer.last_order_age_days.is_none())
                .then(|| {
                    (
                        "No orders on record".to_string(),
                        "The relationship has no order history yet.".to_string(),
                    )
                })
            },
        ),
        Rule::new(
            "recent-order",
            InsightKind::Success,
            move |customer: &CustomerSnapshot| {
                customer
                    .last_order_age_days
                    .filter(|age| *age <= policy.inactivity_days)
                    .map(|age| {
                        (
                            "Recent order".to_string(),
                            format!("The latest order is {} day(s) old.", age),
                        )
                    })
            },
        ),
        Rule::new(
            "commercially-inactive",
            InsightKind::Warning,
            move |customer: &CustomerSnapshot| {
                customer
                    .last_order_age_days
                    .filter(|age| *age > policy.inactivity_days)
                    .map(|age| {
                        (
                            "Commercially inactive".to_string(),
                            format!(
                                "No order for {} day(s), past the {}-day inactivity window.",
                                age, policy.inactivity_days
                            ),
                        )
                    })
            },
        ),
        Rule::new(
            "key-account",
            InsightKind::Success,
            move |customer: &CustomerSnapshot| {
                (customer.total_revenue >= policy.key_account_revenue).then(|| {
                    (
                        "Key account".to_string(),
                        format!(
                            "Lifetime revenue of {} ranks this customer as a key account.",
                            customer.total_revenue
                        ),
                    )
                })
            },
        ),
        Rule::new(
            "open-pipeline",
            InsightKind::Suggestion,
            |customer: &CustomerSnapshot| {
                (customer.open_opportunities > 0).then(|| {
                    (
                        "Open pipeline".to_string(),
                        format!(
                            "{} open opportunity(ies) totaling {} await follow-up.",
                            customer.open_opportunities, customer.open_opportunity_value
                        ),
                    )
                })
            },
        ),
    ])
}
