use crate::analysis::customer::{
    self, CustomerSnapshot, EngagementPolicy, LeadScore, RelationshipStage,
};
use crate::analysis::engine::Analyzer;
use crate::analysis::user::{self, SecurityPolicy, UserSnapshot};

pub(super) fn user_analyzer() -> Analyzer<UserSnapshot> {
    user::build_analyzer(&SecurityPolicy::default())
}

pub(super) fn customer_analyzer() -> Analyzer<CustomerSnapshot> {
    customer::build_analyzer(&EngagementPolicy::default())
}

pub(super) fn healthy_user() -> UserSnapshot {
    UserSnapshot {
        active: true,
        locked: false,
        two_factor_enabled: true,
        must_change_password: false,
        password_age_days: 10,
        failed_logins: 0,
        total_logins: 42,
    }
}

pub(super) fn lead_score(value: u8) -> LeadScore {
    LeadScore::new(value).expect("valid lead score")
}

pub(super) fn prospect(lead: u8) -> CustomerSnapshot {
    CustomerSnapshot {
        stage: RelationshipStage::Prospect,
        has_email: true,
        has_phone: true,
        total_revenue: 0,
        last_order_age_days: None,
        lead_score: lead_score(lead),
        open_opportunities: 0,
        open_opportunity_value: 0,
    }
}

pub(super) fn active_customer() -> CustomerSnapshot {
    CustomerSnapshot {
        stage: RelationshipStage::Active,
        has_email: true,
        has_phone: true,
        total_revenue: 18_400,
        last_order_age_days: Some(12),
        lead_score: lead_score(0),
        open_opportunities: 2,
        open_opportunity_value: 7_500,
    }
}

pub(super) fn insight_ids(result: &crate::analysis::AnalysisResult) -> Vec<&'static str> {
    result.insights.iter().map(|insight| insight.id).collect()
}

pub(super) fn action_ids(result: &crate::analysis::AnalysisResult) -> Vec<&'static str> {
    result.actions.iter().map(|action| action.id).collect()
}
