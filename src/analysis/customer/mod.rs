//! Relationship health analysis for CRM customer records.

mod actions;
mod rules;
mod score;

use serde::{Deserialize, Serialize};

use super::engine::{AnalysisResult, Analyzer};
use super::MalformedSnapshot;

/// Lifecycle classification for a customer record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationshipStage {
    Prospect,
    Active,
    Churned,
}

impl RelationshipStage {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Prospect => "prospect",
            Self::Active => "active",
            Self::Churned => "churned",
        }
    }
}

/// Lead score constrained to `0..=100`.
///
/// Meaningful for prospects only; callers resolve it to zero for other
/// stages before building the snapshot.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct LeadScore(u8);

impl LeadScore {
    pub fn new(value: u8) -> Result<Self, MalformedSnapshot> {
        if value > 100 {
            return Err(MalformedSnapshot::LeadScoreOutOfRange { value });
        }
        Ok(Self(value))
    }

    pub const fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for LeadScore {
    type Error = MalformedSnapshot;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<LeadScore> for u8 {
    fn from(score: LeadScore) -> Self {
        score.0
    }
}

/// Read-only projection of one customer record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CustomerSnapshot {
    pub stage: RelationshipStage,
    pub has_email: bool,
    pub has_phone: bool,
    /// Lifetime revenue in whole currency units.
    pub total_revenue: u64,
    /// Days since the most recent order; `None` when no order is on record.
    pub last_order_age_days: Option<u32>,
    pub lead_score: LeadScore,
    /// Opportunities not yet in a terminal state.
    pub open_opportunities: u32,
    /// Summed amount across open opportunities, in whole currency units.
    pub open_opportunity_value: u64,
}

impl CustomerSnapshot {
    pub(crate) fn ordered_recently(&self, policy: &EngagementPolicy) -> bool {
        matches!(self.last_order_age_days, Some(age) if age <= policy.inactivity_days)
    }
}

/// Tunable thresholds for the relationship rubric. Defaults match the
/// reference rollout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngagementPolicy {
    /// Strictly more days than this without an order counts as dormant.
    pub inactivity_days: u32,
    /// Lead scores at or above this band as hot.
    pub hot_lead_score: u8,
    /// Lead scores at or above this (and below hot) band as warm.
    pub warm_lead_score: u8,
    /// Lifetime revenue at or above this marks a key account.
    pub key_account_revenue: u64,
}

impl Default for EngagementPolicy {
    fn default() -> Self {
        Self {
            inactivity_days: 180,
            hot_lead_score: 80,
            warm_lead_score: 40,
            key_account_revenue: 10_000,
        }
    }
}

/// Builds the customer-relationship analyzer. Registration happens here,
/// once; the returned analyzer is immutable and safe to share across
/// threads.
pub fn build_analyzer(policy: &EngagementPolicy) -> Analyzer<CustomerSnapshot> {
    Analyzer::new(
        rules::insight_rules(policy),
        score::score_model(policy),
        actions::action_rules(policy),
    )
}

/// Analyzes one customer record under the default policy.
pub fn analyze_customer(customer: &CustomerSnapshot) -> AnalysisResult {
    build_analyzer(&EngagementPolicy::default()).analyze(customer)
}
