//! Entity health analysis: insight rules, composite scoring, and suggested
//! actions over immutable snapshots.
//!
//! Two instantiations of the generic engine ship with the crate: a
//! user-security variant and a customer-relationship variant. Each domain
//! module owns its snapshot type, its tunable policy, and its three rule
//! lists; the engine in [`engine`] stays agnostic of both.

pub mod customer;
pub mod engine;
pub mod user;

#[cfg(test)]
mod tests;

pub use customer::{
    analyze_customer, CustomerSnapshot, EngagementPolicy, LeadScore, RelationshipStage,
};
pub use engine::{
    ActionRule, ActionRuleSet, Adjustment, AnalysisResult, Analyzer, Insight, InsightKind, Rule,
    RuleSet, ScoreComponent, ScoreModel, SuggestedAction,
};
pub use user::{analyze_user, SecurityPolicy, UserSnapshot};

/// Contract violation while constructing a snapshot.
///
/// A snapshot that reaches the engine is well-formed by type; this error is
/// raised at the construction boundary (intake, [`LeadScore::new`]) and is
/// never silently defaulted away.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MalformedSnapshot {
    #[error("required field `{field}` is missing")]
    MissingField { field: &'static str },
    #[error("lead score {value} is outside 0..=100")]
    LeadScoreOutOfRange { value: u8 },
}
