//! Deterministic health scoring and insight generation for ERP user
//! accounts and CRM customer records.
//!
//! One analysis call evaluates an immutable snapshot through three
//! independent stages: ordered insight rules, a clamped integer score, and
//! priority-ordered suggested actions. [`analyze_user`] and
//! [`analyze_customer`] are the entry points under the default policies;
//! [`intake`] turns CSV exports into validated snapshots.

pub mod analysis;
pub mod config;
pub mod error;
pub mod intake;
pub mod telemetry;

pub use analysis::{
    analyze_customer, analyze_user, AnalysisResult, CustomerSnapshot, EngagementPolicy, Insight,
    InsightKind, LeadScore, MalformedSnapshot, RelationshipStage, SecurityPolicy, SuggestedAction,
    UserSnapshot,
};
pub use error::AppError;
