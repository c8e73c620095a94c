//! Security health analysis for platform user accounts.

mod actions;
mod rules;
mod score;

use serde::{Deserialize, Serialize};

use super::engine::{AnalysisResult, Analyzer};

/// Read-only projection of one user account.
///
/// Every field the rules read is mandatory; the caller resolves defaults and
/// derives `password_age_days` against its own reference date before the
/// engine sees the snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserSnapshot {
    pub active: bool,
    pub locked: bool,
    pub two_factor_enabled: bool,
    pub must_change_password: bool,
    /// Days since the password was last rotated.
    pub password_age_days: u32,
    pub failed_logins: u32,
    pub total_logins: u64,
}

/// Tunable thresholds for the security rubric. Defaults match the reference
/// rollout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecurityPolicy {
    /// A rotation at most this many days old counts as recent.
    pub recent_rotation_days: u32,
    /// A rotation strictly older than this many days counts as stale.
    pub stale_rotation_days: u32,
    /// Strictly more failures than this selects the high-failure tier.
    pub failed_login_alert: u32,
}

impl Default for SecurityPolicy {
    fn default() -> Self {
        Self {
            recent_rotation_days: 30,
            stale_rotation_days: 90,
            failed_login_alert: 5,
        }
    }
}

/// Builds the user-security analyzer. Registration happens here, once; the
/// returned analyzer is immutable and safe to share across threads.
pub fn build_analyzer(policy: &SecurityPolicy) -> Analyzer<UserSnapshot> {
    Analyzer::new(
        rules::insight_rules(policy),
        score::score_model(policy),
        actions::action_rules(policy),
    )
}

/// Analyzes one account under the default policy.
pub fn analyze_user(user: &UserSnapshot) -> AnalysisResult {
    build_analyzer(&SecurityPolicy::default()).analyze(user)
}
