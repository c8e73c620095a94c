use super::super::engine::{InsightKind, Rule, RuleSet};
use super::{SecurityPolicy, UserSnapshot};

pub(super) fn insight_rules(policy: &SecurityPolicy) -> RuleSet<UserSnapshot> {
    let policy = *policy;
    RuleSet::new(vec![
        Rule::new("account-locked", InsightKind::Warning, |user: &UserSnapshot| {
            user.locked.then(|| {
                (
                    "Account locked".to_string(),
                    "Sign-in is blocked until an administrator releases the lock.".to_string(),
                )
            })
        }),
        Rule::new(
            "account-inactive",
            InsightKind::Warning,
            |user: &UserSnapshot| {
                (!user.active && !user.locked).then(|| {
                    (
                        "Account deactivated".to_string(),
                        "The account is disabled; sign-in is rejected until it is re-enabled."
                            .to_string(),
                    )
                })
            },
        ),
        Rule::new(
            "account-active",
            InsightKind::Success,
            |user: &UserSnapshot| {
                (user.active && !user.locked).then(|| {
                    (
                        "Account active".to_string(),
                        format!(
                            "The account is enabled and has signed in {} time(s).",
                            user.total_logins
                        ),
                    )
                })
            },
        ),
        Rule::new(
            "two-factor-enabled",
            InsightKind::Success,
            |user: &UserSnapshot| {
                user.two_factor_enabled.then(|| {
                    (
                        "Two-factor authentication enabled".to_string(),
                        "A second factor protects this account against credential theft."
                            .to_string(),
                    )
                })
            },
        ),
        Rule::new(
            "two-factor-missing",
            InsightKind::Warning,
            |user: &UserSnapshot| {
                (!user.two_factor_enabled).then(|| {
                    (
                        "Two-factor authentication missing".to_string(),
                        "Only a password protects this account; a stolen credential grants full access.".to_string(),
                    )
                })
            },
        ),
        Rule::new(
            "password-change-required",
            InsightKind::Warning,
            |user: &UserSnapshot| {
                user.must_change_password.then(|| {
                    (
                        "Password change pending".to_string(),
                        "A mandatory password change is outstanding; the current credential is flagged for replacement.".to_string(),
                    )
                })
            },
        ),
        Rule::new(
            "password-recent",
            InsightKind::Success,
            move |user: &UserSnapshot| {
                (user.password_age_days <= policy.recent_rotation_days).then(|| {
                    (
                        "Password recently rotated".to_string(),
                        format!(
                            "The password was rotated {} day(s) ago.",
                            user.password_age_days
                        ),
                    )
                })
            },
        ),
        Rule::new(
            "password-stale",
            InsightKind::Warning,
            move |user: &UserSnapshot| {
                (user.password_age_days > policy.stale_rotation_days).then(|| {
                    (
                        "Password stale".to_string(),
                        format!(
                            "The password is {} day(s) old, past the {}-day rotation window.",
                            user.password_age_days, policy.stale_rotation_days
                        ),
                    )
                })
            },
        ),
        Rule::new(
            "no-failed-logins",
            InsightKind::Success,
            |user: &UserSnapshot| {
                (user.failed_logins == 0).then(|| {
                    (
                        "No failed sign-ins".to_string(),
                        "No failed sign-in attempts are on record for this account.".to_string(),
                    )
                })
            },
        ),
        Rule::new(
            "some-failed-logins",
            InsightKind::Suggestion,
            move |user: &UserSnapshot| {
                (user.failed_logins > 0 && user.failed_logins <= policy.failed_login_alert).then(
                    || {
                        (
                            "Failed sign-ins observed".to_string(),
                            format!(
                                "{} failed sign-in attempt(s) recorded; worth keeping an eye on.",
                                user.failed_logins
                            ),
                        )
                    },
                )
            },
        ),
        Rule::new(
            "many-failed-logins",
            InsightKind::Warning,
            move |user: &UserSnapshot| {
                (user.failed_logins > policy.failed_login_alert).then(|| {
                    (
                        "Elevated failed sign-ins".to_string(),
                        format!(
                            "{} failed sign-in attempts recorded, above the alert threshold of {}.",
                            user.failed_logins, policy.failed_login_alert
                        ),
                    )
                })
            },
        ),
        Rule::new(
            "never-signed-in",
            InsightKind::Suggestion,
            |user: &UserSnapshot| {
                (user.active && !user.locked && user.total_logins == 0).then(|| {
                    (
                        "Never signed in".to_string(),
                        "The account is enabled but has never signed in.".to_string(),
                    )
                })
            },
        ),
    ])
}
