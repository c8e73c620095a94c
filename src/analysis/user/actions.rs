use super::super::engine::{ActionRule, ActionRuleSet};
use super::{SecurityPolicy, UserSnapshot};

// Registration order is the priority order shown to the operator: forced
// action, then missing second factor, then stale credential, then lock
// state, then failure count, then the terminal all-clear.
pub(super) fn action_rules(policy: &SecurityPolicy) -> ActionRuleSet<UserSnapshot> {
    let policy = *policy;
    ActionRuleSet::new(vec![
        ActionRule::new("force-password-change", 95, |user: &UserSnapshot| {
            user.must_change_password.then(|| {
                (
                    "Force a password change".to_string(),
                    "A mandatory password change is pending; force it now so the flagged credential stops circulating.".to_string(),
                )
            })
        })
        .with_label("Force change"),
        ActionRule::new("enable-two-factor", 90, |user: &UserSnapshot| {
            (!user.two_factor_enabled).then(|| {
                (
                    "Enable two-factor authentication".to_string(),
                    "Adding a second factor is the single largest score improvement available for this account.".to_string(),
                )
            })
        })
        .with_label("Enable 2FA"),
        ActionRule::new("rotate-password", 80, move |user: &UserSnapshot| {
            (user.password_age_days > policy.stale_rotation_days).then(|| {
                (
                    "Renew the password".to_string(),
                    format!(
                        "The password is {} day(s) old; schedule a rotation.",
                        user.password_age_days
                    ),
                )
            })
        })
        .with_label("Renew password"),
        ActionRule::new("unlock-account", 85, |user: &UserSnapshot| {
            user.locked.then(|| {
                (
                    "Unlock the account".to_string(),
                    "Review the lock reason and release the account if the holder is legitimate."
                        .to_string(),
                )
            })
        })
        .with_label("Unlock"),
        ActionRule::new("review-failed-logins", 75, move |user: &UserSnapshot| {
            (user.failed_logins > policy.failed_login_alert).then(|| {
                (
                    "Review failed sign-ins".to_string(),
                    format!(
                        "{} failed sign-in attempts on record; check for credential stuffing before they escalate.",
                        user.failed_logins
                    ),
                )
            })
        }),
        ActionRule::new("reactivate-account", 60, |user: &UserSnapshot| {
            (!user.active && !user.locked).then(|| {
                (
                    "Reactivate or archive".to_string(),
                    "The account is disabled; re-enable it or archive it to keep the directory clean.".to_string(),
                )
            })
        })
        .with_label("Reactivate"),
        ActionRule::new("security-checkup-clear", 100, move |user: &UserSnapshot| {
            (user.active
                && !user.locked
                && user.two_factor_enabled
                && !user.must_change_password
                && user.password_age_days <= policy.stale_rotation_days
                && user.failed_logins <= policy.failed_login_alert)
                .then(|| {
                    (
                        "No action needed".to_string(),
                        "Every security check passes; keep the current settings.".to_string(),
                    )
                })
        }),
    ])
}
