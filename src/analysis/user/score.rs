use super::super::engine::{Adjustment, ScoreModel};
use super::{SecurityPolicy, UserSnapshot};

const BASELINE: i16 = 50;

pub(super) fn score_model(policy: &SecurityPolicy) -> ScoreModel<UserSnapshot> {
    let policy = *policy;
    ScoreModel::new(
        BASELINE,
        vec![
            Adjustment::new("two-factor", |user: &UserSnapshot| {
                if user.two_factor_enabled {
                    20
                } else {
                    0
                }
            }),
            Adjustment::new("password-rotation", move |user: &UserSnapshot| {
                if user.password_age_days <= policy.recent_rotation_days {
                    15
                } else if user.password_age_days > policy.stale_rotation_days {
                    -10
                } else {
                    0
                }
            }),
            Adjustment::new("account-standing", |user: &UserSnapshot| {
                if user.locked {
                    -20
                } else if user.active {
                    10
                } else {
                    0
                }
            }),
            Adjustment::new("failed-logins", move |user: &UserSnapshot| {
                if user.failed_logins == 0 {
                    5
                } else if user.failed_logins > policy.failed_login_alert {
                    -15
                } else {
                    0
                }
            }),
            Adjustment::new("forced-password-change", |user: &UserSnapshot| {
                if user.must_change_password {
                    -10
                } else {
                    10
                }
            }),
        ],
    )
}
