use account_pulse::analysis::user::build_analyzer;
use account_pulse::{analyze_user, InsightKind, SecurityPolicy, UserSnapshot};

fn sample_user() -> UserSnapshot {
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

#[test]
fn analysis_is_deterministic_for_equal_snapshots() {
    let user = sample_user();

    let first = analyze_user(&user);
    let second = analyze_user(&user.clone());

    assert_eq!(first, second);
}

#[test]
fn score_stays_within_bounds_across_the_field_space() {
    let analyzer = build_analyzer(&SecurityPolicy::default());

    for active in [false, true] {
        for locked in [false, true] {
            for two_factor in [false, true] {
                for must_change in [false, true] {
                    for age in [0, 30, 31, 90, 91, 4000] {
                        for failures in [0, 1, 5, 6, 250] {
                            let user = UserSnapshot {
                                active,
                                locked,
                                two_factor_enabled: two_factor,
                                must_change_password: must_change,
                                password_age_days: age,
                                failed_logins: failures,
                                total_logins: 7,
                            };
                            let result = analyzer.analyze(&user);
                            assert!(result.score <= 100, "score escaped bounds for {user:?}");
                        }
                    }
                }
            }
        }
    }
}

#[test]
fn compliant_account_yields_four_success_insights_and_a_perfect_score() {
    let result = analyze_user(&sample_user());

    assert_eq!(result.insights.len(), 4);
    assert!(result
        .insights
        .iter()
        .all(|insight| insight.kind == InsightKind::Success));
    assert_eq!(result.score, 100);
    assert_eq!(result.actions.len(), 1);
    assert_eq!(result.actions[0].id, "security-checkup-clear");
    assert_eq!(result.actions[0].confidence, 100);
}

#[test]
fn policy_thresholds_are_tunable() {
    let strict = build_analyzer(&SecurityPolicy {
        recent_rotation_days: 7,
        stale_rotation_days: 45,
        failed_login_alert: 2,
    });
    let mut user = sample_user();
    user.password_age_days = 60;
    user.failed_logins = 3;

    let default_view = analyze_user(&user);
    let strict_view = strict.analyze(&user);

    assert!(!default_view
        .insights
        .iter()
        .any(|insight| insight.id == "password-stale"));
    assert!(strict_view
        .insights
        .iter()
        .any(|insight| insight.id == "password-stale"));
    assert!(strict_view
        .insights
        .iter()
        .any(|insight| insight.id == "many-failed-logins"));
}

#[test]
fn results_serialize_for_the_presentation_layer() {
    let result = analyze_user(&sample_user());

    let json = serde_json::to_value(&result).expect("result serializes");
    assert_eq!(json["score"], 100);
    assert_eq!(json["insights"][0]["id"], "account-active");
    assert_eq!(json["insights"][0]["kind"], "success");
    // The all-clear action carries no UI label; the field is omitted.
    assert!(json["actions"][0].get("action_label").is_none());
}
