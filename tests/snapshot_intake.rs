use account_pulse::intake::{import_customers, import_users, IntakeError};
use account_pulse::{analyze_customer, analyze_user, MalformedSnapshot, RelationshipStage};
use chrono::NaiveDate;

const USER_HEADER: &str =
    "Username,Active,Locked,Two Factor,Must Change Password,Password Changed At,Failed Logins,Total Logins";
const CUSTOMER_HEADER: &str =
    "Customer,Stage,Email,Phone,Total Revenue,Last Order,Lead Score,Open Opportunities,Open Opportunity Value";

fn as_of() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 2, 4).expect("valid date")
}

#[test]
fn user_export_rows_become_dated_snapshots() {
    let csv = format!(
        "{USER_HEADER}\namartin,yes,no,yes,no,2026-01-05,0,412\nlnguyen,true,false,false,true,2026-01-12T08:30:00Z,3,7\n"
    );

    let records = import_users(csv.as_bytes(), as_of()).expect("export parses");

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].username, "amartin");
    assert_eq!(records[0].snapshot.password_age_days, 30);
    assert!(records[0].snapshot.two_factor_enabled);
    assert_eq!(records[1].snapshot.password_age_days, 23);
    assert!(records[1].snapshot.must_change_password);
    assert_eq!(records[1].snapshot.failed_logins, 3);
}

#[test]
fn imported_users_analyze_deterministically() {
    let csv = format!("{USER_HEADER}\namartin,yes,no,yes,no,2026-01-25,0,412\n");

    let records = import_users(csv.as_bytes(), as_of()).expect("export parses");
    let snapshot = &records[0].snapshot;

    assert_eq!(analyze_user(snapshot), analyze_user(snapshot));
    assert_eq!(analyze_user(snapshot).score, 100);
}

#[test]
fn unrecognized_flag_fails_with_row_context() {
    let csv = format!("{USER_HEADER}\namartin,maybe,no,yes,no,2026-01-05,0,412\n");

    let error = import_users(csv.as_bytes(), as_of()).expect_err("flag must not parse");
    match error {
        IntakeError::InvalidFlag { row, value } => {
            assert_eq!(row, 2);
            assert_eq!(value, "maybe");
        }
        other => panic!("expected invalid flag, got {other}"),
    }
}

#[test]
fn missing_username_is_a_malformed_snapshot() {
    let csv = format!("{USER_HEADER}\n,yes,no,yes,no,2026-01-05,0,412\n");

    let error = import_users(csv.as_bytes(), as_of()).expect_err("row must be rejected");
    match error {
        IntakeError::Malformed { row, source } => {
            assert_eq!(row, 2);
            assert_eq!(source, MalformedSnapshot::MissingField { field: "username" });
        }
        other => panic!("expected malformed snapshot, got {other}"),
    }
}

#[test]
fn unparsable_rotation_date_is_rejected() {
    let csv = format!("{USER_HEADER}\namartin,yes,no,yes,no,last tuesday,0,412\n");

    let error = import_users(csv.as_bytes(), as_of()).expect_err("date must not parse");
    assert!(matches!(error, IntakeError::InvalidDate { row: 2, .. }));
}

#[test]
fn customer_export_rows_become_dated_snapshots() {
    let csv = format!(
        "{CUSTOMER_HEADER}\nACME-001,active,billing@acme.test,+1 555 0123,18400,2025-08-08,,2,7500\nNOVA-017,prospect,,,0,,85,1,12000\n"
    );

    let records = import_customers(csv.as_bytes(), as_of()).expect("export parses");

    assert_eq!(records.len(), 2);
    let acme = &records[0].snapshot;
    assert_eq!(records[0].customer_ref, "ACME-001");
    assert_eq!(acme.stage, RelationshipStage::Active);
    assert!(acme.has_email);
    assert!(acme.has_phone);
    // 2025-08-08 is exactly 180 days before the reference day: still inside
    // the inactivity window.
    assert_eq!(acme.last_order_age_days, Some(180));
    assert!(analyze_customer(acme)
        .insights
        .iter()
        .all(|insight| insight.id != "commercially-inactive"));

    let nova = &records[1].snapshot;
    assert_eq!(nova.stage, RelationshipStage::Prospect);
    assert!(!nova.has_email);
    assert_eq!(nova.last_order_age_days, None);
    assert_eq!(nova.lead_score.value(), 85);
    assert!(analyze_customer(nova)
        .insights
        .iter()
        .any(|insight| insight.id == "hot-lead"));
}

#[test]
fn day_after_the_window_is_dormant_end_to_end() {
    let csv = format!(
        "{CUSTOMER_HEADER}\nACME-001,active,billing@acme.test,+1 555 0123,18400,2025-08-07,,0,0\n"
    );

    let records = import_customers(csv.as_bytes(), as_of()).expect("export parses");
    let snapshot = &records[0].snapshot;

    assert_eq!(snapshot.last_order_age_days, Some(181));
    assert!(analyze_customer(snapshot)
        .insights
        .iter()
        .any(|insight| insight.id == "commercially-inactive"));
}

#[test]
fn out_of_range_lead_score_is_a_malformed_snapshot() {
    let csv = format!("{CUSTOMER_HEADER}\nNOVA-017,prospect,,,0,,250,0,0\n");

    let error = import_customers(csv.as_bytes(), as_of()).expect_err("lead score must be rejected");
    match error {
        IntakeError::Malformed { row, source } => {
            assert_eq!(row, 2);
            assert_eq!(
                source,
                MalformedSnapshot::LeadScoreOutOfRange { value: 250 }
            );
        }
        other => panic!("expected malformed snapshot, got {other}"),
    }
}

#[test]
fn unknown_stage_label_is_rejected() {
    let csv = format!("{CUSTOMER_HEADER}\nNOVA-017,galactic,,,0,,10,0,0\n");

    let error = import_customers(csv.as_bytes(), as_of()).expect_err("stage must be rejected");
    match error {
        IntakeError::UnknownStage { row, value } => {
            assert_eq!(row, 2);
            assert_eq!(value, "galactic");
        }
        other => panic!("expected unknown stage, got {other}"),
    }
}

#[test]
fn missing_columns_surface_as_csv_errors() {
    let csv = "Username,Active\namartin,yes\n";

    let error = import_users(csv.as_bytes(), as_of()).expect_err("truncated export");
    assert!(matches!(error, IntakeError::Csv(_)));
}
