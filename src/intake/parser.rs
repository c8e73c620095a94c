use std::io::Read;

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Deserializer};

use crate::analysis::{
    CustomerSnapshot, LeadScore, MalformedSnapshot, RelationshipStage, UserSnapshot,
};

use super::{CustomerIntakeRecord, IntakeError, UserIntakeRecord};

#[derive(Debug, Deserialize)]
struct UserRow {
    #[serde(rename = "Username")]
    username: String,
    #[serde(rename = "Active")]
    active: String,
    #[serde(rename = "Locked")]
    locked: String,
    #[serde(rename = "Two Factor")]
    two_factor: String,
    #[serde(rename = "Must Change Password")]
    must_change_password: String,
    #[serde(rename = "Password Changed At")]
    password_changed_at: String,
    #[serde(rename = "Failed Logins")]
    failed_logins: u32,
    #[serde(rename = "Total Logins")]
    total_logins: u64,
}

pub(super) fn parse_users<R: Read>(
    reader: R,
    as_of: NaiveDate,
) -> Result<Vec<UserIntakeRecord>, IntakeError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut records = Vec::new();

    for (index, result) in csv_reader.deserialize::<UserRow>().enumerate() {
        let row = result?;
        // Header occupies the first line of the export.
        let line = index + 2;

        if row.username.is_empty() {
            return Err(IntakeError::Malformed {
                row: line,
                source: MalformedSnapshot::MissingField { field: "username" },
            });
        }
        let changed_on = parse_date(&row.password_changed_at).ok_or_else(|| {
            IntakeError::InvalidDate {
                row: line,
                value: row.password_changed_at.clone(),
            }
        })?;

        let snapshot = UserSnapshot {
            active: parse_flag(&row.active, line)?,
            locked: parse_flag(&row.locked, line)?,
            two_factor_enabled: parse_flag(&row.two_factor, line)?,
            must_change_password: parse_flag(&row.must_change_password, line)?,
            password_age_days: days_between(changed_on, as_of),
            failed_logins: row.failed_logins,
            total_logins: row.total_logins,
        };

        records.push(UserIntakeRecord {
            username: row.username,
            snapshot,
        });
    }

    Ok(records)
}

#[derive(Debug, Deserialize)]
struct CustomerRow {
    #[serde(rename = "Customer")]
    customer: String,
    #[serde(rename = "Stage")]
    stage: String,
    #[serde(rename = "Email", default, deserialize_with = "empty_string_as_none")]
    email: Option<String>,
    #[serde(rename = "Phone", default, deserialize_with = "empty_string_as_none")]
    phone: Option<String>,
    #[serde(rename = "Total Revenue")]
    total_revenue: u64,
    #[serde(
        rename = "Last Order",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    last_order: Option<String>,
    #[serde(rename = "Lead Score", default)]
    lead_score: Option<u8>,
    #[serde(rename = "Open Opportunities")]
    open_opportunities: u32,
    #[serde(rename = "Open Opportunity Value")]
    open_opportunity_value: u64,
}

pub(super) fn parse_customers<R: Read>(
    reader: R,
    as_of: NaiveDate,
) -> Result<Vec<CustomerIntakeRecord>, IntakeError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut records = Vec::new();

    for (index, result) in csv_reader.deserialize::<CustomerRow>().enumerate() {
        let row = result?;
        let line = index + 2;

        if row.customer.is_empty() {
            return Err(IntakeError::Malformed {
                row: line,
                source: MalformedSnapshot::MissingField { field: "customer" },
            });
        }
        let stage = parse_stage(&row.stage).ok_or_else(|| IntakeError::UnknownStage {
            row: line,
            value: row.stage.clone(),
        })?;
        let last_order_age_days = match row.last_order.as_deref() {
            Some(value) => {
                let ordered_on = parse_date(value).ok_or_else(|| IntakeError::InvalidDate {
                    row: line,
                    value: value.to_string(),
                })?;
                Some(days_between(ordered_on, as_of))
            }
            None => None,
        };
        // An absent lead score resolves to zero; it only carries meaning for
        // prospects, and zero is the explicit "no signal" value.
        let lead_score = LeadScore::new(row.lead_score.unwrap_or(0))
            .map_err(|source| IntakeError::Malformed { row: line, source })?;

        let snapshot = CustomerSnapshot {
            stage,
            has_email: row.email.is_some(),
            has_phone: row.phone.is_some(),
            total_revenue: row.total_revenue,
            last_order_age_days,
            lead_score,
            open_opportunities: row.open_opportunities,
            open_opportunity_value: row.open_opportunity_value,
        };

        records.push(CustomerIntakeRecord {
            customer_ref: row.customer,
            snapshot,
        });
    }

    Ok(records)
}

fn parse_flag(value: &str, row: usize) -> Result<bool, IntakeError> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "yes" | "y" | "1" => Ok(true),
        "false" | "no" | "n" | "0" => Ok(false),
        _ => Err(IntakeError::InvalidFlag {
            row,
            value: value.to_string(),
        }),
    }
}

fn parse_stage(value: &str) -> Option<RelationshipStage> {
    match value.to_ascii_lowercase().as_str() {
        "prospect" | "lead" => Some(RelationshipStage::Prospect),
        "active" | "customer" | "client" => Some(RelationshipStage::Active),
        "churned" | "former" | "lost" => Some(RelationshipStage::Churned),
        _ => None,
    }
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.naive_utc().date());
    }

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").ok()
}

// Dates ahead of the reference day clamp to zero rather than going negative.
fn days_between(earlier: NaiveDate, as_of: NaiveDate) -> u32 {
    (as_of - earlier).num_days().max(0) as u32
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
