//! Wire DTOs for the food-donation backend.
//!
//! DESIGN
//! ======
//! Field names mirror the backend's JSON. Identifiers are normalized to
//! strings because the backend may emit numeric or string ids, and optional
//! fields default so older payloads still decode.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use chrono::NaiveDate;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use crate::session::Role;

// =============================================================================
// AUTH
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// Successful login/registration response.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
}

fn default_token_type() -> String {
    "bearer".to_owned()
}

// =============================================================================
// DONATIONS
// =============================================================================

/// Lifecycle of a donation as reported by the backend.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DonationStatus {
    #[default]
    Pending,
    Claimed,
    Collected,
    Delivered,
    Cancelled,
    #[serde(other)]
    Unknown,
}

impl DonationStatus {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            DonationStatus::Pending => "Pending",
            DonationStatus::Claimed => "Claimed",
            DonationStatus::Collected => "Collected",
            DonationStatus::Delivered => "Delivered",
            DonationStatus::Cancelled => "Cancelled",
            DonationStatus::Unknown => "Unknown",
        }
    }

    /// Whether a food bank may still claim the donation.
    #[must_use]
    pub fn is_claimable(self) -> bool {
        matches!(self, DonationStatus::Pending)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Donation {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub food_type: String,
    pub quantity: f64,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub expiry_date: Option<NaiveDate>,
    #[serde(default)]
    pub pickup_address: String,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub status: DonationStatus,
    #[serde(default)]
    pub donor_name: Option<String>,
    #[serde(default)]
    pub foodbank_name: Option<String>,
    /// Creation timestamp as sent by the backend.
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Body of `POST /api/donations`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewDonation {
    pub food_type: String,
    pub quantity: f64,
    pub unit: String,
    pub expiry_date: NaiveDate,
    pub pickup_address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

// =============================================================================
// STATISTICS, SERVICES, EVENTS
// =============================================================================

/// Platform-wide totals.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Statistics {
    pub total_donations: u64,
    pub total_quantity_kg: f64,
    pub meals_provided: u64,
    pub active_donors: u64,
    pub active_volunteers: u64,
    pub foodbanks: u64,
}

/// Support service offered to individuals (meal program, pantry, shelter).
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ServiceListing {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub provider: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub hours: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

/// Volunteer event (sorting shift, delivery run, drive).
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Event {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub starts_at: Option<String>,
    #[serde(default)]
    pub ends_at: Option<String>,
    #[serde(default)]
    pub volunteers_needed: Option<u32>,
}

// =============================================================================
// ERRORS
// =============================================================================

/// Error envelope returned by the backend on failure.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ErrorEnvelope {
    pub detail: ErrorDetail,
}

/// `detail` is either a message or a list of field validation failures.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ErrorDetail {
    Message(String),
    Fields(Vec<FieldError>),
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct FieldError {
    pub msg: String,
    #[serde(default)]
    pub loc: Vec<serde_json::Value>,
}

impl ErrorDetail {
    /// Flatten the detail into a single user-facing line.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            ErrorDetail::Message(msg) => msg.clone(),
            ErrorDetail::Fields(fields) => fields
                .iter()
                .map(|f| match f.loc.last().and_then(serde_json::Value::as_str) {
                    Some(field) => format!("{field}: {}", f.msg),
                    None => f.msg.clone(),
                })
                .collect::<Vec<_>>()
                .join("; "),
        }
    }
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) if n.is_i64() || n.is_u64() => Ok(n.to_string()),
        _ => Err(D::Error::custom("expected string or integer id")),
    }
}
