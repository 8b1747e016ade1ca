//! Donation form draft and validation.
//!
//! SYSTEM CONTEXT
//! ==============
//! The new-donation page binds one signal per input. Submission converts the
//! raw strings into a [`NewDonation`] here so the rules stay testable without
//! a browser.

#[cfg(test)]
#[path = "donation_form_test.rs"]
mod donation_form_test;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::net::types::NewDonation;

pub const UNITS: [&str; 4] = ["kg", "items", "boxes", "litres"];
const MAX_NOTES_LEN: usize = 500;

/// Why a draft cannot be submitted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DonationFormError {
    #[error("Enter the type of food.")]
    MissingFoodType,
    #[error("Quantity must be a number greater than zero.")]
    InvalidQuantity,
    #[error("Choose a unit.")]
    InvalidUnit,
    #[error("Expiry date must be in YYYY-MM-DD format.")]
    InvalidExpiryDate,
    #[error("Enter a pickup address.")]
    MissingPickupAddress,
    #[error("Notes are limited to 500 characters.")]
    NotesTooLong,
}

/// Raw form input, persisted as-is while the user types.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DonationDraft {
    pub food_type: String,
    pub quantity: String,
    pub unit: String,
    pub expiry_date: String,
    pub pickup_address: String,
    pub notes: String,
}

impl Default for DonationDraft {
    fn default() -> Self {
        Self {
            food_type: String::new(),
            quantity: String::new(),
            unit: UNITS[0].to_owned(),
            expiry_date: String::new(),
            pickup_address: String::new(),
            notes: String::new(),
        }
    }
}

impl DonationDraft {
    /// Validate the draft, in form order, into a request body.
    ///
    /// # Errors
    ///
    /// Returns the first failing field rule.
    pub fn validate(&self) -> Result<NewDonation, DonationFormError> {
        let food_type = self.food_type.trim();
        if food_type.is_empty() {
            return Err(DonationFormError::MissingFoodType);
        }

        let quantity = self
            .quantity
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|q| q.is_finite() && *q > 0.0)
            .ok_or(DonationFormError::InvalidQuantity)?;

        let unit = self.unit.trim();
        if !UNITS.contains(&unit) {
            return Err(DonationFormError::InvalidUnit);
        }

        let expiry_date = NaiveDate::parse_from_str(self.expiry_date.trim(), "%Y-%m-%d")
            .map_err(|_| DonationFormError::InvalidExpiryDate)?;

        let pickup_address = self.pickup_address.trim();
        if pickup_address.is_empty() {
            return Err(DonationFormError::MissingPickupAddress);
        }

        let notes = self.notes.trim();
        if notes.chars().count() > MAX_NOTES_LEN {
            return Err(DonationFormError::NotesTooLong);
        }

        Ok(NewDonation {
            food_type: food_type.to_owned(),
            quantity,
            unit: unit.to_owned(),
            expiry_date,
            pickup_address: pickup_address.to_owned(),
            notes: (!notes.is_empty()).then(|| notes.to_owned()),
        })
    }
}

/// Render a quantity without a trailing `.0` for whole numbers.
///
/// Two decimals normally; small fractions keep their first significant digit
/// so they never collapse to `0`.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn format_quantity(quantity: f64, unit: &str) -> String {
    let amount = if quantity.fract() == 0.0 {
        format!("{quantity:.0}")
    } else {
        let leading_zeros = (-quantity.abs().log10()).ceil().max(0.0) as usize;
        let precision = (leading_zeros + 1).clamp(2, 12);
        format!("{quantity:.precision$}")
    };
    let amount = if amount.contains('.') { amount.trim_end_matches('0').trim_end_matches('.').to_owned() } else { amount };
    if unit.is_empty() { amount } else { format!("{amount} {unit}") }
}
