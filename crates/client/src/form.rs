//! Submission form as typed by a user, and its coercion into the API
//! request body.

use std::str::FromStr;

use chrono::NaiveDate;
use luxury_core::asset::AssetType;
use luxury_core::submission::{AssetSubmitRequest, ANONYMOUS_SUBMITTER};
use rust_decimal::Decimal;

use crate::client::ClientError;

/// Raw form fields. Every field is a string, exactly as entered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionForm {
    pub asset_type: String,
    pub brand: String,
    pub model: String,
    pub year: String,
    pub description: String,
    pub purchase_price: String,
    /// `YYYY-MM-DD`.
    pub purchase_date: String,
    pub serial_number: String,
    pub total_supply: String,
    pub price_per_share: String,
    pub submitted_by: String,
}

impl Default for SubmissionForm {
    fn default() -> Self {
        Self {
            asset_type: AssetType::Watch.as_str().to_string(),
            brand: String::new(),
            model: String::new(),
            year: String::new(),
            description: String::new(),
            purchase_price: String::new(),
            purchase_date: String::new(),
            serial_number: String::new(),
            total_supply: String::new(),
            price_per_share: String::new(),
            submitted_by: String::new(),
        }
    }
}

impl SubmissionForm {
    /// Coerce into the POST body.
    ///
    /// Empty optional fields become `None`, numeric fields are parsed, and a
    /// blank submitter becomes `"anonymous"`. Malformed numbers or dates are
    /// rejected here rather than sent.
    pub fn to_request(&self) -> Result<AssetSubmitRequest, ClientError> {
        Ok(AssetSubmitRequest {
            asset_type: AssetType::from(self.asset_type.trim()),
            brand: self.brand.clone(),
            model: self.model.clone(),
            year: parse_optional("year", &self.year)?,
            description: optional_text(&self.description),
            purchase_price: parse_optional::<Decimal>("purchasePrice", &self.purchase_price)?,
            purchase_date: parse_optional::<NaiveDate>("purchaseDate", &self.purchase_date)?,
            serial_number: optional_text(&self.serial_number),
            total_supply: parse_optional::<Decimal>("totalSupply", &self.total_supply)?,
            price_per_share: parse_optional::<Decimal>("pricePerShare", &self.price_per_share)?,
            submitted_by: Some(
                optional_text(&self.submitted_by)
                    .unwrap_or_else(|| ANONYMOUS_SUBMITTER.to_string()),
            ),
        })
    }
}

fn optional_text(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn parse_optional<T>(field: &'static str, raw: &str) -> Result<Option<T>, ClientError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<T>()
        .map(Some)
        .map_err(|e| ClientError::InvalidField {
            field,
            message: format!("'{trimmed}' ({e})"),
        })
}
