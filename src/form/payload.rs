/// Submission payload
///
/// The normalized document sent to the restaurant-creation endpoint.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::draft::RegistrationDraft;

/// Prefix of generated restaurant ids
pub const RESTAURANT_UUID_PREFIX: &str = "REST_";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestaurantPayload {
    pub restaurant_uuid: String,
    pub restaurant_name: String,
    pub restaurant_email: String,
    pub restaurant_password: String,
    pub restaurant_address: String,
    pub restaurant_phone_number: String,
    pub restaurant_type: String,
    pub restaurant_description: String,
    pub restaurant_image: String,
    pub restaurant_cgst: String,
    pub restaurant_sgst: String,
    pub restaurant_discount: String,
    pub restaurant_opening_time: String,
    pub restaurant_closing_time: String,
    pub food_categories: Vec<String>,
    #[serde(rename = "isVegOnly")]
    pub is_veg_only: bool,
    #[serde(rename = "isCashOnly")]
    pub is_cash_only: bool,
}

impl RestaurantPayload {
    /// Normalize a draft using the current time for a generated id
    pub fn from_draft(draft: &RegistrationDraft) -> Self {
        Self::from_draft_at(draft, Utc::now())
    }

    /// Normalize a draft
    ///
    /// - keeps an existing `restaurant_uuid`, otherwise assigns `REST_<epoch-millis>`
    /// - splits entered food categories into a trimmed, non-empty list
    /// - carries the percentage fields as strings
    pub fn from_draft_at(draft: &RegistrationDraft, now: DateTime<Utc>) -> Self {
        let restaurant_uuid = if draft.restaurant_uuid.is_empty() {
            generate_restaurant_uuid(now)
        } else {
            draft.restaurant_uuid.clone()
        };

        Self {
            restaurant_uuid,
            restaurant_name: draft.restaurant_name.clone(),
            restaurant_email: draft.restaurant_email.clone(),
            restaurant_password: draft.restaurant_password.clone(),
            restaurant_address: draft.restaurant_address.clone(),
            restaurant_phone_number: draft.restaurant_phone_number.clone(),
            restaurant_type: draft.restaurant_type.clone(),
            restaurant_description: draft.restaurant_description.clone(),
            restaurant_image: draft.restaurant_image.clone(),
            restaurant_cgst: draft.restaurant_cgst.clone(),
            restaurant_sgst: draft.restaurant_sgst.clone(),
            restaurant_discount: draft.restaurant_discount.clone(),
            restaurant_opening_time: draft.restaurant_opening_time.clone(),
            restaurant_closing_time: draft.restaurant_closing_time.clone(),
            food_categories: draft.food_categories.normalize(),
            is_veg_only: draft.is_veg_only,
            is_cash_only: draft.is_cash_only,
        }
    }
}

/// `REST_<epoch-millis>`
pub fn generate_restaurant_uuid(now: DateTime<Utc>) -> String {
    format!("{}{}", RESTAURANT_UUID_PREFIX, now.timestamp_millis())
}
