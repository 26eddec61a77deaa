/// Client-side submission checks
///
/// Checks run in a fixed order and the first violation wins, so the user
/// always sees one actionable message at a time.
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ValidationError;

use super::draft::RegistrationDraft;
use super::field::Field;

pub const MIN_PASSWORD_LENGTH: usize = 8;
pub const PHONE_NUMBER_DIGITS: usize = 10;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

/// Validate a draft before it is normalized and sent
pub fn validate(draft: &RegistrationDraft) -> Result<(), ValidationError> {
    let missing = missing_fields(draft);
    if !missing.is_empty() {
        return Err(ValidationError::MissingFields(missing));
    }

    if !is_valid_email(&draft.restaurant_email) {
        return Err(ValidationError::InvalidEmail);
    }

    if !is_valid_password(&draft.restaurant_password) {
        return Err(ValidationError::PasswordTooShort);
    }

    if !is_valid_phone_number(&draft.restaurant_phone_number) {
        return Err(ValidationError::InvalidPhoneNumber);
    }

    Ok(())
}

/// Required fields that are still empty, in check order
pub fn missing_fields(draft: &RegistrationDraft) -> Vec<Field> {
    Field::required_fields()
        .iter()
        .copied()
        .filter(|field| !draft.is_filled(*field))
        .collect()
}

/// `local@domain.tld` shape; no whitespace or extra `@` in any part
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

pub fn is_valid_password(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_LENGTH
}

/// Exactly ten ASCII digits, no separators
pub fn is_valid_phone_number(phone: &str) -> bool {
    phone.len() == PHONE_NUMBER_DIGITS && phone.bytes().all(|b| b.is_ascii_digit())
}
