/// Registration draft
///
/// The accumulated, not-yet-submitted registration record. It is the single
/// source of truth across all wizard steps: navigating never touches it.
use crate::error::FormError;

use super::field::Field;

/// Food categories as entered, before normalization
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FoodCategories {
    /// Raw comma-separated input
    Entered(String),

    /// Already a sequence (the untouched default)
    Listed(Vec<String>),
}

impl FoodCategories {
    /// Ordered list of trimmed, non-empty categories
    pub fn normalize(&self) -> Vec<String> {
        match self {
            FoodCategories::Entered(raw) => raw
                .split(',')
                .map(str::trim)
                .filter(|category| !category.is_empty())
                .map(str::to_string)
                .collect(),
            FoodCategories::Listed(categories) => categories.clone(),
        }
    }

    /// Text shown in an input box
    pub fn display_value(&self) -> String {
        match self {
            FoodCategories::Entered(raw) => raw.clone(),
            FoodCategories::Listed(categories) => categories.join(", "),
        }
    }
}

impl Default for FoodCategories {
    fn default() -> Self {
        FoodCategories::Listed(Vec::new())
    }
}

/// A single input event for a field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldInput {
    /// Raw text, stored verbatim
    Text(String),

    /// Checkbox state
    Toggle(bool),
}

impl FieldInput {
    pub fn text(value: impl Into<String>) -> Self {
        FieldInput::Text(value.into())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationDraft {
    /// Assigned at submit time when empty
    pub restaurant_uuid: String,

    pub restaurant_name: String,
    pub restaurant_email: String,
    pub restaurant_password: String,
    pub restaurant_address: String,
    pub restaurant_phone_number: String,
    pub restaurant_type: String,
    pub restaurant_description: String,
    pub restaurant_image: String,

    // Percentages stay strings until they are sent
    pub restaurant_cgst: String,
    pub restaurant_sgst: String,
    pub restaurant_discount: String,

    pub restaurant_opening_time: String,
    pub restaurant_closing_time: String,

    pub food_categories: FoodCategories,
    pub is_veg_only: bool,
    pub is_cash_only: bool,
}

impl Default for RegistrationDraft {
    fn default() -> Self {
        Self {
            restaurant_uuid: String::new(),
            restaurant_name: String::new(),
            restaurant_email: String::new(),
            restaurant_password: String::new(),
            restaurant_address: String::new(),
            restaurant_phone_number: String::new(),
            restaurant_type: String::new(),
            restaurant_description: String::new(),
            restaurant_image: String::new(),
            restaurant_cgst: String::new(),
            restaurant_sgst: String::new(),
            restaurant_discount: String::new(),
            restaurant_opening_time: String::new(),
            restaurant_closing_time: String::new(),
            food_categories: FoodCategories::default(),
            is_veg_only: false,
            is_cash_only: true,
        }
    }
}

impl RegistrationDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge a single field into the draft
    ///
    /// Text input is stored as-is, with no trimming or numeric coercion.
    /// Checkbox fields only accept a toggle state and text fields only accept
    /// text; anything else leaves the draft untouched.
    pub fn update(&mut self, field: Field, input: FieldInput) -> Result<(), FormError> {
        match (field, input) {
            (Field::VegOnly, FieldInput::Toggle(checked)) => self.is_veg_only = checked,
            (Field::CashOnly, FieldInput::Toggle(checked)) => self.is_cash_only = checked,
            (Field::VegOnly | Field::CashOnly, FieldInput::Text(_)) => {
                return Err(FormError::InputKindMismatch {
                    field,
                    expected: "checkbox",
                });
            }
            (_, FieldInput::Toggle(_)) => {
                return Err(FormError::InputKindMismatch {
                    field,
                    expected: "text",
                });
            }
            (Field::FoodCategories, FieldInput::Text(value)) => {
                self.food_categories = FoodCategories::Entered(value);
            }
            (_, FieldInput::Text(value)) => {
                if let Some(slot) = self.text_slot_mut(field) {
                    *slot = value;
                }
            }
        }

        tracing::debug!("Updated field {}", field);
        Ok(())
    }

    /// Merge a field addressed by its wire name
    pub fn update_by_name(&mut self, name: &str, input: FieldInput) -> Result<(), FormError> {
        let field =
            Field::from_name(name).ok_or_else(|| FormError::UnknownField(name.to_string()))?;
        self.update(field, input)
    }

    /// Restore every field to its default value
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Current value of a field as text
    pub fn value_of(&self, field: Field) -> String {
        match field {
            Field::FoodCategories => self.food_categories.display_value(),
            Field::VegOnly => self.is_veg_only.to_string(),
            Field::CashOnly => self.is_cash_only.to_string(),
            _ => self.text_slot(field).cloned().unwrap_or_default(),
        }
    }

    /// Whether a field holds a value (non-empty for text fields)
    pub fn is_filled(&self, field: Field) -> bool {
        match field {
            Field::FoodCategories => !self.food_categories.normalize().is_empty(),
            Field::VegOnly | Field::CashOnly => true,
            _ => self.text_slot(field).is_some_and(|value| !value.is_empty()),
        }
    }

    fn text_slot(&self, field: Field) -> Option<&String> {
        let slot = match field {
            Field::Name => &self.restaurant_name,
            Field::Type => &self.restaurant_type,
            Field::Description => &self.restaurant_description,
            Field::Image => &self.restaurant_image,
            Field::Email => &self.restaurant_email,
            Field::Password => &self.restaurant_password,
            Field::PhoneNumber => &self.restaurant_phone_number,
            Field::Address => &self.restaurant_address,
            Field::Cgst => &self.restaurant_cgst,
            Field::Sgst => &self.restaurant_sgst,
            Field::Discount => &self.restaurant_discount,
            Field::OpeningTime => &self.restaurant_opening_time,
            Field::ClosingTime => &self.restaurant_closing_time,
            Field::FoodCategories | Field::VegOnly | Field::CashOnly => return None,
        };
        Some(slot)
    }

    fn text_slot_mut(&mut self, field: Field) -> Option<&mut String> {
        let slot = match field {
            Field::Name => &mut self.restaurant_name,
            Field::Type => &mut self.restaurant_type,
            Field::Description => &mut self.restaurant_description,
            Field::Image => &mut self.restaurant_image,
            Field::Email => &mut self.restaurant_email,
            Field::Password => &mut self.restaurant_password,
            Field::PhoneNumber => &mut self.restaurant_phone_number,
            Field::Address => &mut self.restaurant_address,
            Field::Cgst => &mut self.restaurant_cgst,
            Field::Sgst => &mut self.restaurant_sgst,
            Field::Discount => &mut self.restaurant_discount,
            Field::OpeningTime => &mut self.restaurant_opening_time,
            Field::ClosingTime => &mut self.restaurant_closing_time,
            Field::FoodCategories | Field::VegOnly | Field::CashOnly => return None,
        };
        Some(slot)
    }
}
