/// Form field definitions
///
/// Every user-editable field of the registration draft, with the metadata a
/// front-end needs to render it.
use crate::wizard::WizardStep;

/// How a field is entered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Password,
    Multiline,
    Time,
    Checkbox,
}

/// Editable registration field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    // Basic information
    Name,
    Type,
    Description,
    Image,

    // Contact details
    Email,
    Password,
    PhoneNumber,
    Address,

    // Business details
    Cgst,
    Sgst,
    Discount,
    OpeningTime,
    ClosingTime,
    FoodCategories,
    VegOnly,
    CashOnly,
}

const ALL_FIELDS: [Field; 16] = [
    Field::Name,
    Field::Type,
    Field::Description,
    Field::Image,
    Field::Email,
    Field::Password,
    Field::PhoneNumber,
    Field::Address,
    Field::Cgst,
    Field::Sgst,
    Field::Discount,
    Field::OpeningTime,
    Field::ClosingTime,
    Field::FoodCategories,
    Field::VegOnly,
    Field::CashOnly,
];

// Checked in this order on submit; the missing-fields message follows it.
const REQUIRED_FIELDS: [Field; 13] = [
    Field::Name,
    Field::Email,
    Field::Password,
    Field::Address,
    Field::PhoneNumber,
    Field::Type,
    Field::Description,
    Field::Image,
    Field::Cgst,
    Field::Sgst,
    Field::Discount,
    Field::OpeningTime,
    Field::ClosingTime,
];

impl Field {
    /// Name of the field in the submitted JSON document
    pub fn name(&self) -> &'static str {
        match self {
            Field::Name => "restaurant_name",
            Field::Type => "restaurant_type",
            Field::Description => "restaurant_description",
            Field::Image => "restaurant_image",
            Field::Email => "restaurant_email",
            Field::Password => "restaurant_password",
            Field::PhoneNumber => "restaurant_phone_number",
            Field::Address => "restaurant_address",
            Field::Cgst => "restaurant_cgst",
            Field::Sgst => "restaurant_sgst",
            Field::Discount => "restaurant_discount",
            Field::OpeningTime => "restaurant_opening_time",
            Field::ClosingTime => "restaurant_closing_time",
            Field::FoodCategories => "food_categories",
            Field::VegOnly => "isVegOnly",
            Field::CashOnly => "isCashOnly",
        }
    }

    /// Look a field up by its wire name
    pub fn from_name(name: &str) -> Option<Field> {
        ALL_FIELDS.iter().copied().find(|field| field.name() == name)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Restaurant Name",
            Field::Type => "Restaurant Type",
            Field::Description => "Description",
            Field::Image => "Image URL",
            Field::Email => "Email",
            Field::Password => "Password",
            Field::PhoneNumber => "Phone Number",
            Field::Address => "Address",
            Field::Cgst => "CGST (%)",
            Field::Sgst => "SGST (%)",
            Field::Discount => "Discount (%)",
            Field::OpeningTime => "Opening Time",
            Field::ClosingTime => "Closing Time",
            Field::FoodCategories => "Food Categories",
            Field::VegOnly => "Veg Only Restaurant",
            Field::CashOnly => "Cash Only",
        }
    }

    pub fn helper_text(&self) -> Option<&'static str> {
        match self {
            Field::Name => Some("Enter your restaurant's official name"),
            Field::Type => Some("e.g., Fine Dining, Casual Dining, Fast Food"),
            Field::Description => Some("Describe your restaurant, cuisine, and specialties"),
            Field::Image => Some("URL of your restaurant's main image"),
            Field::PhoneNumber => Some("10 digits, no spaces or dashes"),
            Field::OpeningTime | Field::ClosingTime => Some("HH:MM"),
            Field::FoodCategories => Some("Enter categories separated by commas"),
            _ => None,
        }
    }

    /// Step on which the field is entered
    pub fn step(&self) -> WizardStep {
        match self {
            Field::Name | Field::Type | Field::Description | Field::Image => {
                WizardStep::BasicInformation
            }
            Field::Email | Field::Password | Field::PhoneNumber | Field::Address => {
                WizardStep::ContactDetails
            }
            _ => WizardStep::BusinessDetails,
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            Field::Email => FieldKind::Email,
            Field::Password => FieldKind::Password,
            Field::Description | Field::Address => FieldKind::Multiline,
            Field::OpeningTime | Field::ClosingTime => FieldKind::Time,
            Field::VegOnly | Field::CashOnly => FieldKind::Checkbox,
            _ => FieldKind::Text,
        }
    }

    pub fn is_checkbox(&self) -> bool {
        self.kind() == FieldKind::Checkbox
    }

    pub fn is_required(&self) -> bool {
        REQUIRED_FIELDS.contains(self)
    }

    pub fn all() -> &'static [Field] {
        &ALL_FIELDS
    }

    pub fn required_fields() -> &'static [Field] {
        &REQUIRED_FIELDS
    }

    /// Fields of a step, in display order
    pub fn for_step(step: WizardStep) -> Vec<Field> {
        ALL_FIELDS
            .iter()
            .copied()
            .filter(|field| field.step() == step)
            .collect()
    }

    /// Comma-separated wire names, as shown in validation messages
    pub fn join_names(fields: &[Field]) -> String {
        fields
            .iter()
            .map(Field::name)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
