/// Registration wizard module
///
/// Walks a restaurant owner through three steps and submits the result.
///
/// ## Architecture
///
/// ```text
/// RegistrationWizard
///   ├── StepNavigator (current step, bounded advance/retreat)
///   ├── RegistrationDraft (every field, across all steps)
///   └── RestaurantApi (one POST on submit)
/// ```
///
/// ## Usage
///
/// ```rust,ignore
/// use restaurant_onboarding::{Field, FieldInput, HttpRestaurantApi, RegistrationWizard};
///
/// let mut wizard = RegistrationWizard::new(HttpRestaurantApi::new("https://api.example.com"));
///
/// wizard.update(Field::Name, FieldInput::text("Spice Route"))?;
/// wizard.advance();
/// // ... fill in contact and business details
/// wizard.advance();
///
/// match wizard.submit() {
///     Ok(receipt) => println!("{}", receipt.message),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
///
/// ## Steps
///
/// 1. **BasicInformation** - Name, type, description, image
/// 2. **ContactDetails** - Email, password, phone number, address
/// 3. **BusinessDetails** - Taxes, discount, opening hours, categories, payment

pub mod flow;
pub mod registration;
pub mod steps;

// Re-export commonly used types
pub use flow::{NavigationResult, StepNavigator};
pub use registration::{RegistrationWizard, SubmissionReceipt, SUCCESS_MESSAGE};
pub use steps::{StepStatus, WizardStep};
