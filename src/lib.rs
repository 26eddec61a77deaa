//! Restaurant onboarding wizard.
//!
//! Collects a restaurant's basic information, contact details and business
//! details across three steps, validates them and submits a single JSON
//! payload to the platform's restaurant-creation endpoint.

pub mod api;
pub mod config;
pub mod error;
pub mod form;
pub mod messaging;
pub mod terminal;
pub mod wizard;

pub use api::{HttpRestaurantApi, RestaurantApi};
pub use config::Config;
pub use error::{ConfigError, FormError, SubmitError, ValidationError};
pub use form::{Field, FieldInput, FoodCategories, RegistrationDraft, RestaurantPayload};
pub use wizard::{NavigationResult, RegistrationWizard, StepNavigator, WizardStep};
