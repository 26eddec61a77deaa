/// Registration form module
///
/// Holds the draft being filled in across the wizard steps and everything
/// needed to turn it into the payload the platform accepts.
///
/// ## Architecture
///
/// ```text
/// RegistrationDraft (mutable, one per wizard)
///   ├── update(Field, FieldInput)   merges a single field
///   ├── validation::validate()      fail-fast client checks
///   └── RestaurantPayload::from_draft()
///         one-way normalization at the submission boundary
/// ```

pub mod draft;
pub mod field;
pub mod payload;
pub mod validation;

pub use draft::{FieldInput, FoodCategories, RegistrationDraft};
pub use field::{Field, FieldKind};
pub use payload::RestaurantPayload;
pub use validation::validate;
