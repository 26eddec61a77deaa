/// Registration wizard
///
/// Ties the step navigator, the draft and the remote API together. One
/// instance owns all three; nothing here is shared.
use crate::api::{HttpRestaurantApi, RestaurantApi};
use crate::error::{FormError, SubmitError};
use crate::form::{validation, Field, FieldInput, RegistrationDraft, RestaurantPayload};

use super::flow::{NavigationResult, StepNavigator};
use super::steps::WizardStep;

pub const SUCCESS_MESSAGE: &str = "Restaurant created successfully!";

/// Outcome of an accepted submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionReceipt {
    pub restaurant_uuid: String,
    pub message: String,
}

pub struct RegistrationWizard<A = HttpRestaurantApi> {
    navigator: StepNavigator,
    draft: RegistrationDraft,
    api: A,
}

impl<A: RestaurantApi> RegistrationWizard<A> {
    /// Fresh wizard on the first step with a default draft
    pub fn new(api: A) -> Self {
        Self {
            navigator: StepNavigator::new(),
            draft: RegistrationDraft::new(),
            api,
        }
    }

    pub fn navigator(&self) -> &StepNavigator {
        &self.navigator
    }

    pub fn draft(&self) -> &RegistrationDraft {
        &self.draft
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn current_step(&self) -> WizardStep {
        self.navigator.current_step()
    }

    pub fn active_step(&self) -> usize {
        self.navigator.active_step()
    }

    pub fn advance(&mut self) -> NavigationResult {
        self.navigator.advance()
    }

    pub fn retreat(&mut self) -> NavigationResult {
        self.navigator.retreat()
    }

    /// Merge a field into the draft, whatever the current step
    pub fn update(&mut self, field: Field, input: FieldInput) -> Result<(), FormError> {
        self.draft.update(field, input)
    }

    pub fn update_by_name(&mut self, name: &str, input: FieldInput) -> Result<(), FormError> {
        self.draft.update_by_name(name, input)
    }

    pub fn reset_draft(&mut self) {
        self.draft.reset();
    }

    /// Validate, normalize and send the draft
    ///
    /// Only allowed on the last step. On success the wizard returns to the
    /// first step with a default draft; on any failure both are left as
    /// they were.
    pub fn submit(&mut self) -> Result<SubmissionReceipt, SubmitError> {
        let payload = self.prepare()?;
        self.dispatch(payload)
    }

    /// Everything before the network call: the step check, validation and
    /// normalization. Nothing is changed.
    pub fn prepare(&self) -> Result<RestaurantPayload, SubmitError> {
        if !self.navigator.is_last_step() {
            return Err(SubmitError::NotOnFinalStep);
        }

        if let Err(e) = validation::validate(&self.draft) {
            tracing::warn!("[submission] Rejected before sending: {}", e);
            return Err(e.into());
        }

        Ok(RestaurantPayload::from_draft(&self.draft))
    }

    /// Send a payload built by [`prepare`](Self::prepare) and reset the
    /// wizard once the platform accepts it
    pub fn dispatch(
        &mut self,
        payload: RestaurantPayload,
    ) -> Result<SubmissionReceipt, SubmitError> {
        tracing::info!(
            "[submission] Submitting {} ({})",
            payload.restaurant_uuid,
            payload.restaurant_name
        );

        if let Err(e) = self.api.create_restaurant(&payload) {
            if let SubmitError::Unexpected(source) = &e {
                tracing::error!("[submission] Unexpected failure: {:?}", source);
            }
            return Err(e);
        }

        tracing::info!("[submission] Created {}", payload.restaurant_uuid);
        self.navigator.reset();
        self.draft.reset();

        Ok(SubmissionReceipt {
            restaurant_uuid: payload.restaurant_uuid,
            message: SUCCESS_MESSAGE.to_string(),
        })
    }
}
