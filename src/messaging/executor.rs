//! Command executor
//!
//! Runs commands against the wizard and emits events on completion.
//! Commands are executed one at a time on the caller's thread.

use crate::api::RestaurantApi;
use crate::error::SubmitError;
use crate::wizard::{NavigationResult, RegistrationWizard, WizardStep};

use super::bus::EventBus;
use super::commands::{Command, CommandResult};
use super::events::Event;

/// Command executor that owns the wizard and publishes what happens to it
pub struct CommandExecutor<A: RestaurantApi> {
    wizard: RegistrationWizard<A>,
    event_bus: EventBus,
}

impl<A: RestaurantApi> CommandExecutor<A> {
    pub fn new(wizard: RegistrationWizard<A>, event_bus: EventBus) -> Self {
        Self { wizard, event_bus }
    }

    pub fn wizard(&self) -> &RegistrationWizard<A> {
        &self.wizard
    }

    pub fn event_bus(&self) -> &EventBus {
        &self.event_bus
    }

    /// Execute a command (blocking)
    pub fn execute(&mut self, command: Command) -> CommandResult {
        tracing::debug!("Executing command: {}", command.description());

        match command {
            Command::Advance => {
                let from = self.wizard.current_step();
                let result = self.wizard.advance();
                self.navigation_result(from, result)
            }
            Command::Retreat => {
                let from = self.wizard.current_step();
                let result = self.wizard.retreat();
                self.navigation_result(from, result)
            }
            Command::UpdateField { field, input } => match self.wizard.update(field, input) {
                Ok(()) => {
                    self.event_bus.publish(Event::FieldUpdated { field });
                    CommandResult::Success
                }
                Err(e) => CommandResult::Error(e.to_string()),
            },
            Command::Submit => self.submit(),
            Command::ResetDraft => {
                self.wizard.reset_draft();
                self.event_bus.publish(Event::DraftReset);
                CommandResult::Success
            }
        }
    }

    fn navigation_result(&self, from: WizardStep, result: NavigationResult) -> CommandResult {
        match result {
            NavigationResult::Moved(to) => {
                self.event_bus.publish(Event::StepChanged { from, to });
                CommandResult::Success
            }
            NavigationResult::Blocked { reason } => CommandResult::Error(reason),
        }
    }

    fn submit(&mut self) -> CommandResult {
        let from = self.wizard.current_step();

        let outcome = self.wizard.prepare().and_then(|payload| {
            self.event_bus.publish(Event::SubmissionStarted);
            self.wizard.dispatch(payload)
        });

        match outcome {
            Ok(receipt) => {
                self.event_bus.publish(Event::SubmissionSucceeded {
                    restaurant_uuid: receipt.restaurant_uuid.clone(),
                    message: receipt.message,
                });
                let to = self.wizard.current_step();
                if from != to {
                    self.event_bus.publish(Event::StepChanged { from, to });
                }
                self.event_bus.publish(Event::DraftReset);
                CommandResult::SuccessWithValue(receipt.restaurant_uuid)
            }
            Err(e) => {
                if !e.is_client_side() && !matches!(e, SubmitError::Rejected { .. }) {
                    tracing::error!("[submission] Failed: {}", e);
                }
                let message = e.to_string();
                self.event_bus.publish(Event::SubmissionFailed {
                    message: message.clone(),
                });
                CommandResult::Error(message)
            }
        }
    }
}
