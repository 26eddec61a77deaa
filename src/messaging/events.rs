/// Event types for the wizard
///
/// Events represent things that have happened (past tense).
/// They are broadcast to all subscribers.
use crate::form::Field;
use crate::wizard::WizardStep;

/// Wizard events
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// The current step changed
    StepChanged { from: WizardStep, to: WizardStep },

    /// A field of the draft was updated
    FieldUpdated { field: Field },

    /// A submission passed the client checks and is being sent
    SubmissionStarted,

    /// The platform accepted the registration
    SubmissionSucceeded {
        restaurant_uuid: String,
        message: String,
    },

    /// The submission failed; `message` is what the user should see
    SubmissionFailed { message: String },

    /// The draft was restored to its defaults
    DraftReset,
}

impl Event {
    /// Get a human-readable description of the event
    pub fn description(&self) -> String {
        match self {
            Event::StepChanged { from, to } => format!("Step changed: {} -> {}", from, to),
            Event::FieldUpdated { field } => format!("Field updated: {}", field),
            Event::SubmissionStarted => "Submission started".to_string(),
            Event::SubmissionSucceeded { message, .. } => message.clone(),
            Event::SubmissionFailed { message } => format!("Error: {}", message),
            Event::DraftReset => "Draft reset".to_string(),
        }
    }

    /// Whether the event should be surfaced to the user as a notification
    pub fn is_notification(&self) -> bool {
        matches!(
            self,
            Event::SubmissionSucceeded { .. } | Event::SubmissionFailed { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_description() {
        let event = Event::StepChanged {
            from: WizardStep::BasicInformation,
            to: WizardStep::ContactDetails,
        };
        assert_eq!(
            event.description(),
            "Step changed: Basic Information -> Contact Details"
        );

        let event = Event::SubmissionFailed {
            message: "Email already registered".to_string(),
        };
        assert_eq!(event.description(), "Error: Email already registered");
        assert!(event.is_notification());
    }

    #[test]
    fn test_field_updates_are_not_notifications() {
        let event = Event::FieldUpdated { field: Field::Name };
        assert!(!event.is_notification());
        assert_eq!(event.description(), "Field updated: restaurant_name");
    }
}
