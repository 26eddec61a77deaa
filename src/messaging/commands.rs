/// Command types for the wizard
///
/// Commands represent requests to perform actions (imperative).
/// They are executed by the command executor.
use crate::form::{Field, FieldInput};

/// Wizard commands
#[derive(Debug, Clone)]
pub enum Command {
    /// Move to the next step
    Advance,

    /// Move to the previous step
    Retreat,

    /// Merge one field into the draft
    UpdateField { field: Field, input: FieldInput },

    /// Validate and send the draft
    Submit,

    /// Discard everything entered so far
    ResetDraft,
}

/// Result of command execution
#[derive(Debug, PartialEq)]
pub enum CommandResult {
    /// Command executed successfully
    Success,

    /// Command executed with a specific result
    SuccessWithValue(String),

    /// Command failed with an error
    Error(String),
}

impl CommandResult {
    pub fn is_success(&self) -> bool {
        !matches!(self, CommandResult::Error(_))
    }
}

impl Command {
    /// Get a human-readable description of the command
    pub fn description(&self) -> String {
        match self {
            Command::Advance => "Advance to next step".to_string(),
            Command::Retreat => "Go back to previous step".to_string(),
            Command::UpdateField { field, input } => match (field.kind(), input) {
                (crate::form::FieldKind::Password, _) => format!("Update field: {}", field),
                (_, FieldInput::Toggle(checked)) => {
                    format!("Update field: {} = {}", field, checked)
                }
                (_, FieldInput::Text(_)) => format!("Update field: {}", field),
            },
            Command::Submit => "Submit registration".to_string(),
            Command::ResetDraft => "Reset draft".to_string(),
        }
    }
}
