/// Wizard step definitions
///
/// Defines the three steps of the registration wizard.
use crate::form::Field;

/// Wizard step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WizardStep {
    /// Restaurant name, type, and basic details
    #[default]
    BasicInformation,

    /// Contact information and address
    ContactDetails,

    /// Tax, timing, and payment information
    BusinessDetails,
}

/// Where a step stands relative to the current one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    Completed,
    Active,
    Pending,
}

impl WizardStep {
    /// Get step title
    pub fn title(&self) -> &'static str {
        match self {
            WizardStep::BasicInformation => "Basic Information",
            WizardStep::ContactDetails => "Contact Details",
            WizardStep::BusinessDetails => "Business Details",
        }
    }

    /// Get step description
    pub fn description(&self) -> &'static str {
        match self {
            WizardStep::BasicInformation => "Restaurant name, type, and basic details",
            WizardStep::ContactDetails => "Contact information and address",
            WizardStep::BusinessDetails => "Tax, timing, and payment information",
        }
    }

    /// Get step index (0-indexed)
    pub fn index(&self) -> usize {
        match self {
            WizardStep::BasicInformation => 0,
            WizardStep::ContactDetails => 1,
            WizardStep::BusinessDetails => 2,
        }
    }

    pub fn from_index(index: usize) -> Option<WizardStep> {
        Self::all_steps().get(index).copied()
    }

    /// Get total number of steps
    pub fn total_steps() -> usize {
        3
    }

    /// Check if this is the first step
    pub fn is_first(&self) -> bool {
        matches!(self, WizardStep::BasicInformation)
    }

    /// Check if this is the last step
    pub fn is_last(&self) -> bool {
        matches!(self, WizardStep::BusinessDetails)
    }

    /// Get next step
    pub fn next(&self) -> Option<WizardStep> {
        match self {
            WizardStep::BasicInformation => Some(WizardStep::ContactDetails),
            WizardStep::ContactDetails => Some(WizardStep::BusinessDetails),
            WizardStep::BusinessDetails => None,
        }
    }

    /// Get previous step
    pub fn previous(&self) -> Option<WizardStep> {
        match self {
            WizardStep::BasicInformation => None,
            WizardStep::ContactDetails => Some(WizardStep::BasicInformation),
            WizardStep::BusinessDetails => Some(WizardStep::ContactDetails),
        }
    }

    /// Fields entered on this step, in display order
    pub fn fields(&self) -> Vec<Field> {
        Field::for_step(*self)
    }

    /// Get all steps in order
    pub fn all_steps() -> &'static [WizardStep] {
        &[
            WizardStep::BasicInformation,
            WizardStep::ContactDetails,
            WizardStep::BusinessDetails,
        ]
    }
}

impl std::fmt::Display for WizardStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_navigation() {
        let step = WizardStep::BasicInformation;
        assert!(step.is_first());
        assert!(!step.is_last());

        let next = step.next().unwrap();
        assert_eq!(next, WizardStep::ContactDetails);

        let last = WizardStep::BusinessDetails;
        assert!(last.is_last());
        assert!(last.next().is_none());
    }

    #[test]
    fn test_step_indices() {
        assert_eq!(WizardStep::BasicInformation.index(), 0);
        assert_eq!(WizardStep::BusinessDetails.index(), 2);
        assert_eq!(WizardStep::total_steps(), 3);

        for step in WizardStep::all_steps() {
            assert_eq!(WizardStep::from_index(step.index()), Some(*step));
        }
        assert_eq!(WizardStep::from_index(3), None);
    }

    #[test]
    fn test_previous_navigation() {
        let step = WizardStep::ContactDetails;
        assert_eq!(step.previous(), Some(WizardStep::BasicInformation));
        assert_eq!(WizardStep::BasicInformation.previous(), None);
    }

    #[test]
    fn test_every_field_belongs_to_one_step() {
        let total: usize = WizardStep::all_steps()
            .iter()
            .map(|step| step.fields().len())
            .sum();
        assert_eq!(total, Field::all().len());
    }
}
