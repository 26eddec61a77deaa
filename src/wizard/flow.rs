/// Step navigation
///
/// Moves strictly linearly through the wizard steps. There is no skipping
/// and no jumping to an arbitrary step.
use super::steps::{StepStatus, WizardStep};

/// Navigation result
#[derive(Debug, Clone, PartialEq)]
pub enum NavigationResult {
    /// Navigation succeeded, now on new step
    Moved(WizardStep),

    /// Navigation blocked at a boundary; the step is unchanged
    Blocked { reason: String },
}

/// Step navigator
#[derive(Debug, Clone, Default)]
pub struct StepNavigator {
    current: WizardStep,
}

impl StepNavigator {
    /// Create a navigator on the first step
    pub fn new() -> Self {
        Self::default()
    }

    /// Get current step
    pub fn current_step(&self) -> WizardStep {
        self.current
    }

    /// Current step index, always in `0..WizardStep::total_steps()`
    pub fn active_step(&self) -> usize {
        self.current.index()
    }

    /// Navigate to next step
    pub fn advance(&mut self) -> NavigationResult {
        match self.current.next() {
            Some(next_step) => {
                tracing::debug!("Step {} -> {}", self.current, next_step);
                self.current = next_step;
                NavigationResult::Moved(next_step)
            }
            None => NavigationResult::Blocked {
                reason: "Already at last step".to_string(),
            },
        }
    }

    /// Navigate to previous step
    pub fn retreat(&mut self) -> NavigationResult {
        match self.current.previous() {
            Some(prev_step) => {
                tracing::debug!("Step {} -> {}", self.current, prev_step);
                self.current = prev_step;
                NavigationResult::Moved(prev_step)
            }
            None => NavigationResult::Blocked {
                reason: "Already at first step".to_string(),
            },
        }
    }

    /// Back to the first step
    pub fn reset(&mut self) {
        self.current = WizardStep::default();
    }

    /// Check if can go back
    pub fn can_go_back(&self) -> bool {
        self.current.previous().is_some()
    }

    /// Check if can go forward
    pub fn can_go_forward(&self) -> bool {
        self.current.next().is_some()
    }

    /// Submission is only offered on the last step
    pub fn is_last_step(&self) -> bool {
        self.current.is_last()
    }

    pub fn status_of(&self, step: WizardStep) -> StepStatus {
        match step.index().cmp(&self.current.index()) {
            std::cmp::Ordering::Less => StepStatus::Completed,
            std::cmp::Ordering::Equal => StepStatus::Active,
            std::cmp::Ordering::Greater => StepStatus::Pending,
        }
    }

    /// Completion progress (0.0-1.0), counting steps behind the current one
    pub fn progress(&self) -> f32 {
        self.current.index() as f32 / WizardStep::total_steps() as f32
    }
}
