//! Interactive terminal front-end for the wizard.
//!
//! Renders the step list, prompts every field of the current step and then
//! asks where to go next. All changes go through the command executor; the
//! success/failure notifications come back over the event bus.

use std::io::{self, BufRead, Write};

use crossbeam_channel::Receiver;

use crate::api::RestaurantApi;
use crate::form::{Field, FieldInput, FieldKind};
use crate::messaging::{Command, CommandExecutor, CommandResult, Event, EventBus};
use crate::wizard::{StepStatus, WizardStep};

/// Typing this clears a text field
const CLEAR_TOKEN: &str = "-";

/// Input is read line by line, so nothing is hidden while typing
const VISIBLE_INPUT_NOTICE: &str = "Input is not hidden; make sure nobody is watching the screen";

/// How the session ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    /// Registrations accepted by the platform during the session
    pub submitted: Vec<String>,

    /// True when the user quit explicitly, false when input ran out
    pub quit: bool,
}

/// Navigation choice at the bottom of a step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Continue,
    Back,
    Submit,
    Quit,
}

pub struct TerminalSession<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TerminalSession<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Run the wizard until the user quits or input ends
    ///
    /// Whatever is left in the draft when the session ends is discarded.
    pub fn run<A: RestaurantApi>(
        &mut self,
        executor: &mut CommandExecutor<A>,
    ) -> io::Result<SessionSummary> {
        let (events, subscription) = executor.event_bus().subscribe();
        let result = self.run_loop(executor, &events);
        executor.event_bus().unsubscribe(subscription);
        result
    }

    fn run_loop<A: RestaurantApi>(
        &mut self,
        executor: &mut CommandExecutor<A>,
        events: &Receiver<Event>,
    ) -> io::Result<SessionSummary> {
        let mut summary = SessionSummary {
            submitted: Vec::new(),
            quit: false,
        };

        loop {
            let step = executor.wizard().current_step();
            self.render_header(executor, step)?;

            for field in step.fields() {
                let Some(input) = self.prompt_field(executor, field)? else {
                    return Ok(summary);
                };
                if let Some(input) = input {
                    let result = executor.execute(Command::UpdateField { field, input });
                    if let CommandResult::Error(message) = result {
                        writeln!(self.output, "  ! {}", message)?;
                    }
                }
            }
            // Field updates are not worth showing
            EventBus::drain(events);

            let Some(action) = self.prompt_action(step)? else {
                return Ok(summary);
            };

            let result = match action {
                Action::Continue => executor.execute(Command::Advance),
                Action::Back => executor.execute(Command::Retreat),
                Action::Submit => executor.execute(Command::Submit),
                Action::Quit => {
                    summary.quit = true;
                    return Ok(summary);
                }
            };

            if let CommandResult::SuccessWithValue(restaurant_uuid) = &result {
                summary.submitted.push(restaurant_uuid.clone());
            }

            let mut notified = false;
            for event in EventBus::drain(events) {
                if event.is_notification() {
                    self.render_notification(&event)?;
                    notified = true;
                }
            }
            if let (CommandResult::Error(reason), false) = (&result, notified) {
                writeln!(self.output, "  ! {}", reason)?;
            }
        }
    }

    fn render_header<A: RestaurantApi>(
        &mut self,
        executor: &CommandExecutor<A>,
        step: WizardStep,
    ) -> io::Result<()> {
        let navigator = executor.wizard().navigator();

        writeln!(self.output)?;
        for candidate in WizardStep::all_steps() {
            let marker = match navigator.status_of(*candidate) {
                StepStatus::Completed => "[x]",
                StepStatus::Active => "[>]",
                StepStatus::Pending => "[ ]",
            };
            writeln!(
                self.output,
                "{} {}. {} - {}",
                marker,
                candidate.index() + 1,
                candidate.title(),
                candidate.description()
            )?;
        }

        writeln!(self.output)?;
        writeln!(self.output, "== {} ==", step.title())?;
        writeln!(
            self.output,
            "(Enter keeps the current value, '{}' clears it)",
            CLEAR_TOKEN
        )?;
        self.output.flush()
    }

    /// Prompt one field. Outer `None` means input ended; inner `None` means
    /// the value was kept.
    fn prompt_field<A: RestaurantApi>(
        &mut self,
        executor: &CommandExecutor<A>,
        field: Field,
    ) -> io::Result<Option<Option<FieldInput>>> {
        let draft = executor.wizard().draft();

        if let Some(help) = field.helper_text() {
            writeln!(self.output, "  ({})", help)?;
        }

        if field.is_checkbox() {
            let current = if draft.value_of(field) == "true" { "y" } else { "n" };
            loop {
                write!(self.output, "{} (y/n) [{}]: ", field.label(), current)?;
                self.output.flush()?;

                let Some(line) = self.read_line()? else {
                    return Ok(None);
                };
                match parse_yes_no(&line) {
                    Ok(None) => return Ok(Some(None)),
                    Ok(Some(checked)) => return Ok(Some(Some(FieldInput::Toggle(checked)))),
                    Err(()) => writeln!(self.output, "  ! Please answer y or n")?,
                }
            }
        }

        if field.kind() == FieldKind::Password {
            writeln!(self.output, "  ({})", VISIBLE_INPUT_NOTICE)?;
        }

        let current = draft.value_of(field);
        let shown = match field.kind() {
            FieldKind::Password if !current.is_empty() => "********".to_string(),
            _ => current,
        };
        let required = if field.is_required() { "*" } else { "" };
        write!(self.output, "{}{} [{}]: ", field.label(), required, shown)?;
        self.output.flush()?;

        let Some(line) = self.read_line()? else {
            return Ok(None);
        };
        let input = if line.is_empty() {
            None
        } else if line == CLEAR_TOKEN {
            Some(FieldInput::text(""))
        } else {
            Some(FieldInput::Text(line))
        };
        Ok(Some(input))
    }

    fn prompt_action(&mut self, step: WizardStep) -> io::Result<Option<Action>> {
        let mut choices = Vec::new();
        if !step.is_first() {
            choices.push("[b]ack");
        }
        if step.is_last() {
            choices.push("[s]ubmit");
        } else {
            choices.push("[c]ontinue");
        }
        choices.push("[q]uit");

        loop {
            write!(self.output, "{}: ", choices.join(" "))?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            let action = match line.trim().to_ascii_lowercase().as_str() {
                "c" | "continue" if !step.is_last() => Action::Continue,
                "b" | "back" if !step.is_first() => Action::Back,
                "s" | "submit" if step.is_last() => Action::Submit,
                "q" | "quit" => Action::Quit,
                _ => {
                    writeln!(self.output, "  ! Unknown choice")?;
                    continue;
                }
            };
            return Ok(Some(action));
        }
    }

    fn render_notification(&mut self, event: &Event) -> io::Result<()> {
        match event {
            Event::SubmissionSucceeded { .. } => {
                writeln!(self.output, "✓ {}", event.description())
            }
            _ => writeln!(self.output, "✗ {}", event.description()),
        }
    }

    /// Next line without its line ending; `None` at end of input
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}

/// `Ok(None)` keeps the current value
fn parse_yes_no(answer: &str) -> Result<Option<bool>, ()> {
    match answer.trim().to_ascii_lowercase().as_str() {
        "" => Ok(None),
        "y" | "yes" | "true" => Ok(Some(true)),
        "n" | "no" | "false" => Ok(Some(false)),
        _ => Err(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::registration::tests::FakeApi;
    use crate::wizard::RegistrationWizard;

    fn run_script(
        api: FakeApi,
        script: &str,
    ) -> (SessionSummary, String, CommandExecutor<FakeApi>) {
        let mut executor = CommandExecutor::new(RegistrationWizard::new(api), EventBus::new());
        let mut output = Vec::new();

        let summary = TerminalSession::new(script.as_bytes(), &mut output)
            .run(&mut executor)
            .unwrap();

        (summary, String::from_utf8(output).unwrap(), executor)
    }

    #[test]
    fn test_parse_yes_no() {
        assert_eq!(parse_yes_no(""), Ok(None));
        assert_eq!(parse_yes_no("Y"), Ok(Some(true)));
        assert_eq!(parse_yes_no("no"), Ok(Some(false)));
        assert_eq!(parse_yes_no("maybe"), Err(()));
    }

    #[test]
    fn test_quit_on_first_step() {
        let script = "Spice Route\n\n\n\nq\n";
        let (summary, output, executor) = run_script(FakeApi::accepting(), script);

        assert!(summary.quit);
        assert!(summary.submitted.is_empty());
        assert!(output.contains("== Basic Information =="));
        assert!(output.contains("[>] 1. Basic Information"));
        assert_eq!(executor.wizard().draft().restaurant_name, "Spice Route");
    }

    #[test]
    fn test_end_of_input_ends_session() {
        let (summary, _, _) = run_script(FakeApi::accepting(), "Spice Route\n");
        assert!(!summary.quit);
        assert!(summary.submitted.is_empty());
    }

    #[test]
    fn test_back_is_not_offered_on_first_step() {
        let script = "\n\n\n\nb\nq\n";
        let (summary, output, executor) = run_script(FakeApi::accepting(), script);

        assert!(summary.quit);
        assert!(output.contains("Unknown choice"));
        assert_eq!(executor.wizard().active_step(), 0);
    }

    #[test]
    fn test_checkbox_reprompts_on_bad_answer() {
        // Skip steps 1 and 2, then answer the business step
        let script = "\n\n\n\nc\n\n\n\n\nc\n\n\n\n\n\n\nmaybe\ny\nn\nq\n";
        let (_, output, executor) = run_script(FakeApi::accepting(), script);

        assert!(output.contains("Please answer y or n"));
        assert!(executor.wizard().draft().is_veg_only);
        assert!(!executor.wizard().draft().is_cash_only);
    }

    #[test]
    fn test_submit_with_missing_fields_shows_error() {
        let blank_step_two = "\n".repeat(8);
        let script = format!("\n\n\n\nc\n\n\n\n\nc\n{blank_step_two}s\n{blank_step_two}q\n");
        let (summary, output, executor) = run_script(FakeApi::accepting(), &script);

        assert!(summary.quit);
        assert!(summary.submitted.is_empty());
        assert!(output.contains("✗ Error: Please fill in all required fields: restaurant_name"));
        assert_eq!(executor.wizard().api().calls(), 0);
        assert_eq!(executor.wizard().active_step(), 2);
    }

    #[test]
    fn test_password_is_masked() {
        let script = "\n\n\n\nc\nowner@roma.it\nmargherita\n\n\nb\n\n\n\n\nc\n\n\n\n\nq\n";
        let (_, output, _) = run_script(FakeApi::accepting(), script);

        assert!(output.contains("Password* [********]"));
        assert!(!output.contains("[margherita]"));
        assert_eq!(output.matches(VISIBLE_INPUT_NOTICE).count(), 2);
    }
}
