/// Messaging module for Event/Command architecture
///
/// - **Commands**: requests from a front-end (advance, update a field, submit)
/// - **Events**: what happened as a result, broadcast to every subscriber
///
/// ## Architecture
///
/// ```text
/// ┌───────────┐   Command    ┌──────────┐   Event    ┌───────────┐
/// │ Front-end │ ───────────> │ Executor │ ─────────> │ Event Bus │
/// │ (terminal)│              │ (wizard) │            │           │
/// └───────────┘              └──────────┘            └───────────┘
///       ▲                                                  │
///       └──────────────── notifications ───────────────────┘
/// ```
///
/// ## Usage
///
/// ```rust,ignore
/// let bus = EventBus::new();
/// let (rx, _id) = bus.subscribe();
///
/// let mut executor = CommandExecutor::new(wizard, bus);
/// executor.execute(Command::Submit);
///
/// for event in EventBus::drain(&rx) {
///     if event.is_notification() {
///         println!("{}", event.description());
///     }
/// }
/// ```

pub mod bus;
pub mod commands;
pub mod events;
pub mod executor;

// Re-export commonly used types
pub use bus::{EventBus, SubscriberId};
pub use commands::{Command, CommandResult};
pub use events::Event;
pub use executor::CommandExecutor;
