/// Messaging module for step-tracking notifications
///
/// Wizards with step tracking enabled publish a notification on every
/// successful step transition. Emission is a side effect only: best-effort,
/// never awaited, never retried. External listeners (analytics, diagnostics)
/// subscribe to the bus; the wizard itself never consumes its own events.
///
/// ## Usage
///
/// ```rust,ignore
/// let bus = EventBus::new();
/// let (rx, _id) = bus.subscribe();
///
/// let wizard = Wizard::builder(mapping)
///     .with_step_tracking(bus.clone())
///     .build()?;
///
/// wizard.to_step("contact");
/// while let Ok(event) = rx.try_recv() {
///     println!("{}: {}", event.name(), event.description());
/// }
/// ```

pub mod bus;
pub mod events;

// Re-export commonly used types
pub use bus::{EventBus, SubscriberId};
pub use events::WizardEvent;
