/// Event types emitted by wizards
///
/// Events represent things that have happened (past tense).
/// They are broadcast to all subscribers.
use crate::wizard::StepId;

/// Wizard notifications
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardEvent {
    /// The wizard moved to a new step
    StepChanged {
        /// Diagnostic label of the emitting wizard
        wizard: String,
        step: StepId,
        step_index: usize,
    },
}

impl WizardEvent {
    /// Get the wire name of the event, for external listeners keyed by name
    pub fn name(&self) -> &'static str {
        match self {
            WizardEvent::StepChanged { .. } => "wizard:step-change",
        }
    }

    /// Get a human-readable description of the event
    pub fn description(&self) -> String {
        match self {
            WizardEvent::StepChanged {
                wizard,
                step,
                step_index,
            } => {
                format!("[{}] step changed to '{}' (index {})", wizard, step, step_index)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_name() {
        let event = WizardEvent::StepChanged {
            wizard: "signup".to_string(),
            step: StepId::from("contact"),
            step_index: 1,
        };
        assert_eq!(event.name(), "wizard:step-change");
    }

    #[test]
    fn test_event_description() {
        let event = WizardEvent::StepChanged {
            wizard: "signup".to_string(),
            step: StepId::from("contact"),
            step_index: 1,
        };
        assert_eq!(
            event.description(),
            "[signup] step changed to 'contact' (index 1)"
        );
    }
}
