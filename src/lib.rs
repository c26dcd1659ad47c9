//! Multi-step wizard state machine with scoped state broadcasting.
//!
//! A wizard owns a current step identifier and a partial data record, and
//! exposes synchronous navigation operations over an ordered step table.
//! Rendering looks up the step view mapped to the current step and runs it
//! inside a [`WizardScope`], so helpers called from the view can reach the
//! same state without parameter threading.
//!
//! ```rust,ignore
//! use step_wizard::{StepMapping, Wizard, WizardScope};
//!
//! let mapping = StepMapping::new()
//!     .step("personal", |props| format!("step {} of {}", props.step_index() + 1, props.total_steps()))
//!     .step("contact", |props| format!("contact for {}", props.label()))
//!     .step("review", |_| "done".to_string());
//!
//! let wizard = Wizard::new(mapping)?;
//! wizard.next_step();
//! let output = wizard.render();
//! ```

pub mod data;
pub mod error;
pub mod messaging;
pub mod scope;
pub mod wizard;

// Re-export commonly used types
pub use data::WizardData;
pub use error::WizardError;
pub use messaging::{EventBus, SubscriberId, WizardEvent};
pub use scope::{ScopeGuard, WizardScope};
pub use wizard::{
    StepChange, StepId, StepMapping, StepOutput, StepProps, StepViewFn, Wizard, WizardBuilder,
    WizardFlow, WizardSnapshot,
};
