/// Wizard module
///
/// A multi-step wizard over an ordered table of step views.
///
/// ## Architecture
///
/// ```text
/// Wizard<V>
///   ├── StepMapping<V> (ordered table StepId → step view)
///   ├── WizardFlow (shared handle: current step, data record)
///   │     └── navigation (next_step, prev_step, to_step,
///   │                     update_data, reset_data)
///   └── render() → StepOutput<V>, inside a WizardScope
/// ```
///
/// ## Usage
///
/// ```rust,ignore
/// use step_wizard::{StepMapping, Wizard, WizardData};
///
/// let mapping = StepMapping::new()
///     .step("personal", render_personal)
///     .step("contact", render_contact)
///     .step("review", render_review);
///
/// let wizard = Wizard::builder(mapping)
///     .with_label("signup")
///     .with_on_step_change(|change| {
///         println!("now on {} ({})", change.step, change.step_index);
///     })
///     .build()?;
///
/// // Render the active step; the step view receives the navigation
/// // contract and the data record as props
/// let output = wizard.render();
///
/// // Navigate
/// wizard.next_step();
/// ```

pub mod controller;
pub mod flow;
pub mod state;
pub mod steps;
pub mod view;

// Re-export commonly used types
pub use controller::{Wizard, WizardBuilder};
pub use flow::{StepChange, StepChangeFn, WizardFlow};
pub use state::WizardSnapshot;
pub use steps::{StepId, StepMapping, StepViewFn};
pub use view::{StepOutput, StepProps};
