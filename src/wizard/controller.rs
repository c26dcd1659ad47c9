/// Wizard controller
///
/// Owns the step table and the shared flow handle, and renders the view
/// mapped to the current step inside a wizard scope.
use std::fmt;

use crate::data::WizardData;
use crate::error::WizardError;
use crate::messaging::EventBus;
use crate::scope::WizardScope;

use super::flow::{StepChange, StepChangeFn, WizardFlow};
use super::state::WizardSnapshot;
use super::steps::{StepId, StepMapping};
use super::view::{StepOutput, StepProps};

/// Configuration collected before the wizard is built
pub struct WizardBuilder<V> {
    mapping: StepMapping<V>,
    initial_data: WizardData,
    on_step_change: Option<Box<StepChangeFn>>,
    bus: Option<EventBus>,
    label: String,
}

impl<V> WizardBuilder<V> {
    fn new(mapping: StepMapping<V>) -> Self {
        Self {
            mapping,
            initial_data: WizardData::new(),
            on_step_change: None,
            bus: None,
            label: "wizard".to_string(),
        }
    }

    /// Seed the data record (default empty)
    pub fn with_initial_data(mut self, data: WizardData) -> Self {
        self.initial_data = data;
        self
    }

    /// Set the callback fired after every successful step transition
    pub fn with_on_step_change(
        mut self,
        callback: impl Fn(&StepChange) + Send + Sync + 'static,
    ) -> Self {
        self.on_step_change = Some(Box::new(callback));
        self
    }

    /// Enable step tracking: publish a `wizard:step-change` event on `bus`
    /// for every successful transition
    pub fn with_step_tracking(mut self, bus: EventBus) -> Self {
        self.bus = Some(bus);
        self
    }

    /// Set the diagnostic label (default `"wizard"`)
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Build the wizard, seeded on the first step of the table
    pub fn build(self) -> Result<Wizard<V>, WizardError> {
        if self.mapping.is_empty() {
            return Err(WizardError::EmptyMapping);
        }

        let flow = WizardFlow::new(
            self.mapping.ids(),
            self.initial_data,
            self.on_step_change,
            self.bus,
            self.label,
        );
        Ok(Wizard {
            mapping: self.mapping,
            flow,
        })
    }
}

impl<V> fmt::Debug for WizardBuilder<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WizardBuilder")
            .field("mapping", &self.mapping)
            .field("label", &self.label)
            .field("tracking", &self.bus.is_some())
            .finish()
    }
}

/// Multi-step wizard controller
pub struct Wizard<V> {
    mapping: StepMapping<V>,
    flow: WizardFlow,
}

impl<V> Wizard<V> {
    /// Create a wizard over `mapping` with default configuration
    pub fn new(mapping: StepMapping<V>) -> Result<Self, WizardError> {
        Self::builder(mapping).build()
    }

    /// Start configuring a wizard over `mapping`
    pub fn builder(mapping: StepMapping<V>) -> WizardBuilder<V> {
        WizardBuilder::new(mapping)
    }

    /// The shared navigation handle
    pub fn flow(&self) -> &WizardFlow {
        &self.flow
    }

    /// Render the view mapped to the current step
    ///
    /// The view runs inside a fresh [`WizardScope`], released when it
    /// returns. A current step with no mapped view degrades to
    /// [`StepOutput::Missing`].
    pub fn render(&self) -> StepOutput<V> {
        let props = StepProps::from_flow(&self.flow);
        match self.mapping.view_for(props.step().as_str()) {
            Some(view) => {
                let _scope = WizardScope::enter(&self.flow);
                StepOutput::View(view(&props))
            }
            None => {
                tracing::warn!(
                    "[{}] no step view mapped for '{}', rendering placeholder",
                    self.flow.label(),
                    props.step()
                );
                StepOutput::Missing {
                    step: props.step().clone(),
                }
            }
        }
    }

    /// Get the current step id
    pub fn current_step(&self) -> StepId {
        self.flow.current_step()
    }

    /// Get the position of the current step in step order
    pub fn step_index(&self) -> usize {
        self.flow.step_index()
    }

    /// Get the number of steps
    pub fn total_steps(&self) -> usize {
        self.flow.total_steps()
    }

    /// Get a copy of the current data record
    pub fn data(&self) -> WizardData {
        self.flow.data()
    }

    /// Take a by-value snapshot of the current state
    pub fn snapshot(&self) -> WizardSnapshot {
        self.flow.snapshot()
    }

    /// Advance to the next step; no-op at the last step
    pub fn next_step(&self) {
        self.flow.next_step();
    }

    /// Move to the previous step; no-op at the first step
    pub fn prev_step(&self) {
        self.flow.prev_step();
    }

    /// Jump directly to `id`; no-op for an unknown id
    pub fn to_step(&self, id: impl AsRef<str>) {
        self.flow.to_step(id);
    }

    /// Shallow-merge `patch` into the data record
    pub fn update_data(&self, patch: WizardData) {
        self.flow.update_data(patch);
    }

    /// Replace the data record and return to the first step
    pub fn reset_data(&self, data: Option<WizardData>) {
        self.flow.reset_data(data);
    }
}

impl<V> fmt::Debug for Wizard<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Wizard")
            .field("mapping", &self.mapping)
            .field("flow", &self.flow)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn mapping() -> StepMapping<String> {
        StepMapping::new()
            .step("personal", |props: &StepProps| {
                format!("personal {}/{}", props.step_index() + 1, props.total_steps())
            })
            .step("contact", |props: &StepProps| {
                format!("contact for {}", props.label())
            })
            .step("review", |props: &StepProps| {
                format!("review: {} field(s)", props.data().len())
            })
    }

    #[test]
    fn test_empty_mapping_is_rejected() {
        let err = Wizard::<()>::new(StepMapping::new()).unwrap_err();
        assert!(matches!(err, WizardError::EmptyMapping));
    }

    #[test]
    fn test_renders_view_for_current_step() {
        let wizard = Wizard::new(mapping()).unwrap();
        assert_eq!(
            wizard.render().into_view().unwrap(),
            "personal 1/3".to_string()
        );

        wizard.next_step();
        assert_eq!(
            wizard.render().into_view().unwrap(),
            "contact for wizard".to_string()
        );
    }

    #[test]
    fn test_props_reflect_state_at_render_time() {
        let wizard = Wizard::builder(mapping())
            .with_initial_data(WizardData::from_value(json!({"name": "Ada"})).unwrap())
            .with_label("signup")
            .build()
            .unwrap();

        wizard.to_step("review");
        assert_eq!(
            wizard.render().into_view().unwrap(),
            "review: 1 field(s)".to_string()
        );
    }

    #[test]
    fn test_default_label() {
        let wizard = Wizard::new(mapping()).unwrap();
        assert_eq!(wizard.flow().label(), "wizard");
        assert!(!wizard.flow().is_tracking());
    }

    #[test]
    fn test_controller_delegates_navigation() {
        let wizard = Wizard::new(mapping()).unwrap();

        wizard.next_step();
        wizard.update_data(WizardData::from_value(json!({"a": 1})).unwrap());
        assert_eq!(wizard.current_step(), "contact");
        assert_eq!(wizard.step_index(), 1);
        assert_eq!(wizard.total_steps(), 3);
        assert_eq!(wizard.data().get("a"), Some(&json!(1)));

        wizard.prev_step();
        assert_eq!(wizard.current_step(), "personal");

        wizard.reset_data(None);
        let snapshot = wizard.snapshot();
        assert_eq!(snapshot.step, "personal");
        assert_eq!(snapshot.step_index, 0);
        assert!(snapshot.data.is_empty());
    }

    #[test]
    fn test_scope_is_closed_after_render() {
        let wizard = Wizard::new(mapping()).unwrap();
        let _ = wizard.render();
        assert!(!crate::scope::WizardScope::is_active());
    }
}
