/// Step view input contract and render output
///
/// A step view receives a [`StepProps`] bundle: a snapshot of the wizard
/// state taken at render time plus the navigation operations, delegated to
/// the shared flow handle. Snapshot fields do not move when the view
/// navigates mid-render; read fresh state through [`StepProps::flow`].
use crate::data::WizardData;

use super::flow::WizardFlow;
use super::state::WizardSnapshot;
use super::steps::StepId;

/// Input parameters handed to the active step view
#[derive(Debug, Clone)]
pub struct StepProps {
    snapshot: WizardSnapshot,
    track_steps: bool,
    label: String,
    flow: WizardFlow,
}

impl StepProps {
    pub(crate) fn from_flow(flow: &WizardFlow) -> Self {
        Self {
            snapshot: flow.snapshot(),
            track_steps: flow.is_tracking(),
            label: flow.label().to_string(),
            flow: flow.clone(),
        }
    }

    /// The step being rendered
    pub fn step(&self) -> &StepId {
        &self.snapshot.step
    }

    /// Position of the step in step order
    pub fn step_index(&self) -> usize {
        self.snapshot.step_index
    }

    /// Number of steps in the wizard
    pub fn total_steps(&self) -> usize {
        self.snapshot.total_steps
    }

    /// Data record as of render time
    pub fn data(&self) -> &WizardData {
        &self.snapshot.data
    }

    /// Whether step tracking is enabled
    pub fn track_steps(&self) -> bool {
        self.track_steps
    }

    /// Diagnostic label of the wizard
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Whether the rendered step is the first
    pub fn is_first(&self) -> bool {
        self.snapshot.step_index == 0
    }

    /// Whether the rendered step is the last
    pub fn is_last(&self) -> bool {
        self.snapshot.step_index + 1 == self.snapshot.total_steps
    }

    /// The shared navigation handle, for code that wants to hold it
    pub fn flow(&self) -> &WizardFlow {
        &self.flow
    }

    /// Advance to the next step
    pub fn next_step(&self) {
        self.flow.next_step();
    }

    /// Move to the previous step
    pub fn prev_step(&self) {
        self.flow.prev_step();
    }

    /// Jump directly to `id`
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

/// Result of rendering the wizard
///
/// `Missing` is the fallback placeholder for a current step with no mapped
/// view. It is a rendered state, not an error.
#[derive(Debug, Clone, PartialEq)]
pub enum StepOutput<V> {
    /// Output of the mapped step view
    View(V),

    /// No view mapped for the current step
    Missing { step: StepId },
}

impl<V> StepOutput<V> {
    /// The view output, if one was rendered
    pub fn as_view(&self) -> Option<&V> {
        match self {
            StepOutput::View(view) => Some(view),
            StepOutput::Missing { .. } => None,
        }
    }

    /// Consume the output, returning the view output if one was rendered
    pub fn into_view(self) -> Option<V> {
        match self {
            StepOutput::View(view) => Some(view),
            StepOutput::Missing { .. } => None,
        }
    }

    /// Check if this is the missing-view placeholder
    pub fn is_missing(&self) -> bool {
        matches!(self, StepOutput::Missing { .. })
    }
}
