/// Live wizard state and its observable snapshot
///
/// The live state holds only the current step id and the data record; step
/// index and step count are derived from the step table order, never stored.
use serde::Serialize;

use super::steps::StepId;
use crate::data::WizardData;

/// Mutable state behind the flow's lock
#[derive(Debug, Clone)]
pub(crate) struct WizardState {
    current: StepId,
    data: WizardData,
}

impl WizardState {
    pub(crate) fn new(current: StepId, data: WizardData) -> Self {
        Self { current, data }
    }

    pub(crate) fn current(&self) -> &StepId {
        &self.current
    }

    pub(crate) fn set_current(&mut self, step: StepId) {
        self.current = step;
    }

    pub(crate) fn data(&self) -> &WizardData {
        &self.data
    }

    pub(crate) fn merge_data(&mut self, patch: WizardData) {
        self.data.merge(patch);
    }

    pub(crate) fn replace_data(&mut self, data: WizardData) {
        self.data = data;
    }
}

/// By-value view of wizard state at a point in time
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WizardSnapshot {
    pub step: StepId,
    pub step_index: usize,
    pub total_steps: usize,
    pub data: WizardData,
}
