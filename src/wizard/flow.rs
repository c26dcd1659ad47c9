/// Wizard flow management
///
/// [`WizardFlow`] is the shared navigation handle over the live state. It is
/// cheap to clone; every clone operates on the same state, which is how the
/// controller, the step views, and scope readers stay consistent. Boundary
/// navigation (`next_step` at the last step, `prev_step` at the first,
/// `to_step` with an unknown id) is a silent no-op so callers can issue
/// idempotent navigation without guarding.
use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::data::WizardData;
use crate::messaging::{EventBus, WizardEvent};

use super::state::{WizardSnapshot, WizardState};
use super::steps::StepId;

/// Callback invoked after every successful step transition
pub type StepChangeFn = dyn Fn(&StepChange) + Send + Sync;

/// A successful step transition
#[derive(Debug, Clone, PartialEq)]
pub struct StepChange {
    pub step: StepId,
    pub step_index: usize,
    pub data: WizardData,
}

struct FlowInner {
    /// Step ids in table order; non-empty, immutable after construction
    order: Vec<StepId>,
    state: RwLock<WizardState>,
    initial_data: WizardData,
    on_step_change: Option<Box<StepChangeFn>>,
    bus: Option<EventBus>,
    label: String,
}

/// Shared navigation handle over wizard state
#[derive(Clone)]
pub struct WizardFlow {
    inner: Arc<FlowInner>,
}

impl WizardFlow {
    pub(crate) fn new(
        order: Vec<StepId>,
        initial_data: WizardData,
        on_step_change: Option<Box<StepChangeFn>>,
        bus: Option<EventBus>,
        label: String,
    ) -> Self {
        let first = order[0].clone();
        Self {
            inner: Arc::new(FlowInner {
                order,
                state: RwLock::new(WizardState::new(first, initial_data.clone())),
                initial_data,
                on_step_change,
                bus,
                label,
            }),
        }
    }

    /// Get the current step id
    pub fn current_step(&self) -> StepId {
        self.inner.state.read().current().clone()
    }

    /// Get the position of the current step in step order
    pub fn step_index(&self) -> usize {
        let state = self.inner.state.read();
        self.index_of(state.current())
    }

    /// Get the number of steps
    pub fn total_steps(&self) -> usize {
        self.inner.order.len()
    }

    /// Get the step ids in order
    pub fn steps(&self) -> &[StepId] {
        &self.inner.order
    }

    /// Get a copy of the current data record
    pub fn data(&self) -> WizardData {
        self.inner.state.read().data().clone()
    }

    /// Take a by-value snapshot of the current state
    pub fn snapshot(&self) -> WizardSnapshot {
        let state = self.inner.state.read();
        WizardSnapshot {
            step: state.current().clone(),
            step_index: self.index_of(state.current()),
            total_steps: self.inner.order.len(),
            data: state.data().clone(),
        }
    }

    /// Get the diagnostic label
    pub fn label(&self) -> &str {
        &self.inner.label
    }

    /// Whether step tracking is enabled
    pub fn is_tracking(&self) -> bool {
        self.inner.bus.is_some()
    }

    /// Whether the current step is the first
    pub fn is_first(&self) -> bool {
        self.step_index() == 0
    }

    /// Whether the current step is the last
    pub fn is_last(&self) -> bool {
        self.step_index() + 1 == self.inner.order.len()
    }

    /// Check whether two handles operate on the same wizard state
    pub fn shares_state_with(&self, other: &WizardFlow) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Advance to the next step in table order
    ///
    /// No-op at the last step.
    pub fn next_step(&self) {
        let change = {
            let mut state = self.inner.state.write();
            let index = self.index_of(state.current());
            if index + 1 >= self.inner.order.len() {
                tracing::trace!("[{}] next_step at last step, ignoring", self.inner.label);
                return;
            }
            self.apply_step(&mut state, index + 1)
        };
        self.notify(change);
    }

    /// Move to the previous step in table order
    ///
    /// No-op at the first step.
    pub fn prev_step(&self) {
        let change = {
            let mut state = self.inner.state.write();
            let index = self.index_of(state.current());
            if index == 0 {
                tracing::trace!("[{}] prev_step at first step, ignoring", self.inner.label);
                return;
            }
            self.apply_step(&mut state, index - 1)
        };
        self.notify(change);
    }

    /// Jump directly to the step `id`
    ///
    /// No-op when `id` is not a step or is already current.
    pub fn to_step(&self, id: impl AsRef<str>) {
        let id = id.as_ref();
        let change = {
            let mut state = self.inner.state.write();
            let Some(target) = self.inner.order.iter().position(|step| *step == *id) else {
                tracing::debug!("[{}] to_step('{}') unknown step, ignoring", self.inner.label, id);
                return;
            };
            if *state.current() == *id {
                return;
            }
            self.apply_step(&mut state, target)
        };
        self.notify(change);
    }

    /// Shallow-merge `patch` into the data record
    ///
    /// The step does not change and no callback fires.
    pub fn update_data(&self, patch: WizardData) {
        let mut state = self.inner.state.write();
        state.merge_data(patch);
        tracing::trace!(
            "[{}] data updated, {} field(s)",
            self.inner.label,
            state.data().len()
        );
    }

    /// Replace the data record and return to the first step
    ///
    /// `data` of `None` restores a fresh copy of the construction-time
    /// initial data. Always fires the step-change callback with the first
    /// step and index 0.
    pub fn reset_data(&self, data: Option<WizardData>) {
        let change = {
            let mut state = self.inner.state.write();
            let data = data.unwrap_or_else(|| self.inner.initial_data.clone());
            state.replace_data(data);
            self.apply_step(&mut state, 0)
        };
        self.notify(change);
    }

    /// Position of `step` in table order; `step` always originates from the
    /// table, so a miss cannot happen in practice
    fn index_of(&self, step: &StepId) -> usize {
        self.inner
            .order
            .iter()
            .position(|candidate| candidate == step)
            .unwrap_or(0)
    }

    fn apply_step(&self, state: &mut WizardState, index: usize) -> StepChange {
        let step = self.inner.order[index].clone();
        state.set_current(step.clone());
        StepChange {
            step,
            step_index: index,
            data: state.data().clone(),
        }
    }

    /// Fire the transition side effects; the state lock must already be
    /// released so callbacks and listeners may navigate re-entrantly
    fn notify(&self, change: StepChange) {
        tracing::debug!(
            "[{}] step changed to '{}' (index {})",
            self.inner.label,
            change.step,
            change.step_index
        );

        if let Some(callback) = &self.inner.on_step_change {
            callback(&change);
        }

        if let Some(bus) = &self.inner.bus {
            bus.publish(WizardEvent::StepChanged {
                wizard: self.inner.label.clone(),
                step: change.step.clone(),
                step_index: change.step_index,
            });
        }
    }
}

impl fmt::Debug for WizardFlow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let snapshot = self.snapshot();
        f.debug_struct("WizardFlow")
            .field("label", &self.inner.label)
            .field("step", &snapshot.step)
            .field("step_index", &snapshot.step_index)
            .field("total_steps", &snapshot.total_steps)
            .field("tracking", &self.is_tracking())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use serde_json::json;

    use super::*;

    fn data(value: serde_json::Value) -> WizardData {
        WizardData::from_value(value).unwrap()
    }

    fn flow(steps: &[&str]) -> WizardFlow {
        WizardFlow::new(
            steps.iter().map(|s| StepId::from(*s)).collect(),
            WizardData::new(),
            None,
            None,
            "wizard".to_string(),
        )
    }

    fn counting_flow(steps: &[&str]) -> (WizardFlow, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let calls_in_cb = Arc::clone(&calls);
        let flow = WizardFlow::new(
            steps.iter().map(|s| StepId::from(*s)).collect(),
            WizardData::new(),
            Some(Box::new(move |_| {
                calls_in_cb.fetch_add(1, Ordering::SeqCst);
            })),
            None,
            "wizard".to_string(),
        );
        (flow, calls)
    }

    #[test]
    fn test_initial_state_is_first_step() {
        let flow = flow(&["a", "b", "c"]);
        assert_eq!(flow.current_step(), "a");
        assert_eq!(flow.step_index(), 0);
        assert_eq!(flow.total_steps(), 3);
        assert!(flow.is_first());
        assert!(!flow.is_last());
        assert!(flow.data().is_empty());
    }

    #[test]
    fn test_next_step_walks_order_and_stops_at_last() {
        let (flow, calls) = counting_flow(&["a", "b", "c"]);

        flow.next_step();
        flow.next_step();
        assert_eq!(flow.current_step(), "c");
        assert_eq!(flow.step_index(), 2);
        assert!(flow.is_last());

        // Third call is a boundary no-op: no movement, no callback
        flow.next_step();
        assert_eq!(flow.current_step(), "c");
        assert_eq!(flow.step_index(), 2);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_prev_step_at_first_is_noop() {
        let (flow, calls) = counting_flow(&["a", "b"]);

        flow.prev_step();
        assert_eq!(flow.current_step(), "a");
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        flow.next_step();
        flow.prev_step();
        assert_eq!(flow.current_step(), "a");
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_to_step_jumps_and_ignores_unknown() {
        let (flow, calls) = counting_flow(&["a", "b", "c"]);

        flow.to_step("c");
        assert_eq!(flow.current_step(), "c");
        assert_eq!(flow.step_index(), 2);
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        flow.to_step("ghost");
        assert_eq!(flow.current_step(), "c");
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        // Jumping to the current step does not count as a transition
        flow.to_step("c");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_update_data_merges_without_callback() {
        let (flow, calls) = counting_flow(&["a", "b"]);

        flow.update_data(data(json!({"a": 1})));
        flow.update_data(data(json!({"b": 2})));

        let record = flow.data();
        assert_eq!(record.get("a"), Some(&json!(1)));
        assert_eq!(record.get("b"), Some(&json!(2)));
        assert_eq!(flow.current_step(), "a");
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_reset_data_restores_initial_by_value() {
        let flow = WizardFlow::new(
            vec![StepId::from("a"), StepId::from("b")],
            data(json!({"x": 1})),
            None,
            None,
            "wizard".to_string(),
        );

        flow.update_data(data(json!({"x": 2, "y": 3})));
        flow.next_step();

        flow.reset_data(None);
        assert_eq!(flow.current_step(), "a");
        assert_eq!(flow.step_index(), 0);
        assert_eq!(flow.data(), data(json!({"x": 1})));
    }

    #[test]
    fn test_reset_data_with_replacement() {
        let (flow, calls) = counting_flow(&["a", "b"]);
        flow.next_step();

        flow.reset_data(Some(data(json!({"x": 9}))));
        assert_eq!(flow.current_step(), "a");
        assert_eq!(flow.data(), data(json!({"x": 9})));
        // next_step plus reset_data both fire the callback
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_callback_sees_transition_values() {
        let seen: Arc<parking_lot::Mutex<Vec<StepChange>>> =
            Arc::new(parking_lot::Mutex::new(Vec::new()));
        let seen_in_cb = Arc::clone(&seen);

        let flow = WizardFlow::new(
            vec![StepId::from("a"), StepId::from("b")],
            WizardData::new(),
            Some(Box::new(move |change| {
                seen_in_cb.lock().push(change.clone());
            })),
            None,
            "signup".to_string(),
        );

        flow.update_data(data(json!({"name": "Ada"})));
        flow.next_step();

        let seen = seen.lock();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].step, "b");
        assert_eq!(seen[0].step_index, 1);
        assert_eq!(seen[0].data, data(json!({"name": "Ada"})));
    }

    #[test]
    fn test_callback_may_navigate_reentrantly() {
        let slot: Arc<std::sync::OnceLock<WizardFlow>> = Arc::new(std::sync::OnceLock::new());
        let slot_in_cb = Arc::clone(&slot);

        let flow = WizardFlow::new(
            vec![StepId::from("a"), StepId::from("b"), StepId::from("c")],
            WizardData::new(),
            Some(Box::new(move |change| {
                // The state lock is released before callbacks fire, so the
                // callback may mutate the same wizard
                if change.step_index == 1 {
                    if let Some(flow) = slot_in_cb.get() {
                        flow.update_data(
                            WizardData::from_value(json!({"visited_b": true})).unwrap(),
                        );
                    }
                }
            })),
            None,
            "wizard".to_string(),
        );
        let _ = slot.set(flow.clone());

        flow.next_step();
        assert_eq!(flow.current_step(), "b");
        assert_eq!(flow.data().get("visited_b"), Some(&json!(true)));
    }

    #[test]
    fn test_clones_share_state() {
        let flow = flow(&["a", "b"]);
        let clone = flow.clone();

        clone.next_step();
        assert_eq!(flow.current_step(), "b");
        assert!(flow.shares_state_with(&clone));

        let other = WizardFlow::new(
            vec![StepId::from("a")],
            WizardData::new(),
            None,
            None,
            "wizard".to_string(),
        );
        assert!(!flow.shares_state_with(&other));
    }
}
