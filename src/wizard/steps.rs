/// Step identifiers and the ordered step table
///
/// Steps are identified by opaque string ids drawn from a closed set the
/// embedding application defines. Step order is the insertion order of the
/// table; there is no other ordering source.
use std::fmt;

use serde::{Deserialize, Serialize};

use super::view::StepProps;

/// Opaque step identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StepId(String);

impl StepId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for StepId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for StepId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl AsRef<str> for StepId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for StepId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for StepId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A step view: renders the step mapped to an id, given the wizard's
/// navigation contract and data snapshot
pub type StepViewFn<V> = Box<dyn Fn(&StepProps) -> V + Send + Sync>;

/// Ordered table from step id to step view
///
/// Supplied once at wizard construction and immutable afterwards.
/// Re-inserting an existing id replaces its view in place and keeps the
/// original position, matching object-key semantics.
pub struct StepMapping<V> {
    entries: Vec<(StepId, StepViewFn<V>)>,
}

impl<V> StepMapping<V> {
    /// Create an empty step table
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Add a step, builder style
    pub fn step(
        mut self,
        id: impl Into<StepId>,
        view: impl Fn(&StepProps) -> V + Send + Sync + 'static,
    ) -> Self {
        self.insert(id, view);
        self
    }

    /// Add or replace a step
    ///
    /// A new id is appended; an existing id keeps its position and only the
    /// view is swapped.
    pub fn insert(
        &mut self,
        id: impl Into<StepId>,
        view: impl Fn(&StepProps) -> V + Send + Sync + 'static,
    ) {
        let id = id.into();
        let view: StepViewFn<V> = Box::new(view);
        match self.entries.iter_mut().find(|(existing, _)| *existing == id) {
            Some(entry) => entry.1 = view,
            None => self.entries.push((id, view)),
        }
    }

    /// Number of steps
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the table has no steps
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check if `id` is a step
    pub fn contains(&self, id: &str) -> bool {
        self.index_of(id).is_some()
    }

    /// Position of `id` in step order
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.entries.iter().position(|(step, _)| *step == *id)
    }

    /// First step id, if any
    pub fn first(&self) -> Option<&StepId> {
        self.entries.first().map(|(step, _)| step)
    }

    /// Step ids in order
    pub fn ids(&self) -> Vec<StepId> {
        self.entries.iter().map(|(step, _)| step.clone()).collect()
    }

    /// Look up the view for `id`
    pub(crate) fn view_for(&self, id: &str) -> Option<&StepViewFn<V>> {
        self.entries
            .iter()
            .find(|(step, _)| *step == *id)
            .map(|(_, view)| view)
    }
}

impl<V> Default for StepMapping<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> fmt::Debug for StepMapping<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StepMapping")
            .field("steps", &self.ids())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_id_compares_with_str() {
        let id = StepId::from("personal");
        assert_eq!(id, "personal");
        assert_eq!(id.as_str(), "personal");
        assert_eq!(id.to_string(), "personal");
    }

    #[test]
    fn test_insertion_order_is_step_order() {
        let mapping: StepMapping<&str> = StepMapping::new()
            .step("personal", |_| "p")
            .step("contact", |_| "c")
            .step("review", |_| "r");

        assert_eq!(mapping.len(), 3);
        assert_eq!(
            mapping.ids(),
            vec![
                StepId::from("personal"),
                StepId::from("contact"),
                StepId::from("review"),
            ]
        );
        assert_eq!(mapping.index_of("contact"), Some(1));
        assert_eq!(mapping.index_of("unknown"), None);
        assert_eq!(mapping.first().unwrap(), "personal");
    }

    #[test]
    fn test_reinsert_replaces_view_in_place() {
        let mut mapping: StepMapping<&str> = StepMapping::new()
            .step("a", |_| "old")
            .step("b", |_| "b");
        mapping.insert("a", |_| "new");

        assert_eq!(mapping.len(), 2);
        assert_eq!(mapping.index_of("a"), Some(0));
    }

    #[test]
    fn test_contains() {
        let mapping: StepMapping<()> = StepMapping::new().step("only", |_| ());
        assert!(mapping.contains("only"));
        assert!(!mapping.contains("other"));
    }
}
