/// Scoped broadcasting of wizard state
///
/// A wizard scope makes a [`WizardFlow`] handle ambiently readable for the
/// duration of a render call, so helpers invoked from a step view can reach
/// the same state and operations without parameter threading. Scopes form a
/// thread-local stack: they nest, the innermost wins, and each one is
/// released by an RAII guard when the wrapped call returns or unwinds.
use std::cell::RefCell;
use std::marker::PhantomData;

use crate::wizard::WizardFlow;

thread_local! {
    static ACTIVE_SCOPES: RefCell<Vec<WizardFlow>> = const { RefCell::new(Vec::new()) };
}

/// Accessor for the wizard scope active on the current thread.
pub struct WizardScope;

impl WizardScope {
    /// Enter a scope for `flow`, returning a guard that releases it on drop.
    ///
    /// [`Wizard::render`](crate::wizard::Wizard::render) enters exactly one
    /// scope around the active step view; call this directly only when
    /// driving views outside the controller (test harnesses, host glue).
    pub fn enter(flow: &WizardFlow) -> ScopeGuard {
        ACTIVE_SCOPES.with(|scopes| scopes.borrow_mut().push(flow.clone()));
        ScopeGuard {
            _not_send: PhantomData,
        }
    }

    /// Get the innermost active wizard flow.
    ///
    /// # Panics
    ///
    /// Panics when no scope is active on the current thread. Reading outside
    /// a scope is a programmer error, not a recoverable condition; use
    /// [`WizardScope::try_current`] for host glue that degrades gracefully.
    pub fn current() -> WizardFlow {
        Self::try_current().unwrap_or_else(|| {
            panic!(
                "WizardScope::current() called outside an active wizard scope; \
                 it is only available to code running under Wizard::render or WizardScope::enter"
            )
        })
    }

    /// Get the innermost active wizard flow, or `None` outside any scope.
    pub fn try_current() -> Option<WizardFlow> {
        ACTIVE_SCOPES.with(|scopes| scopes.borrow().last().cloned())
    }

    /// Check whether any scope is active on the current thread.
    pub fn is_active() -> bool {
        ACTIVE_SCOPES.with(|scopes| !scopes.borrow().is_empty())
    }
}

/// Guard releasing a wizard scope when dropped.
///
/// `!Send`: the scope lives in thread-local storage and must be released on
/// the thread that entered it.
#[must_use = "dropping the guard immediately closes the scope"]
pub struct ScopeGuard {
    _not_send: PhantomData<*const ()>,
}

impl Drop for ScopeGuard {
    fn drop(&mut self) {
        ACTIVE_SCOPES.with(|scopes| {
            scopes.borrow_mut().pop();
        });
    }
}
