//! Scoped overrides of the current registry.
//!
//! An override is bound to the logical task, not to a thread: the binding
//! survives suspension points and resumption on a different worker thread,
//! and sibling tasks never observe it. Scopes nest like a stack, with the
//! innermost binding winning and the enclosing one restored on every exit
//! path, unwinding and cancellation included.

use std::future::Future;

use crate::registry::{self, Registry};

tokio::task_local! {
    /// The task-local registry override, if any.
    static CURRENT: Registry;
}

/// Calls `f` with the effective registry: the task-local override when one
/// is bound, the global registry otherwise.
pub(crate) fn with_effective<R>(f: impl FnOnce(&Registry) -> R) -> R {
    if CURRENT.try_with(|_| ()).is_ok() {
        CURRENT.with(f)
    } else {
        registry::read_global(f)
    }
}

pub(crate) fn attach<F: Future>(registry: Registry, future: F) -> impl Future<Output = F::Output> {
    CURRENT.scope(registry, future)
}

/// Runs `body` with a modified copy of the current registry bound as the
/// effective registry.
///
/// `mutate` receives a clone of the effective registry and may add, override
/// or remove entries; enclosing and sibling scopes keep their own snapshots.
/// The prior binding is restored when `body` returns, and also when it
/// unwinds. `body`'s result or panic propagates unchanged.
///
/// # Examples
///
/// ```rust
/// use scopekit_di::{register, resolve, with_scope};
///
/// #[derive(Clone)]
/// struct Greeting(&'static str);
///
/// register(Greeting("hello"));
///
/// let scoped = with_scope(
///     |registry| registry.insert(Greeting("override")),
///     || resolve::<Greeting>().0,
/// );
/// assert_eq!(scoped, "override");
/// assert_eq!(resolve::<Greeting>().0, "hello");
/// ```
pub fn with_scope<M, B, R>(mutate: M, body: B) -> R
where
    M: FnOnce(&mut Registry),
    B: FnOnce() -> R,
{
    let mut registry = Registry::current();
    mutate(&mut registry);
    tracing::trace!(entries = registry.len(), "entering registry scope");
    CURRENT.sync_scope(registry, body)
}

/// Runs `future` with a modified copy of the current registry bound as the
/// effective registry for the future's whole extent.
///
/// The binding stays in place across every await point of `future` and is
/// dropped with it, so cancellation restores the prior scope just like
/// normal completion. It does not cross `tokio::spawn`; use
/// [`Registry::attach`] to hand a snapshot to a spawned task.
pub async fn with_scope_async<M, F>(mutate: M, future: F) -> F::Output
where
    M: FnOnce(&mut Registry),
    F: Future,
{
    let mut registry = Registry::current();
    mutate(&mut registry);
    tracing::trace!(entries = registry.len(), "entering async registry scope");
    CURRENT.scope(registry, future).await
}
