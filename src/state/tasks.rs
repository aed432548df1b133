use std::{
    future::Future,
    sync::{Mutex, MutexGuard, PoisonError},
    time::Duration,
};

use tokio::{task::JoinSet, time::sleep};

/// Owner of every timer callback a game view schedules.
///
/// Closing the scope aborts whatever is still pending and refuses new work, so
/// teardown never leaves a reset, relocation or sync attempt running.
#[derive(Default)]
pub struct TaskScope {
    inner: Mutex<ScopeInner>,
}

#[derive(Default)]
struct ScopeInner {
    tasks: JoinSet<()>,
    closed: bool,
}

impl TaskScope {
    /// Empty, open scope.
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `work` on the current runtime. Returns `false` once the scope is closed.
    pub fn spawn<F>(&self, work: F) -> bool
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let mut inner = self.lock();
        if inner.closed {
            return false;
        }
        while inner.tasks.try_join_next().is_some() {}
        inner.tasks.spawn(work);
        true
    }

    /// Run `work` after `delay`.
    pub fn spawn_after<F>(&self, delay: Duration, work: F) -> bool
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.spawn(async move {
            sleep(delay).await;
            work.await;
        })
    }

    /// Abort every pending task and refuse new ones.
    pub fn close(&self) {
        let mut inner = self.lock();
        inner.closed = true;
        inner.tasks.abort_all();
    }

    /// Whether [`TaskScope::close`] has run.
    pub fn is_closed(&self) -> bool {
        self.lock().closed
    }

    /// Number of tasks that have not finished yet.
    pub fn pending(&self) -> usize {
        let mut inner = self.lock();
        while inner.tasks.try_join_next().is_some() {}
        inner.tasks.len()
    }

    fn lock(&self) -> MutexGuard<'_, ScopeInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
