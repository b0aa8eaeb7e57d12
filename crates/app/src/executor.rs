use santa_ports::{Task, TaskExecutor};
use tokio::runtime::Handle;

/// Runs submitted tasks on a tokio runtime's blocking pool
///
/// Tasks are plain closures that may touch the filesystem, so they go
/// to `spawn_blocking` rather than the async workers.
#[derive(Clone)]
pub struct TokioExecutor {
    handle: Handle,
}

impl TokioExecutor {
    pub fn new(handle: Handle) -> Self {
        Self { handle }
    }

    /// Executor for the runtime we are currently inside
    ///
    /// Panics if called outside a tokio runtime.
    pub fn current() -> Self {
        Self::new(Handle::current())
    }
}

impl TaskExecutor for TokioExecutor {
    fn execute(&self, task: Task) {
        // Fire and forget: the join handle is dropped on purpose
        let _ = self.handle.spawn_blocking(task);
    }
}
