/// A unit of fire-and-forget background work
pub type Task = Box<dyn FnOnce() + Send + 'static>;

/// Port for submitting background work
///
/// No ordering, cancellation or result propagation is promised.
pub trait TaskExecutor: Send + Sync {
    fn execute(&self, task: Task);
}
