use futures::future::BoxFuture;

use crate::shared::errors::AppResult;

/// Callbacks collected during a unit of work and executed only after the
/// enclosing transaction has committed. Dropping the queue without calling
/// [`PostCommitQueue::run`] discards every callback, which is exactly what a
/// rolled-back transaction needs.
pub struct PostCommitQueue {
    callbacks: Vec<Box<dyn FnOnce() -> BoxFuture<'static, AppResult<()>> + Send>>,
}

impl PostCommitQueue {
    pub fn new() -> Self {
        Self {
            callbacks: Vec::new(),
        }
    }

    /// Register a callback to run after a successful commit.
    pub fn defer<F, Fut>(&mut self, callback: F)
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: std::future::Future<Output = AppResult<()>> + Send + 'static,
    {
        self.callbacks
            .push(Box::new(move || Box::pin(callback()) as BoxFuture<'static, AppResult<()>>));
    }

    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }

    /// Consume the queue, running callbacks in registration order.
    ///
    /// Must only be called once the triggering transaction's commit has been
    /// acknowledged. The first failing callback aborts the rest.
    pub async fn run(self) -> AppResult<()> {
        for callback in self.callbacks {
            callback().await?;
        }
        Ok(())
    }
}

impl Default for PostCommitQueue {
    fn default() -> Self {
        Self::new()
    }
}
