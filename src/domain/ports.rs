use crate::utils::error::Result;
use async_trait::async_trait;

/// A unit of work run by the worker pool. `id` is the worker's 1-based id.
#[async_trait]
pub trait Task: Send + Sync {
    async fn run(&self, id: usize) -> Result<()>;
}
