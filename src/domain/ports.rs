use crate::domain::model::RemoteOp;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Transport seam for running an allow-listed remote operation. Implementors
/// receive the resolved op as structured data and must never build a shell
/// command line from caller-supplied strings.
#[async_trait]
pub trait RemoteExecutor: Send + Sync {
    async fn run(&self, op: &RemoteOp) -> Result<String>;
}
