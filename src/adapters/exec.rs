use crate::domain::model::RemoteOp;
use crate::domain::ports::RemoteExecutor;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Executor that reports what would run without spawning anything. The only
/// executor bundled with the crate; real transports live with the caller.
#[derive(Debug, Clone, Default)]
pub struct DryRunExecutor;

impl DryRunExecutor {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl RemoteExecutor for DryRunExecutor {
    async fn run(&self, op: &RemoteOp) -> Result<String> {
        tracing::info!(
            "Dry run: would execute {} with {} argument(s)",
            op.program,
            op.args.len()
        );
        Ok(format!("[dry-run] {}: {}", op.token, op.description))
    }
}
