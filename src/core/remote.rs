use crate::domain::model::RemoteOp;
use crate::domain::ports::RemoteExecutor;
use crate::utils::error::{CalcError, Result};
use crate::utils::validation;
use std::collections::HashMap;

/// Allow-list of remote operations keyed by opaque token. Anything not
/// registered here cannot be dispatched, and the token is only ever used as
/// a lookup key.
#[derive(Debug, Clone, Default)]
pub struct OpRegistry {
    ops: HashMap<String, RemoteOp>,
}

impl OpRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry of the operations this deployment knows about.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry
            .register(RemoteOp::new(
                "refresh-notes",
                "Rebuild the notes cache on the app host",
                "/opt/scorecalc/bin/refresh_notes.sh",
                vec![],
            ))
            .expect("default op tokens are well-formed");
        registry
            .register(RemoteOp::new(
                "rotate-logs",
                "Rotate application logs on the app host",
                "/opt/scorecalc/bin/rotate_logs.sh",
                vec!["--keep".to_string(), "7".to_string()],
            ))
            .expect("default op tokens are well-formed");
        registry
    }

    pub fn register(&mut self, op: RemoteOp) -> Result<&mut Self> {
        validation::validate_op_token(&op.token)?;
        self.ops.insert(op.token.clone(), op);
        Ok(self)
    }

    pub fn resolve(&self, token: &str) -> Result<&RemoteOp> {
        validation::validate_op_token(token)?;
        self.ops
            .get(token)
            .ok_or_else(|| CalcError::UnknownOperation {
                token: token.to_string(),
            })
    }

    pub fn ops(&self) -> Vec<&RemoteOp> {
        let mut ops: Vec<&RemoteOp> = self.ops.values().collect();
        ops.sort_by(|a, b| a.token.cmp(&b.token));
        ops
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }
}

/// Resolve `token` against the allow-list and run it through the executor.
pub async fn dispatch(
    registry: &OpRegistry,
    executor: &dyn RemoteExecutor,
    token: &str,
) -> Result<String> {
    let op = registry.resolve(token)?;
    tracing::debug!("Dispatching remote operation '{}'", op.token);
    executor.run(op).await
}
