pub mod prefix;
pub mod remote;
pub mod score;

pub use crate::domain::model::{PrefixRequest, RemoteOp, ScoreInput, ScoreOutcome, User};
pub use crate::domain::ports::RemoteExecutor;
pub use crate::utils::error::Result;
