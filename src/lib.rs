pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::exec::DryRunExecutor;
pub use config::CliConfig;
pub use core::remote::OpRegistry;
pub use domain::model::{PrefixRequest, RemoteOp, ScoreInput, ScoreOutcome, User};
pub use domain::ports::RemoteExecutor;
pub use utils::error::{CalcError, Result};
