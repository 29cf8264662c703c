use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "scorecalc")]
#[command(about = "Score and prefix calculations with an allow-listed remote op runner")]
pub struct CliConfig {
    #[command(subcommand)]
    pub command: Command,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Render results as JSON")]
    pub json: bool,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Compute the special score for a pair of integers
    Score {
        #[arg(long, allow_hyphen_values = true)]
        x: String,

        #[arg(long, allow_hyphen_values = true)]
        y: String,
    },

    /// Extract the first n+1 characters of a string
    Prefix {
        #[arg(long)]
        source: String,

        #[arg(long, allow_hyphen_values = true)]
        n: i64,
    },

    /// Dry-run an allow-listed remote operation
    Run {
        #[arg(long)]
        op: String,
    },

    /// List the allow-listed remote operations
    Ops,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        match &self.command {
            Command::Score { x, y } => {
                validation::parse_integer("x", x)?;
                validation::parse_integer("y", y)?;
                Ok(())
            }
            Command::Prefix { n, .. } => validation::validate_non_negative("n", *n),
            Command::Run { op } => validation::validate_op_token(op),
            Command::Ops => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_config_validates_raw_integers() {
        let config = CliConfig::parse_from(["scorecalc", "score", "--x", "12", "--y", "-5"]);
        assert!(config.validate().is_ok());

        let config = CliConfig::parse_from(["scorecalc", "score", "--x", "abc", "--y", "1"]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_prefix_config_rejects_negative_n() {
        let config =
            CliConfig::parse_from(["scorecalc", "prefix", "--source", "hello", "--n", "-1"]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_run_config_rejects_malformed_token() {
        let config = CliConfig::parse_from(["scorecalc", "run", "--op", "a;b"]);
        assert!(config.validate().is_err());
    }
}
