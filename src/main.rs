use clap::Parser;
use scorecalc::config::Command;
use scorecalc::core::{remote, score};
use scorecalc::utils::error::ErrorSeverity;
use scorecalc::utils::{logger, validation::Validate};
use scorecalc::{CliConfig, DryRunExecutor, OpRegistry, PrefixRequest, ScoreInput};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    if config.json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting scorecalc CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Input validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    match run(&config).await {
        Ok(output) => {
            println!("{}", output);
        }
        Err(e) => {
            tracing::error!("Command failed: {} (Severity: {:?})", e, e.severity());
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                ErrorSeverity::Low => 1,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 3,
            };
            std::process::exit(exit_code);
        }
    }

    Ok(())
}

async fn run(config: &CliConfig) -> scorecalc::Result<String> {
    match &config.command {
        Command::Score { x, y } => {
            let input = ScoreInput::parse(x, y)?;
            let value = score::compute_checked(input.x, input.y)?;
            if config.json {
                let body = serde_json::json!({ "x": input.x, "y": input.y, "score": value });
                Ok(serde_json::to_string(&body)?)
            } else {
                Ok(format!("Special score: {}", value))
            }
        }
        Command::Prefix { source, n } => {
            let chars = PrefixRequest::new(source.clone(), *n).extract()?;
            if config.json {
                Ok(serde_json::to_string(&chars)?)
            } else {
                Ok(chars.into_iter().collect())
            }
        }
        Command::Run { op } => {
            let registry = OpRegistry::with_defaults();
            remote::dispatch(&registry, &DryRunExecutor::new(), op).await
        }
        Command::Ops => {
            let registry = OpRegistry::with_defaults();
            if config.json {
                Ok(serde_json::to_string(&registry.ops())?)
            } else {
                let lines: Vec<String> = registry
                    .ops()
                    .iter()
                    .map(|op| format!("{:<16} {}", op.token, op.description))
                    .collect();
                Ok(lines.join("\n"))
            }
        }
    }
}
