//! acmedns 命令行入口
//!
//! 供证书签发流程的 DNS-01 hook 调用：`set` 发布挑战记录，`unset` 撤回。

mod cli;
mod config;
mod error;
mod handlers;
mod logging;

use std::process::ExitCode;

use acmedns_provider::{AcmeDnsProvider, ChallengeOperation, ChallengeOutcome};
use clap::Parser;

use cli::Cli;
use config::AppConfig;
use error::{AppError, EXIT_CONFIG, exit_code};
use logging::Logging;

/// 加载配置并提交一次挑战
async fn run(cli: &Cli) -> Result<ChallengeOutcome, AppError> {
    let config = AppConfig::load(cli.config.as_deref()).map_err(AppError::Config)?;
    tracing::debug!("配置加载完成: {config:?}");

    let provider =
        AcmeDnsProvider::with_base_url(&config.endpoint, &config.domain, config.api_key.clone())?;

    handlers::challenge::submit_challenge(
        &provider,
        &cli.command,
        config.timeout_secs,
        &mut std::io::stdout(),
    )
    .await
}

fn report_error(operation: ChallengeOperation, err: &AppError) {
    match err {
        AppError::Transport(_) => {
            tracing::error!("{operation} could not reach the ACME DNS API: {err}");
        }
        _ => tracing::error!("{operation} failed: {err}"),
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let _logging = match Logging::init(cli.verbose, !cli.no_syslog) {
        Ok(logging) => logging,
        Err(e) => {
            eprintln!("{}", AppError::Logging(e));
            return ExitCode::from(EXIT_CONFIG);
        }
    };

    let result = run(&cli).await;
    if let Err(err) = &result {
        report_error(cli.command.operation(), err);
    }

    ExitCode::from(exit_code(&result))
}
