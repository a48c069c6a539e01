//! 挑战记录处理

use std::io::Write;
use std::time::Duration;

use acmedns_provider::{ChallengeOutcome, ChallengeProvider, ChallengeRecord};

use crate::cli::Command;
use crate::error::AppError;

/// 提交 `set` / `unset` 命令
///
/// 原始响应体无论结果如何都会先写到 `out`，随后记录结果日志。
/// 命令行未给出 timeout 时使用 `default_timeout_secs`。
pub async fn submit_challenge<P, W>(
    provider: &P,
    command: &Command,
    default_timeout_secs: u64,
    out: &mut W,
) -> Result<ChallengeOutcome, AppError>
where
    P: ChallengeProvider + ?Sized,
    W: Write,
{
    let args = command.args();
    let record = ChallengeRecord::new(args.fqdn.as_str(), args.digest.as_str())?;
    let timeout = Duration::from_secs(args.timeout.unwrap_or(default_timeout_secs));

    let operation = command.operation();
    let response = provider
        .rotate_challenges(operation, &record, timeout)
        .await?;

    writeln!(out, "{}", response.body).map_err(AppError::Output)?;
    out.flush().map_err(AppError::Output)?;

    match response.outcome {
        ChallengeOutcome::Accepted => tracing::info!("{operation} successful with {record}"),
        ChallengeOutcome::Rejected { status } => {
            tracing::error!("{operation} unsuccessful with {record} (HTTP {status})");
        }
    }

    Ok(response.outcome)
}
