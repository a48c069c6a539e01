//! 日志初始化
//!
//! stderr 输出走 tracing-appender 的非阻塞 writer；unix 下同时镜像到 syslog。
//! provider 库使用 `log` 门面，由 tracing-subscriber 的 tracing-log 桥接。

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// syslog ident
#[cfg(unix)]
const SYSLOG_IDENTITY: &std::ffi::CStr = c"acmedns";

/// 本工具自身的日志 target（bin crate 与 provider 库）
const OWN_TARGETS: [&str; 2] = ["acmedns", "acmedns_provider"];

/// 日志上下文
///
/// 在 `main` 开头创建，持有到进程退出；drop 时刷新尚未写出的日志。
pub struct Logging {
    _console_guard: WorkerGuard,
}

impl Logging {
    /// 初始化全局 subscriber
    ///
    /// `RUST_LOG` 存在时优先，否则按 `verbose` 次数提升本工具自身的日志级别。
    pub fn init(verbose: u8, enable_syslog: bool) -> anyhow::Result<Self> {
        let filter = match std::env::var("RUST_LOG") {
            Ok(directives) if !directives.trim().is_empty() => {
                EnvFilter::try_new(directives).context("invalid RUST_LOG directives")?
            }
            _ => EnvFilter::try_new(default_directives(verbose))
                .context("invalid default log directives")?,
        };

        let (console_writer, console_guard) = tracing_appender::non_blocking(std::io::stderr());
        let console = tracing_subscriber::fmt::layer()
            .with_writer(console_writer)
            .with_target(false);

        let registry = tracing_subscriber::registry().with(filter).with(console);

        #[cfg(unix)]
        {
            // 同一进程只能打开一个 syslog 连接，已被占用时返回 None
            let syslog = enable_syslog
                .then(|| {
                    let (options, facility) = Default::default();
                    syslog_tracing::Syslog::new(SYSLOG_IDENTITY, options, facility)
                })
                .flatten();
            let syslog_missing = enable_syslog && syslog.is_none();

            let syslog_layer = syslog.map(|writer| {
                tracing_subscriber::fmt::layer()
                    .with_writer(writer)
                    .with_ansi(false)
                    .without_time()
                    .with_target(false)
            });

            registry
                .with(syslog_layer)
                .try_init()
                .context("failed to install global tracing subscriber")?;

            if syslog_missing {
                tracing::warn!("syslog unavailable, logging to stderr only");
            }
        }

        #[cfg(not(unix))]
        {
            let _ = enable_syslog;
            registry
                .try_init()
                .context("failed to install global tracing subscriber")?;
        }

        Ok(Self {
            _console_guard: console_guard,
        })
    }
}

/// 依赖库（reqwest、hyper 等）保持 info，`-v` 只放开本工具的 target
fn default_directives(verbose: u8) -> String {
    let level = match verbose {
        0 => return "info".to_string(),
        1 => "debug",
        _ => "trace",
    };

    std::iter::once("info".to_string())
        .chain(OWN_TARGETS.iter().map(|target| format!("{target}={level}")))
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directives() {
        assert_eq!(default_directives(0), "info");
        assert_eq!(
            default_directives(1),
            "info,acmedns=debug,acmedns_provider=debug"
        );
        assert_eq!(
            default_directives(5),
            "info,acmedns=trace,acmedns_provider=trace"
        );
    }

    #[test]
    fn test_default_directives_keep_dependencies_quiet() {
        for verbose in 0..3 {
            let directives = default_directives(verbose);
            assert!(EnvFilter::try_new(&directives).is_ok());
            assert!(!directives.split(',').any(|d| d == "debug" || d == "trace"));
        }
    }
}
