//! 错误处理模块

use acmedns_provider::{ChallengeOutcome, ProviderError};

/// 退出码
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_REJECTED: u8 = 1;
pub const EXIT_INVALID_INPUT: u8 = 2;
pub const EXIT_TRANSPORT: u8 = 3;
pub const EXIT_CONFIG: u8 = 4;
pub const EXIT_OUTPUT: u8 = 5;

/// 应用错误类型
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("配置错误: {0:#}")]
    Config(anyhow::Error),

    #[error("日志初始化失败: {0:#}")]
    Logging(anyhow::Error),

    #[error("请求参数错误: {0}")]
    InvalidInput(ProviderError),

    #[error("无法完成远程调用: {0}")]
    Transport(ProviderError),

    #[error("Provider 错误: {0}")]
    Provider(ProviderError),

    #[error("写出响应失败: {0}")]
    Output(#[source] std::io::Error),
}

impl AppError {
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::InvalidInput(_) => EXIT_INVALID_INPUT,
            Self::Transport(_) => EXIT_TRANSPORT,
            Self::Config(_) | Self::Logging(_) | Self::Provider(_) => EXIT_CONFIG,
            Self::Output(_) => EXIT_OUTPUT,
        }
    }
}

impl From<ProviderError> for AppError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::InvalidInput { .. } => Self::InvalidInput(err),
            ProviderError::NetworkError { .. } | ProviderError::Timeout { .. } => {
                Self::Transport(err)
            }
            ProviderError::InvalidConfig { .. } | ProviderError::SerializationError { .. } => {
                Self::Provider(err)
            }
        }
    }
}

/// 把一次调用的最终结果映射为进程退出码
pub fn exit_code(result: &Result<ChallengeOutcome, AppError>) -> u8 {
    match result {
        Ok(ChallengeOutcome::Accepted) => EXIT_SUCCESS,
        Ok(ChallengeOutcome::Rejected { .. }) => EXIT_REJECTED,
        Err(err) => err.exit_code(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_errors_map_to_kinds() {
        let err: AppError = ProviderError::Timeout {
            provider: "acmedns".to_string(),
            timeout_secs: 60,
        }
        .into();
        assert!(matches!(err, AppError::Transport(_)));
        assert_eq!(err.exit_code(), EXIT_TRANSPORT);

        let err: AppError = ProviderError::InvalidInput { field: "digest" }.into();
        assert_eq!(err.exit_code(), EXIT_INVALID_INPUT);

        let err: AppError = ProviderError::InvalidConfig {
            detail: "bad endpoint".to_string(),
        }
        .into();
        assert_eq!(err.exit_code(), EXIT_CONFIG);

        let err = AppError::Output(std::io::Error::from(std::io::ErrorKind::BrokenPipe));
        assert_eq!(err.exit_code(), EXIT_OUTPUT);
        assert_ne!(err.exit_code(), EXIT_REJECTED);
    }

    #[test]
    fn test_outcome_exit_codes() {
        assert_eq!(exit_code(&Ok(ChallengeOutcome::Accepted)), 0);
        assert_eq!(exit_code(&Ok(ChallengeOutcome::Rejected { status: 500 })), 1);
        assert_eq!(
            exit_code(&Err(AppError::Config(anyhow::anyhow!("missing `api_key`")))),
            4
        );
    }
}
