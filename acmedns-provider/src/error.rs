//! 错误类型
//!
//! 只有"请求未能完成"才算错误；请求完成但被服务端拒绝属于
//! [`ChallengeOutcome::Rejected`](crate::ChallengeOutcome)，不在此列。

use thiserror::Error;

/// Provider 错误
#[derive(Debug, Error)]
pub enum ProviderError {
    /// 网络错误（连接、DNS 解析、TLS、读取响应体）
    #[error("[{provider}] Network error: {detail}")]
    NetworkError { provider: String, detail: String },

    /// 请求超时
    #[error("[{provider}] Request timed out after {timeout_secs}s")]
    Timeout { provider: String, timeout_secs: u64 },

    /// 输入参数无效
    #[error("Invalid input: `{field}` must not be empty")]
    InvalidInput { field: &'static str },

    /// 请求体序列化失败
    #[error("[{provider}] Serialization error: {detail}")]
    SerializationError { provider: String, detail: String },

    /// 配置无效（endpoint、HTTP 客户端构造等）
    #[error("Invalid configuration: {detail}")]
    InvalidConfig { detail: String },
}

impl ProviderError {
    /// 远程调用是否根本没有完成
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::NetworkError { .. } | Self::Timeout { .. })
    }
}

/// Provider Result 类型别名
pub type Result<T> = std::result::Result<T, ProviderError>;
