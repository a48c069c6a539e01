//! 公共类型定义

use std::fmt;

use serde::Serialize;

use crate::error::{ProviderError, Result};

/// 单条 DNS-01 挑战记录
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChallengeRecord {
    fqdn: String,
    digest: String,
}

impl ChallengeRecord {
    /// 创建挑战记录，`fqdn` 和 `digest` 均不能为空
    pub fn new(fqdn: impl Into<String>, digest: impl Into<String>) -> Result<Self> {
        let fqdn = fqdn.into();
        let digest = digest.into();

        if fqdn.trim().is_empty() {
            return Err(ProviderError::InvalidInput { field: "fqdn" });
        }
        if digest.trim().is_empty() {
            return Err(ProviderError::InvalidInput { field: "digest" });
        }

        Ok(Self { fqdn, digest })
    }

    pub fn fqdn(&self) -> &str {
        &self.fqdn
    }

    pub fn digest(&self) -> &str {
        &self.digest
    }
}

impl fmt::Display for ChallengeRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}, {}}}", self.fqdn, self.digest)
    }
}

/// 挑战操作类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChallengeOperation {
    /// 添加记录（recordsToAdd）
    Set,
    /// 移除记录（recordsToRemove）
    Unset,
}

impl fmt::Display for ChallengeOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Set => f.write_str("SET"),
            Self::Unset => f.write_str("UNSET"),
        }
    }
}

/// 响应分类结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChallengeOutcome {
    Accepted,
    Rejected { status: u16 },
}

impl ChallengeOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }
}

/// 一次 rotateChallenges 调用的完整结果
#[derive(Debug, Clone)]
pub struct SubmitResponse {
    pub status: u16,
    pub body: String,
    pub outcome: ChallengeOutcome,
}
