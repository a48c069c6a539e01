//! Provider trait 定义

use std::time::Duration;

use async_trait::async_trait;

use crate::error::Result;
use crate::types::{ChallengeOperation, ChallengeRecord, SubmitResponse};

/// DNS-01 挑战提交接口
///
/// 实现方只负责把请求发出去并完成分类；请求完成但被拒绝时返回
/// `Ok`，其 `outcome` 为 `Rejected`。只有请求未完成时才返回 `Err`。
#[async_trait]
pub trait ChallengeProvider: Send + Sync {
    /// Provider 名称（用于日志和错误）
    fn provider_name(&self) -> &'static str;

    /// 添加或移除一条挑战记录
    async fn rotate_challenges(
        &self,
        operation: ChallengeOperation,
        record: &ChallengeRecord,
        timeout: Duration,
    ) -> Result<SubmitResponse>;

    /// 添加挑战记录
    async fn set_challenge(
        &self,
        record: &ChallengeRecord,
        timeout: Duration,
    ) -> Result<SubmitResponse> {
        self.rotate_challenges(ChallengeOperation::Set, record, timeout)
            .await
    }

    /// 移除挑战记录
    async fn unset_challenge(
        &self,
        record: &ChallengeRecord,
        timeout: Duration,
    ) -> Result<SubmitResponse> {
        self.rotate_challenges(ChallengeOperation::Unset, record, timeout)
            .await
    }
}
