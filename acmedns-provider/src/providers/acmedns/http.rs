//! ACME DNS HTTP 请求方法

use std::time::Duration;

use async_trait::async_trait;

use crate::classify::classify;
use crate::error::{ProviderError, Result};
use crate::http_client::HttpUtils;
use crate::traits::ChallengeProvider;
use crate::types::{ChallengeOperation, ChallengeRecord, SubmitResponse};

use super::{AcmeDnsProvider, RotateChallengesRequest};

#[async_trait]
impl ChallengeProvider for AcmeDnsProvider {
    fn provider_name(&self) -> &'static str {
        "acmedns"
    }

    async fn rotate_challenges(
        &self,
        operation: ChallengeOperation,
        record: &ChallengeRecord,
        timeout: Duration,
    ) -> Result<SubmitResponse> {
        log::debug!(
            "{operation} record with fqdn: {}, digest: {}, timeout: {}",
            record.fqdn(),
            record.digest(),
            timeout.as_secs()
        );
        log::info!("{operation} requested for {record}");

        let body = RotateChallengesRequest::new(&self.access_token, operation, record);
        let payload =
            serde_json::to_string(&body).map_err(|e| ProviderError::SerializationError {
                provider: self.provider_name().to_string(),
                detail: e.to_string(),
            })?;

        let request = self
            .client
            .post(self.endpoint.clone())
            .header("Content-Type", "application/json")
            .body(payload);

        let (status, response_text) = HttpUtils::execute_request(
            request,
            self.provider_name(),
            "POST",
            self.endpoint.as_str(),
            timeout,
        )
        .await?;

        // 结果日志由调用方在输出响应体之后记录
        Ok(SubmitResponse {
            status,
            outcome: classify(record.digest(), status, &response_text),
            body: response_text,
        })
    }
}
