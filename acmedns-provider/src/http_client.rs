//! 通用 HTTP 客户端工具
//!
//! 统一处理：发送请求、日志记录、读取响应，以及把 reqwest 错误
//! 归类为网络错误或超时。响应体按原始文本返回，不做解析。

use std::time::Duration;

use reqwest::RequestBuilder;

use crate::error::ProviderError;

/// HTTP 工具函数集
pub struct HttpUtils;

impl HttpUtils {
    /// 执行 HTTP 请求并返回响应文本
    ///
    /// # Arguments
    /// * `request_builder` - 已配置好的请求构造器（包含 URL、headers、body 等）
    /// * `provider_name` - Provider 名称（用于日志和错误）
    /// * `method_name` - 请求方法名（用于日志）
    /// * `url` - 请求 URL（用于日志）
    /// * `timeout` - 请求超时，同时用于超时错误的描述
    ///
    /// # Returns
    /// * `Ok((status_code, response_text))` - 请求完成（不论状态码）
    /// * `Err(ProviderError::Timeout)` - 超时
    /// * `Err(ProviderError::NetworkError)` - 其他网络错误
    pub async fn execute_request(
        request_builder: RequestBuilder,
        provider_name: &str,
        method_name: &str,
        url: &str,
        timeout: Duration,
    ) -> Result<(u16, String), ProviderError> {
        log::debug!("[{}] {} {}", provider_name, method_name, url);

        let response = request_builder
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| Self::transport_error(&e, provider_name, timeout))?;

        let status_code = response.status().as_u16();
        log::debug!("[{}] Response Status: {}", provider_name, status_code);

        // 读取响应体
        let response_text = response
            .text()
            .await
            .map_err(|e| Self::transport_error(&e, provider_name, timeout))?;

        log::debug!("[{}] Response Body: {}", provider_name, response_text);

        Ok((status_code, response_text))
    }

    fn transport_error(
        err: &reqwest::Error,
        provider_name: &str,
        timeout: Duration,
    ) -> ProviderError {
        if err.is_timeout() {
            ProviderError::Timeout {
                provider: provider_name.to_string(),
                timeout_secs: timeout.as_secs(),
            }
        } else {
            ProviderError::NetworkError {
                provider: provider_name.to_string(),
                detail: error_chain(err),
            }
        }
    }
}

/// reqwest 的顶层错误信息通常只有 "error sending request"，把 source 链拼上
fn error_chain(err: &(dyn std::error::Error + 'static)) -> String {
    let mut detail = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        detail.push_str(": ");
        detail.push_str(&cause.to_string());
        source = cause.source();
    }
    detail
}
