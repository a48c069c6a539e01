//! ACME DNS Provider（acmeChallengeSets rotateChallenges API）

mod http;
mod types;

use std::fmt;

use reqwest::{Client, Url};

use crate::error::{ProviderError, Result};

pub(crate) use types::RotateChallengesRequest;

pub const ACMEDNS_API_BASE: &str = "https://acmedns.googleapis.com";

/// ACME DNS Provider
pub struct AcmeDnsProvider {
    pub(crate) client: Client,
    pub(crate) endpoint: Url,
    pub(crate) access_token: String,
}

impl AcmeDnsProvider {
    /// 使用默认 API 地址创建
    pub fn new(domain: &str, access_token: String) -> Result<Self> {
        Self::with_base_url(ACMEDNS_API_BASE, domain, access_token)
    }

    /// 使用自定义 API 地址创建
    pub fn with_base_url(base_url: &str, domain: &str, access_token: String) -> Result<Self> {
        if domain.trim().is_empty() {
            return Err(ProviderError::InvalidConfig {
                detail: "domain must not be empty".to_string(),
            });
        }

        let endpoint = Self::endpoint_for(base_url, domain)?;
        let client = Client::builder()
            .build()
            .map_err(|e| ProviderError::InvalidConfig {
                detail: format!("failed to build HTTP client: {e}"),
            })?;

        Ok(Self {
            client,
            endpoint,
            access_token,
        })
    }

    /// rotateChallenges 端点
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    fn endpoint_for(base_url: &str, domain: &str) -> Result<Url> {
        let raw = format!(
            "{}/v1/acmeChallengeSets/{}:rotateChallenges",
            base_url.trim_end_matches('/'),
            urlencoding::encode(domain.trim())
        );

        Url::parse(&raw).map_err(|e| ProviderError::InvalidConfig {
            detail: format!("invalid endpoint `{raw}`: {e}"),
        })
    }
}

impl fmt::Debug for AcmeDnsProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AcmeDnsProvider")
            .field("endpoint", &self.endpoint.as_str())
            .field("access_token", &"<redacted>")
            .finish_non_exhaustive()
    }
}
