//! ACME DNS-01 挑战提交库
//!
//! 通过 acmeChallengeSets `rotateChallenges` API 添加或移除单条挑战记录，
//! 并按"状态码 200 且响应体包含 digest"判定结果。

mod classify;
mod error;
mod http_client;
mod providers;
mod traits;
mod types;

pub use classify::classify;
pub use error::{ProviderError, Result};
pub use providers::{ACMEDNS_API_BASE, AcmeDnsProvider};
pub use traits::ChallengeProvider;
pub use types::{ChallengeOperation, ChallengeOutcome, ChallengeRecord, SubmitResponse};
