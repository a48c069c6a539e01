//! acmeChallengeSets API 类型定义

use serde::Serialize;

use crate::types::{ChallengeOperation, ChallengeRecord};

/// rotateChallenges 请求体
///
/// `recordsToAdd` 与 `recordsToRemove` 只会出现其中一个，另一个不序列化。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RotateChallengesRequest<'a> {
    pub access_token: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub records_to_add: Option<Vec<&'a ChallengeRecord>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub records_to_remove: Option<Vec<&'a ChallengeRecord>>,
    pub keep_expired_records: bool,
}

impl<'a> RotateChallengesRequest<'a> {
    pub fn new(
        access_token: &'a str,
        operation: ChallengeOperation,
        record: &'a ChallengeRecord,
    ) -> Self {
        let (records_to_add, records_to_remove) = match operation {
            ChallengeOperation::Set => (Some(vec![record]), None),
            ChallengeOperation::Unset => (None, Some(vec![record])),
        };

        Self {
            access_token,
            records_to_add,
            records_to_remove,
            keep_expired_records: false,
        }
    }
}
