//! 响应分类
//!
//! 判定规则集中在这里：状态码为 200，且响应体中出现 digest 子串。
//! 响应体不做 JSON 解析。

use crate::types::ChallengeOutcome;

const STATUS_OK: u16 = 200;

/// 根据状态码和原始响应体判定挑战是否被接受
pub fn classify(digest: &str, status: u16, body: &str) -> ChallengeOutcome {
    if status == STATUS_OK && body.contains(digest) {
        ChallengeOutcome::Accepted
    } else {
        ChallengeOutcome::Rejected { status }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepted_when_digest_present_and_ok() {
        let body = r#"{"record":[{"fqdn":"example.com","digest":"abc123"}]}"#;
        assert_eq!(classify("abc123", 200, body), ChallengeOutcome::Accepted);
    }

    #[test]
    fn test_rejected_when_digest_absent() {
        assert_eq!(
            classify("abc123", 200, "no match"),
            ChallengeOutcome::Rejected { status: 200 }
        );
    }

    #[test]
    fn test_status_dominates_body() {
        assert_eq!(
            classify("abc123", 500, "abc123"),
            ChallengeOutcome::Rejected { status: 500 }
        );
        assert_eq!(
            classify("abc123", 201, "abc123"),
            ChallengeOutcome::Rejected { status: 201 }
        );
    }

    #[test]
    fn test_substring_match_anywhere() {
        assert!(classify("abc", 200, "xxabcxx").is_accepted());
        assert!(!classify("ABC", 200, "abc").is_accepted());
    }
}
