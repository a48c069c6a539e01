//! 配置模块
//!
//! 从 TOML 文件加载，环境变量覆盖文件中的值。

use std::fmt;
use std::path::{Path, PathBuf};

use acmedns_provider::ACMEDNS_API_BASE;
use anyhow::{Context, bail};
use serde::Deserialize;

const DEFAULT_CONFIG_FILE: &str = "config.toml";
const DEFAULT_TIMEOUT_SECS: u64 = 60;

const ENV_DOMAIN: &str = "ACMEDNS_DOMAIN";
const ENV_API_KEY: &str = "ACMEDNS_API_KEY";
const ENV_ENDPOINT: &str = "ACMEDNS_ENDPOINT";

/// 配置文件内容，所有字段都可以由环境变量补齐
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    domain: Option<String>,
    api_key: Option<String>,
    endpoint: Option<String>,
    timeout_secs: Option<u64>,
}

/// 应用配置
#[derive(Clone)]
pub struct AppConfig {
    /// acmeChallengeSets 的域名（拼进 endpoint 路径）
    pub domain: String,
    /// 作为 accessToken 发送的共享密钥
    pub api_key: String,
    pub endpoint: String,
    /// 命令行未指定 timeout 时使用
    pub timeout_secs: u64,
}

impl AppConfig {
    /// 加载配置
    ///
    /// 显式给出的路径必须存在；未给出时读取当前目录下的 `config.toml`（可不存在）。
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        Self::load_with_env(path, |key| std::env::var(key).ok())
    }

    fn load_with_env(
        path: Option<&Path>,
        env: impl Fn(&str) -> Option<String>,
    ) -> anyhow::Result<Self> {
        let file = match path {
            Some(path) => Self::read_file(path)?,
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    Self::read_file(&default_path)?
                } else {
                    FileConfig::default()
                }
            }
        };

        let non_empty = |value: Option<String>| value.filter(|v| !v.trim().is_empty());

        let domain = non_empty(env(ENV_DOMAIN))
            .or_else(|| non_empty(file.domain))
            .with_context(|| format!("missing `domain` (config file or {ENV_DOMAIN})"))?;
        let api_key = non_empty(env(ENV_API_KEY))
            .or_else(|| non_empty(file.api_key))
            .with_context(|| format!("missing `api_key` (config file or {ENV_API_KEY})"))?;
        let endpoint = non_empty(env(ENV_ENDPOINT))
            .or_else(|| non_empty(file.endpoint))
            .unwrap_or_else(|| ACMEDNS_API_BASE.to_string());

        let timeout_secs = file.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS);
        if timeout_secs == 0 {
            bail!("`timeout_secs` must be a positive number of seconds");
        }

        Ok(Self {
            domain: domain.trim().to_string(),
            api_key,
            endpoint,
            timeout_secs,
        })
    }

    fn read_file(path: &Path) -> anyhow::Result<FileConfig> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("domain", &self.domain)
            .field("api_key", &"<redacted>")
            .field("endpoint", &self.endpoint)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_load_from_file_with_defaults() {
        let file = write_config(
            r#"
            domain = "example.com"
            api_key = "secret"
            "#,
        );

        let config = AppConfig::load_with_env(Some(file.path()), env_from(&[])).unwrap();

        assert_eq!(config.domain, "example.com");
        assert_eq!(config.api_key, "secret");
        assert_eq!(config.endpoint, ACMEDNS_API_BASE);
        assert_eq!(config.timeout_secs, 60);
    }

    #[test]
    fn test_env_overrides_file() {
        let file = write_config(
            r#"
            domain = "example.com"
            api_key = "file-secret"
            endpoint = "https://file.invalid"
            timeout_secs = 15
            "#,
        );

        let config = AppConfig::load_with_env(
            Some(file.path()),
            env_from(&[
                (ENV_API_KEY, "env-secret"),
                (ENV_ENDPOINT, "http://127.0.0.1:9000"),
            ]),
        )
        .unwrap();

        assert_eq!(config.domain, "example.com");
        assert_eq!(config.api_key, "env-secret");
        assert_eq!(config.endpoint, "http://127.0.0.1:9000");
        assert_eq!(config.timeout_secs, 15);
    }

    #[test]
    fn test_missing_api_key_is_error() {
        let file = write_config(r#"domain = "example.com""#);

        let err = AppConfig::load_with_env(Some(file.path()), env_from(&[])).unwrap_err();
        assert!(err.to_string().contains("api_key"));
    }

    #[test]
    fn test_empty_values_count_as_missing() {
        let file = write_config(
            r#"
            domain = "  "
            api_key = "secret"
            "#,
        );

        let err = AppConfig::load_with_env(Some(file.path()), env_from(&[])).unwrap_err();
        assert!(err.to_string().contains("domain"));
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");

        let err = AppConfig::load_with_env(
            Some(&path),
            env_from(&[(ENV_DOMAIN, "example.com"), (ENV_API_KEY, "secret")]),
        )
        .unwrap_err();
        assert!(err.to_string().contains("failed to read config file"));
    }

    #[test]
    fn test_rejects_malformed_and_zero_timeout() {
        let file = write_config("domain = [");
        assert!(AppConfig::load_with_env(Some(file.path()), env_from(&[])).is_err());

        let file = write_config(
            r#"
            domain = "example.com"
            api_key = "secret"
            timeout_secs = 0
            "#,
        );
        assert!(AppConfig::load_with_env(Some(file.path()), env_from(&[])).is_err());
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = AppConfig {
            domain: "example.com".to_string(),
            api_key: "top-secret".to_string(),
            endpoint: ACMEDNS_API_BASE.to_string(),
            timeout_secs: 60,
        };
        assert!(!format!("{config:?}").contains("top-secret"));
    }
}
