use crate::error::{AppError, AppResult, ConfigError, FileError};
use serde::Deserialize;
use std::path::Path;

/// 程序配置文件
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// 摘要服务地址
    pub base_url: String,
    /// 上传 PDF 的接口路径
    pub upload_path: String,
    /// 提取文本的接口路径
    pub extract_path: String,
    /// 分析文本的接口路径
    pub analyze_path: String,
    /// 文本提取方式
    pub extract_method: String,
    /// 请求超时（秒），不设置则不超时
    pub request_timeout_secs: Option<u64>,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000".to_string(),
            upload_path: "/upload-pdf/".to_string(),
            extract_path: "/extract-text/".to_string(),
            analyze_path: "/analyze/".to_string(),
            extract_method: "pypdf2".to_string(),
            request_timeout_secs: None,
            verbose_logging: false,
        }
    }
}

impl Config {
    /// 从环境变量读取配置，缺省值取自 `Default`
    pub fn from_env() -> AppResult<Self> {
        Self::default().merge_env()
    }

    /// 从 TOML 文件读取配置，再用环境变量覆盖
    pub async fn from_toml_file(path: &Path) -> AppResult<Self> {
        let display = path.display().to_string();
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| AppError::file_read_failed(display.clone(), e))?;
        let config: Config = toml::from_str(&content).map_err(|e| FileError::TomlParseFailed {
            path: display,
            source: e,
        })?;
        config.merge_env()
    }

    fn merge_env(self) -> AppResult<Self> {
        Ok(Self {
            base_url: std::env::var("TEZ_OZET_BASE_URL").unwrap_or(self.base_url),
            extract_method: std::env::var("TEZ_OZET_EXTRACT_METHOD")
                .unwrap_or(self.extract_method),
            request_timeout_secs: match std::env::var("TEZ_OZET_TIMEOUT_SECS") {
                Ok(v) => Some(parse_env("TEZ_OZET_TIMEOUT_SECS", &v, "u64")?),
                Err(_) => self.request_timeout_secs,
            },
            verbose_logging: match std::env::var("VERBOSE_LOGGING") {
                Ok(v) => parse_env("VERBOSE_LOGGING", &v, "bool")?,
                Err(_) => self.verbose_logging,
            },
            ..self
        })
    }

    /// 校验服务地址
    pub fn validate(&self) -> AppResult<()> {
        let url = self.base_url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::InvalidBaseUrl {
                url: self.base_url.clone(),
                reason: "必须以 http:// 或 https:// 开头".to_string(),
            }
            .into());
        }
        Ok(())
    }
}

fn parse_env<T: std::str::FromStr>(var_name: &str, value: &str, expected_type: &str) -> AppResult<T> {
    value.trim().parse().map_err(|_| {
        ConfigError::EnvVarParseFailed {
            var_name: var_name.to_string(),
            value: value.to_string(),
            expected_type: expected_type.to_string(),
        }
        .into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_endpoints() {
        let config = Config::default();
        assert_eq!(config.upload_path, "/upload-pdf/");
        assert_eq!(config.extract_path, "/extract-text/");
        assert_eq!(config.analyze_path, "/analyze/");
        assert_eq!(config.extract_method, "pypdf2");
        assert_eq!(config.request_timeout_secs, None);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: Config = toml::from_str(
            r#"
            base_url = "http://ozet.local:9000"
            request_timeout_secs = 30
            "#,
        )
        .unwrap();
        assert_eq!(config.base_url, "http://ozet.local:9000");
        assert_eq!(config.request_timeout_secs, Some(30));
        assert_eq!(config.analyze_path, "/analyze/");
    }

    #[tokio::test]
    async fn test_from_toml_file_bad_syntax() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "base_url = ").unwrap();
        let err = Config::from_toml_file(file.path()).await.unwrap_err();
        assert!(matches!(err, AppError::File(FileError::TomlParseFailed { .. })));
    }

    #[tokio::test]
    async fn test_from_toml_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::from_toml_file(&dir.path().join("yok.toml"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::File(FileError::NotFound { .. })));
    }

    #[test]
    fn test_validate_rejects_non_http() {
        let config = Config {
            base_url: "ftp://ozet.local".to_string(),
            ..Config::default()
        };
        assert!(config.validate().is_err());
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_parse_env_error() {
        let err = parse_env::<u64>("TEZ_OZET_TIMEOUT_SECS", "soon", "u64").unwrap_err();
        assert!(matches!(
            err,
            AppError::Config(ConfigError::EnvVarParseFailed { .. })
        ));
    }
}
