use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    /// Logging configuration
    #[serde(default)]
    pub log: LogConfig,
    /// Login captcha configuration
    #[serde(default)]
    pub captcha: CaptchaConfig,
    /// Upload limits applied to file metadata
    #[serde(default)]
    pub upload: UploadConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LogConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CaptchaConfig {
    /// Whether login requests must carry a captcha
    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl Default for CaptchaConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UploadConfig {
    /// Maximum file size in bytes (default: 50MB)
    #[serde(default = "default_max_size")]
    pub max_size: u64,
    /// Maximum file name length in characters
    #[serde(default = "default_max_name_length")]
    pub max_name_length: usize,
    /// Allowed extensions, lowercase, without the dot
    #[serde(default = "default_allowed_extensions")]
    pub allowed_extensions: Vec<String>,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            max_size: default_max_size(),
            max_name_length: default_max_name_length(),
            allowed_extensions: default_allowed_extensions(),
        }
    }
}

fn default_max_size() -> u64 {
    50 * 1024 * 1024 // 50MB
}

fn default_max_name_length() -> usize {
    100
}

fn default_allowed_extensions() -> Vec<String> {
    [
        // 图片
        "bmp", "gif", "jpg", "jpeg", "png",
        // 文档
        "doc", "docx", "xls", "xlsx", "ppt", "pptx", "html", "htm", "txt", "pdf",
        // 压缩包
        "rar", "zip", "gz", "bz2",
        // 视频
        "mp4", "avi", "rmvb",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

impl Config {
    /// Load configuration from TOML file
    pub fn load(path: &str) -> AppResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse configuration from a TOML string
    pub fn from_toml(content: &str) -> AppResult<Self> {
        let mut config: Config =
            toml::from_str(content).map_err(|e| AppError::Config(e.to_string()))?;

        for ext in config.upload.allowed_extensions.iter_mut() {
            *ext = ext.trim_start_matches('.').to_ascii_lowercase();
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.log.level, "info");
        assert!(config.captcha.enabled);
        assert_eq!(config.upload.max_size, 50 * 1024 * 1024);
        assert!(config.upload.allowed_extensions.iter().any(|e| e == "png"));
    }

    #[test]
    fn test_toml_parse() {
        let toml_str = r#"
            [log]
            level = "debug"

            [captcha]
            enabled = false

            [upload]
            max_size = 1024
            allowed_extensions = [".PNG", "pdf"]
        "#;

        let config = Config::from_toml(toml_str).unwrap();
        assert_eq!(config.log.level, "debug");
        assert!(!config.captcha.enabled);
        assert_eq!(config.upload.max_size, 1024);
        assert_eq!(config.upload.max_name_length, 100);
        assert_eq!(config.upload.allowed_extensions, vec!["png", "pdf"]);
    }

    #[test]
    fn test_invalid_toml() {
        let err = Config::from_toml("log = 3").unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = Config::load("/nonexistent/rbac-admin.toml").unwrap_err();
        assert!(matches!(err, AppError::Io(_)));
    }
}
