use super::{char_len, ensure, is_blank};
use crate::config::UploadConfig;
use crate::dto::upload::UploadMeta;
use crate::error::Sentinel;

/// Limits an uploaded file's metadata is checked against
#[derive(Debug, Clone)]
pub struct UploadPolicy {
    pub max_size: u64,
    pub max_name_length: usize,
    /// 小写，不含点
    pub allowed_extensions: Vec<String>,
}

impl From<&UploadConfig> for UploadPolicy {
    fn from(config: &UploadConfig) -> Self {
        Self {
            max_size: config.max_size,
            max_name_length: config.max_name_length,
            allowed_extensions: config.allowed_extensions.clone(),
        }
    }
}

impl UploadPolicy {
    pub fn allows_extension(&self, ext: &str) -> bool {
        self.allowed_extensions.iter().any(|a| a.eq_ignore_ascii_case(ext))
    }

    pub fn check(&self, meta: &UploadMeta) -> Result<(), Sentinel> {
        ensure(meta.size > 0 && !is_blank(&meta.file_name), Sentinel::FileEmpty)?;
        ensure(
            char_len(&meta.file_name) <= self.max_name_length,
            Sentinel::FileNameTooLong,
        )?;
        ensure(meta.size <= self.max_size, Sentinel::FileTooLarge)?;
        ensure(
            meta.extension().is_some_and(|ext| self.allows_extension(&ext)),
            Sentinel::FileTypeNotAllowed,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy() -> UploadPolicy {
        UploadPolicy::from(&UploadConfig::default())
    }

    fn meta(name: &str, size: u64) -> UploadMeta {
        UploadMeta {
            file_name: name.to_string(),
            size,
        }
    }

    #[test]
    fn test_valid_upload() {
        assert_eq!(policy().check(&meta("avatar.png", 1024)), Ok(()));
        assert_eq!(policy().check(&meta("报表.XLSX", 1024)), Ok(()));
    }

    #[test]
    fn test_empty_file() {
        assert_eq!(policy().check(&meta("avatar.png", 0)), Err(Sentinel::FileEmpty));
        assert_eq!(policy().check(&meta("", 10)), Err(Sentinel::FileEmpty));
    }

    #[test]
    fn test_limits_in_order() {
        let long = format!("{}.exe", "a".repeat(100));
        assert_eq!(
            policy().check(&meta(&long, u64::MAX)),
            Err(Sentinel::FileNameTooLong)
        );
        assert_eq!(
            policy().check(&meta("setup.exe", 51 * 1024 * 1024)),
            Err(Sentinel::FileTooLarge)
        );
        assert_eq!(policy().check(&meta("setup.exe", 10)), Err(Sentinel::FileTypeNotAllowed));
        assert_eq!(policy().check(&meta("Makefile", 10)), Err(Sentinel::FileTypeNotAllowed));
    }

    #[test]
    fn test_policy_from_config() {
        let config = crate::config::Config::from_toml(
            r#"
            [upload]
            max_size = 100
            allowed_extensions = [".PNG"]
            "#,
        )
        .unwrap();
        let policy = UploadPolicy::from(&config.upload);
        assert_eq!(policy.check(&meta("a.png", 100)), Ok(()));
        assert_eq!(policy.check(&meta("a.png", 101)), Err(Sentinel::FileTooLarge));
        assert_eq!(policy.check(&meta("a.jpg", 1)), Err(Sentinel::FileTypeNotAllowed));
    }
}
