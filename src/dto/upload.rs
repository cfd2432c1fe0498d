use serde::{Deserialize, Serialize};

/// 上传文件元信息 (文件内容由存储层处理)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UploadMeta {
    pub file_name: String,
    /// 字节数
    pub size: u64,
}

impl UploadMeta {
    /// 小写扩展名, 无扩展名时为 None
    pub fn extension(&self) -> Option<String> {
        let (stem, ext) = self.file_name.rsplit_once('.')?;
        if stem.is_empty() || ext.is_empty() {
            return None;
        }
        Some(ext.to_ascii_lowercase())
    }
}

/// 上传结果
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub url: String,
    pub file_name: String,
    pub new_file_name: String,
    pub original_filename: String,
}
