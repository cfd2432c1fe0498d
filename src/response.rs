//! Response envelope
//!
//! 所有接口统一返回 `{code, msg, data}`，列表接口返回 `{total, rows}`。

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// 业务状态码
pub mod code {
    pub const SUCCESS: u16 = 200;
    pub const BAD_REQUEST: u16 = 400;
    pub const UNAUTHORIZED: u16 = 401;
    pub const FORBIDDEN: u16 = 403;
    pub const NOT_FOUND: u16 = 404;
    pub const ERROR: u16 = 500;
    /// 业务警告（如名称重复）
    pub const WARN: u16 = 601;
}

/// API response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub code: u16,
    pub msg: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            code: code::SUCCESS,
            msg: "操作成功".to_string(),
            data: Some(data),
        }
    }

    pub fn error(code: u16, msg: impl Into<String>) -> Self {
        Self {
            code,
            msg: msg.into(),
            data: None,
        }
    }

    pub fn from_error(err: &AppError) -> Self {
        Self::error(err.code(), err.client_message())
    }

    pub fn is_success(&self) -> bool {
        self.code == code::SUCCESS
    }
}

impl ApiResponse<()> {
    pub fn success_msg(msg: impl Into<String>) -> Self {
        Self {
            code: code::SUCCESS,
            msg: msg.into(),
            data: None,
        }
    }
}

/// 分页表格数据
#[derive(Debug, Serialize)]
pub struct PageResponse<T: Serialize> {
    pub total: u64,
    pub rows: Vec<T>,
}

impl<T: Serialize> PageResponse<T> {
    pub fn new(rows: Vec<T>, total: u64) -> Self {
        Self { total, rows }
    }

    pub fn empty() -> Self {
        Self {
            total: 0,
            rows: Vec::new(),
        }
    }
}

/// 分页查询参数
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageQuery {
    #[serde(default = "default_page_num")]
    pub page_num: i64,
    #[serde(default = "default_page_size")]
    pub page_size: i64,
}

fn default_page_num() -> i64 {
    1
}

fn default_page_size() -> i64 {
    10
}

impl Default for PageQuery {
    fn default() -> Self {
        Self {
            page_num: default_page_num(),
            page_size: default_page_size(),
        }
    }
}

impl PageQuery {
    /// 数据库查询的 offset，超大页码饱和到 u64::MAX
    pub fn offset(&self) -> u64 {
        let skipped_pages = u64::try_from(self.page_num.max(1) - 1).unwrap_or(0);
        skipped_pages.saturating_mul(self.limit())
    }

    /// 每页条数（1-100）
    pub fn limit(&self) -> u64 {
        self.page_size.clamp(1, 100) as u64
    }
}
