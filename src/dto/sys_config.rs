use serde::{Deserialize, Serialize};

use super::TimeRange;
use crate::entity::YesNo;
use crate::response::PageQuery;

/// 新增参数请求
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateConfigRequest {
    pub config_name: String,
    pub config_key: String,
    pub config_value: String,
    pub config_type: YesNo,
    pub remark: Option<String>,
}

/// 修改参数请求
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateConfigRequest {
    pub config_id: i64,
    pub config_name: String,
    pub config_key: String,
    pub config_value: String,
    pub config_type: YesNo,
    pub remark: Option<String>,
}

/// 参数查询
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConfigQuery {
    #[serde(flatten)]
    pub page: PageQuery,
    pub config_name: Option<String>,
    pub config_key: Option<String>,
    pub config_type: Option<YesNo>,
    #[serde(flatten)]
    pub range: TimeRange,
}
