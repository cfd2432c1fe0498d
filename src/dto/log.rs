use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::TimeRange;
use crate::entity::{BusinessType, LoginLog, LoginStatus, OpResult, OperLog};
use crate::response::PageQuery;

/// 登录日志查询
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LoginLogQuery {
    #[serde(flatten)]
    pub page: PageQuery,
    pub ipaddr: Option<String>,
    pub user_name: Option<String>,
    pub status: Option<LoginStatus>,
    #[serde(flatten)]
    pub range: TimeRange,
}

/// 操作日志查询
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OperLogQuery {
    #[serde(flatten)]
    pub page: PageQuery,
    pub title: Option<String>,
    pub oper_name: Option<String>,
    pub business_type: Option<BusinessType>,
    pub status: Option<OpResult>,
    #[serde(flatten)]
    pub range: TimeRange,
}

/// 批量删除日志请求
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DeleteLogsRequest {
    pub ids: Vec<i64>,
}

/// 解锁账户请求 (清除登录失败计数)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UnlockUserRequest {
    pub user_name: String,
}

/// 登录日志列表项
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginLogItem {
    pub info_id: i64,
    pub user_name: String,
    pub ipaddr: String,
    pub login_location: String,
    pub browser: String,
    pub os: String,
    pub status: LoginStatus,
    pub msg: String,
    pub login_time: DateTime<Utc>,
}

impl From<LoginLog> for LoginLogItem {
    fn from(log: LoginLog) -> Self {
        Self {
            info_id: log.info_id,
            user_name: log.user_name,
            ipaddr: log.ipaddr,
            login_location: log.login_location,
            browser: log.browser,
            os: log.os,
            status: log.status,
            msg: log.msg,
            login_time: log.login_time,
        }
    }
}

/// 操作日志列表项
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OperLogItem {
    pub oper_id: i64,
    pub title: String,
    pub business_type: BusinessType,
    /// 业务类型 (中文)
    pub business_type_name: &'static str,
    pub oper_name: String,
    pub oper_ip: String,
    pub oper_location: String,
    pub status: OpResult,
    pub oper_time: DateTime<Utc>,
    pub cost_time: i64,
}

impl From<OperLog> for OperLogItem {
    fn from(log: OperLog) -> Self {
        Self {
            oper_id: log.oper_id,
            title: log.title,
            business_type_name: log.business_type.to_chinese(),
            business_type: log.business_type,
            oper_name: log.oper_name,
            oper_ip: log.oper_ip,
            oper_location: log.oper_location,
            status: log.status,
            oper_time: log.oper_time,
            cost_time: log.cost_time,
        }
    }
}
