//! OperLog entity - 操作日志记录
//!
//! 表名: sys_oper_log

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 业务类型
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "i32", try_from = "i32")]
pub enum BusinessType {
    /// 其它
    #[default]
    Other = 0,
    /// 新增
    Insert = 1,
    /// 修改
    Update = 2,
    /// 删除
    Delete = 3,
    /// 授权
    Grant = 4,
    /// 导出
    Export = 5,
    /// 导入
    Import = 6,
    /// 强退
    Force = 7,
    /// 清空数据
    Clean = 8,
}

impl BusinessType {
    /// 转换为中文显示
    pub fn to_chinese(&self) -> &'static str {
        match self {
            BusinessType::Other => "其它",
            BusinessType::Insert => "新增",
            BusinessType::Update => "修改",
            BusinessType::Delete => "删除",
            BusinessType::Grant => "授权",
            BusinessType::Export => "导出",
            BusinessType::Import => "导入",
            BusinessType::Force => "强退",
            BusinessType::Clean => "清空数据",
        }
    }
}

impl From<BusinessType> for i32 {
    fn from(value: BusinessType) -> Self {
        value as i32
    }
}

impl TryFrom<i32> for BusinessType {
    type Error = String;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Ok(match value {
            0 => BusinessType::Other,
            1 => BusinessType::Insert,
            2 => BusinessType::Update,
            3 => BusinessType::Delete,
            4 => BusinessType::Grant,
            5 => BusinessType::Export,
            6 => BusinessType::Import,
            7 => BusinessType::Force,
            8 => BusinessType::Clean,
            other => return Err(format!("unknown business type: {}", other)),
        })
    }
}

/// 操作人类别
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "i32", try_from = "i32")]
pub enum OperatorType {
    #[default]
    Other = 0,
    /// 后台用户
    Manage = 1,
    /// 手机端用户
    Mobile = 2,
}

impl From<OperatorType> for i32 {
    fn from(value: OperatorType) -> Self {
        value as i32
    }
}

impl TryFrom<i32> for OperatorType {
    type Error = String;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Ok(match value {
            0 => OperatorType::Other,
            1 => OperatorType::Manage,
            2 => OperatorType::Mobile,
            other => return Err(format!("unknown operator type: {}", other)),
        })
    }
}

/// 操作结果
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "i32", try_from = "i32")]
pub enum OpResult {
    #[default]
    Success = 0,
    Failed = 1,
}

impl OpResult {
    pub fn to_chinese(&self) -> &'static str {
        match self {
            OpResult::Success => "成功",
            OpResult::Failed => "失败",
        }
    }
}

impl From<OpResult> for i32 {
    fn from(value: OpResult) -> Self {
        value as i32
    }
}

impl TryFrom<i32> for OpResult {
    type Error = String;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(OpResult::Success),
            1 => Ok(OpResult::Failed),
            other => Err(format!("unknown operation result: {}", other)),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperLog {
    pub oper_id: i64,

    /// 模块标题
    pub title: String,

    pub business_type: BusinessType,

    /// 处理方法
    pub method: String,

    /// HTTP 请求方式
    pub request_method: String,

    pub operator_type: OperatorType,

    /// 操作人员
    pub oper_name: String,

    pub dept_name: String,

    pub oper_url: String,

    pub oper_ip: String,

    pub oper_location: String,

    /// 请求参数 (已脱敏)
    pub oper_param: String,

    /// 返回参数
    pub json_result: String,

    pub status: OpResult,

    pub error_msg: String,

    pub oper_time: DateTime<Utc>,

    /// 消耗时间 (毫秒)
    pub cost_time: i64,
}

/// 参数中需要脱敏的字段
pub const EXCLUDE_PROPERTIES: [&str; 4] = ["password", "oldPassword", "newPassword", "confirmPassword"];

/// 参数与返回值记录的最大长度
const MAX_PARAM_LEN: usize = 2000;

/// 创建日志记录的辅助结构
#[derive(Clone, Debug)]
pub struct NewOperLog {
    pub title: String,
    pub business_type: BusinessType,
    pub operator_type: OperatorType,
    pub oper_name: String,
    pub dept_name: String,
    pub method: String,
    pub request_method: String,
    pub oper_url: String,
    pub oper_ip: String,
    pub oper_param: String,
    pub json_result: String,
    pub status: OpResult,
    pub error_msg: String,
}

impl NewOperLog {
    pub fn new(title: impl Into<String>, business_type: BusinessType, oper_name: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            business_type,
            operator_type: OperatorType::Manage,
            oper_name: oper_name.into(),
            dept_name: String::new(),
            method: String::new(),
            request_method: String::new(),
            oper_url: String::new(),
            oper_ip: String::new(),
            oper_param: String::new(),
            json_result: String::new(),
            status: OpResult::Success,
            error_msg: String::new(),
        }
    }

    pub fn with_dept(mut self, dept_name: impl Into<String>) -> Self {
        self.dept_name = dept_name.into();
        self
    }

    pub fn with_request(
        mut self,
        request_method: impl Into<String>,
        oper_url: impl Into<String>,
        method: impl Into<String>,
    ) -> Self {
        self.request_method = request_method.into();
        self.oper_url = oper_url.into();
        self.method = method.into();
        self
    }

    pub fn with_ip(mut self, ip: impl Into<String>) -> Self {
        self.oper_ip = ip.into();
        self
    }

    /// 记录请求参数，敏感字段会被脱敏
    pub fn with_params(mut self, params: &Value) -> Self {
        self.oper_param = truncate(&sanitize_params(params).to_string());
        self
    }

    pub fn with_result(mut self, json_result: &Value) -> Self {
        self.json_result = truncate(&json_result.to_string());
        self
    }

    pub fn failed(mut self, error_msg: impl Into<String>) -> Self {
        self.status = OpResult::Failed;
        self.error_msg = truncate(&error_msg.into());
        self
    }

    /// 生成最终记录
    pub fn finish(self, oper_time: DateTime<Utc>, cost_time: i64) -> OperLog {
        OperLog {
            oper_id: 0,
            title: self.title,
            business_type: self.business_type,
            method: self.method,
            request_method: self.request_method,
            operator_type: self.operator_type,
            oper_name: self.oper_name,
            dept_name: self.dept_name,
            oper_url: self.oper_url,
            oper_ip: self.oper_ip,
            oper_location: String::new(),
            oper_param: self.oper_param,
            json_result: self.json_result,
            status: self.status,
            error_msg: self.error_msg,
            oper_time,
            cost_time,
        }
    }
}

/// 递归移除敏感字段
pub fn sanitize_params(params: &Value) -> Value {
    match params {
        Value::Object(map) => Value::Object(
            map.iter()
                .filter(|(k, _)| !EXCLUDE_PROPERTIES.contains(&k.as_str()))
                .map(|(k, v)| (k.clone(), sanitize_params(v)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.iter().map(sanitize_params).collect()),
        other => other.clone(),
    }
}

fn truncate(s: &str) -> String {
    s.chars().take(MAX_PARAM_LEN).collect()
}
