//! Entity module - 系统表记录
//!
//! 每个子模块对应一张表的行结构，持久化由外部数据层负责。

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Sentinel;

pub mod department;
pub mod dict;
pub mod login_log;
pub mod menu;
pub mod op_log;
pub mod post;
pub mod role;
pub mod sys_config;
pub mod user;

pub use department::SysDept;
pub use dict::{SysDictData, SysDictType};
pub use login_log::{LoginLog, LoginStatus, NewLoginLog};
pub use menu::{MenuType, SysMenu, Visibility};
pub use op_log::{BusinessType, NewOperLog, OpResult, OperLog, OperatorType};
pub use post::SysPost;
pub use role::{DataScope, SysRole};
pub use sys_config::SysConfig;
pub use user::{Sex, SysUser};

/// 通用状态: "0"=正常, "1"=停用
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    #[default]
    #[serde(rename = "0")]
    Normal,
    #[serde(rename = "1")]
    Disabled,
}

impl Status {
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Normal => "0",
            Status::Disabled => "1",
        }
    }

    pub fn to_chinese(self) -> &'static str {
        match self {
            Status::Normal => "正常",
            Status::Disabled => "停用",
        }
    }
}

impl TryFrom<&str> for Status {
    type Error = Sentinel;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "0" => Ok(Status::Normal),
            "1" => Ok(Status::Disabled),
            _ => Err(Sentinel::InvalidParams),
        }
    }
}

/// 删除标志: "0"=存在, "2"=删除
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DelFlag {
    #[default]
    #[serde(rename = "0")]
    Exists,
    #[serde(rename = "2")]
    Deleted,
}

/// 是否标志: "Y" / "N"
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum YesNo {
    #[serde(rename = "Y")]
    Yes,
    #[default]
    #[serde(rename = "N")]
    No,
}

/// 审计字段，所有业务表共有
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseFields {
    #[serde(default)]
    pub create_by: String,
    pub create_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub update_by: String,
    pub update_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub remark: Option<String>,
}
