//! Role entity - 角色信息表
//!
//! 表名: sys_role

use serde::{Deserialize, Serialize};

use super::{BaseFields, DelFlag, Status};
use crate::permission::SUPER_ADMIN_ID;

/// 数据范围
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DataScope {
    /// 全部数据权限
    #[default]
    #[serde(rename = "1")]
    All,
    /// 自定数据权限
    #[serde(rename = "2")]
    Custom,
    /// 本部门数据权限
    #[serde(rename = "3")]
    Dept,
    /// 本部门及以下数据权限
    #[serde(rename = "4")]
    DeptAndChild,
    /// 仅本人数据权限
    #[serde(rename = "5")]
    SelfOnly,
}

impl DataScope {
    pub fn to_chinese(self) -> &'static str {
        match self {
            DataScope::All => "全部数据权限",
            DataScope::Custom => "自定数据权限",
            DataScope::Dept => "本部门数据权限",
            DataScope::DeptAndChild => "本部门及以下数据权限",
            DataScope::SelfOnly => "仅本人数据权限",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SysRole {
    pub role_id: i64,

    pub role_name: String,

    /// 角色权限字符串
    pub role_key: String,

    /// 显示顺序
    pub role_sort: i32,

    #[serde(default)]
    pub data_scope: DataScope,

    /// 菜单树选择项是否关联显示
    #[serde(default = "default_true")]
    pub menu_check_strictly: bool,

    /// 部门树选择项是否关联显示
    #[serde(default = "default_true")]
    pub dept_check_strictly: bool,

    #[serde(default)]
    pub status: Status,

    #[serde(default)]
    pub del_flag: DelFlag,

    #[serde(flatten)]
    pub base: BaseFields,
}

fn default_true() -> bool {
    true
}

impl SysRole {
    pub fn is_admin(&self) -> bool {
        self.role_id == SUPER_ADMIN_ID
    }
}
