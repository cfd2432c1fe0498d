use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::TimeRange;
use crate::entity::{DataScope, Status, SysRole};
use crate::response::PageQuery;

/// 新增角色请求
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateRoleRequest {
    pub role_name: String,
    pub role_key: String,
    pub role_sort: i32,
    pub status: Status,
    pub menu_ids: Vec<i64>,
    pub menu_check_strictly: bool,
    pub dept_check_strictly: bool,
    pub remark: Option<String>,
}

/// 修改角色请求
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateRoleRequest {
    pub role_id: i64,
    pub role_name: String,
    pub role_key: String,
    pub role_sort: i32,
    pub status: Status,
    pub menu_ids: Vec<i64>,
    pub menu_check_strictly: bool,
    pub dept_check_strictly: bool,
    pub remark: Option<String>,
}

/// 修改数据权限请求
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DataScopeRequest {
    pub role_id: i64,
    pub data_scope: DataScope,
    pub dept_ids: Vec<i64>,
}

/// 修改角色状态请求
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChangeRoleStatusRequest {
    pub role_id: i64,
    pub status: Status,
}

/// 批量删除角色请求
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DeleteRolesRequest {
    pub ids: Vec<i64>,
}

/// 角色批量授权/取消授权用户请求
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AuthUsersRequest {
    pub role_id: i64,
    pub user_ids: Vec<i64>,
}

/// 角色列表查询
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RoleQuery {
    #[serde(flatten)]
    pub page: PageQuery,
    pub role_name: Option<String>,
    pub role_key: Option<String>,
    pub status: Option<Status>,
    #[serde(flatten)]
    pub range: TimeRange,
}

/// 角色列表项
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleListItem {
    pub role_id: i64,
    pub role_name: String,
    pub role_key: String,
    pub role_sort: i32,
    pub status: Status,
    /// 超级管理员角色不可编辑
    pub admin: bool,
    pub create_time: Option<DateTime<Utc>>,
}

impl From<SysRole> for RoleListItem {
    fn from(role: SysRole) -> Self {
        Self {
            admin: role.is_admin(),
            role_id: role.role_id,
            role_name: role.role_name,
            role_key: role.role_key,
            role_sort: role.role_sort,
            status: role.status,
            create_time: role.base.create_time,
        }
    }
}

/// 角色导出行
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleExportRow {
    pub role_id: i64,
    pub role_name: String,
    pub role_key: String,
    pub role_sort: i32,
    pub data_scope: &'static str,
    pub status: &'static str,
}

impl From<&SysRole> for RoleExportRow {
    fn from(role: &SysRole) -> Self {
        Self {
            role_id: role.role_id,
            role_name: role.role_name.clone(),
            role_key: role.role_key.clone(),
            role_sort: role.role_sort,
            data_scope: role.data_scope.to_chinese(),
            status: role.status.to_chinese(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_item_marks_admin() {
        let item = RoleListItem::from(SysRole {
            role_id: 1,
            role_name: "超级管理员".into(),
            role_key: "admin".into(),
            ..Default::default()
        });
        assert!(item.admin);
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["roleKey"], "admin");
    }

    #[test]
    fn test_data_scope_request() {
        let req: DataScopeRequest =
            serde_json::from_str(r#"{"roleId": 2, "dataScope": "2", "deptIds": [100, 101]}"#).unwrap();
        assert_eq!(req.data_scope, DataScope::Custom);
        assert_eq!(req.dept_ids, vec![100, 101]);
    }

    #[test]
    fn test_export_row() {
        let role = SysRole {
            role_id: 2,
            data_scope: DataScope::SelfOnly,
            status: Status::Disabled,
            ..Default::default()
        };
        let row = RoleExportRow::from(&role);
        assert_eq!(row.data_scope, "仅本人数据权限");
        assert_eq!(row.status, "停用");
    }
}
