use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::TimeRange;
use crate::entity::{Sex, Status, SysPost, SysRole, SysUser};
use crate::response::PageQuery;

/// 新增用户请求
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateUserRequest {
    pub dept_id: Option<i64>,
    pub user_name: String,
    pub nick_name: String,
    pub password: String,
    pub email: String,
    pub phonenumber: String,
    pub sex: Sex,
    pub status: Status,
    pub post_ids: Vec<i64>,
    pub role_ids: Vec<i64>,
    pub remark: Option<String>,
}

/// 修改用户请求 (不含密码)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateUserRequest {
    pub user_id: i64,
    pub dept_id: Option<i64>,
    pub user_name: String,
    pub nick_name: String,
    pub email: String,
    pub phonenumber: String,
    pub sex: Sex,
    pub status: Status,
    pub post_ids: Vec<i64>,
    pub role_ids: Vec<i64>,
    pub remark: Option<String>,
}

/// 批量删除用户请求
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DeleteUsersRequest {
    pub ids: Vec<i64>,
    /// 当前登录用户, 由处理层填入
    pub current_user_id: i64,
}

/// 重置密码请求 (管理员重置他人密码)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResetPasswordRequest {
    pub user_id: i64,
    pub password: String,
}

/// 修改用户状态请求
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChangeUserStatusRequest {
    pub user_id: i64,
    pub status: Status,
}

/// 用户授权角色请求
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AuthRoleRequest {
    pub user_id: i64,
    pub role_ids: Vec<i64>,
}

/// 用户列表查询
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserQuery {
    #[serde(flatten)]
    pub page: PageQuery,
    pub user_name: Option<String>,
    pub phonenumber: Option<String>,
    pub status: Option<Status>,
    pub dept_id: Option<i64>,
    #[serde(flatten)]
    pub range: TimeRange,
}

/// 用户列表项
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserListItem {
    pub user_id: i64,
    pub dept_id: Option<i64>,
    pub dept_name: Option<String>,
    pub user_name: String,
    pub nick_name: String,
    pub email: String,
    pub phonenumber: String,
    pub status: Status,
    pub create_time: Option<DateTime<Utc>>,
}

impl UserListItem {
    pub fn from_user(user: SysUser, dept_name: Option<String>) -> Self {
        Self {
            user_id: user.user_id,
            dept_id: user.dept_id,
            dept_name,
            user_name: user.user_name,
            nick_name: user.nick_name,
            email: user.email,
            phonenumber: user.phonenumber,
            status: user.status,
            create_time: user.base.create_time,
        }
    }
}

/// 用户详情 (编辑表单回显)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDetail {
    pub user: Option<SysUser>,
    pub roles: Vec<SysRole>,
    pub posts: Vec<SysPost>,
    pub role_ids: Vec<i64>,
    pub post_ids: Vec<i64>,
}

impl UserDetail {
    /// 非超级管理员看不到超级管理员角色
    pub fn new(
        user: Option<SysUser>,
        roles: Vec<SysRole>,
        posts: Vec<SysPost>,
        role_ids: Vec<i64>,
        post_ids: Vec<i64>,
        viewer_is_admin: bool,
    ) -> Self {
        let roles = if viewer_is_admin {
            roles
        } else {
            roles.into_iter().filter(|r| !r.is_admin()).collect()
        };
        Self {
            user,
            roles,
            posts,
            role_ids,
            post_ids,
        }
    }
}

/// 用户导出行
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserExportRow {
    pub user_id: i64,
    pub user_name: String,
    pub nick_name: String,
    pub email: String,
    pub phonenumber: String,
    /// 性别 (中文)
    pub sex: &'static str,
    /// 帐号状态 (中文)
    pub status: &'static str,
    pub login_ip: String,
    pub login_date: Option<DateTime<Utc>>,
    pub dept_name: String,
    pub leader: String,
}

impl UserExportRow {
    pub fn new(user: &SysUser, dept_name: &str, leader: &str) -> Self {
        Self {
            user_id: user.user_id,
            user_name: user.user_name.clone(),
            nick_name: user.nick_name.clone(),
            email: user.email.clone(),
            phonenumber: user.phonenumber.clone(),
            sex: user.sex.to_chinese(),
            status: user.status.to_chinese(),
            login_ip: user.login_ip.clone(),
            login_date: user.login_date,
            dept_name: dept_name.to_string(),
            leader: leader.to_string(),
        }
    }
}
