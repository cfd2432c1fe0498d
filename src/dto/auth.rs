use serde::{Deserialize, Serialize};

use crate::entity::{Sex, SysUser};
use crate::permission::LoginUser;
use crate::tree::RouterVo;

/// 登录请求
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
    /// 验证码
    pub code: String,
    /// 验证码标识
    pub uuid: String,
}

/// 修改密码请求 (用户修改自己的密码)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChangePasswordRequest {
    pub old_password: String,
    pub new_password: String,
}

/// 修改个人信息请求
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateProfileRequest {
    pub nick_name: String,
    pub email: String,
    pub phonenumber: String,
    pub sex: Sex,
}

/// 登录响应
#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub token: String,
}

/// 当前用户信息
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfoResponse {
    pub user: SysUser,
    pub roles: Vec<String>,
    pub permissions: Vec<String>,
}

impl UserInfoResponse {
    pub fn new(user: SysUser, login: &LoginUser) -> Self {
        Self {
            user,
            roles: login.roles.iter().cloned().collect(),
            permissions: login.permissions.iter().cloned().collect(),
        }
    }
}

/// 路由响应
#[derive(Debug, Clone, Serialize)]
pub struct RoutersResponse {
    pub routers: Vec<RouterVo>,
}
