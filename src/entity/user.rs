//! User entity - 用户信息表
//!
//! 表名: sys_user

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{BaseFields, DelFlag, Status};
use crate::permission::SUPER_ADMIN_ID;

/// 用户性别
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sex {
    #[serde(rename = "0")]
    Male,
    #[serde(rename = "1")]
    Female,
    #[default]
    #[serde(rename = "2")]
    Unknown,
}

impl Sex {
    pub fn to_chinese(self) -> &'static str {
        match self {
            Sex::Male => "男",
            Sex::Female => "女",
            Sex::Unknown => "未知",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SysUser {
    pub user_id: i64,

    /// 部门ID
    pub dept_id: Option<i64>,

    /// 用户账号 (唯一)
    pub user_name: String,

    /// 用户昵称
    pub nick_name: String,

    /// 用户类型 ("00" 系统用户)
    #[serde(default)]
    pub user_type: String,

    #[serde(default)]
    pub email: String,

    /// 手机号码
    #[serde(default)]
    pub phonenumber: String,

    #[serde(default)]
    pub sex: Sex,

    /// 头像地址
    #[serde(default)]
    pub avatar: String,

    /// 密码 (哈希)
    #[serde(skip_serializing, default)]
    pub password: String,

    #[serde(default)]
    pub status: Status,

    #[serde(default)]
    pub del_flag: DelFlag,

    /// 最后登录IP
    #[serde(default)]
    pub login_ip: String,

    /// 最后登录时间
    pub login_date: Option<DateTime<Utc>>,

    #[serde(flatten)]
    pub base: BaseFields,
}

impl SysUser {
    pub fn is_admin(&self) -> bool {
        self.user_id == SUPER_ADMIN_ID
    }

    pub fn is_disabled(&self) -> bool {
        self.status == Status::Disabled
    }

    pub fn is_deleted(&self) -> bool {
        self.del_flag == DelFlag::Deleted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_never_serialized() {
        let user = SysUser {
            user_id: 2,
            user_name: "ry".to_string(),
            nick_name: "若依".to_string(),
            password: "$2a$10$hash".to_string(),
            ..Default::default()
        };
        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("password").is_none());
        assert_eq!(json["userName"], "ry");
        assert_eq!(json["sex"], "2");
        assert!(!user.is_admin());
    }

    #[test]
    fn test_flags() {
        let user = SysUser {
            user_id: 1,
            status: Status::Disabled,
            del_flag: DelFlag::Deleted,
            ..Default::default()
        };
        assert!(user.is_admin());
        assert!(user.is_disabled());
        assert!(user.is_deleted());
    }
}
