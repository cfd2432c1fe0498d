//! Request validation
//!
//! Every validator is a fixed sequence of `ensure(...)?` steps; the first
//! failing step decides the returned sentinel. Validators never touch I/O.
//! Checks that need stored state (uniqueness, "has children") live in
//! `guard` and take the facts as arguments.

use std::sync::LazyLock;

use regex::Regex;
use serde::de::DeserializeOwned;

use crate::config::Config;
use crate::error::{AppError, AppResult, ResultExt, Sentinel};

pub mod auth;
pub mod common;
pub mod department;
pub mod dict;
pub mod guard;
pub mod log;
pub mod menu;
pub mod post;
pub mod role;
pub mod sys_config;
pub mod upload;
pub mod user;

pub use upload::UploadPolicy;

/// A request whose fields can be checked without outside state
pub trait Validate {
    fn validate(&self) -> Result<(), Sentinel>;
}

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9-]+(\.[A-Za-z0-9-]+)*\.[A-Za-z]{2,}$")
        .expect("valid email regex")
});

/// 中国大陆手机号
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^1[3-9][0-9]{9}$").expect("valid phone regex"));

/// 字典类型：字母开头，小写字母、数字、下划线
static DICT_TYPE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z][a-z0-9_]*$").expect("valid dict type regex"));

/// Fail with `err` unless `cond` holds
#[inline]
pub fn ensure(cond: bool, err: Sentinel) -> Result<(), Sentinel> {
    if cond {
        Ok(())
    } else {
        tracing::debug!(domain = ?err.domain(), rule = ?err, "request rejected");
        Err(err)
    }
}

pub fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// Length in characters, not bytes
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

pub fn is_email(s: &str) -> bool {
    EMAIL_RE.is_match(s)
}

pub fn is_phone(s: &str) -> bool {
    PHONE_RE.is_match(s)
}

pub fn is_dict_type(s: &str) -> bool {
    DICT_TYPE_RE.is_match(s)
}

/// Empty passes; otherwise must look like an email
pub fn optional_email(s: &str) -> bool {
    s.is_empty() || is_email(s)
}

/// Empty passes; otherwise must look like a mobile number
pub fn optional_phone(s: &str) -> bool {
    s.is_empty() || is_phone(s)
}

/// Deserialize a JSON body as the request named by `kind` and validate it.
///
/// Kinds are `<domain>.<action>`, e.g. `user.create`, `dept.update`.
pub fn check_json(kind: &str, body: &str, config: &Config) -> AppResult<()> {
    match kind {
        "auth.login" => {
            let req: crate::dto::auth::LoginRequest = parse(kind, body)?;
            req.validate().context(kind)?;
            if config.captcha.enabled {
                req.validate_captcha().context(kind)?;
            }
            Ok(())
        }
        "auth.password" => run::<crate::dto::auth::ChangePasswordRequest>(kind, body),
        "auth.profile" => run::<crate::dto::auth::UpdateProfileRequest>(kind, body),

        "user.create" => run::<crate::dto::user::CreateUserRequest>(kind, body),
        "user.update" => run::<crate::dto::user::UpdateUserRequest>(kind, body),
        "user.delete" => run::<crate::dto::user::DeleteUsersRequest>(kind, body),
        "user.reset_password" => run::<crate::dto::user::ResetPasswordRequest>(kind, body),
        "user.status" => run::<crate::dto::user::ChangeUserStatusRequest>(kind, body),
        "user.auth_role" => run::<crate::dto::user::AuthRoleRequest>(kind, body),

        "role.create" => run::<crate::dto::role::CreateRoleRequest>(kind, body),
        "role.update" => run::<crate::dto::role::UpdateRoleRequest>(kind, body),
        "role.data_scope" => run::<crate::dto::role::DataScopeRequest>(kind, body),
        "role.status" => run::<crate::dto::role::ChangeRoleStatusRequest>(kind, body),
        "role.delete" => run::<crate::dto::role::DeleteRolesRequest>(kind, body),
        "role.auth_users" => run::<crate::dto::role::AuthUsersRequest>(kind, body),

        "menu.create" => run::<crate::dto::menu::CreateMenuRequest>(kind, body),
        "menu.update" => run::<crate::dto::menu::UpdateMenuRequest>(kind, body),
        "menu.delete" => run::<crate::dto::menu::DeleteMenuRequest>(kind, body),

        "dept.create" => run::<crate::dto::department::CreateDeptRequest>(kind, body),
        "dept.update" => run::<crate::dto::department::UpdateDeptRequest>(kind, body),
        "dept.delete" => run::<crate::dto::department::DeleteDeptRequest>(kind, body),

        "dict.type.create" => run::<crate::dto::dict::CreateDictTypeRequest>(kind, body),
        "dict.type.update" => run::<crate::dto::dict::UpdateDictTypeRequest>(kind, body),
        "dict.data.create" => run::<crate::dto::dict::CreateDictDataRequest>(kind, body),
        "dict.data.update" => run::<crate::dto::dict::UpdateDictDataRequest>(kind, body),

        "config.create" => run::<crate::dto::sys_config::CreateConfigRequest>(kind, body),
        "config.update" => run::<crate::dto::sys_config::UpdateConfigRequest>(kind, body),

        "post.create" => run::<crate::dto::post::CreatePostRequest>(kind, body),
        "post.update" => run::<crate::dto::post::UpdatePostRequest>(kind, body),

        "log.delete" => run::<crate::dto::log::DeleteLogsRequest>(kind, body),
        "log.unlock" => run::<crate::dto::log::UnlockUserRequest>(kind, body),

        "common.ids" => run::<crate::dto::common::IdsRequest>(kind, body),

        "upload.meta" => {
            let meta: crate::dto::upload::UploadMeta = parse(kind, body)?;
            UploadPolicy::from(&config.upload).check(&meta).context(kind)
        }

        _ => Err(AppError::Biz(Sentinel::InvalidKind).context(kind)),
    }
}

/// Kinds accepted by [`check_json`]
pub const KINDS: &[&str] = &[
    "auth.login",
    "auth.password",
    "auth.profile",
    "user.create",
    "user.update",
    "user.delete",
    "user.reset_password",
    "user.status",
    "user.auth_role",
    "role.create",
    "role.update",
    "role.data_scope",
    "role.status",
    "role.delete",
    "role.auth_users",
    "menu.create",
    "menu.update",
    "menu.delete",
    "dept.create",
    "dept.update",
    "dept.delete",
    "dict.type.create",
    "dict.type.update",
    "dict.data.create",
    "dict.data.update",
    "config.create",
    "config.update",
    "post.create",
    "post.update",
    "log.delete",
    "log.unlock",
    "common.ids",
    "upload.meta",
];

fn parse<T: DeserializeOwned>(kind: &str, body: &str) -> AppResult<T> {
    serde_json::from_str(body).context(format!("{}: malformed body", kind))
}

fn run<T: DeserializeOwned + Validate>(kind: &str, body: &str) -> AppResult<()> {
    let req: T = parse(kind, body)?;
    req.validate().context(kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_format() {
        assert!(is_email("ry@163.com"));
        assert!(is_email("first.last+tag@mail.example.cn"));
        assert!(!is_email("ry@"));
        assert!(!is_email("ry163.com"));
        assert!(!is_email("ry@163"));
        assert!(optional_email(""));
        assert!(!optional_email(" "));
    }

    #[test]
    fn test_phone_format() {
        assert!(is_phone("15888888888"));
        assert!(!is_phone("12888888888"));
        assert!(!is_phone("1588888888"));
        assert!(!is_phone("158888888889"));
        assert!(optional_phone(""));
    }

    #[test]
    fn test_dict_type_format() {
        assert!(is_dict_type("sys_user_sex"));
        assert!(is_dict_type("a1"));
        assert!(!is_dict_type("1abc"));
        assert!(!is_dict_type("Sys_user"));
        assert!(!is_dict_type("sys-user"));
    }

    #[test]
    fn test_char_len_counts_chars() {
        assert_eq!(char_len("研发部门"), 4);
        assert!(is_blank("  \t"));
    }

    #[test]
    fn test_check_json_dispatch() {
        let config = Config::default();
        let body = r#"{"deptId": 5, "parentId": 5, "deptName": ""}"#;
        let err = check_json("dept.update", body, &config).unwrap_err();
        assert!(err.is(Sentinel::DeptParentSelf));
        assert!(err.to_string().starts_with("dept.update"));

        let ok = r#"{"parentId": 100, "deptName": "测试部门", "orderNum": 1}"#;
        assert!(check_json("dept.create", ok, &config).is_ok());
    }

    #[test]
    fn test_check_json_unknown_kind_and_bad_body() {
        let config = Config::default();
        let err = check_json("user.frobnicate", "{}", &config).unwrap_err();
        assert!(err.is(Sentinel::InvalidKind));

        let err = check_json("user.create", "not json", &config).unwrap_err();
        assert_eq!(err.sentinel(), None);
        assert_eq!(err.code(), crate::response::code::BAD_REQUEST);
    }

    #[test]
    fn test_check_json_login_captcha_toggle() {
        let mut config = Config::default();
        let body = r#"{"username": "admin", "password": "admin123"}"#;
        let err = check_json("auth.login", body, &config).unwrap_err();
        assert!(err.is(Sentinel::CaptchaEmpty));

        config.captcha.enabled = false;
        assert!(check_json("auth.login", body, &config).is_ok());
    }

    /// 每种请求的一个完整合法样例
    const VALID_BODIES: &[(&str, &str)] = &[
        ("auth.login", r#"{"username": "admin", "password": "admin123", "code": "8", "uuid": "b3f1c0"}"#),
        ("auth.password", r#"{"oldPassword": "admin123", "newPassword": "admin456"}"#),
        ("auth.profile", r#"{"nickName": "若依", "email": "ry@163.com", "phonenumber": "15888888888", "sex": "1"}"#),
        ("user.create", r#"{"deptId": 103, "userName": "ry", "nickName": "若依", "password": "admin123", "email": "ry@qq.com", "phonenumber": "15666666666", "roleIds": [2]}"#),
        ("user.update", r#"{"userId": 2, "userName": "ry", "nickName": "若依"}"#),
        ("user.delete", r#"{"ids": [3, 4], "currentUserId": 2}"#),
        ("user.reset_password", r#"{"userId": 2, "password": "admin123"}"#),
        ("user.status", r#"{"userId": 2, "status": "1"}"#),
        ("user.auth_role", r#"{"userId": 2, "roleIds": [2]}"#),
        ("role.create", r#"{"roleName": "普通角色", "roleKey": "common", "roleSort": 2, "menuIds": [1, 100]}"#),
        ("role.update", r#"{"roleId": 2, "roleName": "普通角色", "roleKey": "common", "roleSort": 2}"#),
        ("role.data_scope", r#"{"roleId": 2, "dataScope": "2", "deptIds": [100, 101]}"#),
        ("role.status", r#"{"roleId": 2, "status": "0"}"#),
        ("role.delete", r#"{"ids": [2, 3]}"#),
        ("role.auth_users", r#"{"roleId": 2, "userIds": [3, 4]}"#),
        ("menu.create", r#"{"menuName": "用户管理", "parentId": 1, "orderNum": 1, "path": "user", "component": "system/user/index", "menuType": "C"}"#),
        ("menu.update", r#"{"menuId": 100, "menuName": "用户管理", "parentId": 1, "orderNum": 1, "path": "user", "menuType": "C"}"#),
        ("menu.delete", r#"{"menuId": 100}"#),
        ("dept.create", r#"{"parentId": 100, "deptName": "测试部门", "orderNum": 1, "phone": "15888888888", "email": "ry@qq.com"}"#),
        ("dept.update", r#"{"deptId": 101, "parentId": 100, "deptName": "深圳总公司", "orderNum": 1}"#),
        ("dept.delete", r#"{"deptId": 101}"#),
        ("dict.type.create", r#"{"dictName": "用户性别", "dictType": "sys_user_sex"}"#),
        ("dict.type.update", r#"{"dictId": 1, "dictName": "用户性别", "dictType": "sys_user_sex"}"#),
        ("dict.data.create", r#"{"dictSort": 1, "dictLabel": "男", "dictValue": "0", "dictType": "sys_user_sex", "isDefault": "Y"}"#),
        ("dict.data.update", r#"{"dictCode": 1, "dictSort": 1, "dictLabel": "男", "dictValue": "0", "dictType": "sys_user_sex"}"#),
        ("config.create", r#"{"configName": "用户管理-账号初始密码", "configKey": "sys.user.initPassword", "configValue": "123456", "configType": "Y"}"#),
        ("config.update", r#"{"configId": 2, "configName": "用户管理-账号初始密码", "configKey": "sys.user.initPassword", "configValue": "123456"}"#),
        ("post.create", r#"{"postCode": "ceo", "postName": "董事长", "postSort": 1}"#),
        ("post.update", r#"{"postId": 1, "postCode": "ceo", "postName": "董事长", "postSort": 1}"#),
        ("log.delete", r#"{"ids": [9, 10]}"#),
        ("log.unlock", r#"{"userName": "ry"}"#),
        ("common.ids", r#"{"ids": [1, 2]}"#),
        ("upload.meta", r#"{"fileName": "avatar.png", "size": 2048}"#),
    ];

    #[test]
    fn test_valid_body_for_every_kind() {
        let config = Config::default();
        assert_eq!(VALID_BODIES.len(), KINDS.len());
        for kind in KINDS {
            let (_, body) = VALID_BODIES
                .iter()
                .find(|(k, _)| k == kind)
                .unwrap_or_else(|| panic!("no sample body for {}", kind));
            if let Err(err) = check_json(kind, body, &config) {
                panic!("{} rejected a valid body: {}", kind, err);
            }
        }
    }

    #[test]
    fn test_every_kind_is_dispatched() {
        let config = Config::default();
        for kind in KINDS {
            let result = check_json(kind, "{}", &config);
            if let Err(err) = result {
                assert!(!err.is(Sentinel::InvalidKind), "kind {} not dispatched", kind);
            }
        }
    }
}
