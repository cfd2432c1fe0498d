//! Error catalog
//!
//! `Sentinel` 是所有业务规则错误的固定目录，按领域分组；`AppError` 是 crate
//! 级错误类型，可以在任意层包装上下文而不丢失哨兵身份。

use serde::Serialize;
use thiserror::Error;

use crate::response::code;

/// 错误所属领域
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Domain {
    Auth,
    Config,
    Dept,
    Dict,
    Menu,
    Post,
    Role,
    User,
    Upload,
    General,
}

/// 业务哨兵错误
///
/// 比较按变体身份进行，消息文本只用于展示。
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Sentinel {
    // 认证
    #[error("用户名不能为空")]
    AuthUsernameEmpty,
    #[error("密码不能为空")]
    AuthPasswordEmpty,
    #[error("验证码不能为空")]
    CaptchaEmpty,
    #[error("验证码已失效")]
    CaptchaExpired,
    #[error("验证码错误")]
    CaptchaMismatch,
    #[error("用户不存在/密码错误")]
    InvalidCredentials,
    #[error("对不起，您的账号已停用")]
    AuthUserDisabled,
    #[error("对不起，您的账号已被删除")]
    AuthUserDeleted,
    #[error("旧密码不能为空")]
    OldPasswordEmpty,
    #[error("新密码不能为空")]
    NewPasswordEmpty,
    #[error("新密码不能与旧密码相同")]
    PasswordSame,
    #[error("修改密码失败，旧密码错误")]
    OldPasswordWrong,

    // 参数配置
    #[error("参数主键不能为空")]
    ConfigIdEmpty,
    #[error("参数名称不能为空")]
    ConfigNameEmpty,
    #[error("参数名称不能超过100个字符")]
    ConfigNameTooLong,
    #[error("参数键名不能为空")]
    ConfigKeyEmpty,
    #[error("参数键名不能超过100个字符")]
    ConfigKeyTooLong,
    #[error("参数键值不能为空")]
    ConfigValueEmpty,
    #[error("参数键值不能超过500个字符")]
    ConfigValueTooLong,
    #[error("参数键名已存在")]
    ConfigKeyExists,
    #[error("内置参数不能删除")]
    ConfigBuiltinDelete,
    #[error("参数不存在")]
    ConfigNotFound,

    // 部门
    #[error("部门ID不能为空")]
    DeptIdEmpty,
    #[error("上级部门ID无效")]
    DeptParentInvalid,
    #[error("部门名称不能为空")]
    DeptNameEmpty,
    #[error("部门名称不能超过30个字符")]
    DeptNameTooLong,
    #[error("显示顺序不能小于0")]
    DeptOrderInvalid,
    #[error("联系电话格式不正确")]
    DeptPhoneInvalid,
    #[error("部门邮箱格式不正确")]
    DeptEmailInvalid,
    #[error("上级部门不能是自己")]
    DeptParentSelf,
    #[error("上级部门不能是自己的下级部门")]
    DeptParentIsChild,
    #[error("存在下级部门,不允许删除")]
    DeptHasChildren,
    #[error("部门存在用户,不允许删除")]
    DeptHasUsers,
    #[error("部门名称已存在")]
    DeptNameExists,
    #[error("部门停用，不允许新增")]
    DeptParentDisabled,
    #[error("部门不存在")]
    DeptNotFound,

    // 字典
    #[error("字典主键不能为空")]
    DictTypeIdEmpty,
    #[error("字典名称不能为空")]
    DictNameEmpty,
    #[error("字典名称不能超过100个字符")]
    DictNameTooLong,
    #[error("字典类型不能为空")]
    DictTypeEmpty,
    #[error("字典类型不能超过100个字符")]
    DictTypeTooLong,
    #[error("字典类型必须以字母开头，且只能为（小写字母，数字，下滑线）")]
    DictTypeFormat,
    #[error("字典编码不能为空")]
    DictDataIdEmpty,
    #[error("字典标签不能为空")]
    DictLabelEmpty,
    #[error("字典标签不能超过100个字符")]
    DictLabelTooLong,
    #[error("字典键值不能为空")]
    DictValueEmpty,
    #[error("字典键值不能超过100个字符")]
    DictValueTooLong,
    #[error("字典排序不能小于0")]
    DictSortInvalid,
    #[error("字典类型已存在")]
    DictTypeExists,
    #[error("字典类型已分配,不能删除")]
    DictTypeAssigned,
    #[error("字典类型不存在")]
    DictTypeNotFound,

    // 菜单
    #[error("菜单ID不能为空")]
    MenuIdEmpty,
    #[error("菜单名称不能为空")]
    MenuNameEmpty,
    #[error("菜单名称不能超过50个字符")]
    MenuNameTooLong,
    #[error("上级菜单ID无效")]
    MenuParentInvalid,
    #[error("显示顺序不能小于0")]
    MenuOrderInvalid,
    #[error("路由地址不能为空")]
    MenuPathEmpty,
    #[error("地址必须以http(s)://开头")]
    MenuExternalLinkInvalid,
    #[error("上级菜单不能选择自己")]
    MenuParentSelf,
    #[error("存在子菜单,不允许删除")]
    MenuHasChildren,
    #[error("菜单已分配,不允许删除")]
    MenuAssigned,
    #[error("菜单名称已存在")]
    MenuNameExists,
    #[error("菜单不存在")]
    MenuNotFound,

    // 岗位
    #[error("岗位ID不能为空")]
    PostIdEmpty,
    #[error("岗位编码不能为空")]
    PostCodeEmpty,
    #[error("岗位编码不能超过64个字符")]
    PostCodeTooLong,
    #[error("岗位名称不能为空")]
    PostNameEmpty,
    #[error("岗位名称不能超过50个字符")]
    PostNameTooLong,
    #[error("显示顺序不能小于0")]
    PostSortInvalid,
    #[error("岗位编码已存在")]
    PostCodeExists,
    #[error("岗位名称已存在")]
    PostNameExists,
    #[error("岗位已分配,不能删除")]
    PostAssigned,
    #[error("岗位不存在")]
    PostNotFound,

    // 角色
    #[error("角色ID不能为空")]
    RoleIdEmpty,
    #[error("角色名称不能为空")]
    RoleNameEmpty,
    #[error("角色名称不能超过30个字符")]
    RoleNameTooLong,
    #[error("权限字符不能为空")]
    RoleKeyEmpty,
    #[error("权限字符不能超过100个字符")]
    RoleKeyTooLong,
    #[error("显示顺序不能小于0")]
    RoleSortInvalid,
    #[error("不允许操作超级管理员角色")]
    SuperAdminRole,
    #[error("自定义数据权限必须选择部门")]
    DataScopeDeptsEmpty,
    #[error("角色名称已存在")]
    RoleNameExists,
    #[error("角色权限已存在")]
    RoleKeyExists,
    #[error("角色已分配,不能删除")]
    RoleAssigned,
    #[error("角色不存在")]
    RoleNotFound,

    // 用户
    #[error("用户ID不能为空")]
    UserIdEmpty,
    #[error("用户账号不能为空")]
    UserNameEmpty,
    #[error("用户账号长度必须介于2和20之间")]
    UserNameLength,
    #[error("用户昵称不能为空")]
    NicknameEmpty,
    #[error("用户昵称长度不能超过30个字符")]
    NicknameTooLong,
    #[error("用户密码不能为空")]
    PasswordEmpty,
    #[error("用户密码长度必须介于5和20之间")]
    PasswordLength,
    #[error("邮箱格式不正确")]
    EmailInvalid,
    #[error("手机号码格式不正确")]
    PhoneInvalid,
    #[error("不允许操作超级管理员用户")]
    SuperAdminUser,
    #[error("当前用户不能删除")]
    DeleteSelf,
    #[error("登录账号已存在")]
    UserNameExists,
    #[error("手机号码已存在")]
    PhoneExists,
    #[error("邮箱账号已存在")]
    EmailExists,
    #[error("用户不存在")]
    UserNotFound,

    // 上传
    #[error("上传文件不能为空")]
    FileEmpty,
    #[error("文件名称长度超出限制")]
    FileNameTooLong,
    #[error("上传文件大小超出限制")]
    FileTooLarge,
    #[error("文件格式不支持")]
    FileTypeNotAllowed,

    // 通用
    #[error("参数错误")]
    InvalidParams,
    #[error("请选择要操作的数据")]
    IdsEmpty,
    #[error("数据ID无效")]
    IdInvalid,
    #[error("不支持的请求类型")]
    InvalidKind,
    #[error("认证失败，无法访问系统资源")]
    Unauthorized,
    #[error("没有权限，请联系管理员授权")]
    Forbidden,
    #[error("资源不存在")]
    NotFound,
}

impl Sentinel {
    /// 所属领域
    pub fn domain(self) -> Domain {
        use Sentinel::*;
        match self {
            AuthUsernameEmpty | AuthPasswordEmpty | CaptchaEmpty | CaptchaExpired
            | CaptchaMismatch | InvalidCredentials | AuthUserDisabled | AuthUserDeleted
            | OldPasswordEmpty | NewPasswordEmpty | PasswordSame | OldPasswordWrong => Domain::Auth,

            ConfigIdEmpty | ConfigNameEmpty | ConfigNameTooLong | ConfigKeyEmpty
            | ConfigKeyTooLong | ConfigValueEmpty | ConfigValueTooLong | ConfigKeyExists
            | ConfigBuiltinDelete | ConfigNotFound => Domain::Config,

            DeptIdEmpty | DeptParentInvalid | DeptNameEmpty | DeptNameTooLong
            | DeptOrderInvalid | DeptPhoneInvalid | DeptEmailInvalid | DeptParentSelf
            | DeptParentIsChild | DeptHasChildren | DeptHasUsers | DeptNameExists
            | DeptParentDisabled | DeptNotFound => Domain::Dept,

            DictTypeIdEmpty | DictNameEmpty | DictNameTooLong | DictTypeEmpty
            | DictTypeTooLong | DictTypeFormat | DictDataIdEmpty | DictLabelEmpty
            | DictLabelTooLong | DictValueEmpty | DictValueTooLong | DictSortInvalid
            | DictTypeExists | DictTypeAssigned | DictTypeNotFound => Domain::Dict,

            MenuIdEmpty | MenuNameEmpty | MenuNameTooLong | MenuParentInvalid
            | MenuOrderInvalid | MenuPathEmpty | MenuExternalLinkInvalid | MenuParentSelf
            | MenuHasChildren | MenuAssigned | MenuNameExists | MenuNotFound => Domain::Menu,

            PostIdEmpty | PostCodeEmpty | PostCodeTooLong | PostNameEmpty | PostNameTooLong
            | PostSortInvalid | PostCodeExists | PostNameExists | PostAssigned
            | PostNotFound => Domain::Post,

            RoleIdEmpty | RoleNameEmpty | RoleNameTooLong | RoleKeyEmpty | RoleKeyTooLong
            | RoleSortInvalid | SuperAdminRole | DataScopeDeptsEmpty | RoleNameExists
            | RoleKeyExists | RoleAssigned | RoleNotFound => Domain::Role,

            UserIdEmpty | UserNameEmpty | UserNameLength | NicknameEmpty | NicknameTooLong
            | PasswordEmpty | PasswordLength | EmailInvalid | PhoneInvalid | SuperAdminUser
            | DeleteSelf | UserNameExists | PhoneExists | EmailExists | UserNotFound => Domain::User,

            FileEmpty | FileNameTooLong | FileTooLarge | FileTypeNotAllowed => Domain::Upload,

            InvalidParams | IdsEmpty | IdInvalid | InvalidKind | Unauthorized | Forbidden
            | NotFound => Domain::General,
        }
    }

    /// 响应信封使用的业务状态码
    pub fn code(self) -> u16 {
        use Sentinel::*;
        match self {
            Unauthorized => code::UNAUTHORIZED,
            Forbidden | SuperAdminUser | SuperAdminRole => code::FORBIDDEN,
            NotFound | ConfigNotFound | DeptNotFound | DictTypeNotFound | MenuNotFound
            | PostNotFound | RoleNotFound | UserNotFound => code::NOT_FOUND,
            ConfigKeyExists | DeptNameExists | DictTypeExists | MenuNameExists
            | PostCodeExists | PostNameExists | RoleNameExists | RoleKeyExists
            | UserNameExists | PhoneExists | EmailExists => code::WARN,
            _ => code::BAD_REQUEST,
        }
    }
}

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Biz(#[from] Sentinel),

    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<AppError>,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// 穿透所有上下文层，返回根部的哨兵错误
    pub fn sentinel(&self) -> Option<Sentinel> {
        match self {
            AppError::Biz(s) => Some(*s),
            AppError::Context { source, .. } => source.sentinel(),
            _ => None,
        }
    }

    /// 是否为指定哨兵（包装后依然成立）
    pub fn is(&self, sentinel: Sentinel) -> bool {
        self.sentinel() == Some(sentinel)
    }

    /// 为错误附加上下文
    pub fn context(self, context: impl Into<String>) -> Self {
        AppError::Context {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// 响应信封使用的业务状态码
    pub fn code(&self) -> u16 {
        match self {
            AppError::Context { source, .. } => source.code(),
            AppError::Biz(s) => s.code(),
            AppError::Json(_) => code::BAD_REQUEST,
            AppError::Io(_) | AppError::Config(_) | AppError::Internal(_) => code::ERROR,
        }
    }

    /// 面向客户端的消息；内部错误不透出细节
    pub fn client_message(&self) -> String {
        match self {
            AppError::Context { source, .. } => source.client_message(),
            AppError::Biz(s) => s.to_string(),
            AppError::Json(err) => format!("请求参数格式错误: {}", err),
            AppError::Io(err) => {
                tracing::error!("IO error: {}", err);
                "系统内部错误".to_string()
            }
            AppError::Config(msg) => {
                tracing::error!("Config error: {}", msg);
                "系统配置错误".to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "系统内部错误".to_string()
            }
        }
    }
}

/// Result type alias for application
pub type AppResult<T> = Result<T, AppError>;

/// Attach context to any result whose error converts into `AppError`
pub trait ResultExt<T> {
    fn context(self, context: impl Into<String>) -> AppResult<T>;
}

impl<T, E: Into<AppError>> ResultExt<T> for Result<T, E> {
    fn context(self, context: impl Into<String>) -> AppResult<T> {
        self.map_err(|e| e.into().context(context))
    }
}

/// Helper trait for converting Option to a sentinel error
pub trait OptionExt<T> {
    fn ok_or_biz(self, sentinel: Sentinel) -> AppResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_biz(self, sentinel: Sentinel) -> AppResult<T> {
        self.ok_or(AppError::Biz(sentinel))
    }
}

/// Helper to convert anyhow errors to AppError
impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}
