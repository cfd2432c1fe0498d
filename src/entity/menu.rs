//! Menu entity - 菜单权限表
//!
//! 表名: sys_menu

use serde::{Deserialize, Serialize};

use super::{BaseFields, Status};

/// 菜单类型
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MenuType {
    /// 目录
    #[default]
    #[serde(rename = "M")]
    Directory,
    /// 菜单
    #[serde(rename = "C")]
    Menu,
    /// 按钮
    #[serde(rename = "F")]
    Button,
}

/// 显示状态: "0"=显示, "1"=隐藏
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Visibility {
    #[default]
    #[serde(rename = "0")]
    Shown,
    #[serde(rename = "1")]
    Hidden,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SysMenu {
    pub menu_id: i64,

    pub menu_name: String,

    /// 父菜单ID (0 表示顶级)
    pub parent_id: i64,

    pub order_num: i32,

    /// 路由地址
    #[serde(default)]
    pub path: String,

    /// 组件路径
    #[serde(default)]
    pub component: Option<String>,

    /// 路由参数
    #[serde(default)]
    pub query: Option<String>,

    /// 是否为外链
    #[serde(default)]
    pub is_frame: bool,

    /// 是否缓存
    #[serde(default = "default_true")]
    pub is_cache: bool,

    #[serde(default)]
    pub menu_type: MenuType,

    #[serde(default)]
    pub visible: Visibility,

    #[serde(default)]
    pub status: Status,

    /// 权限标识, 逗号分隔
    #[serde(default)]
    pub perms: Option<String>,

    #[serde(default)]
    pub icon: String,

    #[serde(flatten)]
    pub base: BaseFields,
}

fn default_true() -> bool {
    true
}

// 默认缓存，与反序列化缺省值一致
impl Default for SysMenu {
    fn default() -> Self {
        Self {
            menu_id: 0,
            menu_name: String::new(),
            parent_id: 0,
            order_num: 0,
            path: String::new(),
            component: None,
            query: None,
            is_frame: false,
            is_cache: true,
            menu_type: MenuType::default(),
            visible: Visibility::default(),
            status: Status::default(),
            perms: None,
            icon: String::new(),
            base: BaseFields::default(),
        }
    }
}

impl SysMenu {
    /// 路径是否为 http(s) 地址
    pub fn is_http_path(&self) -> bool {
        is_http_link(&self.path)
    }
}

pub fn is_http_link(path: &str) -> bool {
    path.starts_with("http://") || path.starts_with("https://")
}
