use serde::{Deserialize, Serialize};

use crate::entity::{MenuType, Status, SysMenu, Visibility};
use crate::tree::{menu_tree_select, TreeSelect};

/// 新增菜单请求
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateMenuRequest {
    pub menu_name: String,
    pub parent_id: i64,
    pub order_num: i32,
    pub path: String,
    pub component: Option<String>,
    pub query: Option<String>,
    pub is_frame: bool,
    pub is_cache: bool,
    pub menu_type: MenuType,
    pub visible: Visibility,
    pub status: Status,
    pub perms: Option<String>,
    pub icon: String,
    pub remark: Option<String>,
}

/// 修改菜单请求
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateMenuRequest {
    pub menu_id: i64,
    pub menu_name: String,
    pub parent_id: i64,
    pub order_num: i32,
    pub path: String,
    pub component: Option<String>,
    pub query: Option<String>,
    pub is_frame: bool,
    pub is_cache: bool,
    pub menu_type: MenuType,
    pub visible: Visibility,
    pub status: Status,
    pub perms: Option<String>,
    pub icon: String,
    pub remark: Option<String>,
}

impl Default for CreateMenuRequest {
    fn default() -> Self {
        Self {
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
            remark: None,
        }
    }
}

impl Default for UpdateMenuRequest {
    fn default() -> Self {
        let create = CreateMenuRequest::default();
        Self {
            menu_id: 0,
            menu_name: create.menu_name,
            parent_id: create.parent_id,
            order_num: create.order_num,
            path: create.path,
            component: create.component,
            query: create.query,
            is_frame: create.is_frame,
            is_cache: create.is_cache,
            menu_type: create.menu_type,
            visible: create.visible,
            status: create.status,
            perms: create.perms,
            icon: create.icon,
            remark: create.remark,
        }
    }
}

/// 删除菜单请求
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DeleteMenuRequest {
    pub menu_id: i64,
}

/// 菜单查询
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MenuQuery {
    pub menu_name: Option<String>,
    pub visible: Option<Visibility>,
    pub status: Option<Status>,
}

impl MenuQuery {
    pub fn matches(&self, menu: &SysMenu) -> bool {
        self.menu_name
            .as_deref()
            .map_or(true, |name| menu.menu_name.contains(name))
            && self.visible.map_or(true, |v| menu.visible == v)
            && self.status.map_or(true, |s| menu.status == s)
    }
}

/// 角色菜单树 (编辑角色时回显已选菜单)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleMenuTreeSelect {
    pub checked_keys: Vec<i64>,
    pub menus: Vec<TreeSelect>,
}

impl RoleMenuTreeSelect {
    pub fn new(menus: Vec<SysMenu>, checked_keys: Vec<i64>) -> Self {
        Self {
            checked_keys,
            menus: menu_tree_select(menus),
        }
    }
}
