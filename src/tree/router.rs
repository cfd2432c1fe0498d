//! Sidebar routes for the front-end router
//!
//! Directory and menu rows become nested route records; buttons only carry
//! permissions and never appear here.

use serde::Serialize;

use super::{build_tree, TreeNode};
use crate::entity::menu::is_http_link;
use crate::entity::{MenuType, SysMenu, Visibility};
use crate::permission::is_routable;

/// 布局组件
pub const LAYOUT: &str = "Layout";
/// 多级目录中间层组件
pub const PARENT_VIEW: &str = "ParentView";
/// 内链组件
pub const INNER_LINK: &str = "InnerLink";

/// 路由显示信息
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouterMeta {
    pub title: String,
    pub icon: String,
    pub no_cache: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

/// 路由配置
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouterVo {
    pub name: String,
    pub path: String,
    pub hidden: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect: Option<String>,
    pub component: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub always_show: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<RouterMeta>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<RouterVo>,
}

/// Build sidebar routes from the menus visible to a user
pub fn build_routers(menus: Vec<SysMenu>) -> Vec<RouterVo> {
    let menus: Vec<SysMenu> = menus.into_iter().filter(is_routable).collect();
    build_tree(menus)
        .into_iter()
        .map(|node| to_router(node, true))
        .collect()
}

fn to_router(node: TreeNode<SysMenu>, is_root: bool) -> RouterVo {
    let TreeNode { item: menu, children } = node;

    if is_root && is_inner_link(&menu) {
        let child = route_child(&menu, inner_link_path(&menu.path), INNER_LINK.to_string());
        return wrap_in_layout(&menu, child);
    }
    if is_root && is_menu_frame(&menu) {
        return wrap_in_layout(&menu, route_child(&menu, menu.path.clone(), component_or_default(&menu)));
    }

    let mut router = RouterVo {
        name: route_name(&menu.path),
        path: router_path(&menu, is_root),
        hidden: menu.visible == Visibility::Hidden,
        redirect: None,
        component: component(&menu, is_root),
        query: menu.query.clone().filter(|q| !q.is_empty()),
        always_show: None,
        meta: Some(meta(&menu)),
        children: Vec::new(),
    };

    if menu.menu_type == MenuType::Directory && !children.is_empty() {
        router.always_show = Some(true);
        router.redirect = Some("noRedirect".to_string());
        router.children = children
            .into_iter()
            .map(|child| to_router(child, false))
            .collect();
    }

    router
}

/// 一级菜单且非外链：需要包一层 Layout
fn is_menu_frame(menu: &SysMenu) -> bool {
    menu.parent_id == 0 && menu.menu_type == MenuType::Menu && !menu.is_frame
}

/// 非外链形式打开的 http 地址
fn is_inner_link(menu: &SysMenu) -> bool {
    !menu.is_frame && menu.is_http_path()
}

fn wrap_in_layout(menu: &SysMenu, child: RouterVo) -> RouterVo {
    RouterVo {
        name: String::new(),
        path: "/".to_string(),
        hidden: menu.visible == Visibility::Hidden,
        redirect: None,
        component: LAYOUT.to_string(),
        query: None,
        always_show: None,
        meta: None,
        children: vec![child],
    }
}

fn route_child(menu: &SysMenu, path: String, component: String) -> RouterVo {
    RouterVo {
        name: route_name(&path),
        path,
        hidden: false,
        redirect: None,
        component,
        query: menu.query.clone().filter(|q| !q.is_empty()),
        always_show: None,
        meta: Some(meta(menu)),
        children: Vec::new(),
    }
}

fn meta(menu: &SysMenu) -> RouterMeta {
    RouterMeta {
        title: menu.menu_name.clone(),
        icon: menu.icon.clone(),
        no_cache: !menu.is_cache,
        link: menu.is_http_path().then(|| menu.path.clone()),
    }
}

fn router_path(menu: &SysMenu, is_root: bool) -> String {
    if !is_root && is_inner_link(menu) {
        return inner_link_path(&menu.path);
    }
    if is_root && menu.menu_type == MenuType::Directory && !menu.is_frame {
        return format!("/{}", menu.path.trim_start_matches('/'));
    }
    menu.path.clone()
}

fn component(menu: &SysMenu, is_root: bool) -> String {
    match menu.component.as_deref().filter(|c| !c.is_empty()) {
        Some(c) => c.to_string(),
        None if !is_root && is_inner_link(menu) => INNER_LINK.to_string(),
        None if !is_root && menu.menu_type == MenuType::Directory => PARENT_VIEW.to_string(),
        None => LAYOUT.to_string(),
    }
}

fn component_or_default(menu: &SysMenu) -> String {
    menu.component
        .clone()
        .filter(|c| !c.is_empty())
        .unwrap_or_else(|| LAYOUT.to_string())
}

/// `https://www.example.com:8080/doc` -> `www/example/com/8080/doc`
fn inner_link_path(path: &str) -> String {
    path.trim_start_matches("http://")
        .trim_start_matches("https://")
        .replace(['.', ':'], "/")
}

/// 路由名称：路径首字母大写
fn route_name(path: &str) -> String {
    let trimmed = path.trim_start_matches('/');
    if is_http_link(path) {
        return String::new();
    }
    let mut chars = trimmed.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::Status;

    fn menu(id: i64, parent: i64, kind: MenuType, path: &str, component: Option<&str>) -> SysMenu {
        SysMenu {
            menu_id: id,
            parent_id: parent,
            menu_name: format!("menu-{}", id),
            order_num: id as i32,
            path: path.to_string(),
            component: component.map(str::to_string),
            menu_type: kind,
            icon: "system".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_directory_with_children() {
        let menus = vec![
            menu(1, 0, MenuType::Directory, "system", None),
            menu(100, 1, MenuType::Menu, "user", Some("system/user/index")),
            menu(1000, 100, MenuType::Button, "", None),
        ];
        let routers = build_routers(menus);
        assert_eq!(routers.len(), 1);

        let system = &routers[0];
        assert_eq!(system.path, "/system");
        assert_eq!(system.name, "System");
        assert_eq!(system.component, LAYOUT);
        assert_eq!(system.always_show, Some(true));
        assert_eq!(system.redirect.as_deref(), Some("noRedirect"));

        assert_eq!(system.children.len(), 1);
        let user = &system.children[0];
        assert_eq!(user.path, "user");
        assert_eq!(user.component, "system/user/index");
        assert!(user.children.is_empty());
    }

    #[test]
    fn test_nested_directory_uses_parent_view() {
        let menus = vec![
            menu(1, 0, MenuType::Directory, "tool", None),
            menu(2, 1, MenuType::Directory, "gen", None),
            menu(3, 2, MenuType::Menu, "table", Some("tool/gen/index")),
        ];
        let routers = build_routers(menus);
        assert_eq!(routers[0].children[0].component, PARENT_VIEW);
        assert_eq!(routers[0].children[0].children[0].path, "table");
    }

    #[test]
    fn test_root_menu_wrapped_in_layout() {
        let routers = build_routers(vec![menu(5, 0, MenuType::Menu, "index", Some("dashboard/index"))]);
        let root = &routers[0];
        assert_eq!(root.path, "/");
        assert_eq!(root.component, LAYOUT);
        assert!(root.meta.is_none());
        assert_eq!(root.children[0].name, "Index");
        assert_eq!(root.children[0].component, "dashboard/index");
    }

    #[test]
    fn test_inner_link() {
        let menus = vec![
            menu(1, 0, MenuType::Directory, "docs", None),
            menu(2, 1, MenuType::Menu, "http://doc.example.com:8080/guide", None),
        ];
        let routers = build_routers(menus);
        let link = &routers[0].children[0];
        assert_eq!(link.component, INNER_LINK);
        assert_eq!(link.path, "doc/example/com/8080/guide");
        assert_eq!(
            link.meta.as_ref().and_then(|m| m.link.as_deref()),
            Some("http://doc.example.com:8080/guide")
        );
    }

    #[test]
    fn test_hidden_and_disabled() {
        let mut hidden = menu(1, 0, MenuType::Directory, "monitor", None);
        hidden.visible = Visibility::Hidden;
        let mut disabled = menu(2, 0, MenuType::Directory, "tool", None);
        disabled.status = Status::Disabled;

        let routers = build_routers(vec![hidden, disabled]);
        assert_eq!(routers.len(), 1);
        assert!(routers[0].hidden);
        assert!(routers[0].always_show.is_none());

        let json = serde_json::to_value(&routers[0]).unwrap();
        assert_eq!(json["meta"]["noCache"], false);
        assert!(json.get("children").is_none());
    }
}
