//! Permission module
//!
//! Permission strings follow the `module:resource:action` form, e.g.
//! `system:user:add`. `*:*:*` grants everything.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::entity::{MenuType, Status, SysMenu, SysRole};

/// 超级管理员用户/角色 ID
pub const SUPER_ADMIN_ID: i64 = 1;

/// 超级管理员角色权限字符
pub const ADMIN_ROLE_KEY: &str = "admin";

/// 所有权限标识
pub const ALL_PERMISSION: &str = "*:*:*";

/// 用户/角色 ID 是否为超级管理员
pub fn is_super_admin(id: i64) -> bool {
    id == SUPER_ADMIN_ID
}

/// Split a comma-separated permission list, trimming blanks and duplicates
pub fn normalize_permissions(raw: &str) -> Vec<String> {
    let mut seen = BTreeSet::new();
    raw.split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .filter(|p| seen.insert(p.to_string()))
        .map(str::to_string)
        .collect()
}

/// Collect permissions from enabled menus (buttons and menus carry perms)
pub fn collect_menu_perms(menus: &[SysMenu]) -> BTreeSet<String> {
    menus
        .iter()
        .filter(|m| m.status == Status::Normal)
        .filter_map(|m| m.perms.as_deref())
        .flat_map(normalize_permissions)
        .collect()
}

/// Role keys of enabled roles
pub fn collect_role_keys(roles: &[SysRole]) -> BTreeSet<String> {
    roles
        .iter()
        .filter(|r| r.status == Status::Normal)
        .flat_map(|r| normalize_permissions(&r.role_key))
        .collect()
}

/// 已登录用户
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginUser {
    pub user_id: i64,
    pub user_name: String,
    pub dept_id: Option<i64>,
    pub roles: BTreeSet<String>,
    pub permissions: BTreeSet<String>,
}

impl LoginUser {
    /// Build the login user from the roles and menus granted to them
    pub fn new(user_id: i64, user_name: impl Into<String>, roles: &[SysRole], menus: &[SysMenu]) -> Self {
        let (role_keys, permissions) = if is_super_admin(user_id) {
            (
                BTreeSet::from([ADMIN_ROLE_KEY.to_string()]),
                BTreeSet::from([ALL_PERMISSION.to_string()]),
            )
        } else {
            (collect_role_keys(roles), collect_menu_perms(menus))
        };

        Self {
            user_id,
            user_name: user_name.into(),
            dept_id: None,
            roles: role_keys,
            permissions,
        }
    }

    pub fn with_dept(mut self, dept_id: i64) -> Self {
        self.dept_id = Some(dept_id);
        self
    }

    pub fn is_admin(&self) -> bool {
        is_super_admin(self.user_id)
    }

    /// Check if the user has a specific permission
    pub fn has_permission(&self, perm: &str) -> bool {
        !perm.is_empty()
            && (self.permissions.contains(ALL_PERMISSION) || self.permissions.contains(perm))
    }

    /// Check if the user has any of the comma-separated permissions
    pub fn has_any_permission(&self, perms: &str) -> bool {
        normalize_permissions(perms)
            .iter()
            .any(|p| self.has_permission(p))
    }

    /// Check if the user has a role key; the admin role matches everything
    pub fn has_role(&self, role_key: &str) -> bool {
        !role_key.is_empty()
            && (self.roles.contains(ADMIN_ROLE_KEY) || self.roles.contains(role_key.trim()))
    }

    /// Get permissions as comma-separated string (for API response)
    pub fn permissions_string(&self) -> String {
        self.permissions.iter().cloned().collect::<Vec<_>>().join(",")
    }
}

/// 菜单是否可出现在路由/权限中
pub fn is_routable(menu: &SysMenu) -> bool {
    menu.status == Status::Normal && menu.menu_type != MenuType::Button
}
