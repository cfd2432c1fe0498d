//! Rules that depend on stored state.
//!
//! The caller looks the facts up (child counts, assignments, the stored
//! record) and passes them in; nothing here performs I/O.

use super::ensure;
use crate::entity::{SysConfig, SysDept, SysRole, SysUser};
use crate::error::Sentinel;

/// 存在下级部门或部门内有用户时不允许删除
pub fn check_dept_deletable(has_children: bool, has_users: bool) -> Result<(), Sentinel> {
    ensure(!has_children, Sentinel::DeptHasChildren)?;
    ensure(!has_users, Sentinel::DeptHasUsers)
}

/// 修改上级部门：不能挂到自己或自己的下级，且新上级必须启用
pub fn check_dept_reparent(dept_id: i64, new_parent: &SysDept) -> Result<(), Sentinel> {
    ensure(new_parent.dept_id != dept_id, Sentinel::DeptParentSelf)?;
    ensure(!new_parent.has_ancestor(dept_id), Sentinel::DeptParentIsChild)?;
    ensure(!new_parent.is_disabled(), Sentinel::DeptParentDisabled)
}

pub fn check_menu_deletable(has_children: bool, assigned: bool) -> Result<(), Sentinel> {
    ensure(!has_children, Sentinel::MenuHasChildren)?;
    ensure(!assigned, Sentinel::MenuAssigned)
}

/// 内置参数不能删除
pub fn check_config_deletable(config: &SysConfig) -> Result<(), Sentinel> {
    ensure(!config.is_builtin(), Sentinel::ConfigBuiltinDelete)
}

pub fn check_role_deletable(role: &SysRole, assigned_users: u64) -> Result<(), Sentinel> {
    ensure(!role.is_admin(), Sentinel::SuperAdminRole)?;
    ensure(assigned_users == 0, Sentinel::RoleAssigned)
}

/// 岗位已分配给用户时不能删除
pub fn check_post_deletable(assigned_users: u64) -> Result<(), Sentinel> {
    ensure(assigned_users == 0, Sentinel::PostAssigned)
}

/// 字典类型下仍有数据时不能删除
pub fn check_dict_type_deletable(data_count: u64) -> Result<(), Sentinel> {
    ensure(data_count == 0, Sentinel::DictTypeAssigned)
}

/// 登录前检查账号状态：已删除优先于已停用
pub fn check_login_allowed(user: &SysUser) -> Result<(), Sentinel> {
    ensure(!user.is_deleted(), Sentinel::AuthUserDeleted)?;
    ensure(!user.is_disabled(), Sentinel::AuthUserDisabled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::{DelFlag, Status, YesNo};

    fn dept(dept_id: i64, ancestors: &str) -> SysDept {
        SysDept {
            dept_id,
            ancestors: ancestors.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_dept_deletable() {
        assert_eq!(check_dept_deletable(true, true), Err(Sentinel::DeptHasChildren));
        assert_eq!(check_dept_deletable(false, true), Err(Sentinel::DeptHasUsers));
        assert_eq!(check_dept_deletable(false, false), Ok(()));
    }

    #[test]
    fn test_dept_reparent() {
        // 103 位于 0,100,101 之下
        let child = dept(103, "0,100,101");
        assert_eq!(check_dept_reparent(101, &child), Err(Sentinel::DeptParentIsChild));
        assert_eq!(check_dept_reparent(100, &child), Err(Sentinel::DeptParentIsChild));
        assert_eq!(check_dept_reparent(103, &child), Err(Sentinel::DeptParentSelf));
        assert_eq!(check_dept_reparent(102, &child), Ok(()));

        let mut disabled = dept(105, "0,100");
        disabled.status = Status::Disabled;
        assert_eq!(check_dept_reparent(102, &disabled), Err(Sentinel::DeptParentDisabled));
    }

    #[test]
    fn test_menu_config_dict() {
        assert_eq!(check_menu_deletable(true, false), Err(Sentinel::MenuHasChildren));
        assert_eq!(check_menu_deletable(false, true), Err(Sentinel::MenuAssigned));
        assert_eq!(check_menu_deletable(false, false), Ok(()));

        let mut config = SysConfig {
            config_type: YesNo::Yes,
            ..Default::default()
        };
        assert_eq!(check_config_deletable(&config), Err(Sentinel::ConfigBuiltinDelete));
        config.config_type = YesNo::No;
        assert_eq!(check_config_deletable(&config), Ok(()));

        assert_eq!(check_dict_type_deletable(3), Err(Sentinel::DictTypeAssigned));
        assert_eq!(check_dict_type_deletable(0), Ok(()));
    }

    #[test]
    fn test_role_post() {
        let admin = SysRole {
            role_id: 1,
            ..Default::default()
        };
        assert_eq!(check_role_deletable(&admin, 0), Err(Sentinel::SuperAdminRole));

        let common = SysRole {
            role_id: 2,
            ..Default::default()
        };
        assert_eq!(check_role_deletable(&common, 2), Err(Sentinel::RoleAssigned));
        assert_eq!(check_role_deletable(&common, 0), Ok(()));

        assert_eq!(check_post_deletable(1), Err(Sentinel::PostAssigned));
        assert_eq!(check_post_deletable(0), Ok(()));
    }

    #[test]
    fn test_login_allowed() {
        let mut user = SysUser {
            user_id: 2,
            user_name: "ry".to_string(),
            ..Default::default()
        };
        assert_eq!(check_login_allowed(&user), Ok(()));

        user.status = Status::Disabled;
        assert_eq!(check_login_allowed(&user), Err(Sentinel::AuthUserDisabled));

        user.del_flag = DelFlag::Deleted;
        assert_eq!(check_login_allowed(&user), Err(Sentinel::AuthUserDeleted));
    }
}
