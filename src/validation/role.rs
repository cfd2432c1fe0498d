use super::common::check_ids;
use super::{char_len, ensure, is_blank, Validate};
use crate::dto::role::{
    AuthUsersRequest, ChangeRoleStatusRequest, CreateRoleRequest, DataScopeRequest,
    DeleteRolesRequest, UpdateRoleRequest,
};
use crate::entity::DataScope;
use crate::error::Sentinel;
use crate::permission::is_super_admin;

const ROLE_NAME_MAX: usize = 30;
const ROLE_KEY_MAX: usize = 100;

fn check_target(role_id: i64) -> Result<(), Sentinel> {
    ensure(role_id > 0, Sentinel::RoleIdEmpty)?;
    ensure(!is_super_admin(role_id), Sentinel::SuperAdminRole)
}

fn check_fields(role_name: &str, role_key: &str, role_sort: i32) -> Result<(), Sentinel> {
    ensure(!is_blank(role_name), Sentinel::RoleNameEmpty)?;
    ensure(char_len(role_name) <= ROLE_NAME_MAX, Sentinel::RoleNameTooLong)?;
    ensure(!is_blank(role_key), Sentinel::RoleKeyEmpty)?;
    ensure(char_len(role_key) <= ROLE_KEY_MAX, Sentinel::RoleKeyTooLong)?;
    ensure(role_sort >= 0, Sentinel::RoleSortInvalid)
}

impl Validate for CreateRoleRequest {
    fn validate(&self) -> Result<(), Sentinel> {
        check_fields(&self.role_name, &self.role_key, self.role_sort)
    }
}

impl Validate for UpdateRoleRequest {
    fn validate(&self) -> Result<(), Sentinel> {
        check_target(self.role_id)?;
        check_fields(&self.role_name, &self.role_key, self.role_sort)
    }
}

impl Validate for DataScopeRequest {
    fn validate(&self) -> Result<(), Sentinel> {
        check_target(self.role_id)?;
        ensure(
            self.data_scope != DataScope::Custom || !self.dept_ids.is_empty(),
            Sentinel::DataScopeDeptsEmpty,
        )
    }
}

impl Validate for ChangeRoleStatusRequest {
    fn validate(&self) -> Result<(), Sentinel> {
        check_target(self.role_id)
    }
}

impl Validate for DeleteRolesRequest {
    fn validate(&self) -> Result<(), Sentinel> {
        check_ids(&self.ids)?;
        ensure(!self.ids.iter().any(|&id| is_super_admin(id)), Sentinel::SuperAdminRole)
    }
}

impl Validate for AuthUsersRequest {
    fn validate(&self) -> Result<(), Sentinel> {
        ensure(self.role_id > 0, Sentinel::RoleIdEmpty)?;
        check_ids(&self.user_ids)
    }
}
