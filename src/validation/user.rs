use super::auth::password_length_ok;
use super::common::check_ids;
use super::{char_len, ensure, is_blank, optional_email, optional_phone, Validate};
use crate::dto::user::{
    AuthRoleRequest, ChangeUserStatusRequest, CreateUserRequest, DeleteUsersRequest,
    ResetPasswordRequest, UpdateUserRequest,
};
use crate::error::Sentinel;
use crate::permission::is_super_admin;

const USER_NAME_MIN: usize = 2;
const USER_NAME_MAX: usize = 20;
const NICKNAME_MAX: usize = 30;

/// 用户 ID 必须为正数，且不能是超级管理员
fn check_target(user_id: i64) -> Result<(), Sentinel> {
    ensure(user_id > 0, Sentinel::UserIdEmpty)?;
    ensure(!is_super_admin(user_id), Sentinel::SuperAdminUser)
}

fn check_user_name(user_name: &str) -> Result<(), Sentinel> {
    ensure(!is_blank(user_name), Sentinel::UserNameEmpty)?;
    ensure(
        (USER_NAME_MIN..=USER_NAME_MAX).contains(&char_len(user_name)),
        Sentinel::UserNameLength,
    )
}

fn check_nickname(nick_name: &str) -> Result<(), Sentinel> {
    ensure(!is_blank(nick_name), Sentinel::NicknameEmpty)?;
    ensure(char_len(nick_name) <= NICKNAME_MAX, Sentinel::NicknameTooLong)
}

fn check_password(password: &str) -> Result<(), Sentinel> {
    ensure(!password.is_empty(), Sentinel::PasswordEmpty)?;
    ensure(password_length_ok(password), Sentinel::PasswordLength)
}

fn check_contact(email: &str, phone: &str) -> Result<(), Sentinel> {
    ensure(optional_email(email), Sentinel::EmailInvalid)?;
    ensure(optional_phone(phone), Sentinel::PhoneInvalid)
}

impl Validate for CreateUserRequest {
    fn validate(&self) -> Result<(), Sentinel> {
        check_user_name(&self.user_name)?;
        check_nickname(&self.nick_name)?;
        check_password(&self.password)?;
        check_contact(&self.email, &self.phonenumber)
    }
}

impl Validate for UpdateUserRequest {
    fn validate(&self) -> Result<(), Sentinel> {
        check_target(self.user_id)?;
        check_user_name(&self.user_name)?;
        check_nickname(&self.nick_name)?;
        check_contact(&self.email, &self.phonenumber)
    }
}

impl Validate for DeleteUsersRequest {
    fn validate(&self) -> Result<(), Sentinel> {
        check_ids(&self.ids)?;
        ensure(!self.ids.iter().any(|&id| is_super_admin(id)), Sentinel::SuperAdminUser)?;
        ensure(!self.ids.contains(&self.current_user_id), Sentinel::DeleteSelf)
    }
}

impl Validate for ResetPasswordRequest {
    fn validate(&self) -> Result<(), Sentinel> {
        check_target(self.user_id)?;
        check_password(&self.password)
    }
}

impl Validate for ChangeUserStatusRequest {
    fn validate(&self) -> Result<(), Sentinel> {
        check_target(self.user_id)
    }
}

impl Validate for AuthRoleRequest {
    fn validate(&self) -> Result<(), Sentinel> {
        ensure(self.user_id > 0, Sentinel::UserIdEmpty)?;
        // 允许空列表，表示取消全部角色
        ensure(self.role_ids.iter().all(|&id| id > 0), Sentinel::IdInvalid)
    }
}
