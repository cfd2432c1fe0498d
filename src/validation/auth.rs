use super::{char_len, ensure, is_blank, optional_email, optional_phone, Validate};
use crate::dto::auth::{ChangePasswordRequest, LoginRequest, UpdateProfileRequest};
use crate::error::Sentinel;

/// 密码长度范围 (字符)
pub const PASSWORD_MIN: usize = 5;
pub const PASSWORD_MAX: usize = 20;

pub fn password_length_ok(password: &str) -> bool {
    (PASSWORD_MIN..=PASSWORD_MAX).contains(&char_len(password))
}

impl Validate for LoginRequest {
    fn validate(&self) -> Result<(), Sentinel> {
        ensure(!is_blank(&self.username), Sentinel::AuthUsernameEmpty)?;
        ensure(!self.password.is_empty(), Sentinel::AuthPasswordEmpty)
    }
}

impl LoginRequest {
    /// 验证码开启时调用；缺少 uuid 等同于验证码已失效
    pub fn validate_captcha(&self) -> Result<(), Sentinel> {
        ensure(!is_blank(&self.code), Sentinel::CaptchaEmpty)?;
        ensure(!is_blank(&self.uuid), Sentinel::CaptchaExpired)
    }
}

impl Validate for ChangePasswordRequest {
    fn validate(&self) -> Result<(), Sentinel> {
        ensure(!self.old_password.is_empty(), Sentinel::OldPasswordEmpty)?;
        ensure(!self.new_password.is_empty(), Sentinel::NewPasswordEmpty)?;
        ensure(password_length_ok(&self.new_password), Sentinel::PasswordLength)?;
        ensure(self.new_password != self.old_password, Sentinel::PasswordSame)
    }
}

impl Validate for UpdateProfileRequest {
    fn validate(&self) -> Result<(), Sentinel> {
        ensure(!is_blank(&self.nick_name), Sentinel::NicknameEmpty)?;
        ensure(optional_email(&self.email), Sentinel::EmailInvalid)?;
        ensure(optional_phone(&self.phonenumber), Sentinel::PhoneInvalid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn login(username: &str, password: &str, code: &str, uuid: &str) -> LoginRequest {
        LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
            code: code.to_string(),
            uuid: uuid.to_string(),
        }
    }

    #[test]
    fn test_login_order() {
        assert_eq!(login("", "", "", "").validate(), Err(Sentinel::AuthUsernameEmpty));
        assert_eq!(login("admin", "", "", "").validate(), Err(Sentinel::AuthPasswordEmpty));
        assert_eq!(login("admin", "admin123", "", "").validate(), Ok(()));
    }

    #[test]
    fn test_login_captcha() {
        let req = login("admin", "admin123", "", "");
        assert_eq!(req.validate_captcha(), Err(Sentinel::CaptchaEmpty));
        let req = login("admin", "admin123", "8", "");
        assert_eq!(req.validate_captcha(), Err(Sentinel::CaptchaExpired));
        let req = login("admin", "admin123", "8", "b3f1c0");
        assert_eq!(req.validate_captcha(), Ok(()));
    }

    #[test]
    fn test_login_missing_fields_from_json() {
        let req: LoginRequest = serde_json::from_str(r#"{"username": "admin"}"#).unwrap();
        assert_eq!(req.validate(), Err(Sentinel::AuthPasswordEmpty));
    }

    #[test]
    fn test_change_password() {
        let req = |old: &str, new: &str| ChangePasswordRequest {
            old_password: old.to_string(),
            new_password: new.to_string(),
        };
        assert_eq!(req("", "").validate(), Err(Sentinel::OldPasswordEmpty));
        assert_eq!(req("admin123", "").validate(), Err(Sentinel::NewPasswordEmpty));
        assert_eq!(req("admin123", "abc").validate(), Err(Sentinel::PasswordLength));
        assert_eq!(
            req("admin123", "a".repeat(21).as_str()).validate(),
            Err(Sentinel::PasswordLength)
        );
        assert_eq!(req("admin123", "admin123").validate(), Err(Sentinel::PasswordSame));
        assert_eq!(req("admin123", "admin456").validate(), Ok(()));
    }

    #[test]
    fn test_profile() {
        let mut req = UpdateProfileRequest::default();
        assert_eq!(req.validate(), Err(Sentinel::NicknameEmpty));

        req.nick_name = "若依".to_string();
        assert_eq!(req.validate(), Ok(()));

        req.email = "bad".to_string();
        req.phonenumber = "bad".to_string();
        assert_eq!(req.validate(), Err(Sentinel::EmailInvalid));

        req.email = "ry@163.com".to_string();
        assert_eq!(req.validate(), Err(Sentinel::PhoneInvalid));

        req.phonenumber = "15888888888".to_string();
        assert_eq!(req.validate(), Ok(()));
    }
}
