use super::{char_len, ensure, is_blank, Validate};
use crate::dto::sys_config::{CreateConfigRequest, UpdateConfigRequest};
use crate::error::Sentinel;

const CONFIG_NAME_MAX: usize = 100;
const CONFIG_KEY_MAX: usize = 100;
const CONFIG_VALUE_MAX: usize = 500;

fn check_fields(name: &str, key: &str, value: &str) -> Result<(), Sentinel> {
    ensure(!is_blank(name), Sentinel::ConfigNameEmpty)?;
    ensure(char_len(name) <= CONFIG_NAME_MAX, Sentinel::ConfigNameTooLong)?;
    ensure(!is_blank(key), Sentinel::ConfigKeyEmpty)?;
    ensure(char_len(key) <= CONFIG_KEY_MAX, Sentinel::ConfigKeyTooLong)?;
    ensure(!is_blank(value), Sentinel::ConfigValueEmpty)?;
    ensure(char_len(value) <= CONFIG_VALUE_MAX, Sentinel::ConfigValueTooLong)
}

impl Validate for CreateConfigRequest {
    fn validate(&self) -> Result<(), Sentinel> {
        check_fields(&self.config_name, &self.config_key, &self.config_value)
    }
}

impl Validate for UpdateConfigRequest {
    fn validate(&self) -> Result<(), Sentinel> {
        ensure(self.config_id > 0, Sentinel::ConfigIdEmpty)?;
        check_fields(&self.config_name, &self.config_key, &self.config_value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn req(name: &str, key: &str, value: &str) -> CreateConfigRequest {
        CreateConfigRequest {
            config_name: name.to_string(),
            config_key: key.to_string(),
            config_value: value.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_create() {
        assert_eq!(
            req("账号自助-验证码开关", "sys.account.captchaEnabled", "true").validate(),
            Ok(())
        );
        assert_eq!(req("", "", "").validate(), Err(Sentinel::ConfigNameEmpty));
        assert_eq!(
            req(&"n".repeat(101), "", "").validate(),
            Err(Sentinel::ConfigNameTooLong)
        );
        assert_eq!(req("名称", "", "").validate(), Err(Sentinel::ConfigKeyEmpty));
        assert_eq!(
            req("名称", &"k".repeat(101), "").validate(),
            Err(Sentinel::ConfigKeyTooLong)
        );
        assert_eq!(req("名称", "sys.key", "").validate(), Err(Sentinel::ConfigValueEmpty));
        assert_eq!(
            req("名称", "sys.key", &"v".repeat(501)).validate(),
            Err(Sentinel::ConfigValueTooLong)
        );
        assert_eq!(req("名称", "sys.key", &"v".repeat(500)).validate(), Ok(()));
    }

    #[test]
    fn test_update() {
        let update: UpdateConfigRequest = serde_json::from_str(
            r#"{"configName": "主框架页-默认皮肤", "configKey": "sys.index.skinName", "configValue": "skin-blue"}"#,
        )
        .unwrap();
        assert_eq!(update.validate(), Err(Sentinel::ConfigIdEmpty));

        let update = UpdateConfigRequest {
            config_id: 1,
            ..update
        };
        assert_eq!(update.validate(), Ok(()));
    }
}
