//! Config entity - 参数配置表
//!
//! 表名: sys_config

use serde::{Deserialize, Serialize};

use super::{BaseFields, YesNo};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SysConfig {
    pub config_id: i64,

    pub config_name: String,

    pub config_key: String,

    pub config_value: String,

    /// 系统内置 (Y是 N否)
    #[serde(default)]
    pub config_type: YesNo,

    #[serde(flatten)]
    pub base: BaseFields,
}

impl SysConfig {
    pub fn is_builtin(&self) -> bool {
        self.config_type == YesNo::Yes
    }
}
