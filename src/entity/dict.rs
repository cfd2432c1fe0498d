//! Dictionary entities - 字典类型表 / 字典数据表
//!
//! 表名: sys_dict_type, sys_dict_data

use serde::{Deserialize, Serialize};

use super::{BaseFields, Status, YesNo};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SysDictType {
    pub dict_id: i64,

    pub dict_name: String,

    /// 字典类型, 如 "sys_user_sex"
    pub dict_type: String,

    #[serde(default)]
    pub status: Status,

    #[serde(flatten)]
    pub base: BaseFields,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SysDictData {
    pub dict_code: i64,

    pub dict_sort: i32,

    pub dict_label: String,

    pub dict_value: String,

    pub dict_type: String,

    /// 样式属性
    #[serde(default)]
    pub css_class: String,

    /// 表格回显样式
    #[serde(default)]
    pub list_class: String,

    #[serde(default)]
    pub is_default: YesNo,

    #[serde(default)]
    pub status: Status,

    #[serde(flatten)]
    pub base: BaseFields,
}

impl SysDictData {
    pub fn is_default(&self) -> bool {
        self.is_default == YesNo::Yes
    }
}
