//! Post entity - 岗位信息表
//!
//! 表名: sys_post

use serde::{Deserialize, Serialize};

use super::{BaseFields, Status};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SysPost {
    pub post_id: i64,

    /// 岗位编码
    pub post_code: String,

    pub post_name: String,

    pub post_sort: i32,

    #[serde(default)]
    pub status: Status,

    #[serde(flatten)]
    pub base: BaseFields,
}
