use serde::{Deserialize, Serialize};

use crate::entity::{Status, SysPost};
use crate::response::PageQuery;

/// 新增岗位请求
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreatePostRequest {
    pub post_code: String,
    pub post_name: String,
    pub post_sort: i32,
    pub status: Status,
    pub remark: Option<String>,
}

/// 修改岗位请求
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdatePostRequest {
    pub post_id: i64,
    pub post_code: String,
    pub post_name: String,
    pub post_sort: i32,
    pub status: Status,
    pub remark: Option<String>,
}

/// 岗位查询
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PostQuery {
    #[serde(flatten)]
    pub page: PageQuery,
    pub post_code: Option<String>,
    pub post_name: Option<String>,
    pub status: Option<Status>,
}

/// 岗位下拉选项
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostOption {
    pub post_id: i64,
    pub post_name: String,
}

impl From<&SysPost> for PostOption {
    fn from(post: &SysPost) -> Self {
        Self {
            post_id: post.post_id,
            post_name: post.post_name.clone(),
        }
    }
}
