use serde::{Deserialize, Serialize};

use crate::entity::{Status, SysDept};
use crate::tree::{build_tree, TreeNode};

/// 新增部门请求
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateDeptRequest {
    pub parent_id: i64,
    pub dept_name: String,
    pub order_num: i32,
    pub leader: String,
    pub phone: String,
    pub email: String,
    pub status: Status,
}

/// 修改部门请求
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateDeptRequest {
    pub dept_id: i64,
    pub parent_id: i64,
    pub dept_name: String,
    pub order_num: i32,
    pub leader: String,
    pub phone: String,
    pub email: String,
    pub status: Status,
}

/// 删除部门请求
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DeleteDeptRequest {
    pub dept_id: i64,
}

/// 部门查询
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DeptQuery {
    pub dept_name: Option<String>,
    pub status: Option<Status>,
    /// 编辑时排除该部门及其下级
    pub exclude_id: Option<i64>,
}

impl DeptQuery {
    pub fn matches(&self, dept: &SysDept) -> bool {
        let excluded = self
            .exclude_id
            .is_some_and(|id| dept.dept_id == id || dept.has_ancestor(id));
        !excluded
            && self
                .dept_name
                .as_deref()
                .map_or(true, |name| dept.dept_name.contains(name))
            && self.status.map_or(true, |s| dept.status == s)
    }
}

/// 部门树节点 (用于API响应)
pub type DeptTreeNode = TreeNode<SysDept>;

/// 按查询条件过滤后构建部门树
pub fn dept_tree(depts: Vec<SysDept>, query: &DeptQuery) -> Vec<DeptTreeNode> {
    build_tree(depts.into_iter().filter(|d| query.matches(d)).collect())
}
