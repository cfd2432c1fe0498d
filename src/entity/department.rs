//! Department entity - 部门表
//!
//! 表名: sys_dept

use serde::{Deserialize, Serialize};

use super::{BaseFields, DelFlag, Status};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SysDept {
    pub dept_id: i64,

    /// 父部门ID (0 表示顶级部门)
    pub parent_id: i64,

    /// 祖级列表, 如 "0,100,101"
    #[serde(default)]
    pub ancestors: String,

    pub dept_name: String,

    pub order_num: i32,

    /// 负责人
    #[serde(default)]
    pub leader: String,

    #[serde(default)]
    pub phone: String,

    #[serde(default)]
    pub email: String,

    #[serde(default)]
    pub status: Status,

    #[serde(default)]
    pub del_flag: DelFlag,

    #[serde(flatten)]
    pub base: BaseFields,
}

impl SysDept {
    /// 子部门应继承的祖级列表
    pub fn child_ancestors(&self) -> String {
        if self.ancestors.is_empty() {
            self.dept_id.to_string()
        } else {
            format!("{},{}", self.ancestors, self.dept_id)
        }
    }

    /// 祖级列表中是否包含指定部门
    pub fn has_ancestor(&self, dept_id: i64) -> bool {
        self.ancestors
            .split(',')
            .filter_map(|s| s.trim().parse::<i64>().ok())
            .any(|id| id == dept_id)
    }

    pub fn is_disabled(&self) -> bool {
        self.status == Status::Disabled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dept(id: i64, ancestors: &str) -> SysDept {
        SysDept {
            dept_id: id,
            ancestors: ancestors.to_string(),
            dept_name: format!("dept-{}", id),
            ..Default::default()
        }
    }

    #[test]
    fn test_child_ancestors() {
        assert_eq!(dept(100, "0").child_ancestors(), "0,100");
        assert_eq!(dept(101, "0,100").child_ancestors(), "0,100,101");
        assert_eq!(dept(7, "").child_ancestors(), "7");
    }

    #[test]
    fn test_has_ancestor() {
        let d = dept(103, "0,100,101");
        assert!(d.has_ancestor(100));
        assert!(d.has_ancestor(101));
        assert!(!d.has_ancestor(10));
        assert!(!d.has_ancestor(103));
    }
}
