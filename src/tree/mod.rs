//! Tree projections for departments and menus
//!
//! Rows arrive as a flat list linked by `parent_id`; the UI wants nested
//! nodes. A row whose parent is not in the list becomes a root, so a
//! filtered subset (e.g. search results) still renders.

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::entity::{Status, SysDept, SysMenu};

pub mod router;

pub use router::{build_routers, RouterMeta, RouterVo};

/// Rows that form a parent/child hierarchy
pub trait TreeEntity {
    fn id(&self) -> i64;
    fn parent_id(&self) -> i64;
    /// Sibling ordering key
    fn order_num(&self) -> i32 {
        0
    }
}

impl TreeEntity for SysDept {
    fn id(&self) -> i64 {
        self.dept_id
    }

    fn parent_id(&self) -> i64 {
        self.parent_id
    }

    fn order_num(&self) -> i32 {
        self.order_num
    }
}

impl TreeEntity for SysMenu {
    fn id(&self) -> i64 {
        self.menu_id
    }

    fn parent_id(&self) -> i64 {
        self.parent_id
    }

    fn order_num(&self) -> i32 {
        self.order_num
    }
}

/// 树节点
#[derive(Clone, Debug, Serialize)]
pub struct TreeNode<T> {
    #[serde(flatten)]
    pub item: T,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TreeNode<T>>,
}

impl<T> TreeNode<T> {
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of nodes in this subtree, self included
    pub fn size(&self) -> usize {
        1 + self.children.iter().map(TreeNode::size).sum::<usize>()
    }
}

/// Build a forest from flat rows.
///
/// Siblings are ordered by `order_num`, ties keep input order. A row whose
/// parent is itself is treated as a root.
pub fn build_tree<T: TreeEntity>(items: Vec<T>) -> Vec<TreeNode<T>> {
    let ids: HashSet<i64> = items.iter().map(T::id).collect();

    let mut sorted = items;
    sorted.sort_by_key(T::order_num);

    let mut roots = Vec::new();
    let mut by_parent: HashMap<i64, Vec<T>> = HashMap::new();
    for item in sorted {
        let parent = item.parent_id();
        if parent == item.id() || !ids.contains(&parent) {
            roots.push(item);
        } else {
            by_parent.entry(parent).or_default().push(item);
        }
    }

    roots
        .into_iter()
        .map(|item| attach_children(item, &mut by_parent))
        .collect()
}

fn attach_children<T: TreeEntity>(item: T, by_parent: &mut HashMap<i64, Vec<T>>) -> TreeNode<T> {
    let children = by_parent
        .remove(&item.id())
        .unwrap_or_default()
        .into_iter()
        .map(|child| attach_children(child, by_parent))
        .collect();
    TreeNode { item, children }
}

/// 下拉树结构
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TreeSelect {
    pub id: i64,
    pub label: String,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub disabled: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TreeSelect>,
}

/// 部门下拉树；停用部门不可选
pub fn dept_tree_select(depts: Vec<SysDept>) -> Vec<TreeSelect> {
    build_tree(depts)
        .into_iter()
        .map(|n| to_select(n, &|d: &SysDept| (d.dept_name.clone(), d.status == Status::Disabled)))
        .collect()
}

/// 菜单下拉树
pub fn menu_tree_select(menus: Vec<SysMenu>) -> Vec<TreeSelect> {
    build_tree(menus)
        .into_iter()
        .map(|n| to_select(n, &|m: &SysMenu| (m.menu_name.clone(), false)))
        .collect()
}

fn to_select<T: TreeEntity>(node: TreeNode<T>, label: &dyn Fn(&T) -> (String, bool)) -> TreeSelect {
    let (text, disabled) = label(&node.item);
    TreeSelect {
        id: node.item.id(),
        label: text,
        disabled,
        children: node
            .children
            .into_iter()
            .map(|c| to_select(c, label))
            .collect(),
    }
}
