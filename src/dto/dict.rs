use serde::{Deserialize, Serialize};

use super::TimeRange;
use crate::entity::{Status, SysDictData, YesNo};
use crate::response::PageQuery;

/// 新增字典类型请求
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateDictTypeRequest {
    pub dict_name: String,
    pub dict_type: String,
    pub status: Status,
    pub remark: Option<String>,
}

/// 修改字典类型请求
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateDictTypeRequest {
    pub dict_id: i64,
    pub dict_name: String,
    pub dict_type: String,
    pub status: Status,
    pub remark: Option<String>,
}

/// 新增字典数据请求
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateDictDataRequest {
    pub dict_sort: i32,
    pub dict_label: String,
    pub dict_value: String,
    pub dict_type: String,
    pub css_class: String,
    pub list_class: String,
    pub is_default: YesNo,
    pub status: Status,
    pub remark: Option<String>,
}

/// 修改字典数据请求
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateDictDataRequest {
    pub dict_code: i64,
    pub dict_sort: i32,
    pub dict_label: String,
    pub dict_value: String,
    pub dict_type: String,
    pub css_class: String,
    pub list_class: String,
    pub is_default: YesNo,
    pub status: Status,
    pub remark: Option<String>,
}

/// 字典类型查询
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DictTypeQuery {
    #[serde(flatten)]
    pub page: PageQuery,
    pub dict_name: Option<String>,
    pub dict_type: Option<String>,
    pub status: Option<Status>,
    #[serde(flatten)]
    pub range: TimeRange,
}

/// 字典数据查询
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DictDataQuery {
    #[serde(flatten)]
    pub page: PageQuery,
    pub dict_type: Option<String>,
    pub dict_label: Option<String>,
    pub status: Option<Status>,
}

/// 前端下拉选项 (按字典类型获取)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DictDataOption {
    pub dict_label: String,
    pub dict_value: String,
    pub list_class: String,
    pub css_class: String,
    pub is_default: bool,
}

/// 取某字典类型下的启用项，按排序号排列
pub fn dict_options(data: &[SysDictData], dict_type: &str) -> Vec<DictDataOption> {
    let mut items: Vec<&SysDictData> = data
        .iter()
        .filter(|d| d.dict_type == dict_type && d.status == Status::Normal)
        .collect();
    items.sort_by_key(|d| d.dict_sort);
    items
        .into_iter()
        .map(|d| DictDataOption {
            dict_label: d.dict_label.clone(),
            dict_value: d.dict_value.clone(),
            list_class: d.list_class.clone(),
            css_class: d.css_class.clone(),
            is_default: d.is_default(),
        })
        .collect()
}

/// 按键值查标签
pub fn dict_label<'a>(data: &'a [SysDictData], dict_type: &str, value: &str) -> Option<&'a str> {
    data.iter()
        .find(|d| d.dict_type == dict_type && d.dict_value == value)
        .map(|d| d.dict_label.as_str())
}
