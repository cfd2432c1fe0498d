//! DTO 模块
//!
//! 请求体与响应体的数据传输对象，按业务领域划分。
//! 请求结构缺省字段一律取默认值，由校验器给出具体的“不能为空”错误。

pub mod auth;
pub mod common;
pub mod department;
pub mod dict;
pub mod log;
pub mod menu;
pub mod post;
pub mod role;
pub mod sys_config;
pub mod upload;
pub mod user;

pub use common::{IdsRequest, TimeRange};
