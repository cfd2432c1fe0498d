use super::{ensure, Validate};
use crate::dto::IdsRequest;
use crate::error::Sentinel;

/// 批量 ID: 非空，且每个 ID 为正数
pub fn check_ids(ids: &[i64]) -> Result<(), Sentinel> {
    ensure(!ids.is_empty(), Sentinel::IdsEmpty)?;
    ensure(ids.iter().all(|&id| id > 0), Sentinel::IdInvalid)
}

impl Validate for IdsRequest {
    fn validate(&self) -> Result<(), Sentinel> {
        check_ids(&self.ids)
    }
}
