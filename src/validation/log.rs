use super::common::check_ids;
use super::{ensure, is_blank, Validate};
use crate::dto::log::{DeleteLogsRequest, UnlockUserRequest};
use crate::error::Sentinel;

impl Validate for DeleteLogsRequest {
    fn validate(&self) -> Result<(), Sentinel> {
        check_ids(&self.ids)
    }
}

impl Validate for UnlockUserRequest {
    fn validate(&self) -> Result<(), Sentinel> {
        ensure(!is_blank(&self.user_name), Sentinel::UserNameEmpty)
    }
}
