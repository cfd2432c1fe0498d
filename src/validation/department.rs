use super::{char_len, ensure, is_blank, optional_email, optional_phone, Validate};
use crate::dto::department::{CreateDeptRequest, DeleteDeptRequest, UpdateDeptRequest};
use crate::error::Sentinel;

const DEPT_NAME_MAX: usize = 30;

fn check_fields(
    parent_id: i64,
    dept_name: &str,
    order_num: i32,
    phone: &str,
    email: &str,
) -> Result<(), Sentinel> {
    ensure(parent_id >= 0, Sentinel::DeptParentInvalid)?;
    ensure(!is_blank(dept_name), Sentinel::DeptNameEmpty)?;
    ensure(char_len(dept_name) <= DEPT_NAME_MAX, Sentinel::DeptNameTooLong)?;
    ensure(order_num >= 0, Sentinel::DeptOrderInvalid)?;
    ensure(optional_phone(phone), Sentinel::DeptPhoneInvalid)?;
    ensure(optional_email(email), Sentinel::DeptEmailInvalid)
}

impl Validate for CreateDeptRequest {
    fn validate(&self) -> Result<(), Sentinel> {
        check_fields(
            self.parent_id,
            &self.dept_name,
            self.order_num,
            &self.phone,
            &self.email,
        )
    }
}

impl Validate for UpdateDeptRequest {
    fn validate(&self) -> Result<(), Sentinel> {
        ensure(self.parent_id != self.dept_id, Sentinel::DeptParentSelf)?;
        ensure(self.dept_id > 0, Sentinel::DeptIdEmpty)?;
        check_fields(
            self.parent_id,
            &self.dept_name,
            self.order_num,
            &self.phone,
            &self.email,
        )
    }
}

impl Validate for DeleteDeptRequest {
    fn validate(&self) -> Result<(), Sentinel> {
        ensure(self.dept_id > 0, Sentinel::DeptIdEmpty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_create() -> CreateDeptRequest {
        CreateDeptRequest {
            parent_id: 100,
            dept_name: "研发部门".to_string(),
            order_num: 1,
            leader: "若依".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_create() {
        assert_eq!(valid_create().validate(), Ok(()));

        let req: CreateDeptRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req.validate(), Err(Sentinel::DeptNameEmpty));

        let mut req = valid_create();
        req.parent_id = -1;
        req.dept_name = String::new();
        assert_eq!(req.validate(), Err(Sentinel::DeptParentInvalid));

        let mut req = valid_create();
        req.dept_name = "部".repeat(31);
        assert_eq!(req.validate(), Err(Sentinel::DeptNameTooLong));

        let mut req = valid_create();
        req.order_num = -1;
        req.phone = "bad".to_string();
        assert_eq!(req.validate(), Err(Sentinel::DeptOrderInvalid));
    }

    #[test]
    fn test_contact_only_checked_when_present() {
        let mut req = valid_create();
        req.phone = "123".to_string();
        req.email = "bad".to_string();
        assert_eq!(req.validate(), Err(Sentinel::DeptPhoneInvalid));

        req.phone = "15888888888".to_string();
        assert_eq!(req.validate(), Err(Sentinel::DeptEmailInvalid));

        req.email = "ry@qq.com".to_string();
        assert_eq!(req.validate(), Ok(()));

        req.phone = String::new();
        req.email = String::new();
        assert_eq!(req.validate(), Ok(()));
    }

    #[test]
    fn test_update_parent_self_first() {
        let req = UpdateDeptRequest {
            dept_id: 101,
            parent_id: 101,
            order_num: -1,
            phone: "bad".to_string(),
            ..Default::default()
        };
        assert_eq!(req.validate(), Err(Sentinel::DeptParentSelf));
    }

    #[test]
    fn test_update() {
        let req = UpdateDeptRequest {
            dept_id: 0,
            parent_id: 100,
            ..Default::default()
        };
        assert_eq!(req.validate(), Err(Sentinel::DeptIdEmpty));

        let req = UpdateDeptRequest {
            dept_id: 101,
            parent_id: 100,
            dept_name: "深圳总公司".to_string(),
            order_num: 1,
            ..Default::default()
        };
        assert_eq!(req.validate(), Ok(()));
    }

    #[test]
    fn test_delete() {
        assert_eq!(DeleteDeptRequest { dept_id: -1 }.validate(), Err(Sentinel::DeptIdEmpty));
        assert_eq!(DeleteDeptRequest { dept_id: 101 }.validate(), Ok(()));
    }
}
