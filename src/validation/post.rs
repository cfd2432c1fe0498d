use super::{char_len, ensure, is_blank, Validate};
use crate::dto::post::{CreatePostRequest, UpdatePostRequest};
use crate::error::Sentinel;

const POST_CODE_MAX: usize = 64;
const POST_NAME_MAX: usize = 50;

fn check_fields(code: &str, name: &str, sort: i32) -> Result<(), Sentinel> {
    ensure(!is_blank(code), Sentinel::PostCodeEmpty)?;
    ensure(char_len(code) <= POST_CODE_MAX, Sentinel::PostCodeTooLong)?;
    ensure(!is_blank(name), Sentinel::PostNameEmpty)?;
    ensure(char_len(name) <= POST_NAME_MAX, Sentinel::PostNameTooLong)?;
    ensure(sort >= 0, Sentinel::PostSortInvalid)
}

impl Validate for CreatePostRequest {
    fn validate(&self) -> Result<(), Sentinel> {
        check_fields(&self.post_code, &self.post_name, self.post_sort)
    }
}

impl Validate for UpdatePostRequest {
    fn validate(&self) -> Result<(), Sentinel> {
        ensure(self.post_id > 0, Sentinel::PostIdEmpty)?;
        check_fields(&self.post_code, &self.post_name, self.post_sort)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn req(code: &str, name: &str, sort: i32) -> CreatePostRequest {
        CreatePostRequest {
            post_code: code.to_string(),
            post_name: name.to_string(),
            post_sort: sort,
            ..Default::default()
        }
    }

    #[test]
    fn test_create() {
        assert_eq!(req("ceo", "董事长", 1).validate(), Ok(()));
        assert_eq!(req("", "", -1).validate(), Err(Sentinel::PostCodeEmpty));
        assert_eq!(req(&"c".repeat(65), "", -1).validate(), Err(Sentinel::PostCodeTooLong));
        assert_eq!(req("ceo", "", -1).validate(), Err(Sentinel::PostNameEmpty));
        assert_eq!(req("ceo", &"岗".repeat(51), -1).validate(), Err(Sentinel::PostNameTooLong));
        assert_eq!(req("ceo", "董事长", -1).validate(), Err(Sentinel::PostSortInvalid));
    }

    #[test]
    fn test_update() {
        let mut update = UpdatePostRequest {
            post_code: "se".to_string(),
            post_name: "项目经理".to_string(),
            post_sort: 2,
            ..Default::default()
        };
        assert_eq!(update.validate(), Err(Sentinel::PostIdEmpty));

        update.post_id = 2;
        assert_eq!(update.validate(), Ok(()));
    }
}
