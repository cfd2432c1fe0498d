use super::{char_len, ensure, is_blank, is_dict_type, Validate};
use crate::dto::dict::{
    CreateDictDataRequest, CreateDictTypeRequest, UpdateDictDataRequest, UpdateDictTypeRequest,
};
use crate::error::Sentinel;

const DICT_FIELD_MAX: usize = 100;

fn check_type(dict_name: &str, dict_type: &str) -> Result<(), Sentinel> {
    ensure(!is_blank(dict_name), Sentinel::DictNameEmpty)?;
    ensure(char_len(dict_name) <= DICT_FIELD_MAX, Sentinel::DictNameTooLong)?;
    ensure(!is_blank(dict_type), Sentinel::DictTypeEmpty)?;
    ensure(char_len(dict_type) <= DICT_FIELD_MAX, Sentinel::DictTypeTooLong)?;
    ensure(is_dict_type(dict_type), Sentinel::DictTypeFormat)
}

fn check_data(label: &str, value: &str, dict_type: &str, sort: i32) -> Result<(), Sentinel> {
    ensure(!is_blank(label), Sentinel::DictLabelEmpty)?;
    ensure(char_len(label) <= DICT_FIELD_MAX, Sentinel::DictLabelTooLong)?;
    ensure(!is_blank(value), Sentinel::DictValueEmpty)?;
    ensure(char_len(value) <= DICT_FIELD_MAX, Sentinel::DictValueTooLong)?;
    ensure(!is_blank(dict_type), Sentinel::DictTypeEmpty)?;
    ensure(sort >= 0, Sentinel::DictSortInvalid)
}

impl Validate for CreateDictTypeRequest {
    fn validate(&self) -> Result<(), Sentinel> {
        check_type(&self.dict_name, &self.dict_type)
    }
}

impl Validate for UpdateDictTypeRequest {
    fn validate(&self) -> Result<(), Sentinel> {
        ensure(self.dict_id > 0, Sentinel::DictTypeIdEmpty)?;
        check_type(&self.dict_name, &self.dict_type)
    }
}

impl Validate for CreateDictDataRequest {
    fn validate(&self) -> Result<(), Sentinel> {
        check_data(&self.dict_label, &self.dict_value, &self.dict_type, self.dict_sort)
    }
}

impl Validate for UpdateDictDataRequest {
    fn validate(&self) -> Result<(), Sentinel> {
        ensure(self.dict_code > 0, Sentinel::DictDataIdEmpty)?;
        check_data(&self.dict_label, &self.dict_value, &self.dict_type, self.dict_sort)
    }
}
