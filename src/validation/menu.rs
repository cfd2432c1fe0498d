use super::{char_len, ensure, is_blank, Validate};
use crate::dto::menu::{CreateMenuRequest, DeleteMenuRequest, UpdateMenuRequest};
use crate::entity::menu::is_http_link;
use crate::entity::MenuType;
use crate::error::Sentinel;

const MENU_NAME_MAX: usize = 50;

/// Fields shared by create and update
struct MenuFields<'a> {
    menu_name: &'a str,
    parent_id: i64,
    order_num: i32,
    path: &'a str,
    is_frame: bool,
    menu_type: MenuType,
}

impl MenuFields<'_> {
    fn check(&self) -> Result<(), Sentinel> {
        ensure(!is_blank(self.menu_name), Sentinel::MenuNameEmpty)?;
        ensure(char_len(self.menu_name) <= MENU_NAME_MAX, Sentinel::MenuNameTooLong)?;
        ensure(self.parent_id >= 0, Sentinel::MenuParentInvalid)?;
        ensure(self.order_num >= 0, Sentinel::MenuOrderInvalid)?;
        // 按钮没有路由地址
        ensure(
            self.menu_type == MenuType::Button || !is_blank(self.path),
            Sentinel::MenuPathEmpty,
        )?;
        ensure(!self.is_frame || is_http_link(self.path), Sentinel::MenuExternalLinkInvalid)
    }
}

impl Validate for CreateMenuRequest {
    fn validate(&self) -> Result<(), Sentinel> {
        MenuFields {
            menu_name: &self.menu_name,
            parent_id: self.parent_id,
            order_num: self.order_num,
            path: &self.path,
            is_frame: self.is_frame,
            menu_type: self.menu_type,
        }
        .check()
    }
}

impl Validate for UpdateMenuRequest {
    fn validate(&self) -> Result<(), Sentinel> {
        // 自身为上级时直接拒绝，不论其余字段
        ensure(self.parent_id != self.menu_id, Sentinel::MenuParentSelf)?;
        ensure(self.menu_id > 0, Sentinel::MenuIdEmpty)?;
        MenuFields {
            menu_name: &self.menu_name,
            parent_id: self.parent_id,
            order_num: self.order_num,
            path: &self.path,
            is_frame: self.is_frame,
            menu_type: self.menu_type,
        }
        .check()
    }
}

impl Validate for DeleteMenuRequest {
    fn validate(&self) -> Result<(), Sentinel> {
        ensure(self.menu_id > 0, Sentinel::MenuIdEmpty)
    }
}
