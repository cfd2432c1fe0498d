//! LoginLog entity - 系统访问记录
//!
//! 表名: sys_logininfor

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 登录状态: "0"=成功, "1"=失败
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoginStatus {
    #[default]
    #[serde(rename = "0")]
    Success,
    #[serde(rename = "1")]
    Failed,
}

/// 登录日志消息
pub mod msg {
    pub const LOGIN_SUCCESS: &str = "登录成功";
    pub const LOGOUT: &str = "退出成功";
    pub const REGISTER: &str = "注册成功";
    pub const LOGIN_FAIL: &str = "登录失败";
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginLog {
    pub info_id: i64,

    pub user_name: String,

    /// 登录IP地址
    pub ipaddr: String,

    pub login_location: String,

    pub browser: String,

    pub os: String,

    pub status: LoginStatus,

    /// 提示消息
    pub msg: String,

    pub login_time: DateTime<Utc>,
}

/// 创建登录日志的辅助结构
#[derive(Clone, Debug)]
pub struct NewLoginLog {
    pub user_name: String,
    pub status: LoginStatus,
    pub msg: String,
    pub ipaddr: String,
    pub user_agent: String,
}

impl NewLoginLog {
    pub fn success(user_name: impl Into<String>) -> Self {
        Self {
            user_name: user_name.into(),
            status: LoginStatus::Success,
            msg: msg::LOGIN_SUCCESS.to_string(),
            ipaddr: String::new(),
            user_agent: String::new(),
        }
    }

    pub fn failed(user_name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            user_name: user_name.into(),
            status: LoginStatus::Failed,
            msg: reason.into(),
            ipaddr: String::new(),
            user_agent: String::new(),
        }
    }

    pub fn with_ip(mut self, ip: impl Into<String>) -> Self {
        self.ipaddr = ip.into();
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn finish(self, login_time: DateTime<Utc>) -> LoginLog {
        let (browser, os) = parse_user_agent(&self.user_agent);
        LoginLog {
            info_id: 0,
            user_name: self.user_name,
            ipaddr: self.ipaddr,
            login_location: String::new(),
            browser: browser.to_string(),
            os: os.to_string(),
            status: self.status,
            msg: self.msg,
            login_time,
        }
    }
}

/// 从 User-Agent 粗略识别浏览器与操作系统
fn parse_user_agent(ua: &str) -> (&'static str, &'static str) {
    let browser = if ua.contains("Edg/") {
        "Edge"
    } else if ua.contains("Chrome/") {
        "Chrome"
    } else if ua.contains("Firefox/") {
        "Firefox"
    } else if ua.contains("Safari/") {
        "Safari"
    } else {
        "Unknown"
    };

    let os = if ua.contains("Windows") {
        "Windows"
    } else if ua.contains("Android") {
        "Android"
    } else if ua.contains("iPhone") || ua.contains("iPad") {
        "iOS"
    } else if ua.contains("Mac OS X") {
        "Mac OS X"
    } else if ua.contains("Linux") {
        "Linux"
    } else {
        "Unknown"
    };

    (browser, os)
}
