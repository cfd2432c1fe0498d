use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// 批量操作的 ID 列表
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IdsRequest {
    pub ids: Vec<i64>,
}

/// 查询时间范围 (闭区间, 按天)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TimeRange {
    pub begin_time: Option<NaiveDate>,
    pub end_time: Option<NaiveDate>,
}

impl TimeRange {
    /// 起止颠倒时视为无效
    pub fn is_valid(&self) -> bool {
        match (self.begin_time, self.end_time) {
            (Some(begin), Some(end)) => begin <= end,
            _ => true,
        }
    }

    pub fn contains(&self, day: NaiveDate) -> bool {
        self.begin_time.map_or(true, |b| day >= b) && self.end_time.map_or(true, |e| day <= e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_range() {
        let range: TimeRange =
            serde_json::from_str(r#"{"beginTime": "2024-01-01", "endTime": "2024-01-31"}"#).unwrap();
        assert!(range.is_valid());
        assert!(range.contains(NaiveDate::from_ymd_opt(2024, 1, 31).unwrap()));
        assert!(!range.contains(NaiveDate::from_ymd_opt(2024, 2, 1).unwrap()));

        let open = TimeRange::default();
        assert!(open.contains(NaiveDate::from_ymd_opt(1999, 1, 1).unwrap()));

        let reversed = TimeRange {
            begin_time: range.end_time,
            end_time: range.begin_time,
        };
        assert!(!reversed.is_valid());
    }
}
