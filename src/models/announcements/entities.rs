use serde::{Deserialize, Serialize};

/// 非 Subject 公告的 course_code 哨兵值
pub const GLOBAL_COURSE_SENTINEL: &str = "Global";

// 公告可见范围
#[derive(Debug, Clone, Serialize, PartialEq)]
pub enum AnnouncementScope {
    Global,     // 全员可见
    Department, // 全系学生可见（不区分选课）
    Subject,    // 仅对应课程的学生可见
}

impl AnnouncementScope {
    pub const GLOBAL: &'static str = "Global";
    pub const DEPARTMENT: &'static str = "Department";
    pub const SUBJECT: &'static str = "Subject";
}

impl<'de> Deserialize<'de> for AnnouncementScope {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            AnnouncementScope::GLOBAL => Ok(AnnouncementScope::Global),
            AnnouncementScope::DEPARTMENT => Ok(AnnouncementScope::Department),
            AnnouncementScope::SUBJECT => Ok(AnnouncementScope::Subject),
            _ => Err(serde::de::Error::custom(format!(
                "无效的公告范围: '{s}'. 支持的范围: Global, Department, Subject"
            ))),
        }
    }
}

impl std::fmt::Display for AnnouncementScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnnouncementScope::Global => write!(f, "{}", AnnouncementScope::GLOBAL),
            AnnouncementScope::Department => write!(f, "{}", AnnouncementScope::DEPARTMENT),
            AnnouncementScope::Subject => write!(f, "{}", AnnouncementScope::SUBJECT),
        }
    }
}

impl std::str::FromStr for AnnouncementScope {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Global" => Ok(AnnouncementScope::Global),
            "Department" => Ok(AnnouncementScope::Department),
            "Subject" => Ok(AnnouncementScope::Subject),
            _ => Err(format!("Invalid announcement scope: {s}")),
        }
    }
}

// 公告实体（创建后不可修改）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Announcement {
    pub id: i64,
    pub title: String,
    pub content: String,
    #[serde(rename = "type")]
    pub scope: AnnouncementScope,
    /// scope = Subject 时为真实课程代码，否则为哨兵 "Global"
    pub course_code: String,
    pub posted_by: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_scope_round_trip() {
        for s in ["Global", "Department", "Subject"] {
            let scope = AnnouncementScope::from_str(s).unwrap();
            assert_eq!(scope.to_string(), s);
        }
    }

    #[test]
    fn test_scope_is_case_sensitive() {
        assert!(AnnouncementScope::from_str("global").is_err());
        assert!(AnnouncementScope::from_str("SUBJECT").is_err());
    }
}
