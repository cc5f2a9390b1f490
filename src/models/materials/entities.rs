use serde::{Deserialize, Serialize};

// 课程资料类别（与前端标签页一一对应）
#[derive(Debug, Clone, Serialize, PartialEq)]
pub enum MaterialKind {
    LectureNotes,
    QuestionBank,
    Assignment,
    LabManual,
}

impl MaterialKind {
    pub const LECTURE_NOTES: &'static str = "Lecture Notes";
    pub const QUESTION_BANK: &'static str = "Question Bank";
    pub const ASSIGNMENT: &'static str = "Assignment";
    pub const LAB_MANUAL: &'static str = "Lab Manual";
}

impl<'de> Deserialize<'de> for MaterialKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            MaterialKind::LECTURE_NOTES => Ok(MaterialKind::LectureNotes),
            MaterialKind::QUESTION_BANK => Ok(MaterialKind::QuestionBank),
            MaterialKind::ASSIGNMENT => Ok(MaterialKind::Assignment),
            MaterialKind::LAB_MANUAL => Ok(MaterialKind::LabManual),
            _ => Err(serde::de::Error::custom(format!(
                "无效的资料类别: '{s}'. 支持: Lecture Notes, Question Bank, Assignment, Lab Manual"
            ))),
        }
    }
}

impl std::fmt::Display for MaterialKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MaterialKind::LectureNotes => write!(f, "{}", MaterialKind::LECTURE_NOTES),
            MaterialKind::QuestionBank => write!(f, "{}", MaterialKind::QUESTION_BANK),
            MaterialKind::Assignment => write!(f, "{}", MaterialKind::ASSIGNMENT),
            MaterialKind::LabManual => write!(f, "{}", MaterialKind::LAB_MANUAL),
        }
    }
}

impl std::str::FromStr for MaterialKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Lecture Notes" => Ok(MaterialKind::LectureNotes),
            "Question Bank" => Ok(MaterialKind::QuestionBank),
            "Assignment" => Ok(MaterialKind::Assignment),
            "Lab Manual" => Ok(MaterialKind::LabManual),
            _ => Err(format!("Invalid material kind: {s}")),
        }
    }
}

// 课程资料实体（创建后不可修改；文件本体由外部存储，只保存链接）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Material {
    pub id: i64,
    pub course_code: String,
    #[serde(rename = "type")]
    pub kind: MaterialKind,
    pub title: String,
    pub file_link: String,
    pub posted_by: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_kind_round_trip() {
        for s in ["Lecture Notes", "Question Bank", "Assignment", "Lab Manual"] {
            let kind = MaterialKind::from_str(s).unwrap();
            assert_eq!(kind.to_string(), s);
        }
    }

    #[test]
    fn test_unknown_kind_rejected() {
        assert!(MaterialKind::from_str("Slides").is_err());
    }
}
