use serde::Deserialize;

use super::entities::AnnouncementScope;

// 公告创建请求。posted_by 取自已认证身份，不信任请求体。
#[derive(Debug, Deserialize)]
pub struct CreateAnnouncementRequest {
    pub title: String,
    pub content: String,
    #[serde(rename = "type")]
    pub scope: AnnouncementScope,
    /// scope = Subject 时必填，其余情况忽略
    pub course_code: Option<String>,
}

// 公告列表查询参数
#[derive(Debug, Default, Deserialize)]
pub struct AnnouncementListParams {
    #[serde(rename = "type")]
    pub scope: Option<AnnouncementScope>,
    pub course_code: Option<String>,
}

/// 归一化后的公告筛选器（存储层据此构造查询）
#[derive(Debug, Clone, PartialEq)]
pub enum AnnouncementSelector {
    /// 仅 Global 公告（course_code 被忽略）
    GlobalOnly,
    /// 仅 Department 公告（对所有学生可见，不区分选课）
    DepartmentOnly,
    /// 指定课程的 Subject 公告（课程代码精确匹配，大小写敏感）
    Subject(String),
    /// 未指定范围、仅按课程代码匹配
    ByCourse(String),
    /// 全部公告
    All,
}

impl AnnouncementListParams {
    /// 按优先级归一化筛选条件：
    /// 1. type=Global      -> 仅 Global，忽略 course_code
    /// 2. type=Department  -> 仅 Department
    /// 3. type=Subject     -> 必须带 course_code，精确匹配
    /// 4. 未指定 type      -> 有 course_code 按课程匹配，否则返回全部
    pub fn resolve(&self) -> Result<AnnouncementSelector, &'static str> {
        match (&self.scope, &self.course_code) {
            (Some(AnnouncementScope::Global), _) => Ok(AnnouncementSelector::GlobalOnly),
            (Some(AnnouncementScope::Department), _) => Ok(AnnouncementSelector::DepartmentOnly),
            (Some(AnnouncementScope::Subject), Some(code)) if !code.is_empty() => {
                Ok(AnnouncementSelector::Subject(code.clone()))
            }
            (Some(AnnouncementScope::Subject), _) => {
                Err("Subject 范围查询必须携带 course_code")
            }
            (None, Some(code)) if !code.is_empty() => {
                Ok(AnnouncementSelector::ByCourse(code.clone()))
            }
            (None, _) => Ok(AnnouncementSelector::All),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(
        scope: Option<AnnouncementScope>,
        course_code: Option<&str>,
    ) -> AnnouncementListParams {
        AnnouncementListParams {
            scope,
            course_code: course_code.map(str::to_string),
        }
    }

    #[test]
    fn test_global_ignores_course_code() {
        let resolved = params(Some(AnnouncementScope::Global), Some("CS3401"))
            .resolve()
            .unwrap();
        assert_eq!(resolved, AnnouncementSelector::GlobalOnly);
    }

    #[test]
    fn test_department_visible_to_all() {
        let resolved = params(Some(AnnouncementScope::Department), None)
            .resolve()
            .unwrap();
        assert_eq!(resolved, AnnouncementSelector::DepartmentOnly);
    }

    #[test]
    fn test_subject_requires_course_code() {
        assert!(params(Some(AnnouncementScope::Subject), None)
            .resolve()
            .is_err());
        assert!(params(Some(AnnouncementScope::Subject), Some(""))
            .resolve()
            .is_err());

        let resolved = params(Some(AnnouncementScope::Subject), Some("CS3401"))
            .resolve()
            .unwrap();
        assert_eq!(
            resolved,
            AnnouncementSelector::Subject("CS3401".to_string())
        );
    }

    #[test]
    fn test_no_scope_falls_back_to_course_then_all() {
        assert_eq!(
            params(None, Some("MA3151")).resolve().unwrap(),
            AnnouncementSelector::ByCourse("MA3151".to_string())
        );
        assert_eq!(params(None, None).resolve().unwrap(), AnnouncementSelector::All);
    }
}
