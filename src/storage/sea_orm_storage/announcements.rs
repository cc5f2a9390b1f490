//! 公告存储操作

use super::SeaOrmStorage;
use crate::entity::announcements::{ActiveModel, Column, Entity as Announcements};
use crate::errors::{PortalError, Result};
use crate::models::announcements::{
    entities::{Announcement, AnnouncementScope, GLOBAL_COURSE_SENTINEL},
    requests::{AnnouncementSelector, CreateAnnouncementRequest},
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 发布公告。非 Subject 公告的 course_code 落库为哨兵 "Global"。
    pub async fn create_announcement_impl(
        &self,
        posted_by: &str,
        req: CreateAnnouncementRequest,
    ) -> Result<Announcement> {
        let now = chrono::Utc::now().timestamp();

        let course_code = match req.scope {
            AnnouncementScope::Subject => req.course_code.unwrap_or_default(),
            _ => GLOBAL_COURSE_SENTINEL.to_string(),
        };

        let model = ActiveModel {
            title: Set(req.title),
            content: Set(req.content),
            scope: Set(req.scope.to_string()),
            course_code: Set(course_code),
            posted_by: Set(posted_by.to_string()),
            created_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("发布公告失败: {e}")))?;

        Ok(result.into_announcement())
    }

    /// 按归一化筛选器列出公告（id 升序 = 插入顺序，保证确定性）
    pub async fn list_announcements_impl(
        &self,
        selector: AnnouncementSelector,
    ) -> Result<Vec<Announcement>> {
        let mut select = Announcements::find();

        select = match selector {
            AnnouncementSelector::GlobalOnly => {
                select.filter(Column::Scope.eq(AnnouncementScope::GLOBAL))
            }
            AnnouncementSelector::DepartmentOnly => {
                select.filter(Column::Scope.eq(AnnouncementScope::DEPARTMENT))
            }
            AnnouncementSelector::Subject(code) => select
                .filter(Column::Scope.eq(AnnouncementScope::SUBJECT))
                .filter(Column::CourseCode.eq(code)),
            AnnouncementSelector::ByCourse(code) => select.filter(Column::CourseCode.eq(code)),
            AnnouncementSelector::All => select,
        };

        let announcements = select
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询公告列表失败: {e}")))?;

        Ok(announcements
            .into_iter()
            .map(|m| m.into_announcement())
            .collect())
    }
}
