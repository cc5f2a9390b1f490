//! 课程资料存储操作

use super::SeaOrmStorage;
use crate::entity::materials::{ActiveModel, Column, Entity as Materials};
use crate::errors::{PortalError, Result};
use crate::models::materials::{
    entities::{Material, MaterialKind},
    requests::CreateMaterialRequest,
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 上传资料记录
    pub async fn create_material_impl(
        &self,
        posted_by: &str,
        req: CreateMaterialRequest,
    ) -> Result<Material> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            course_code: Set(req.course_code),
            kind: Set(req.kind.to_string()),
            title: Set(req.title),
            file_link: Set(req.file_link),
            posted_by: Set(posted_by.to_string()),
            created_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("创建资料记录失败: {e}")))?;

        Ok(result.into_material())
    }

    /// 按课程（可选类别）列出资料（id 升序 = 插入顺序）
    pub async fn list_materials_impl(
        &self,
        course_code: &str,
        kind: Option<MaterialKind>,
    ) -> Result<Vec<Material>> {
        let mut select = Materials::find().filter(Column::CourseCode.eq(course_code));

        // 类别收窄
        if let Some(kind) = kind {
            select = select.filter(Column::Kind.eq(kind.to_string()));
        }

        let materials = select
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询资料列表失败: {e}")))?;

        Ok(materials.into_iter().map(|m| m.into_material()).collect())
    }
}
