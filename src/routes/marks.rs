use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::marks::requests::{
    CiaQuery, MarkSyncBatchRequest, MarkSyncRequest, SectionQuery,
};
use crate::models::users::entities::UserRole;
use crate::services::MarkService;

// 懒加载的全局 MarkService 实例
static MARK_SERVICE: Lazy<MarkService> = Lazy::new(MarkService::new_lazy);

// HTTP处理程序
pub async fn sync_marks(
    req: HttpRequest,
    sync_data: web::Json<MarkSyncRequest>,
) -> ActixResult<HttpResponse> {
    MARK_SERVICE.sync_marks(sync_data.into_inner(), &req).await
}

pub async fn sync_marks_batch(
    req: HttpRequest,
    batch_data: web::Json<MarkSyncBatchRequest>,
) -> ActixResult<HttpResponse> {
    MARK_SERVICE
        .sync_marks_batch(batch_data.into_inner(), &req)
        .await
}

pub async fn section_roster(
    req: HttpRequest,
    query: web::Query<SectionQuery>,
) -> ActixResult<HttpResponse> {
    MARK_SERVICE.section_roster(query.into_inner(), &req).await
}

pub async fn student_cia(
    req: HttpRequest,
    query: web::Query<CiaQuery>,
) -> ActixResult<HttpResponse> {
    MARK_SERVICE.student_cia(query.into_inner(), &req).await
}

// 配置路由
pub fn configure_mark_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/marks")
            .wrap(middlewares::RequireJWT)
            // 学生可以查询自己的跨课程记录（服务内部做自查限制）
            .route("/cia", web::get().to(student_cia))
            .service(
                web::scope("")
                    .wrap(middlewares::RequireRole::new_any(UserRole::staff_roles()))
                    .route("/sync", web::post().to(sync_marks))
                    .route("/sync/batch", web::post().to(sync_marks_batch))
                    .route("/section", web::get().to(section_roster)),
            ),
    );
}
