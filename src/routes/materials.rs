use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::materials::requests::{CreateMaterialRequest, MaterialListParams};
use crate::models::users::entities::UserRole;
use crate::services::MaterialService;
use crate::utils::SafeCourseCode;

// 懒加载的全局 MaterialService 实例
static MATERIAL_SERVICE: Lazy<MaterialService> = Lazy::new(MaterialService::new_lazy);

// HTTP处理程序
pub async fn create_material(
    req: HttpRequest,
    material_data: web::Json<CreateMaterialRequest>,
) -> ActixResult<HttpResponse> {
    MATERIAL_SERVICE
        .create_material(material_data.into_inner(), &req)
        .await
}

pub async fn list_materials(
    req: HttpRequest,
    course_code: SafeCourseCode,
    query: web::Query<MaterialListParams>,
) -> ActixResult<HttpResponse> {
    MATERIAL_SERVICE
        .list_materials(&course_code, query.into_inner(), &req)
        .await
}

// 配置路由
pub fn configure_material_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/materials")
            .wrap(middlewares::RequireJWT)
            .route("/{course_code}", web::get().to(list_materials))
            .service(
                web::scope("")
                    .wrap(middlewares::RequireRole::new_any(UserRole::staff_roles()))
                    .route("", web::post().to(create_material)),
            ),
    );
}
