use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, guard, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::courses::requests::{CreateCourseRequest, EnrollStudentRequest};
use crate::models::users::entities::UserRole;
use crate::services::CourseService;
use crate::utils::SafeCourseCode;

// 懒加载的全局 CourseService 实例
static COURSE_SERVICE: Lazy<CourseService> = Lazy::new(CourseService::new_lazy);

// HTTP处理程序
pub async fn list_courses(req: HttpRequest) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.list_courses(&req).await
}

pub async fn create_course(
    req: HttpRequest,
    course_data: web::Json<CreateCourseRequest>,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE
        .create_course(course_data.into_inner(), &req)
        .await
}

pub async fn enroll_student(
    req: HttpRequest,
    course_code: SafeCourseCode,
    enroll_data: web::Json<EnrollStudentRequest>,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE
        .enroll_student(&course_code, enroll_data.into_inner(), &req)
        .await
}

pub async fn list_enrollments(
    req: HttpRequest,
    course_code: SafeCourseCode,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.list_enrollments(&course_code, &req).await
}

// 配置路由
pub fn configure_course_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/courses")
            .wrap(middlewares::RequireJWT)
            // 任何已认证账户都可以浏览课程目录
            .route("", web::get().to(list_courses))
            .service(
                web::resource("")
                    .guard(guard::Post())
                    .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles()))
                    .to(create_course),
            )
            // 同一路径 GET/POST 角色要求不同，用 resource 级 guard 区分
            .service(
                web::resource("/{course_code}/enrollments")
                    .guard(guard::Get())
                    .wrap(middlewares::RequireRole::new_any(UserRole::staff_roles()))
                    .to(list_enrollments),
            )
            .service(
                web::resource("/{course_code}/enrollments")
                    .guard(guard::Post())
                    .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles()))
                    .to(enroll_student),
            ),
    );
}
