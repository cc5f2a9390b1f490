//! 课程与选课存储操作

use super::SeaOrmStorage;
use crate::entity::courses::{ActiveModel, Column, Entity as Courses};
use crate::entity::enrollments::{
    ActiveModel as EnrollmentActiveModel, Column as EnrollmentColumn, Entity as Enrollments,
};
use crate::errors::{PortalError, Result};
use crate::models::courses::{
    entities::{Course, Enrollment},
    requests::{CreateCourseRequest, EnrollStudentRequest},
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 创建课程
    pub async fn create_course_impl(&self, req: CreateCourseRequest) -> Result<Course> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            code: Set(req.code),
            title: Set(req.title),
            semester: Set(req.semester),
            credits: Set(req.credits),
            category: Set(req.category),
            faculty_staff_no: Set(req.faculty_staff_no),
            created_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("创建课程失败: {e}")))?;

        Ok(result.into_course())
    }

    /// 通过课程代码获取课程（精确匹配，大小写敏感）
    pub async fn get_course_by_code_impl(&self, code: &str) -> Result<Option<Course>> {
        let result = Courses::find()
            .filter(Column::Code.eq(code))
            .one(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询课程失败: {e}")))?;

        Ok(result.map(|m| m.into_course()))
    }

    /// 列出全部课程（按代码升序）
    pub async fn list_courses_impl(&self) -> Result<Vec<Course>> {
        let courses = Courses::find()
            .order_by_asc(Column::Code)
            .all(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询课程列表失败: {e}")))?;

        Ok(courses.into_iter().map(|m| m.into_course()).collect())
    }

    /// 学生选课（复合唯一键防止重复加入花名册）
    pub async fn enroll_student_impl(
        &self,
        course_code: &str,
        enroll: EnrollStudentRequest,
    ) -> Result<Enrollment> {
        let now = chrono::Utc::now().timestamp();

        let model = EnrollmentActiveModel {
            student_roll_no: Set(enroll.student_roll_no),
            student_name: Set(enroll.student_name),
            course_code: Set(course_code.to_string()),
            created_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("选课失败: {e}")))?;

        Ok(result.into_enrollment())
    }

    /// 课程花名册（按学号升序，行集稳定）
    pub async fn list_enrollments_impl(&self, course_code: &str) -> Result<Vec<Enrollment>> {
        let enrollments = Enrollments::find()
            .filter(EnrollmentColumn::CourseCode.eq(course_code))
            .order_by_asc(EnrollmentColumn::StudentRollNo)
            .all(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询花名册失败: {e}")))?;

        Ok(enrollments
            .into_iter()
            .map(|m| m.into_enrollment())
            .collect())
    }

    /// 查询某学生在某课程的选课记录
    pub async fn get_enrollment_impl(
        &self,
        student_roll_no: &str,
        course_code: &str,
    ) -> Result<Option<Enrollment>> {
        let result = Enrollments::find()
            .filter(EnrollmentColumn::StudentRollNo.eq(student_roll_no))
            .filter(EnrollmentColumn::CourseCode.eq(course_code))
            .one(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询选课记录失败: {e}")))?;

        Ok(result.map(|m| m.into_enrollment()))
    }
}
