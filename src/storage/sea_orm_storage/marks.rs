//! 成绩考勤记录存储操作
//!
//! 同一 (student_roll_no, course_code) 对至多一条记录；同步即「不存在则创建、
//! 存在则整体覆盖全部数值字段」。同一对上的并发写采取 last-write-wins，
//! 不加锁（实践中一门课的成绩录入是单写者）。

use super::SeaOrmStorage;
use crate::entity::academic_records::{ActiveModel, Column, Entity as AcademicRecords};
use crate::errors::{PortalError, Result};
use crate::models::marks::{entities::MarksRecord, requests::MarkSyncRequest};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 幂等 upsert：重复提交同一负载产生相同的落库状态
    pub async fn upsert_marks_record_impl(&self, sync: &MarkSyncRequest) -> Result<MarksRecord> {
        let now = chrono::Utc::now().timestamp();

        let existing = AcademicRecords::find()
            .filter(Column::StudentRollNo.eq(&sync.student_roll_no))
            .filter(Column::CourseCode.eq(&sync.course_code))
            .one(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询成绩记录失败: {e}")))?;

        let result = match existing {
            // 整体覆盖全部数值字段（不做部分合并）
            Some(record) => {
                let model = ActiveModel {
                    id: Set(record.id),
                    cia1_marks: Set(sync.cia1_marks),
                    cia1_retest: Set(sync.cia1_retest),
                    cia2_marks: Set(sync.cia2_marks),
                    cia2_retest: Set(sync.cia2_retest),
                    subject_attendance: Set(sync.subject_attendance),
                    updated_at: Set(now),
                    ..Default::default()
                };

                model
                    .update(&self.db)
                    .await
                    .map_err(|e| PortalError::database_operation(format!("更新成绩记录失败: {e}")))?
            }
            None => {
                let model = ActiveModel {
                    student_roll_no: Set(sync.student_roll_no.clone()),
                    course_code: Set(sync.course_code.clone()),
                    cia1_marks: Set(sync.cia1_marks),
                    cia1_retest: Set(sync.cia1_retest),
                    cia2_marks: Set(sync.cia2_marks),
                    cia2_retest: Set(sync.cia2_retest),
                    subject_attendance: Set(sync.subject_attendance),
                    created_at: Set(now),
                    updated_at: Set(now),
                    ..Default::default()
                };

                model
                    .insert(&self.db)
                    .await
                    .map_err(|e| PortalError::database_operation(format!("创建成绩记录失败: {e}")))?
            }
        };

        Ok(result.into_record())
    }

    /// 查询某 (学号, 课程) 对的记录
    pub async fn get_marks_record_impl(
        &self,
        student_roll_no: &str,
        course_code: &str,
    ) -> Result<Option<MarksRecord>> {
        let result = AcademicRecords::find()
            .filter(Column::StudentRollNo.eq(student_roll_no))
            .filter(Column::CourseCode.eq(course_code))
            .one(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询成绩记录失败: {e}")))?;

        Ok(result.map(|m| m.into_record()))
    }

    /// 某课程的全部记录（按学号升序）
    pub async fn list_marks_by_course_impl(&self, course_code: &str) -> Result<Vec<MarksRecord>> {
        let records = AcademicRecords::find()
            .filter(Column::CourseCode.eq(course_code))
            .order_by_asc(Column::StudentRollNo)
            .all(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询课程成绩失败: {e}")))?;

        Ok(records.into_iter().map(|m| m.into_record()).collect())
    }

    /// 某学生跨课程的全部记录（按课程代码升序）
    pub async fn list_marks_by_student_impl(
        &self,
        student_roll_no: &str,
    ) -> Result<Vec<MarksRecord>> {
        let records = AcademicRecords::find()
            .filter(Column::StudentRollNo.eq(student_roll_no))
            .order_by_asc(Column::CourseCode)
            .all(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询学生成绩失败: {e}")))?;

        Ok(records.into_iter().map(|m| m.into_record()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sync_request(roll_no: &str, course_code: &str, attendance: i32) -> MarkSyncRequest {
        MarkSyncRequest {
            student_roll_no: roll_no.to_string(),
            course_code: course_code.to_string(),
            cia1_marks: 55,
            cia1_retest: 0,
            cia2_marks: 48,
            cia2_retest: 0,
            subject_attendance: attendance,
        }
    }

    #[tokio::test]
    async fn test_upsert_is_idempotent() {
        let storage = SeaOrmStorage::new_in_memory().await;
        let req = sync_request("21CS001", "CS3401", 80);

        let first = storage.upsert_marks_record_impl(&req).await.unwrap();
        let second = storage.upsert_marks_record_impl(&req).await.unwrap();

        // 重复提交同一负载：同一行、同一数值，不产生新行
        assert_eq!(first.id, second.id);
        assert_eq!(second.cia1_marks, 55);
        assert_eq!(second.subject_attendance, 80);

        let all = storage.list_marks_by_course_impl("CS3401").await.unwrap();
        assert_eq!(all.len(), 1);
    }

    #[tokio::test]
    async fn test_overwrite_flips_attendance_flag() {
        let storage = SeaOrmStorage::new_in_memory().await;

        let created = storage
            .upsert_marks_record_impl(&sync_request("21CS001", "CS3401", 80))
            .await
            .unwrap();
        assert!(!created.below_attendance_threshold);

        // 覆盖为红线以下的考勤，派生标志随之翻转
        storage
            .upsert_marks_record_impl(&sync_request("21CS001", "CS3401", 60))
            .await
            .unwrap();

        let stored = storage
            .get_marks_record_impl("21CS001", "CS3401")
            .await
            .unwrap()
            .expect("record should exist after sync");
        assert_eq!(stored.id, created.id);
        assert_eq!(stored.subject_attendance, 60);
        assert!(stored.below_attendance_threshold);
    }

    #[tokio::test]
    async fn test_records_unique_per_student_course_pair() {
        let storage = SeaOrmStorage::new_in_memory().await;

        // 同一学生两门课、同一门课两名学生互不干扰
        storage
            .upsert_marks_record_impl(&sync_request("21CS001", "CS3401", 80))
            .await
            .unwrap();
        storage
            .upsert_marks_record_impl(&sync_request("21CS002", "CS3401", 70))
            .await
            .unwrap();
        storage
            .upsert_marks_record_impl(&sync_request("21CS001", "MA3151", 90))
            .await
            .unwrap();

        let by_course = storage.list_marks_by_course_impl("CS3401").await.unwrap();
        assert_eq!(by_course.len(), 2);
        let by_student = storage.list_marks_by_student_impl("21CS001").await.unwrap();
        assert_eq!(by_student.len(), 2);

        // 覆盖其中一对，总行数不变
        storage
            .upsert_marks_record_impl(&sync_request("21CS001", "CS3401", 50))
            .await
            .unwrap();
        let after = storage.list_marks_by_course_impl("CS3401").await.unwrap();
        assert_eq!(after.len(), 2);
    }
}
