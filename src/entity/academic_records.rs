//! 成绩考勤记录实体
//!
//! (student_roll_no, course_code) 复合唯一键，见迁移中的
//! idx_academic_records_student_course。

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "academic_records")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub student_roll_no: String,
    pub course_code: String,
    pub cia1_marks: i32,
    pub cia1_retest: i32,
    pub cia2_marks: i32,
    pub cia2_retest: i32,
    pub subject_attendance: i32,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::courses::Entity",
        from = "Column::CourseCode",
        to = "super::courses::Column::Code"
    )]
    Course,
}

impl Related<super::courses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型（派生字段在此计算）
impl Model {
    pub fn into_record(self) -> crate::models::marks::entities::MarksRecord {
        use crate::models::marks::entities::{MarksRecord, below_attendance_threshold};
        use chrono::{DateTime, Utc};

        MarksRecord {
            id: self.id,
            student_roll_no: self.student_roll_no,
            course_code: self.course_code,
            cia1_marks: self.cia1_marks,
            cia1_retest: self.cia1_retest,
            cia2_marks: self.cia2_marks,
            cia2_retest: self.cia2_retest,
            subject_attendance: self.subject_attendance,
            below_attendance_threshold: below_attendance_threshold(self.subject_attendance),
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
