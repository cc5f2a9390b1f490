use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 创建用户表
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Users::Username)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Users::PasswordHash).string().not_null())
                    .col(ColumnDef::new(Users::Role).string().not_null())
                    .col(ColumnDef::new(Users::Status).string().not_null())
                    .col(ColumnDef::new(Users::DisplayName).string().null())
                    .col(ColumnDef::new(Users::LastLogin).big_integer().null())
                    .col(ColumnDef::new(Users::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Users::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建课程表
        manager
            .create_table(
                Table::create()
                    .table(Courses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Courses::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Courses::Code)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Courses::Title).string().not_null())
                    .col(ColumnDef::new(Courses::Semester).integer().not_null())
                    .col(ColumnDef::new(Courses::Credits).integer().not_null())
                    .col(ColumnDef::new(Courses::Category).string().null())
                    .col(ColumnDef::new(Courses::FacultyStaffNo).string().not_null())
                    .col(ColumnDef::new(Courses::CreatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建选课表（课程花名册）
        manager
            .create_table(
                Table::create()
                    .table(Enrollments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Enrollments::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Enrollments::StudentRollNo)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Enrollments::StudentName).string().not_null())
                    .col(ColumnDef::new(Enrollments::CourseCode).string().not_null())
                    .col(
                        ColumnDef::new(Enrollments::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建成绩考勤记录表
        manager
            .create_table(
                Table::create()
                    .table(AcademicRecords::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AcademicRecords::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(AcademicRecords::StudentRollNo)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AcademicRecords::CourseCode)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AcademicRecords::Cia1Marks)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AcademicRecords::Cia1Retest)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AcademicRecords::Cia2Marks)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AcademicRecords::Cia2Retest)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AcademicRecords::SubjectAttendance)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AcademicRecords::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AcademicRecords::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建公告表
        manager
            .create_table(
                Table::create()
                    .table(Announcements::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Announcements::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Announcements::Title).string().not_null())
                    .col(
                        ColumnDef::new(Announcements::Content)
                            .text()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Announcements::Scope).string().not_null())
                    .col(
                        ColumnDef::new(Announcements::CourseCode)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Announcements::PostedBy).string().not_null())
                    .col(
                        ColumnDef::new(Announcements::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建课程资料表
        manager
            .create_table(
                Table::create()
                    .table(Materials::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Materials::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Materials::CourseCode).string().not_null())
                    .col(ColumnDef::new(Materials::Kind).string().not_null())
                    .col(ColumnDef::new(Materials::Title).string().not_null())
                    .col(ColumnDef::new(Materials::FileLink).string().not_null())
                    .col(ColumnDef::new(Materials::PostedBy).string().not_null())
                    .col(
                        ColumnDef::new(Materials::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建索引
        // 选课表：同一学生同一课程只允许一条
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_enrollments_student_course")
                    .table(Enrollments::Table)
                    .col(Enrollments::StudentRollNo)
                    .col(Enrollments::CourseCode)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_enrollments_course_code")
                    .table(Enrollments::Table)
                    .col(Enrollments::CourseCode)
                    .to_owned(),
            )
            .await?;

        // 成绩记录表：(student_roll_no, course_code) 复合唯一键
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_academic_records_student_course")
                    .table(AcademicRecords::Table)
                    .col(AcademicRecords::StudentRollNo)
                    .col(AcademicRecords::CourseCode)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_academic_records_course_code")
                    .table(AcademicRecords::Table)
                    .col(AcademicRecords::CourseCode)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_academic_records_student_roll_no")
                    .table(AcademicRecords::Table)
                    .col(AcademicRecords::StudentRollNo)
                    .to_owned(),
            )
            .await?;

        // 公告表索引
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_announcements_scope")
                    .table(Announcements::Table)
                    .col(Announcements::Scope)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_announcements_course_code")
                    .table(Announcements::Table)
                    .col(Announcements::CourseCode)
                    .to_owned(),
            )
            .await?;

        // 资料表索引
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_materials_course_code")
                    .table(Materials::Table)
                    .col(Materials::CourseCode)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 按照创建的相反顺序删除
        manager
            .drop_table(Table::drop().table(Materials::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Announcements::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(AcademicRecords::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Enrollments::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Courses::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Users {
    #[sea_orm(iden = "users")]
    Table,
    Id,
    Username,
    PasswordHash,
    Role,
    Status,
    DisplayName,
    LastLogin,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Courses {
    #[sea_orm(iden = "courses")]
    Table,
    Id,
    Code,
    Title,
    Semester,
    Credits,
    Category,
    FacultyStaffNo,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Enrollments {
    #[sea_orm(iden = "enrollments")]
    Table,
    Id,
    StudentRollNo,
    StudentName,
    CourseCode,
    CreatedAt,
}

#[derive(DeriveIden)]
enum AcademicRecords {
    #[sea_orm(iden = "academic_records")]
    Table,
    Id,
    StudentRollNo,
    CourseCode,
    Cia1Marks,
    Cia1Retest,
    Cia2Marks,
    Cia2Retest,
    SubjectAttendance,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Announcements {
    #[sea_orm(iden = "announcements")]
    Table,
    Id,
    Title,
    Content,
    Scope,
    CourseCode,
    PostedBy,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Materials {
    #[sea_orm(iden = "materials")]
    Table,
    Id,
    CourseCode,
    Kind,
    Title,
    FileLink,
    PostedBy,
    CreatedAt,
}
