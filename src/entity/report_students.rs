//! 报告学生明细实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "report_students")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub report_id: i64,
    pub student_id: i64,
    pub attendance: String,
    pub exit_ticket: Option<i32>,
    pub homework_effort: String,
    pub homework_accuracy: Option<i32>,
    pub quiz: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::reports::Entity",
        from = "Column::ReportId",
        to = "super::reports::Column::Id"
    )]
    Report,
    #[sea_orm(
        belongs_to = "super::students::Entity",
        from = "Column::StudentId",
        to = "super::students::Column::Id"
    )]
    Student,
}

impl Related<super::reports::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Report.def()
    }
}

impl Related<super::students::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_report_student(self) -> crate::models::reports::entities::ReportStudent {
        use crate::models::reports::entities::{Attendance, HomeworkEffort, ReportStudent};

        ReportStudent {
            id: self.id,
            report_id: self.report_id,
            student_id: self.student_id,
            attendance: self
                .attendance
                .parse::<Attendance>()
                .unwrap_or(Attendance::Absent),
            exit_ticket: self.exit_ticket,
            homework_effort: self
                .homework_effort
                .parse::<HomeworkEffort>()
                .unwrap_or(HomeworkEffort::Low),
            homework_accuracy: self.homework_accuracy,
            quiz: self.quiz,
        }
    }
}
