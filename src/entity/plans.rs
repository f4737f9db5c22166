//! 辅导计划实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "plans")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub course_id: i64,
    pub instructor_id: i64,
    pub description: Option<String>,
    pub learning_target_id: Option<i64>,
    pub alt_learning_target: Option<String>,
    pub dosage: i32,
    pub exit_ticket_denominator: i32,
    pub homework_denominator: i32,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::courses::Entity",
        from = "Column::CourseId",
        to = "super::courses::Column::Id"
    )]
    Course,
    #[sea_orm(
        belongs_to = "super::instructors::Entity",
        from = "Column::InstructorId",
        to = "super::instructors::Column::Id"
    )]
    Instructor,
    #[sea_orm(
        belongs_to = "super::learning_targets::Entity",
        from = "Column::LearningTargetId",
        to = "super::learning_targets::Column::Id"
    )]
    LearningTarget,
    #[sea_orm(has_many = "super::reports::Entity")]
    Reports,
}

impl Related<super::courses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl Related<super::instructors::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Instructor.def()
    }
}

impl Related<super::learning_targets::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LearningTarget.def()
    }
}

impl Related<super::reports::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reports.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_plan(self) -> crate::models::plans::entities::Plan {
        use crate::models::plans::entities::Plan;
        use chrono::{DateTime, Utc};

        Plan {
            id: self.id,
            course_id: self.course_id,
            instructor_id: self.instructor_id,
            description: self.description,
            learning_target_id: self.learning_target_id,
            alt_learning_target: self.alt_learning_target,
            dosage: self.dosage,
            exit_ticket_denominator: self.exit_ticket_denominator,
            homework_denominator: self.homework_denominator,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
