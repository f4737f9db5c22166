//! 学习目标实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "learning_targets")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub code: String,
    pub description: Option<String>,
    pub standard_id: Option<i64>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::standards::Entity",
        from = "Column::StandardId",
        to = "super::standards::Column::Id"
    )]
    Standard,
    #[sea_orm(has_many = "super::plans::Entity")]
    Plans,
}

impl Related<super::standards::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Standard.def()
    }
}

impl Related<super::plans::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Plans.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_learning_target(self) -> crate::models::learning_targets::entities::LearningTarget {
        use crate::models::learning_targets::entities::LearningTarget;
        use chrono::{DateTime, Utc};

        LearningTarget {
            id: self.id,
            code: self.code,
            description: self.description,
            standard_id: self.standard_id,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
