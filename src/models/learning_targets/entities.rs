use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 课程标准实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/learning_target.ts")]
pub struct Standard {
    pub id: i64,
    pub code: String,
    pub description: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

// 学习目标实体（可挂靠某条课程标准）
//
// code 会进入报告导出的 "Learning Target Notes" 列。
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/learning_target.ts")]
pub struct LearningTarget {
    pub id: i64,
    pub code: String,
    pub description: Option<String>,
    pub standard_id: Option<i64>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
