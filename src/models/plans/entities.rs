use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 辅导计划实体
//
// learning_target_id 为空时，导出以 alt_learning_target 文本代替。
// dosage 与两个分母会原样进入导出列。
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/plan.ts")]
pub struct Plan {
    pub id: i64,
    pub course_id: i64,
    pub instructor_id: i64,
    pub description: Option<String>,
    pub learning_target_id: Option<i64>,
    pub alt_learning_target: Option<String>,
    pub dosage: i32,
    pub exit_ticket_denominator: i32,
    pub homework_denominator: i32,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
