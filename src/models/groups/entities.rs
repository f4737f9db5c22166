use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 辅导小组实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/group.ts")]
pub struct Group {
    pub id: i64,
    pub code: String,
    pub section_id: i64,
    pub instructor_id: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

// 小组成员（随小组表单内联编辑）
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/group.ts")]
pub struct GroupStudentEntry {
    pub id: i64,
    pub student_id: i64,
    pub osis_number: String,
    pub first_name: String,
    pub last_name: String,
}
